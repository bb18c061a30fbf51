//! Static metadata for a registered custom type.

use crate::ids::{DataTypeId, ValueType};

/// Id the password type registers under by default.
pub const PASSWORD_TYPE_ID: DataTypeId = 1001;

/// Canonical (lowercase) name of the password type.
pub const PASSWORD_TYPE_NAME: &str = "password";

/// Default sort precedence of the password type: far above every built-in.
pub const PASSWORD_SORT_PRECEDENCE: i32 = 100_000;

/// Display size of a double value, used to size custom columns.
pub const DOUBLE_DISPLAY_SIZE: u32 = 24;

/// Default display width of the password type.
pub const PASSWORD_DISPLAY_WIDTH: u32 = DOUBLE_DISPLAY_SIZE * 2 + 1;

/// Immutable description of one custom type.
///
/// Built once by the registry and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    pub type_id: DataTypeId,
    /// Lowercase canonical name.
    pub name: String,
    /// Decides implicit-conversion direction when two differing types meet.
    pub sort_precedence: i32,
    pub display_width: u32,
    /// Built-in kind host clients see the type surface as.
    pub host_sql_type: ValueType,
}

impl TypeDescriptor {
    /// Descriptor for the password type with the default constants.
    pub fn password() -> Self {
        Self {
            type_id: PASSWORD_TYPE_ID,
            name: PASSWORD_TYPE_NAME.to_string(),
            sort_precedence: PASSWORD_SORT_PRECEDENCE,
            display_width: PASSWORD_DISPLAY_WIDTH,
            host_sql_type: ValueType::JavaObject,
        }
    }

    pub fn value_type(&self) -> ValueType {
        ValueType::Custom(self.type_id)
    }

    /// Column type information for this descriptor.
    pub fn type_info(&self) -> TypeInfo {
        TypeInfo {
            type_id: self.type_id,
            precision: 0,
            scale: 0,
            display_size: self.display_width,
        }
    }
}

/// Precision/scale/display triple the engine attaches to columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    pub type_id: DataTypeId,
    pub precision: u64,
    pub scale: u32,
    pub display_size: u32,
}
