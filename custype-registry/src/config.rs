//! Registry configuration.

use custype_result::{Error, Result};
use custype_types::{
    BUILTIN_TYPE_ID_MAX, DataTypeId, MAX_BUILTIN_SORT_PRECEDENCE, PASSWORD_DISPLAY_WIDTH,
    PASSWORD_SORT_PRECEDENCE, PASSWORD_TYPE_ID, PASSWORD_TYPE_NAME, TypeDescriptor, ValueType,
};

/// Options for registering the password type.
///
/// Defaults reproduce the standard constants (id `1001`, name `password`,
/// precedence `100_000`, display width `49`). Values are checked once, by
/// [`TypeRegistry::with_config`](crate::TypeRegistry::with_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub type_id: DataTypeId,
    pub name: String,
    pub sort_precedence: i32,
    pub display_width: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            type_id: PASSWORD_TYPE_ID,
            name: PASSWORD_TYPE_NAME.to_string(),
            sort_precedence: PASSWORD_SORT_PRECEDENCE,
            display_width: PASSWORD_DISPLAY_WIDTH,
        }
    }
}

impl RegistryConfig {
    pub fn with_type_id(mut self, type_id: DataTypeId) -> Self {
        self.type_id = type_id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_sort_precedence(mut self, sort_precedence: i32) -> Self {
        self.sort_precedence = sort_precedence;
        self
    }

    pub fn with_display_width(mut self, display_width: u32) -> Self {
        self.display_width = display_width;
        self
    }

    /// Check the options against the host's reserved id and precedence space.
    pub fn validate(&self) -> Result<()> {
        if self.type_id <= BUILTIN_TYPE_ID_MAX {
            return Err(Error::ReservedTypeId(self.type_id));
        }
        if self.sort_precedence <= MAX_BUILTIN_SORT_PRECEDENCE {
            return Err(Error::InvalidArgumentError(format!(
                "sort precedence {} must exceed the built-in maximum {}",
                self.sort_precedence, MAX_BUILTIN_SORT_PRECEDENCE
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::InvalidArgumentError(
                "custom type name must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Validate and build the descriptor. The name is stored lowercased.
    pub fn into_descriptor(self) -> Result<TypeDescriptor> {
        self.validate()?;
        Ok(TypeDescriptor {
            type_id: self.type_id,
            name: self.name.to_lowercase(),
            sort_precedence: self.sort_precedence,
            display_width: self.display_width,
            host_sql_type: ValueType::JavaObject,
        })
    }
}
