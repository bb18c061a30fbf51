//! Type identifiers shared across custype crates.
//!
//! The host engine numbers its built-in scalar kinds with small integers.
//! Custom types must pick ids outside that space, so the reserved range is
//! spelled out here once and checked by the registry at construction.

use std::fmt;

/// Stable numeric identifier of a value type.
///
/// # Special Values
///
/// - `0..=BUILTIN_TYPE_ID_MAX` is reserved for the host's built-in kinds
/// - Custom types receive ids above that range (the password type uses `1001`)
pub type DataTypeId = u32;

/// Upper bound (inclusive) of the host's reserved built-in id range.
pub const BUILTIN_TYPE_ID_MAX: DataTypeId = 999;

/// Highest sort precedence any built-in kind carries.
///
/// A custom type must rank strictly above this to win implicit coercion
/// against every built-in.
pub const MAX_BUILTIN_SORT_PRECEDENCE: i32 = ValueType::String.builtin_precedence();

/// Kind tag of a [`Value`](crate::Value).
///
/// This is a simple, C-like tag that is cheap to copy and compare. Built-in
/// ids follow the host's numbering; everything else is [`ValueType::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// SQL NULL.
    Null,
    /// Boolean truth value.
    Boolean,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    BigInt,
    /// 64-bit IEEE float.
    Double,
    /// Raw byte sequence.
    Bytes,
    /// UTF-8 text.
    String,
    /// Opaque serialized object blob.
    JavaObject,
    /// A registered custom type, identified by its id.
    Custom(DataTypeId),
}

impl ValueType {
    /// All built-in kinds, in id order.
    pub const BUILTINS: [ValueType; 8] = [
        ValueType::Null,
        ValueType::Boolean,
        ValueType::Int,
        ValueType::BigInt,
        ValueType::Double,
        ValueType::Bytes,
        ValueType::String,
        ValueType::JavaObject,
    ];

    /// Numeric id of this kind.
    pub const fn id(self) -> DataTypeId {
        match self {
            ValueType::Null => 0,
            ValueType::Boolean => 1,
            ValueType::Int => 4,
            ValueType::BigInt => 5,
            ValueType::Double => 7,
            ValueType::Bytes => 12,
            ValueType::String => 13,
            ValueType::JavaObject => 19,
            ValueType::Custom(id) => id,
        }
    }

    /// Map an id back to a kind. Ids that are not built-in become `Custom`.
    pub fn from_id(id: DataTypeId) -> Self {
        Self::BUILTINS
            .into_iter()
            .find(|builtin| builtin.id() == id)
            .unwrap_or(ValueType::Custom(id))
    }

    pub const fn is_builtin(self) -> bool {
        !matches!(self, ValueType::Custom(_))
    }

    /// Lowercase name of a built-in kind, `None` for custom kinds.
    pub const fn builtin_name(self) -> Option<&'static str> {
        match self {
            ValueType::Null => Some("null"),
            ValueType::Boolean => Some("boolean"),
            ValueType::Int => Some("int"),
            ValueType::BigInt => Some("bigint"),
            ValueType::Double => Some("double"),
            ValueType::Bytes => Some("bytes"),
            ValueType::String => Some("string"),
            ValueType::JavaObject => Some("java_object"),
            ValueType::Custom(_) => None,
        }
    }

    /// Sort precedence of a built-in kind. Custom kinds report `0` here; their
    /// precedence lives in the registry's descriptor.
    pub const fn builtin_precedence(self) -> i32 {
        match self {
            ValueType::Null => 1,
            ValueType::Boolean => 10,
            ValueType::Int => 21,
            ValueType::BigInt => 22,
            ValueType::Double => 25,
            ValueType::JavaObject => 30,
            ValueType::Bytes => 31,
            ValueType::String => 40,
            ValueType::Custom(_) => 0,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "type:{}", self.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_id() {
        for builtin in ValueType::BUILTINS {
            assert_eq!(ValueType::from_id(builtin.id()), builtin);
            assert!(builtin.id() <= BUILTIN_TYPE_ID_MAX);
        }
        assert_eq!(ValueType::from_id(1001), ValueType::Custom(1001));
        assert_eq!(ValueType::from_id(2), ValueType::Custom(2));
    }

    #[test]
    fn string_has_highest_builtin_precedence() {
        for builtin in ValueType::BUILTINS {
            assert!(builtin.builtin_precedence() <= MAX_BUILTIN_SORT_PRECEDENCE);
        }
    }

    #[test]
    fn custom_kinds_display_by_id() {
        assert_eq!(ValueType::Custom(1001).to_string(), "type:1001");
        assert_eq!(ValueType::JavaObject.to_string(), "java_object");
    }
}
