//! Engine-facing values: the built-in scalar kinds plus the custom password.

use std::fmt::Write as _;

use crate::ids::{DataTypeId, ValueType};
use crate::password::Password;

/// A single scalar value as exchanged with the host engine.
///
/// Every variant maps to exactly one [`ValueType`]. Blob-like variants own
/// their bytes so a converted value never borrows from its source.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Int(i32),
    BigInt(i64),
    Double(f64),
    Bytes(Vec<u8>),
    String(String),
    /// Serialized object blob, opaque to the engine.
    JavaObject(Vec<u8>),
    /// A password stored under the custom type id it was registered with.
    Custom { type_id: DataTypeId, value: Password },
}

impl Value {
    /// Kind tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Int(_) => ValueType::Int,
            Value::BigInt(_) => ValueType::BigInt,
            Value::Double(_) => ValueType::Double,
            Value::Bytes(_) => ValueType::Bytes,
            Value::String(_) => ValueType::String,
            Value::JavaObject(_) => ValueType::JavaObject,
            Value::Custom { type_id, .. } => ValueType::Custom(*type_id),
        }
    }

    /// The wrapped password, if this is a custom value.
    pub fn as_password(&self) -> Option<&Password> {
        match self {
            Value::Custom { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Render as a SQL literal.
    ///
    /// Strings and passwords are single-quoted with embedded quotes doubled;
    /// blobs render as `X'..'` hex literals.
    pub fn to_sql(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Boolean(true) => "TRUE".to_string(),
            Value::Boolean(false) => "FALSE".to_string(),
            Value::Int(v) => v.to_string(),
            Value::BigInt(v) => v.to_string(),
            Value::Double(v) => v.to_string(),
            Value::Bytes(bytes) | Value::JavaObject(bytes) => hex_literal(bytes),
            Value::String(s) => quote(s),
            Value::Custom { value, .. } => quote(value.as_str()),
        }
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

fn hex_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + 3);
    out.push_str("X'");
    for b in bytes {
        // Writing into a String cannot fail.
        let _ = write!(out, "{b:02x}");
    }
    out.push('\'');
    out
}

macro_rules! impl_from_for_value {
    ($variant:ident, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value!(Boolean, bool);
impl_from_for_value!(Int, i8, i16, i32);
impl_from_for_value!(BigInt, i64);
impl_from_for_value!(Double, f32, f64);
impl_from_for_value!(String, String);
impl_from_for_value!(Bytes, Vec<u8>);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}
