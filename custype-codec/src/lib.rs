//! Conversion logic between the password scalar and the engine's built-in
//! value kinds.
//!
//! | Direction | Source / target kind | Behaviour |
//! |-----------|----------------------|-----------|
//! | into      | `java_object`, `bytes` | deserialize the blob, then validate |
//! | into      | `string`             | [`Password::parse`] |
//! | into      | `double`             | placeholder: the float's bytes are deserialized |
//! | out of    | `bytes`, `java_object` | serialize |
//! | out of    | `string`             | canonical string |
//! | out of    | `double`             | placeholder: serialized **bytes** |
//!
//! Every other pair fails with [`Error::UnsupportedConversion`]. A value that
//! already has the requested kind is returned as-is.
//!
//! The `double` rows are a degenerate fallback with no numeric meaning. They
//! do not round-trip: converting a password "to double" yields a `bytes`
//! value, and a real double almost never deserializes. Both paths log a
//! warning.

#![forbid(unsafe_code)]

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use custype_result::{Error, Result};
use custype_types::{
    BitcodeSerializer, DataTypeId, ObjectSerializer, Password, TypeDescriptor, Value, ValueType,
};
use rustc_hash::FxHasher;

/// Stateless converter for one custom type id.
///
/// Cloning is cheap; the serializer is shared behind an `Arc`.
#[derive(Clone)]
pub struct ScalarCodec {
    type_id: DataTypeId,
    type_name: Arc<str>,
    serializer: Arc<dyn ObjectSerializer>,
}

impl std::fmt::Debug for ScalarCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarCodec")
            .field("type_id", &self.type_id)
            .field("type_name", &self.type_name)
            .field("serializer", &"<object serializer>")
            .finish()
    }
}

impl ScalarCodec {
    /// Codec for `descriptor` using the default `bitcode` serializer.
    pub fn new(descriptor: &TypeDescriptor) -> Self {
        Self::with_serializer(descriptor, Arc::new(BitcodeSerializer))
    }

    pub fn with_serializer(
        descriptor: &TypeDescriptor,
        serializer: Arc<dyn ObjectSerializer>,
    ) -> Self {
        Self {
            type_id: descriptor.type_id,
            type_name: Arc::from(descriptor.name.as_str()),
            serializer,
        }
    }

    pub fn type_id(&self) -> DataTypeId {
        self.type_id
    }

    fn custom_type(&self) -> ValueType {
        ValueType::Custom(self.type_id)
    }

    /// Convert `source` to `target`.
    ///
    /// Only pairs with the custom type on one side are handled here;
    /// conversions between two built-in kinds belong to the host and are
    /// reported as unsupported.
    pub fn convert(&self, source: Value, target: ValueType) -> Result<Value> {
        let source_type = source.value_type();
        if source_type == target {
            return Ok(source);
        }
        tracing::trace!(
            from = %self.kind_name(source_type),
            to = %self.kind_name(target),
            "convert"
        );

        if target == self.custom_type() {
            let password = self.to_password(&source)?;
            return Ok(self.wrap(password));
        }
        match source {
            Value::Custom { type_id, value } if type_id == self.type_id => {
                self.convert_password(&value, target)
            }
            _ => Err(self.unsupported(source_type, target)),
        }
    }

    /// Conversion *into* the custom type, returning the bare password.
    pub fn to_password(&self, source: &Value) -> Result<Password> {
        match source {
            Value::Custom { type_id, value } if *type_id == self.type_id => Ok(value.clone()),
            Value::JavaObject(bytes) | Value::Bytes(bytes) => self.serializer.deserialize(bytes),
            Value::String(raw) => Password::parse(raw),
            Value::Double(v) => {
                tracing::warn!(
                    value = *v,
                    "converting double to {} through the blob placeholder path",
                    self.type_name
                );
                self.serializer.deserialize(&v.to_be_bytes())
            }
            other => Err(self.unsupported(other.value_type(), self.custom_type())),
        }
    }

    /// Conversion *out of* the custom type.
    pub fn convert_password(&self, password: &Password, target: ValueType) -> Result<Value> {
        match target {
            ValueType::Bytes => Ok(Value::Bytes(self.serializer.serialize(password)?)),
            ValueType::String => Ok(Value::String(password.as_str().to_owned())),
            ValueType::Double => {
                tracing::warn!(
                    "converting {} to double through the blob placeholder path; result is bytes",
                    self.type_name
                );
                Ok(Value::Bytes(self.serializer.serialize(password)?))
            }
            ValueType::JavaObject => Ok(Value::JavaObject(self.serializer.serialize(password)?)),
            other if other == self.custom_type() => Ok(self.wrap(password.clone())),
            other => Err(self.unsupported(self.custom_type(), other)),
        }
    }

    /// Wrap a password as an engine value of this codec's type.
    pub fn wrap(&self, password: Password) -> Value {
        Value::Custom {
            type_id: self.type_id,
            value: password,
        }
    }

    /// Concatenate two passwords. See [`Password::concat`].
    pub fn combine(&self, a: &Password, b: &Password) -> Password {
        a.concat(b)
    }

    /// Engine-level addition: both operands must be values of this type.
    pub fn add(&self, a: &Value, b: &Value) -> Result<Value> {
        match (self.custom_ref(a), self.custom_ref(b)) {
            (Some(a), Some(b)) => Ok(self.wrap(self.combine(a, b))),
            (None, _) => Err(self.unsupported(a.value_type(), self.custom_type())),
            (_, None) => Err(self.unsupported(b.value_type(), self.custom_type())),
        }
    }

    /// Lexicographic order over the canonical strings.
    pub fn compare(&self, a: &Password, b: &Password) -> Ordering {
        a.as_str().cmp(b.as_str())
    }

    /// Hash of the canonical string; equal passwords hash equally.
    pub fn hash(&self, password: &Password) -> u64 {
        let mut hasher = FxHasher::default();
        password.as_str().hash(&mut hasher);
        hasher.finish()
    }

    fn custom_ref<'a>(&self, value: &'a Value) -> Option<&'a Password> {
        match value {
            Value::Custom { type_id, value } if *type_id == self.type_id => Some(value),
            _ => None,
        }
    }

    fn kind_name(&self, kind: ValueType) -> String {
        if kind == self.custom_type() {
            self.type_name.to_string()
        } else {
            kind.to_string()
        }
    }

    fn unsupported(&self, from: ValueType, to: ValueType) -> Error {
        Error::unsupported_conversion(self.kind_name(from), self.kind_name(to))
    }
}
