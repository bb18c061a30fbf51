use std::any::{Any, TypeId};
use std::sync::Arc;

use custype_codec::ScalarCodec;
use custype_result::{Error, Result};
use custype_types::{
    BitcodeSerializer, DataTypeId, ObjectSerializer, Password, TypeDescriptor, TypeInfo, Value,
    ValueType,
};

use crate::config::RegistryConfig;

/// Plugin surface the host engine calls to reach the password type.
///
/// Holds exactly one [`TypeDescriptor`] and the [`ScalarCodec`] for its id.
/// Nothing changes after construction, so a registry can be shared behind an
/// `Arc` and read from any number of threads without locking.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    descriptor: TypeDescriptor,
    codec: ScalarCodec,
}

impl TypeRegistry {
    /// Registry with the default configuration and `bitcode` serializer.
    pub fn new() -> Result<Self> {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        Self::with_serializer(config, Arc::new(BitcodeSerializer))
    }

    /// Registry using a host-provided serialization boundary.
    pub fn with_serializer(
        config: RegistryConfig,
        serializer: Arc<dyn ObjectSerializer>,
    ) -> Result<Self> {
        let descriptor = config.into_descriptor()?;
        let codec = ScalarCodec::with_serializer(&descriptor, serializer);
        tracing::debug!(
            type_id = descriptor.type_id,
            name = %descriptor.name,
            sort_precedence = descriptor.sort_precedence,
            "registered custom type"
        );
        Ok(Self { descriptor, codec })
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    pub fn codec(&self) -> &ScalarCodec {
        &self.codec
    }

    /// Case-insensitive exact match against the registered name.
    pub fn resolve_by_name(&self, name: &str) -> Option<&TypeDescriptor> {
        (name.to_lowercase() == self.descriptor.name).then_some(&self.descriptor)
    }

    pub fn resolve_by_id(&self, id: DataTypeId) -> Option<&TypeDescriptor> {
        (id == self.descriptor.type_id).then_some(&self.descriptor)
    }

    fn require(&self, id: DataTypeId) -> Result<&TypeDescriptor> {
        self.resolve_by_id(id)
            .ok_or_else(|| Error::unknown_type(format_args!("type:{id}")))
    }

    /// Fully qualified Rust type name of the host object backing `id`.
    pub fn class_for(&self, id: DataTypeId) -> Result<&'static str> {
        self.require(id)?;
        Ok(std::any::type_name::<Password>())
    }

    /// Map a native runtime type to a registered id. Anything other than
    /// [`Password`] degrades to the generic object id.
    pub fn id_for_host_type<T: Any + ?Sized>(&self) -> DataTypeId {
        self.id_for_type_id(TypeId::of::<T>())
    }

    pub fn id_for_type_id(&self, host_type: TypeId) -> DataTypeId {
        if host_type == TypeId::of::<Password>() {
            self.descriptor.type_id
        } else {
            ValueType::JavaObject.id()
        }
    }

    pub fn sort_precedence(&self, id: DataTypeId) -> Result<i32> {
        Ok(self.require(id)?.sort_precedence)
    }

    /// Precedence of any kind: built-ins carry their own, custom kinds must be
    /// registered.
    pub fn precedence_of(&self, kind: ValueType) -> Result<i32> {
        match kind {
            ValueType::Custom(id) => self.sort_precedence(id),
            builtin => Ok(builtin.builtin_precedence()),
        }
    }

    /// Direction of implicit conversion when `a` and `b` meet in one
    /// expression: the kind with the higher precedence wins, `a` on ties.
    pub fn higher_type(&self, a: ValueType, b: ValueType) -> Result<ValueType> {
        if self.precedence_of(b)? > self.precedence_of(a)? {
            Ok(b)
        } else {
            Ok(a)
        }
    }

    /// Whether SUM-like operators may accumulate values of `id`.
    pub fn supports_accumulation(&self, id: DataTypeId) -> bool {
        id == self.descriptor.type_id
    }

    /// Type an accumulation over `id` produces. The password type accumulates
    /// into itself.
    pub fn accumulation_proof_type(&self, id: DataTypeId) -> Result<DataTypeId> {
        Ok(self.require(id)?.type_id)
    }

    pub fn type_info(&self, id: DataTypeId) -> Result<TypeInfo> {
        Ok(self.require(id)?.type_info())
    }

    /// Convert `source` to the kind numbered `target`. Custom ids must be
    /// registered.
    pub fn convert(&self, source: Value, target: DataTypeId) -> Result<Value> {
        let target = ValueType::from_id(target);
        if let ValueType::Custom(id) = target {
            self.require(id)?;
        }
        self.codec.convert(source, target)
    }

    /// The password inside `value`, converting first if needed.
    pub fn extract_password(&self, value: &Value) -> Result<Password> {
        self.codec.to_password(value)
    }

    /// Wrap a native password as an engine value of kind `id`. Unregistered
    /// ids get a serialized object blob.
    pub fn wrap_object(&self, id: DataTypeId, password: Password) -> Result<Value> {
        if id == self.descriptor.type_id {
            Ok(self.codec.wrap(password))
        } else {
            self.codec
                .convert_password(&password, ValueType::JavaObject)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_fail_for_unregistered_ids() {
        let registry = TypeRegistry::new().unwrap();
        assert!(registry.resolve_by_id(1002).is_none());
        assert_eq!(
            registry.sort_precedence(13).unwrap_err(),
            Error::UnknownType("type:13".into())
        );
        assert!(registry.class_for(0).is_err());
        assert!(registry.accumulation_proof_type(7).is_err());
        assert!(registry.type_info(1).is_err());
    }

    #[test]
    fn converting_to_an_unregistered_id_is_unknown_type() {
        let registry = TypeRegistry::new().unwrap();
        let err = registry.convert(Value::from("Secret42"), 2002).unwrap_err();
        assert_eq!(err, Error::UnknownType("type:2002".into()));
        let stray = Value::Custom {
            type_id: 2002,
            value: Password::parse("Secret42").unwrap(),
        };
        assert!(matches!(
            registry.convert(stray, 2002),
            Err(Error::UnknownType(_))
        ));
    }

    #[test]
    fn class_name_is_the_password_type() {
        let registry = TypeRegistry::new().unwrap();
        assert!(registry.class_for(1001).unwrap().ends_with("Password"));
    }

    #[test]
    fn host_types_map_to_ids() {
        let registry = TypeRegistry::new().unwrap();
        assert_eq!(registry.id_for_host_type::<Password>(), 1001);
        assert_eq!(registry.id_for_host_type::<String>(), ValueType::JavaObject.id());
        assert_eq!(registry.id_for_host_type::<str>(), ValueType::JavaObject.id());
    }
}
