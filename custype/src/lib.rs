//! custype: a pluggable custom value type for relational engines.
//!
//! This crate is the entry point for the workspace. It re-exports the type
//! registry, the password scalar and codec, and the RANGE aggregate from the
//! underlying `custype-*` crates.
//!
//! # Quick Start
//!
//! ```rust
//! use custype::{TypeRegistry, Value, ValueType};
//!
//! let registry = TypeRegistry::new()?;
//! let password_id = registry.resolve_by_name("password").unwrap().type_id;
//!
//! let value = registry.convert(Value::from("Secret42"), password_id)?;
//! let blob = registry.convert(value.clone(), ValueType::Bytes.id())?;
//! assert_eq!(registry.convert(blob, password_id)?, value);
//! # Ok::<(), custype::Error>(())
//! ```
//!
//! # Architecture
//!
//! - **Results** (`custype-result`): the unified [`Error`] enum.
//! - **Types** (`custype-types`): [`ValueType`], [`Value`], [`Password`], [`TypeDescriptor`].
//! - **Codec** (`custype-codec`): [`ScalarCodec`] conversions in and out of the password type.
//! - **Registry** (`custype-registry`): [`TypeRegistry`] lookups and coercion precedence.
//! - **Aggregate** (`custype-aggregate`): [`RangeAccumulator`] and the row protocol.
//!
//! The [`shell`] module backs the `custype` binary.

pub mod shell;

pub use custype_aggregate::{
    AggregateFunction, RangeAccumulator, RangeAggregate, RangeResult, RangeStream, RangeValue,
};
pub use custype_codec::ScalarCodec;
pub use custype_registry::{RegistryConfig, TypeRegistry};
pub use custype_result::{Error, Result, ValidationError};
pub use custype_types::{
    DataTypeId, DetachedSession, ObjectSerializer, Password, Session, TypeDescriptor, Value,
    ValueType,
};
