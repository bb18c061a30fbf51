//! Core value types for the custype subsystem.
//!
//! - [`ValueType`] / [`DataTypeId`]: kind tags and the reserved built-in id range.
//! - [`Value`]: one engine scalar, built-in or custom.
//! - [`Password`]: the validated custom scalar.
//! - [`TypeDescriptor`]: static metadata for a registered custom type.
//! - [`ObjectSerializer`]: the blob serialization boundary.
//! - [`Session`]: opaque host session handle.

#![forbid(unsafe_code)]

pub mod descriptor;
pub mod ids;
pub mod password;
pub mod serializer;
pub mod session;
pub mod value;

pub use descriptor::{
    DOUBLE_DISPLAY_SIZE, PASSWORD_DISPLAY_WIDTH, PASSWORD_SORT_PRECEDENCE, PASSWORD_TYPE_ID,
    PASSWORD_TYPE_NAME, TypeDescriptor, TypeInfo,
};
pub use ids::{BUILTIN_TYPE_ID_MAX, DataTypeId, MAX_BUILTIN_SORT_PRECEDENCE, ValueType};
pub use password::Password;
pub use serializer::{BitcodeSerializer, ObjectSerializer};
pub use session::{DetachedSession, Session};
pub use value::Value;
