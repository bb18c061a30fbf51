//! The plugin surface through which a host engine reaches the password type.
//!
//! A [`TypeRegistry`] is built once from a [`RegistryConfig`], validated
//! against the host's reserved id space, and is read-only afterwards:
//!
//! ```
//! use custype_registry::TypeRegistry;
//! use custype_types::Value;
//!
//! let registry = TypeRegistry::new()?;
//! let id = registry.resolve_by_name("PASSWORD").unwrap().type_id;
//! let value = registry.convert(Value::from("Secret42"), id)?;
//! assert_eq!(value.as_password().unwrap().as_str(), "Secret42");
//! # Ok::<(), custype_result::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod registry;

pub use config::RegistryConfig;
pub use registry::TypeRegistry;
