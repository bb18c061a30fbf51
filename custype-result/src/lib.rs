//! Error types and result definitions for the custype value-type subsystem.
//!
//! Every crate in the workspace reports failures through the single [`Error`]
//! enum and the [`Result<T>`] alias defined here, so errors cross crate
//! boundaries with `?` and no conversion glue.
//!
//! # Error Categories
//!
//! - **Validation** ([`Error::Validation`]): a raw string failed one of the
//!   password predicates. The nested [`ValidationError`] names which one.
//! - **Conversion** ([`Error::UnsupportedConversion`], [`Error::Serialization`]):
//!   no mapping exists between two value kinds, or the serializer boundary failed.
//! - **Lookup** ([`Error::UnknownType`]): a type id or name is not registered.
//! - **Aggregation** ([`Error::MixedKindInput`]): an accumulator saw values of
//!   two different kinds.
//! - **Arrow** ([`Error::Arrow`]): column chunk decoding or result batch assembly.
//! - **Configuration** ([`Error::ReservedTypeId`], [`Error::InvalidArgumentError`]).
//!
//! None of these are transient. Callers never retry; the host translates each
//! variant into its own diagnostic.

pub mod error;
pub mod result;

pub use error::{Error, ValidationError};
pub use result::Result;
