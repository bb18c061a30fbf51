use std::fmt;
use thiserror::Error;

/// Reason a raw string was rejected as a password.
///
/// Predicates are checked in declaration order and the first failure wins,
/// so a short all-lowercase string reports [`ValidationError::TooShort`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Fewer than the minimum number of characters.
    #[error("password must be at least {min} characters long")]
    TooShort { min: usize },

    /// Lower-casing the whole string changes nothing.
    #[error("password must contain at least one upper case letter")]
    MissingUppercase,

    /// Upper-casing the whole string changes nothing.
    #[error("password must contain at least one lower case letter")]
    MissingLowercase,

    /// No decimal digit anywhere in the string.
    #[error("password must contain at least one digit")]
    MissingDigit,
}

/// Unified error type for all custype operations.
///
/// # Thread Safety
///
/// `Error` is `Send + Sync`; registry lookups are shared across threads and
/// their failures travel with them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A raw string failed password validation.
    ///
    /// Raised synchronously by parsing, usually on a text-to-password
    /// conversion or literal construction path.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No mapping is defined between the source and target value kinds.
    ///
    /// Both sides are rendered by name (e.g. `"boolean"`, `"password"`).
    #[error("data conversion error: cannot convert {from} to {to}")]
    UnsupportedConversion { from: String, to: String },

    /// The serialize/deserialize boundary failed.
    ///
    /// Wraps the message of the underlying serializer. Produced when a blob
    /// cannot be decoded into a password or a password cannot be encoded.
    #[error("serialization failure: {0}")]
    Serialization(String),

    /// Lookup by id or name found no registered descriptor.
    #[error("unknown data type: {0}")]
    UnknownType(String),

    /// An aggregate received values of incompatible kinds in one accumulation.
    ///
    /// The accumulator fixes its kind on the first value; anything else after
    /// that is rejected rather than mis-compared.
    #[error("mixed kind input: accumulator holds {expected} values, got {got}")]
    MixedKindInput {
        expected: &'static str,
        got: &'static str,
    },

    /// A configured custom type id falls inside the host's built-in id range.
    #[error("type id {0} is reserved for built-in types")]
    ReservedTypeId(u32),

    /// Arrow library error while reading column chunks or building results.
    ///
    /// Stored as the rendered message so `Error` stays `Clone + PartialEq`.
    #[error("Arrow error: {0}")]
    Arrow(String),

    /// Invalid argument or configuration value.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// Internal error indicating a bug or unexpected state.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl From<arrow::error::ArrowError> for Error {
    fn from(err: arrow::error::ArrowError) -> Self {
        Error::Arrow(err.to_string())
    }
}

impl Error {
    /// Create a serialization error from any displayable error.
    ///
    /// # Examples
    ///
    /// ```
    /// use custype_result::Error;
    ///
    /// let err = Error::serialization("unexpected end of input");
    /// assert!(matches!(err, Error::Serialization(msg) if msg.contains("end of input")));
    /// ```
    #[inline]
    pub fn serialization<E: fmt::Display>(err: E) -> Self {
        Error::Serialization(err.to_string())
    }

    /// Create an unknown type error for an id or name.
    ///
    /// # Examples
    ///
    /// ```
    /// use custype_result::Error;
    ///
    /// let err = Error::unknown_type(format_args!("type:{}", 42));
    /// assert_eq!(err.to_string(), "unknown data type: type:42");
    /// ```
    #[inline]
    pub fn unknown_type<D: fmt::Display>(what: D) -> Self {
        Error::UnknownType(what.to_string())
    }

    /// Create an unsupported conversion error between two named kinds.
    #[inline]
    pub fn unsupported_conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        Error::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }
}
