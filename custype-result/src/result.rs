use crate::error::Error;

/// Result type alias used throughout custype.
///
/// Shorthand for `std::result::Result<T, Error>`. Every fallible operation in
/// the workspace returns this type.
pub type Result<T> = std::result::Result<T, Error>;
