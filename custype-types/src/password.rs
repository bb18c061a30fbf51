//! The password scalar: a string that passed validation.
//!
//! A [`Password`] only exists if its string satisfied every predicate below,
//! checked in order with the first failure reported:
//!
//! 1. at least [`Password::MIN_LENGTH`] characters
//! 2. at least one character that changes when the string is lower-cased
//! 3. at least one character that changes when the string is upper-cased
//! 4. at least one ASCII decimal digit
//!
//! The raw string is kept exactly as given. There is no case folding or
//! trimming, so `Password::parse(s)?.as_str() == s` always holds.

use std::fmt;
use std::str::FromStr;

use custype_result::{Result, ValidationError};

/// Validated, immutable password string.
///
/// Equality, ordering and hashing all follow the canonical string, so
/// passwords sort lexicographically and group by content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Password(String);

impl Password {
    /// Minimum number of characters (Unicode scalar values).
    pub const MIN_LENGTH: usize = 7;

    /// Validate `raw` and wrap it unchanged.
    pub fn parse(raw: &str) -> Result<Self> {
        validate(raw)?;
        Ok(Password(raw.to_owned()))
    }

    /// Canonical string form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Concatenate two passwords.
    ///
    /// Both halves already hold an upper case letter, a lower case letter and a
    /// digit, and the combined length is at least twice the minimum, so the
    /// result satisfies every predicate without re-parsing.
    pub fn concat(&self, other: &Password) -> Password {
        let mut joined = String::with_capacity(self.0.len() + other.0.len());
        joined.push_str(&self.0);
        joined.push_str(&other.0);
        debug_assert!(validate(&joined).is_ok());
        Password(joined)
    }
}

/// Run the predicates against `raw` without allocating a [`Password`].
pub fn validate(raw: &str) -> std::result::Result<(), ValidationError> {
    if raw.chars().count() < Password::MIN_LENGTH {
        return Err(ValidationError::TooShort {
            min: Password::MIN_LENGTH,
        });
    }
    if raw == raw.to_lowercase() {
        return Err(ValidationError::MissingUppercase);
    }
    if raw == raw.to_uppercase() {
        return Err(ValidationError::MissingLowercase);
    }
    if !raw.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::MissingDigit);
    }
    Ok(())
}

impl FromStr for Password {
    type Err = custype_result::Error;

    fn from_str(s: &str) -> Result<Self> {
        Password::parse(s)
    }
}

impl TryFrom<String> for Password {
    type Error = custype_result::Error;

    /// Validate an owned string, reusing its allocation on success.
    fn try_from(raw: String) -> Result<Self> {
        validate(&raw)?;
        Ok(Password(raw))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use custype_result::Error;

    fn rejection(raw: &str) -> ValidationError {
        match Password::parse(raw) {
            Err(Error::Validation(reason)) => reason,
            other => panic!("expected validation failure for {raw:?}, got {other:?}"),
        }
    }

    #[test]
    fn short_strings_are_too_short() {
        for raw in ["", "a", "Ab1", "Abcde1"] {
            assert_eq!(rejection(raw), ValidationError::TooShort { min: 7 });
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Six characters, twelve bytes.
        assert_eq!(rejection("Ää1ßéè"), ValidationError::TooShort { min: 7 });
    }

    #[test]
    fn predicates_fail_in_order() {
        assert_eq!(rejection("abcdefg1"), ValidationError::MissingUppercase);
        assert_eq!(rejection("1234567"), ValidationError::MissingUppercase);
        assert_eq!(rejection("ABCDEFG1"), ValidationError::MissingLowercase);
        assert_eq!(rejection("Abcdefgh"), ValidationError::MissingDigit);
    }

    #[test]
    fn valid_strings_are_kept_verbatim() {
        for raw in ["Passw0rd", "  Spaced 9  ", "ÄbcdefG7", "aaaaaaA1"] {
            let password = Password::parse(raw).unwrap();
            assert_eq!(password.as_str(), raw);
            assert_eq!(password.to_string(), raw);
        }
    }

    #[test]
    fn try_from_owned_string_matches_parse() {
        let owned = Password::try_from(String::from("Secret42")).unwrap();
        assert_eq!(owned, Password::parse("Secret42").unwrap());
        assert!(Password::try_from(String::from("secret42")).is_err());
    }

    #[test]
    fn concat_joins_canonical_strings() {
        let a: Password = "Alpha123".parse().unwrap();
        let b: Password = "Bravo456".parse().unwrap();
        let joined = a.concat(&b);
        assert_eq!(joined.as_str(), "Alpha123Bravo456");
        assert!(validate(joined.as_str()).is_ok());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Password::parse("Apple123").unwrap();
        let b = Password::parse("Banana12").unwrap();
        assert!(a < b);
        assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);
    }
}
