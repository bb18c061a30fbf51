//! Serialize/deserialize boundary used for blob conversions.
//!
//! The host normally owns object serialization; the codec only needs a pair
//! of functions that turn a [`Password`] into bytes and back. The default
//! [`BitcodeSerializer`] encodes a small tagged record with `bitcode`.
//!
//! Hosts whose serializers need per-call context (a session, a class loader)
//! capture it when constructing their implementation; the codec is stateless
//! and has no session to hand through, so the methods take none.

use bitcode::{Decode, Encode};
use custype_result::{Error, Result};

use crate::password::Password;

/// Object serialization pair consumed by the codec.
///
/// Implementations must be stateless or internally synchronized: the codec is
/// shared across threads.
pub trait ObjectSerializer: Send + Sync {
    fn serialize(&self, password: &Password) -> Result<Vec<u8>>;

    /// Decode a blob. The decoded string must still pass password
    /// validation; a blob is never a way around [`Password::parse`].
    fn deserialize(&self, bytes: &[u8]) -> Result<Password>;
}

/// Marks blobs written by [`BitcodeSerializer`] (`"CTPW"`).
const PASSWORD_RECORD_MAGIC: u32 = 0x4354_5057;

/// Encoding: serialized as a typed blob via `bitcode`.
#[derive(Debug, Clone, Encode, Decode)]
struct PasswordRecord {
    magic: u32,
    pwdstr: String,
}

/// Default serializer backed by `bitcode`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcodeSerializer;

impl ObjectSerializer for BitcodeSerializer {
    fn serialize(&self, password: &Password) -> Result<Vec<u8>> {
        let record = PasswordRecord {
            magic: PASSWORD_RECORD_MAGIC,
            pwdstr: password.as_str().to_owned(),
        };
        Ok(bitcode::encode(&record))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Password> {
        let record: PasswordRecord = bitcode::decode(bytes).map_err(Error::serialization)?;
        if record.magic != PASSWORD_RECORD_MAGIC {
            return Err(Error::Serialization(format!(
                "blob is not a password record (tag {:#010x})",
                record.magic
            )));
        }
        Password::try_from(record.pwdstr).map_err(|err| {
            Error::Serialization(format!("blob holds an invalid password: {err}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitcode_round_trip() {
        let password = Password::parse("Secret42").unwrap();
        let bytes = BitcodeSerializer.serialize(&password).unwrap();
        assert_eq!(BitcodeSerializer.deserialize(&bytes).unwrap(), password);
    }

    #[test]
    fn garbage_is_a_serialization_error() {
        let err = BitcodeSerializer.deserialize(&[0xde, 0xad]).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
        let err = BitcodeSerializer.deserialize(&[]).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn foreign_records_are_rejected() {
        let bytes = bitcode::encode(&PasswordRecord {
            magic: 7,
            pwdstr: "Secret42".into(),
        });
        let err = BitcodeSerializer.deserialize(&bytes).unwrap_err();
        assert!(matches!(err, Error::Serialization(msg) if msg.contains("not a password")));
    }

    #[test]
    fn tagged_records_are_still_validated() {
        for raw in ["x", "secret42", "NoDigitsHere"] {
            let bytes = bitcode::encode(&PasswordRecord {
                magic: PASSWORD_RECORD_MAGIC,
                pwdstr: raw.into(),
            });
            let err = BitcodeSerializer.deserialize(&bytes).unwrap_err();
            assert!(
                matches!(&err, Error::Serialization(msg) if msg.contains("invalid password")),
                "{raw:?}: {err:?}"
            );
        }
    }
}
