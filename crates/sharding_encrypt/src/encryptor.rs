use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::{EncryptError, Result};

/// Encrypt/decrypt capability for a single column.
pub trait ShardingEncryptor: Debug + Sync + Send {
    /// Type name this encryptor is configured with.
    fn encryptor_type(&self) -> &str;

    fn encrypt(&self, plaintext: &str) -> Result<String>;

    fn decrypt(&self, ciphertext: &str) -> Result<String>;
}

/// One-way MD5 digest.
///
/// Decrypting returns the digest unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Encryptor;

impl Md5Encryptor {
    pub const TYPE: &'static str = "MD5";
}

impl ShardingEncryptor for Md5Encryptor {
    fn encryptor_type(&self) -> &str {
        Self::TYPE
    }

    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(format!("{:x}", md5::compute(plaintext.as_bytes())))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(ciphertext.to_string())
    }
}

/// Create a built-in encryptor for a configured type.
///
/// Type names are case insensitive.
pub fn create_encryptor(
    encryptor_type: &str,
    _props: &BTreeMap<String, String>,
) -> Result<Arc<dyn ShardingEncryptor>> {
    if encryptor_type.eq_ignore_ascii_case(Md5Encryptor::TYPE) {
        return Ok(Arc::new(Md5Encryptor));
    }
    Err(EncryptError::UnknownEncryptorType(encryptor_type.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_digest() {
        let digest = Md5Encryptor.encrypt("test").unwrap();
        assert_eq!("098f6bcd4621d373cade4e832627b4f6", digest);
        assert_eq!(digest, Md5Encryptor.decrypt(&digest).unwrap());
    }

    #[test]
    fn create_known_type() {
        let encryptor = create_encryptor("md5", &BTreeMap::new()).unwrap();
        assert_eq!("MD5", encryptor.encryptor_type());
    }

    #[test]
    fn create_unknown_type() {
        let err = create_encryptor("rot13", &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, EncryptError::UnknownEncryptorType(t) if t == "rot13"));
    }
}
