//! Encryption of stored secrets

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Symmetric encryption for secrets kept in the settings store
#[cfg_attr(test, automock)]
pub trait Encryptor: Send + Sync {
    /// Encrypts `plaintext`; empty input yields empty output
    fn encrypt(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Decrypts a value produced by `encrypt`; empty input yields empty output
    fn decrypt(&self, ciphertext: &str) -> Result<String, DomainError>;
}
