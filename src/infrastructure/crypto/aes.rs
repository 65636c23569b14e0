use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::domain::{DomainError, Encryptor};

const NONCE_LEN: usize = 12;

/// AES-256-GCM encryptor keyed by the deployment's crypt key.
///
/// Output format: `base64(nonce || ciphertext)`.
#[derive(Clone)]
pub struct AesGcmEncryptor {
    cipher: Aes256Gcm,
}

impl AesGcmEncryptor {
    pub fn new(crypt_key: &str) -> Result<Self, DomainError> {
        if crypt_key.trim().is_empty() {
            return Err(DomainError::configuration("Crypt key must not be empty"));
        }

        let digest = Sha256::digest(crypt_key.as_bytes());
        let cipher = Aes256Gcm::new_from_slice(digest.as_slice())
            .map_err(|e| DomainError::configuration(format!("Invalid crypt key: {}", e)))?;

        Ok(Self { cipher })
    }
}

impl std::fmt::Debug for AesGcmEncryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesGcmEncryptor").finish_non_exhaustive()
    }
}

impl Encryptor for AesGcmEncryptor {
    fn encrypt(&self, plaintext: &str) -> Result<String, DomainError> {
        if plaintext.is_empty() {
            return Ok(String::new());
        }

        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_bytes())
            .map_err(|_| DomainError::internal("Failed to encrypt value"))?;

        let mut payload = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        payload.extend_from_slice(&nonce_bytes);
        payload.extend_from_slice(&ciphertext);

        Ok(STANDARD.encode(payload))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, DomainError> {
        let ciphertext = ciphertext.trim();
        if ciphertext.is_empty() {
            return Ok(String::new());
        }

        let payload = STANDARD
            .decode(ciphertext)
            .map_err(|e| DomainError::credential(format!("Encrypted value is not base64: {}", e)))?;

        if payload.len() <= NONCE_LEN {
            return Err(DomainError::credential("Encrypted value is too short"));
        }

        let (nonce, sealed) = payload.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|_| DomainError::credential("Failed to decrypt value"))?;

        String::from_utf8(plaintext)
            .map_err(|_| DomainError::credential("Decrypted value is not valid UTF-8"))
    }
}
