//! Encryptor implementations

mod aes;

pub use aes::AesGcmEncryptor;
