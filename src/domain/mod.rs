//! Domain layer - Core business logic and entities

pub mod ai;
pub mod crypto;
pub mod error;
pub mod settings;

pub use ai::{
    AiProvider, AiRequest, AiResponse, Message, MessageRole, ProviderPool, SYSTEM_MESSAGE_KEY,
};
pub use crypto::Encryptor;
pub use error::DomainError;
pub use settings::{ConfigScope, ScopeConfig};
