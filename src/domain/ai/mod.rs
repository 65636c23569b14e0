//! Provider-agnostic AI request/response models and traits

mod message;
mod provider;
mod provider_pool;
mod request;
mod response;

pub use message::{Message, MessageRole};
pub use provider::AiProvider;
pub use provider_pool::ProviderPool;
pub use request::{AiRequest, SYSTEM_MESSAGE_KEY};
pub use response::AiResponse;

#[cfg(test)]
pub use provider::mock::MockAiProvider;
