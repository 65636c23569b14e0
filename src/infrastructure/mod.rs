//! Infrastructure layer - External service implementations

pub mod chatgpt;
pub mod crypto;
pub mod logging;
pub mod settings;
