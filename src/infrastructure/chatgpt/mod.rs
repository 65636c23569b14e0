//! ChatGPT provider: settings accessor, HTTP seam and chat-completion adapter

mod adapter;
mod config;
mod http_client;
pub mod models;

pub use adapter::{ChatGptAdapter, PROVIDER_NAME};
pub use config::{
    ChatGptConfig, API_KEY_PATH, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    ENABLED_PATH, MODEL_PATH,
};
pub use http_client::{HttpClient, HttpClientTrait, HttpResponse};
pub use models::{ModelOption, MODEL_OPTIONS};
