//! MagedIn AI ChatGPT connector
//!
//! Lets store operators configure and call OpenAI's chat-completion API:
//! - Scoped settings (default / website / store) with an encrypted API key
//! - A ChatGPT adapter producing normalized, never-failing responses
//! - A provider pool for addressing providers by name

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use domain::{ConfigScope, DomainError, ProviderPool};
use infrastructure::{
    chatgpt::{ChatGptAdapter, ChatGptConfig, HttpClient},
    crypto::AesGcmEncryptor,
    settings::InMemoryScopeConfig,
};
use tracing::info;

/// Build the ChatGPT settings accessor from application configuration
pub fn create_chatgpt_config(config: &AppConfig) -> Result<ChatGptConfig, DomainError> {
    let store = InMemoryScopeConfig::from_settings(&config.settings);
    let encryptor = AesGcmEncryptor::new(&config.crypt.key)?;

    Ok(ChatGptConfig::new(Arc::new(store), Arc::new(encryptor)))
}

/// Build a ChatGPT adapter reading its settings at `scope`
pub fn create_chatgpt_adapter(
    config: &AppConfig,
    scope: ConfigScope,
) -> Result<ChatGptAdapter<HttpClient>, DomainError> {
    let chatgpt_config = create_chatgpt_config(config)?.with_scope(scope);

    Ok(ChatGptAdapter::new(HttpClient::new(), chatgpt_config))
}

/// Build the provider pool with every built-in provider registered
pub fn create_provider_pool(
    config: &AppConfig,
    scope: ConfigScope,
) -> Result<ProviderPool, DomainError> {
    let adapter = create_chatgpt_adapter(config, scope)?;
    let pool = ProviderPool::new().with_provider(Arc::new(adapter));

    info!(providers = ?pool.names(), available = ?pool.available(), "Provider pool ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AiProvider, Encryptor};
    use crate::infrastructure::chatgpt::{API_KEY_PATH, ENABLED_PATH};

    fn app_config(enabled: &str, api_key: Option<&str>) -> AppConfig {
        let mut config = AppConfig::default();
        config.crypt.key = "unit-test-key".to_string();
        config
            .settings
            .default
            .insert(ENABLED_PATH.to_string(), enabled.to_string());
        if let Some(key) = api_key {
            let sealed = AesGcmEncryptor::new("unit-test-key")
                .unwrap()
                .encrypt(key)
                .unwrap();
            config
                .settings
                .default
                .insert(API_KEY_PATH.to_string(), sealed);
        }
        config
    }

    #[test]
    fn test_create_chatgpt_adapter_reads_encrypted_key() {
        let adapter =
            create_chatgpt_adapter(&app_config("1", Some("sk-live")), ConfigScope::Default)
                .unwrap();

        assert!(adapter.is_available());
        assert_eq!(adapter.config().api_key().as_deref(), Some("sk-live"));
    }

    #[test]
    fn test_create_requires_crypt_key() {
        let result = create_chatgpt_config(&AppConfig::default());

        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_provider_pool_registers_chatgpt() {
        let pool = create_provider_pool(&app_config("0", Some("sk-live")), ConfigScope::Default)
            .unwrap();

        assert_eq!(pool.names(), vec!["chatgpt"]);
        assert!(pool.available().is_empty());
    }
}
