//! Status command - reports ChatGPT configuration at a scope

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use super::ScopeArgs;
use crate::config::AppConfig;
use crate::domain::{ConfigScope, DomainError, Encryptor};
use crate::infrastructure::chatgpt::{models, ChatGptConfig};
use crate::infrastructure::settings::InMemoryScopeConfig;

#[derive(Debug, Serialize)]
struct StatusReport {
    scope: String,
    enabled: bool,
    api_key_present: bool,
    configured: bool,
    model: String,
    model_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl StatusReport {
    fn from_config(config: &ChatGptConfig) -> Self {
        let model = config.model();

        Self {
            scope: config.scope().to_string(),
            enabled: config.is_enabled(),
            api_key_present: config.api_key().is_some(),
            configured: config.is_configured(),
            model_label: models::label_for(&model),
            model,
            error: None,
        }
    }

    /// Report for `scope`; settings stay readable without a crypt key, the API key does not
    fn build(config: &AppConfig, scope: ConfigScope) -> Self {
        match crate::create_chatgpt_config(config) {
            Ok(chatgpt) => Self::from_config(&chatgpt.with_scope(scope)),
            Err(e) => {
                warn!(error = %e, "API key cannot be read without a crypt key");
                let store = InMemoryScopeConfig::from_settings(&config.settings);
                let chatgpt = ChatGptConfig::new(Arc::new(store), Arc::new(NoCryptKey))
                    .with_scope(scope);

                Self {
                    error: Some(e.to_string()),
                    ..Self::from_config(&chatgpt)
                }
            }
        }
    }
}

/// Stand-in encryptor used when no crypt key is configured
struct NoCryptKey;

impl Encryptor for NoCryptKey {
    fn encrypt(&self, _plaintext: &str) -> Result<String, DomainError> {
        Err(DomainError::configuration("Crypt key must not be empty"))
    }

    fn decrypt(&self, _ciphertext: &str) -> Result<String, DomainError> {
        Err(DomainError::configuration("Crypt key must not be empty"))
    }
}

pub async fn run(args: ScopeArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let report = StatusReport::build(&config, args.scope());

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
