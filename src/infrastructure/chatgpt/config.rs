use std::sync::Arc;

use tracing::warn;

use crate::domain::{ConfigScope, Encryptor, ScopeConfig};

pub const ENABLED_PATH: &str = "magedin_ai/chatgpt/enabled";
pub const API_KEY_PATH: &str = "magedin_ai/chatgpt/api_key";
pub const MODEL_PATH: &str = "magedin_ai/chatgpt/model";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// ChatGPT settings read from the scoped settings store
#[derive(Clone)]
pub struct ChatGptConfig {
    store: Arc<dyn ScopeConfig>,
    encryptor: Arc<dyn Encryptor>,
    scope: ConfigScope,
}

impl ChatGptConfig {
    pub fn new(store: Arc<dyn ScopeConfig>, encryptor: Arc<dyn Encryptor>) -> Self {
        Self {
            store,
            encryptor,
            scope: ConfigScope::Default,
        }
    }

    /// Same settings, read at another scope
    pub fn with_scope(&self, scope: ConfigScope) -> Self {
        Self {
            store: self.store.clone(),
            encryptor: self.encryptor.clone(),
            scope,
        }
    }

    pub fn scope(&self) -> &ConfigScope {
        &self.scope
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_set_flag(ENABLED_PATH, &self.scope)
    }

    /// Decrypted API key; `None` when unset, empty or undecryptable
    pub fn api_key(&self) -> Option<String> {
        let stored = self
            .store
            .get_value(API_KEY_PATH, &self.scope)
            .filter(|v| !v.trim().is_empty())?;

        match self.encryptor.decrypt(&stored) {
            Ok(key) if !key.is_empty() => Some(key),
            Ok(_) => None,
            Err(e) => {
                warn!(scope = %self.scope, error = %e, "Stored ChatGPT API key could not be decrypted");
                None
            }
        }
    }

    pub fn model(&self) -> String {
        self.store
            .get_value(MODEL_PATH, &self.scope)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn default_max_tokens(&self) -> u32 {
        DEFAULT_MAX_TOKENS
    }

    pub fn default_temperature(&self) -> f64 {
        DEFAULT_TEMPERATURE
    }

    pub fn is_configured(&self) -> bool {
        self.is_enabled() && self.api_key().is_some()
    }
}

impl std::fmt::Debug for ChatGptConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatGptConfig")
            .field("store", &self.store)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
