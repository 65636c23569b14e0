use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Context key holding an optional system-role instruction
pub const SYSTEM_MESSAGE_KEY: &str = "system_message";

/// Provider-agnostic AI request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl AiRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_context(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.context.insert(key.into(), value);
        self
    }

    pub fn with_system_message(self, content: impl Into<String>) -> Self {
        self.with_context(SYSTEM_MESSAGE_KEY, serde_json::Value::String(content.into()))
    }

    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// System instruction from the context, if it is a non-empty string
    pub fn system_message(&self) -> Option<&str> {
        self.context
            .get(SYSTEM_MESSAGE_KEY)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}
