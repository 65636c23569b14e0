use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Normalized response returned by every AI provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiResponse {
    pub provider: String,
    pub success: bool,
    pub content: String,
    pub tokens_used: Option<u32>,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AiResponse {
    /// Empty response shell tagged with the provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            success: false,
            content: String::new(),
            tokens_used: None,
            metadata: serde_json::Map::new(),
            error_message: None,
        }
    }

    pub fn failure(provider: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self::new(provider).with_error(error_message)
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.success = true;
        self.content = content.into();
        self.error_message = None;
        self
    }

    pub fn with_tokens_used(mut self, tokens: Option<u32>) -> Self {
        self.tokens_used = tokens;
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Map<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Marks the response as failed; content is cleared
    pub fn with_error(mut self, error_message: impl Into<String>) -> Self {
        self.success = false;
        self.content.clear();
        self.error_message = Some(error_message.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Converts back into a `Result`, yielding the content on success
    pub fn into_result(self) -> Result<String, DomainError> {
        if self.success {
            Ok(self.content)
        } else {
            Err(DomainError::provider(
                self.provider,
                self.error_message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}
