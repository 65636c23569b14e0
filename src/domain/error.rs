use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not configured: {message}")]
    NotConfigured { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::NotConfigured {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for errors raised before any provider call was attempted
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_error() {
        let error = DomainError::not_configured("ChatGPT API key is not configured");
        assert_eq!(
            error.to_string(),
            "Not configured: ChatGPT API key is not configured"
        );
        assert!(error.is_not_configured());
    }

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("chatgpt", "HTTP 500");
        assert_eq!(error.to_string(), "Provider error: chatgpt - HTTP 500");
        assert!(!error.is_not_configured());
    }

    #[test]
    fn test_credential_error() {
        let error = DomainError::credential("Failed to decrypt value");
        assert_eq!(error.to_string(), "Credential error: Failed to decrypt value");
    }
}
