use async_trait::async_trait;
use std::fmt::Debug;

use super::{AiRequest, AiResponse};

/// Trait for AI providers (ChatGPT, ...)
///
/// `query` never fails: provider errors are reported through
/// `AiResponse::success` and `AiResponse::error_message`.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug {
    /// Send a single request and return the normalized response
    async fn query(&self, request: AiRequest) -> AiResponse;

    /// Whether the provider is enabled and has credentials
    fn is_available(&self) -> bool;

    /// Static capability list
    fn supported_features(&self) -> Vec<&'static str>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    #[derive(Debug)]
    pub struct MockAiProvider {
        name: &'static str,
        available: bool,
        content: Option<String>,
        error: Option<String>,
    }

    impl MockAiProvider {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                available: true,
                content: None,
                error: None,
            }
        }

        pub fn unavailable(mut self) -> Self {
            self.available = false;
            self
        }

        pub fn with_content(mut self, content: impl Into<String>) -> Self {
            self.content = Some(content.into());
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }
    }

    #[async_trait]
    impl AiProvider for MockAiProvider {
        async fn query(&self, _request: AiRequest) -> AiResponse {
            if let Some(ref error) = self.error {
                return AiResponse::failure(self.name, error);
            }

            match self.content {
                Some(ref content) => AiResponse::new(self.name).with_content(content),
                None => AiResponse::failure(self.name, "No mock response configured"),
            }
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn supported_features(&self) -> Vec<&'static str> {
            vec!["chat"]
        }

        fn provider_name(&self) -> &'static str {
            self.name
        }
    }
}
