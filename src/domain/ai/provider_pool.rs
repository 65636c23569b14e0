//! Name-keyed registry of AI providers

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use super::{AiProvider, AiRequest, AiResponse};

/// Registry that lets callers address a provider by name.
///
/// Registering a provider under a name that is already taken replaces it.
#[derive(Debug, Default, Clone)]
pub struct ProviderPool {
    providers: BTreeMap<&'static str, Arc<dyn AiProvider>>,
}

impl ProviderPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: Arc<dyn AiProvider>) -> Self {
        self.register(provider);
        self
    }

    pub fn register(&mut self, provider: Arc<dyn AiProvider>) {
        self.providers.insert(provider.provider_name(), provider);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn AiProvider>> {
        self.providers.get(name).cloned()
    }

    /// Names of all registered providers, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.providers.keys().copied().collect()
    }

    /// Names of providers that report themselves available
    pub fn available(&self) -> Vec<&'static str> {
        self.providers
            .iter()
            .filter(|(_, provider)| provider.is_available())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Route a request to the named provider
    pub async fn query(&self, name: &str, request: AiRequest) -> AiResponse {
        match self.get(name) {
            Some(provider) => provider.query(request).await,
            None => {
                warn!(provider = name, "Query for unknown AI provider");
                AiResponse::failure(name, format!("Unknown AI provider: {}", name))
            }
        }
    }
}
