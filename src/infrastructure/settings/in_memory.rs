use std::collections::HashMap;

use tracing::trace;

use crate::config::SettingsConfig;
use crate::domain::{ConfigScope, ScopeConfig};

/// In-memory scoped settings with store → website → default fallback
#[derive(Debug, Default, Clone)]
pub struct InMemoryScopeConfig {
    values: HashMap<ConfigScope, HashMap<String, String>>,
    store_websites: HashMap<String, String>,
}

impl InMemoryScopeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `[settings]` section of the application config
    pub fn from_settings(settings: &SettingsConfig) -> Self {
        let mut store = Self::new();

        for (path, value) in &settings.default {
            store.set(path, value, ConfigScope::Default);
        }

        for (website, values) in &settings.websites {
            for (path, value) in values {
                store.set(path, value, ConfigScope::website(website));
            }
        }

        for (code, store_settings) in &settings.stores {
            if let Some(ref website) = store_settings.website {
                store.assign_store(code, website);
            }
            for (path, value) in &store_settings.values {
                store.set(path, value, ConfigScope::store(code));
            }
        }

        store
    }

    pub fn set(&mut self, path: impl Into<String>, value: impl Into<String>, scope: ConfigScope) {
        self.values
            .entry(scope)
            .or_default()
            .insert(path.into(), value.into());
    }

    pub fn with_value(
        mut self,
        path: impl Into<String>,
        value: impl Into<String>,
        scope: ConfigScope,
    ) -> Self {
        self.set(path, value, scope);
        self
    }

    /// Declare which website a store belongs to
    pub fn assign_store(&mut self, store: impl Into<String>, website: impl Into<String>) {
        self.store_websites.insert(store.into(), website.into());
    }

    pub fn with_store(mut self, store: impl Into<String>, website: impl Into<String>) -> Self {
        self.assign_store(store, website);
        self
    }

    fn lookup(&self, path: &str, scope: &ConfigScope) -> Option<&String> {
        self.values.get(scope).and_then(|values| values.get(path))
    }

    fn fallback_chain(&self, scope: &ConfigScope) -> Vec<ConfigScope> {
        match scope {
            ConfigScope::Default => vec![ConfigScope::Default],
            ConfigScope::Website(_) => vec![scope.clone(), ConfigScope::Default],
            ConfigScope::Store(code) => {
                let mut chain = vec![scope.clone()];
                if let Some(website) = self.store_websites.get(code) {
                    chain.push(ConfigScope::website(website));
                }
                chain.push(ConfigScope::Default);
                chain
            }
        }
    }
}

impl ScopeConfig for InMemoryScopeConfig {
    fn get_value(&self, path: &str, scope: &ConfigScope) -> Option<String> {
        let found = self
            .fallback_chain(scope)
            .iter()
            .find_map(|s| self.lookup(path, s).map(|value| (s.clone(), value.clone())));

        if let Some((ref resolved, _)) = found {
            trace!(path, scope = %scope, resolved = %resolved, "Resolved setting");
        }

        found.map(|(_, value)| value)
    }
}
