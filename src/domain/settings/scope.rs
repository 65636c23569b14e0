use serde::{Deserialize, Serialize};

/// Hierarchical configuration context.
///
/// Lookups fall back from store to the store's website to the default scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "code", rename_all = "snake_case")]
pub enum ConfigScope {
    #[default]
    Default,
    Website(String),
    Store(String),
}

impl ConfigScope {
    pub fn website(code: impl Into<String>) -> Self {
        Self::Website(code.into())
    }

    pub fn store(code: impl Into<String>) -> Self {
        Self::Store(code.into())
    }
}

impl std::fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigScope::Default => write!(f, "default"),
            ConfigScope::Website(code) => write!(f, "website:{}", code),
            ConfigScope::Store(code) => write!(f, "store:{}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_display() {
        assert_eq!(ConfigScope::Default.to_string(), "default");
        assert_eq!(ConfigScope::website("base").to_string(), "website:base");
        assert_eq!(ConfigScope::store("en").to_string(), "store:en");
    }
}
