use std::fmt::Debug;

use super::ConfigScope;

/// Read access to scoped settings keyed by slash-separated paths
/// (e.g. `magedin_ai/chatgpt/enabled`).
pub trait ScopeConfig: Send + Sync + Debug {
    /// Resolved value for `path` at `scope`, after scope fallback
    fn get_value(&self, path: &str, scope: &ConfigScope) -> Option<String>;

    /// Flag semantics: set, non-empty, not `"0"` and not `"false"`
    fn is_set_flag(&self, path: &str, scope: &ConfigScope) -> bool {
        self.get_value(path, scope)
            .map(|value| is_truthy(&value))
            .unwrap_or(false)
    }
}

pub fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy("yes"));
        assert!(is_truthy("true"));
    }

    #[test]
    fn test_falsy_values() {
        assert!(!is_truthy(""));
        assert!(!is_truthy("  "));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy("FALSE"));
    }
}
