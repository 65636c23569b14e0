use std::collections::HashMap;

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub crypt: CryptConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Deployment secret used to encrypt stored settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CryptConfig {
    #[serde(default)]
    pub key: String,
}

/// Scoped settings, keyed by slash-separated paths
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsConfig {
    #[serde(default)]
    pub default: HashMap<String, String>,
    #[serde(default)]
    pub websites: HashMap<String, HashMap<String, String>>,
    #[serde(default)]
    pub stores: HashMap<String, StoreSettings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub values: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.logging.level, "info");
        assert!(matches!(config.logging.format, LogFormat::Pretty));
        assert!(config.crypt.key.is_empty());
        assert!(config.settings.default.is_empty());
    }

    #[test]
    fn test_deserialize_settings_from_toml() {
        let source = r#"
            [logging]
            level = "debug"
            format = "json"

            [crypt]
            key = "secret"

            [settings.default]
            "magedin_ai/chatgpt/enabled" = "1"

            [settings.websites.base]
            "magedin_ai/chatgpt/model" = "gpt-4"

            [settings.stores.en]
            website = "base"

            [settings.stores.en.values]
            "magedin_ai/chatgpt/model" = "gpt-4o"
        "#;

        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.crypt.key, "secret");
        assert_eq!(
            config.settings.default.get("magedin_ai/chatgpt/enabled"),
            Some(&"1".to_string())
        );
        assert_eq!(
            config.settings.websites["base"].get("magedin_ai/chatgpt/model"),
            Some(&"gpt-4".to_string())
        );
        let en = &config.settings.stores["en"];
        assert_eq!(en.website.as_deref(), Some("base"));
        assert_eq!(
            en.values.get("magedin_ai/chatgpt/model"),
            Some(&"gpt-4o".to_string())
        );
    }
}
