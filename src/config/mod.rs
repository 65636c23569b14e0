//! Application configuration loaded from files and environment

mod app_config;

pub use app_config::{
    AppConfig, CryptConfig, LogFormat, LoggingConfig, SettingsConfig, StoreSettings,
};
