//! CLI module for the ChatGPT connector
//!
//! Subcommands:
//! - `query`: send one message to ChatGPT and print the normalized response
//! - `status`: show whether ChatGPT is enabled and configured at a scope
//! - `models`: list selectable models
//! - `encrypt`: encrypt an API key for the settings file

pub mod encrypt;
pub mod models;
pub mod query;
pub mod status;

use clap::{Args, Parser, Subcommand};
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::ConfigScope;
use crate::infrastructure::logging;

/// MagedIn AI ChatGPT connector
#[derive(Parser)]
#[command(name = "magedin-chatgpt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Send a message to ChatGPT
    Query(query::QueryArgs),

    /// Show configuration status
    Status(ScopeArgs),

    /// List selectable models
    Models,

    /// Encrypt a value with the configured crypt key
    Encrypt(encrypt::EncryptArgs),
}

/// Scope selection shared by commands that read settings
#[derive(Args, Clone, Debug, Default)]
pub struct ScopeArgs {
    /// Read settings at this store scope
    #[arg(long, conflicts_with = "website")]
    pub store: Option<String>,

    /// Read settings at this website scope
    #[arg(long)]
    pub website: Option<String>,
}

impl ScopeArgs {
    pub fn scope(&self) -> ConfigScope {
        match (&self.store, &self.website) {
            (Some(store), _) => ConfigScope::store(store),
            (None, Some(website)) => ConfigScope::website(website),
            (None, None) => ConfigScope::Default,
        }
    }
}

/// Load `.env`, application config and logging
pub(crate) fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    logging::init_logging(&config.logging);

    if let Err(e) = loaded {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_args() {
        assert_eq!(ScopeArgs::default().scope(), ConfigScope::Default);

        let args = ScopeArgs {
            store: Some("en".to_string()),
            website: None,
        };
        assert_eq!(args.scope(), ConfigScope::store("en"));

        let args = ScopeArgs {
            store: None,
            website: Some("base".to_string()),
        };
        assert_eq!(args.scope(), ConfigScope::website("base"));
    }

    #[test]
    fn test_parse_query_command() {
        let cli = Cli::try_parse_from([
            "magedin-chatgpt",
            "query",
            "Hello there",
            "--system",
            "Be brief",
            "--max-tokens",
            "50",
            "--store",
            "en",
        ])
        .unwrap();

        let Command::Query(args) = cli.command else {
            panic!("expected query command");
        };
        assert_eq!(args.message, "Hello there");
        assert_eq!(args.system.as_deref(), Some("Be brief"));
        assert_eq!(args.max_tokens, Some(50));
        assert_eq!(args.scope.scope(), ConfigScope::store("en"));
    }

    #[test]
    fn test_store_and_website_conflict() {
        let result = Cli::try_parse_from([
            "magedin-chatgpt",
            "status",
            "--store",
            "en",
            "--website",
            "base",
        ]);

        assert!(result.is_err());
    }
}
