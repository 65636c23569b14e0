//! Query command - sends a single message to ChatGPT

use clap::Args;
use tracing::warn;

use super::ScopeArgs;
use crate::config::AppConfig;
use crate::domain::{AiProvider, AiRequest, AiResponse};
use crate::infrastructure::chatgpt::PROVIDER_NAME;

/// Arguments for the query command
#[derive(Args, Clone, Debug)]
pub struct QueryArgs {
    /// Message to send
    pub message: String,

    /// Optional system instruction sent before the message
    #[arg(long)]
    pub system: Option<String>,

    /// Override the default token limit
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Override the default sampling temperature
    #[arg(long)]
    pub temperature: Option<f64>,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

impl QueryArgs {
    fn to_request(&self) -> AiRequest {
        let mut request = AiRequest::new(self.message.as_str());
        if let Some(ref system) = self.system {
            request = request.with_system_message(system.as_str());
        }
        if let Some(tokens) = self.max_tokens {
            request = request.with_max_tokens(tokens);
        }
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }
        request
    }
}

/// Query ChatGPT; setup failures become a failed response too
async fn execute(config: &AppConfig, args: &QueryArgs) -> AiResponse {
    match crate::create_chatgpt_adapter(config, args.scope.scope()) {
        Ok(adapter) => adapter.query(args.to_request()).await,
        Err(e) => {
            warn!(error = %e, "ChatGPT adapter could not be created");
            AiResponse::failure(PROVIDER_NAME, e.to_string())
        }
    }
}

/// Run the query and print the normalized response as JSON
pub async fn run(args: QueryArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let response = execute(&config, &args).await;

    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.success {
        anyhow::bail!("ChatGPT query did not succeed");
    }

    Ok(())
}
