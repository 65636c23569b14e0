use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::config::ChatGptConfig;
use super::http_client::HttpClientTrait;
use crate::domain::{AiProvider, AiRequest, AiResponse, DomainError, Message};

pub const PROVIDER_NAME: &str = "chatgpt";

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

const SUPPORTED_FEATURES: &[&str] = &["chat", "text_generation", "content_generation"];

/// ChatGPT adapter: one chat-completion call per query
#[derive(Debug)]
pub struct ChatGptAdapter<C: HttpClientTrait> {
    client: C,
    config: ChatGptConfig,
    base_url: String,
}

impl<C: HttpClientTrait> ChatGptAdapter<C> {
    pub fn new(client: C, config: ChatGptConfig) -> Self {
        Self::with_base_url(client, config, DEFAULT_OPENAI_BASE_URL)
    }

    pub fn with_base_url(client: C, config: ChatGptConfig, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            config,
            base_url,
        }
    }

    pub fn config(&self) -> &ChatGptConfig {
        &self.config
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn build_payload(
        &self,
        model: &str,
        request: &AiRequest,
    ) -> Result<serde_json::Value, DomainError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system_message() {
            messages.push(Message::system(system));
        }
        messages.push(Message::user(request.message.as_str()));

        let payload = ChatCompletionRequest {
            model,
            messages,
            max_tokens: request
                .max_tokens
                .unwrap_or_else(|| self.config.default_max_tokens()),
            temperature: request
                .temperature
                .unwrap_or_else(|| self.config.default_temperature()),
        };

        serde_json::to_value(&payload)
            .map_err(|e| DomainError::internal(format!("Failed to serialize request: {}", e)))
    }

    /// Request pipeline; every failure is returned as `Err`
    pub async fn try_query(&self, request: &AiRequest) -> Result<AiResponse, DomainError> {
        if !self.config.is_enabled() {
            return Err(DomainError::not_configured("ChatGPT provider is disabled"));
        }

        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| DomainError::not_configured("ChatGPT API key is not configured"))?;

        let model = self.config.model();
        let url = self.chat_completions_url();
        let body = self.build_payload(&model, request)?;
        let auth_header = format!("Bearer {}", api_key);
        let headers = vec![
            ("Authorization", auth_header.as_str()),
            ("Content-Type", "application/json"),
        ];

        debug!(model = %model, url = %url, "Sending chat completion request");
        let response = self.client.post_json(&url, headers, &body).await?;

        if response.status != 200 {
            return Err(DomainError::provider(
                PROVIDER_NAME,
                format!(
                    "API request failed with status {}: {}",
                    response.status, response.body
                ),
            ));
        }

        parse_response(&response.body)
    }
}

fn parse_response(body: &str) -> Result<AiResponse, DomainError> {
    let json: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        DomainError::provider(PROVIDER_NAME, format!("Failed to parse response: {}", e))
    })?;

    let serde_json::Value::Object(metadata) = json else {
        return Err(DomainError::provider(
            PROVIDER_NAME,
            "Failed to parse response: expected a JSON object",
        ));
    };

    let completion: ChatCompletionResponse =
        serde_json::from_value(serde_json::Value::Object(metadata.clone())).map_err(|e| {
            DomainError::provider(PROVIDER_NAME, format!("Failed to parse response: {}", e))
        })?;

    if completion.choices.is_empty() {
        warn!("Chat completion response contained no choices");
    }

    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .unwrap_or_default();
    let tokens_used = completion.usage.and_then(|usage| usage.total_tokens);

    Ok(AiResponse::new(PROVIDER_NAME)
        .with_content(content)
        .with_tokens_used(tokens_used)
        .with_metadata(metadata))
}

#[async_trait]
impl<C: HttpClientTrait> AiProvider for ChatGptAdapter<C> {
    async fn query(&self, request: AiRequest) -> AiResponse {
        match self.try_query(&request).await {
            Ok(response) => {
                info!(
                    provider = PROVIDER_NAME,
                    tokens_used = ?response.tokens_used,
                    "ChatGPT query succeeded"
                );
                response
            }
            Err(e) => {
                if e.is_not_configured() {
                    warn!(provider = PROVIDER_NAME, error = %e, "ChatGPT query skipped");
                } else {
                    error!(provider = PROVIDER_NAME, error = %e, "ChatGPT query failed");
                }
                AiResponse::failure(PROVIDER_NAME, e.to_string())
            }
        }
    }

    fn is_available(&self) -> bool {
        self.config.is_configured()
    }

    fn supported_features(&self) -> Vec<&'static str> {
        SUPPORTED_FEATURES.to_vec()
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
    usage: Option<ChatCompletionUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: Option<ChatCompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionUsage {
    total_tokens: Option<u32>,
}
