use crate::config::LlmConfig;
use crate::llm::{ChatRequest, LLMRequest, LLMResponse, ResponseFormat};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
    #[error("Request timeout - the API took too long to respond")]
    Timeout,
    #[error("Connection error - unable to reach the API")]
    Connect,
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse API response as JSON: {0}")]
    Decode(String),
    #[error("API returned empty response")]
    EmptyResponse,
}

/// The one seam between the engine and the hosted model.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends the messages and returns the text of the first completion choice.
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError>;
}

pub struct OpenAiClient {
    client: Client,
    config: LlmConfig,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::ClientBuild(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn to_wire(&self, request: ChatRequest) -> LLMRequest {
        LLMRequest {
            model: request.model.unwrap_or_else(|| self.config.model.clone()),
            messages: request.messages,
            response_format: request.json_mode.then(ResponseFormat::json_object),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    #[instrument(skip(self, request), fields(json_mode = request.json_mode))]
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError> {
        let start = Instant::now();
        let body = self.to_wire(request);

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else if e.is_connect() {
                    LlmError::Connect
                } else {
                    LlmError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_error(status.as_u16(), &error_text));
        }

        let llm_response: LLMResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Decode(e.to_string()))?;

        debug!(
            model = %body.model,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Chat completion received"
        );

        first_choice(llm_response)
    }
}

fn status_error(status: u16, error_text: &str) -> LlmError {
    let message = match status {
        401 => "Authentication failed - check your API key".to_string(),
        403 => "Access forbidden - insufficient permissions".to_string(),
        429 => "Rate limit exceeded - too many requests".to_string(),
        500..=599 => format!("Server error ({}): {}", status, error_text),
        _ => format!("HTTP error {}: {}", status, error_text),
    };
    LlmError::Status { status, message }
}

fn first_choice(response: LLMResponse) -> Result<String, LlmError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(LlmError::EmptyResponse)
}
