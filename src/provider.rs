//! Model Provider Abstraction
//!
//! The pipeline needs exactly one upstream capability: send a prompt string,
//! get a completion string back, or fail with a message. Concrete clients
//! (Gemini, OpenAI-compatible endpoints) live in submodules and are created
//! from configuration through [`ProviderFactory`].

use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub mod gemini;
pub mod openai;
pub mod profile;

pub use gemini::GeminiClient;
pub use openai::OpenAICompatibleClient;
pub use profile::{ProviderConfig, ProviderType};

/// Sampling options applied to every request a client makes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    pub temperature: Option<f32>, // 0.0-2.0
    pub max_tokens: Option<u32>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: Some(0.7),
            max_tokens: None,
        }
    }
}

/// Upstream text-generation service.
#[async_trait]
pub trait ModelProviderClient: Send + Sync {
    /// Generate a completion for a single prompt.
    async fn complete(&self, prompt: &str) -> Result<String, ApiError>;

    fn provider_name(&self) -> &str;

    fn model_name(&self) -> &str;
}

// Keeps the numeric status in the message; the retry classifier depends on it.
fn map_status_error(status: StatusCode, body: &str) -> ApiError {
    let detail = format!("{}: {}", status, body.trim());
    match status.as_u16() {
        401 | 403 => ApiError::ProviderAuthFailed(detail),
        404 => ApiError::ProviderModelNotFound(detail),
        429 => ApiError::ProviderRateLimit(detail),
        _ => ApiError::ProviderRequestFailed(format!("Request failed with status {}", detail)),
    }
}

fn map_http_error(error: reqwest::Error) -> ApiError {
    if let Some(status) = error.status() {
        map_status_error(status, &error.to_string())
    } else if error.is_timeout() {
        ApiError::ProviderRequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::ProviderRequestFailed(format!("Connection error: {}", error))
    } else {
        ApiError::ProviderError(format!("HTTP error: {}", error))
    }
}

async fn error_for_response(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    map_status_error(status, &body)
}

const PROVIDER_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const PROVIDER_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

fn build_provider_http_client() -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(PROVIDER_HTTP_CONNECT_TIMEOUT)
        .timeout(PROVIDER_HTTP_REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ApiError::ProviderError(format!("Failed to create HTTP client: {}", e)))
}

/// Provider factory for creating provider clients
pub struct ProviderFactory;

impl ProviderFactory {
    pub fn create_client(config: &ProviderConfig) -> Result<Arc<dyn ModelProviderClient>, ApiError> {
        config.validate().map_err(ApiError::ConfigError)?;
        let options = config.completion_options();

        match config.provider_type {
            ProviderType::Gemini => {
                let api_key = config.resolve_api_key().ok_or_else(|| {
                    ApiError::ProviderNotConfigured(
                        "Gemini requires an API key (provider.api_key or GEMINI_API_KEY)"
                            .to_string(),
                    )
                })?;
                Ok(Arc::new(GeminiClient::new(
                    config.model.clone(),
                    api_key,
                    config.endpoint.clone(),
                    options,
                )?))
            }
            ProviderType::OpenAI => {
                let api_key = config.resolve_api_key().ok_or_else(|| {
                    ApiError::ProviderNotConfigured(
                        "OpenAI requires an API key (provider.api_key or OPENAI_API_KEY)"
                            .to_string(),
                    )
                })?;
                let base_url = config
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| openai::OPENAI_DEFAULT_BASE_URL.to_string());
                Ok(Arc::new(OpenAICompatibleClient::new(
                    "openai",
                    config.model.clone(),
                    base_url,
                    Some(api_key),
                    options,
                )?))
            }
            ProviderType::Ollama => {
                let base_url = config
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| openai::OLLAMA_DEFAULT_BASE_URL.to_string());
                Ok(Arc::new(OpenAICompatibleClient::new(
                    "ollama",
                    config.model.clone(),
                    base_url,
                    None,
                    options,
                )?))
            }
            ProviderType::LocalCustom => {
                let endpoint = config.endpoint.clone().ok_or_else(|| {
                    ApiError::ProviderNotConfigured(
                        "Local provider requires an endpoint".to_string(),
                    )
                })?;
                Ok(Arc::new(OpenAICompatibleClient::new(
                    "local",
                    config.model.clone(),
                    endpoint,
                    config.api_key.clone(),
                    options,
                )?))
            }
        }
    }
}

// Mock provider for testing
#[cfg(test)]
pub struct MockProvider {
    outcomes: std::sync::Mutex<std::collections::VecDeque<Result<String, ApiError>>>,
    fallback: Result<String, ApiError>,
    prompts: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockProvider {
    /// Replays `outcomes` in order, then keeps returning "Mock response".
    pub fn with_outcomes(outcomes: Vec<Result<String, ApiError>>) -> Self {
        Self {
            outcomes: std::sync::Mutex::new(outcomes.into()),
            fallback: Ok("Mock response".to_string()),
            prompts: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn always_failing(error: ApiError) -> Self {
        Self {
            outcomes: std::sync::Mutex::new(Default::default()),
            fallback: Err(error),
            prompts: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl ModelProviderClient for MockProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let next = self.outcomes.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
