//! OpenAI-compatible chat completions client.
//!
//! Serves OpenAI itself, Ollama's `/v1` endpoint, and custom local servers.

use super::{
    build_provider_http_client, error_for_response, map_http_error, CompletionOptions,
    ModelProviderClient,
};
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";

pub struct OpenAICompatibleClient {
    client: Client,
    provider_name: &'static str,
    model: String,
    base_url: String,
    api_key: Option<String>,
    options: CompletionOptions,
}

impl OpenAICompatibleClient {
    pub fn new(
        provider_name: &'static str,
        model: String,
        base_url: String,
        api_key: Option<String>,
        options: CompletionOptions,
    ) -> Result<Self, ApiError> {
        let client = build_provider_http_client()?;
        Ok(Self {
            client,
            provider_name,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            options,
        })
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl ModelProviderClient for OpenAICompatibleClient {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.options.temperature,
            max_tokens: self.options.max_tokens,
            stream: false,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let mut request_builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");

        if let Some(api_key) = &self.api_key {
            request_builder =
                request_builder.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = request_builder
            .json(&request)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            return Err(error_for_response(response).await);
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ApiError::ProviderError(format!("Failed to parse response: {}", e)))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::ProviderError("No choices in response".to_string()))?;

        Ok(choice.message.content.unwrap_or_default())
    }

    fn provider_name(&self) -> &str {
        self.provider_name
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
