//! Google Gemini client (`generateContent` REST endpoint).

use super::{
    build_provider_http_client, error_for_response, map_http_error, CompletionOptions,
    ModelProviderClient,
};
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiClient {
    client: Client,
    model: String,
    api_key: String,
    base_url: String,
    options: CompletionOptions,
}

impl GeminiClient {
    pub fn new(
        model: String,
        api_key: String,
        base_url: Option<String>,
        options: CompletionOptions,
    ) -> Result<Self, ApiError> {
        let client = build_provider_http_client()?;
        let base_url = base_url
            .unwrap_or_else(|| GEMINI_DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            model,
            api_key,
            base_url,
            options,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

fn extract_text(response: GenerateContentResponse) -> Result<String, ApiError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .unwrap_or_else(|| "none given".to_string());
        return Err(ApiError::ProviderError(format!(
            "No candidates in response (block reason: {})",
            reason
        )));
    };

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    Ok(text)
}

#[async_trait]
impl ModelProviderClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        let generation_config =
            (self.options.temperature.is_some() || self.options.max_tokens.is_some()).then(|| {
                GenerationConfig {
                    temperature: self.options.temperature,
                    max_output_tokens: self.options.max_tokens,
                }
            });

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config,
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            return Err(error_for_response(response).await);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ApiError::ProviderError(format!("Failed to parse response: {}", e)))?;

        extract_text(body)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
