//! Provider configuration as loaded from config files and the environment.

use crate::provider::CompletionOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    #[default]
    Gemini,
    #[serde(rename = "openai")]
    OpenAI,
    Ollama,
    #[serde(rename = "local")]
    LocalCustom,
}

impl ProviderType {
    pub fn slug(&self) -> &'static str {
        match self {
            ProviderType::Gemini => "gemini",
            ProviderType::OpenAI => "openai",
            ProviderType::Ollama => "ollama",
            ProviderType::LocalCustom => "local",
        }
    }

    /// Environment variable consulted when no key is configured.
    pub fn api_key_env_var(&self) -> Option<&'static str> {
        match self {
            ProviderType::Gemini => Some("GEMINI_API_KEY"),
            ProviderType::OpenAI => Some("OPENAI_API_KEY"),
            ProviderType::Ollama | ProviderType::LocalCustom => None,
        }
    }

    fn requires_api_key(&self) -> bool {
        self.api_key_env_var().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub provider_type: ProviderType,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL override; required for `local`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: ProviderType::default(),
            model: default_model(),
            api_key: None,
            endpoint: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

impl ProviderConfig {
    /// Validate provider configuration. Missing hosted-provider keys are
    /// checked when the client is created, since they may come from the
    /// environment.
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }

        if let Some(endpoint) = &self.endpoint {
            let url = reqwest::Url::parse(endpoint)
                .map_err(|e| format!("Invalid endpoint '{}': {}", endpoint, e))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(format!(
                    "Endpoint '{}' must use http or https",
                    endpoint
                ));
            }
        } else if self.provider_type == ProviderType::LocalCustom {
            return Err("Local provider requires an endpoint".to_string());
        }

        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(format!(
                    "Temperature {} is outside the range 0.0-2.0",
                    temperature
                ));
            }
        }

        Ok(())
    }

    /// Configured key, or the provider's environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                self.provider_type
                    .api_key_env_var()
                    .and_then(|var| std::env::var(var).ok())
                    .filter(|key| !key.trim().is_empty())
            })
    }

    pub fn has_api_key(&self) -> bool {
        !self.provider_type.requires_api_key() || self.resolve_api_key().is_some()
    }

    pub fn completion_options(&self) -> CompletionOptions {
        let defaults = CompletionOptions::default();
        CompletionOptions {
            temperature: self.temperature.or(defaults.temperature),
            max_tokens: self.max_tokens.or(defaults.max_tokens),
        }
    }

    /// Copy safe to print: the API key is masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.api_key.is_some() {
            copy.api_key = Some("********".to_string());
        }
        copy
    }
}
