//! Error types for the Counsel advice generation pipeline.

use thiserror::Error;

/// Errors surfaced by the generation pipeline and its provider clients.
///
/// Display strings keep the upstream message verbatim: callers map substrings
/// such as "quota" or "overloaded" onto their own status codes.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Provider model not found: {0}")]
    ProviderModelNotFound(String),

    #[error("Generation failed after {attempts} attempt(s): {message}")]
    GenerationFailed { attempts: u32, message: String },

    #[error("Variant generation failed at variant {index}: {message}")]
    VariantGenerationFailed { index: usize, message: String },

    #[error("Model returned an empty completion")]
    EmptyCompletion,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ApiError {
    /// Whether the message matches the transient-failure vocabulary.
    pub fn is_retryable(&self) -> bool {
        crate::generation::classify_error(&self.to_string()).is_retryable()
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}
