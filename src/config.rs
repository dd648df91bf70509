//! Configuration System
//!
//! Layered configuration for the provider, the generation pipeline, and
//! logging. Files and environment variables are merged by [`ConfigLoader`];
//! the result is validated before a [`crate::api::SolutionApi`] is built.

use crate::generation::RetryPolicy;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use crate::provider::{ProviderConfig, ProviderType};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CounselConfig {
    /// Upstream model provider
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Retry, variant, and validation settings
    #[serde(default)]
    pub generation: GenerationSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Pipeline tuning knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Total attempts per orchestrated call, including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Backoff base; doubled for every retry
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Exclusive upper bound of random jitter added to each backoff
    #[serde(default = "default_max_jitter_ms")]
    pub max_jitter_ms: u64,

    /// Pause between multi-variant calls
    #[serde(default = "default_variant_delay_ms")]
    pub variant_delay_ms: u64,

    #[serde(default = "default_variant_count")]
    pub default_variant_count: usize,

    #[serde(default = "default_max_variant_count")]
    pub max_variant_count: usize,

    /// Score every generated solution before returning it
    #[serde(default = "default_true")]
    pub validate_responses: bool,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_max_jitter_ms() -> u64 {
    1000
}

fn default_variant_delay_ms() -> u64 {
    1000
}

fn default_variant_count() -> usize {
    3
}

fn default_max_variant_count() -> usize {
    5
}

fn default_true() -> bool {
    true
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_jitter_ms: default_max_jitter_ms(),
            variant_delay_ms: default_variant_delay_ms(),
            default_variant_count: default_variant_count(),
            max_variant_count: default_max_variant_count(),
            validate_responses: default_true(),
        }
    }
}

impl GenerationSettings {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            base_delay_ms: self.base_delay_ms,
            max_jitter_ms: self.max_jitter_ms,
        }
    }

    pub fn variant_delay(&self) -> Duration {
        Duration::from_millis(self.variant_delay_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        if self.max_variant_count == 0 {
            return Err("max_variant_count must be at least 1".to_string());
        }
        if self.default_variant_count == 0 || self.default_variant_count > self.max_variant_count {
            return Err(format!(
                "default_variant_count must be between 1 and max_variant_count ({})",
                self.max_variant_count
            ));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Provider(String),
    Generation(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Provider(msg) => write!(f, "Provider: {}", msg),
            ValidationError::Generation(msg) => write!(f, "Generation: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl CounselConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.provider.validate() {
            errors.push(ValidationError::Provider(e));
        }
        if let Err(e) = self.generation.validate() {
            errors.push(ValidationError::Generation(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Copy safe to print or serialize for display.
    pub fn redacted(&self) -> Self {
        Self {
            provider: self.provider.redacted(),
            ..self.clone()
        }
    }
}
