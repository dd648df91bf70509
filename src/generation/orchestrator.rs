//! Retry/backoff state machine around a single upstream completion.
//!
//! `Idle -> Attempting -> {Success | Retrying -> Attempting | Failed}`. Each
//! attempt is atomic: any error from the provider is classified as a whole and
//! either retried from scratch or surfaced.

use crate::error::ApiError;
use crate::generation::retry::{classify_error, ErrorClass, RetryPolicy, RetryState};
use crate::provider::ModelProviderClient;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, error, warn};

pub struct GenerationOrchestrator {
    client: Arc<dyn ModelProviderClient>,
    policy: RetryPolicy,
}

impl GenerationOrchestrator {
    pub fn new(client: Arc<dyn ModelProviderClient>) -> Self {
        Self::with_policy(client, RetryPolicy::default())
    }

    pub fn with_policy(client: Arc<dyn ModelProviderClient>, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn client(&self) -> &Arc<dyn ModelProviderClient> {
        &self.client
    }

    /// Run `prompt` against the provider, retrying transient failures.
    ///
    /// Returns the completion text unchanged; content checks belong to the
    /// caller. On failure the error carries the number of attempts made and
    /// the last upstream message.
    pub async fn generate(&self, prompt: &str) -> Result<String, ApiError> {
        let mut state = RetryState::new(&self.policy);

        loop {
            debug!(
                attempt = state.attempt,
                max_attempts = state.max_attempts,
                provider = self.client.provider_name(),
                prompt_chars = prompt.len(),
                "Requesting completion"
            );

            let err = match self.client.complete(prompt).await {
                Ok(text) => {
                    if state.attempt > 1 {
                        debug!(attempt = state.attempt, "Completion succeeded after retry");
                    }
                    return Ok(text);
                }
                Err(err) => err,
            };

            let message = err.to_string();
            let class = classify_error(&message);
            state.last_error = Some(message);

            if class == ErrorClass::Retryable && state.can_retry() {
                let delay = self.policy.delay_with_jitter(state.attempt);
                warn!(
                    attempt = state.attempt,
                    max_attempts = state.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Transient provider failure, backing off"
                );
                sleep(delay).await;
                state.attempt += 1;
                continue;
            }

            error!(
                attempt = state.attempt,
                retryable = class.is_retryable(),
                error = %err,
                "Completion failed"
            );
            return Err(ApiError::GenerationFailed {
                attempts: state.attempt,
                message: state.last_error.take().unwrap_or_default(),
            });
        }
    }
}
