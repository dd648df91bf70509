//! Retry policy and upstream error classification.
//!
//! Classification is substring-based on the error message. This is fragile by
//! nature, so it lives in exactly one function ([`classify_error`]) that can be
//! swapped for typed status codes without touching callers.

use rand::Rng;
use std::time::Duration;

/// Substrings that mark an upstream failure as transient.
pub const RETRYABLE_MARKERS: &[&str] = &[
    "503",
    "429",
    "500",
    "502",
    "504",
    "overloaded",
    "rate limit",
    "quota exceeded",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Retryable,
    Fatal,
}

impl ErrorClass {
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorClass::Retryable)
    }
}

pub fn classify_error(message: &str) -> ErrorClass {
    let lowered = message.to_lowercase();
    if RETRYABLE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
    {
        ErrorClass::Retryable
    } else {
        ErrorClass::Fatal
    }
}

/// Backoff parameters for one orchestrated call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    /// Upper bound (exclusive) of the uniform jitter added to each delay.
    pub max_jitter_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
            max_jitter_ms: 1000,
        }
    }
}

impl RetryPolicy {
    /// Delay before the attempt following `attempt` (1-based), without jitter.
    pub fn base_delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        Duration::from_millis(self.base_delay_ms.saturating_mul(1u64 << exponent))
    }

    pub fn delay_with_jitter(&self, attempt: u32) -> Duration {
        let jitter = if self.max_jitter_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..self.max_jitter_ms)
        };
        self.base_delay(attempt) + Duration::from_millis(jitter)
    }
}

/// Per-call retry bookkeeping. Created fresh by every `generate` call.
#[derive(Debug, Clone)]
pub struct RetryState {
    pub attempt: u32,
    pub max_attempts: u32,
    pub last_error: Option<String>,
}

impl RetryState {
    pub fn new(policy: &RetryPolicy) -> Self {
        Self {
            attempt: 1,
            max_attempts: policy.max_attempts.max(1),
            last_error: None,
        }
    }

    pub fn can_retry(&self) -> bool {
        self.attempt < self.max_attempts
    }
}
