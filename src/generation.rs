//! Orchestrated generation: retry policy, error classification, and the
//! state machine that wraps a single upstream completion.

pub mod orchestrator;
pub mod retry;

pub use orchestrator::GenerationOrchestrator;
pub use retry::{classify_error, ErrorClass, RetryPolicy, RetryState, RETRYABLE_MARKERS};
