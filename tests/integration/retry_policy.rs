//! Integration tests for retry classification and backoff timing
//!
//! Timing tests run on tokio's paused clock, so backoff sleeps advance
//! virtual time instantly.

use counsel::error::ApiError;
use counsel::generation::{classify_error, ErrorClass, GenerationOrchestrator, RetryPolicy};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::integration::ScriptedProvider;

fn unavailable() -> Result<String, ApiError> {
    Err(ApiError::ProviderRequestFailed(
        "Request failed with status 503 Service Unavailable: try later".to_string(),
    ))
}

#[tokio::test(start_paused = true)]
async fn test_two_transient_failures_then_success() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        unavailable(),
        unavailable(),
        Ok("third time lucky".to_string()),
    ]));
    let orchestrator = GenerationOrchestrator::new(provider.clone());

    let started = Instant::now();
    let text = orchestrator.generate("prompt").await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(text, "third time lucky");
    assert_eq!(provider.calls(), 3);
    // 1000ms + 2000ms base, each with up to 1000ms jitter
    assert!(elapsed >= Duration::from_millis(3000), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(5000), "elapsed {:?}", elapsed);

    let gaps = provider.call_gaps();
    assert_eq!(gaps.len(), 2);
    assert!(
        gaps[0] >= Duration::from_millis(1000) && gaps[0] < Duration::from_millis(2000),
        "gaps {:?}",
        gaps
    );
    assert!(
        gaps[1] >= Duration::from_millis(2000) && gaps[1] < Duration::from_millis(3000),
        "gaps {:?}",
        gaps
    );
}

#[tokio::test(start_paused = true)]
async fn test_each_backoff_doubles_without_jitter() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        unavailable(),
        unavailable(),
        Ok("done".to_string()),
    ]));
    let policy = RetryPolicy {
        max_jitter_ms: 0,
        ..RetryPolicy::default()
    };
    let orchestrator = GenerationOrchestrator::with_policy(provider.clone(), policy);

    assert_eq!(orchestrator.generate("prompt").await.unwrap(), "done");

    let gaps = provider.call_gaps();
    assert_eq!(gaps.len(), 2);
    assert!(
        gaps[0] >= Duration::from_millis(1000) && gaps[0] < Duration::from_millis(1010),
        "gaps {:?}",
        gaps
    );
    assert!(
        gaps[1] >= Duration::from_millis(2000) && gaps[1] < Duration::from_millis(2010),
        "gaps {:?}",
        gaps
    );
}

#[tokio::test(start_paused = true)]
async fn test_always_retryable_makes_exactly_three_calls() {
    let provider = Arc::new(ScriptedProvider::failing("The model is overloaded"));
    let orchestrator = GenerationOrchestrator::new(provider.clone());

    let err = orchestrator.generate("prompt").await.unwrap_err();

    assert_eq!(provider.calls(), 3);
    match err {
        ApiError::GenerationFailed { attempts, message } => {
            assert_eq!(attempts, 3);
            assert!(message.contains("overloaded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_fatal_error_is_not_retried() {
    let provider = Arc::new(ScriptedProvider::failing("invalid API key"));
    let orchestrator = GenerationOrchestrator::new(provider.clone());

    let started = Instant::now();
    let err = orchestrator.generate("prompt").await.unwrap_err();

    assert_eq!(provider.calls(), 1);
    assert!(started.elapsed() < Duration::from_millis(1));
    assert!(err.to_string().contains("invalid API key"));
}

#[tokio::test(start_paused = true)]
async fn test_retryable_then_fatal_stops_immediately() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        unavailable(),
        Err(ApiError::ProviderAuthFailed("bad key".to_string())),
    ]));
    let orchestrator = GenerationOrchestrator::new(provider.clone());

    let err = orchestrator.generate("prompt").await.unwrap_err();
    assert_eq!(provider.calls(), 2);
    assert!(matches!(err, ApiError::GenerationFailed { attempts: 2, .. }));
}

#[tokio::test(start_paused = true)]
async fn test_custom_policy_without_jitter_is_exact() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        unavailable(),
        unavailable(),
        unavailable(),
        Ok("done".to_string()),
    ]));
    let policy = RetryPolicy {
        max_attempts: 4,
        base_delay_ms: 100,
        max_jitter_ms: 0,
    };
    let orchestrator = GenerationOrchestrator::with_policy(provider.clone(), policy);

    let started = Instant::now();
    assert_eq!(orchestrator.generate("prompt").await.unwrap(), "done");
    // 100 + 200 + 400
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(700), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(710), "elapsed {:?}", elapsed);
}

#[test]
fn test_classification_vocabulary() {
    for message in [
        "503 Service Unavailable",
        "HTTP 429",
        "Internal error 500",
        "502 Bad Gateway",
        "504 Gateway Timeout",
        "Model is OVERLOADED",
        "Rate limit hit",
        "Quota exceeded for project",
    ] {
        assert_eq!(classify_error(message), ErrorClass::Retryable, "{message}");
    }

    for message in ["invalid API key", "400 Bad Request", "safety block"] {
        assert_eq!(classify_error(message), ErrorClass::Fatal, "{message}");
    }
}

#[test]
fn test_typed_errors_classify_by_display() {
    assert!(ApiError::ProviderRateLimit("slow down".to_string()).is_retryable());
    assert!(!ApiError::ProviderAuthFailed("nope".to_string()).is_retryable());
}
