//! Integration tests for multi-approach variant generation

use counsel::api::SolutionApi;
use counsel::config::GenerationSettings;
use counsel::error::ApiError;
use counsel::prompt::build_varied_prompt;
use counsel::variants::MultiVariantGenerator;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::integration::{sample_post, ScriptedProvider};

#[tokio::test(start_paused = true)]
async fn test_three_variants_use_distinct_approaches_and_pause_between_calls() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok("direct answer".to_string()),
        Ok("strategic answer".to_string()),
        Ok("empathetic answer".to_string()),
    ]));
    let api = SolutionApi::new(provider.clone(), GenerationSettings::default());

    let started = Instant::now();
    let variants = api
        .generate_multiple_solutions(&sample_post(), None)
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(
        variants,
        vec!["direct answer", "strategic answer", "empathetic answer"]
    );
    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 3);
    assert_ne!(prompts[0], prompts[1]);
    assert_ne!(prompts[1], prompts[2]);
    assert_ne!(prompts[0], prompts[2]);
    // Two pauses, none after the last call
    assert!(elapsed >= Duration::from_millis(2000), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(2100), "elapsed {:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn test_fourth_variant_wraps_to_first_approach() {
    let provider = Arc::new(ScriptedProvider::replying("advice"));
    let generator =
        MultiVariantGenerator::with_settings(provider.clone(), Duration::from_millis(10), 5);

    let variants = generator.generate(&sample_post(), 4).await.unwrap();

    assert_eq!(variants.len(), 4);
    let prompts = provider.prompts();
    assert_eq!(prompts[3], prompts[0]);
    assert_eq!(prompts[0], build_varied_prompt(&sample_post(), 0));
}

#[tokio::test(start_paused = true)]
async fn test_failure_aborts_batch_without_retry() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok("first".to_string()),
        Err(ApiError::ProviderError("503 Service Unavailable".to_string())),
    ]));
    let generator = MultiVariantGenerator::new(provider.clone());

    let err = generator.generate(&sample_post(), 3).await.unwrap_err();

    assert_eq!(provider.calls(), 2, "no retry and no further variants");
    match err {
        ApiError::VariantGenerationFailed { index, message } => {
            assert_eq!(index, 1);
            assert!(message.contains("503"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_count_bounds_follow_settings() {
    let provider = Arc::new(ScriptedProvider::replying("advice"));
    let settings = GenerationSettings {
        variant_delay_ms: 0,
        max_variant_count: 2,
        default_variant_count: 2,
        ..GenerationSettings::default()
    };
    let api = SolutionApi::new(provider.clone(), settings);

    assert!(matches!(
        api.generate_multiple_solutions(&sample_post(), Some(0)).await,
        Err(ApiError::InvalidInput(_))
    ));
    assert!(matches!(
        api.generate_multiple_solutions(&sample_post(), Some(3)).await,
        Err(ApiError::InvalidInput(_))
    ));
    assert_eq!(provider.calls(), 0);

    let variants = api
        .generate_multiple_solutions(&sample_post(), None)
        .await
        .unwrap();
    assert_eq!(variants.len(), 2);
}
