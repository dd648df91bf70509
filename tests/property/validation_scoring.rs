//! Properties of the heuristic response validator

use counsel::validation::{
    validate, ISSUE_TOO_LONG, ISSUE_TOO_SHORT, MAX_LENGTH, MIN_LENGTH, PASSING_SCORE,
};
use proptest::prelude::*;

#[test]
fn test_short_text_is_always_invalid() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&".{0,49}", |text| {
            prop_assume!(text.chars().count() < MIN_LENGTH);
            let result = validate(&text);
            prop_assert!(result.issues.iter().any(|i| i == ISSUE_TOO_SHORT));
            prop_assert!(!result.is_valid);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_validation_is_idempotent() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<String>(), |text| {
            prop_assert_eq!(validate(&text), validate(&text));
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_score_stays_within_bounds_and_validity_rule_holds() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<String>(), |text| {
            let result = validate(&text);
            prop_assert!((-40..=100).contains(&result.score), "score {}", result.score);
            prop_assert_eq!(
                result.is_valid,
                result.score >= PASSING_SCORE && result.issues.is_empty()
            );
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_complete_answers_score_one_hundred() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let filler = "[a-z ]{60,400}";

    runner
        .run(&filler, |padding| {
            let text = format!("I understand.\n1. Consider this: {}", padding);
            prop_assume!(text.chars().count() <= MAX_LENGTH);
            let result = validate(&text);
            prop_assert_eq!(result.score, 100);
            prop_assert!(result.is_valid);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_overlong_text_is_flagged() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(MAX_LENGTH + 1..MAX_LENGTH + 500), |len| {
            let text = "a".repeat(len);
            let result = validate(&text);
            prop_assert!(result.issues.iter().any(|i| i == ISSUE_TOO_LONG));
            prop_assert!(!result.is_valid);
            Ok(())
        })
        .unwrap();
}
