//! Heuristic quality scoring for generated advice.
//!
//! Four independent checks add to (or subtract from) a running score. Only
//! the length and actionability checks can emit issues; the structure and
//! empathy checks only ever award points. A response is valid when the score
//! reaches [`PASSING_SCORE`] AND no issue was raised, so a short but
//! otherwise excellent answer still fails.

use serde::{Deserialize, Serialize};

pub const MIN_LENGTH: usize = 50;
pub const MAX_LENGTH: usize = 2000;
pub const PASSING_SCORE: i32 = 50;

pub const ISSUE_TOO_SHORT: &str = "Response too short";
pub const ISSUE_TOO_LONG: &str = "Response too long";
pub const ISSUE_NOT_ACTIONABLE: &str = "Lacks actionable advice";

const ACTIONABLE_TERMS: &[&str] = &[
    "suggest",
    "recommend",
    "try",
    "consider",
    "might",
    "could",
    "step",
    "approach",
    "strategy",
    "solution",
    "advice",
];

const EMPATHY_TERMS: &[&str] = &[
    "understand",
    "feel",
    "sorry",
    "difficult",
    "challenging",
    "support",
    "help",
    "care",
    "important",
];

const STRUCTURE_MARKERS: &[&str] = &["\n", "•", "1.", "-"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub score: i32,
    pub issues: Vec<String>,
}

/// Stateless scorer; holds no configuration beyond the fixed vocabularies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseValidator;

impl ResponseValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, text: &str) -> ValidationResult {
        validate(text)
    }
}

pub fn validate(text: &str) -> ValidationResult {
    let mut score = 0i32;
    let mut issues = Vec::new();
    let lowered = text.to_lowercase();

    let length = text.chars().count();
    if length < MIN_LENGTH {
        issues.push(ISSUE_TOO_SHORT.to_string());
        score -= 20;
    } else if length > MAX_LENGTH {
        issues.push(ISSUE_TOO_LONG.to_string());
        score -= 10;
    } else {
        score += 20;
    }

    if contains_any(&lowered, ACTIONABLE_TERMS) {
        score += 30;
    } else {
        issues.push(ISSUE_NOT_ACTIONABLE.to_string());
        score -= 20;
    }

    if contains_any(text, STRUCTURE_MARKERS) {
        score += 20;
    }

    if contains_any(&lowered, EMPATHY_TERMS) {
        score += 30;
    }

    ValidationResult {
        is_valid: score >= PASSING_SCORE && issues.is_empty(),
        score,
        issues,
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
