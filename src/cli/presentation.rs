//! CLI presentation: text formatters per command. JSON output is the serde
//! form of the same values and is produced in the route table.

use crate::types::{FollowUpQuestion, SolutionResponse};
use crate::validation::ValidationResult;

pub fn format_validation_text(result: &ValidationResult) -> String {
    let verdict = if result.is_valid { "valid" } else { "invalid" };
    let mut s = format!("Score: {} ({})", result.score, verdict);
    if !result.issues.is_empty() {
        s.push_str(&format!("\nIssues ({}):", result.issues.len()));
        for issue in &result.issues {
            s.push_str(&format!("\n  - {}", issue));
        }
    }
    s
}

pub fn format_solution_text(response: &SolutionResponse) -> String {
    let solution = &response.solution;
    let mut s = solution.text.trim_end().to_string();
    s.push_str(&format!(
        "\n\n---\nModel: {}  Characters: {}  Time: {} ms",
        solution.model, solution.char_count, solution.timing_ms
    ));
    if let Some(validation) = &response.validation {
        s.push('\n');
        s.push_str(&format_validation_text(validation));
    }
    s
}

pub fn format_questions_text(questions: &[FollowUpQuestion]) -> String {
    questions
        .iter()
        .map(|q| format!("{}. [{}] {}", q.id, q.question_type.as_str(), q.text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_variants_text(variants: &[String]) -> String {
    variants
        .iter()
        .enumerate()
        .map(|(i, text)| format!("=== Variant {} ===\n{}", i + 1, text.trim_end()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
