//! Core data types shared by the pipeline and its callers.

use crate::validation::ValidationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Reddit post handed in by the caller on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub subreddit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    /// UNIX timestamp in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_comments: Option<u64>,
}

impl Post {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        subreddit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            subreddit: subreddit.into(),
            author: None,
            score: None,
            created: None,
            num_comments: None,
        }
    }

    /// Body text, or a placeholder when the post has none.
    pub fn body_or_placeholder(&self) -> &str {
        if self.body.trim().is_empty() {
            "(No additional details provided)"
        } else {
            &self.body
        }
    }
}

/// Kind of information a follow-up question is trying to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Context,
    Attempts,
    Goals,
    Specifics,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Context => "context",
            QuestionType::Attempts => "attempts",
            QuestionType::Goals => "goals",
            QuestionType::Specifics => "specifics",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    pub id: u32,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

impl FollowUpQuestion {
    pub fn new(id: u32, text: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            id,
            text: text.into(),
            question_type,
        }
    }
}

/// Text returned by the model plus derived metadata. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSolution {
    pub text: String,
    pub char_count: usize,
    pub timing_ms: u64,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedSolution {
    pub fn new(text: String, timing_ms: u64, model: impl Into<String>) -> Self {
        Self {
            char_count: text.chars().count(),
            text,
            timing_ms,
            model: model.into(),
            generated_at: Utc::now(),
        }
    }
}

/// Caller-facing result of `generate_solution`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionResponse {
    #[serde(flatten)]
    pub solution: GeneratedSolution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationResult>,
}

impl SolutionResponse {
    pub fn text(&self) -> &str {
        &self.solution.text
    }
}
