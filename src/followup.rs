//! Follow-up question generation.
//!
//! One upstream call, no retry. The model's reply is parsed into a
//! `Result<Vec<FollowUpQuestion>, QuestionParseError>` and that result is
//! always resolved to a concrete list: either the parsed questions or the
//! static set for the requested template. Upstream failures take the same
//! fallback branch, so callers never see an error from this module.

use crate::options::SolutionOptions;
use crate::prompt::build_follow_up_prompt;
use crate::provider::ModelProviderClient;
use crate::types::{FollowUpQuestion, Post};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

pub mod fallback;

pub use fallback::fallback_questions;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionParseError {
    #[error("upstream call failed: {0}")]
    Upstream(String),

    #[error("response is not a valid question list: {0}")]
    InvalidJson(String),

    #[error("response contained no questions")]
    Empty,

    #[error("question {0} has no text")]
    BlankQuestion(u32),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionPayload {
    List(Vec<FollowUpQuestion>),
    Wrapped { questions: Vec<FollowUpQuestion> },
}

/// Where a resolved question list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSource {
    Model,
    Fallback,
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag; the payload may share the fence line.
    let rest = rest
        .trim_start_matches(|c: char| c.is_ascii_alphanumeric())
        .trim();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

pub fn parse_questions(raw: &str) -> Result<Vec<FollowUpQuestion>, QuestionParseError> {
    let payload: QuestionPayload = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| QuestionParseError::InvalidJson(e.to_string()))?;

    let questions = match payload {
        QuestionPayload::List(questions) => questions,
        QuestionPayload::Wrapped { questions } => questions,
    };

    if questions.is_empty() {
        return Err(QuestionParseError::Empty);
    }
    if let Some(blank) = questions.iter().find(|q| q.text.trim().is_empty()) {
        return Err(QuestionParseError::BlankQuestion(blank.id));
    }

    Ok(questions)
}

pub struct FollowUpQuestionGenerator {
    client: Arc<dyn ModelProviderClient>,
}

impl FollowUpQuestionGenerator {
    pub fn new(client: Arc<dyn ModelProviderClient>) -> Self {
        Self { client }
    }

    pub async fn generate(&self, post: &Post, options: &SolutionOptions) -> Vec<FollowUpQuestion> {
        self.generate_with_source(post, options).await.0
    }

    pub async fn generate_with_source(
        &self,
        post: &Post,
        options: &SolutionOptions,
    ) -> (Vec<FollowUpQuestion>, QuestionSource) {
        let prompt = build_follow_up_prompt(post, options);
        let outcome = match self.client.complete(&prompt).await {
            Ok(raw) => parse_questions(&raw),
            Err(err) => Err(QuestionParseError::Upstream(err.to_string())),
        };

        match outcome {
            Ok(questions) => {
                debug!(
                    post_id = %post.id,
                    count = questions.len(),
                    "Parsed follow-up questions from model"
                );
                (questions, QuestionSource::Model)
            }
            Err(reason) => {
                warn!(
                    post_id = %post.id,
                    template = %options.template,
                    reason = %reason,
                    "Using fallback follow-up questions"
                );
                (fallback_questions(options.template), QuestionSource::Fallback)
            }
        }
    }
}
