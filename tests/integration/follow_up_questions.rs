//! Integration tests for follow-up question generation and fallbacks

use counsel::api::SolutionApi;
use counsel::config::GenerationSettings;
use counsel::followup::{fallback_questions, FollowUpQuestionGenerator, QuestionSource};
use counsel::options::{SolutionOptions, Template};
use counsel::types::QuestionType;
use std::sync::Arc;

use crate::integration::{sample_post, ScriptedProvider};

fn options(template: Template) -> SolutionOptions {
    SolutionOptions {
        template,
        ..SolutionOptions::default()
    }
}

#[tokio::test]
async fn test_model_questions_are_used_when_parseable() {
    let raw = r#"```json
[
  {"id": 1, "text": "How long has this been going on?", "type": "context"},
  {"id": 2, "text": "Have you talked to your manager?", "type": "attempts"},
  {"id": 3, "text": "What outcome would feel fair?", "type": "goals"}
]
```"#;
    let provider = Arc::new(ScriptedProvider::replying(raw));
    let generator = FollowUpQuestionGenerator::new(provider.clone());

    let (questions, source) = generator
        .generate_with_source(&sample_post(), &options(Template::Career))
        .await;

    assert_eq!(source, QuestionSource::Model);
    assert_eq!(questions.len(), 3);
    assert_eq!(questions[1].question_type, QuestionType::Attempts);
    assert!(provider.prompts()[0].contains("Advice category: career"));
}

#[tokio::test]
async fn test_every_template_falls_back_on_upstream_failure() {
    for template in Template::ALL {
        let provider = Arc::new(ScriptedProvider::failing("503 Service Unavailable"));
        let api = SolutionApi::new(provider.clone(), GenerationSettings::default());

        let questions = api
            .generate_follow_up_questions(&sample_post(), &options(template))
            .await;

        assert!(!questions.is_empty(), "{template}");
        assert_eq!(questions, fallback_questions(template));
        assert_eq!(provider.calls(), 1, "follow-up questions are never retried");
    }
}

#[tokio::test]
async fn test_malformed_output_falls_back() {
    for raw in [
        "Sure! Here are some questions you could ask.",
        "[]",
        r#"{"questions": []}"#,
        r#"[{"id": 1, "text": "   ", "type": "context"}]"#,
    ] {
        let provider = Arc::new(ScriptedProvider::replying(raw));
        let generator = FollowUpQuestionGenerator::new(provider);

        let (questions, source) = generator
            .generate_with_source(&sample_post(), &options(Template::Relationship))
            .await;

        assert_eq!(source, QuestionSource::Fallback, "{raw}");
        assert_eq!(questions, fallback_questions(Template::Relationship));
    }
}

#[tokio::test]
async fn test_wrapped_payload_is_accepted() {
    let raw = r#"{"questions": [{"id": 1, "text": "Which tools are involved?", "type": "specifics"}]}"#;
    let provider = Arc::new(ScriptedProvider::replying(raw));
    let generator = FollowUpQuestionGenerator::new(provider);

    let (questions, source) = generator
        .generate_with_source(&sample_post(), &options(Template::Technical))
        .await;

    assert_eq!(source, QuestionSource::Model);
    assert_eq!(questions[0].text, "Which tools are involved?");
}

#[test]
fn test_fallback_sets_are_distinct_per_template() {
    let general = fallback_questions(Template::General);
    for template in Template::ALL {
        let questions = fallback_questions(template);
        assert_eq!(questions.len(), 3);
        let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        if template != Template::General {
            assert_ne!(questions, general, "{template}");
        }
    }
}
