//! Static follow-up questions, one set per template.

use crate::options::Template;
use crate::types::{FollowUpQuestion, QuestionType};

pub fn fallback_questions(template: Template) -> Vec<FollowUpQuestion> {
    let entries: [(&str, QuestionType); 3] = match template {
        Template::General => [
            (
                "How long has this been going on?",
                QuestionType::Context,
            ),
            (
                "What have you already tried to address it?",
                QuestionType::Attempts,
            ),
            (
                "What would a good outcome look like for you?",
                QuestionType::Goals,
            ),
        ],
        Template::Relationship => [
            (
                "How long have you known or been with this person?",
                QuestionType::Context,
            ),
            (
                "Have you talked to them directly about how you feel?",
                QuestionType::Attempts,
            ),
            (
                "Do you want to repair the relationship, or are you considering ending it?",
                QuestionType::Goals,
            ),
        ],
        Template::Career => [
            (
                "What is your current role and how long have you been in it?",
                QuestionType::Context,
            ),
            (
                "Have you raised this with your manager or HR?",
                QuestionType::Attempts,
            ),
            (
                "Where do you want your career to be in the next year or two?",
                QuestionType::Goals,
            ),
        ],
        Template::Technical => [
            (
                "What system, software version, or hardware are you using?",
                QuestionType::Specifics,
            ),
            (
                "What troubleshooting steps have you already tried?",
                QuestionType::Attempts,
            ),
            (
                "Are there any exact error messages you can share?",
                QuestionType::Specifics,
            ),
        ],
        Template::Social => [
            (
                "How well do you know the people involved?",
                QuestionType::Context,
            ),
            (
                "How have you handled similar situations before?",
                QuestionType::Attempts,
            ),
            (
                "How would you like things to be between you afterwards?",
                QuestionType::Goals,
            ),
        ],
    };

    entries
        .into_iter()
        .zip(1u32..)
        .map(|((text, question_type), id)| FollowUpQuestion::new(id, text, question_type))
        .collect()
}
