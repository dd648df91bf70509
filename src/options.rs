//! Option axes for solution generation.
//!
//! Each axis (template, tone, length) is a closed enum. Raw strings are
//! normalized exactly once, at deserialization or [`FromStr`] time: unknown,
//! empty, or differently-cased values collapse to the axis default, so prompt
//! construction downstream never has to handle an invalid option.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Advice domain selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Template {
    #[default]
    General,
    Relationship,
    Career,
    Technical,
    Social,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::General,
        Template::Relationship,
        Template::Career,
        Template::Technical,
        Template::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::General => "general",
            Template::Relationship => "relationship",
            Template::Career => "career",
            Template::Technical => "technical",
            Template::Social => "social",
        }
    }

    /// Lenient parse: anything unrecognized becomes `General`.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "relationship" => Template::Relationship,
            "career" => Template::Career,
            "technical" => Template::Technical,
            "social" => Template::Social,
            _ => Template::General,
        }
    }
}

/// Voice selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Tone {
    #[default]
    Empathetic,
    Professional,
    Casual,
    Direct,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Empathetic, Tone::Professional, Tone::Casual, Tone::Direct];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Empathetic => "empathetic",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Direct => "direct",
        }
    }

    /// Lenient parse: anything unrecognized becomes `Empathetic`.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "professional" => Tone::Professional,
            "casual" => Tone::Casual,
            "direct" => Tone::Direct,
            _ => Tone::Empathetic,
        }
    }
}

/// Target verbosity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Detailed,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Detailed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Detailed => "detailed",
        }
    }

    /// Lenient parse: anything unrecognized becomes `Medium`.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "short" => Length::Short,
            "detailed" => Length::Detailed,
            _ => Length::Medium,
        }
    }
}

macro_rules! lenient_axis {
    ($axis:ty) => {
        impl From<String> for $axis {
            fn from(raw: String) -> Self {
                <$axis>::normalize(&raw)
            }
        }

        impl FromStr for $axis {
            type Err = Infallible;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Ok(<$axis>::normalize(raw))
            }
        }

        impl fmt::Display for $axis {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

lenient_axis!(Template);
lenient_axis!(Tone);
lenient_axis!(Length);

/// One answered follow-up question carried into the next prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowupAnswer {
    pub question: String,
    pub answer: String,
}

/// Options bag for a single solution request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionOptions {
    #[serde(default)]
    pub template: Template,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: Length,
    /// Keyed by question id; ordered so prompt rendering is deterministic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followup_answers: Option<BTreeMap<String, FollowupAnswer>>,
}

impl SolutionOptions {
    pub fn new(template: Template, tone: Tone, length: Length) -> Self {
        Self {
            template,
            tone,
            length,
            followup_answers: None,
        }
    }

    pub fn with_followup_answers(mut self, answers: BTreeMap<String, FollowupAnswer>) -> Self {
        self.followup_answers = Some(answers);
        self
    }

    /// Answers that carry content; blank answers are skipped.
    pub fn answered_followups(&self) -> impl Iterator<Item = &FollowupAnswer> {
        self.followup_answers
            .iter()
            .flat_map(|answers| answers.values())
            .filter(|entry| !entry.answer.trim().is_empty())
    }
}
