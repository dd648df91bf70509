//! Prompt construction.
//!
//! [`build_prompt`] is the full single-solution prompt: template, tone and
//! length fragments, optional follow-up transcript, optional feedback block.
//! [`build_varied_prompt`] is a deliberately simpler path used only for
//! multi-solution requests. It ignores tone, length and template and instead
//! frames the post with one of three fixed [`Approach`]es. The two paths are
//! kept separate because single and multi-solution requests ask the model for
//! different things.

use crate::options::SolutionOptions;
use crate::types::Post;
use std::fmt::Write;

pub mod fragments;

/// Framing used by the multi-solution generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Approach {
    Direct,
    Strategic,
    Empathetic,
}

impl Approach {
    /// Selection order; index `i` maps to `ORDER[i % ORDER.len()]`.
    pub const ORDER: [Approach; 3] = [Approach::Direct, Approach::Strategic, Approach::Empathetic];

    pub fn for_index(variation_index: usize) -> Self {
        Self::ORDER[variation_index % Self::ORDER.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Approach::Direct => "direct",
            Approach::Strategic => "strategic",
            Approach::Empathetic => "empathetic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Approach::Direct => {
                "a direct, practical approach focused on concrete actions they can take right away"
            }
            Approach::Strategic => {
                "a strategic, long-term approach that looks at root causes and plans several steps ahead"
            }
            Approach::Empathetic => {
                "an empathetic, emotionally supportive approach that centers their feelings and wellbeing"
            }
        }
    }
}

fn write_post_context(prompt: &mut String, post: &Post) {
    let _ = writeln!(prompt, "Subreddit: r/{}", post.subreddit);
    let _ = writeln!(prompt, "Title: {}", post.title);
    let _ = writeln!(prompt, "Post: {}", post.body_or_placeholder());
}

pub fn build_prompt(post: &Post, feedback: Option<&str>, options: &SolutionOptions) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are a thoughtful advisor helping someone who asked for help on Reddit.\n\n",
    );
    write_post_context(&mut prompt, post);

    let mut answered = options.answered_followups().peekable();
    if answered.peek().is_some() {
        prompt.push_str("\nAdditional context from the person:\n");
        for entry in answered {
            let _ = writeln!(prompt, "Q: {}", entry.question.trim());
            let _ = writeln!(prompt, "A: {}", entry.answer.trim());
        }
    }

    let _ = write!(
        prompt,
        "\nApproach: {}\nLanguage style: {}\nLength: {}\n",
        fragments::template_approach(options.template),
        fragments::tone_style(options.tone),
        fragments::length_guidance(options.length),
    );

    let _ = write!(
        prompt,
        "\nStructure your response exactly like this:\n\
         {opening}\n\n\
         **Understanding Your Situation**\n\
         Briefly reflect the core problem back to them.\n\n\
         **{action}**\n\
         Give specific, numbered suggestions they can act on.\n\n\
         **{closing_header}**\n\
         {closing}\n",
        opening = fragments::OPENING_LINE,
        action = fragments::template_action_header(options.template),
        closing_header = fragments::CLOSING_HEADER,
        closing = fragments::CLOSING_LINE,
    );

    if let Some(feedback) = feedback.map(str::trim).filter(|f| !f.is_empty()) {
        let _ = write!(
            prompt,
            "\nThe person reviewed a previous answer and left this feedback:\n\
             \"{feedback}\"\n\
             Incorporate this feedback into the new response.\n"
        );
    }

    prompt
}

pub fn build_varied_prompt(post: &Post, variation_index: usize) -> String {
    let approach = Approach::for_index(variation_index);
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "Give advice to this person using {}.\n",
        approach.description()
    );
    write_post_context(&mut prompt, post);
    prompt.push_str(
        "\nKeep the response focused and actionable, around 200-300 words. \
         Do not repeat the post back to them.\n",
    );

    prompt
}

/// JSON-instruction prompt for follow-up questions.
pub fn build_follow_up_prompt(post: &Post, options: &SolutionOptions) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "Before giving advice, we want to ask the person a few clarifying questions.\n\n",
    );
    write_post_context(&mut prompt, post);
    let _ = write!(
        prompt,
        "\nAdvice category: {}\n\n\
         Write 3-4 short follow-up questions that would help give better advice.\n\
         Tag each question with exactly one type:\n\
         - \"context\": background about the situation\n\
         - \"attempts\": what they have already tried\n\
         - \"goals\": the outcome they want\n\
         - \"specifics\": concrete details that are missing\n\n\
         Respond with a JSON array only, no prose and no code fences:\n\
         [{{\"id\": 1, \"text\": \"question\", \"type\": \"context\"}}]\n",
        options.template.as_str(),
    );

    prompt
}
