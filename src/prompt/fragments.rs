//! Fixed instruction fragments keyed by option axis.

use crate::options::{Length, Template, Tone};

pub fn template_approach(template: Template) -> &'static str {
    match template {
        Template::General => {
            "Provide balanced, practical advice that addresses the core issue directly \
             while acknowledging the person's feelings."
        }
        Template::Relationship => {
            "Focus on communication, healthy boundaries, and the emotional dynamics \
             between the people involved. Consider both perspectives fairly."
        }
        Template::Career => {
            "Focus on professional development, workplace dynamics, and concrete career \
             moves. Weigh short-term options against long-term growth."
        }
        Template::Technical => {
            "Give a clear, step-by-step troubleshooting path with specific technical \
             solutions. Call out likely root causes before fixes."
        }
        Template::Social => {
            "Focus on social dynamics, etiquette, and ways to build or repair \
             connections. Suggest wording the person could actually use."
        }
    }
}

pub fn template_action_header(template: Template) -> &'static str {
    match template {
        Template::General => "Steps You Can Take",
        Template::Relationship => "Ways to Move Forward Together",
        Template::Career => "Your Career Action Plan",
        Template::Technical => "Solution Steps",
        Template::Social => "Navigating the Situation",
    }
}

pub fn tone_style(tone: Tone) -> &'static str {
    match tone {
        Tone::Empathetic => {
            "Use warm, compassionate language. Validate their feelings before offering \
             suggestions."
        }
        Tone::Professional => {
            "Use clear, measured, professional language. Stay objective and \
             well-structured."
        }
        Tone::Casual => {
            "Use relaxed, friendly language, like a trusted friend giving honest advice."
        }
        Tone::Direct => {
            "Be straightforward and concise. Get to the point without unnecessary \
             softening."
        }
    }
}

pub fn length_guidance(length: Length) -> &'static str {
    match length {
        Length::Short => "Keep the response brief: roughly 150-200 words.",
        Length::Medium => "Aim for a moderate response of roughly 250-400 words.",
        Length::Detailed => "Write a thorough response of roughly 500-700 words.",
    }
}

pub const OPENING_LINE: &str =
    "Start with one sentence that acknowledges what the person is going through.";

pub const CLOSING_HEADER: &str = "A Final Word";

pub const CLOSING_LINE: &str =
    "End with brief, genuine encouragement that reminds them they can handle this.";
