//! Unknown option values never fail and always select the default fragments

use counsel::options::{Length, SolutionOptions, Template, Tone};
use counsel::prompt::fragments::{length_guidance, template_action_header, tone_style};
use counsel::prompt::{build_prompt, build_varied_prompt};
use counsel::types::Post;
use proptest::prelude::*;

fn is_known(raw: &str, names: &[&str]) -> bool {
    let lowered = raw.trim().to_ascii_lowercase();
    names.iter().any(|name| *name == lowered)
}

#[test]
fn test_unknown_option_strings_fall_back_to_defaults() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let templates: Vec<&str> = Template::ALL.iter().map(|t| t.as_str()).collect();
    let tones: Vec<&str> = Tone::ALL.iter().map(|t| t.as_str()).collect();
    let lengths: Vec<&str> = Length::ALL.iter().map(|l| l.as_str()).collect();

    runner
        .run(&any::<String>(), |raw| {
            let template: Template = raw.parse().unwrap();
            if !is_known(&raw, &templates) {
                prop_assert_eq!(template, Template::General);
            }
            let tone: Tone = raw.parse().unwrap();
            if !is_known(&raw, &tones) {
                prop_assert_eq!(tone, Tone::Empathetic);
            }
            let length: Length = raw.parse().unwrap();
            if !is_known(&raw, &lengths) {
                prop_assert_eq!(length, Length::Medium);
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_deserialized_options_never_fail_on_strings() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}"), |(t, o, l)| {
            let json = serde_json::json!({ "template": t, "tone": o, "length": l });
            let options: SolutionOptions = serde_json::from_value(json).unwrap();
            prop_assert_eq!(options.template, Template::normalize(&t));
            prop_assert_eq!(options.tone, Tone::normalize(&o));
            prop_assert_eq!(options.length, Length::normalize(&l));
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_prompt_always_contains_selected_fragments() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let axes = (
        prop::sample::select(Template::ALL.to_vec()),
        prop::sample::select(Tone::ALL.to_vec()),
        prop::sample::select(Length::ALL.to_vec()),
    );

    runner
        .run(&(axes, "[a-z ]{1,40}"), |((template, tone, length), title)| {
            let post = Post::new("id", title, "", "advice");
            let options = SolutionOptions::new(template, tone, length);
            let prompt = build_prompt(&post, None, &options);
            prop_assert!(prompt.contains(template_action_header(template)));
            prop_assert!(prompt.contains(tone_style(tone)));
            prop_assert!(prompt.contains(length_guidance(length)));
            prop_assert!(prompt.contains("(No additional details provided)"));
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_varied_prompts_cycle_every_three() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(0usize..1000, "[a-z ]{1,40}"), |(index, title)| {
            let post = Post::new("id", title, "body", "advice");
            prop_assert_eq!(
                build_varied_prompt(&post, index),
                build_varied_prompt(&post, index % 3)
            );
            Ok(())
        })
        .unwrap();
}
