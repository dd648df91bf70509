//! Counsel: AI Solution Generation Pipeline
//!
//! Turns a user-submitted problem post into structured advice using a hosted
//! or local language model. Covers prompt construction from template, tone and
//! length options, retrying generation with exponential backoff, clarifying
//! follow-up questions with static fallbacks, multi-approach variants, and
//! heuristic quality scoring of the result.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod followup;
pub mod generation;
pub mod logging;
pub mod options;
pub mod prompt;
pub mod provider;
pub mod types;
pub mod validation;
pub mod variants;
