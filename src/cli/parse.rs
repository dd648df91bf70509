//! CLI parse: clap types for Counsel. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Counsel CLI - structured advice for problem posts
#[derive(Parser)]
#[command(name = "counsel")]
#[command(about = "Generate, vary, and score AI advice for problem posts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (for config/config.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format for command results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one solution for a post
    Solve {
        /// Post JSON file (id, title, body, subreddit)
        #[arg(long)]
        post: PathBuf,
        /// Feedback on a previous answer to incorporate
        #[arg(long)]
        feedback: Option<String>,
        /// Advice template (general, relationship, career, technical, social)
        #[arg(long)]
        template: Option<String>,
        /// Tone (empathetic, professional, casual, direct)
        #[arg(long)]
        tone: Option<String>,
        /// Length (short, medium, detailed)
        #[arg(long)]
        length: Option<String>,
        /// JSON file of answered follow-up questions keyed by question id
        #[arg(long)]
        answers: Option<PathBuf>,
    },
    /// Generate clarifying follow-up questions for a post
    Questions {
        /// Post JSON file
        #[arg(long)]
        post: PathBuf,
        /// Advice template used to pick fallback questions
        #[arg(long)]
        template: Option<String>,
    },
    /// Generate several solutions, each with a different approach
    Variants {
        /// Post JSON file
        #[arg(long)]
        post: PathBuf,
        /// Number of variants (defaults to generation.default_variant_count)
        #[arg(long)]
        count: Option<usize>,
    },
    /// Score a solution text
    Validate {
        /// Text to score
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,
        /// File containing the text to score
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the effective configuration (API key redacted)
    Config,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Solve { .. } => "solve",
            Commands::Questions { .. } => "questions",
            Commands::Variants { .. } => "variants",
            Commands::Validate { .. } => "validate",
            Commands::Config => "config",
        }
    }
}
