//! CLI route: single route table and run context. Dispatches to `SolutionApi`
//! and presentation.

use crate::api::SolutionApi;
use crate::config::{ConfigLoader, CounselConfig};
use crate::options::{FollowupAnswer, Length, SolutionOptions, Template, Tone};
use crate::types::Post;
use crate::validation;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_questions_text, format_solution_text, format_validation_text, format_variants_text,
};

/// Runtime context for CLI execution: loaded config and output format.
/// The provider client is only built by commands that call the model.
pub struct RunContext {
    config: CounselConfig,
    format: OutputFormat,
}

impl RunContext {
    /// Load configuration from an explicit file, or layered from the workspace.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        format: OutputFormat,
    ) -> Result<Self> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?,
            None => ConfigLoader::load(&workspace_root).with_context(|| {
                format!("Failed to load configuration for {}", workspace_root.display())
            })?,
        };
        Ok(Self::from_config(config, format))
    }

    pub fn from_config(config: CounselConfig, format: OutputFormat) -> Self {
        Self { config, format }
    }

    pub fn config(&self) -> &CounselConfig {
        &self.config
    }

    fn api(&self) -> Result<SolutionApi> {
        Ok(SolutionApi::from_config(&self.config)?)
    }

    /// Execute a CLI command via the single route table.
    pub async fn execute(&self, command: &Commands) -> Result<String> {
        debug!(command = command.name(), "Executing command");
        match command {
            Commands::Solve {
                post,
                feedback,
                template,
                tone,
                length,
                answers,
            } => {
                let post = read_post(post)?;
                let mut options =
                    build_options(template.as_deref(), tone.as_deref(), length.as_deref());
                if let Some(path) = answers {
                    options = options.with_followup_answers(read_answers(path)?);
                }
                let response = self
                    .api()?
                    .generate_solution(&post, feedback.as_deref(), &options)
                    .await?;
                self.render(&response, format_solution_text)
            }
            Commands::Questions { post, template } => {
                let post = read_post(post)?;
                let options = build_options(template.as_deref(), None, None);
                let questions = self
                    .api()?
                    .generate_follow_up_questions(&post, &options)
                    .await;
                self.render(&questions, |q| format_questions_text(q))
            }
            Commands::Variants { post, count } => {
                let post = read_post(post)?;
                let variants = self
                    .api()?
                    .generate_multiple_solutions(&post, *count)
                    .await?;
                self.render(&variants, |v| format_variants_text(v))
            }
            Commands::Validate { text, file } => {
                let text = match (text, file) {
                    (Some(text), _) => text.clone(),
                    (None, Some(path)) => std::fs::read_to_string(path)
                        .with_context(|| format!("Failed to read {}", path.display()))?,
                    (None, None) => anyhow::bail!("Provide --text or --file"),
                };
                let result = validation::validate(&text);
                self.render(&result, format_validation_text)
            }
            Commands::Config => {
                let redacted = self.config.redacted();
                match self.format {
                    OutputFormat::Json => Ok(serde_json::to_string_pretty(&redacted)?),
                    OutputFormat::Text => {
                        let body = toml::to_string_pretty(&redacted)
                            .context("Failed to render configuration as TOML")?;
                        match ConfigLoader::global_config_path() {
                            Some(path) => {
                                Ok(format!("# Global config file: {}\n{}", path.display(), body))
                            }
                            None => Ok(body),
                        }
                    }
                }
            }
        }
    }

    fn render<T, F>(&self, value: &T, text: F) -> Result<String>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Text => Ok(text(value)),
        }
    }
}

fn build_options(
    template: Option<&str>,
    tone: Option<&str>,
    length: Option<&str>,
) -> SolutionOptions {
    SolutionOptions::new(
        template.map(Template::normalize).unwrap_or_default(),
        tone.map(Tone::normalize).unwrap_or_default(),
        length.map(Length::normalize).unwrap_or_default(),
    )
}

fn read_post(path: &Path) -> Result<Post> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read post file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid post JSON in {}", path.display()))
}

fn read_answers(path: &Path) -> Result<BTreeMap<String, FollowupAnswer>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid answers JSON in {}", path.display()))
}
