//! Solution API
//!
//! The caller-facing surface of the pipeline. Every operation the application
//! layer needs goes through [`SolutionApi`]; it wires prompt construction,
//! retrying generation, follow-up questions, variants, and validation around a
//! single shared provider client.

use crate::config::{CounselConfig, GenerationSettings};
use crate::error::ApiError;
use crate::followup::FollowUpQuestionGenerator;
use crate::generation::GenerationOrchestrator;
use crate::options::SolutionOptions;
use crate::prompt::build_prompt;
use crate::provider::{ModelProviderClient, ProviderFactory};
use crate::types::{FollowUpQuestion, GeneratedSolution, Post, SolutionResponse};
use crate::validation::{self, ValidationResult};
use crate::variants::MultiVariantGenerator;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct SolutionApi {
    client: Arc<dyn ModelProviderClient>,
    settings: GenerationSettings,
    orchestrator: GenerationOrchestrator,
    questions: FollowUpQuestionGenerator,
    variants: MultiVariantGenerator,
}

impl SolutionApi {
    pub fn new(client: Arc<dyn ModelProviderClient>, settings: GenerationSettings) -> Self {
        let orchestrator =
            GenerationOrchestrator::with_policy(Arc::clone(&client), settings.retry_policy());
        let questions = FollowUpQuestionGenerator::new(Arc::clone(&client));
        let variants = MultiVariantGenerator::with_settings(
            Arc::clone(&client),
            settings.variant_delay(),
            settings.max_variant_count,
        );
        Self {
            client,
            settings,
            orchestrator,
            questions,
            variants,
        }
    }

    /// Validate `config` and build the provider client it describes.
    pub fn from_config(config: &CounselConfig) -> Result<Self, ApiError> {
        if let Err(errors) = config.validate() {
            let joined = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ApiError::ConfigError(joined));
        }
        let client = ProviderFactory::create_client(&config.provider)?;
        Ok(Self::new(client, config.generation.clone()))
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Generate one solution for `post`, retrying transient upstream failures.
    ///
    /// Blank `feedback` is treated as absent. The response carries a
    /// validation report unless validation is disabled in settings.
    pub async fn generate_solution(
        &self,
        post: &Post,
        feedback: Option<&str>,
        options: &SolutionOptions,
    ) -> Result<SolutionResponse, ApiError> {
        let prompt = build_prompt(post, feedback, options);
        debug!(
            post_id = %post.id,
            template = %options.template,
            tone = %options.tone,
            length = %options.length,
            prompt_len = prompt.len(),
            "Generating solution"
        );

        let started = Instant::now();
        let text = self.orchestrator.generate(&prompt).await?;
        let timing_ms = started.elapsed().as_millis() as u64;

        if text.trim().is_empty() {
            warn!(post_id = %post.id, "Provider returned an empty completion");
            return Err(ApiError::EmptyCompletion);
        }

        let solution = GeneratedSolution::new(text, timing_ms, self.client.model_name());
        let validation = self
            .settings
            .validate_responses
            .then(|| validation::validate(&solution.text));

        info!(
            post_id = %post.id,
            char_count = solution.char_count,
            timing_ms,
            score = validation.as_ref().map(|v| v.score),
            "Solution generated"
        );

        Ok(SolutionResponse {
            solution,
            validation,
        })
    }

    /// Clarifying questions for `post`. Never fails: upstream or parse
    /// problems resolve to the fallback set for the selected template.
    pub async fn generate_follow_up_questions(
        &self,
        post: &Post,
        options: &SolutionOptions,
    ) -> Vec<FollowUpQuestion> {
        self.questions.generate(post, options).await
    }

    /// `count` solutions, one per approach in rotation. Defaults to the
    /// configured variant count.
    pub async fn generate_multiple_solutions(
        &self,
        post: &Post,
        count: Option<usize>,
    ) -> Result<Vec<String>, ApiError> {
        let count = count.unwrap_or(self.settings.default_variant_count);
        let started = Instant::now();
        let solutions = self.variants.generate(post, count).await?;
        info!(
            post_id = %post.id,
            count = solutions.len(),
            timing_ms = started.elapsed().as_millis() as u64,
            "Solution variants generated"
        );
        Ok(solutions)
    }

    pub fn validate_solution(&self, text: &str) -> ValidationResult {
        validation::validate(text)
    }
}
