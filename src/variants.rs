//! Multi-solution generation.
//!
//! Calls run strictly one after another with a fixed pause between them to
//! keep pressure off the upstream service. There is no retry here: the first
//! failure aborts the batch and nothing partial is returned.

use crate::error::ApiError;
use crate::prompt::{build_varied_prompt, Approach};
use crate::provider::ModelProviderClient;
use crate::types::Post;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info};

pub const DEFAULT_VARIANT_COUNT: usize = 3;
pub const DEFAULT_VARIANT_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_MAX_VARIANT_COUNT: usize = 5;

pub struct MultiVariantGenerator {
    client: Arc<dyn ModelProviderClient>,
    delay: Duration,
    max_count: usize,
}

impl MultiVariantGenerator {
    pub fn new(client: Arc<dyn ModelProviderClient>) -> Self {
        Self::with_settings(client, DEFAULT_VARIANT_DELAY, DEFAULT_MAX_VARIANT_COUNT)
    }

    pub fn with_settings(
        client: Arc<dyn ModelProviderClient>,
        delay: Duration,
        max_count: usize,
    ) -> Self {
        Self {
            client,
            delay,
            max_count,
        }
    }

    pub async fn generate(&self, post: &Post, count: usize) -> Result<Vec<String>, ApiError> {
        if count == 0 || count > self.max_count {
            return Err(ApiError::InvalidInput(format!(
                "Variant count must be between 1 and {}, got {}",
                self.max_count, count
            )));
        }

        let mut solutions = Vec::with_capacity(count);
        for index in 0..count {
            let approach = Approach::for_index(index);
            let prompt = build_varied_prompt(post, index);
            debug!(
                post_id = %post.id,
                index,
                approach = approach.as_str(),
                "Requesting solution variant"
            );

            let text = self.client.complete(&prompt).await.map_err(|err| {
                error!(post_id = %post.id, index, error = %err, "Variant generation failed");
                ApiError::VariantGenerationFailed {
                    index,
                    message: err.to_string(),
                }
            })?;
            if text.trim().is_empty() {
                return Err(ApiError::VariantGenerationFailed {
                    index,
                    message: ApiError::EmptyCompletion.to_string(),
                });
            }
            solutions.push(text);

            if index + 1 < count {
                sleep(self.delay).await;
            }
        }

        info!(post_id = %post.id, count, "Generated solution variants");
        Ok(solutions)
    }
}
