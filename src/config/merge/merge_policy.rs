//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("provider.provider_type", "gemini")?
        .set_default("provider.model", "gemini-1.5-flash")?
        .set_default("generation.max_attempts", 3_i64)?
        .set_default("generation.base_delay_ms", 1000_i64)?
        .set_default("generation.max_jitter_ms", 1000_i64)?
        .set_default("generation.variant_delay_ms", 1000_i64)?
        .set_default("generation.default_variant_count", 3_i64)?
        .set_default("generation.max_variant_count", 5_i64)?
        .set_default("generation.validate_responses", true)
}
