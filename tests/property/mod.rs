//! Property-based tests for the pure parts of the pipeline

mod option_normalization;
mod validation_scoring;
