//! Shared test utilities for integration tests
//!
//! A scripted provider that replays canned outcomes and records every prompt,
//! plus isolated XDG/HOME setup for configuration tests.

use async_trait::async_trait;
use counsel::error::ApiError;
use counsel::provider::ModelProviderClient;
use counsel::types::Post;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Mutex as StdMutex;
use tempfile::TempDir;
use tokio::time::Instant;

/// Provider that replays scripted outcomes in order, then repeats `fallback`.
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Result<String, ApiError>>>,
    fallback: Result<String, ApiError>,
    prompts: Mutex<Vec<String>>,
    call_times: Mutex<Vec<Instant>>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Result<String, ApiError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback: Ok("Scripted response".to_string()),
            prompts: Mutex::new(Vec::new()),
            call_times: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
            call_times: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Err(ApiError::ProviderError(message.to_string())),
            prompts: Mutex::new(Vec::new()),
            call_times: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    /// Time between consecutive calls, on tokio's clock.
    pub fn call_gaps(&self) -> Vec<std::time::Duration> {
        self.call_times
            .lock()
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect()
    }
}

#[async_trait]
impl ModelProviderClient for ScriptedProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        self.prompts.lock().push(prompt.to_string());
        self.call_times.lock().push(Instant::now());
        let next = self.script.lock().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

pub fn sample_post() -> Post {
    Post::new(
        "abc123",
        "My coworker keeps taking credit for my work",
        "In meetings they present my analysis as their own.",
        "careerguidance",
    )
}

/// Global mutex to serialize HOME / XDG / COUNSEL_* access across all tests
static XDG_ENV_MUTEX: StdMutex<()> = StdMutex::new(());

const ISOLATED_VARS: &[&str] = &[
    "HOME",
    "XDG_CONFIG_HOME",
    "COUNSEL_ENV",
    "GEMINI_API_KEY",
    "OPENAI_API_KEY",
];

/// Run `f` with HOME and XDG_CONFIG_HOME pointed into `test_dir` and the
/// counsel-specific variables cleared. The environment is restored afterwards.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<(&str, Option<String>)> = ISOLATED_VARS
        .iter()
        .map(|name| (*name, std::env::var(name).ok()))
        .collect();

    let test_home = test_dir.path().join("home");
    let test_config_home = test_dir.path().join("config");
    std::fs::create_dir_all(&test_home).unwrap();
    std::fs::create_dir_all(&test_config_home).unwrap();

    for name in ISOLATED_VARS {
        std::env::remove_var(name);
    }
    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_config_home.to_str().unwrap());

    let result = f();

    for (name, value) in saved {
        match value {
            Some(value) => std::env::set_var(name, value),
            None => std::env::remove_var(name),
        }
    }

    result
}
