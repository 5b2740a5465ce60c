//! Application state and service initialization
//!
//! Builds the provider client and claim evaluator once from `Config` and
//! hands them to the Actix-web handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::model::Config;
use crate::service::{ChatCompletion, ClaimEvaluator, LlmClient};
use crate::ui::Leaderboard;

/// Application state shared by every worker
pub struct AppState {
    /// Claim evaluation service
    pub evaluator: Arc<ClaimEvaluator>,
    /// Decorative scores, generated once at startup
    pub leaderboard: Leaderboard,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// The provider credential is required; startup fails without it.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let api_key = config
            .provider
            .api_key
            .as_deref()
            .ok_or(AppError::MissingConfig(Config::api_key_var()))?;

        let llm_client = LlmClient::new(
            api_key,
            &config.provider.base_url,
            Duration::from_secs(config.generation.timeout_secs),
        )
        .map_err(|e| AppError::InvalidConfig(e.to_string()))?;

        tracing::info!(
            base_url = %config.provider.base_url,
            timeout_secs = config.generation.timeout_secs,
            "LLM client initialized"
        );

        Ok(Self::with_llm(config, Arc::new(llm_client)))
    }

    /// Build state around an existing completion backend
    pub fn with_llm(config: &Config, llm: Arc<dyn ChatCompletion>) -> Self {
        Self {
            evaluator: Arc::new(ClaimEvaluator::new(llm, &config.generation)),
            leaderboard: Leaderboard::generate(),
        }
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
