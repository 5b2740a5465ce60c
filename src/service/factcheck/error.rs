//! Error types for claim evaluation

use thiserror::Error;

use crate::service::llm::LlmError;

/// Error type for claim evaluation
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FactCheckError {
    #[error("Missing or invalid claim: {0}")]
    BadRequest(String),

    #[error("Provider returned no usable content: {0}")]
    UpstreamInvalid(String),

    #[error("Provider content is not valid JSON: {0}")]
    MalformedPayload(String),

    #[error("Analysis does not match the expected schema: {}", .0.join("; "))]
    SchemaViolation(Vec<String>),

    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl From<LlmError> for FactCheckError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Decode(msg) => FactCheckError::UpstreamInvalid(msg),
            other => FactCheckError::ProviderUnavailable(other.to_string()),
        }
    }
}

impl FactCheckError {
    /// Generic message shown to callers; details stay in the logs
    pub fn public_message(&self) -> &'static str {
        match self {
            FactCheckError::BadRequest(_) => "Missing or invalid prompt",
            FactCheckError::UpstreamInvalid(_) => "No valid response from AI",
            FactCheckError::MalformedPayload(_) => "Malformed JSON from AI",
            FactCheckError::SchemaViolation(_) => "Invalid analysis from AI",
            FactCheckError::ProviderUnavailable(_) => "AI provider unavailable",
        }
    }
}
