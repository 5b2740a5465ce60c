//! Claim evaluation service using LLM
//!
//! Sends one claim to the provider with a fixed preamble and turns the
//! JSON-mode completion into a validated `AnalysisResult`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::model::{AnalysisResult, GenerationConfig};
use crate::service::factcheck::prompts::FACTCHECK_SYSTEM_PROMPT;
use crate::service::llm::{ChatCompletion, ChatRequest};

pub mod error;
pub mod prompts;
pub mod validation;

pub use error::FactCheckError;

/// Anything that can turn a claim into an analysis
#[async_trait]
pub trait ClaimChecker: Send + Sync {
    async fn check(&self, claim: &str) -> Result<AnalysisResult, FactCheckError>;
}

/// Service evaluating claims against the hosted model
pub struct ClaimEvaluator {
    llm: Arc<dyn ChatCompletion>,
    generation: GenerationConfig,
}

impl ClaimEvaluator {
    pub fn new(llm: Arc<dyn ChatCompletion>, generation: &GenerationConfig) -> Self {
        tracing::info!(
            model = %generation.model,
            temperature = generation.temperature,
            top_p = generation.top_p,
            "Claim evaluator initialized"
        );
        Self {
            llm,
            generation: generation.clone(),
        }
    }

    /// Evaluate a single claim
    ///
    /// Issues exactly one provider call; the claim is sent verbatim as the user message.
    pub async fn evaluate(&self, claim: &str) -> Result<AnalysisResult, FactCheckError> {
        if claim.trim().is_empty() {
            return Err(FactCheckError::BadRequest("claim is empty".to_string()));
        }

        let request = ChatRequest::json_mode(&self.generation, FACTCHECK_SYSTEM_PROMPT, claim);

        tracing::debug!(
            model = %self.generation.model,
            claim_length = claim.len(),
            "Initiating chat completion for claim evaluation"
        );

        let start_time = std::time::Instant::now();

        let response = match self.llm.complete(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    model = %self.generation.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    error = %e,
                    "Chat completion for claim evaluation failed"
                );
                return Err(e.into());
            }
        };

        let Some(content) = response.first_content() else {
            tracing::error!(
                model = %self.generation.model,
                choices = response.choices.len(),
                "Missing or invalid content"
            );
            return Err(FactCheckError::UpstreamInvalid(
                "first choice has no string content".to_string(),
            ));
        };

        let analysis = parse_analysis(content)?;

        tracing::info!(
            model = %self.generation.model,
            elapsed_ms = start_time.elapsed().as_millis(),
            truth_probability = analysis.truth_probability,
            verdict = %analysis.explanation.verdict,
            "Claim evaluation completed successfully"
        );

        Ok(analysis)
    }
}

#[async_trait]
impl ClaimChecker for ClaimEvaluator {
    async fn check(&self, claim: &str) -> Result<AnalysisResult, FactCheckError> {
        self.evaluate(claim).await
    }
}

/// Parse completion text into a schema-conforming analysis
pub fn parse_analysis(content: &str) -> Result<AnalysisResult, FactCheckError> {
    let mut payload: serde_json::Value = serde_json::from_str(content).map_err(|e| {
        tracing::error!(error = %e, "JSON parse error");
        FactCheckError::MalformedPayload(e.to_string())
    })?;

    validation::normalize_probability(&mut payload);
    let validation_result = validation::validate_analysis(&payload);

    if !validation_result.is_valid {
        tracing::error!(
            errors = ?validation_result.errors,
            "Analysis validation failed"
        );
        return Err(FactCheckError::SchemaViolation(validation_result.errors));
    }

    if !validation_result.warnings.is_empty() {
        tracing::warn!(
            warnings = ?validation_result.warnings,
            "Analysis produced quality warnings"
        );
    }

    serde_json::from_value(payload)
        .map_err(|e| FactCheckError::SchemaViolation(vec![e.to_string()]))
}
