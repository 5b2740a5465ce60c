//! Claim submission state machine
//!
//! One session owns the claim text and the single "current result" slot.
//! Transitions: Idle -> Submitting -> Displaying | Failed -> Submitting -> ...

use crate::model::AnalysisResult;
use crate::service::{ClaimChecker, FactCheckError};

/// Where a session is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Displaying(AnalysisResult),
    Failed(String),
}

/// Why a submit attempt was turned into a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("claim is empty")]
    EmptyClaim,
    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Debug, Default)]
pub struct ClaimSession {
    claim: String,
    state: SubmissionState,
}

impl ClaimSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_claim(claim: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
            state: SubmissionState::Idle,
        }
    }

    pub fn claim(&self) -> &str {
        &self.claim
    }

    #[cfg(test)]
    pub fn set_claim(&mut self, claim: impl Into<String>) {
        self.claim = claim.into();
    }

    #[cfg(test)]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Submit is enabled when not in flight and the trimmed claim is non-empty
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.claim.trim().is_empty()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            SubmissionState::Displaying(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enter Submitting and hand back the exact claim to send
    ///
    /// Any previous result or error is dropped before the request goes out.
    pub fn begin_submission(&mut self) -> Result<String, SubmitRejected> {
        if self.is_loading() {
            return Err(SubmitRejected::InFlight);
        }
        if self.claim.trim().is_empty() {
            return Err(SubmitRejected::EmptyClaim);
        }
        self.state = SubmissionState::Submitting;
        Ok(self.claim.clone())
    }

    /// Leave Submitting with the outcome; ignored (returns false) in any other state
    ///
    /// Failures keep only the caller-facing message; the detail goes to the log.
    pub fn complete(&mut self, outcome: Result<AnalysisResult, FactCheckError>) -> bool {
        if !self.is_loading() {
            tracing::debug!("Ignoring completion outside of an in-flight submission");
            return false;
        }
        self.state = match outcome {
            Ok(result) => SubmissionState::Displaying(result),
            Err(e) => {
                tracing::error!(error = %e, "Claim submission failed");
                SubmissionState::Failed(e.public_message().to_string())
            }
        };
        true
    }

    /// Run one full submit cycle against `checker`
    pub async fn submit(&mut self, checker: &dyn ClaimChecker) -> Result<(), SubmitRejected> {
        let claim = self.begin_submission()?;
        let outcome = checker.check(&claim).await;
        self.complete(outcome);
        Ok(())
    }
}
