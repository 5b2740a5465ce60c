//! Fact-check analysis returned by the model

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of key points and sources every analysis must carry
pub const EXPLANATION_ITEMS: usize = 3;

/// Upper bound of `truthProbability`
pub const MAX_TRUTH_PROBABILITY: u8 = 100;

/// Structured evaluation of a single claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalysisResult {
    /// Percent likelihood the claim is true (0-100)
    pub truth_probability: u8,
    pub explanation: Explanation,
}

/// Verdict with its supporting reasons and sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Explanation {
    pub verdict: Verdict,
    /// Exactly three reasons, in the order the model gave them
    pub key_points: Vec<String>,
    /// Exactly three domains or citations, in the order the model gave them
    pub sources: Vec<String>,
}

/// Categorical verdict label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Verdict {
    #[serde(rename = "Likely Myth")]
    LikelyMyth,
    #[serde(rename = "Likely Truth")]
    LikelyTruth,
    Myth,
    Truth,
}

impl Verdict {
    pub const ALL: [Verdict; 4] = [
        Verdict::LikelyMyth,
        Verdict::LikelyTruth,
        Verdict::Myth,
        Verdict::Truth,
    ];

    /// Label as it appears on the wire and on the page
    pub fn label(self) -> &'static str {
        match self {
            Verdict::LikelyMyth => "Likely Myth",
            Verdict::LikelyTruth => "Likely Truth",
            Verdict::Myth => "Myth",
            Verdict::Truth => "Truth",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Request body of the fact-check endpoint
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FactCheckRequest {
    /// The claim to evaluate
    pub prompt: String,
}
