pub mod factcheck;
pub mod llm;

pub use factcheck::{ClaimChecker, ClaimEvaluator, FactCheckError};
pub use llm::{ChatCompletion, LlmClient};
