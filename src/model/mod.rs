pub mod analysis;
pub mod config;

pub use analysis::{AnalysisResult, Explanation, FactCheckRequest, Verdict};
pub use config::{Config, GenerationConfig};
