use super::AnalysisError;
use crate::models::{AnalysisResult, AnalysisSource, SymptomInput};

/// One way of turning a symptom description into an [`AnalysisResult`].
pub trait AnalysisStrategy: Send + Sync {
    /// Tag carried by results from this strategy.
    fn source(&self) -> AnalysisSource;

    fn analyze(&self, input: &SymptomInput) -> Result<AnalysisResult, AnalysisError>;
}

/// Chat-style text generation client abstraction (allows mocking)
pub trait LlmClient: Send + Sync {
    /// Send one system + user exchange and return the reply text.
    fn complete(&self, system: &str, prompt: &str) -> Result<String, AnalysisError>;
}
