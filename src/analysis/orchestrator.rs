use super::local::LocalStrategy;
use super::openai::OpenAiClient;
use super::remote::RemoteStrategy;
use super::types::AnalysisStrategy;
use super::AnalysisError;
use crate::config::RemoteConfig;
use crate::models::{AnalysisResult, SymptomInput};

/// Entry point for symptom analysis.
///
/// Tries the remote strategy when one is configured and falls back to the
/// local analyzer on any remote failure. Callers always get a result.
pub struct SymptomAnalysisService {
    remote: Option<Box<dyn AnalysisStrategy>>,
    local: LocalStrategy,
}

impl SymptomAnalysisService {
    /// Service that never leaves the process.
    pub fn local_only() -> Self {
        Self {
            remote: None,
            local: LocalStrategy,
        }
    }

    /// Service that tries `remote` first.
    pub fn with_remote(remote: impl AnalysisStrategy + 'static) -> Self {
        Self {
            remote: Some(Box::new(remote)),
            local: LocalStrategy,
        }
    }

    /// Build from configuration. A missing or placeholder credential selects local-only.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, AnalysisError> {
        match OpenAiClient::from_config(config)? {
            Some(client) => {
                tracing::info!(model = client.model(), "Remote symptom analysis enabled");
                Ok(Self::with_remote(RemoteStrategy::new(client)))
            }
            None => {
                tracing::info!("OpenAI API key not found. Using local symptom analysis.");
                Ok(Self::local_only())
            }
        }
    }

    pub fn remote_enabled(&self) -> bool {
        self.remote.is_some()
    }

    /// Analyze one symptom description. Never fails.
    pub fn analyze_symptoms(&self, input: &SymptomInput) -> AnalysisResult {
        if let Some(remote) = &self.remote {
            match remote.analyze(input) {
                Ok(result) => return result,
                Err(e) => {
                    tracing::warn!(error = %e, "Remote analysis failed, falling back to local analysis");
                }
            }
        }
        self.local.analyze_locally(input)
    }
}

impl Default for SymptomAnalysisService {
    fn default() -> Self {
        Self::local_only()
    }
}
