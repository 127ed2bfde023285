use super::parser::parse_analysis_response;
use super::prompt::{build_analysis_prompt, ANALYSIS_SYSTEM_PROMPT};
use super::types::{AnalysisStrategy, LlmClient};
use super::AnalysisError;
use crate::models::{AnalysisResult, AnalysisSource, SymptomInput};

/// Delegates analysis to an external text-generation model.
///
/// Conditions come back exactly as the model ranked and scored them.
pub struct RemoteStrategy<C: LlmClient> {
    client: C,
}

impl<C: LlmClient> RemoteStrategy<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: LlmClient> AnalysisStrategy for RemoteStrategy<C> {
    fn source(&self) -> AnalysisSource {
        AnalysisSource::OpenAi
    }

    fn analyze(&self, input: &SymptomInput) -> Result<AnalysisResult, AnalysisError> {
        let prompt = build_analysis_prompt(input);
        let reply = self.client.complete(ANALYSIS_SYSTEM_PROMPT, &prompt)?;
        let parsed = parse_analysis_response(&reply)?;
        tracing::debug!(
            conditions = parsed.conditions.len(),
            recommendations = parsed.recommendations.len(),
            "Remote analysis parsed"
        );
        Ok(AnalysisResult::new(
            parsed.conditions,
            parsed.recommendations,
            AnalysisSource::OpenAi,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::openai::MockLlmClient;

    #[test]
    fn wraps_parsed_reply_as_openai() {
        let client = MockLlmClient::new(
            r#"{"conditions":[{"name":"Strep Throat","probability":97,"description":"Bacterial."}],
                "recommendations":["See a clinician"]}"#,
        );
        let result = RemoteStrategy::new(client)
            .analyze(&SymptomInput::new("sore throat"))
            .unwrap();
        assert_eq!(result.source, AnalysisSource::OpenAi);
        // Remote scores are not clamped to the local ceiling
        assert_eq!(result.conditions[0].probability, 97);
        assert_eq!(result.recommendations, vec!["See a clinician"]);
    }

    #[test]
    fn transport_error_propagates() {
        let strategy = RemoteStrategy::new(MockLlmClient::failing(500));
        assert!(matches!(
            strategy.analyze(&SymptomInput::new("x")),
            Err(AnalysisError::RemoteStatus { status: 500, .. })
        ));
    }

    #[test]
    fn malformed_reply_propagates() {
        let strategy = RemoteStrategy::new(MockLlmClient::new("I think it's a cold."));
        assert!(matches!(
            strategy.analyze(&SymptomInput::new("x")),
            Err(AnalysisError::JsonParsing(_))
        ));
    }
}
