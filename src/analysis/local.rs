use super::recommendations::derive_recommendations;
use super::scoring::score_conditions;
use super::types::AnalysisStrategy;
use super::AnalysisError;
use crate::models::{AnalysisResult, AnalysisSource, SymptomInput};

/// Deterministic, network-free keyword analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStrategy;

impl LocalStrategy {
    /// Infallible form used by the orchestrator's fallback path.
    pub fn analyze_locally(&self, input: &SymptomInput) -> AnalysisResult {
        let conditions = score_conditions(&input.symptoms, input.age, input.gender);
        let recommendations = derive_recommendations(&input.symptoms, input.age);
        AnalysisResult::new(conditions, recommendations, AnalysisSource::LocalAnalysis)
    }
}

impl AnalysisStrategy for LocalStrategy {
    fn source(&self) -> AnalysisSource {
        AnalysisSource::LocalAnalysis
    }

    fn analyze(&self, input: &SymptomInput) -> Result<AnalysisResult, AnalysisError> {
        Ok(self.analyze_locally(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeBracket, Gender};

    #[test]
    fn tags_result_as_local() {
        let result = LocalStrategy.analyze_locally(&SymptomInput::new("cough"));
        assert_eq!(result.source, AnalysisSource::LocalAnalysis);
        assert_eq!(LocalStrategy.source(), AnalysisSource::LocalAnalysis);
    }

    #[test]
    fn repeated_calls_are_identical_apart_from_timestamp() {
        let input = SymptomInput::new("Fever, chills, body aches")
            .with_age(AgeBracket::SixtyFivePlus)
            .with_gender(Gender::Female);
        let first = LocalStrategy.analyze_locally(&input);
        let second = LocalStrategy.analyze_locally(&input);
        assert_eq!(first.conditions, second.conditions);
        assert_eq!(first.recommendations, second.recommendations);
        assert_eq!(first.source, second.source);
    }

    #[test]
    fn trait_path_never_fails() {
        let result = LocalStrategy.analyze(&SymptomInput::new("")).unwrap();
        assert_eq!(result.conditions.len(), 3);
        assert_eq!(result.recommendations.len(), 4);
    }
}
