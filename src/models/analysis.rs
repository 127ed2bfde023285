use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{AgeBracket, AnalysisSource, Gender};

/// One symptom-checker request, after boundary defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomInput {
    pub symptoms: String,
    pub age: AgeBracket,
    pub gender: Gender,
}

impl SymptomInput {
    /// Input with the default age bracket (26-35) and gender (male).
    pub fn new(symptoms: impl Into<String>) -> Self {
        Self {
            symptoms: symptoms.into(),
            age: AgeBracket::default(),
            gender: Gender::default(),
        }
    }

    pub fn with_age(mut self, age: AgeBracket) -> Self {
        self.age = age;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCondition {
    pub name: String,
    pub probability: u8,
    pub description: String,
}

/// Output of either analysis strategy. Never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub conditions: Vec<ScoredCondition>,
    pub recommendations: Vec<String>,
    pub source: AnalysisSource,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// Assemble a result stamped with the current time.
    pub fn new(
        conditions: Vec<ScoredCondition>,
        recommendations: Vec<String>,
        source: AnalysisSource,
    ) -> Self {
        Self {
            conditions,
            recommendations,
            source,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults() {
        let input = SymptomInput::new("cough");
        assert_eq!(input.age, AgeBracket::TwentySixToThirtyFive);
        assert_eq!(input.gender, Gender::Male);
    }

    #[test]
    fn result_serializes_client_fields() {
        let result = AnalysisResult::new(
            vec![ScoredCondition {
                name: "Migraine".into(),
                probability: 50,
                description: "Severe headache.".into(),
            }],
            vec!["Rest and get adequate sleep".into()],
            AnalysisSource::LocalAnalysis,
        );
        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(json["source"], "local_analysis");
        assert_eq!(json["conditions"][0]["probability"], 50);
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }
}
