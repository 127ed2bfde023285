use crate::models::SymptomInput;

/// System message sent with every remote analysis request.
pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are a medical assistant providing preliminary symptom analysis. Always remind users to consult healthcare professionals.";

/// Build the user prompt embedding patient details and the expected JSON shape.
pub fn build_analysis_prompt(input: &SymptomInput) -> String {
    format!(
        r#"As a medical assistant, analyze these symptoms and provide a medical assessment.

Patient Details:
- Age: {age}
- Gender: {gender}
- Symptoms: {symptoms}

Please provide:
1. Top 3 most likely conditions with probability percentages
2. Specific recommendations for care

Format your response as JSON with this structure:
{{
  "conditions": [
    {{
      "name": "condition name",
      "probability": 85,
      "description": "brief description"
    }}
  ],
  "recommendations": [
    "recommendation 1",
    "recommendation 2"
  ]
}}

Important: This is for educational purposes only and should not replace professional medical advice."#,
        age = input.age,
        gender = input.gender,
        symptoms = input.symptoms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeBracket, Gender};

    #[test]
    fn prompt_embeds_patient_details() {
        let input = SymptomInput::new("  dry cough for three days ")
            .with_age(AgeBracket::FiftySixToSixtyFive)
            .with_gender(Gender::Other);
        let prompt = build_analysis_prompt(&input);
        assert!(prompt.contains("- Age: 56-65"));
        assert!(prompt.contains("- Gender: other"));
        assert!(prompt.contains("- Symptoms:   dry cough for three days \n"));
    }

    #[test]
    fn prompt_requests_json_shape() {
        let prompt = build_analysis_prompt(&SymptomInput::new("rash"));
        assert!(prompt.contains("\"conditions\": ["));
        assert!(prompt.contains("\"recommendations\": ["));
        assert!(prompt.contains("\"probability\": 85"));
    }
}
