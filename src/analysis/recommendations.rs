use crate::models::AgeBracket;

pub const REST_ADVICE: &str = "Rest and get adequate sleep";
pub const HYDRATION_ADVICE: &str = "Stay well hydrated with water and clear fluids";
pub const ELDERLY_ADVICE: &str = "Monitor symptoms closely and seek medical attention if worsening";
pub const PERSISTENCE_ADVICE: &str =
    "Consult a healthcare provider if symptoms worsen or persist beyond 7 days";
pub const EMERGENCY_ADVICE: &str = "Seek immediate medical attention if you experience difficulty breathing, chest pain, or severe dehydration";

/// Advice appended when any trigger appears in the symptom text.
struct SymptomAdvice {
    triggers: &'static [&'static str],
    lines: [&'static str; 2],
}

/// Checked in this order; output follows the same order.
static SYMPTOM_ADVICE: [SymptomAdvice; 5] = [
    SymptomAdvice {
        triggers: &["fever"],
        lines: [
            "Monitor temperature regularly",
            "Consider over-the-counter fever reducers (acetaminophen or ibuprofen)",
        ],
    },
    SymptomAdvice {
        triggers: &["cough"],
        lines: [
            "Use a humidifier or breathe steam from a hot shower",
            "Consider throat lozenges or warm salt water gargles",
        ],
    },
    SymptomAdvice {
        triggers: &["headache"],
        lines: [
            "Apply cold or warm compress to head/neck",
            "Consider over-the-counter pain relievers",
        ],
    },
    SymptomAdvice {
        triggers: &["nausea", "vomiting"],
        lines: [
            "Eat bland foods (BRAT diet: bananas, rice, applesauce, toast)",
            "Avoid dairy, caffeine, and fatty foods",
        ],
    },
    SymptomAdvice {
        triggers: &["diarrhea"],
        lines: [
            "Increase fluid intake to prevent dehydration",
            "Consider oral rehydration solutions",
        ],
    },
];

/// Build the ordered care advice for a symptom description.
///
/// General care first, then symptom-specific lines, then the 65+ line,
/// then the two safety-net lines. Independent of which conditions scored.
pub fn derive_recommendations(symptoms: &str, age: AgeBracket) -> Vec<String> {
    let lowered = symptoms.to_lowercase();
    let mut recommendations = vec![REST_ADVICE.to_string(), HYDRATION_ADVICE.to_string()];

    for advice in &SYMPTOM_ADVICE {
        if advice.triggers.iter().any(|t| lowered.contains(t)) {
            recommendations.extend(advice.lines.iter().map(|line| line.to_string()));
        }
    }

    if age == AgeBracket::SixtyFivePlus {
        recommendations.push(ELDERLY_ADVICE.to_string());
    }

    recommendations.push(PERSISTENCE_ADVICE.to_string());
    recommendations.push(EMERGENCY_ADVICE.to_string());
    recommendations
}
