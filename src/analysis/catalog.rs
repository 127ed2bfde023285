/// A primary-care condition the local analyzer can suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionEntry {
    pub name: &'static str,
    /// Prior likelihood (0-100) before any keyword matches.
    pub base_probability: u8,
    pub description: &'static str,
    /// Lowercase substrings looked up in the lowercased symptom text.
    pub keywords: &'static [&'static str],
}

/// Fixed condition catalog. Declaration order breaks score ties.
pub static CONDITION_CATALOG: [ConditionEntry; 8] = [
    ConditionEntry {
        name: "Viral Upper Respiratory Infection",
        base_probability: 70,
        description: "Common cold symptoms including nasal congestion, runny nose, and mild fever. Usually resolves within 7-10 days.",
        keywords: &["cold", "runny nose", "congestion", "sneezing", "mild fever"],
    },
    ConditionEntry {
        name: "Influenza (Flu)",
        base_probability: 60,
        description: "Viral infection causing fever, body aches, fatigue, and respiratory symptoms. More severe than common cold.",
        keywords: &["flu", "fever", "body aches", "fatigue", "chills", "headache"],
    },
    ConditionEntry {
        name: "Gastroenteritis",
        base_probability: 50,
        description: "Stomach flu causing nausea, vomiting, diarrhea, and abdominal pain. Often resolves within 2-3 days.",
        keywords: &["nausea", "vomiting", "diarrhea", "stomach pain", "abdominal pain"],
    },
    ConditionEntry {
        name: "Allergic Rhinitis",
        base_probability: 45,
        description: "Allergic reaction to airborne substances causing sneezing, runny nose, and itchy eyes.",
        keywords: &["allergies", "sneezing", "itchy eyes", "runny nose", "seasonal"],
    },
    ConditionEntry {
        name: "Tension Headache",
        base_probability: 40,
        description: "Most common type of headache, often caused by stress, lack of sleep, or dehydration.",
        keywords: &["headache", "head pain", "stress", "tension"],
    },
    ConditionEntry {
        name: "Acute Bronchitis",
        base_probability: 55,
        description: "Inflammation of the bronchial tubes causing persistent cough, often with mucus production.",
        keywords: &["cough", "bronchitis", "mucus", "chest congestion"],
    },
    ConditionEntry {
        name: "Migraine",
        base_probability: 35,
        description: "Severe headache often accompanied by nausea, vomiting, and sensitivity to light and sound.",
        keywords: &["migraine", "severe headache", "nausea", "light sensitivity"],
    },
    ConditionEntry {
        name: "Urinary Tract Infection",
        base_probability: 30,
        description: "Bacterial infection of the urinary system causing painful urination and frequent urge to urinate.",
        keywords: &["uti", "burning urination", "frequent urination", "bladder pain"],
    },
];

impl ConditionEntry {
    /// Number of keywords contained in `lowered_text`.
    ///
    /// Plain substring containment: "flu" also matches inside "influenza".
    pub fn keyword_matches(&self, lowered_text: &str) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| lowered_text.contains(*keyword))
            .count()
    }
}
