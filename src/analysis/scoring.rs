use super::catalog::{ConditionEntry, CONDITION_CATALOG};
use crate::models::{AgeBracket, Gender, ScoredCondition};

/// Points added per matched keyword.
pub const KEYWORD_MATCH_BOOST: u32 = 15;

/// Extra points for influenza in the 65+ bracket.
pub const ELDERLY_INFLUENZA_BOOST: u32 = 10;

/// Ceiling on any local score. The analyzer never claims certainty.
pub const MAX_PROBABILITY: u8 = 95;

/// Conditions scoring below this are not reported.
pub const MIN_REPORTED_PROBABILITY: u8 = 20;

/// Length of the reported shortlist.
pub const MAX_CONDITIONS: usize = 3;

/// Rank the catalog against the symptom text.
///
/// Returns at most [`MAX_CONDITIONS`] entries, each scoring between
/// [`MIN_REPORTED_PROBABILITY`] and [`MAX_PROBABILITY`], highest first.
pub fn score_conditions(symptoms: &str, age: AgeBracket, gender: Gender) -> Vec<ScoredCondition> {
    score_against(&CONDITION_CATALOG, symptoms, age, gender)
}

/// Same as [`score_conditions`] over an arbitrary catalog.
///
/// `gender` is part of the contract but carries no weight yet.
pub fn score_against(
    catalog: &[ConditionEntry],
    symptoms: &str,
    age: AgeBracket,
    _gender: Gender,
) -> Vec<ScoredCondition> {
    let lowered = symptoms.to_lowercase();

    let mut scored: Vec<ScoredCondition> = catalog
        .iter()
        .map(|entry| ScoredCondition {
            name: entry.name.to_string(),
            probability: adjusted_probability(entry, &lowered, age),
            description: entry.description.to_string(),
        })
        .collect();

    // sort_by is stable: equal scores keep catalog order
    scored.sort_by(|a, b| b.probability.cmp(&a.probability));
    scored.truncate(MAX_CONDITIONS);
    scored.retain(|c| c.probability >= MIN_REPORTED_PROBABILITY);
    scored
}

fn adjusted_probability(entry: &ConditionEntry, lowered: &str, age: AgeBracket) -> u8 {
    let matches = u32::try_from(entry.keyword_matches(lowered)).unwrap_or(u32::MAX);
    let mut probability =
        u32::from(entry.base_probability).saturating_add(matches.saturating_mul(KEYWORD_MATCH_BOOST));

    if age == AgeBracket::SixtyFivePlus && entry.name.contains("Influenza") {
        probability = probability.saturating_add(ELDERLY_INFLUENZA_BOOST);
    }

    u8::try_from(probability.min(u32::from(MAX_PROBABILITY))).unwrap_or(MAX_PROBABILITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(conditions: &[ScoredCondition]) -> Vec<&str> {
        conditions.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn runny_nose_and_sneezing_tops_with_viral_uri() {
        let result = score_conditions("runny nose and sneezing", AgeBracket::TwentySixToThirtyFive, Gender::Female);
        assert_eq!(result[0].name, "Viral Upper Respiratory Infection");
        // 70 + 2 * 15 = 100, clamped
        assert_eq!(result[0].probability, 95);
        assert_eq!(result[1].name, "Allergic Rhinitis");
        assert_eq!(result[1].probability, 75);
        assert_eq!(result[2].name, "Influenza (Flu)");
        assert_eq!(result[2].probability, 60);
    }

    #[test]
    fn elderly_flu_gets_age_boost() {
        let elderly = score_conditions("fever, chills, body aches", AgeBracket::SixtyFivePlus, Gender::Male);
        assert_eq!(elderly[0].name, "Influenza (Flu)");
        assert_eq!(elderly[0].probability, 95);

        // "fever" only: 75 for everyone, 85 at 65+
        let young = score_conditions("fever", AgeBracket::EighteenToTwentyFive, Gender::Male);
        let old = score_conditions("fever", AgeBracket::SixtyFivePlus, Gender::Male);
        assert_eq!(young[0].probability, 75);
        assert_eq!(old[0].probability, 85);
    }

    #[test]
    fn age_boost_applies_only_to_influenza() {
        let young = score_conditions("cough", AgeBracket::TwentySixToThirtyFive, Gender::Male);
        let old = score_conditions("cough", AgeBracket::SixtyFivePlus, Gender::Male);
        let bronchitis = |r: &[ScoredCondition]| {
            r.iter().find(|c| c.name == "Acute Bronchitis").map(|c| c.probability)
        };
        assert_eq!(bronchitis(&young), Some(70));
        assert_eq!(bronchitis(&old), Some(70));
    }

    #[test]
    fn empty_text_returns_highest_baselines() {
        let result = score_conditions("", AgeBracket::EighteenToTwentyFive, Gender::Male);
        assert_eq!(
            names(&result),
            vec!["Viral Upper Respiratory Infection", "Influenza (Flu)", "Acute Bronchitis"]
        );
        let probs: Vec<u8> = result.iter().map(|c| c.probability).collect();
        assert_eq!(probs, vec![70, 60, 55]);
    }

    #[test]
    fn ties_keep_catalog_order() {
        // Tension Headache (#5) and Acute Bronchitis (#6) both land on 55
        let result = score_conditions("headache", AgeBracket::TwentySixToThirtyFive, Gender::Male);
        assert_eq!(
            names(&result),
            vec!["Influenza (Flu)", "Viral Upper Respiratory Infection", "Tension Headache"]
        );
        assert_eq!(result[2].probability, 55);
    }

    #[test]
    fn ties_keep_declaration_order_in_custom_catalog() {
        let catalog = [
            ConditionEntry { name: "First", base_probability: 40, description: "a", keywords: &["x"] },
            ConditionEntry { name: "Second", base_probability: 55, description: "b", keywords: &[] },
            ConditionEntry { name: "Third", base_probability: 25, description: "c", keywords: &["x", "y"] },
        ];
        let result = score_against(&catalog, "x y", AgeBracket::default(), Gender::default());
        assert_eq!(names(&result), vec!["First", "Second", "Third"]);
        assert!(result.iter().all(|c| c.probability == 55));
    }

    #[test]
    fn weak_matches_are_dropped() {
        let catalog = [
            ConditionEntry { name: "Strong", base_probability: 50, description: "", keywords: &[] },
            ConditionEntry { name: "Weak", base_probability: 10, description: "", keywords: &["z"] },
            ConditionEntry { name: "Weaker", base_probability: 5, description: "", keywords: &[] },
        ];
        let result = score_against(&catalog, "nothing relevant", AgeBracket::default(), Gender::default());
        assert_eq!(names(&result), vec!["Strong"]);

        let none = score_against(&catalog[1..], "", AgeBracket::default(), Gender::default());
        assert!(none.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let lower = score_conditions("burning urination", AgeBracket::default(), Gender::Female);
        let upper = score_conditions("BURNING Urination", AgeBracket::default(), Gender::Female);
        assert_eq!(lower, upper);
    }

    #[test]
    fn bounds_hold_for_varied_inputs() {
        let inputs = [
            "",
            "cold runny nose congestion sneezing mild fever flu fever body aches fatigue chills headache",
            "nausea vomiting diarrhea stomach pain abdominal pain",
            "uti burning urination frequent urination bladder pain",
            "I feel fine",
            "severe headache, migraine, light sensitivity, nausea",
        ];
        for text in inputs {
            for age in [AgeBracket::EighteenToTwentyFive, AgeBracket::SixtyFivePlus] {
                let result = score_conditions(text, age, Gender::Other);
                assert!(result.len() <= MAX_CONDITIONS);
                for pair in result.windows(2) {
                    assert!(pair[0].probability >= pair[1].probability);
                }
                for c in &result {
                    assert!((MIN_REPORTED_PROBABILITY..=MAX_PROBABILITY).contains(&c.probability));
                }
            }
        }
    }

    #[test]
    fn gender_does_not_change_scores() {
        let text = "fever and cough";
        let male = score_conditions(text, AgeBracket::default(), Gender::Male);
        let female = score_conditions(text, AgeBracket::default(), Gender::Female);
        assert_eq!(male, female);
    }

    #[test]
    fn scoring_leaves_catalog_untouched() {
        let before = CONDITION_CATALOG;
        let _ = score_conditions("fever cough headache", AgeBracket::SixtyFivePlus, Gender::Male);
        let _ = score_conditions("fever cough headache", AgeBracket::SixtyFivePlus, Gender::Male);
        assert_eq!(before, CONDITION_CATALOG);
    }
}
