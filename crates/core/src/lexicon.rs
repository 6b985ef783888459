//! Static reference data for the extraction engine.
//!
//! Every table here is ordered: the position of an entry is its precedence. Classifiers walk
//! the tables front to back and stop at the first hit, so reordering a table changes results.

use crate::report::{Outcome, Severity};

/// Symptom terms matched as whole words against the lowercased narrative.
pub const SYMPTOM_LEXICON: &[&str] = &[
    "nausea",
    "headache",
    "fever",
    "dizziness",
    "rash",
    "vomiting",
    "cough",
    "fatigue",
    "pain",
    "diarrhea",
    "shortness of breath",
    "nauseated",
    "vomited",
];

/// Drug-name patterns, highest precedence first. Each has exactly one capture group: the name.
///
/// The "drug" marker is case-insensitive but the captured name must start with an uppercase
/// letter or a digit, so prose like "no drug info" is not read as a drug called "info".
pub const DRUG_PATTERNS: &[&str] = &[
    r"\b(?i:drug)\s+([A-Z0-9][A-Za-z0-9\-]*)",
    r"\b(?:taking|took)\s+([A-Z][A-Za-z0-9\-]+)",
    r"\b([A-Z][A-Za-z0-9\-]+)\s+(?:tablet|capsule|syrup)",
];

/// Severity triggers, checked as substrings in this order.
pub const SEVERITY_RULES: &[(Severity, &[&str])] = &[
    (Severity::Severe, &["severe", "intense", "severely"]),
    (Severity::Moderate, &["moderate", "moderately"]),
    (Severity::Mild, &["mild", "mildly"]),
];

/// Outcome triggers, checked as substrings in this order.
pub const OUTCOME_RULES: &[(Outcome, &[&str])] = &[
    (Outcome::Recovered, &["recovered", "recovery", "resolved"]),
    (Outcome::Fatal, &["fatal", "died", "death", "dead"]),
    (
        Outcome::Ongoing,
        &["ongoing", "still", "continues", "persistent"],
    ),
];

/// Reduced outcome triggers used only by the translation lookup.
///
/// Kept separate from [`OUTCOME_RULES`]: "continues" is not an ongoing trigger here and "die"
/// replaces "died"/"dead".
pub const TRANSLATION_RULES: &[(Outcome, &[&str])] = &[
    (Outcome::Recovered, &["recover"]),
    (Outcome::Fatal, &["fatal", "die", "death"]),
    (Outcome::Ongoing, &["ongoing", "still", "persistent"]),
];

/// Localised outcome labels keyed by lowercase language code.
pub const TRANSLATIONS: &[(&str, &[(Outcome, &str)])] = &[
    (
        "fr",
        &[
            (Outcome::Recovered, "rétabli"),
            (Outcome::Ongoing, "en cours"),
            (Outcome::Fatal, "mort"),
            (Outcome::Unknown, "inconnu"),
        ],
    ),
    (
        "sw",
        &[
            (Outcome::Recovered, "amepona"),
            (Outcome::Ongoing, "inaendelea"),
            (Outcome::Fatal, "amekufa"),
            (Outcome::Unknown, "haijulikani"),
        ],
    ),
];

/// Returns the first category in `rules` with any trigger contained in `lowered`.
pub(crate) fn first_substring_match<T: Copy>(rules: &[(T, &[&str])], lowered: &str) -> Option<T> {
    rules
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| lowered.contains(t)))
        .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn symptom_lexicon_has_no_duplicates() {
        let unique: HashSet<_> = SYMPTOM_LEXICON.iter().collect();
        assert_eq!(unique.len(), SYMPTOM_LEXICON.len());
    }

    #[test]
    fn every_language_maps_all_four_categories() {
        for (lang, entries) in TRANSLATIONS {
            for outcome in [
                Outcome::Recovered,
                Outcome::Fatal,
                Outcome::Ongoing,
                Outcome::Unknown,
            ] {
                assert!(
                    entries.iter().any(|(o, _)| *o == outcome),
                    "{lang} is missing {outcome}"
                );
            }
        }
    }

    #[test]
    fn first_substring_match_respects_table_order() {
        assert_eq!(
            first_substring_match(OUTCOME_RULES, "died then recovered"),
            Some(Outcome::Recovered)
        );
        assert_eq!(first_substring_match(OUTCOME_RULES, "nothing here"), None);
    }
}
