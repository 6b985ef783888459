//! Drug-name extraction.
//!
//! An ordered cascade of regular expressions is applied to the narrative in its original case.
//! Capitalisation is part of the signal: the second and third rules only accept names that
//! start with an uppercase letter.

use crate::constants::UNKNOWN_DRUG;
use crate::lexicon::DRUG_PATTERNS;
use crate::ReportResult;
use regex::Regex;

/// Compiled drug-name cascade.
#[derive(Clone, Debug)]
pub struct DrugExtractor {
    patterns: Vec<Regex>,
}

impl DrugExtractor {
    /// Compiles [`DRUG_PATTERNS`] in precedence order.
    pub fn new() -> ReportResult<Self> {
        Self::from_patterns(DRUG_PATTERNS)
    }

    /// Compiles a custom cascade. Each pattern must expose the name as capture group 1.
    pub fn from_patterns(patterns: &[&str]) -> ReportResult<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Returns the name captured by the first matching rule, or [`UNKNOWN_DRUG`].
    pub fn extract(&self, text: &str) -> String {
        self.patterns
            .iter()
            .find_map(|re| re.captures(text).and_then(|c| c.get(1)))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| UNKNOWN_DRUG.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> DrugExtractor {
        DrugExtractor::new().expect("static patterns compile")
    }

    #[test]
    fn drug_marker_captures_hyphenated_token() {
        let ex = extractor();
        assert_eq!(ex.extract("Reaction after Drug XYZ-1 was given"), "XYZ-1");
        assert_eq!(ex.extract("Drug XYZ-1"), "XYZ-1");
    }

    #[test]
    fn drug_marker_is_case_insensitive() {
        let ex = extractor();
        assert_eq!(ex.extract("the drug ABC-22 was stopped"), "ABC-22");
        assert_eq!(ex.extract("DRUG Zeta"), "Zeta");
    }

    #[test]
    fn took_rule_requires_capitalised_name() {
        let ex = extractor();
        assert_eq!(ex.extract("Patient took Metformin daily"), "Metformin");
        assert_eq!(ex.extract("She was taking Lisinopril-5 for months"), "Lisinopril-5");
        assert_eq!(ex.extract("Patient took medication daily"), UNKNOWN_DRUG);
    }

    #[test]
    fn dosage_form_rule_captures_preceding_name() {
        let ex = extractor();
        assert_eq!(ex.extract("given one Aspirin tablet at night"), "Aspirin");
        assert_eq!(ex.extract("Amoxil capsule twice a day"), "Amoxil");
        assert_eq!(ex.extract("a spoon of Benylin syrup"), "Benylin");
    }

    #[test]
    fn marker_rule_wins_over_later_rules() {
        let ex = extractor();
        let text = "Patient took Ibuprofen and Drug QX-9 with a Panadol tablet";
        assert_eq!(ex.extract(text), "QX-9");
    }

    #[test]
    fn took_rule_wins_over_dosage_form_rule() {
        let ex = extractor();
        assert_eq!(ex.extract("Panadol tablet, then took Ibuprofen"), "Ibuprofen");
    }

    #[test]
    fn no_match_yields_sentinel() {
        let ex = extractor();
        assert_eq!(ex.extract("No drug info here"), UNKNOWN_DRUG);
        assert_eq!(ex.extract(""), UNKNOWN_DRUG);
    }

    #[test]
    fn custom_pattern_set_is_used_in_order() {
        let ex = DrugExtractor::from_patterns(&[r"rx:(\w+)"]).unwrap();
        assert_eq!(ex.extract("rx:warfarin"), "warfarin");
        assert_eq!(ex.extract("Drug ABC"), UNKNOWN_DRUG);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        assert!(DrugExtractor::from_patterns(&["("]).is_err());
    }
}
