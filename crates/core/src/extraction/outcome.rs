use crate::lexicon::{first_substring_match, OUTCOME_RULES};
use crate::report::Outcome;

/// Maps keyword presence to an [`Outcome`] using [`OUTCOME_RULES`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OutcomeClassifier;

impl OutcomeClassifier {
    pub fn classify(&self, text: &str) -> Outcome {
        first_substring_match(OUTCOME_RULES, &text.to_lowercase()).unwrap_or(Outcome::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_each_category() {
        let c = OutcomeClassifier;
        assert_eq!(c.classify("symptoms resolved in two days"), Outcome::Recovered);
        assert_eq!(c.classify("Patient died."), Outcome::Fatal);
        assert_eq!(c.classify("cough continues"), Outcome::Ongoing);
        assert_eq!(c.classify("rash is still present"), Outcome::Ongoing);
        assert_eq!(c.classify("seen by GP"), Outcome::Unknown);
        assert_eq!(c.classify(""), Outcome::Unknown);
    }

    #[test]
    fn recovered_is_checked_before_fatal() {
        assert_eq!(
            OutcomeClassifier.classify("patient died but has now recovered"),
            Outcome::Recovered
        );
    }

    #[test]
    fn fatal_is_checked_before_ongoing() {
        assert_eq!(
            OutcomeClassifier.classify("persistent fever, then death"),
            Outcome::Fatal
        );
    }

    #[test]
    fn classification_is_repeatable() {
        let text = "recovery was slow";
        assert_eq!(OutcomeClassifier.classify(text), OutcomeClassifier.classify(text));
    }
}
