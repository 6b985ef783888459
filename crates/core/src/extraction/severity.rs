use crate::lexicon::{first_substring_match, SEVERITY_RULES};
use crate::report::Severity;

/// Maps keyword presence to a [`Severity`] using [`SEVERITY_RULES`].
///
/// Triggers are plain substrings of the lowercased text, so "mildew" reads as mild.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeverityClassifier;

impl SeverityClassifier {
    pub fn classify(&self, text: &str) -> Severity {
        first_substring_match(SEVERITY_RULES, &text.to_lowercase()).unwrap_or(Severity::Unknown)
    }
}
