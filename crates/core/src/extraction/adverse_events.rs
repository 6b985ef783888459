//! Symptom lexicon matching.

use crate::lexicon::SYMPTOM_LEXICON;
use crate::ReportResult;
use indexmap::IndexSet;
use regex::Regex;

/// Whole-word matcher over a fixed symptom lexicon.
#[derive(Clone, Debug)]
pub struct AdverseEventMatcher {
    terms: Vec<(String, Regex)>,
}

impl AdverseEventMatcher {
    pub fn new() -> ReportResult<Self> {
        Self::from_terms(SYMPTOM_LEXICON)
    }

    pub fn from_terms(terms: &[&str]) -> ReportResult<Self> {
        let terms = terms
            .iter()
            .map(|term| -> ReportResult<(String, Regex)> {
                let term = term.to_lowercase();
                let re = Regex::new(&format!(r"\b{}\b", regex::escape(&term)))?;
                Ok((term, re))
            })
            .collect::<ReportResult<Vec<_>>>()?;
        Ok(Self { terms })
    }

    /// Lexicon terms found in `text`, in lexicon order, each at most once.
    pub fn find(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut found = IndexSet::new();
        for (term, re) in &self.terms {
            if re.is_match(&lowered) {
                found.insert(term.clone());
            }
        }
        found.into_iter().collect()
    }
}
