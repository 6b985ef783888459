//! Heuristic extraction engine.
//!
//! Four independent rule sets run over the same narrative:
//!
//! - [`DrugExtractor`]: ordered regex cascade, first capture wins
//! - [`AdverseEventMatcher`]: whole-word symptom lexicon, lexicon order, no duplicates
//! - [`SeverityClassifier`] and [`OutcomeClassifier`]: ordered substring tables
//!
//! None of them depends on another's output. [`ExtractionEngine`] compiles the tables once and
//! is shared read-only between callers.

pub mod adverse_events;
pub mod drug;
pub mod outcome;
pub mod severity;

pub use adverse_events::AdverseEventMatcher;
pub use drug::DrugExtractor;
pub use outcome::OutcomeClassifier;
pub use severity::SeverityClassifier;

use crate::report::{Outcome, Severity, StructuredReport};
use crate::ReportResult;
use chrono::Utc;

/// Compiled rule sets for turning a narrative into a [`StructuredReport`].
#[derive(Clone, Debug)]
pub struct ExtractionEngine {
    drug: DrugExtractor,
    adverse_events: AdverseEventMatcher,
    severity: SeverityClassifier,
    outcome: OutcomeClassifier,
}

impl ExtractionEngine {
    /// Builds the engine from the built-in lexicon and pattern tables.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidPattern` if a drug pattern fails to compile.
    pub fn new() -> ReportResult<Self> {
        Ok(Self {
            drug: DrugExtractor::new()?,
            adverse_events: AdverseEventMatcher::new()?,
            severity: SeverityClassifier,
            outcome: OutcomeClassifier,
        })
    }

    pub fn extract_drug(&self, text: &str) -> String {
        self.drug.extract(text)
    }

    pub fn match_adverse_events(&self, text: &str) -> Vec<String> {
        self.adverse_events.find(text)
    }

    pub fn classify_severity(&self, text: &str) -> Severity {
        self.severity.classify(text)
    }

    pub fn classify_outcome(&self, text: &str) -> Outcome {
        self.outcome.classify(text)
    }

    /// Runs every rule set over `text` and stamps the result with the current UTC time.
    ///
    /// The returned report has no identifier until a store saves it.
    pub fn process(&self, text: &str) -> StructuredReport {
        let report = StructuredReport::new(
            text.to_string(),
            self.extract_drug(text),
            self.match_adverse_events(text),
            self.classify_severity(text),
            self.classify_outcome(text),
            Utc::now(),
        );
        tracing::debug!(
            drug = report.drug(),
            events = report.adverse_events().len(),
            severity = %report.severity(),
            outcome = %report.outcome(),
            "extracted report fields"
        );
        report
    }
}
