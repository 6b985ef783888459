//! Report service combining the extraction engine with a report store.
//!
//! This is what the transport layers call. It holds no per-request state; cloning it is cheap
//! and clones share the same engine and store.

use crate::extraction::ExtractionEngine;
use crate::report::StructuredReport;
use crate::store::ReportStore;
use crate::translation::{self, TranslationResult};
use crate::ReportResult;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReportService {
    engine: Arc<ExtractionEngine>,
    store: Arc<dyn ReportStore>,
}

impl ReportService {
    pub fn new(engine: Arc<ExtractionEngine>, store: Arc<dyn ReportStore>) -> Self {
        Self { engine, store }
    }

    /// Extracts fields from `raw_text` without saving anything.
    pub fn extract(&self, raw_text: &str) -> StructuredReport {
        self.engine.process(raw_text)
    }

    /// Extracts fields from `raw_text`, saves the report and returns it with its new identifier.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the store cannot save the report. Nothing is saved in that
    /// case.
    pub fn submit_report(&self, raw_text: &str) -> ReportResult<StructuredReport> {
        let report = self.engine.process(raw_text);
        let id = self.store.save(&report)?;
        Ok(report.with_id(id))
    }

    /// All saved reports, newest first.
    pub fn list_reports(&self) -> ReportResult<Vec<StructuredReport>> {
        self.store.list_all()
    }

    pub fn translate(&self, text: &str, language_code: &str) -> TranslationResult {
        translation::translate(text, language_code)
    }
}

impl std::fmt::Debug for ReportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportService")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}
