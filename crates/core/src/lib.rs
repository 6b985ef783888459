//! # ADE Core
//!
//! Core logic for the adverse-event report assistant.
//!
//! This crate turns free-text adverse-event narratives into structured reports and stores them:
//! - Rule-based extraction of drug name, adverse events, severity and outcome
//! - Outcome translation lookup (French, Swahili)
//! - SQLite-backed report persistence
//!
//! **No API concerns**: HTTP servers, CORS and wire types belong in `api-rest` or `api-shared`.

pub mod config;
pub mod constants;
pub mod error;
pub mod extraction;
pub mod lexicon;
pub mod report;
pub mod service;
pub mod store;
pub mod translation;

pub use config::CoreConfig;
pub use constants::{DEFAULT_DATABASE_PATH, DEFAULT_REST_ADDR, UNKNOWN_DRUG};
pub use error::{ReportError, ReportResult};
pub use extraction::ExtractionEngine;
pub use report::{Outcome, ReportId, Severity, StructuredReport};
pub use service::ReportService;
pub use store::{ReportStore, SqliteReportStore};
pub use translation::TranslationResult;
