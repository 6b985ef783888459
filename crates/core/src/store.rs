//! Report persistence.
//!
//! [`ReportStore`] is the seam between the extraction engine and durable storage. The shipped
//! implementation, [`SqliteReportStore`], keeps one row per report:
//!
//! ```text
//! reports(
//!   id             INTEGER PRIMARY KEY AUTOINCREMENT,
//!   report_text    TEXT,
//!   drug           TEXT,
//!   adverse_events TEXT,   -- JSON array of strings
//!   severity       TEXT,
//!   outcome        TEXT,
//!   created_at     TEXT    -- ISO-8601 UTC, no offset
//! )
//! ```
//!
//! The connection sits behind a mutex so concurrent saves are serialised; `AUTOINCREMENT`
//! guarantees identifiers are unique and never reused.

use crate::error::{ReportError, ReportResult};
use crate::report::{format_created_at, parse_created_at, ReportId, StructuredReport};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Mutex;

/// Durable storage for processed reports.
pub trait ReportStore: Send + Sync {
    /// Appends `report` and returns the identifier assigned to it.
    fn save(&self, report: &StructuredReport) -> ReportResult<ReportId>;

    /// Returns every saved report, most recently saved first, with identifiers populated.
    fn list_all(&self) -> ReportResult<Vec<StructuredReport>>;
}

const CREATE_REPORTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS reports (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    report_text TEXT,
    drug TEXT,
    adverse_events TEXT,
    severity TEXT,
    outcome TEXT,
    created_at TEXT
)";

/// SQLite-backed [`ReportStore`].
pub struct SqliteReportStore {
    conn: Mutex<Connection>,
}

impl SqliteReportStore {
    /// Opens (or creates) the database at `path` and ensures the schema exists.
    pub fn open(path: &Path) -> ReportResult<Self> {
        let conn = Connection::open(path).map_err(ReportError::StorageOpen)?;
        tracing::info!("opened report store at {}", path.display());
        Self::from_connection(conn)
    }

    /// Opens a private in-memory database. Contents are lost when the store is dropped.
    pub fn open_in_memory() -> ReportResult<Self> {
        let conn = Connection::open_in_memory().map_err(ReportError::StorageOpen)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> ReportResult<Self> {
        conn.execute_batch(CREATE_REPORTS_TABLE)
            .map_err(ReportError::StorageSchema)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

struct ReportRow {
    id: i64,
    report_text: Option<String>,
    drug: Option<String>,
    adverse_events: Option<String>,
    severity: Option<String>,
    outcome: Option<String>,
    created_at: Option<String>,
}

fn report_from_row(row: ReportRow) -> ReportResult<StructuredReport> {
    let adverse_events = match row.adverse_events.as_deref() {
        Some(json) if !json.is_empty() => {
            serde_json::from_str(json).map_err(ReportError::Deserialization)?
        }
        _ => Vec::new(),
    };
    let severity = row.severity.as_deref().unwrap_or("unknown").parse()?;
    let outcome = row.outcome.as_deref().unwrap_or("unknown").parse()?;
    let created_at = parse_created_at(row.created_at.as_deref().unwrap_or_default())?;

    Ok(StructuredReport::new(
        row.report_text.unwrap_or_default(),
        row.drug.unwrap_or_default(),
        adverse_events,
        severity,
        outcome,
        created_at,
    )
    .with_id(ReportId::new(row.id)))
}

impl ReportStore for SqliteReportStore {
    fn save(&self, report: &StructuredReport) -> ReportResult<ReportId> {
        let adverse_events =
            serde_json::to_string(report.adverse_events()).map_err(ReportError::Serialization)?;

        let conn = self
            .conn
            .lock()
            .map_err(|_| ReportError::StorageLockPoisoned)?;
        conn.execute(
            "INSERT INTO reports (report_text, drug, adverse_events, severity, outcome, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                report.report_text(),
                report.drug(),
                adverse_events,
                report.severity().as_str(),
                report.outcome().as_str(),
                format_created_at(report.created_at()),
            ],
        )
        .map_err(ReportError::StorageWrite)?;

        let id = ReportId::new(conn.last_insert_rowid());
        tracing::info!(%id, "saved report");
        Ok(id)
    }

    fn list_all(&self) -> ReportResult<Vec<StructuredReport>> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| ReportError::StorageLockPoisoned)?;
        let mut stmt = conn
            .prepare(
                "SELECT id, report_text, drug, adverse_events, severity, outcome, created_at
                 FROM reports
                 ORDER BY id DESC",
            )
            .map_err(ReportError::StorageRead)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ReportRow {
                    id: row.get(0)?,
                    report_text: row.get(1)?,
                    drug: row.get(2)?,
                    adverse_events: row.get(3)?,
                    severity: row.get(4)?,
                    outcome: row.get(5)?,
                    created_at: row.get(6)?,
                })
            })
            .map_err(ReportError::StorageRead)?;

        let mut reports = Vec::new();
        for row in rows {
            let row = row.map_err(ReportError::StorageRead)?;
            reports.push(report_from_row(row)?);
        }
        Ok(reports)
    }
}
