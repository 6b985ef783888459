#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to compile extraction pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("failed to open report store: {0}")]
    StorageOpen(rusqlite::Error),
    #[error("failed to initialise report schema: {0}")]
    StorageSchema(rusqlite::Error),
    #[error("failed to write report: {0}")]
    StorageWrite(rusqlite::Error),
    #[error("failed to read reports: {0}")]
    StorageRead(rusqlite::Error),
    #[error("report store lock was poisoned")]
    StorageLockPoisoned,

    #[error("failed to serialize adverse events: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize adverse events: {0}")]
    Deserialization(serde_json::Error),
    #[error("invalid stored timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("unknown {kind} category: {value:?}")]
    UnknownCategory { kind: &'static str, value: String },
}

impl ReportError {
    /// True for failures raised by the persistence layer rather than by bad input.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            ReportError::StorageOpen(_)
                | ReportError::StorageSchema(_)
                | ReportError::StorageWrite(_)
                | ReportError::StorageRead(_)
                | ReportError::StorageLockPoisoned
                | ReportError::Serialization(_)
                | ReportError::Deserialization(_)
                | ReportError::InvalidTimestamp { .. }
                | ReportError::UnknownCategory { .. }
        )
    }
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;
