//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handlers never read environment variables themselves.

use crate::constants::{DEFAULT_DATABASE_PATH, DEFAULT_REST_ADDR};
use crate::{ReportError, ReportResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    database_path: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The parent directory of `database_path` must already exist; SQLite creates the file
    /// itself but not missing directories.
    pub fn new(database_path: PathBuf) -> ReportResult<Self> {
        if database_path.as_os_str().is_empty() {
            return Err(ReportError::InvalidInput(
                "database path cannot be empty".into(),
            ));
        }

        if let Some(parent) = database_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(ReportError::InvalidInput(format!(
                    "database directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        Ok(Self { database_path })
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

/// Parse the database path from an optional environment value.
///
/// `None` or a blank value falls back to [`DEFAULT_DATABASE_PATH`].
pub fn database_path_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH))
}

/// Parse the REST bind address from an optional environment value.
pub fn rest_addr_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_REST_ADDR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_path_defaults_when_unset_or_blank() {
        assert_eq!(
            database_path_from_env_value(None),
            PathBuf::from(DEFAULT_DATABASE_PATH)
        );
        assert_eq!(
            database_path_from_env_value(Some("   ".into())),
            PathBuf::from(DEFAULT_DATABASE_PATH)
        );
    }

    #[test]
    fn database_path_uses_trimmed_override() {
        assert_eq!(
            database_path_from_env_value(Some(" /tmp/ade.db ".into())),
            PathBuf::from("/tmp/ade.db")
        );
    }

    #[test]
    fn rest_addr_defaults_when_blank() {
        assert_eq!(rest_addr_from_env_value(Some("".into())), DEFAULT_REST_ADDR);
        assert_eq!(
            rest_addr_from_env_value(Some("127.0.0.1:9000".into())),
            "127.0.0.1:9000"
        );
    }

    #[test]
    fn config_rejects_empty_path() {
        let err = CoreConfig::new(PathBuf::new()).expect_err("should reject empty path");
        assert!(matches!(err, ReportError::InvalidInput(msg) if msg.contains("cannot be empty")));
    }

    #[test]
    fn config_rejects_missing_parent_directory() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("missing").join("reports.db");
        let err = CoreConfig::new(path).expect_err("should reject missing directory");
        assert!(matches!(err, ReportError::InvalidInput(msg) if msg.contains("does not exist")));
    }

    #[test]
    fn config_accepts_bare_file_name() {
        let cfg = CoreConfig::new(PathBuf::from("reports.db")).expect("bare file name is valid");
        assert_eq!(cfg.database_path(), Path::new("reports.db"));
    }
}
