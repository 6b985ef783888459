//! Constants used throughout the ADE core crate.
//!
//! Storage defaults and the sentinel values that the extraction engine falls back to live here
//! so the transport and CLI crates agree on them.

/// Default SQLite database file when no explicit path is configured.
pub const DEFAULT_DATABASE_PATH: &str = "reports.db";

/// Default bind address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8000";

/// Drug name reported when no extraction rule matches.
pub const UNKNOWN_DRUG: &str = "Unknown";

/// Timestamp layout used for `created_at` in storage and on the wire (ISO-8601, no offset).
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
