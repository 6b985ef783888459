//! Structured adverse-event report types.
//!
//! A [`StructuredReport`] is built once per narrative by the extraction engine and is read-only
//! afterwards. The only later change is the identifier the store assigns on save.

use crate::constants::CREATED_AT_FORMAT;
use crate::{ReportError, ReportResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned by the report store on save.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(i64);

impl ReportId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity category of the reported reaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Severe,
    Moderate,
    Mild,
    Unknown,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Severe => "severe",
            Severity::Moderate => "moderate",
            Severity::Mild => "mild",
            Severity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "severe" => Ok(Severity::Severe),
            "moderate" => Ok(Severity::Moderate),
            "mild" => Ok(Severity::Mild),
            "unknown" => Ok(Severity::Unknown),
            other => Err(ReportError::UnknownCategory {
                kind: "severity",
                value: other.to_string(),
            }),
        }
    }
}

/// Outcome category of the reported reaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Recovered,
    Fatal,
    Ongoing,
    Unknown,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Recovered => "recovered",
            Outcome::Fatal => "fatal",
            Outcome::Ongoing => "ongoing",
            Outcome::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recovered" => Ok(Outcome::Recovered),
            "fatal" => Ok(Outcome::Fatal),
            "ongoing" => Ok(Outcome::Ongoing),
            "unknown" => Ok(Outcome::Unknown),
            other => Err(ReportError::UnknownCategory {
                kind: "outcome",
                value: other.to_string(),
            }),
        }
    }
}

/// A narrative together with the fields extracted from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructuredReport {
    id: Option<ReportId>,
    report_text: String,
    drug: String,
    adverse_events: Vec<String>,
    severity: Severity,
    outcome: Outcome,
    created_at: DateTime<Utc>,
}

impl StructuredReport {
    pub(crate) fn new(
        report_text: String,
        drug: String,
        adverse_events: Vec<String>,
        severity: Severity,
        outcome: Outcome,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            report_text,
            drug,
            adverse_events,
            severity,
            outcome,
            created_at,
        }
    }

    /// Returns a copy of this report carrying the identifier assigned by the store.
    pub(crate) fn with_id(mut self, id: ReportId) -> Self {
        self.id = Some(id);
        self
    }

    /// `None` until the report has been saved.
    pub fn id(&self) -> Option<ReportId> {
        self.id
    }

    pub fn report_text(&self) -> &str {
        &self.report_text
    }

    pub fn drug(&self) -> &str {
        &self.drug
    }

    pub fn adverse_events(&self) -> &[String] {
        &self.adverse_events
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `created_at` rendered the way it is persisted: ISO-8601 with no offset suffix.
    pub fn created_at_iso(&self) -> String {
        format_created_at(self.created_at)
    }
}

pub(crate) fn format_created_at(value: DateTime<Utc>) -> String {
    value.naive_utc().format(CREATED_AT_FORMAT).to_string()
}

/// Parses a stored timestamp. Fractional seconds are optional.
pub(crate) fn parse_created_at(value: &str) -> ReportResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|source| ReportError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn severity_round_trips_through_str() {
        for severity in [
            Severity::Severe,
            Severity::Moderate,
            Severity::Mild,
            Severity::Unknown,
        ] {
            assert_eq!(severity.as_str().parse::<Severity>().unwrap(), severity);
        }
    }

    #[test]
    fn unknown_stored_category_is_rejected() {
        let err = "catastrophic".parse::<Outcome>().unwrap_err();
        assert!(matches!(
            err,
            ReportError::UnknownCategory { kind: "outcome", .. }
        ));
    }

    #[test]
    fn categories_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Moderate).unwrap(), "\"moderate\"");
        assert_eq!(serde_json::to_string(&Outcome::Recovered).unwrap(), "\"recovered\"");
    }

    #[test]
    fn created_at_has_no_offset_suffix() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        let formatted = format_created_at(ts);
        assert_eq!(formatted, "2024-03-05T14:07:09.000000");
        assert_eq!(parse_created_at(&formatted).unwrap(), ts);
    }

    #[test]
    fn parses_timestamp_without_fraction() {
        let ts = parse_created_at("2024-03-05T14:07:09").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap());
    }

    #[test]
    fn rejects_garbage_timestamp() {
        let err = parse_created_at("yesterday").unwrap_err();
        assert!(matches!(err, ReportError::InvalidTimestamp { .. }));
    }
}
