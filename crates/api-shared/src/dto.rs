//! Wire types for the report endpoints.
//!
//! Field names are snake_case on the wire (`adverse_events`, `created_at`). Request fields are
//! optional: a missing or `null` narrative is processed as an empty string.

use ade_core::{ReportId, StructuredReport, TranslationResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ProcessReportReq {
    /// Free-text adverse-event narrative.
    #[serde(default)]
    pub report: Option<String>,
}

impl ProcessReportReq {
    pub fn text(&self) -> &str {
        self.report.as_deref().unwrap_or_default()
    }
}

/// Fields extracted from a narrative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProcessReportRes {
    /// Absent when the report was not saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub drug: String,
    pub adverse_events: Vec<String>,
    /// One of `severe`, `moderate`, `mild`, `unknown`.
    pub severity: String,
    /// One of `recovered`, `fatal`, `ongoing`, `unknown`.
    pub outcome: String,
}

impl From<&StructuredReport> for ProcessReportRes {
    fn from(report: &StructuredReport) -> Self {
        Self {
            id: report.id().map(ReportId::get),
            drug: report.drug().to_string(),
            adverse_events: report.adverse_events().to_vec(),
            severity: report.severity().to_string(),
            outcome: report.outcome().to_string(),
        }
    }
}

/// A saved report as returned by the listing endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportRes {
    pub id: i64,
    pub report: String,
    pub drug: String,
    pub adverse_events: Vec<String>,
    pub severity: String,
    pub outcome: String,
    /// ISO-8601 UTC timestamp without offset suffix.
    pub created_at: String,
}

impl From<&StructuredReport> for ReportRes {
    fn from(report: &StructuredReport) -> Self {
        Self {
            id: report.id().map(ReportId::get).unwrap_or_default(),
            report: report.report_text().to_string(),
            drug: report.drug().to_string(),
            adverse_events: report.adverse_events().to_vec(),
            severity: report.severity().to_string(),
            outcome: report.outcome().to_string(),
            created_at: report.created_at_iso(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct TranslateReq {
    #[serde(default)]
    pub text: Option<String>,
    /// Target language code, e.g. `fr` or `sw`.
    #[serde(default)]
    pub lang: Option<String>,
}

impl TranslateReq {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TranslateRes {
    pub original: String,
    pub lang: String,
    pub translation: String,
}

impl From<TranslationResult> for TranslateRes {
    fn from(result: TranslationResult) -> Self {
        Self {
            original: result.original_text,
            lang: result.language_code,
            translation: result.translation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_null_report_reads_as_empty() {
        let req: ProcessReportReq = serde_json::from_str("{}").unwrap();
        assert_eq!(req.text(), "");
        let req: ProcessReportReq = serde_json::from_str(r#"{"report": null}"#).unwrap();
        assert_eq!(req.text(), "");
    }

    #[test]
    fn translate_request_defaults_to_empty_fields() {
        let req: TranslateReq = serde_json::from_str(r#"{"text": "recovered"}"#).unwrap();
        assert_eq!(req.text(), "recovered");
        assert_eq!(req.lang(), "");
    }

    #[test]
    fn process_response_uses_snake_case_keys() {
        let res = ProcessReportRes {
            id: Some(3),
            drug: "ABC".into(),
            adverse_events: vec!["nausea".into()],
            severity: "severe".into(),
            outcome: "fatal".into(),
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["adverse_events"][0], "nausea");
    }

    #[test]
    fn unsaved_process_response_omits_id() {
        let res = ProcessReportRes {
            id: None,
            drug: "Unknown".into(),
            adverse_events: vec![],
            severity: "unknown".into(),
            outcome: "unknown".into(),
        };
        let json = serde_json::to_value(&res).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn translation_result_maps_to_wire_names() {
        let res = TranslateRes::from(TranslationResult {
            original_text: "patient recovered fully".into(),
            language_code: "fr".into(),
            translation: "rétabli".into(),
        });
        assert_eq!(res.original, "patient recovered fully");
        assert_eq!(res.lang, "fr");
        assert_eq!(res.translation, "rétabli");
    }
}
