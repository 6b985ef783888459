//! # API REST
//!
//! REST API implementation for the ADE report assistant.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for wire types and `ade-core` for extraction and storage.

#![warn(rust_2018_idioms)]

use ade_core::ReportService;
use api_shared::{
    HealthRes, HealthService, ProcessReportReq, ProcessReportRes, ReportRes, TranslateReq,
    TranslateRes,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub report_service: ReportService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, process_report, list_reports, translate),
    components(schemas(
        HealthRes,
        ProcessReportReq,
        ProcessReportRes,
        ReportRes,
        TranslateReq,
        TranslateRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router.
///
/// CORS is fully permissive so any browser front end can call the API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/process-report", post(process_report))
        .route("/reports", get(list_reports))
        .route("/translate", post(translate))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/process-report",
    request_body = ProcessReportReq,
    responses(
        (status = 200, description = "Report processed and saved", body = ProcessReportRes),
        (status = 500, description = "Report could not be saved")
    )
)]
/// Extract structured fields from a narrative and save the report
///
/// A missing or `null` `report` field is processed as an empty narrative.
///
/// # Errors
/// Returns `500 Internal Server Error` if the report store fails.
#[axum::debug_handler]
async fn process_report(
    State(state): State<AppState>,
    Json(req): Json<ProcessReportReq>,
) -> Result<Json<ProcessReportRes>, (StatusCode, &'static str)> {
    match state.report_service.submit_report(req.text()) {
        Ok(report) => Ok(Json(ProcessReportRes::from(&report))),
        Err(e) => {
            tracing::error!("Process report error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to save report"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/reports",
    responses(
        (status = 200, description = "Saved reports, newest first", body = [ReportRes]),
        (status = 500, description = "Reports could not be read")
    )
)]
/// List every saved report, most recent first
#[axum::debug_handler]
async fn list_reports(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReportRes>>, (StatusCode, &'static str)> {
    match state.report_service.list_reports() {
        Ok(reports) => Ok(Json(reports.iter().map(ReportRes::from).collect())),
        Err(e) => {
            tracing::error!("List reports error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to read reports"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/translate",
    request_body = TranslateReq,
    responses(
        (status = 200, description = "Outcome translation", body = TranslateRes)
    )
)]
/// Translate an outcome description into French (`fr`) or Swahili (`sw`)
///
/// Unsupported languages return the original text as the translation.
#[axum::debug_handler]
async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateReq>,
) -> Json<TranslateRes> {
    Json(state.report_service.translate(req.text(), req.lang()).into())
}
