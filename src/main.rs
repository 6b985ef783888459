use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ade_core::config::{database_path_from_env_value, rest_addr_from_env_value};
use ade_core::{CoreConfig, ExtractionEngine, ReportService, SqliteReportStore};
use api_rest::AppState;

/// Main entry point for the ADE report assistant
///
/// Starts the REST server exposing report processing, listing and translation.
///
/// # Environment Variables
/// - `ADE_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `ADE_DATABASE_PATH`: SQLite database file (default: "reports.db")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, store setup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ade_run=info".parse()?)
                .add_directive("ade_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = rest_addr_from_env_value(std::env::var("ADE_REST_ADDR").ok());
    let cfg = CoreConfig::new(database_path_from_env_value(
        std::env::var("ADE_DATABASE_PATH").ok(),
    ))?;

    let store = SqliteReportStore::open(cfg.database_path())?;
    let engine = ExtractionEngine::new()?;
    let state = AppState {
        report_service: ReportService::new(Arc::new(engine), Arc::new(store)),
    };

    tracing::info!("++ Starting ADE REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, api_rest::router(state)).await?;

    Ok(())
}
