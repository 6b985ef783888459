use ade_core::config::database_path_from_env_value;
use ade_core::{CoreConfig, ExtractionEngine, ReportService, SqliteReportStore, StructuredReport};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "ade")]
#[command(about = "Adverse-event report assistant CLI")]
struct Cli {
    /// SQLite database file (defaults to ADE_DATABASE_PATH, then reports.db)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from a narrative and save the report
    Process {
        /// Free-text adverse-event narrative
        text: String,
    },
    /// Extract fields from a narrative without saving
    Extract {
        /// Free-text adverse-event narrative
        text: String,
    },
    /// List saved reports, newest first
    List,
    /// Translate an outcome description
    Translate {
        /// Text describing the outcome
        text: String,
        /// Target language code (fr, sw)
        lang: String,
    },
}

fn print_report(report: &StructuredReport) {
    let id = report
        .id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".into());
    println!(
        "ID: {}, Drug: {}, Adverse events: [{}], Severity: {}, Outcome: {}, Created: {}",
        id,
        report.drug(),
        report.adverse_events().join(", "),
        report.severity(),
        report.outcome(),
        report.created_at_iso()
    );
}

fn open_service(database: Option<PathBuf>) -> Result<ReportService, Box<dyn std::error::Error>> {
    let path = database.unwrap_or_else(|| {
        database_path_from_env_value(std::env::var("ADE_DATABASE_PATH").ok())
    });
    let cfg = CoreConfig::new(path)?;
    let store = SqliteReportStore::open(cfg.database_path())?;
    Ok(ReportService::new(
        Arc::new(ExtractionEngine::new()?),
        Arc::new(store),
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Process { text }) => {
            let service = open_service(cli.database)?;
            match service.submit_report(&text) {
                Ok(report) => print_report(&report),
                Err(e) => eprintln!("Error saving report: {}", e),
            }
        }
        Some(Commands::Extract { text }) => {
            let engine = ExtractionEngine::new()?;
            print_report(&engine.process(&text));
        }
        Some(Commands::List) => {
            let service = open_service(cli.database)?;
            match service.list_reports() {
                Ok(reports) if reports.is_empty() => println!("No reports found."),
                Ok(reports) => reports.iter().for_each(print_report),
                Err(e) => eprintln!("Error listing reports: {}", e),
            }
        }
        Some(Commands::Translate { text, lang }) => {
            let result = ade_core::translation::translate(&text, &lang);
            println!("{} [{}]: {}", result.original_text, result.language_code, result.translation);
        }
        None => {
            println!("Use 'ade --help' for commands");
        }
    }

    Ok(())
}
