use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::application::GuestCsvImporter;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::{AppSettings, ConfigService};
use crate::infrastructure::csv::CsvFile;
use crate::infrastructure::notify::TracingNotifier;

const USAGE: &str = "usage: eventpro <guests.csv> <event-id>";

pub fn run() -> ExitCode {
    let _ = dotenvy::dotenv();

    let settings = ConfigService::new().load();
    let log_filter = settings
        .as_ref()
        .map(|s| s.log_filter.as_str())
        .unwrap_or("info");
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [path, event_id] = args.as_slice() else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    match import_file(settings, path, event_id) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %err, "Guest import aborted");
            ExitCode::FAILURE
        }
    }
}

/// Run one import and print the outcome as JSON
fn import_file(settings: AppSettings, path: &str, event_id: &str) -> Result<bool> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let importer = GuestCsvImporter::new(settings.import, std::sync::Arc::new(TracingNotifier));
    let file = CsvFile::from_path(path);
    let outcome = runtime.block_on(importer.process_file(&file, event_id));

    let json = serde_json::to_string_pretty(&outcome)
        .map_err(|e| AppError::Internal(format!("Failed to serialize outcome: {}", e)))?;
    println!("{}", json);

    Ok(outcome.is_success())
}
