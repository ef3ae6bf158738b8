pub mod application;
pub mod domain;
pub mod infrastructure;

mod app;

pub use crate::app::run;
pub use crate::application::{EventGuestService, GuestCsvImporter, ImportOutcome};
pub use crate::domain::csv::{ImportConfig, RawTable, SchemaField};
pub use crate::domain::error::{AppError, ImportError};
pub use crate::domain::guest::{GuestContact, GuestRecord, GuestStatus};
pub use crate::infrastructure::csv::CsvFile;
