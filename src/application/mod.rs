pub mod use_cases;

pub use use_cases::event_guests::EventGuestService;
pub use use_cases::guest_csv_import::{ColumnMap, GuestCsvImporter, ImportOutcome};
