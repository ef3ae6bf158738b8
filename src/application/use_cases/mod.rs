pub mod event_guests;
pub mod guest_csv_import;
