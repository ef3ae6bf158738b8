pub mod error;
pub mod event;
pub mod guest;
pub mod user;

// Guest CSV import module
pub mod csv;
