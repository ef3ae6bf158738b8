// ============================================================
// GUEST CSV DOMAIN
// ============================================================
// Raw tokenized tables, the guest schema and import configuration

mod import_config;
mod raw_table;
mod schema_field;

pub use import_config::{HeaderMode, ImportConfig, QuoteMode};
pub use raw_table::RawTable;
pub use schema_field::{normalize_header, SchemaField};
