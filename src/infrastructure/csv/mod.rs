// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// File reading, decoding and tokenizing for guest imports

mod csv_tokenizer;
mod file_source;

pub use csv_tokenizer::{split_lines, split_quoted, CsvTokenizer};
pub use file_source::CsvFile;
