// ============================================================
// RAW TABLE
// ============================================================
// Tokenized CSV content before any field mapping

use serde::{Deserialize, Serialize};

/// Header row plus data rows as typed by the CSV author.
///
/// Every row holds at least `headers.len()` cells; short rows are padded with
/// empty strings and long rows are kept whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    /// Trimmed header cells, original casing
    pub headers: Vec<String>,

    /// Data rows in file order
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Build a table, padding any row shorter than the header row
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, String::new());
                }
                row
            })
            .collect();

        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `row`/`column`, empty when out of range
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}
