// ============================================================
// CSV TOKENIZER
// ============================================================
// Split guest CSV text into a header row and padded data rows

use csv::{ReaderBuilder, Trim};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::csv::{HeaderMode, ImportConfig, QuoteMode, RawTable};
use crate::domain::error::ImportError;

static LINE_BREAK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\n|\r").expect("valid line break pattern"));

/// Guest CSV tokenizer
pub struct CsvTokenizer {
    /// How the header line is split
    header_mode: HeaderMode,

    /// How quotes in data rows are handled
    quote_mode: QuoteMode,
}

impl Default for CsvTokenizer {
    fn default() -> Self {
        Self {
            header_mode: HeaderMode::Plain,
            quote_mode: QuoteMode::Toggle,
        }
    }
}

impl CsvTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ImportConfig) -> Self {
        Self {
            header_mode: config.header_mode,
            quote_mode: config.quote_mode,
        }
    }

    pub fn with_header_mode(mut self, header_mode: HeaderMode) -> Self {
        self.header_mode = header_mode;
        self
    }

    pub fn with_quote_mode(mut self, quote_mode: QuoteMode) -> Self {
        self.quote_mode = quote_mode;
        self
    }

    /// Tokenize CSV text into a raw table
    pub fn tokenize(&self, text: &str) -> Result<RawTable, ImportError> {
        match self.quote_mode {
            QuoteMode::Toggle => self.tokenize_lines(text),
            QuoteMode::Rfc4180 => self.tokenize_rfc4180(text),
        }
    }

    fn tokenize_lines(&self, text: &str) -> Result<RawTable, ImportError> {
        let lines = split_lines(text);
        let Some((header_line, data_lines)) = lines.split_first() else {
            return Err(ImportError::EmptyFile);
        };

        let headers = match self.header_mode {
            HeaderMode::Plain => header_line
                .split(',')
                .map(|header| header.trim().to_string())
                .collect(),
            HeaderMode::QuoteAware => split_quoted(header_line),
        };

        let rows = data_lines.iter().map(|line| split_quoted(line)).collect();

        Ok(RawTable::new(headers, rows))
    }

    /// RFC 4180 path; headers are always quote-aware here
    fn tokenize_rfc4180(&self, text: &str) -> Result<RawTable, ImportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // Short and long rows are both allowed
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                ImportError::IoFailure(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            // Whitespace-only lines come back as a single empty field
            if record.len() == 1 && record.get(0).map_or(true, str::is_empty) {
                continue;
            }

            records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        if records.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        let headers = records.remove(0);
        Ok(RawTable::new(headers, records))
    }
}

/// Split on any line ending and drop blank lines
pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK_PATTERN
        .split(text)
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Quote-toggle scan of one line.
///
/// A `"` flips the in-quotes flag and is dropped; a `,` outside quotes ends
/// the field. `""` is not an escape. Cells are trimmed.
pub fn split_quoted(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => inside_quotes = !inside_quotes,
            ',' if !inside_quotes => {
                values.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    values.push(current.trim().to_string());
    values
}
