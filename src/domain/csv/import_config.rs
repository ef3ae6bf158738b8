// ============================================================
// IMPORT CONFIGURATION
// ============================================================
// Knobs for the guest CSV importer. Defaults keep the behavior of
// previously exported guest lists.

use serde::{Deserialize, Serialize};

/// How the header line is split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderMode {
    /// Plain split on commas, quotes are kept as typed
    #[default]
    Plain,
    /// Same quote-toggle scan as data rows
    QuoteAware,
}

/// How quotes inside data rows are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteMode {
    /// Every `"` flips the in-quotes flag and is never kept
    #[default]
    Toggle,
    /// RFC 4180 parsing, `""` is an escaped quote and quoted fields may span lines
    Rfc4180,
}

/// Configuration for guest CSV imports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Header line tokenization (default: Plain)
    pub header_mode: HeaderMode,

    /// Data row tokenization (default: Toggle)
    pub quote_mode: QuoteMode,

    /// Media types accepted by the type gate (default: ["text/csv"])
    pub accepted_media_types: Vec<String>,

    /// File extension accepted by the type gate (default: ".csv")
    pub accepted_extension: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            header_mode: HeaderMode::Plain,
            quote_mode: QuoteMode::Toggle,
            accepted_media_types: vec!["text/csv".to_string()],
            accepted_extension: ".csv".to_string(),
        }
    }
}

impl ImportConfig {
    /// Quote-aware headers and RFC 4180 rows
    pub fn strict() -> Self {
        Self {
            header_mode: HeaderMode::QuoteAware,
            quote_mode: QuoteMode::Rfc4180,
            ..Default::default()
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.accepted_media_types.iter().all(|t| t.trim().is_empty()) {
            return Err("accepted_media_types must contain at least one media type".to_string());
        }
        if !self.accepted_extension.starts_with('.') || self.accepted_extension.len() < 2 {
            return Err("accepted_extension must look like \".csv\"".to_string());
        }
        Ok(())
    }

    /// Type gate: declared media type or file name must say CSV
    pub fn accepts(&self, name: &str, media_type: &str) -> bool {
        self.accepted_media_types
            .iter()
            .any(|accepted| accepted == media_type)
            || name.ends_with(&self.accepted_extension)
    }
}
