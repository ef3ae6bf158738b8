use serde::{Deserialize, Serialize};
use std::fmt;

use super::csv::SchemaField;

/// Failure of a single guest import attempt.
///
/// Every variant is terminal for that attempt and carries a message the
/// caller can show as-is. Nothing is committed when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail")]
pub enum ImportError {
    /// Declared media type is not CSV and the name lacks the CSV extension
    UnsupportedFormat(String),
    /// File content could not be read into memory
    IoFailure(String),
    /// No non-blank lines after line splitting
    EmptyFile,
    /// Required logical fields without a matching header, in declaration order
    MissingColumns(Vec<SchemaField>),
    /// Every mapped row was dropped by the name filter
    NoValidRows,
}

impl ImportError {
    /// Short machine-friendly kind label
    pub fn kind(&self) -> &'static str {
        match self {
            ImportError::UnsupportedFormat(_) => "UnsupportedFormat",
            ImportError::IoFailure(_) => "IOFailure",
            ImportError::EmptyFile => "EmptyFile",
            ImportError::MissingColumns(_) => "MissingColumns",
            ImportError::NoValidRows => "NoValidRows",
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::UnsupportedFormat(_) => write!(f, "Please upload a CSV file"),
            ImportError::IoFailure(msg) => write!(f, "Failed to read file: {}", msg),
            ImportError::EmptyFile => write!(f, "CSV file is empty"),
            ImportError::MissingColumns(fields) => {
                let names = fields
                    .iter()
                    .map(|field| field.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Missing required columns: {}", names)
            }
            ImportError::NoValidRows => write!(f, "No valid guest data found in the CSV file"),
        }
    }
}

impl std::error::Error for ImportError {}

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    Internal(String),
    NotFound(String),
    ValidationError(String),
    Forbidden(String),
    ConfigError(String),
    IoError(String),
    Import(ImportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
            AppError::Import(err) => write!(f, "Import error: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        AppError::Import(err)
    }
}

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
