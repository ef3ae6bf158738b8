// ============================================================
// GUEST SCHEMA FIELDS
// ============================================================
// The fixed set of logical fields a guest CSV must provide

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEADER_SEPARATOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[_\s-]").expect("valid header separator pattern"));

/// Required logical field of a guest import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaField {
    Name,
    Organization,
    JobTitle,
    Email,
    Phone,
}

impl SchemaField {
    /// All required fields in declaration order. Resolution and error
    /// reporting both follow this order.
    pub const ALL: [SchemaField; 5] = [
        SchemaField::Name,
        SchemaField::Organization,
        SchemaField::JobTitle,
        SchemaField::Email,
        SchemaField::Phone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaField::Name => "name",
            SchemaField::Organization => "organization",
            SchemaField::JobTitle => "job_title",
            SchemaField::Email => "email",
            SchemaField::Phone => "phone",
        }
    }

    /// Accepted header spellings, already normalized
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            SchemaField::Name => &["name"],
            SchemaField::Organization => &["organization", "company"],
            SchemaField::JobTitle => &["jobtitle", "title"],
            SchemaField::Email => &["email"],
            SchemaField::Phone => &["phone"],
        }
    }

    /// Whether a raw header cell names this field
    pub fn matches_header(&self, header: &str) -> bool {
        let normalized = normalize_header(header);
        self.aliases().iter().any(|alias| *alias == normalized)
    }
}

impl std::fmt::Display for SchemaField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-case a header and strip underscores, whitespace and hyphens
pub fn normalize_header(header: &str) -> String {
    HEADER_SEPARATOR_PATTERN
        .replace_all(&header.trim().to_lowercase(), "")
        .into_owned()
}
