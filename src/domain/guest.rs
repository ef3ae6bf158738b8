use serde::{Deserialize, Serialize};

/// Placeholder substituted when a row has no name
pub const UNKNOWN_GUEST_NAME: &str = "Unknown";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GuestStatus {
    #[default]
    Registered,
    CheckedIn,
    NoShow,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct GuestContact {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuestRecord {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub job_title: String,
    pub contact: GuestContact,
    pub event_id: String,
    /// Formatted as "MMM d, yyyy"
    pub registered_date: String,
    pub status: GuestStatus,
}

impl GuestRecord {
    /// A guest needs a real name to be kept
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.name != UNKNOWN_GUEST_NAME
    }
}
