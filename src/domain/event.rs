use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Published,
    Draft,
    Approved,
    Overview,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    pub status: EventStatus,
    /// Denormalized count of guests attached to this event
    pub guests: u32,
    pub max_guests: u32,
    pub description: Option<String>,
}

impl Event {
    pub fn remaining_capacity(&self) -> u32 {
        self.max_guests.saturating_sub(self.guests)
    }
}
