use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::error::{AppError, Result};
use crate::domain::event::Event;
use crate::domain::guest::{GuestRecord, GuestStatus};

#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// All guests, or only those attached to `event_id`
    async fn list(&self, event_id: Option<&str>) -> Result<Vec<GuestRecord>>;
    async fn add(&self, guests: Vec<GuestRecord>) -> Result<Vec<GuestRecord>>;
    async fn update_status(&self, guest_id: &str, status: GuestStatus)
        -> Result<Option<GuestRecord>>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn get(&self, event_id: &str) -> Result<Option<Event>>;
    async fn list(&self) -> Result<Vec<Event>>;
    async fn increment_guest_count(&self, event_id: &str, by: u32) -> Result<Event>;
}

/// Process-local guest and event collections
#[derive(Debug, Default)]
pub struct InMemoryStore {
    events: RwLock<Vec<Event>>,
    guests: RwLock<Vec<GuestRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
            guests: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GuestRepository for InMemoryStore {
    async fn list(&self, event_id: Option<&str>) -> Result<Vec<GuestRecord>> {
        let guests = self.guests.read().await;
        Ok(guests
            .iter()
            .filter(|guest| event_id.map_or(true, |id| guest.event_id == id))
            .cloned()
            .collect())
    }

    async fn add(&self, new_guests: Vec<GuestRecord>) -> Result<Vec<GuestRecord>> {
        let mut guests = self.guests.write().await;
        if let Some(duplicate) = new_guests
            .iter()
            .find(|new| guests.iter().any(|existing| existing.id == new.id))
        {
            return Err(AppError::ValidationError(format!(
                "Guest id already exists: {}",
                duplicate.id
            )));
        }
        guests.extend(new_guests.iter().cloned());
        Ok(new_guests)
    }

    async fn update_status(
        &self,
        guest_id: &str,
        status: GuestStatus,
    ) -> Result<Option<GuestRecord>> {
        let mut guests = self.guests.write().await;
        Ok(guests.iter_mut().find(|guest| guest.id == guest_id).map(|guest| {
            guest.status = status;
            guest.clone()
        }))
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn get(&self, event_id: &str) -> Result<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|event| event.id == event_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Event>> {
        Ok(self.events.read().await.clone())
    }

    async fn increment_guest_count(&self, event_id: &str, by: u32) -> Result<Event> {
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|event| event.id == event_id)
            .ok_or_else(|| AppError::NotFound(format!("Event {}", event_id)))?;
        event.guests = event.guests.saturating_add(by);
        Ok(event.clone())
    }
}
