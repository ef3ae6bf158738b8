use std::sync::Arc;

use crate::application::use_cases::guest_csv_import::{GuestCsvImporter, ImportOutcome};
use crate::domain::error::{AppError, Result};
use crate::domain::guest::{GuestRecord, GuestStatus};
use crate::domain::user::{has_capability, Capability, User};
use crate::infrastructure::csv::CsvFile;
use crate::infrastructure::store::{EventRepository, GuestRepository};

/// Guest list operations behind the event detail screen
pub struct EventGuestService {
    guests: Arc<dyn GuestRepository>,
    events: Arc<dyn EventRepository>,
    importer: GuestCsvImporter,
}

impl EventGuestService {
    pub fn new(
        guests: Arc<dyn GuestRepository>,
        events: Arc<dyn EventRepository>,
        importer: GuestCsvImporter,
    ) -> Self {
        Self {
            guests,
            events,
            importer,
        }
    }

    /// Import a CSV into `event_id` and persist the accepted guests.
    ///
    /// Import failures come back as `ImportOutcome::Failed` and commit nothing;
    /// `Err` is reserved for permission, lookup and store problems.
    pub async fn import_for_event(
        &self,
        user: &User,
        file: &CsvFile,
        event_id: &str,
    ) -> Result<ImportOutcome> {
        require(user, Capability::ImportGuests)?;

        let event = self
            .events
            .get(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {}", event_id)))?;

        let (guests, message) = match self.importer.process_file(file, &event.id).await {
            ImportOutcome::Imported { guests, message } => (guests, message),
            failed => return Ok(failed),
        };

        let stored = self.guests.add(guests).await?;
        let updated = self
            .events
            .increment_guest_count(&event.id, stored.len() as u32)
            .await?;

        if updated.guests > updated.max_guests {
            tracing::warn!(
                event_id = %updated.id,
                guests = updated.guests,
                max_guests = updated.max_guests,
                "Event is over capacity after import"
            );
        } else {
            tracing::info!(
                event_id = %updated.id,
                added = stored.len(),
                remaining = updated.remaining_capacity(),
                "Guests added to event"
            );
        }

        Ok(ImportOutcome::Imported {
            guests: stored,
            message,
        })
    }

    pub async fn guests_for_event(&self, event_id: &str) -> Result<Vec<GuestRecord>> {
        self.guests.list(Some(event_id)).await
    }

    /// Check-in screen status change
    pub async fn update_guest_status(
        &self,
        user: &User,
        guest_id: &str,
        status: GuestStatus,
    ) -> Result<GuestRecord> {
        require(user, Capability::CheckInGuests)?;

        self.guests
            .update_status(guest_id, status)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guest {}", guest_id)))
    }
}

fn require(user: &User, capability: Capability) -> Result<()> {
    if has_capability(user, capability) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "{} may not {:?}",
            user.email, capability
        )))
    }
}
