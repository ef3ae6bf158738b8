// ============================================================
// GUEST CSV IMPORT USE CASE
// ============================================================
// Type gate, read, tokenize, resolve columns, map rows and filter
// them into guest records for one event

use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::domain::csv::{ImportConfig, RawTable, SchemaField};
use crate::domain::error::ImportError;
use crate::domain::guest::{GuestContact, GuestRecord, GuestStatus, UNKNOWN_GUEST_NAME};
use crate::infrastructure::csv::{CsvFile, CsvTokenizer};
use crate::infrastructure::notify::{Notification, Notifier, TracingNotifier};

/// Registration date format, e.g. "Oct 18, 2026"
pub const REGISTERED_DATE_FORMAT: &str = "%b %-d, %Y";

/// Header index for each required field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub organization: usize,
    pub job_title: usize,
    pub email: usize,
    pub phone: usize,
}

/// Caller-visible state after an import attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ImportOutcome {
    Imported {
        guests: Vec<GuestRecord>,
        message: String,
    },
    Failed {
        error: ImportError,
        message: String,
    },
}

impl ImportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ImportOutcome::Imported { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ImportOutcome::Imported { message, .. } | ImportOutcome::Failed { message, .. } => {
                message
            }
        }
    }
}

/// Guest CSV import engine
pub struct GuestCsvImporter {
    config: ImportConfig,
    notifier: Arc<dyn Notifier>,
}

impl GuestCsvImporter {
    pub fn new(config: ImportConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self { config, notifier }
    }

    /// Default configuration, notifications go to the log
    pub fn default_config() -> Self {
        Self::new(ImportConfig::default(), Arc::new(TracingNotifier))
    }

    /// Import a file for `event_id`, reporting either outcome as state
    pub async fn process_file(&self, file: &CsvFile, event_id: &str) -> ImportOutcome {
        match self.import_from_file(file, event_id).await {
            Ok(guests) => {
                let message = format!("Successfully imported {} guests", guests.len());
                ImportOutcome::Imported { guests, message }
            }
            Err(error) => {
                tracing::warn!(
                    file = %file.name,
                    event_id = %event_id,
                    kind = error.kind(),
                    error = %error,
                    "Guest CSV import failed"
                );
                let message = error.to_string();
                ImportOutcome::Failed { error, message }
            }
        }
    }

    /// Import a file for `event_id`
    pub async fn import_from_file(
        &self,
        file: &CsvFile,
        event_id: &str,
    ) -> Result<Vec<GuestRecord>, ImportError> {
        let start = Instant::now();

        if !self.config.accepts(&file.name, &file.media_type) {
            return Err(ImportError::UnsupportedFormat(format!(
                "{} ({})",
                file.name, file.media_type
            )));
        }

        let text = file.read_text().await?;
        let guests = self.import_content(&text, event_id)?;

        tracing::info!(
            file = %file.name,
            event_id = %event_id,
            imported = guests.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Guest CSV import finished"
        );

        self.notifier.notify(Notification {
            title: "Import Successful".to_string(),
            description: format!("Imported {} guests for this event.", guests.len()),
        });

        Ok(guests)
    }

    /// Tokenize, resolve, map and filter CSV text already in memory
    pub fn import_content(&self, text: &str, event_id: &str) -> Result<Vec<GuestRecord>, ImportError> {
        let table = CsvTokenizer::from_config(&self.config).tokenize(text)?;
        let columns = resolve_columns(&table.headers)?;

        let mapped = map_rows(&table, &columns, event_id);
        let total = mapped.len();
        let guests: Vec<GuestRecord> = mapped.into_iter().filter(GuestRecord::is_valid).collect();

        if guests.len() < total {
            tracing::debug!(
                dropped = total - guests.len(),
                "Dropped rows without a guest name"
            );
        }

        if guests.is_empty() {
            return Err(ImportError::NoValidRows);
        }

        let bad_emails = count_invalid_emails(&guests);
        if bad_emails > 0 {
            tracing::warn!(
                event_id = %event_id,
                count = bad_emails,
                "Imported guests with malformed email addresses"
            );
        }

        Ok(guests)
    }
}

/// Find the first header for every required field.
///
/// Fields do not claim headers, so two fields may share one column.
pub fn resolve_columns(headers: &[String]) -> Result<ColumnMap, ImportError> {
    let find = |field: SchemaField| headers.iter().position(|h| field.matches_header(h));

    let missing: Vec<SchemaField> = SchemaField::ALL
        .into_iter()
        .filter(|field| find(*field).is_none())
        .collect();

    match (
        find(SchemaField::Name),
        find(SchemaField::Organization),
        find(SchemaField::JobTitle),
        find(SchemaField::Email),
        find(SchemaField::Phone),
    ) {
        (Some(name), Some(organization), Some(job_title), Some(email), Some(phone)) => {
            Ok(ColumnMap {
                name,
                organization,
                job_title,
                email,
                phone,
            })
        }
        _ => Err(ImportError::MissingColumns(missing)),
    }
}

/// One record per row, stamped with a fresh id and today's date
fn map_rows(table: &RawTable, columns: &ColumnMap, event_id: &str) -> Vec<GuestRecord> {
    let registered_date = Local::now().format(REGISTERED_DATE_FORMAT).to_string();

    (0..table.row_count())
        .map(|row| {
            let cell = |column: usize| table.cell(row, column).to_string();
            let name = cell(columns.name);

            GuestRecord {
                id: format!("import-{}", uuid::Uuid::new_v4()),
                name: if name.is_empty() {
                    UNKNOWN_GUEST_NAME.to_string()
                } else {
                    name
                },
                organization: cell(columns.organization),
                job_title: cell(columns.job_title),
                contact: GuestContact {
                    email: cell(columns.email),
                    phone: cell(columns.phone),
                },
                event_id: event_id.to_string(),
                registered_date: registered_date.clone(),
                status: GuestStatus::Registered,
            }
        })
        .collect()
}

fn count_invalid_emails(guests: &[GuestRecord]) -> usize {
    guests
        .iter()
        .filter(|g| !g.contact.email.is_empty() && !g.contact.email.validate_email())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::collections::HashSet;
    use std::sync::Mutex;

    const HEADER: &str = "name,organization,job_title,email,phone";

    #[derive(Default)]
    struct RecordingNotifier {
        seen: Mutex<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }

    fn importer() -> GuestCsvImporter {
        GuestCsvImporter::default_config()
    }

    fn csv_file(text: &str) -> CsvFile {
        CsvFile::from_text("guests.csv", "text/csv", text)
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_well_formed_rows_copied_verbatim() {
        let text = format!(
            "{}\nEleni Tesfaye,Ethio Telecom,Marketing Manager,eleni@ethio.com,+251911000001\n\
             Abel Tibebu,Avod IT,IT Consultant,abel@avodit.com,+251911000008\n\
             Feven Tsegaye,Ministry of Health,Specialist,feven@moh.gov.et,+251911000009",
            HEADER
        );

        let guests = importer().import_from_file(&csv_file(&text), "1").await.unwrap();

        assert_eq!(guests.len(), 3);
        let first = &guests[0];
        assert_eq!(first.name, "Eleni Tesfaye");
        assert_eq!(first.organization, "Ethio Telecom");
        assert_eq!(first.job_title, "Marketing Manager");
        assert_eq!(first.contact.email, "eleni@ethio.com");
        assert_eq!(first.contact.phone, "+251911000001");
        assert_eq!(first.event_id, "1");
        assert_eq!(first.status, GuestStatus::Registered);
        assert!(first.id.starts_with("import-"));

        let date = Regex::new(r"^[A-Z][a-z]{2} \d{1,2}, \d{4}$").unwrap();
        assert!(date.is_match(&first.registered_date));
    }

    #[tokio::test]
    async fn test_unsupported_format() {
        let file = CsvFile::from_text("guests.xlsx", "application/vnd.ms-excel", "name");
        let err = importer().import_from_file(&file, "1").await.unwrap_err();

        assert!(matches!(err, ImportError::UnsupportedFormat(_)));
        assert_eq!(err.to_string(), "Please upload a CSV file");
    }

    #[tokio::test]
    async fn test_declared_type_alone_passes_gate() {
        let file = CsvFile::from_text("export", "text/csv", &format!("{}\nAbel,,,,", HEADER));
        assert_eq!(importer().import_from_file(&file, "1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_io_failure() {
        let file = CsvFile::from_path("/no/such/dir/guests.csv");
        let err = importer().import_from_file(&file, "1").await.unwrap_err();
        assert!(matches!(err, ImportError::IoFailure(_)));
    }

    #[test]
    fn test_empty_file() {
        let err = importer().import_content("\n\n  \r\n", "1").unwrap_err();
        assert_eq!(err, ImportError::EmptyFile);
    }

    #[test]
    fn test_alias_resolution() {
        let columns = resolve_columns(&headers(&[
            "Phone", "E-mail", "Title", "Company", "NAME",
        ]))
        .unwrap();
        assert_eq!(
            columns,
            ColumnMap {
                name: 4,
                organization: 3,
                job_title: 2,
                email: 1,
                phone: 0,
            }
        );

        let err = resolve_columns(&headers(&[
            "Full Name", "organization", "job title", "email", "phone",
        ]))
        .unwrap_err();
        assert_eq!(err, ImportError::MissingColumns(vec![SchemaField::Name]));
    }

    #[test]
    fn test_first_matching_header_wins() {
        let columns = resolve_columns(&headers(&[
            "name", "company", "organization", "title", "job_title", "email", "phone", "name",
        ]))
        .unwrap();
        assert_eq!(columns.name, 0);
        assert_eq!(columns.organization, 1);
        assert_eq!(columns.job_title, 3);
    }

    #[test]
    fn test_missing_columns_named_in_declaration_order() {
        for text in [
            "phone_number,name,organization,job_title".to_string(),
            "name,organization,job_title\nAbel,Avod,Consultant".to_string(),
        ] {
            let err = importer().import_content(&text, "1").unwrap_err();
            assert_eq!(
                err,
                ImportError::MissingColumns(vec![SchemaField::Email, SchemaField::Phone])
            );
            assert_eq!(err.to_string(), "Missing required columns: email, phone");
        }
    }

    #[test]
    fn test_quoted_commas() {
        let text = format!("{}\nAbel,\"Acme, Inc.\",CTO,abel@acme.io,555", HEADER);
        let guests = importer().import_content(&text, "1").unwrap();

        assert_eq!(guests[0].organization, "Acme, Inc.");
        assert_eq!(guests[0].job_title, "CTO");
    }

    #[test]
    fn test_short_row_padded() {
        let text = format!("{}\nSelam Haile,Addis Events", HEADER);
        let guests = importer().import_content(&text, "2").unwrap();

        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].organization, "Addis Events");
        assert_eq!(guests[0].job_title, "");
        assert_eq!(guests[0].contact, GuestContact::default());
    }

    #[test]
    fn test_rows_without_name_dropped() {
        let text = format!("{}\n,Acme,CTO,a@acme.io,1\nAbel,Avod,,,\nUnknown,X,,,", HEADER);
        let guests = importer().import_content(&text, "1").unwrap();

        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].name, "Abel");
    }

    #[test]
    fn test_only_nameless_row_is_no_valid_rows() {
        let text = format!("{}\n,Acme,CTO,a@acme.io,1", HEADER);
        assert_eq!(
            importer().import_content(&text, "1").unwrap_err(),
            ImportError::NoValidRows
        );
        assert_eq!(
            importer().import_content(HEADER, "1").unwrap_err(),
            ImportError::NoValidRows
        );
    }

    #[test]
    fn test_invalid_email_is_kept() {
        let text = format!("{}\nAbel,Avod,,not-an-email,", HEADER);
        let guests = importer().import_content(&text, "1").unwrap();

        assert_eq!(count_invalid_emails(&guests), 1);
        assert_eq!(guests[0].contact.email, "not-an-email");
    }

    #[tokio::test]
    async fn test_reimport_yields_fresh_ids() {
        let text = format!("{}\nAbel,Avod,IT,abel@avodit.com,1\nNahom,Snap,Photo,n@snap.com,2", HEADER);
        let importer = importer();
        let first = importer.import_from_file(&csv_file(&text), "1").await.unwrap();
        let second = importer.import_from_file(&csv_file(&text), "1").await.unwrap();

        let ids: HashSet<_> = first.iter().chain(&second).map(|g| g.id.clone()).collect();
        assert_eq!(ids.len(), 4);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.organization, b.organization);
            assert_eq!(a.contact, b.contact);
        }
    }

    #[tokio::test]
    async fn test_notification_only_on_success() {
        let notifier = Arc::new(RecordingNotifier::default());
        let importer = GuestCsvImporter::new(ImportConfig::default(), notifier.clone());

        importer
            .import_from_file(&csv_file(&format!("{}\nAbel,,,,", HEADER)), "1")
            .await
            .unwrap();
        let _ = importer.import_from_file(&csv_file(HEADER), "1").await;

        let seen = notifier.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].description, "Imported 1 guests for this event.");
    }

    #[tokio::test]
    async fn test_process_file_reports_both_outcomes() {
        let ok = importer()
            .process_file(&csv_file(&format!("{}\nAbel,,,,", HEADER)), "1")
            .await;
        assert!(ok.is_success());
        assert_eq!(ok.message(), "Successfully imported 1 guests");

        let failed = importer().process_file(&csv_file("name\nAbel"), "1").await;
        assert!(!failed.is_success());
        assert_eq!(
            failed.message(),
            "Missing required columns: organization, job_title, email, phone"
        );
    }

    #[test]
    fn test_strict_config_handles_escaped_quotes() {
        let importer = GuestCsvImporter::new(ImportConfig::strict(), Arc::new(TracingNotifier));
        let text = format!("{}\n\"Abel \"\"AB\"\" Tibebu\",Avod,,,", HEADER);
        let guests = importer.import_content(&text, "1").unwrap();

        assert_eq!(guests[0].name, "Abel \"AB\" Tibebu");
    }
}
