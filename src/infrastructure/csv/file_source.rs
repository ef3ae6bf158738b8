// ============================================================
// CSV FILE SOURCE
// ============================================================
// File-like input for guest imports: a name, a declared media type
// and content that is read once into memory

use std::path::{Path, PathBuf};

use crate::domain::error::ImportError;

#[derive(Debug, Clone)]
enum CsvSource {
    Bytes(Vec<u8>),
    Path(PathBuf),
}

/// An uploaded or picked file
#[derive(Debug, Clone)]
pub struct CsvFile {
    /// File name as supplied by the picker
    pub name: String,

    /// Declared media type, may be empty
    pub media_type: String,

    source: CsvSource,
}

impl CsvFile {
    /// In-memory file content
    pub fn from_bytes(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            source: CsvSource::Bytes(bytes.into()),
        }
    }

    pub fn from_text(name: impl Into<String>, media_type: impl Into<String>, text: &str) -> Self {
        Self::from_bytes(name, media_type, text.as_bytes().to_vec())
    }

    /// File on disk; the media type is derived from the extension
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let media_type = media_type_for(path);

        Self {
            name,
            media_type: media_type.to_string(),
            source: CsvSource::Path(path.to_path_buf()),
        }
    }

    /// Load the whole content as text
    pub async fn read_text(&self) -> Result<String, ImportError> {
        let bytes = match &self.source {
            CsvSource::Bytes(bytes) => bytes.clone(),
            CsvSource::Path(path) => tokio::fs::read(path).await.map_err(|e| {
                ImportError::IoFailure(format!("{}: {}", path.display(), e))
            })?,
        };

        Ok(decode_text(&self.name, &bytes))
    }
}

fn media_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => "text/csv",
        Some(ext) if ext.eq_ignore_ascii_case("txt") => "text/plain",
        _ => "",
    }
}

/// UTF-8 decode with BOM removal; malformed sequences are replaced
fn decode_text(name: &str, bytes: &[u8]) -> String {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        tracing::warn!(file = %name, "CSV content is not valid UTF-8, replaced malformed bytes");
    }
    text.into_owned()
}
