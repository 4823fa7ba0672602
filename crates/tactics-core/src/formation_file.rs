//! Import and export of formation files.
//!
//! Import is a two-step protocol: the file's metadata is checked before any
//! content is read, then the text is parsed and validated. Hosts with an
//! async file API use [`import_formation`]; synchronous hosts call
//! [`begin_import`] and [`PendingImport::finish`] themselves.

use std::future::Future;

use crate::board::Side;
use crate::config::FormationLimits;
use crate::document::FormationDocument;
use crate::validation::{
    FileMeta, ValidationError, validate_formation_document_with, validate_formation_file_with,
};

pub const JSON_MIME: &str = "application/json";

/// Failure reported by the host's file reader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error reading the file: {0}")]
pub struct FileReadError(pub String);

/// Every way an import can fail. The first failure is reported.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    FileRead(#[from] FileReadError),
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// A file ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportedFile {
    pub fn bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }
}

/// `formacion_equipo_1.json` or `formacion_equipo_2.json`.
pub fn export_file_name(side: Side) -> String {
    format!("formacion_equipo_{}.json", side.number())
}

/// Serializes one side's positions as a pretty-printed JSON file.
pub fn export_formation(
    document: &FormationDocument,
    side: Side,
) -> Result<ExportedFile, serde_json::Error> {
    let contents = document.to_json_pretty()?;
    tracing::info!(%side, players = document.len(), "formation exported");
    Ok(ExportedFile {
        file_name: export_file_name(side),
        mime_type: JSON_MIME,
        contents,
    })
}

/// A file whose metadata passed validation and whose content may be read.
#[derive(Debug, Clone)]
#[must_use]
pub struct PendingImport {
    file_name: String,
    limits: FormationLimits,
}

impl PendingImport {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Parses and validates the file content.
    pub fn finish(self, text: &str) -> Result<FormationDocument, ImportError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let document = validate_formation_document_with(value, &self.limits)?;
        tracing::info!(file = %self.file_name, players = document.len(), "formation imported");
        Ok(document)
    }
}

/// Step one: checks type and size.
pub fn begin_import(file: &FileMeta) -> Result<PendingImport, ImportError> {
    begin_import_with(file, FormationLimits::default())
}

pub fn begin_import_with(
    file: &FileMeta,
    limits: FormationLimits,
) -> Result<PendingImport, ImportError> {
    validate_formation_file_with(file, &limits)?;
    Ok(PendingImport {
        file_name: file.name.clone(),
        limits,
    })
}

/// A picked file the host can read as text.
pub trait FormationSource {
    fn meta(&self) -> FileMeta;

    fn read_text(&self) -> impl Future<Output = Result<String, FileReadError>>;
}

/// Validates, reads, parses and validates again; resolves with the sanitized
/// document.
pub async fn import_formation<S: FormationSource>(
    source: &S,
) -> Result<FormationDocument, ImportError> {
    let meta = source.meta();
    let pending = begin_import(&meta).inspect_err(|e| {
        tracing::warn!(file = %meta.name, error = %e, "formation file rejected");
    })?;
    let text = source.read_text().await?;
    pending.finish(&text)
}
