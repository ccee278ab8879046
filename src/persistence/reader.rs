use crate::domain::Archive;
use crate::persistence::records::ArchiveRecord;
use crate::utils::error::{ArchiveError, Result};
use std::path::{Path, PathBuf};

/// Reads an archive back from a JSON file.
///
/// Every camera and film comes back as a freshly constructed entity; a film's
/// camera is never looked up in the camera collection.
#[derive(Debug, Clone)]
pub struct ArchiveReader {
    source: PathBuf,
}

impl ArchiveReader {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn read(&self) -> Result<Archive> {
        tracing::debug!("Reading archive from {}", self.source.display());
        let content = std::fs::read_to_string(&self.source)
            .map_err(|e| ArchiveError::io(&self.source, e))?;
        self.parse(&content)
    }

    /// Parses an archive document, attributing errors to this reader's source.
    pub fn parse(&self, content: &str) -> Result<Archive> {
        let record: ArchiveRecord =
            serde_json::from_str(content).map_err(|e| ArchiveError::ParseError {
                path: self.source.clone(),
                source: e,
            })?;

        let archive = Archive::from(record);
        tracing::debug!(
            "Parsed {} cameras and {} films ({} bytes)",
            archive.cameras().size(),
            archive.films().size(),
            content.len()
        );
        Ok(archive)
    }
}
