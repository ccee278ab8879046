use crate::domain::Archive;
use crate::persistence::records::ArchiveRecord;
use crate::utils::error::{ArchiveError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Writes an archive to a JSON file, pretty-printed with four-space indents.
#[derive(Debug, Clone)]
pub struct ArchiveWriter {
    destination: PathBuf,
}

impl ArchiveWriter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Renders the document in memory first, so a destination that cannot be
    /// opened never receives any bytes.
    pub fn write(&self, archive: &Archive) -> Result<()> {
        let data = render(archive)?;

        let file =
            File::create(&self.destination).map_err(|e| ArchiveError::io(&self.destination, e))?;
        let mut out = BufWriter::new(file);
        out.write_all(&data)
            .and_then(|_| out.flush())
            .map_err(|e| ArchiveError::io(&self.destination, e))?;

        tracing::debug!(
            "Wrote {} bytes to {}",
            data.len(),
            self.destination.display()
        );
        Ok(())
    }
}

/// Encodes `archive` as the JSON document written by [`ArchiveWriter`].
pub fn render(archive: &Archive) -> Result<Vec<u8>> {
    let record = ArchiveRecord::from(archive);
    let mut data = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
    record.serialize(&mut serializer)?;
    Ok(data)
}
