use crate::domain::{Archive, ArchiveStore};
use crate::persistence::{ArchiveReader, ArchiveWriter};
use crate::utils::error::{ArchiveError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Archive kept in a single JSON file on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonArchiveStore {
    path: PathBuf,
}

impl JsonArchiveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl ArchiveStore for JsonArchiveStore {
    fn load(&self) -> Result<Archive> {
        let archive = ArchiveReader::new(&self.path).read()?;
        tracing::info!(
            "Loaded archive from {} ({} cameras, {} films)",
            self.path.display(),
            archive.cameras().size(),
            archive.films().size()
        );
        Ok(archive)
    }

    fn save(&self, archive: &Archive) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ArchiveError::io(parent, e))?;
        }

        ArchiveWriter::new(&self.path).write(archive)?;
        tracing::info!(
            "Saved archive to {} ({} cameras, {} films)",
            self.path.display(),
            archive.cameras().size(),
            archive.films().size()
        );
        Ok(())
    }
}
