use crate::domain::archive::Archive;
use crate::utils::error::Result;

/// Where an [`Archive`] is loaded from and saved to.
pub trait ArchiveStore {
    fn load(&self) -> Result<Archive>;
    fn save(&self, archive: &Archive) -> Result<()>;
}
