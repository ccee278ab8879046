pub mod photos;
pub mod session;

pub use crate::domain::{Archive, ArchiveStore};
pub use crate::utils::error::Result;
pub use session::ArchiveSession;
