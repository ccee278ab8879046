pub mod config;
pub mod core;
pub mod domain;
pub mod persistence;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::ArchiveConfig;
pub use crate::core::ArchiveSession;
pub use crate::domain::{Archive, ArchiveStore, Camera, CameraCollection, Film, FilmCollection};
pub use crate::persistence::{ArchiveReader, ArchiveWriter, JsonArchiveStore};
pub use crate::utils::error::{ArchiveError, Result};
