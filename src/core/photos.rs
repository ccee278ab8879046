use crate::utils::error::{ArchiveError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFAULT_IMAGE_EXTENSIONS: [&str; 4] = ["gif", "png", "jpg", "jpeg"];

/// Image files directly inside `dir`, sorted by path.
///
/// Matching is a case-sensitive suffix check on `.<ext>`. A path that does
/// not exist or is not a directory has no images.
pub fn list_images<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    extensions: &[S],
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        tracing::debug!("No photo directory at {}", dir.display());
        return Ok(Vec::new());
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            match e.into_io_error() {
                Some(source) => ArchiveError::io(path, source),
                None => ArchiveError::NotFound {
                    what: path.display().to_string(),
                },
            }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if has_image_extension(&name, extensions) {
            images.push(entry.into_path());
        }
    }

    tracing::debug!("Found {} images in {}", images.len(), dir.display());
    Ok(images)
}

fn has_image_extension<S: AsRef<str>>(name: &str, extensions: &[S]) -> bool {
    extensions.iter().any(|ext| {
        let suffix = format!(".{}", ext.as_ref());
        name.len() > suffix.len() && name.ends_with(&suffix)
    })
}
