use crate::photostat_core::error::{PhotostatError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Photo file extensions (lowercase).
const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Whether a path names a JPEG photo, judged by its extension in any case.
pub fn is_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| PHOTO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// List the photos in `dir`, descending into subdirectories when `recursive`.
///
/// Entries are visited in file name order. Entries that cannot be read below
/// the root are logged and skipped; an unreadable root is an error.
pub fn find_photos(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(PhotostatError::PathNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(PhotostatError::NotADirectory(dir.to_path_buf()));
    }

    let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut photos = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_photo(entry.path()) {
            photos.push(entry.into_path());
        }
    }

    log::debug!("Found {} photos in {}", photos.len(), dir.display());
    Ok(photos)
}
