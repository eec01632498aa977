//! Source file discovery.

use anyhow::Result;
use avi2mp4_av::paths::has_extension;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Find every file under `root` whose extension is `extension`, ignoring case.
///
/// Subdirectories are searched and symlinks are followed. Entries are
/// visited in file-name order, so the result is stable between runs.
/// Unreadable entries and symlink loops are skipped.
pub fn find_sources(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("Not a directory: {:?}", root);
    }

    let mut sources = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if has_extension(entry.path(), extension) {
            sources.push(entry.into_path());
        }
    }

    debug!("Found {} .{} files under {:?}", sources.len(), extension, root);
    Ok(sources)
}
