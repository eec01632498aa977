//! Path helpers for matching sources and naming outputs.

use std::path::{Path, PathBuf};

/// Check whether `path` has extension `extension`, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use avi2mp4_av::paths::has_extension;
///
/// assert!(has_extension(Path::new("clip.avi"), "avi"));
/// assert!(has_extension(Path::new("/videos/CLIP.AvI"), "avi"));
/// assert!(!has_extension(Path::new("clip.mp4"), "avi"));
/// assert!(!has_extension(Path::new("avi"), "avi"));
/// ```
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// Output path for `input`: same directory and stem, new extension.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use avi2mp4_av::paths::output_path;
///
/// assert_eq!(
///     output_path(Path::new("/videos/2019/trip.AVI"), "mp4"),
///     PathBuf::from("/videos/2019/trip.mp4")
/// );
/// ```
pub fn output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}
