//! Scratch directory shared by every conversion in a batch.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory for intermediate elementary streams.
///
/// One workspace lives for a whole batch. The directory and everything in it
/// is removed when the workspace is dropped, whichever way the batch ends.
///
/// # Example
///
/// ```no_run
/// use avi2mp4_av::Workspace;
/// use std::path::Path;
///
/// let workspace = Workspace::new()?;
/// let stream = workspace.stream_file(Path::new("/videos/clip.avi"), "h264")?;
/// assert!(stream.starts_with(workspace.temp_dir()));
/// # Ok::<(), avi2mp4_av::Error>(())
/// ```
#[derive(Debug)]
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    /// Create a new workspace under the system temp directory.
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::Builder::new()
            .prefix("avi2mp4-")
            .tempdir()
            .map_err(|e| Error::Workspace(e.to_string()))?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Created workspace at {:?}", temp_dir.path());

        Ok(Self { temp_dir })
    }

    /// Get the temp directory path.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a temp file path with the given name.
    pub fn temp_file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Path of the intermediate stream for `input`: `<stem>.<extension>` inside the workspace.
    pub fn stream_file(&self, input: &Path, extension: &str) -> Result<PathBuf> {
        let stem = input
            .file_stem()
            .ok_or_else(|| Error::InvalidInput(format!("no file name in {:?}", input)))?;

        let mut name = stem.to_os_string();
        name.push(".");
        name.push(extension);
        Ok(self.temp_dir.path().join(name))
    }

    /// Remove a file inside the workspace if it is there.
    pub fn discard(&self, path: &Path) -> Result<()> {
        if !path.starts_with(self.temp_dir.path()) {
            return Err(Error::Workspace(format!(
                "refusing to remove {:?} outside the workspace",
                path
            )));
        }

        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Remove the workspace now, reporting any failure.
    pub fn close(self) -> Result<()> {
        self.temp_dir
            .close()
            .map_err(|e| Error::Workspace(e.to_string()))
    }
}
