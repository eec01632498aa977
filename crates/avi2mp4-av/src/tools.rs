//! External tool detection and management.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Tool used to dump the raw video elementary stream.
pub const MPLAYER: &str = "mplayer";

/// Tool used to wrap the elementary stream in the target container.
pub const FFMPEG: &str = "ffmpeg";

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Check if a tool resolves and get its information.
///
/// Availability is decided by the `PATH` lookup alone. The version argument
/// is best-effort: mplayer, for one, has no flag that exits cleanly.
pub fn check_tool_with_arg(name: &str, version_arg: &str) -> ToolInfo {
    let Ok(path) = which::which(name) else {
        return ToolInfo {
            name: name.to_string(),
            available: false,
            version: None,
            path: None,
        };
    };

    let version = Command::new(&path)
        .arg(version_arg)
        .stdin(Stdio::null())
        .output()
        .ok()
        .and_then(|output| {
            String::from_utf8_lossy(&output.stdout)
                .lines()
                .find(|line| !line.trim().is_empty())
                .map(|s| s.to_string())
        });

    ToolInfo {
        name: name.to_string(),
        available: true,
        version,
        path: Some(path),
    }
}

/// Check the tools a conversion run needs.
///
/// Returns information about mplayer and ffmpeg, honouring configured paths.
pub fn check_tools(mplayer: Option<&Path>, ffmpeg: Option<&Path>) -> Vec<ToolInfo> {
    let mut mplayer_info = check_tool_with_arg(&tool_name(MPLAYER, mplayer), "-v");
    mplayer_info.name = MPLAYER.to_string();

    let mut ffmpeg_info = check_tool_with_arg(&tool_name(FFMPEG, ffmpeg), "-version");
    ffmpeg_info.name = FFMPEG.to_string();

    vec![mplayer_info, ffmpeg_info]
}

/// Return the names in `names` that do not resolve on the execution path.
///
/// Names containing a path separator are checked directly instead of being
/// searched for. The lookup follows platform rules, so `PATHEXT` applies on
/// Windows.
///
/// # Example
///
/// ```
/// use avi2mp4_av::tools::find_missing;
///
/// let missing = find_missing(&["surely_not_installed_tool_98765"]);
/// assert_eq!(missing, vec!["surely_not_installed_tool_98765".to_string()]);
/// ```
pub fn find_missing<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| which::which(name).is_err())
        .map(str::to_string)
        .collect()
}

/// Require that a tool is available, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Configured {} path {:?} does not exist, searching PATH",
            name,
            path
        );
    }

    require_tool(name)
}

/// The string to hand to a PATH lookup: a configured path that exists, or the bare name.
pub fn tool_name(name: &str, config_path: Option<&Path>) -> String {
    match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        _ => name.to_string(),
    }
}
