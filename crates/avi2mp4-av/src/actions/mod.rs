//! The two external steps of a conversion.
//!
//! - Dumping the raw video elementary stream with mplayer
//! - Wrapping that stream in a new container with ffmpeg

mod extract;
mod remux;

pub use extract::extract_video_stream;
pub use remux::{remux_stream, Container, RemuxOptions};

use crate::{Error, Result};
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Run `cmd` to completion with stdin closed and both output streams captured.
///
/// Succeeds only when the tool exits zero and `expected` exists afterwards.
fn run_tool(tool: &str, cmd: &mut Command, expected: &Path) -> Result<Output> {
    #[cfg(feature = "tracing")]
    tracing::debug!("Running {}: {:?}", tool, cmd);

    let output = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| Error::from_spawn(tool, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let message = if stderr.is_empty() {
            format!("exited with {}", output.status)
        } else {
            stderr.to_string()
        };
        return Err(Error::tool_failed(tool, message));
    }

    if !expected.exists() {
        return Err(Error::output_missing(tool, expected));
    }

    Ok(output)
}
