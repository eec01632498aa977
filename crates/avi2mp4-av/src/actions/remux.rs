//! Container remuxing of a raw elementary stream.

use super::run_tool;
use crate::tools::FFMPEG;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// Supported target container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    /// MPEG-4 Part 14 container
    #[default]
    Mp4,
    /// Matroska container
    Mkv,
    /// QuickTime container
    Mov,
}

impl Container {
    /// Get the file extension for this container.
    pub fn extension(&self) -> &'static str {
        match self {
            Container::Mp4 => "mp4",
            Container::Mkv => "mkv",
            Container::Mov => "mov",
        }
    }
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for Container {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mp4" | "m4v" => Ok(Container::Mp4),
            "mkv" | "matroska" => Ok(Container::Mkv),
            "mov" | "quicktime" => Ok(Container::Mov),
            _ => Err(format!("Unknown container format: {}", s)),
        }
    }
}

/// Options for [`remux_stream`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RemuxOptions {
    /// Replace an existing output instead of failing.
    pub overwrite: bool,
}

/// Copy the video of the elementary stream at `stream` into `output` with ffmpeg.
///
/// No re-encoding happens; the container is chosen by ffmpeg from the
/// output extension.
pub fn remux_stream(
    ffmpeg: &Path,
    stream: &Path,
    output: &Path,
    options: RemuxOptions,
) -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing::info!("Remuxing {:?} -> {:?}", stream, output);

    let mut cmd = Command::new(ffmpeg);
    cmd.args(ffmpeg_args(stream, output, options));

    run_tool(FFMPEG, &mut cmd, output)?;
    Ok(())
}

fn ffmpeg_args(stream: &Path, output: &Path, options: RemuxOptions) -> Vec<OsString> {
    let overwrite = if options.overwrite { "-y" } else { "-n" };

    let mut args: Vec<OsString> = [
        "-hide_banner",
        "-loglevel",
        "error",
        "-nostdin",
        overwrite,
        "-i",
    ]
    .iter()
    .map(OsString::from)
    .collect();
    args.push(stream.into());
    args.extend(["-c:v", "copy"].iter().map(OsString::from));
    args.push(output.into());
    args
}
