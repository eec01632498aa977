//! Conversion of a single source file.

use crate::config::{ConversionConfig, ToolsConfig};
use crate::report;
use avi2mp4_av::actions::{extract_video_stream, remux_stream, RemuxOptions};
use avi2mp4_av::tools::{get_tool_path, FFMPEG, MPLAYER};
use avi2mp4_av::{format_file_size, paths, Workspace};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Resolved executables for the two conversion steps.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub mplayer: PathBuf,
    pub ffmpeg: PathBuf,
}

impl Toolchain {
    /// Resolve both tools, preferring configured paths.
    pub fn resolve(tools: &ToolsConfig) -> avi2mp4_av::Result<Self> {
        Ok(Self {
            mplayer: get_tool_path(MPLAYER, tools.mplayer_path.as_deref())?,
            ffmpeg: get_tool_path(FFMPEG, tools.ffmpeg_path.as_deref())?,
        })
    }
}

/// What happened to the source after a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRemoval {
    /// Removal was not requested.
    Kept,
    Removed,
    /// Removal was requested but failed; the output is still good.
    Failed(String),
}

/// A verified conversion.
#[derive(Debug, Clone)]
pub struct Converted {
    pub output: PathBuf,
    pub size: u64,
    pub removal: SourceRemoval,
}

/// Why a single file could not be converted.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid source path: {}", .path.display())]
    InvalidSource {
        path: PathBuf,
        #[source]
        source: avi2mp4_av::Error,
    },

    #[error("Failed to extract video stream from: {file}")]
    Extract {
        file: String,
        #[source]
        source: avi2mp4_av::Error,
    },

    #[error("Failed to create {container} file for: {file}")]
    Remux {
        file: String,
        container: String,
        #[source]
        source: avi2mp4_av::Error,
    },

    #[error("Error verifying output file: {}", .output.display())]
    Verify {
        output: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convert `input` to the configured container next to it.
///
/// The elementary stream is staged inside `workspace` and discarded
/// afterwards. Status lines are printed for each step; the returned error
/// says which step failed.
pub fn convert_file(
    input: &Path,
    workspace: &Workspace,
    tools: &Toolchain,
    settings: &ConversionConfig,
) -> Result<Converted, ConvertError> {
    let file = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let container = settings.target_container;
    let label = container.extension().to_uppercase();

    report::heading(&format!("Processing: {}", file));

    let stream = workspace
        .stream_file(input, &settings.stream_extension)
        .map_err(|source| ConvertError::InvalidSource {
            path: input.to_path_buf(),
            source,
        })?;
    let output = paths::output_path(input, container.extension());
    debug!("Staging {:?} via {:?} -> {:?}", input, stream, output);

    // A stream left by an earlier file with the same stem must not count as ours.
    discard_stream(workspace, &stream);

    let result = remux_via_stream(input, &stream, &output, tools, settings, &file, &label);
    discard_stream(workspace, &stream);
    result?;

    report::step("  Step 3/3: Verifying output file...");
    let size = std::fs::metadata(&output)
        .map_err(|source| ConvertError::Verify {
            output: output.clone(),
            source,
        })?
        .len();

    report::success(&format!(
        "  Successfully created: {} ({})",
        output.display(),
        format_file_size(size)
    ));
    info!("Converted {:?} -> {:?} ({} bytes)", input, output, size);

    let removal = if settings.remove_original {
        remove_source(input)
    } else {
        SourceRemoval::Kept
    };

    Ok(Converted {
        output,
        size,
        removal,
    })
}

fn remux_via_stream(
    input: &Path,
    stream: &Path,
    output: &Path,
    tools: &Toolchain,
    settings: &ConversionConfig,
    file: &str,
    label: &str,
) -> Result<(), ConvertError> {
    report::step("  Step 1/3: Extracting video stream with mplayer...");
    extract_video_stream(&tools.mplayer, input, stream).map_err(|source| {
        ConvertError::Extract {
            file: file.to_string(),
            source,
        }
    })?;

    report::step(&format!("  Step 2/3: Creating {} with ffmpeg...", label));
    let options = RemuxOptions {
        overwrite: settings.overwrite,
    };
    remux_stream(&tools.ffmpeg, stream, output, options).map_err(|source| {
        ConvertError::Remux {
            file: file.to_string(),
            container: label.to_string(),
            source,
        }
    })
}

fn discard_stream(workspace: &Workspace, stream: &Path) {
    if let Err(e) = workspace.discard(stream) {
        warn!("Could not remove intermediate stream {:?}: {}", stream, e);
    }
}

fn remove_source(input: &Path) -> SourceRemoval {
    match std::fs::remove_file(input) {
        Ok(()) => {
            report::plain(&format!("  Removed original: {}", input.display()));
            SourceRemoval::Removed
        }
        Err(e) => {
            warn!("Could not remove original {:?}: {}", input, e);
            report::failure(&format!(
                "  Warning: could not remove original {}: {}",
                input.display(),
                e
            ));
            SourceRemoval::Failed(e.to_string())
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use avi2mp4_av::test_support::script;
    use std::fs;
    use tempfile::tempdir;

    fn toolchain(bin: &Path, mplayer_body: &str) -> Toolchain {
        Toolchain {
            mplayer: script(bin, "mplayer", mplayer_body),
            ffmpeg: script(
                bin,
                "ffmpeg",
                r#"echo ran >> "$(dirname "$0")/ffmpeg.calls"
prev=""; for a in "$@"; do [ "$prev" = "-i" ] && src="$a"; prev="$a"; done
cp "$src" "$prev""#,
            ),
        }
    }

    const COPY_STREAM: &str = r#"cp "$4" "$3""#;

    #[test]
    fn test_convert_writes_sibling_output() {
        let bin = tempdir().unwrap();
        let videos = tempdir().unwrap();
        let input = videos.path().join("holiday.AVI");
        fs::write(&input, b"0123456789").unwrap();

        let workspace = Workspace::new().unwrap();
        let converted = convert_file(
            &input,
            &workspace,
            &toolchain(bin.path(), COPY_STREAM),
            &ConversionConfig::default(),
        )
        .unwrap();

        assert_eq!(converted.output, videos.path().join("holiday.mp4"));
        assert_eq!(converted.size, 10);
        assert_eq!(converted.removal, SourceRemoval::Kept);
        assert!(input.exists());
        // Intermediate stream does not outlive the file and never sits beside the source.
        assert!(!workspace.temp_file("holiday.h264").exists());
        assert!(!videos.path().join("holiday.h264").exists());
    }

    #[test]
    fn test_extract_failure_skips_remux() {
        let bin = tempdir().unwrap();
        let videos = tempdir().unwrap();
        let input = videos.path().join("broken.avi");
        fs::write(&input, b"x").unwrap();

        let workspace = Workspace::new().unwrap();
        let err = convert_file(
            &input,
            &workspace,
            &toolchain(bin.path(), "echo 'cannot demux' >&2; exit 1"),
            &ConversionConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ConvertError::Extract { ref file, .. } if file == "broken.avi"));
        assert!(!bin.path().join("ffmpeg.calls").exists());
        assert!(!videos.path().join("broken.mp4").exists());
    }

    #[test]
    fn test_stale_stream_is_not_reused() {
        let bin = tempdir().unwrap();
        let videos = tempdir().unwrap();
        let input = videos.path().join("clip.avi");
        fs::write(&input, b"x").unwrap();

        let workspace = Workspace::new().unwrap();
        fs::write(workspace.temp_file("clip.h264"), b"stale").unwrap();

        // Exits zero without writing anything.
        let err = convert_file(
            &input,
            &workspace,
            &toolchain(bin.path(), "exit 0"),
            &ConversionConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::Extract { .. }));
    }

    #[test]
    fn test_remove_original() {
        let bin = tempdir().unwrap();
        let videos = tempdir().unwrap();
        let input = videos.path().join("clip.avi");
        fs::write(&input, b"x").unwrap();

        let settings = ConversionConfig {
            remove_original: true,
            ..Default::default()
        };
        let workspace = Workspace::new().unwrap();
        let converted =
            convert_file(&input, &workspace, &toolchain(bin.path(), COPY_STREAM), &settings)
                .unwrap();

        assert_eq!(converted.removal, SourceRemoval::Removed);
        assert!(!input.exists());
        assert!(converted.output.exists());
    }

    #[test]
    fn test_other_container() {
        let bin = tempdir().unwrap();
        let videos = tempdir().unwrap();
        let input = videos.path().join("clip.avi");
        fs::write(&input, b"x").unwrap();

        let settings = ConversionConfig {
            target_container: avi2mp4_av::Container::Mkv,
            ..Default::default()
        };
        let workspace = Workspace::new().unwrap();
        let converted =
            convert_file(&input, &workspace, &toolchain(bin.path(), COPY_STREAM), &settings)
                .unwrap();

        assert_eq!(converted.output, videos.path().join("clip.mkv"));
    }
}
