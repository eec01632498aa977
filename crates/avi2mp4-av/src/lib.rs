//! # avi2mp4-av
//!
//! Plumbing around the external tools used to move AVI video into MP4.
//!
//! This crate provides functionality for:
//! - Locating mplayer and ffmpeg on the execution path
//! - A scratch [`Workspace`] for intermediate elementary streams
//! - Dumping a raw video stream with mplayer
//! - Remuxing that stream into a new container with ffmpeg
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use avi2mp4_av::actions::{extract_video_stream, remux_stream, RemuxOptions};
//! use avi2mp4_av::{paths, require_tool, Workspace};
//! use std::path::Path;
//!
//! let input = Path::new("/videos/clip.avi");
//! let workspace = Workspace::new()?;
//! let stream = workspace.stream_file(input, "h264")?;
//! let output = paths::output_path(input, "mp4");
//!
//! extract_video_stream(&require_tool("mplayer")?, input, &stream)?;
//! remux_stream(&require_tool("ffmpeg")?, &stream, &output, RemuxOptions::default())?;
//! # Ok::<(), avi2mp4_av::Error>(())
//! ```

pub mod actions;
mod error;
pub mod paths;
mod size;
pub mod tools;
pub mod workspace;

#[cfg(all(unix, any(test, feature = "test-support")))]
pub mod test_support;

// Re-exports
pub use actions::Container;
pub use error::{Error, Result};
pub use size::format_file_size;
pub use tools::{check_tools, find_missing, get_tool_path, require_tool, ToolInfo};
pub use workspace::Workspace;
