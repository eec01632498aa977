use avi2mp4_av::Container;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub conversion: ConversionConfig,
}

/// Explicit tool locations; unset tools are looked up on PATH.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub mplayer_path: Option<PathBuf>,

    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversionConfig {
    /// Extension of the files to convert, matched case-insensitively
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Container written next to each source
    #[serde(default)]
    pub target_container: Container,

    /// Extension given to the intermediate elementary stream
    #[serde(default = "default_stream_extension")]
    pub stream_extension: String,

    /// Delete each source once its output is verified
    #[serde(default)]
    pub remove_original: bool,

    /// Replace outputs that already exist
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            target_container: Container::default(),
            stream_extension: default_stream_extension(),
            remove_original: false,
            overwrite: false,
        }
    }
}

fn default_source_extension() -> String {
    "avi".to_string()
}

fn default_stream_extension() -> String {
    "h264".to_string()
}
