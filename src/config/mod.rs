mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./avi2mp4.toml", "~/.config/avi2mp4/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    let conversion = &config.conversion;
    validate_extension("source_extension", &conversion.source_extension)?;
    validate_extension("stream_extension", &conversion.stream_extension)?;

    if conversion
        .source_extension
        .eq_ignore_ascii_case(conversion.target_container.extension())
    {
        anyhow::bail!(
            "source_extension and target_container are both '{}'",
            conversion.target_container
        );
    }

    for (name, path) in [
        ("mplayer", &config.tools.mplayer_path),
        ("ffmpeg", &config.tools.ffmpeg_path),
    ] {
        if let Some(path) = path {
            if !path.exists() {
                tracing::warn!("Configured {} path does not exist: {:?}", name, path);
            }
        }
    }

    Ok(())
}

fn validate_extension(field: &str, ext: &str) -> Result<()> {
    if ext.is_empty() {
        anyhow::bail!("{} cannot be empty", field);
    }
    if ext.contains('.') || ext.contains('/') || ext.contains('\\') {
        anyhow::bail!("{} must be a bare extension, got '{}'", field, ext);
    }
    Ok(())
}
