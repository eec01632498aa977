use avi2mp4_av::Container;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "avi2mp4")]
#[command(author, version, about = "Convert AVI videos to MP4 using mplayer and ffmpeg")]
pub struct Cli {
    /// Directory containing AVI files (default: current directory)
    pub directory: Option<PathBuf>,

    /// Delete each original file once its conversion succeeded
    #[arg(long, alias = "remove_original_file")]
    pub remove_original: bool,

    /// Overwrite output files that already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Container to write instead of the configured one (mp4, mkv, mov)
    #[arg(long)]
    pub container: Option<Container>,

    /// Show what would be converted without running any tool
    #[arg(long)]
    pub dry_run: bool,

    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that mplayer and ffmpeg are available
    CheckTools,
}
