//! Batch orchestration over a directory tree.

use crate::config::Config;
use crate::convert::{convert_file, SourceRemoval, Toolchain};
use crate::discover::find_sources;
use crate::report;
use avi2mp4_av::tools::{find_missing, tool_name, FFMPEG, MPLAYER};
use avi2mp4_av::{paths, Workspace};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Inputs for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub directory: PathBuf,
    pub config: Config,
    /// List planned conversions without running any tool.
    pub dry_run: bool,
}

/// Counters for a finished run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Sources deleted after a successful conversion.
    pub removed: usize,
    /// Successful conversions whose source could not be deleted.
    pub removals_failed: usize,
    pub elapsed: Duration,
}

/// Conditions that stop a run before any file is touched.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Directory '{}' does not exist.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("missing required tools: {}", .0.join(", "))]
    MissingTools(Vec<String>),

    #[error("could not create temporary directory: {0}")]
    Workspace(#[source] avi2mp4_av::Error),

    #[error(transparent)]
    Discovery(#[from] anyhow::Error),
}

/// Convert every matching file under the target directory.
///
/// Per-file failures are counted, not returned. Only a missing directory,
/// missing tools, or a workspace that cannot be created end the run early.
pub fn run(options: &BatchOptions) -> Result<BatchSummary, BatchError> {
    let directory = &options.directory;
    if !directory.is_dir() {
        return Err(BatchError::DirectoryNotFound(directory.clone()));
    }

    let conversion = &options.config.conversion;
    let source_label = conversion.source_extension.to_uppercase();
    let target_label = conversion.target_container.extension().to_uppercase();

    if options.dry_run {
        return plan(options, &source_label);
    }

    let tools = require_tools(&options.config)?;

    let workspace = Workspace::new().map_err(BatchError::Workspace)?;
    report::step(&format!(
        "Created temporary directory: {}",
        workspace.temp_dir().display()
    ));

    let sources = search(options, &source_label)?;
    let mut summary = BatchSummary {
        total: sources.len(),
        ..Default::default()
    };

    if sources.is_empty() {
        report::failure(&format!(
            "No {} files found in the specified directory.",
            source_label
        ));
        return Ok(summary);
    }

    report::success(&format!(
        "Found {} {} files to convert.",
        sources.len(),
        source_label
    ));
    println!();

    let start = Instant::now();

    for source in &sources {
        match convert_file(source, &workspace, &tools, conversion) {
            Ok(converted) => {
                summary.succeeded += 1;
                match converted.removal {
                    SourceRemoval::Kept => {}
                    SourceRemoval::Removed => summary.removed += 1,
                    SourceRemoval::Failed(_) => summary.removals_failed += 1,
                }
            }
            Err(e) => {
                summary.failed += 1;
                debug!("Conversion of {:?} failed: {}", source, e);
                report::failure(&format!("  {}", e));
                if let Some(cause) = std::error::Error::source(&e) {
                    report::failure(&format!("  Error: {}", cause));
                }
            }
        }
        println!();
    }

    summary.elapsed = start.elapsed();
    info!(
        "Batch finished: {} converted, {} failed in {:.2?}",
        summary.succeeded, summary.failed, summary.elapsed
    );

    report::summary(&summary, &source_label, &target_label);

    if let Err(e) = workspace.close() {
        warn!("Could not remove temporary directory: {}", e);
    }

    Ok(summary)
}

/// Fail with the names of any tool that cannot be found, after explaining how to get it.
fn require_tools(config: &Config) -> Result<Toolchain, BatchError> {
    let lookups = [
        (MPLAYER, tool_name(MPLAYER, config.tools.mplayer_path.as_deref())),
        (FFMPEG, tool_name(FFMPEG, config.tools.ffmpeg_path.as_deref())),
    ];

    let names: Vec<&str> = lookups.iter().map(|(_, lookup)| lookup.as_str()).collect();
    let missing = find_missing(&names);
    let missing: Vec<String> = lookups
        .iter()
        .filter(|(_, lookup)| missing.contains(lookup))
        .map(|(tool, _)| tool.to_string())
        .collect();

    if !missing.is_empty() {
        report::missing_tools(&missing);
        return Err(BatchError::MissingTools(missing));
    }

    Toolchain::resolve(&config.tools).map_err(|e| match e {
        avi2mp4_av::Error::ToolNotFound { tool } => BatchError::MissingTools(vec![tool]),
        other => BatchError::MissingTools(vec![other.to_string()]),
    })
}

fn search(options: &BatchOptions, source_label: &str) -> Result<Vec<PathBuf>, BatchError> {
    report::heading(&format!(
        "Searching for {} files in: {}",
        source_label,
        options.directory.display()
    ));

    find_sources(&options.directory, &options.config.conversion.source_extension)
        .map_err(BatchError::Discovery)
}

fn plan(options: &BatchOptions, source_label: &str) -> Result<BatchSummary, BatchError> {
    let sources = search(options, source_label)?;
    let extension = options.config.conversion.target_container.extension();

    for source in &sources {
        report::plain(&format!(
            "[DRY RUN] {} -> {}",
            source.display(),
            paths::output_path(source, extension).display()
        ));
    }
    report::plain(&format!(
        "[DRY RUN] Would convert {} {} files",
        sources.len(),
        source_label
    ));

    Ok(BatchSummary {
        total: sources.len(),
        ..Default::default()
    })
}
