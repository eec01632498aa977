//! Colored console output for a conversion run.
//!
//! Everything here goes to stdout. Diagnostics go through `tracing` instead.

use crate::batch::BatchSummary;
use colored::Colorize;

pub fn heading(message: &str) {
    println!("{}", message.yellow().bold());
}

pub fn step(message: &str) {
    println!("{}", message.blue());
}

pub fn success(message: &str) {
    println!("{}", message.green());
}

pub fn failure(message: &str) {
    println!("{}", message.red());
}

pub fn plain(message: &str) {
    println!("{}", message);
}

/// Explain which tools are missing and how to install them.
pub fn missing_tools(missing: &[String]) {
    let names = missing.join(" ");

    failure("Error: The following required programs are not installed:");
    for tool in missing {
        println!("  - {}", tool);
    }

    heading("Please install them using your system's package manager:");
    step("For Windows (using Chocolatey):");
    println!("  choco install {}", names);
    step("For macOS (using Homebrew):");
    println!("  brew install {}", names);
    step("For Ubuntu/Debian:");
    println!("  sudo apt-get install {}", names);

    println!();
    println!("You can download these programs from:");
    println!("  - MPlayer: http://www.mplayerhq.hu/design7/dload.html");
    println!("  - FFmpeg: https://ffmpeg.org/download.html");
}

/// Print the end-of-run summary.
pub fn summary(summary: &BatchSummary, source_label: &str, target_label: &str) {
    heading("Conversion Summary:");
    println!("  Total {} files found: {}", source_label, summary.total);
    success(&format!("  Successfully converted: {}", summary.succeeded));

    if summary.failed > 0 {
        failure(&format!("  Failed conversions: {}", summary.failed));
    }
    if summary.removed > 0 {
        println!("  Originals removed: {}", summary.removed);
    }
    if summary.removals_failed > 0 {
        failure(&format!("  Originals not removed: {}", summary.removals_failed));
    }

    println!("  Total time: {:.2} seconds", summary.elapsed.as_secs_f64());

    if summary.succeeded > 0 {
        success(&format!(
            "Conversion complete! Your {} files are in the same location as the original {} files.",
            target_label, source_label
        ));
    } else {
        failure("No files were successfully converted.");
    }
}
