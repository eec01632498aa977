mod cli;

use avi2mp4::{batch, config, report};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "avi2mp4=trace,avi2mp4_av=trace".to_string()
        } else {
            "avi2mp4=warn,avi2mp4_av=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Legacy Windows consoles render escape codes literally.
    let plain_console = cfg!(windows) && std::env::var_os("WT_SESSION").is_none();
    if cli.no_color || plain_console {
        colored::control::set_override(false);
    }

    let config = config::load_config_or_default(cli.config.as_deref())?;

    if matches!(cli.command, Some(Commands::CheckTools)) {
        return check_tools(&config);
    }

    convert_directory(cli, config)
}

fn convert_directory(cli: Cli, mut config: config::Config) -> Result<()> {
    let directory = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    config.conversion.remove_original |= cli.remove_original;
    config.conversion.overwrite |= cli.overwrite;
    if let Some(container) = cli.container {
        config.conversion.target_container = container;
    }

    report::heading(&format!(
        "{} to {} Converter",
        config.conversion.source_extension.to_uppercase(),
        config.conversion.target_container.extension().to_uppercase()
    ));
    println!(
        "Running on: {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    println!();

    let options = batch::BatchOptions {
        directory,
        config,
        dry_run: cli.dry_run,
    };

    batch::run(&options)?;
    Ok(())
}

fn check_tools(config: &config::Config) -> Result<()> {
    println!("Checking external tools...\n");

    let tools = avi2mp4_av::check_tools(
        config.tools.mplayer_path.as_deref(),
        config.tools.ffmpeg_path.as_deref(),
    );
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install them before converting.");
    }

    Ok(())
}
