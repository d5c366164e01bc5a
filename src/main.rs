//! gl-launcher - OpenGL launchers for Electron applications
//!
//! Creates double-clickable macOS launchers (shell scripts and application
//! bundles) that open an installed application with `--use-angle=gl`, and
//! scans application directories for Electron apps to wrap in bulk.

use clap::Parser;
use console::Style;

mod bundle;
mod cli;
mod commands;
mod config;
mod detection;
mod error;
mod generator;
mod path_utils;
mod progress;
mod selection;
mod ui;

use cli::{Cli, Commands};
use error::{LauncherError, Result};

/// Operating system launchers can be created on
const SUPPORTED_OS: &str = "macos";

/// Check that launchers can be created on `os`
fn check_platform(os: &str) -> Result<()> {
    if os != SUPPORTED_OS {
        return Err(LauncherError::UnsupportedPlatform {
            platform: os.to_string(),
        });
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Completions and version work anywhere
    let needs_macos = matches!(cli.command, Commands::Create(_) | Commands::Scan(_));

    if needs_macos {
        if let Err(e) = check_platform(std::env::consts::OS) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Create(args) => load_config(cli.config.as_deref(), cli.verbose)
            .and_then(|c| commands::create::run(&c, args, cli.verbose)),
        Commands::Scan(args) => load_config(cli.config.as_deref(), cli.verbose)
            .and_then(|c| commands::scan::run(&c, args, cli.verbose)),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("{} {}", Style::new().red().bold().apply_to("Error:"), e);
        std::process::exit(1);
    }
}

fn load_config(explicit: Option<&std::path::Path>, verbose: bool) -> Result<config::Config> {
    let loaded = config::load(explicit)?;

    if verbose {
        match &loaded.source {
            Some(path) => println!("Using configuration from {}", path.display()),
            None => println!("Using built-in configuration"),
        }
    }

    Ok(loaded.config)
}
