//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - create: Create command arguments
//! - scan: Scan command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod create;
pub mod scan;

pub use completions::CompletionsArgs;
pub use create::CreateArgs;
pub use scan::ScanArgs;

/// gl-launcher - OpenGL launchers for Electron apps
///
/// Create double-clickable launchers that start applications with `--use-angle=gl`.
#[derive(Parser, Debug)]
#[command(
    name = "gl-launcher",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Create launchers that start Electron apps with OpenGL rendering",
    long_about = "gl-launcher creates double-clickable shell scripts and application bundles \
                  that open an installed application with --use-angle=gl, and can scan a \
                  directory for Electron applications to create launchers in bulk.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  gl-launcher create                               \x1b[90m# VS Code launchers on the Desktop\x1b[0m\n   \
                  gl-launcher create --app /Applications/Slack.app \x1b[90m# Launchers for Slack\x1b[0m\n   \
                  gl-launcher scan --list-only                     \x1b[90m# List Electron apps\x1b[0m\n   \
                  gl-launcher scan --dir ~/Applications            \x1b[90m# Pick apps to wrap\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/gl-launcher/config.yaml)
    #[arg(long, short = 'c', global = true, env = "GL_LAUNCHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create launchers for one application
    Create(CreateArgs),

    /// Find Electron applications and create launchers for them
    Scan(ScanArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
