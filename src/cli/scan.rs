use clap::Parser;
use std::path::PathBuf;

use crate::generator::OutputKind;

/// Arguments for the scan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List Electron applications:\n    gl-launcher scan --list-only\n\n\
                  Scan another directory:\n    gl-launcher scan --dir ~/Applications\n\n\
                  Create shell scripts instead of applications:\n    gl-launcher scan --kind script\n\n\
                  Select non-interactively:\n    echo 1,3 | gl-launcher scan")]
pub struct ScanArgs {
    /// Directory to scan (defaults to /Applications)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Only list detected applications
    #[arg(long)]
    pub list_only: bool,

    /// Directory the launchers are written to (defaults to ~/Desktop)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Kind of launcher to create; repeat for several (defaults to compiled)
    #[arg(long, value_enum)]
    pub kind: Vec<OutputKind>,

    /// Icon copied into application bundles
    #[arg(long)]
    pub icon: Option<PathBuf>,
}
