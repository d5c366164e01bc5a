use clap::Parser;
use std::path::PathBuf;

use crate::generator::OutputKind;

/// Arguments for the create command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create VS Code launchers on the Desktop:\n    gl-launcher create\n\n\
                  Wrap another application:\n    gl-launcher create --app /Applications/Slack.app\n\n\
                  Only a shell script, in a custom directory:\n    gl-launcher create --kind script --output ~/Launchers\n\n\
                  Compiled AppleScript application with a custom name:\n    gl-launcher create --kind compiled --name \"Code GL\"")]
pub struct CreateArgs {
    /// Application to launch (defaults to the configured target app)
    #[arg(long)]
    pub app: Option<PathBuf>,

    /// Launcher name (defaults to "<app name> with OpenGL")
    #[arg(long)]
    pub name: Option<String>,

    /// Directory the launchers are written to (defaults to ~/Desktop)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Kind of launcher to create; repeat for several (defaults to script and bundle)
    #[arg(long, value_enum)]
    pub kind: Vec<OutputKind>,

    /// Icon copied into application bundles
    #[arg(long)]
    pub icon: Option<PathBuf>,
}
