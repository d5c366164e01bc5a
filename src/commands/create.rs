//! Create command implementation
//!
//! Fixed-target mode: writes launchers for one application, by default the
//! configured target app, without scanning.

use console::Style;

use crate::bundle::resolve_name;
use crate::cli::CreateArgs;
use crate::commands::helpers::{generate_batch, resolve_kinds, resolve_path};
use crate::config::Config;
use crate::error::Result;
use crate::generator::{Generator, LauncherSpec, OutputKind};
use crate::ui::display;

/// Kinds written when none are requested
const DEFAULT_KINDS: &[OutputKind] = &[OutputKind::Script, OutputKind::StructuredBundle];

/// Run create command
pub fn run(config: &Config, args: CreateArgs, verbose: bool) -> Result<()> {
    let specs = build_specs(config, &args);
    let Some(first) = specs.first() else {
        return Ok(());
    };

    if first.target.exists() {
        println!("Found application at {}", first.target.display());
    } else {
        display::warn_missing_target(&first.target);
    }

    if verbose {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Launcher name:"),
            first.name
        );
        println!(
            "{} {}",
            Style::new().bold().apply_to("Output directory:"),
            first.output_dir.display()
        );
    }

    let mut generator = Generator::from_config(config);
    if let Some(icon) = args.icon {
        generator = generator.with_icon(icon);
    }

    let artifacts = generate_batch(&generator, &specs)?;
    if verbose {
        for artifact in &artifacts {
            display::display_artifact_details(artifact);
        }
    }

    display::display_created(&artifacts);

    Ok(())
}

/// One spec per requested kind, all sharing target, name and output
fn build_specs(config: &Config, args: &CreateArgs) -> Vec<LauncherSpec> {
    let target = resolve_path(args.app.clone(), &config.target_app);
    let output_dir = resolve_path(args.output.clone(), &config.output_dir);
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| config.launcher_name(&resolve_name(&target)));

    resolve_kinds(args.kind.clone(), DEFAULT_KINDS)
        .into_iter()
        .map(|kind| {
            LauncherSpec::new(&target, &name, &output_dir, kind)
                .with_argument(&config.argument)
        })
        .collect()
}
