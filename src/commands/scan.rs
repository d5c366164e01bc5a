//! Scan command implementation
//!
//! Finds Electron applications in a directory, asks the operator which ones
//! to wrap, and writes a launcher for each selected application.

use console::Style;

use crate::cli::ScanArgs;
use crate::commands::helpers::{generate_batch, resolve_kinds, resolve_path};
use crate::config::Config;
use crate::detection::{self, BundleProber};
use crate::error::{LauncherError, Result};
use crate::generator::{Generator, LauncherSpec, OutputKind};
use crate::selection;
use crate::ui::display;

/// Kinds written when none are requested
const DEFAULT_KINDS: &[OutputKind] = &[OutputKind::CompiledScript];

/// Run scan command
pub fn run(config: &Config, args: ScanArgs, verbose: bool) -> Result<()> {
    let scan_dir = resolve_path(args.dir.clone(), &config.applications_dir);
    let prober = BundleProber::new(config.marker_set());

    if verbose {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Markers:"),
            prober.markers().names().join(", ")
        );
    }

    let apps = detection::scan(&scan_dir, &prober);
    if apps.is_empty() {
        println!("No Electron applications found in {}", scan_dir.display());
        return Ok(());
    }

    display::display_bundle_list(&apps);

    if args.list_only {
        return Ok(());
    }

    let selected = match selection::select_from(&apps) {
        Ok(selected) => selected,
        Err(LauncherError::InvalidSelection { .. }) => {
            println!("Invalid selection");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if selected.is_empty() {
        println!("No applications selected.");
        return Ok(());
    }

    let output_dir = resolve_path(args.output, &config.output_dir);
    let kinds = resolve_kinds(args.kind, DEFAULT_KINDS);
    let specs: Vec<LauncherSpec> = selected
        .iter()
        .flat_map(|app| {
            let name = config.launcher_name(&app.name);
            let output_dir = &output_dir;
            kinds.iter().map(move |&kind| {
                LauncherSpec::new(&app.path, &name, output_dir, kind)
                    .with_argument(&config.argument)
            })
        })
        .collect();

    let mut generator = Generator::from_config(config);
    if let Some(icon) = args.icon {
        generator = generator.with_icon(icon);
    }

    let artifacts = generate_batch(&generator, &specs)?;
    display::display_created(&artifacts);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(dir: &std::path::Path, list_only: bool) -> ScanArgs {
        ScanArgs {
            dir: Some(dir.to_path_buf()),
            list_only,
            output: None,
            kind: vec![],
            icon: None,
        }
    }

    #[test]
    fn test_run_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert!(run(&Config::default(), args(temp.path(), false), false).is_ok());
    }

    #[test]
    fn test_run_missing_directory() {
        let temp = TempDir::new().unwrap();
        assert!(run(&Config::default(), args(&temp.path().join("nope"), false), true).is_ok());
    }

    #[test]
    fn test_run_list_only() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("Slack.app/Contents/Resources")).unwrap();
        std::fs::write(temp.path().join("Slack.app/Contents/Resources/app.asar"), b"").unwrap();

        assert!(run(&Config::default(), args(temp.path(), true), false).is_ok());
    }
}
