//! Shared helpers for command implementations

use std::path::{Path, PathBuf};

use crate::error::{LauncherError, Result};
use crate::generator::{GeneratedArtifact, Generator, LauncherSpec, OutputKind};
use crate::path_utils::expand_home;
use crate::progress::BatchProgress;
use crate::ui::display;

/// Flag value if given, configured value otherwise, with `~` expanded
pub fn resolve_path(flag: Option<PathBuf>, configured: &Path) -> PathBuf {
    expand_home(flag.as_deref().unwrap_or(configured))
}

/// Requested kinds, or `defaults` when none were given
pub fn resolve_kinds(requested: Vec<OutputKind>, defaults: &[OutputKind]) -> Vec<OutputKind> {
    if requested.is_empty() {
        defaults.to_vec()
    } else {
        requested
    }
}

/// Generate every launcher in `specs`, one at a time.
///
/// Failures that only concern one launcher are reported and the batch moves
/// on. Any other error ends the batch immediately. When every launcher
/// failed the batch itself is an error.
pub fn generate_batch(
    generator: &Generator,
    specs: &[LauncherSpec],
) -> Result<Vec<GeneratedArtifact>> {
    let progress = BatchProgress::new(specs.len() as u64);
    let mut artifacts = Vec::with_capacity(specs.len());
    let mut failed = 0;

    for spec in specs {
        progress.start(&spec.name);
        match generator.generate(spec) {
            Ok(artifact) => {
                progress.println(display::format_artifact(&artifact));
                artifacts.push(artifact);
            }
            Err(e) if e.is_per_launcher() => {
                progress.eprintln(display::format_failure(&spec.name, &e));
                failed += 1;
            }
            Err(e) => {
                progress.finish();
                return Err(e);
            }
        }
        progress.inc();
    }
    progress.finish();

    if failed > 0 && artifacts.is_empty() {
        return Err(LauncherError::BatchFailed { failed });
    }

    Ok(artifacts)
}
