//! Display functions for scan results and generated launchers

use console::Style;
use std::path::Path;

use crate::bundle::ApplicationBundle;
use crate::generator::{GeneratedArtifact, OutputKind};

/// Numbered line for one scan result, 1-based
pub fn format_bundle_line(position: usize, bundle: &ApplicationBundle) -> String {
    format!(
        "{}. {} ({})",
        position,
        Style::new().bold().yellow().apply_to(&bundle.name),
        bundle.path.display()
    )
}

/// Print the numbered list of detected applications
pub fn display_bundle_list(bundles: &[ApplicationBundle]) {
    println!(
        "{}",
        Style::new()
            .bold()
            .apply_to(format!("Found {} Electron applications:", bundles.len()))
    );
    for (i, bundle) in bundles.iter().enumerate() {
        println!("{}", format_bundle_line(i + 1, bundle));
    }
}

/// Success message for a written launcher
pub fn format_artifact(artifact: &GeneratedArtifact) -> String {
    let file_name = artifact
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let location = artifact
        .path
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    format!(
        "{} {} '{}' created at '{}'",
        Style::new().green().bold().apply_to("✓"),
        artifact.kind,
        file_name,
        location
    )
}

/// Print the executable and descriptor of a launcher (verbose mode)
pub fn display_artifact_details(artifact: &GeneratedArtifact) {
    if let Some(ref executable) = artifact.executable {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Executable:"),
            executable.display()
        );
    }
    if let Some(ref descriptor) = artifact.descriptor {
        println!("    {}", Style::new().bold().apply_to("Info.plist:"));
        for line in descriptor.lines() {
            println!("      {line}");
        }
    }
}

/// Print where launchers were written and how to use them
pub fn display_created(artifacts: &[GeneratedArtifact]) {
    if artifacts.is_empty() {
        return;
    }

    println!();
    println!(
        "{}",
        Style::new()
            .bold()
            .apply_to(format!("Created {} launcher(s):", artifacts.len()))
    );
    for (i, artifact) in artifacts.iter().enumerate() {
        println!("{}. {}: {}", i + 1, kind_label(artifact.kind), artifact.path.display());
    }
    println!();
    println!("Double-click a launcher to start the application with OpenGL rendering.");
}

fn kind_label(kind: OutputKind) -> &'static str {
    match kind {
        OutputKind::Script => "Shell script",
        OutputKind::CompiledScript => "AppleScript application",
        OutputKind::StructuredBundle => "Application bundle",
    }
}

/// Warning printed to stderr
pub fn warn(message: impl AsRef<str>) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("Warning:"),
        message.as_ref()
    );
}

/// Warn that the wrapped application is missing; generation goes ahead
pub fn warn_missing_target(target: &Path) {
    warn(format!("application not found at {}", target.display()));
    warn("The launcher will still be created, but it will not work until the application is installed.");
}

/// Error line for a launcher that failed inside a batch
pub fn format_failure(name: &str, error: &dyn std::fmt::Display) -> String {
    format!(
        "{} {}: {}",
        Style::new().red().bold().apply_to("✗"),
        name,
        error
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).into_owned()
    }

    #[test]
    fn test_format_bundle_line() {
        let bundle = ApplicationBundle::new("/Applications/Slack.app", true);
        assert_eq!(
            plain(&format_bundle_line(1, &bundle)),
            "1. Slack (/Applications/Slack.app)"
        );
    }

    #[test]
    fn test_format_artifact() {
        let artifact = GeneratedArtifact {
            path: PathBuf::from("/Users/me/Desktop/X.command"),
            kind: OutputKind::Script,
            descriptor: None,
            executable: None,
        };
        assert_eq!(
            plain(&format_artifact(&artifact)),
            "✓ shell script 'X.command' created at '/Users/me/Desktop'"
        );
    }

    #[test]
    fn test_format_failure() {
        let err = crate::error::launcher::icon_not_found("icons/code_gl.icns");
        assert_eq!(
            plain(&format_failure("Slack with OpenGL", &err)),
            "✗ Slack with OpenGL: Icon file not found: icons/code_gl.icns"
        );
    }
}
