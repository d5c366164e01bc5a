//! Application bundle model and name resolution

use std::path::{Path, PathBuf};

/// File name suffix of macOS application bundles
pub const BUNDLE_EXTENSION: &str = ".app";

/// An application bundle found on disk or named by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationBundle {
    /// Root directory of the bundle (`.../Name.app`)
    pub path: PathBuf,
    /// Display name derived from the path
    pub name: String,
    /// Whether the bundle was detected as an Electron application
    pub is_electron: bool,
}

impl ApplicationBundle {
    pub fn new(path: impl Into<PathBuf>, is_electron: bool) -> Self {
        let path = path.into();
        let name = resolve_name(&path);
        Self {
            path,
            name,
            is_electron,
        }
    }
}

/// Derive a display name from a bundle path.
///
/// Strips a trailing `.app` from the final component and returns the rest
/// verbatim, spaces included. A component without the suffix comes back
/// unchanged.
pub fn resolve_name(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match base.strip_suffix(BUNDLE_EXTENSION) {
        Some(stem) => stem.to_string(),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_name_strips_extension() {
        assert_eq!(resolve_name(Path::new("Foo Bar.app")), "Foo Bar");
    }

    #[test]
    fn test_resolve_name_full_path() {
        assert_eq!(
            resolve_name(Path::new("/Applications/Visual Studio Code.app")),
            "Visual Studio Code"
        );
    }

    #[test]
    fn test_resolve_name_without_extension() {
        assert_eq!(resolve_name(Path::new("/usr/local/bin/slack")), "slack");
        assert_eq!(resolve_name(Path::new("Notes.application")), "Notes.application");
    }

    #[test]
    fn test_resolve_name_trailing_slash() {
        assert_eq!(resolve_name(Path::new("/Applications/Slack.app/")), "Slack");
    }

    #[test]
    fn test_application_bundle_new() {
        let bundle = ApplicationBundle::new("/Applications/Discord.app", true);
        assert_eq!(bundle.name, "Discord");
        assert_eq!(bundle.path, PathBuf::from("/Applications/Discord.app"));
        assert!(bundle.is_electron);
    }
}
