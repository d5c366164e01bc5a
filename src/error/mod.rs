//! Error types and handling for gl-launcher
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration file errors
//! - [`fs`]: File system errors
//! - [`launcher`]: Launcher generation and selection errors

pub mod config;
pub mod fs;
pub mod launcher;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gl-launcher operations
#[derive(Error, Diagnostic, Debug)]
pub enum LauncherError {
    // Environment errors
    #[error("This tool only works on macOS (running on {platform})")]
    #[diagnostic(
        code(gl_launcher::env::unsupported_platform),
        help("Launchers rely on `open` and `osacompile`, which only exist on macOS")
    )]
    UnsupportedPlatform { platform: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(gl_launcher::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(gl_launcher::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(gl_launcher::config::parse_failed),
        help(
            "Known keys: target_app, argument, name_suffix, output_dir, applications_dir, icon, compiler, identifier_prefix, markers"
        )
    )]
    ConfigParseFailed { path: String, reason: String },

    // Generation errors
    #[error("Script compiler '{program}' failed: {reason}")]
    #[diagnostic(
        code(gl_launcher::generate::compiler_failed),
        help("Check that `osacompile` is available, or pick another kind with --kind")
    )]
    CompilerFailed { program: String, reason: String },

    #[error("Icon file not found: {path}")]
    #[diagnostic(
        code(gl_launcher::generate::icon_not_found),
        help("Pass --icon with the path to an .icns file, or set `icon` in the config file")
    )]
    IconNotFound { path: String },

    #[error("Output path {path} already exists and is not {expected}")]
    #[diagnostic(
        code(gl_launcher::generate::output_conflict),
        help("Remove the existing entry or choose another --name/--output")
    )]
    OutputConflict { path: String, expected: String },

    #[error("All {failed} launcher(s) failed to generate")]
    #[diagnostic(code(gl_launcher::generate::batch_failed))]
    BatchFailed { failed: usize },

    // Selection errors
    #[error("Invalid selection: '{input}'")]
    #[diagnostic(
        code(gl_launcher::select::invalid),
        help("Enter comma-separated numbers (e.g. 1,3), 'all', or 'q'")
    )]
    InvalidSelection { input: String },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(gl_launcher::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(gl_launcher::fs::io_error))]
    IoError { message: String },
}

impl LauncherError {
    /// Whether the error only affects the launcher being generated
    ///
    /// Batch generation reports these and moves on to the next item; every
    /// other error ends the run.
    pub fn is_per_launcher(&self) -> bool {
        matches!(
            self,
            LauncherError::CompilerFailed { .. }
                | LauncherError::IconNotFound { .. }
                | LauncherError::OutputConflict { .. }
        )
    }
}

impl From<std::io::Error> for LauncherError {
    fn from(err: std::io::Error) -> Self {
        LauncherError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for LauncherError {
    fn from(err: serde_yaml::Error) -> Self {
        LauncherError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for LauncherError {
    fn from(err: inquire::InquireError) -> Self {
        LauncherError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = LauncherError::IconNotFound {
            path: "icons/code_gl.icns".to_string(),
        };
        assert_eq!(err.to_string(), "Icon file not found: icons/code_gl.icns");
    }

    #[test]
    fn test_error_code() {
        let err = LauncherError::UnsupportedPlatform {
            platform: "linux".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("gl_launcher::env::unsupported_platform".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LauncherError = io_err.into();
        assert!(matches!(err, LauncherError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: content: [unclosed");
        let err: LauncherError = parse_result.unwrap_err().into();
        assert!(matches!(err, LauncherError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_per_launcher_errors() {
        assert!(launcher::compiler_failed("osacompile", "exit status: 1").is_per_launcher());
        assert!(launcher::icon_not_found("missing.icns").is_per_launcher());
        assert!(launcher::output_conflict("/tmp/X.command", "a file").is_per_launcher());
        assert!(
            !LauncherError::IoError {
                message: "disk full".to_string()
            }
            .is_per_launcher()
        );
        assert!(!fs::write_failed("/tmp/X.command", "permission denied").is_per_launcher());
    }

    test_error_contains!(
        test_unsupported_platform_error,
        LauncherError::UnsupportedPlatform {
            platform: "linux".to_string()
        },
        "only works on macOS",
        "linux"
    );

    test_error_contains!(
        test_compiler_failed_error,
        launcher::compiler_failed("osacompile", "exit status: 1"),
        "osacompile",
        "exit status: 1"
    );

    test_error_contains!(
        test_output_conflict_error,
        launcher::output_conflict("/tmp/X.app", "a directory"),
        "/tmp/X.app",
        "not a directory"
    );

    test_error_contains!(
        test_invalid_selection_error,
        launcher::invalid_selection(""),
        "Invalid selection"
    );

    test_error_contains!(
        test_batch_failed_error,
        LauncherError::BatchFailed { failed: 2 },
        "All 2 launcher(s) failed"
    );

    test_error_contains!(
        test_config_parse_failed_error,
        config::parse_failed("/tmp/config.yaml", "unknown field `colour`"),
        "Failed to parse configuration file",
        "colour"
    );
}
