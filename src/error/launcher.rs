//! Launcher generation and selection errors

use super::LauncherError;

/// Creates a compiler failed error
pub fn compiler_failed(program: impl Into<String>, reason: impl Into<String>) -> LauncherError {
    LauncherError::CompilerFailed {
        program: program.into(),
        reason: reason.into(),
    }
}

/// Creates an icon not found error
pub fn icon_not_found(path: impl Into<String>) -> LauncherError {
    LauncherError::IconNotFound { path: path.into() }
}

/// Creates an output conflict error
pub fn output_conflict(path: impl Into<String>, expected: impl Into<String>) -> LauncherError {
    LauncherError::OutputConflict {
        path: path.into(),
        expected: expected.into(),
    }
}

/// Creates an invalid selection error
pub fn invalid_selection(input: impl Into<String>) -> LauncherError {
    LauncherError::InvalidSelection {
        input: input.into(),
    }
}
