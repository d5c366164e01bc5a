//! File system errors

use super::LauncherError;

/// Creates a write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> LauncherError {
    LauncherError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
