//! Path utilities for gl-launcher
//!
//! Home shorthand expansion, output directory creation and permission
//! handling shared by the generator and the commands.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error, launcher as launcher_error};

/// Permission bits for generated executables (rwxr-xr-x)
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Expand a leading `~` to the current user's home directory.
///
/// Only `~` on its own and `~/...` are expanded; `~user` forms and paths
/// without the shorthand are returned unchanged. If the home directory
/// cannot be determined the path is returned as-is.
///
/// # Examples
///
/// ```ignore
/// let expanded = expand_home(Path::new("~/Desktop"));
/// assert!(expanded.ends_with("Desktop"));
/// ```
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Create a directory and all of its parents if missing
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path)
        .map_err(|e| fs_error::write_failed(path.display().to_string(), e.to_string()))
}

/// Write a text file, mapping failures to a write error carrying the path
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| fs_error::write_failed(path.display().to_string(), e.to_string()))
}

/// Mark a file runnable by the owner and readable/executable by others
#[cfg(unix)]
pub fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(EXECUTABLE_MODE))
        .map_err(|e| fs_error::write_failed(path.display().to_string(), e.to_string()))
}

#[cfg(not(unix))]
pub fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Refuse to write over an existing entry of the wrong type.
///
/// `expect_dir` is true when the caller is about to create a bundle
/// directory and false when it is about to write a plain file.
pub fn check_output_shape(path: &Path, expect_dir: bool) -> Result<()> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };

    match (expect_dir, metadata.is_dir()) {
        (true, false) => Err(launcher_error::output_conflict(
            path.display().to_string(),
            "a directory",
        )),
        (false, true) => Err(launcher_error::output_conflict(
            path.display().to_string(),
            "a file",
        )),
        _ => Ok(()),
    }
}

/// Refuse to write into an existing bundle made by something else.
///
/// A bundle at `path` belongs to the caller when `Contents/MacOS` holds
/// nothing but `executable`. A missing bundle, or one without that
/// directory yet, is free to use. `expected` names the bundle kind in the
/// error.
pub fn check_bundle_owner(path: &Path, executable: &str, expected: &str) -> Result<()> {
    let Ok(entries) = fs::read_dir(path.join("Contents").join("MacOS")) else {
        return Ok(());
    };

    let foreign = entries
        .filter_map(std::result::Result::ok)
        .any(|entry| entry.file_name().to_string_lossy() != executable);

    if foreign {
        return Err(launcher_error::output_conflict(
            path.display().to_string(),
            expected,
        ));
    }

    Ok(())
}

/// Returns a directory suitable for intermediate files.
///
/// Never returns a relative path, so intermediate files never land in the
/// current working directory when TMPDIR is set to something like `tmp`.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        PathBuf::from("/tmp")
    }
}
