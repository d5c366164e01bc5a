//! AppleScript compilation into application bundles
//!
//! The source is written to a named temporary file that is removed when it
//! goes out of scope, so it never outlives the compile, successful or not.

use std::io::Write;
use std::path::Path;
use std::process::Command;

use crate::error::{Result, launcher as launcher_error};
use crate::path_utils::temp_dir_base;

/// Executable osacompile places in `Contents/MacOS` of the applications it
/// writes
pub const APPLET_EXECUTABLE: &str = "applet";

/// External program turning a script source into an application
#[derive(Debug, Clone)]
pub struct ScriptCompiler {
    program: String,
}

impl ScriptCompiler {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Compile `source` into the application at `output`.
    ///
    /// Runs `<program> -o <output> <source file>` and waits for it. A
    /// program that cannot be started or exits non-zero is a
    /// [`CompilerFailed`](crate::error::LauncherError::CompilerFailed) error.
    pub fn compile(&self, source: &str, output: &Path) -> Result<()> {
        let mut source_file = tempfile::Builder::new()
            .prefix("gl-launcher-")
            .suffix(".applescript")
            .tempfile_in(temp_dir_base())?;
        source_file.write_all(source.as_bytes())?;
        source_file.flush()?;

        let status = Command::new(&self.program)
            .arg("-o")
            .arg(output)
            .arg(source_file.path())
            .status()
            .map_err(|e| launcher_error::compiler_failed(&self.program, e.to_string()))?;

        if !status.success() {
            return Err(launcher_error::compiler_failed(
                &self.program,
                status.to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ScriptCompiler {
    fn default() -> Self {
        Self::new("osacompile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LauncherError;
    use tempfile::TempDir;

    #[test]
    fn test_default_program() {
        assert_eq!(ScriptCompiler::default().program, "osacompile");
    }

    #[test]
    fn test_missing_program_fails() {
        let temp = TempDir::new().unwrap();
        let compiler = ScriptCompiler::new("gl-launcher-no-such-compiler");
        let err = compiler
            .compile("on run\nend run\n", &temp.path().join("X.app"))
            .unwrap_err();
        assert!(matches!(err, LauncherError::CompilerFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_fails() {
        let temp = TempDir::new().unwrap();
        let err = ScriptCompiler::new("false")
            .compile("on run\nend run\n", &temp.path().join("X.app"))
            .unwrap_err();
        match err {
            LauncherError::CompilerFailed { program, .. } => assert_eq!(program, "false"),
            other => panic!("Expected CompilerFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_succeeds() {
        let temp = TempDir::new().unwrap();
        assert!(
            ScriptCompiler::new("true")
                .compile("on run\nend run\n", &temp.path().join("X.app"))
                .is_ok()
        );
    }

    /// Writes a fake compiler that records its arguments and exits with `code`
    #[cfg(unix)]
    fn fake_compiler(dir: &Path, code: i32) -> (std::path::PathBuf, std::path::PathBuf) {
        use std::os::unix::fs::PermissionsExt;

        let record = dir.join("args.txt");
        let program = dir.join("fake-osacompile");
        std::fs::write(
            &program,
            format!(
                "#!/bin/sh\nprintf '%s\\n' \"$1\" \"$2\" \"$3\" > '{}'\ncat \"$3\" >> '{}'\nexit {code}\n",
                record.display(),
                record.display()
            ),
        )
        .unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();
        (program, record)
    }

    #[cfg(unix)]
    #[test]
    fn test_source_passed_and_removed_on_success() {
        let temp = TempDir::new().unwrap();
        let (program, record) = fake_compiler(temp.path(), 0);
        let output = temp.path().join("Slack with OpenGL.app");

        ScriptCompiler::new(program.to_string_lossy())
            .compile("on run\nend run\n", &output)
            .unwrap();

        let recorded = std::fs::read_to_string(&record).unwrap();
        let lines: Vec<&str> = recorded.lines().collect();
        assert_eq!(lines[0], "-o");
        assert_eq!(lines[1], output.to_string_lossy());
        assert!(lines[2].ends_with(".applescript"));
        assert!(recorded.contains("on run"));
        assert!(!Path::new(lines[2]).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_source_removed_on_failure() {
        let temp = TempDir::new().unwrap();
        let (program, record) = fake_compiler(temp.path(), 3);

        let result = ScriptCompiler::new(program.to_string_lossy())
            .compile("on run\nend run\n", &temp.path().join("X.app"));
        assert!(matches!(result, Err(LauncherError::CompilerFailed { .. })));

        let recorded = std::fs::read_to_string(&record).unwrap();
        let source_path = recorded.lines().nth(2).unwrap();
        assert!(!Path::new(source_path).exists());
    }
}
