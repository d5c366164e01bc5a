//! Common test utilities for gl-launcher integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Marker path placed inside fake Electron bundles
pub const ELECTRON_MARKER: &str = "Contents/Resources/app.asar";

/// A scratch area with an applications directory, an output directory and
/// a fake home directory
pub struct TestEnv {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Root of the scratch area
    pub path: PathBuf,
}

impl TestEnv {
    /// Create a new test environment
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("Applications")).expect("Failed to create Applications");
        std::fs::create_dir_all(path.join("home")).expect("Failed to create home");
        Self { temp, path }
    }

    pub fn apps_dir(&self) -> PathBuf {
        self.path.join("Applications")
    }

    pub fn home(&self) -> PathBuf {
        self.path.join("home")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path.join("out")
    }

    /// Create a fake `<name>.app` bundle, Electron-based when `electron` is set
    pub fn create_app(&self, name: &str, electron: bool) -> PathBuf {
        let app = self.apps_dir().join(format!("{name}.app"));
        std::fs::create_dir_all(app.join("Contents/MacOS")).expect("Failed to create bundle");
        if electron {
            let marker = app.join(ELECTRON_MARKER);
            std::fs::create_dir_all(marker.parent().expect("marker has a parent"))
                .expect("Failed to create Resources");
            std::fs::write(marker, b"").expect("Failed to write marker");
        }
        app
    }

    /// Write an icon file and return its path
    pub fn create_icon(&self) -> PathBuf {
        let icon = self.path.join("icons/code_gl.icns");
        std::fs::create_dir_all(icon.parent().expect("icon has a parent"))
            .expect("Failed to create icons directory");
        std::fs::write(&icon, b"icns").expect("Failed to write icon");
        icon
    }

    /// Write a config file and return its path
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.path.join("config.yaml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Read a file relative to the output directory
    pub fn read_output(&self, rel: &str) -> String {
        std::fs::read_to_string(self.output_dir().join(rel)).expect("Failed to read output")
    }

    pub fn output_exists(&self, rel: &str) -> bool {
        self.output_dir().join(rel).exists()
    }

    /// Command for the binary, isolated from the developer's environment
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gl-launcher").expect("binary is built");
        cmd.env_remove("GL_LAUNCHER_CONFIG");
        cmd.env("HOME", self.home());
        cmd.env("XDG_CONFIG_HOME", self.home().join(".config"));
        cmd.current_dir(&self.path);
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Mode bits of a file
#[cfg(unix)]
pub fn mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .expect("Failed to stat file")
        .permissions()
        .mode()
        & 0o777
}
