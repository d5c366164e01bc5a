//! Launcher generation
//!
//! A [`LauncherSpec`] describes one launcher; [`Generator::generate`]
//! dispatches on its [`OutputKind`] to one strategy per kind:
//! - `Script`: a `.command` shell script
//! - `CompiledScript`: an AppleScript compiled into `.app` by `osacompile`
//! - `StructuredBundle`: a hand-built `.app` with Info.plist, stub and icon
//!
//! Home shorthand in the target and output paths is expanded before any
//! filesystem access. Nothing is rolled back on failure.

pub mod compiler;
pub mod templates;

use clap::ValueEnum;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_ARGUMENT};
use crate::error::{Result, fs as fs_error, launcher as launcher_error};
use crate::path_utils::{
    check_bundle_owner, check_output_shape, ensure_dir, expand_home, set_executable, write_file,
};

pub use compiler::{APPLET_EXECUTABLE, ScriptCompiler};

/// Kind of launcher artifact to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputKind {
    /// Executable `.command` shell script
    Script,
    /// AppleScript application compiled with osacompile
    #[value(name = "compiled")]
    CompiledScript,
    /// Application bundle with Info.plist, stub script and icon
    #[value(name = "bundle")]
    StructuredBundle,
}

impl OutputKind {
    /// File name extension of the produced artifact
    pub fn extension(self) -> &'static str {
        match self {
            OutputKind::Script => "command",
            OutputKind::CompiledScript | OutputKind::StructuredBundle => "app",
        }
    }

    /// Path of the artifact for `name` inside `output_dir`
    pub fn artifact_path(self, output_dir: &Path, name: &str) -> PathBuf {
        output_dir.join(format!("{name}.{}", self.extension()))
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutputKind::Script => "shell script",
            OutputKind::CompiledScript => "AppleScript application",
            OutputKind::StructuredBundle => "application bundle",
        };
        write!(f, "{label}")
    }
}

/// Description of a single launcher to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSpec {
    /// Application the launcher opens
    pub target: PathBuf,
    /// Extra argument passed after `--args`
    pub argument: String,
    /// Launcher display name, also its file name
    pub name: String,
    /// Directory the launcher is written into
    pub output_dir: PathBuf,
    pub kind: OutputKind,
}

impl LauncherSpec {
    pub fn new(
        target: impl Into<PathBuf>,
        name: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        kind: OutputKind,
    ) -> Self {
        Self {
            target: target.into(),
            argument: DEFAULT_ARGUMENT.to_string(),
            name: name.into(),
            output_dir: output_dir.into(),
            kind,
        }
    }

    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.argument = argument.into();
        self
    }
}

/// A launcher written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// The `.command` file or `.app` directory
    pub path: PathBuf,
    pub kind: OutputKind,
    /// Info.plist content, for structured bundles
    pub descriptor: Option<String>,
    /// File whose executable bit was set by the generator
    pub executable: Option<PathBuf>,
}

/// Writes launchers described by [`LauncherSpec`]s
#[derive(Debug, Clone)]
pub struct Generator {
    compiler: ScriptCompiler,
    icon: PathBuf,
    identifier_prefix: String,
}

impl Generator {
    pub fn new(
        compiler: ScriptCompiler,
        icon: impl Into<PathBuf>,
        identifier_prefix: impl Into<String>,
    ) -> Self {
        Self {
            compiler,
            icon: icon.into(),
            identifier_prefix: identifier_prefix.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ScriptCompiler::new(&config.compiler),
            &config.icon,
            &config.identifier_prefix,
        )
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<PathBuf>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Write the launcher described by `spec`
    pub fn generate(&self, spec: &LauncherSpec) -> Result<GeneratedArtifact> {
        let target = expand_home(&spec.target);
        let output_dir = expand_home(&spec.output_dir);
        ensure_dir(&output_dir)?;

        let path = spec.kind.artifact_path(&output_dir, &spec.name);
        match spec.kind {
            OutputKind::Script => self.write_script(&path, &target, &spec.argument),
            OutputKind::CompiledScript => self.compile_app(&path, &target, &spec.argument),
            OutputKind::StructuredBundle => {
                self.build_bundle(&path, &spec.name, &target, &spec.argument)
            }
        }
    }

    fn write_script(
        &self,
        path: &Path,
        target: &Path,
        argument: &str,
    ) -> Result<GeneratedArtifact> {
        check_output_shape(path, false)?;
        write_file(path, &templates::launch_script(target, argument))?;
        set_executable(path)?;

        Ok(GeneratedArtifact {
            path: path.to_path_buf(),
            kind: OutputKind::Script,
            descriptor: None,
            executable: Some(path.to_path_buf()),
        })
    }

    fn compile_app(
        &self,
        path: &Path,
        target: &Path,
        argument: &str,
    ) -> Result<GeneratedArtifact> {
        check_output_shape(path, true)?;
        check_bundle_owner(
            path,
            APPLET_EXECUTABLE,
            &format!("an {}", OutputKind::CompiledScript),
        )?;
        self.compiler
            .compile(&templates::applescript(target, argument), path)?;

        Ok(GeneratedArtifact {
            path: path.to_path_buf(),
            kind: OutputKind::CompiledScript,
            descriptor: None,
            executable: None,
        })
    }

    fn build_bundle(
        &self,
        path: &Path,
        name: &str,
        target: &Path,
        argument: &str,
    ) -> Result<GeneratedArtifact> {
        check_output_shape(path, true)?;
        check_bundle_owner(path, name, &format!("an {}", OutputKind::StructuredBundle))?;

        let contents_dir = path.join("Contents");
        let macos_dir = contents_dir.join("MacOS");
        let resources_dir = contents_dir.join("Resources");
        ensure_dir(&macos_dir)?;
        ensure_dir(&resources_dir)?;

        let icon = expand_home(&self.icon);
        let icon_file = icon
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let identifier = templates::bundle_identifier(&self.identifier_prefix, name);
        let descriptor = templates::info_plist(name, &icon_file, &identifier);
        write_file(&contents_dir.join("Info.plist"), &descriptor)?;

        let executable = macos_dir.join(name);
        write_file(&executable, &templates::launch_script(target, argument))?;
        set_executable(&executable)?;

        if !icon.is_file() {
            return Err(launcher_error::icon_not_found(icon.display().to_string()));
        }
        let icon_dest = resources_dir.join(&icon_file);
        fs::copy(&icon, &icon_dest)
            .map_err(|e| fs_error::write_failed(icon_dest.display().to_string(), e.to_string()))?;

        Ok(GeneratedArtifact {
            path: path.to_path_buf(),
            kind: OutputKind::StructuredBundle,
            descriptor: Some(descriptor),
            executable: Some(executable),
        })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
