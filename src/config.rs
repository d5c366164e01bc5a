//! Configuration for gl-launcher
//!
//! Settings come from three layers, later ones winning:
//! 1. Built-in defaults (see [`Config::default`])
//! 2. An optional YAML file: `--config`/`GL_LAUNCHER_CONFIG`, or
//!    `<config dir>/gl-launcher/config.yaml` when present
//! 3. Command line flags, applied by the commands themselves
//!
//! Example file:
//!
//! ```yaml
//! target_app: /Applications/Cursor.app
//! output_dir: ~/Launchers
//! markers:
//!   - Electron Framework.framework
//!   - app.asar
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::detection::{ELECTRON_MARKERS, MarkerSet};
use crate::error::{Result, config as config_error};

/// Directory name under the user's config directory
const CONFIG_DIR: &str = "gl-launcher";

/// Config file name
const CONFIG_FILE: &str = "config.yaml";

/// Application wrapped by `create` when no --app is given
pub const DEFAULT_TARGET_APP: &str = "/Applications/Visual Studio Code.app";

/// Flag that makes Chromium-based apps render through OpenGL
pub const DEFAULT_ARGUMENT: &str = "--use-angle=gl";

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Application wrapped by the `create` command
    pub target_app: PathBuf,
    /// Argument appended after `--args`
    pub argument: String,
    /// Appended to the wrapped app's name to form the launcher name
    pub name_suffix: String,
    /// Where launchers are written
    pub output_dir: PathBuf,
    /// Directory scanned by the `scan` command
    pub applications_dir: PathBuf,
    /// Icon copied into structured bundles
    pub icon: PathBuf,
    /// Program compiling AppleScript into an application
    pub compiler: String,
    /// Reverse-domain prefix for bundle identifiers
    pub identifier_prefix: String,
    /// Entry names marking an Electron bundle
    pub markers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_app: PathBuf::from(DEFAULT_TARGET_APP),
            argument: DEFAULT_ARGUMENT.to_string(),
            name_suffix: " with OpenGL".to_string(),
            output_dir: PathBuf::from("~/Desktop"),
            applications_dir: PathBuf::from("/Applications"),
            icon: PathBuf::from("icons/code_gl.icns"),
            compiler: "osacompile".to_string(),
            identifier_prefix: "com.user".to_string(),
            markers: ELECTRON_MARKERS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Config {
    /// Parse configuration from YAML content.
    ///
    /// An empty document yields the defaults. `path` only labels errors.
    pub fn from_yaml(content: &str, path: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| config_error::parse_failed(path, e.to_string()))
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config_error::not_found(path.display().to_string()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| config_error::read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&content, &path.display().to_string())
    }

    pub fn marker_set(&self) -> MarkerSet {
        MarkerSet::new(self.markers.iter().cloned())
    }

    /// Launcher name for a wrapped application's display name
    pub fn launcher_name(&self, app_name: &str) -> String {
        format!("{app_name}{}", self.name_suffix)
    }
}

/// Configuration together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
}

/// Path of the per-user config file, whether or not it exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the per-user file is used
/// when present and the built-in defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        let path = crate::path_utils::expand_home(path);
        return Ok(LoadedConfig {
            config: Config::from_file(&path)?,
            source: Some(path),
        });
    }

    match default_config_path() {
        Some(path) if path.is_file() => Ok(LoadedConfig {
            config: Config::from_file(&path)?,
            source: Some(path),
        }),
        _ => Ok(LoadedConfig {
            config: Config::default(),
            source: None,
        }),
    }
}
