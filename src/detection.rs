//! Electron detection for application bundles
//!
//! A bundle counts as Electron when any known marker entry appears anywhere
//! in its tree. This is a heuristic: apps with non-standard packaging are
//! missed, and no version checks are made.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::bundle::{ApplicationBundle, BUNDLE_EXTENSION};

/// Entry names whose presence marks an Electron bundle
pub const ELECTRON_MARKERS: &[&str] = &[
    "Electron Framework.framework",
    "electron.asar",
    "app.asar",
];

/// Set of marker entry names checked by the prober
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    names: Vec<String>,
}

impl MarkerSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether `file_name` equals one of the markers
    pub fn matches(&self, file_name: &str) -> bool {
        self.names.iter().any(|m| m == file_name)
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::new(ELECTRON_MARKERS.iter().copied())
    }
}

/// Probes bundle trees for marker entries
#[derive(Debug, Clone, Default)]
pub struct BundleProber {
    markers: MarkerSet,
}

impl BundleProber {
    pub fn new(markers: MarkerSet) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Check whether the bundle at `bundle_path` is an Electron app.
    ///
    /// Returns true on the first marker found. Missing or unreadable paths,
    /// and unreadable subdirectories, count as "no marker".
    pub fn probe(&self, bundle_path: &Path) -> bool {
        WalkDir::new(bundle_path)
            .min_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .any(|entry| self.markers.matches(&entry.file_name().to_string_lossy()))
    }

    /// Bundle record for `bundle_path`, flagged with the probe result
    pub fn inspect(&self, bundle_path: &Path) -> ApplicationBundle {
        ApplicationBundle::new(bundle_path, self.probe(bundle_path))
    }
}

/// Scan `directory` for Electron application bundles.
///
/// Only immediate entries ending in `.app` are considered. Results keep the
/// order the directory listing returned. A missing or unreadable directory
/// yields an empty list.
pub fn scan(directory: &Path, prober: &BundleProber) -> Vec<ApplicationBundle> {
    let Ok(entries) = fs::read_dir(directory) else {
        return Vec::new();
    };

    entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .ends_with(BUNDLE_EXTENSION)
        })
        .map(|entry| prober.inspect(&entry.path()))
        .filter(|bundle| bundle.is_electron)
        .collect()
}
