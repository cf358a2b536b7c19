//! Gallery configuration module.
//!
//! Loads the list of gallery projects from `gallery-config.json`. Every run
//! ends up with a usable, non-empty project list: a missing, malformed, or
//! structurally invalid file falls back to the built-in defaults with a
//! warning.
//!
//! ## File Locations
//!
//! All paths are fixed relative to the site root:
//!
//! ```text
//! <root>/
//! ├── assets/data/gallery-config.json     # project list (optional)
//! ├── assets/data/gallery-images.json     # generated manifest
//! └── assets/images/3d-printing/          # images root
//!     ├── 3d-printed parts/               # one folder per project
//!     └── replica/
//! ```
//!
//! ## Configuration Format
//!
//! ```json
//! {
//!   "projects": [
//!     { "id": "replica", "folder": "replica", "enabled": true, "designProject": null }
//!   ]
//! }
//! ```
//!
//! Entries without a string `id` and string `folder` are dropped. `enabled`
//! is read by truthiness (a missing key means disabled) and `designProject`
//! keeps only non-empty strings. Unknown keys are ignored.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Configuration file location, relative to the site root.
pub const CONFIG_FILE: &str = "assets/data/gallery-config.json";
/// Directory holding one folder per project, relative to the site root.
pub const IMAGES_ROOT: &str = "assets/images/3d-printing";
/// Manifest location, relative to the site root.
pub const OUTPUT_FILE: &str = "assets/data/gallery-images.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resolved filesystem locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub config_file: PathBuf,
    pub images_root: PathBuf,
    pub output_file: PathBuf,
}

impl SitePaths {
    /// Standard layout under a site root directory.
    pub fn under(root: &Path) -> Self {
        Self {
            config_file: root.join(CONFIG_FILE),
            images_root: root.join(IMAGES_ROOT),
            output_file: root.join(OUTPUT_FILE),
        }
    }
}

/// One gallery project: a named folder of images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Key in the manifest's `projects` map.
    pub id: String,
    /// Folder under the images root.
    pub folder: String,
    /// Disabled projects are not scanned and do not appear in the manifest.
    pub enabled: bool,
    /// Opaque cross-reference to a design-page entry, passed through as-is.
    pub design_project: Option<String>,
}

impl ProjectConfig {
    fn new(id: &str, folder: &str, enabled: bool, design_project: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            folder: folder.to_string(),
            enabled,
            design_project: design_project.map(str::to_string),
        }
    }

    /// Validate one raw `projects` entry.
    ///
    /// Returns `None` unless the entry is an object with string `id` and
    /// string `folder`.
    fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let id = entry.get("id")?.as_str()?;
        let folder = entry.get("folder")?.as_str()?;
        let enabled = entry.get("enabled").is_some_and(is_truthy);
        let design_project = entry
            .get("designProject")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty());
        Some(Self::new(id, folder, enabled, design_project))
    }
}

/// JavaScript-style truthiness: `1` and `"yes"` enable a project, `0` and
/// `""` do not.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Ordered list of projects to process. Never empty once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryConfig {
    pub projects: Vec<ProjectConfig>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            projects: vec![
                ProjectConfig::new("3d-printed-parts", "3d-printed parts", true, None),
                ProjectConfig::new("replica", "replica", true, None),
                ProjectConfig::new("nkua-project", "nkua-project", false, Some("design.project6")),
                ProjectConfig::new(
                    "ice-cream-machine",
                    "ice-cream-machine",
                    false,
                    Some("design.project7"),
                ),
                ProjectConfig::new("3d-printing", "3d-printing", false, None),
            ],
        }
    }
}

impl GalleryConfig {
    #[cfg(test)]
    pub(crate) fn enabled_projects(&self) -> impl Iterator<Item = &ProjectConfig> {
        self.projects.iter().filter(|p| p.enabled)
    }
}

/// Why the built-in default configuration was used instead of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    Missing,
    Malformed(String),
    NoProjects,
    NoValidProjects,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Missing => f.write_str("config file not found"),
            Fallback::Malformed(reason) => write!(f, "config is not valid JSON ({reason})"),
            Fallback::NoProjects => f.write_str("config projects missing or invalid"),
            Fallback::NoValidProjects => f.write_str("no valid projects in config"),
        }
    }
}

/// Parse and validate raw configuration bytes.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD before parsing, so a
/// stray byte inside a string value does not discard the whole file.
pub fn parse_config(bytes: &[u8]) -> Result<GalleryConfig, Fallback> {
    let text = String::from_utf8_lossy(bytes);
    let value: Value =
        serde_json::from_str(&text).map_err(|e| Fallback::Malformed(e.to_string()))?;
    let entries = value
        .get("projects")
        .and_then(Value::as_array)
        .ok_or(Fallback::NoProjects)?;

    let projects: Vec<ProjectConfig> = entries.iter().filter_map(ProjectConfig::from_value).collect();
    if projects.is_empty() {
        return Err(Fallback::NoValidProjects);
    }
    Ok(GalleryConfig { projects })
}

/// Load the gallery configuration from `path`.
///
/// Falls back to [`GalleryConfig::default`] when the file is missing,
/// unparseable, or has no valid projects. Only unexpected read failures
/// (permissions, the path being a directory) are errors.
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    let parsed = match fs::read(path) {
        Ok(bytes) => parse_config(&bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Fallback::Missing),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    Ok(parsed.unwrap_or_else(|reason| {
        warn!("{}, using defaults: {}", reason, path.display());
        GalleryConfig::default()
    }))
}

/// The built-in project list as pretty JSON, suitable as a starting
/// `gallery-config.json`.
pub fn stock_config_json() -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(&GalleryConfig::default())?;
    json.push('\n');
    Ok(json)
}
