//! Manifest assembly and output.
//!
//! Runs the scan and verify steps for every enabled project, in
//! configuration order, and writes the result as `gallery-images.json`:
//!
//! ```json
//! {
//!   "generated": "2026-10-18T09:30:00.000Z",
//!   "projects": {
//!     "replica": {
//!       "folder": "replica",
//!       "images": ["a"],
//!       "designProject": null,
//!       "imageCount": 1
//!     }
//!   },
//!   "galleries": {
//!     "3d-printed parts": [],
//!     "replica": ["a"],
//!     "3d-printing": []
//!   }
//! }
//! ```
//!
//! The manifest is regenerated from scratch and overwritten on every run.
//!
//! ## Legacy `galleries` view
//!
//! Older gallery pages read `galleries[key]` instead of `projects[id]`. The
//! three keys are fixed and map to fixed project ids; a project that is
//! absent or disabled shows up as an empty list. Projects with any other id
//! are not reflected here.

use crate::config::{self, ConfigError, GalleryConfig, SitePaths};
use crate::scan::{self, ScanError};
use crate::verify;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Project id behind the legacy `"3d-printed parts"` gallery.
pub const PRINTED_PARTS_ID: &str = "3d-printed-parts";
/// Project id behind the legacy `"replica"` gallery.
pub const REPLICA_ID: &str = "replica";
/// Project id behind the legacy `"3d-printing"` gallery.
pub const PRINTING_ID: &str = "3d-printing";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write manifest {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Scan result for one enabled project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResult {
    pub folder: String,
    /// Base names with all three size variants, sorted.
    pub images: Vec<String>,
    pub design_project: Option<String>,
    /// Always `images.len()`.
    pub image_count: usize,
}

impl ProjectResult {
    pub fn new(folder: String, images: Vec<String>, design_project: Option<String>) -> Self {
        Self {
            folder,
            image_count: images.len(),
            images,
            design_project,
        }
    }
}

/// Project results keyed by id, in the order projects were first inserted.
///
/// Serialized as a JSON object. Inserting an id that is already present
/// replaces its result but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMap {
    entries: Vec<(String, ProjectResult)>,
}

impl ProjectMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, result: ProjectResult) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = result,
            None => self.entries.push((id, result)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ProjectResult> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, result)| result)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProjectResult)> {
        self.entries.iter().map(|(id, result)| (id.as_str(), result))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ProjectMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Fixed-shape view for pages that predate per-project entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LegacyGalleries {
    #[serde(rename = "3d-printed parts")]
    pub printed_parts: Vec<String>,
    pub replica: Vec<String>,
    #[serde(rename = "3d-printing")]
    pub printing: Vec<String>,
}

impl LegacyGalleries {
    pub fn from_projects(projects: &ProjectMap) -> Self {
        let images = |id: &str| {
            projects
                .get(id)
                .map(|p| p.images.clone())
                .unwrap_or_default()
        };
        Self {
            printed_parts: images(PRINTED_PARTS_ID),
            replica: images(REPLICA_ID),
            printing: images(PRINTING_ID),
        }
    }
}

/// The generated gallery manifest.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub generated: String,
    pub projects: ProjectMap,
    pub galleries: LegacyGalleries,
}

impl Manifest {
    pub fn new(projects: ProjectMap, generated: DateTime<Utc>) -> Self {
        let galleries = LegacyGalleries::from_projects(&projects);
        Self {
            generated: generated.to_rfc3339_opts(SecondsFormat::Millis, true),
            projects,
            galleries,
        }
    }

    pub fn total_images(&self) -> usize {
        self.projects.iter().map(|(_, p)| p.image_count).sum()
    }

    /// Pretty JSON with 2-space indentation.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Resolve a configured project folder under `images_root`.
///
/// Root and drive prefixes are dropped, so `"/replica"` resolves to
/// `<images_root>/replica` rather than replacing the images root.
pub fn project_folder(images_root: &Path, folder: &str) -> PathBuf {
    let mut path = images_root.to_path_buf();
    for component in Path::new(folder).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            Component::CurDir | Component::ParentDir | Component::Normal(_) => path.push(component),
        }
    }
    path
}

/// Scan and verify every enabled project under `images_root`.
pub fn assemble(config: &GalleryConfig, images_root: &Path) -> Result<ProjectMap, ScanError> {
    let mut projects = ProjectMap::new();

    for project in &config.projects {
        if !project.enabled {
            info!("Skipping disabled project: {}", project.id);
            continue;
        }

        let folder = project_folder(images_root, &project.folder);
        info!("Scanning project: {} (folder: {})", project.id, project.folder);

        let candidates = scan::collect_candidates(&folder)?;
        let images = verify::retain_complete(&folder, &candidates)?;
        info!("Found {} complete image sets for {}", images.len(), project.id);

        projects.insert(
            project.id.clone(),
            ProjectResult::new(
                project.folder.clone(),
                images,
                project.design_project.clone(),
            ),
        );
    }

    Ok(projects)
}

/// Load configuration and scan all projects, without writing anything.
pub fn build(paths: &SitePaths) -> Result<Manifest, ManifestError> {
    let config = config::load_config(&paths.config_file)?;
    let projects = assemble(&config, &paths.images_root)?;
    Ok(Manifest::new(projects, Utc::now()))
}

/// Write `manifest` to `path`, creating the parent directory if needed.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), ManifestError> {
    let write_err = |source: io::Error| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let json = manifest.to_json()?;
    fs::write(path, json).map_err(write_err)
}

/// Build the manifest and write it to the configured output file.
pub fn run(paths: &SitePaths) -> Result<Manifest, ManifestError> {
    let manifest = build(paths)?;
    write_manifest(&manifest, &paths.output_file)?;
    Ok(manifest)
}
