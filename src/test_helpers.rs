//! Shared test utilities for the gallery-manifest test suite.
//!
//! Provides fixture setup, image-set writers, and manifest lookups.
//!
//! # Usage
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = build(&SitePaths::under(tmp.path())).unwrap();
//!
//! let replica = find_project(&manifest, "replica");
//! assert_eq!(replica.images, vec!["a"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::manifest::{Manifest, ProjectResult};
use crate::naming::SizeVariant;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Image writers
// =========================================================================

/// Create a placeholder file, including missing parent directories.
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, "fake image").unwrap();
}

/// Write the given size tokens (`"400w"`, ...) for `base` into `folder`.
pub fn write_variants(folder: &Path, base: &str, tokens: &[&str]) {
    for token in tokens {
        touch(&folder.join(format!("{base}-{token}.jpg")));
    }
}

/// Write all three size variants for `base` into `folder`.
pub fn write_image_set(folder: &Path, base: &str) {
    for size in SizeVariant::ALL {
        touch(&folder.join(size.file_name(base)));
    }
}

// =========================================================================
// Manifest lookups: panic with a clear message on miss
// =========================================================================

/// Find a project by id. Panics if not found.
pub fn find_project<'a>(manifest: &'a Manifest, id: &str) -> &'a ProjectResult {
    manifest.projects.get(id).unwrap_or_else(|| {
        let ids = project_ids(manifest);
        panic!("project '{id}' not found. Available: {ids:?}")
    })
}

/// All project ids in manifest order.
pub fn project_ids(manifest: &Manifest) -> Vec<String> {
    manifest.projects.ids().map(str::to_string).collect()
}
