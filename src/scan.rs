//! Project folder scanning.
//!
//! Lists one project folder and collects the base names of every file that
//! follows the `<base>-<size>.jpg` convention (see [`crate::naming`]). The
//! result is a set of *candidates*: a base name appears as soon as any one of
//! its size variants is present. [`crate::verify`] then drops candidates
//! that are missing a variant.
//!
//! ```text
//! replica/
//! ├── a-400w.jpg       ┐
//! ├── a-800w.jpg       ├─ candidate "a"
//! ├── a-1200w.jpg      ┘
//! ├── b-400w.jpg       ┐
//! ├── b-800w.jpg       ┘─ candidate "b" (incomplete, rejected later)
//! ├── notes.txt          ignored
//! └── cover.png          ignored
//! ```
//!
//! A missing folder is not an error: projects are often configured before
//! their images are uploaded.

use crate::naming::parse_variant_name;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to read folder {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to check {}: {source}", path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Collect the distinct base names of size-variant files in `folder`.
///
/// Returned in ascending lexicographic order, without duplicates, so the
/// manifest does not depend on directory listing order.
pub fn collect_candidates(folder: &Path) -> Result<Vec<String>, ScanError> {
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Folder does not exist: {}", folder.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ScanError::ReadDir {
                path: folder.to_path_buf(),
                source,
            });
        }
    };

    let mut bases = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::ReadDir {
            path: folder.to_path_buf(),
            source,
        })?;
        // Non-UTF-8 names can't follow the convention
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        let Some(parsed) = parse_variant_name(&name) else {
            continue;
        };
        if entry.path().is_file() {
            bases.insert(parsed.base);
        }
    }

    Ok(bases.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn missing_folder_is_empty() {
        let tmp = TempDir::new().unwrap();
        let candidates = collect_candidates(&tmp.path().join("not-yet-uploaded")).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn empty_folder_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(collect_candidates(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn groups_variants_by_base() {
        let tmp = TempDir::new().unwrap();
        write_image_set(tmp.path(), "a");
        write_image_set(tmp.path(), "b");

        assert_eq!(collect_candidates(tmp.path()).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn partial_sets_are_still_candidates() {
        let tmp = TempDir::new().unwrap();
        write_variants(tmp.path(), "lonely", &["800w"]);

        assert_eq!(collect_candidates(tmp.path()).unwrap(), vec!["lonely"]);
    }

    #[test]
    fn candidates_sorted_lexicographically() {
        let tmp = TempDir::new().unwrap();
        for base in ["20240301", "1700000000", "20231115", "B", "a"] {
            write_image_set(tmp.path(), base);
        }

        assert_eq!(
            collect_candidates(tmp.path()).unwrap(),
            vec!["1700000000", "20231115", "20240301", "B", "a"]
        );
    }

    #[test]
    fn unrelated_files_ignored() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("notes.txt"));
        touch(&tmp.path().join("cover.png"));
        touch(&tmp.path().join("a-400w.png"));
        touch(&tmp.path().join("a-600w.jpg"));
        touch(&tmp.path().join("a-400w.JPG"));
        touch(&tmp.path().join(".DS_Store"));

        assert!(collect_candidates(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn directories_matching_pattern_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("x-400w.jpg")).unwrap();

        assert!(collect_candidates(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn file_path_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("not-a-folder");
        touch(&file);

        let result = collect_candidates(&file);
        assert!(matches!(result, Err(ScanError::ReadDir { .. })));
    }
}
