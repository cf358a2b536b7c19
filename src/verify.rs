//! Completeness checks for scanned image sets.
//!
//! A logical image is only published when all three size variants exist.
//! Partial sets are a normal transient state while images are being
//! uploaded, so they are logged and skipped rather than treated as errors.

use crate::naming::SizeVariant;
use crate::scan::ScanError;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Which size variants of one base name exist on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantPresence {
    pub small: bool,
    pub medium: bool,
    pub large: bool,
}

impl VariantPresence {
    /// Check each variant file of `base` in `folder`.
    pub fn probe(folder: &Path, base: &str) -> Result<Self, ScanError> {
        let has = |size: SizeVariant| variant_exists(&folder.join(size.file_name(base)));
        Ok(Self {
            small: has(SizeVariant::Small)?,
            medium: has(SizeVariant::Medium)?,
            large: has(SizeVariant::Large)?,
        })
    }

    pub fn has(&self, size: SizeVariant) -> bool {
        match size {
            SizeVariant::Small => self.small,
            SizeVariant::Medium => self.medium,
            SizeVariant::Large => self.large,
        }
    }

    pub fn is_complete(&self) -> bool {
        SizeVariant::ALL.into_iter().all(|size| self.has(size))
    }

    pub fn missing(&self) -> Vec<SizeVariant> {
        SizeVariant::ALL
            .into_iter()
            .filter(|&size| !self.has(size))
            .collect()
    }
}

/// Formats as `400w=true, 800w=true, 1200w=false`.
impl fmt::Display for VariantPresence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, size) in SizeVariant::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", size, self.has(size))?;
        }
        Ok(())
    }
}

fn variant_exists(path: &Path) -> Result<bool, ScanError> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(ScanError::Probe {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Keep only candidates whose three size variants all exist in `folder`.
///
/// Order is preserved, so sorted input gives sorted output.
pub fn retain_complete(folder: &Path, candidates: &[String]) -> Result<Vec<String>, ScanError> {
    let mut complete = Vec::with_capacity(candidates.len());
    for base in candidates {
        let presence = VariantPresence::probe(folder, base)?;
        if presence.is_complete() {
            complete.push(base.clone());
        } else {
            let missing: Vec<&str> = presence.missing().into_iter().map(SizeVariant::token).collect();
            warn!(
                "Incomplete image set for {}: {} (missing {})",
                base,
                presence,
                missing.join(", ")
            );
        }
    }
    Ok(complete)
}
