//! # Gallery Manifest
//!
//! Build-time tool for a static portfolio site. Scans the project image
//! folders, keeps only images that exist in all three responsive sizes, and
//! writes `gallery-images.json` for the site's gallery scripts to fetch.
//!
//! # Pipeline
//!
//! One linear pass per run:
//!
//! ```text
//! 1. Config     gallery-config.json  →  project list   (or built-in defaults)
//! 2. Scan       project folder       →  candidate base names
//! 3. Verify     candidates           →  complete image sets
//! 4. Assemble   all projects         →  gallery-images.json
//! ```
//!
//! Resizing is not part of this tool: the `-400w`, `-800w`, and `-1200w`
//! JPEGs are produced beforehand and only discovered here.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Project list loading with fallback to built-in defaults, fixed site paths |
//! | [`naming`] | `<base>-<size>.jpg` filename convention parser |
//! | [`scan`] | Lists a project folder and collects candidate base names |
//! | [`verify`] | Drops candidates missing any size variant |
//! | [`manifest`] | Runs every enabled project and writes the JSON manifest |
//! | [`output`] | CLI summary formatting |
//!
//! # Failure Policy
//!
//! Expected states never fail a run: a missing or broken config falls back
//! to defaults, a missing project folder yields an empty project, and an
//! incomplete image set is skipped with a warning. Only unexpected I/O
//! errors (unreadable folders, unwritable output) abort.

pub mod config;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;
pub mod verify;

#[cfg(test)]
pub(crate) mod test_helpers;
