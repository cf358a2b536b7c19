//! CLI output formatting.
//!
//! Diagnostics (skipped projects, missing folders, incomplete image sets) go
//! through `tracing` on stderr while the run is in progress. This module
//! renders the final summary on stdout:
//!
//! ```text
//! Projects
//! 001 3d-printed-parts (2 images)
//!     Folder: 3d-printed parts/
//! 002 ice-cream-machine (0 images)
//!     Folder: ice-cream-machine/
//!     Design: design.project7
//!
//! Total projects: 2
//! Total images: 2
//! Output: assets/data/gallery-images.json
//! ```
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::manifest::{Manifest, ProjectResult};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn image_count(n: usize) -> String {
    if n == 1 {
        "1 image".to_string()
    } else {
        format!("{} images", n)
    }
}

/// Header plus indented context lines for one project.
fn project_lines(index: usize, id: &str, project: &ProjectResult) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} {} ({})",
            format_index(index),
            id,
            image_count(project.image_count)
        ),
        format!("    Folder: {}/", project.folder),
    ];
    if let Some(design) = &project.design_project {
        lines.push(format!("    Design: {}", design));
    }
    lines
}

/// Project list followed by totals.
pub fn format_summary(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Projects".to_string()];

    if manifest.projects.is_empty() {
        lines.push("    (no enabled projects)".to_string());
    }
    for (i, (id, project)) in manifest.projects.iter().enumerate() {
        lines.extend(project_lines(i + 1, id, project));
    }

    lines.push(String::new());
    lines.push(format!("Total projects: {}", manifest.projects.len()));
    lines.push(format!("Total images: {}", manifest.total_images()));
    lines
}

/// Summary for a full build, ending with the manifest location.
pub fn format_build_output(manifest: &Manifest, output_file: &Path) -> Vec<String> {
    let mut lines = format_summary(manifest);
    lines.push(format!("Output: {}", output_file.display()));
    lines
}

/// Summary for a check run, which writes nothing.
pub fn format_check_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = format_summary(manifest);
    lines.push("Manifest not written (check only)".to_string());
    lines
}

pub fn print_build_output(manifest: &Manifest, output_file: &Path) {
    for line in format_build_output(manifest, output_file) {
        println!("{}", line);
    }
}

pub fn print_check_output(manifest: &Manifest) {
    for line in format_check_output(manifest) {
        println!("{}", line);
    }
}
