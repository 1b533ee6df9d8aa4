//! Turns an output directory into an [`ArtifactReport`].

use crate::error::{BuildError, Result, ResultExt};
use std::path::{Component, Path};
use vigil_hooks::ArtifactReport;
use walkdir::WalkDir;

/// Scan `out_dir` recursively and record every regular file.
///
/// Names are paths relative to `out_dir` joined with `/`, so a chunk at
/// `dist/js/vendor.js` is reported as `js/vendor.js` on every platform.
/// Entries are visited in file-name order, giving a stable report.
pub fn scan_output_dir(out_dir: &Path) -> Result<ArtifactReport> {
    if !out_dir.is_dir() {
        return Err(BuildError::OutDirMissing(out_dir.to_path_buf()).into());
    }

    let mut report = ArtifactReport::new();

    for entry in WalkDir::new(out_dir).sort_by_file_name() {
        let entry = entry
            .map_err(std::io::Error::from)
            .context(format!("Failed to scan {}", out_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(out_dir) else {
            continue;
        };
        let bytes = entry
            .metadata()
            .map_err(std::io::Error::from)
            .with_path(entry.path())?
            .len();
        report.insert(artifact_name(relative), bytes);
    }

    tracing::debug!(dir = %out_dir.display(), artifacts = report.len(), "scanned output directory");
    Ok(report)
}

fn artifact_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
