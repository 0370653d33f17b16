use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::optimizer::{find_files, OptimizeError};

pub const MANIFEST_FILE: &str = "manifest.json";

/// Everything the optimizer can leave in the output tree.
const MANIFEST_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "avif"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Relative to the output root, `/`-separated.
    pub path: String,
    pub filename: String,
    pub format: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub generated: String,
    pub images: Vec<ManifestEntry>,
}

fn entry_for(root: &Path, file: &Path) -> Result<ManifestEntry, OptimizeError> {
    let relative = file.strip_prefix(root).map_err(|_| OptimizeError::OutsideInput {
        path: file.to_path_buf(),
        root: root.to_path_buf(),
    })?;
    let size = fs::metadata(file).map_err(|e| OptimizeError::io(file, e))?.len();
    Ok(ManifestEntry {
        path: relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        filename: file.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default(),
        format: file.extension().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default(),
        size,
    })
}

pub fn build_manifest(output_dir: &Path, generated: DateTime<Utc>) -> Result<Manifest, OptimizeError> {
    let images = find_files(output_dir, &MANIFEST_EXTENSIONS)
        .iter()
        .map(|file| entry_for(output_dir, file))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Manifest {
        generated: generated.to_rfc3339_opts(SecondsFormat::Millis, true),
        images,
    })
}

pub fn write_manifest(output_dir: &Path, manifest: &Manifest) -> Result<PathBuf, OptimizeError> {
    let path = output_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, json).map_err(|e| OptimizeError::io(&path, e))?;
    tracing::info!("Wrote image manifest with {} entries to {}", manifest.images.len(), path.display());
    Ok(path)
}
