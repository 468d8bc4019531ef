//! Processed-file directory layout
//!
//! A host that imports an image materializes a `processed/` directory
//! next to the upload, holding a canonical `original.<ext>` artifact and
//! a `visualisation.<ext>` spatial artifact (symlink or copy). Detection
//! and extraction read from the spatial artifact when it exists and fall
//! back to the upload path otherwise, so the CLI works both on imported
//! trees and on bare files.

use std::path::{Path, PathBuf};

use log::debug;

/// File stem of the canonical original artifact
pub const ORIGINAL_STEM: &str = "original";

/// File stem of the spatial artifact
pub const SPATIAL_STEM: &str = "visualisation";

/// Name of the per-image processed directory
pub const PROCESSED_DIR: &str = "processed";

/// Resolves the artifact a given stem would have for this upload
fn artifact_path(upload_path: &Path, stem: &str) -> Option<PathBuf> {
    let parent = upload_path.parent()?;
    let extension = upload_path.extension()?;

    let mut candidate = parent.join(PROCESSED_DIR).join(stem);
    candidate.set_extension(extension);
    candidate.exists().then_some(candidate)
}

/// Resolves the path to read image data from
///
/// Prefers the spatial artifact, then the original artifact, then the
/// upload path itself.
///
/// # Arguments
/// * `upload_path` - Path to the uploaded image file
///
/// # Returns
/// The path detection and extraction should read
pub fn resolve_readable(upload_path: &Path) -> PathBuf {
    if let Some(spatial) = artifact_path(upload_path, SPATIAL_STEM) {
        debug!("Reading spatial artifact: {}", spatial.display());
        return spatial;
    }

    if let Some(original) = artifact_path(upload_path, ORIGINAL_STEM) {
        debug!("Reading original artifact: {}", original.display());
        return original;
    }

    upload_path.to_path_buf()
}
