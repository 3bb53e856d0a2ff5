//! Upward manifest search
//!
//! Walks from a starting directory toward the filesystem root looking for
//! go.mod. The walk is an explicit loop bounded by directory depth; a stat
//! other than NotFound aborts rather than being treated as absence.

use crate::error::ManifestError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the module manifest
pub const MANIFEST_FILE: &str = "go.mod";

/// Locate the nearest go.mod at or above `start_dir`.
///
/// The candidate is checked with a non-following stat: a symlink named
/// go.mod is an error, not a match. Reaching the filesystem root without
/// a match yields `ManifestError::NotFound`.
pub fn locate(start_dir: &Path) -> Result<PathBuf, ManifestError> {
    let mut dir = start_dir.to_path_buf();
    loop {
        let candidate = dir.join(MANIFEST_FILE);
        match fs::symlink_metadata(&candidate) {
            Ok(meta) => {
                if !meta.is_file() {
                    return Err(ManifestError::not_regular_file(candidate));
                }
                return Ok(candidate);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(ManifestError::stat_error(candidate, e)),
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => return Err(ManifestError::not_found(start_dir)),
        }
    }
}

/// Read the manifest file contents
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}
