//! A single file destined for the archive

use std::path::PathBuf;

/// One file selected for inclusion in the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Full path inside the archive, "<module>@<version>/<rel-path>",
    /// always forward-slash separated
    pub archive_path: String,
    /// Path of the file on disk
    pub source_path: PathBuf,
    /// Uncompressed size in bytes
    pub size: u64,
}

impl ArchiveEntry {
    /// Create a new ArchiveEntry
    pub fn new(archive_path: impl Into<String>, source_path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            archive_path: archive_path.into(),
            source_path: source_path.into(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let entry = ArchiveEntry::new(
            "example.com/hello@v1.0.0/main.go",
            "/work/proj/main.go",
            42,
        );
        assert_eq!(entry.archive_path, "example.com/hello@v1.0.0/main.go");
        assert_eq!(entry.source_path, PathBuf::from("/work/proj/main.go"));
        assert_eq!(entry.size, 42);
    }
}
