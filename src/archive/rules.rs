//! Inclusion rules for archive entries
//!
//! Each rule is independent and individually testable:
//! - VCS metadata directory pruning
//! - nested module root pruning (checked in the builder's walk filter)
//! - relative path safety (cross-platform extractability)
//! - case-insensitive collision detection
//! - per-file and total size limits

use crate::error::ArchiveError;
use std::collections::HashMap;
use std::path::Path;

/// Default per-file uncompressed size cap, 500 MiB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 500 << 20;

/// Default total uncompressed size cap, 500 MiB
pub const DEFAULT_MAX_ARCHIVE_SIZE: u64 = 500 << 20;

/// Version-control metadata directories excluded from archives
pub const VCS_DIRECTORIES: [&str; 4] = [".bzr", ".git", ".hg", ".svn"];

// Windows device names are unextractable on that platform regardless of
// extension, so "con" and "con.txt" are both rejected.
const WINDOWS_RESERVED_NAMES: [&str; 22] = [
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

const RESERVED_CHARS: [char; 8] = ['<', '>', ':', '"', '\\', '|', '?', '*'];

/// Size limits applied during discovery
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum uncompressed size of a single file
    pub max_file_size: u64,
    /// Maximum total uncompressed size of all entries
    pub max_archive_size: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_archive_size: DEFAULT_MAX_ARCHIVE_SIZE,
        }
    }
}

impl Limits {
    /// Create Limits with default caps
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-file size cap
    pub fn with_max_file_size(mut self, limit: u64) -> Self {
        self.max_file_size = limit;
        self
    }

    /// Set the total archive size cap
    pub fn with_max_archive_size(mut self, limit: u64) -> Self {
        self.max_archive_size = limit;
        self
    }
}

/// Check whether a directory name is version-control metadata
pub fn is_vcs_directory(name: &str) -> bool {
    VCS_DIRECTORIES.contains(&name)
}

/// Check whether a directory below the module root declares its own module
pub(crate) fn has_nested_manifest(dir: &Path) -> bool {
    dir.join(crate::manifest::MANIFEST_FILE).is_file()
}

/// Validate an archive-relative path for cross-platform extractability.
///
/// The path must be forward-slash separated and relative. Rejected:
/// empty paths, empty elements, "." and ".." elements, control characters,
/// characters reserved on Windows, elements with a trailing dot or space,
/// and Windows device names.
pub fn check_file_path(rel_path: &str) -> Result<(), ArchiveError> {
    if rel_path.is_empty() {
        return Err(ArchiveError::unsafe_path(rel_path, "empty path"));
    }
    if rel_path.starts_with('/') {
        return Err(ArchiveError::unsafe_path(rel_path, "absolute path"));
    }
    if let Some(bad) = rel_path
        .chars()
        .find(|c| c.is_control() || RESERVED_CHARS.contains(c))
    {
        return Err(ArchiveError::unsafe_path(
            rel_path,
            format!("invalid character {:?}", bad),
        ));
    }
    for element in rel_path.split('/') {
        if element.is_empty() {
            return Err(ArchiveError::unsafe_path(rel_path, "empty path element"));
        }
        if element == "." || element == ".." {
            return Err(ArchiveError::unsafe_path(
                rel_path,
                format!("path element \"{}\" not allowed", element),
            ));
        }
        if element.ends_with('.') || element.ends_with(' ') {
            return Err(ArchiveError::unsafe_path(
                rel_path,
                format!("path element \"{}\" ends with a dot or space", element),
            ));
        }
        let base = element.split('.').next().unwrap_or(element);
        if WINDOWS_RESERVED_NAMES.contains(&base.to_ascii_lowercase().as_str()) {
            return Err(ArchiveError::unsafe_path(
                rel_path,
                format!("path element \"{}\" is a reserved file name", element),
            ));
        }
    }
    Ok(())
}

/// Detects case-insensitive collisions between included entries.
///
/// Folding is ASCII-lowercase; the first conflicting pair is reported with
/// both spellings so the user can see which files clash.
#[derive(Debug, Default)]
pub struct CaseChecker {
    seen: HashMap<String, String>,
}

impl CaseChecker {
    /// Create an empty checker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a relative path, failing if it collides with an earlier one
    pub fn insert(&mut self, rel_path: &str) -> Result<(), ArchiveError> {
        let folded = rel_path.to_ascii_lowercase();
        if let Some(first) = self.seen.get(&folded) {
            return Err(ArchiveError::case_collision(first.clone(), rel_path));
        }
        self.seen.insert(folded, rel_path.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_limits() {
        let limits = Limits::new();
        assert_eq!(limits.max_file_size, 500 << 20);
        assert_eq!(limits.max_archive_size, 500 << 20);
    }

    #[test]
    fn test_limits_builders() {
        let limits = Limits::new()
            .with_max_file_size(1024)
            .with_max_archive_size(4096);
        assert_eq!(limits.max_file_size, 1024);
        assert_eq!(limits.max_archive_size, 4096);
    }

    #[test]
    fn test_vcs_directories() {
        assert!(is_vcs_directory(".git"));
        assert!(is_vcs_directory(".hg"));
        assert!(is_vcs_directory(".svn"));
        assert!(is_vcs_directory(".bzr"));
        assert!(!is_vcs_directory(".github"));
        assert!(!is_vcs_directory("src"));
    }

    #[test]
    fn test_nested_manifest_detection() {
        let temp = tempfile::tempdir().unwrap();
        let sub = temp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        assert!(!has_nested_manifest(&sub));

        fs::write(sub.join("go.mod"), "module example.com/sub\n").unwrap();
        assert!(has_nested_manifest(&sub));
    }

    #[test]
    fn test_file_path_accepts_ordinary_paths() {
        assert!(check_file_path("main.go").is_ok());
        assert!(check_file_path("internal/util/util.go").is_ok());
        assert!(check_file_path("README.md").is_ok());
        assert!(check_file_path("docs/design notes.md").is_ok());
    }

    #[test]
    fn test_file_path_rejects_empty() {
        assert!(check_file_path("").is_err());
    }

    #[test]
    fn test_file_path_rejects_absolute() {
        assert!(check_file_path("/etc/passwd").is_err());
    }

    #[test]
    fn test_file_path_rejects_traversal() {
        assert!(check_file_path("../escape.go").is_err());
        assert!(check_file_path("a/../b.go").is_err());
        assert!(check_file_path("./a.go").is_err());
    }

    #[test]
    fn test_file_path_rejects_empty_element() {
        assert!(check_file_path("a//b.go").is_err());
    }

    #[test]
    fn test_file_path_rejects_control_characters() {
        assert!(check_file_path("a\u{1}b.go").is_err());
        assert!(check_file_path("tab\there.go").is_err());
    }

    #[test]
    fn test_file_path_rejects_reserved_characters() {
        assert!(check_file_path("a:b.go").is_err());
        assert!(check_file_path("a*b.go").is_err());
        assert!(check_file_path("a?b.go").is_err());
        assert!(check_file_path("a\\b.go").is_err());
    }

    #[test]
    fn test_file_path_rejects_trailing_dot_or_space() {
        assert!(check_file_path("name./file.go").is_err());
        assert!(check_file_path("dir/name ").is_err());
    }

    #[test]
    fn test_file_path_rejects_windows_device_names() {
        assert!(check_file_path("con").is_err());
        assert!(check_file_path("CON").is_err());
        assert!(check_file_path("aux.txt").is_err());
        assert!(check_file_path("sub/lpt1.go").is_err());
        assert!(check_file_path("console.go").is_ok());
    }

    #[test]
    fn test_case_checker_accepts_distinct() {
        let mut checker = CaseChecker::new();
        assert!(checker.insert("a.go").is_ok());
        assert!(checker.insert("b.go").is_ok());
        assert!(checker.insert("sub/a.go").is_ok());
    }

    #[test]
    fn test_case_checker_detects_collision() {
        let mut checker = CaseChecker::new();
        checker.insert("README.md").unwrap();
        let err = checker.insert("readme.md").unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("README.md"));
        assert!(msg.contains("readme.md"));
    }

    #[test]
    fn test_case_checker_exact_duplicate_is_collision() {
        let mut checker = CaseChecker::new();
        checker.insert("a.go").unwrap();
        assert!(checker.insert("a.go").is_err());
    }
}
