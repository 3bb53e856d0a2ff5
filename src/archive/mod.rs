//! Archive construction
//!
//! This module provides functionality to:
//! - Enumerate eligible files under a module root (rules.rs)
//! - Build a deterministic, version-addressed zip archive (builder.rs)

mod builder;
mod entry;
mod rules;

pub use builder::{build, create_archive};
pub use entry::ArchiveEntry;
pub use rules::{
    check_file_path, is_vcs_directory, CaseChecker, Limits, DEFAULT_MAX_ARCHIVE_SIZE,
    DEFAULT_MAX_FILE_SIZE, VCS_DIRECTORIES,
};
