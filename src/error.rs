//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: go.mod discovery and parsing failures
//! - VersionError: version canonicalization failures
//! - ArchiveError: archive validation, discovery, and writing failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest discovery and parsing errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Version canonicalization errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Archive construction errors
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Errors related to locating and reading the module manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// No go.mod found between the starting directory and the filesystem root
    #[error("{start}: could not find go.mod in any parent directory")]
    NotFound { start: PathBuf },

    /// go.mod exists but is not a regular file
    #[error("{path}: go.mod must be a regular file")]
    NotRegularFile { path: PathBuf },

    /// go.mod contains no parseable module directive
    #[error("{path}: could not read module path")]
    NoModulePath { path: PathBuf },

    /// Failed to read the manifest file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to stat a candidate manifest path during the upward walk
    #[error("failed to stat {path}: {source}")]
    StatError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to version validation
#[derive(Error, Debug)]
pub enum VersionError {
    /// Version string is not in canonical form (e.g. missing "v" prefix,
    /// missing patch component, or carrying build metadata)
    #[error("version \"{version}\" is not a canonical semantic version")]
    NonCanonical { version: String },
}

/// Errors related to archive construction
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Version failed the builder-side canonical check
    #[error("invalid version \"{version}\": must be a canonical semantic version")]
    InvalidVersion { version: String },

    /// Module path failed the module-path grammar check
    #[error("invalid module path \"{path}\": {message}")]
    InvalidModulePath { path: String, message: String },

    /// Module root does not exist or is not a directory
    #[error("module root {path} is not a directory")]
    InvalidRoot { path: PathBuf },

    /// A file's relative path failed the path-safety check
    #[error("unsafe file path \"{path}\": {message}")]
    UnsafePath { path: String, message: String },

    /// Two included entries collide on case-insensitive filesystems
    #[error("case-insensitive file name collision: \"{first}\" and \"{second}\"")]
    CaseCollision { first: String, second: String },

    /// Entry is neither a regular file nor a directory (e.g. a symlink)
    #[error("{path}: not a regular file or directory")]
    UnsupportedFileType { path: PathBuf },

    /// A single file exceeds the per-file size limit
    #[error("{path}: file size {size} bytes exceeds maximum file size of {limit} bytes")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    /// The total uncompressed size exceeds the archive size limit
    #[error("total uncompressed size exceeds maximum archive size of {limit} bytes")]
    ArchiveTooLarge { limit: u64 },

    /// Output file could not be created
    #[error("failed to create output file {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Reading a source file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the zip container failed
    #[error("failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(start: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound {
            start: start.into(),
        }
    }

    /// Creates a new NotRegularFile error
    pub fn not_regular_file(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotRegularFile { path: path.into() }
    }

    /// Creates a new NoModulePath error
    pub fn no_module_path(path: impl Into<PathBuf>) -> Self {
        ManifestError::NoModulePath { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new StatError
    pub fn stat_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::StatError {
            path: path.into(),
            source,
        }
    }
}

impl VersionError {
    /// Creates a new NonCanonical error
    pub fn non_canonical(version: impl Into<String>) -> Self {
        VersionError::NonCanonical {
            version: version.into(),
        }
    }
}

impl ArchiveError {
    /// Creates a new InvalidVersion error
    pub fn invalid_version(version: impl Into<String>) -> Self {
        ArchiveError::InvalidVersion {
            version: version.into(),
        }
    }

    /// Creates a new InvalidModulePath error
    pub fn invalid_module_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        ArchiveError::InvalidModulePath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidRoot error
    pub fn invalid_root(path: impl Into<PathBuf>) -> Self {
        ArchiveError::InvalidRoot { path: path.into() }
    }

    /// Creates a new UnsafePath error
    pub fn unsafe_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        ArchiveError::UnsafePath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new CaseCollision error
    pub fn case_collision(first: impl Into<String>, second: impl Into<String>) -> Self {
        ArchiveError::CaseCollision {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Creates a new UnsupportedFileType error
    pub fn unsupported_file_type(path: impl Into<PathBuf>) -> Self {
        ArchiveError::UnsupportedFileType { path: path.into() }
    }

    /// Creates a new FileTooLarge error
    pub fn file_too_large(path: impl Into<PathBuf>, size: u64, limit: u64) -> Self {
        ArchiveError::FileTooLarge {
            path: path.into(),
            size,
            limit,
        }
    }

    /// Creates a new OutputCreate error
    pub fn output_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArchiveError::OutputCreate {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Walk error
    pub fn walk(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        ArchiveError::Walk {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Io error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArchiveError::Io {
            path: path.into(),
            source,
        }
    }
}
