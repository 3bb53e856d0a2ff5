//! The (module path, version) pair that addresses an archive

/// A module path paired with the version being packaged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleVersion {
    /// Dotted module path from the manifest, e.g. "example.com/hello"
    pub path: String,
    /// Canonical semantic version, e.g. "v1.2.3"
    pub version: String,
}

impl ModuleVersion {
    /// Create a new ModuleVersion
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
        }
    }

    /// The top-level directory all archive entries live under,
    /// "<path>@<version>"
    pub fn archive_prefix(&self) -> String {
        format!("{}@{}", self.path, self.version)
    }
}
