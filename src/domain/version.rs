//! Canonical version checking for Go-style semantic versions
//!
//! Go module versions carry a leading "v" and must spell out all three of
//! major.minor.patch. The canonical form keeps a pre-release suffix but
//! drops build metadata.

use semver::{BuildMetadata, Version};

/// Returns the canonical form of a Go-style semantic version, or None if
/// the string is not a valid version at all.
///
/// The input must start with "v" and parse as a full semantic version.
/// Build metadata is stripped; a pre-release suffix is preserved.
pub fn canonical_version(version: &str) -> Option<String> {
    let rest = version.strip_prefix('v')?;
    let mut parsed = Version::parse(rest).ok()?;
    parsed.build = BuildMetadata::EMPTY;
    Some(format!("v{}", parsed))
}

/// Checks whether a version string equals its own canonical form exactly.
///
/// This is the gate the CLI and the archive builder both apply: "v1.2.3"
/// and "v1.2.3-rc.1" pass; "1.2.3", "v1.2", and "v1.2.3+build" do not.
pub fn is_canonical_version(version: &str) -> bool {
    canonical_version(version).as_deref() == Some(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_accepts_release() {
        assert!(is_canonical_version("v1.2.3"));
        assert!(is_canonical_version("v0.0.1"));
        assert!(is_canonical_version("v10.20.30"));
    }

    #[test]
    fn test_canonical_accepts_prerelease() {
        assert!(is_canonical_version("v1.2.3-rc.1"));
        assert!(is_canonical_version("v2.0.0-beta"));
    }

    #[test]
    fn test_rejects_missing_v_prefix() {
        assert!(!is_canonical_version("1.2.3"));
    }

    #[test]
    fn test_rejects_missing_patch() {
        assert!(!is_canonical_version("v1.2"));
        assert!(!is_canonical_version("v1"));
    }

    #[test]
    fn test_rejects_build_metadata() {
        assert!(!is_canonical_version("v1.2.3+build.5"));
        assert!(!is_canonical_version("v1.2.3-rc.1+meta"));
    }

    #[test]
    fn test_rejects_zero_padding() {
        assert!(!is_canonical_version("v1.02.3"));
        assert!(!is_canonical_version("v01.2.3"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(!is_canonical_version(""));
        assert!(!is_canonical_version("v"));
        assert!(!is_canonical_version("version-one"));
        assert!(!is_canonical_version("vv1.2.3"));
    }

    #[test]
    fn test_canonical_strips_build_metadata() {
        assert_eq!(
            canonical_version("v1.2.3+build").as_deref(),
            Some("v1.2.3")
        );
    }

    #[test]
    fn test_canonical_preserves_prerelease() {
        assert_eq!(
            canonical_version("v1.2.3-rc.1").as_deref(),
            Some("v1.2.3-rc.1")
        );
    }

    #[test]
    fn test_canonical_invalid_returns_none() {
        assert_eq!(canonical_version("1.2.3"), None);
        assert_eq!(canonical_version("v1.2"), None);
    }
}
