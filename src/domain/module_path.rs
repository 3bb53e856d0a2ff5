//! Module path grammar validation
//!
//! Implements the documented subset of the Go module path grammar used by
//! the archive builder: lowercase ASCII elements separated by "/", with a
//! dotted first element (the registry domain). Paths that fail here would
//! be rejected by a module proxy, so the builder refuses to archive them.

use crate::error::ArchiveError;

/// Checks whether a single character may appear in a module path element.
///
/// Module paths are restricted to lowercase ASCII letters, digits, and a
/// small set of punctuation.
fn module_char_ok(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_' | '~')
}

/// Validates a module path against the module-path grammar.
///
/// Rules:
/// - non-empty, no leading or trailing "/", no empty elements
/// - every character from the lowercase module character set
/// - no element equal to "." or "..", none starting or ending with a dot
/// - the first element must contain a dot (a registry domain)
pub fn check_module_path(path: &str) -> Result<(), ArchiveError> {
    if path.is_empty() {
        return Err(ArchiveError::invalid_module_path(path, "empty module path"));
    }
    if path.starts_with('/') || path.ends_with('/') {
        return Err(ArchiveError::invalid_module_path(
            path,
            "leading or trailing slash",
        ));
    }
    for (index, element) in path.split('/').enumerate() {
        check_element(path, element)?;
        if index == 0 && !element.contains('.') {
            return Err(ArchiveError::invalid_module_path(
                path,
                "first path element must contain a dot",
            ));
        }
    }
    Ok(())
}

fn check_element(path: &str, element: &str) -> Result<(), ArchiveError> {
    if element.is_empty() {
        return Err(ArchiveError::invalid_module_path(path, "empty path element"));
    }
    if element == "." || element == ".." {
        return Err(ArchiveError::invalid_module_path(
            path,
            format!("path element \"{}\" not allowed", element),
        ));
    }
    if element.starts_with('.') || element.ends_with('.') {
        return Err(ArchiveError::invalid_module_path(
            path,
            format!("path element \"{}\" begins or ends with a dot", element),
        ));
    }
    if let Some(bad) = element.chars().find(|c| !module_char_ok(*c)) {
        return Err(ArchiveError::invalid_module_path(
            path,
            format!("invalid character {:?} in path element \"{}\"", bad, element),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_paths() {
        assert!(check_module_path("example.com/hello").is_ok());
        assert!(check_module_path("example.com").is_ok());
        assert!(check_module_path("github.com/user/repo").is_ok());
        assert!(check_module_path("example.com/a-b_c~d/v2").is_ok());
        assert!(check_module_path("go.dev/x/tools").is_ok());
    }

    #[test]
    fn test_empty_path() {
        assert!(check_module_path("").is_err());
    }

    #[test]
    fn test_leading_and_trailing_slash() {
        assert!(check_module_path("/example.com/hello").is_err());
        assert!(check_module_path("example.com/hello/").is_err());
    }

    #[test]
    fn test_empty_element() {
        assert!(check_module_path("example.com//hello").is_err());
    }

    #[test]
    fn test_dot_elements() {
        assert!(check_module_path("example.com/./hello").is_err());
        assert!(check_module_path("example.com/../hello").is_err());
    }

    #[test]
    fn test_element_dot_edges() {
        assert!(check_module_path("example.com/.hidden").is_err());
        assert!(check_module_path("example.com/name.").is_err());
    }

    #[test]
    fn test_uppercase_rejected() {
        assert!(check_module_path("Example.com/hello").is_err());
        assert!(check_module_path("example.com/Hello").is_err());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(check_module_path("example.com/he llo").is_err());
        assert!(check_module_path("example.com/he*llo").is_err());
        assert!(check_module_path("example.com/héllo").is_err());
    }

    #[test]
    fn test_first_element_needs_dot() {
        assert!(check_module_path("example/hello").is_err());
        assert!(check_module_path("localmodule").is_err());
    }
}
