//! go.mod module directive extraction
//!
//! Handles:
//! - bare module directives: module example.com/hello
//! - quoted module directives: module "example.com/hello"
//! - trailing line comments after the path

use regex::Regex;
use std::sync::LazyLock;

// Regex for the module directive: module <path> or module "<path>"
static MODULE_DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^module\s+(?:"([^"]*)"|(\S+))\s*(//.*)?$"#).unwrap()
});

/// Extract the declared module path from go.mod contents.
///
/// Scans for the first well-formed module directive and returns its path.
/// Returns None when no directive parses; callers treat that as an invalid
/// manifest.
pub fn module_path(content: &str) -> Option<String> {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        if let Some(caps) = MODULE_DIRECTIVE_RE.captures(trimmed) {
            let path = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or("");
            if path.is_empty() {
                return None;
            }
            return Some(path.to_string());
        }
    }
    None
}
