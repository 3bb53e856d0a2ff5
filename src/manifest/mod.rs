//! Manifest discovery and parsing
//!
//! This module provides functionality to:
//! - Walk parent directories upward to locate the nearest go.mod
//! - Extract the declared module path from go.mod contents

mod go_mod;
mod locator;

pub use go_mod::module_path;
pub use locator::{locate, read_manifest, MANIFEST_FILE};
