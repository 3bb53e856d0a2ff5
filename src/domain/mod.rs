//! Core value types shared across the pipeline
//!
//! This module provides:
//! - ModuleVersion: the (module path, version) pair that addresses an archive
//! - Canonical version checking for Go-style semantic versions
//! - Module path grammar validation

mod module_path;
mod module_version;
mod version;

pub use module_path::check_module_path;
pub use module_version::ModuleVersion;
pub use version::{canonical_version, is_canonical_version};
