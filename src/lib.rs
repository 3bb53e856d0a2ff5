//! modzip - Go module archive packager library
//!
//! This library provides the core functionality for packaging a module
//! directory into a version-addressed zip archive:
//! - Manifest location (upward go.mod walk) and module path extraction
//! - Canonical version and module path validation
//! - Deterministic, reproducible archive construction

pub mod archive;
pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
