//! Wires the manifest locator and archive builder into one run
//!
//! The working directory is an explicit parameter so the whole pipeline
//! can be exercised from tests without touching process state.

use crate::archive::{create_archive, Limits};
use crate::cli::CliArgs;
use crate::domain::{is_canonical_version, ModuleVersion};
use crate::error::{AppError, ManifestError, VersionError};
use crate::manifest;
use std::path::{Path, PathBuf};

/// Single-run coordinator: locate manifest, derive paths, build archive
pub struct Orchestrator {
    args: CliArgs,
}

impl Orchestrator {
    /// Create a new Orchestrator from parsed CLI arguments
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Run the pipeline starting from `working_dir`.
    ///
    /// Returns the path of the archive that was written. The version gate
    /// runs before any filesystem work so a malformed version never leaves
    /// a partial output behind.
    pub fn run(&self, working_dir: &Path) -> Result<PathBuf, AppError> {
        if !is_canonical_version(&self.args.version) {
            return Err(VersionError::non_canonical(&self.args.version).into());
        }

        let manifest_path = manifest::locate(working_dir)?;
        let module_root = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| ManifestError::not_found(working_dir))?;

        let content = manifest::read_manifest(&manifest_path)?;
        let module_path = manifest::module_path(&content)
            .ok_or_else(|| ManifestError::no_module_path(&manifest_path))?;

        let mv = ModuleVersion::new(module_path, &self.args.version);
        let output_path = match &self.args.output {
            Some(path) => path.clone(),
            None => default_output_path(&module_root, &self.args.version),
        };

        if self.args.verbose {
            eprintln!("manifest: {}", manifest_path.display());
            eprintln!("module: {}", mv.path);
            eprintln!("output: {}", output_path.display());
        }

        create_archive(&output_path, &mv, &module_root, &Limits::default())?;
        Ok(output_path)
    }
}

/// Default output location: "<version>.zip" in the parent of the module root
fn default_output_path(module_root: &Path, version: &str) -> PathBuf {
    let file_name = format!("{}.zip", version);
    match module_root.parent() {
        Some(parent) => parent.join(file_name),
        None => module_root.join(file_name),
    }
}
