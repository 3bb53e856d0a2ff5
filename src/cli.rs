//! CLI argument parsing module for modzip

use clap::Parser;
use std::path::PathBuf;

/// Packages a Go module directory into a version-addressed zip archive
#[derive(Parser, Debug, Clone)]
#[command(
    name = "modzip",
    about = "Package a module directory into a version-addressed zip archive",
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Semantic version to create a zip file for (canonical form, e.g. v1.2.3)
    #[arg(long = "version", value_name = "SEMVER")]
    pub version: String,

    /// Output file path (defaults to <version>.zip next to the module root)
    #[arg(short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}
