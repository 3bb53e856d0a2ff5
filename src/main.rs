//! modzip - packages a Go module directory into a version-addressed
//! zip archive suitable for a module proxy
//!
//! Locates the nearest go.mod above the working directory, reads the
//! declared module path, and archives the module tree under a
//! <module>@<version>/ prefix.

use clap::Parser;
use modzip::cli::CliArgs;
use modzip::orchestrator::Orchestrator;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    let working_dir = std::env::current_dir()?;
    if args.verbose {
        eprintln!("modzip v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("working directory: {}", working_dir.display());
    }

    let orchestrator = Orchestrator::new(args);
    let output_path = orchestrator.run(&working_dir)?;
    eprintln!("wrote {}", output_path.display());
    Ok(())
}
