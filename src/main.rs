//! CLI: generate `ro-crate-metadata.json` for an ARC root directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use arc_rocrate::locate::{self, INVESTIGATION_SUFFIX, METADATA_FILE_NAME};
use arc_rocrate::{ConvertOutcome, convert_dir};

#[derive(Parser, Debug)]
#[command(name = "arc-rocrate")]
#[command(about = "Generate an RO-Crate metadata file from ARC investigation metadata")]
struct Args {
    /// Path to the ARC root directory (defaults to the current directory)
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let arg = args.root.unwrap_or_default();
    let root = match locate::resolve_root(&arg) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error resolving root directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Generating '{}' file for '{}'",
        METADATA_FILE_NAME,
        root.display()
    );

    match convert_dir(&root) {
        Ok(ConvertOutcome::Written(_)) => ExitCode::SUCCESS,
        // Historical contract: a missing investigation file is diagnosed but
        // still exits with success status.
        Ok(ConvertOutcome::MissingInput(_)) => {
            eprintln!(
                "Directory '{}' contains no '{}' file.",
                root.display(),
                INVESTIGATION_SUFFIX
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
