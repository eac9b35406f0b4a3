//! ARC investigation metadata → RO-Crate metadata converter.
//!
//! A one-shot pipeline: locate `<root>/.arc/Json/isa.investigation.json`,
//! parse it, build the RO-Crate JSON-LD graph, and write
//! `<root>/ro-crate-metadata.json`.

pub mod build;
pub mod emit;
pub mod error;
pub mod locate;
pub mod parse;

use std::fs;
use std::path::{Path, PathBuf};

use crate::emit::RoCrate;
use crate::error::ConvertError;

/// Result of running the converter against a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// The metadata file was written to this path.
    Written(PathBuf),
    /// The investigation file was not found at this path; nothing was written.
    MissingInput(PathBuf),
}

/// Convert investigation JSON into an RO-Crate document.
pub fn convert(json: &str) -> Result<RoCrate, ConvertError> {
    let investigation = parse::parse(json)?;
    let graph = build::build(&investigation)?;
    Ok(emit::finalize(graph))
}

/// Run the full pipeline against an ARC root directory.
///
/// A missing investigation file is not an error: the caller decides how to
/// report it (the CLI prints a diagnostic and still exits successfully).
pub fn convert_dir(root: &Path) -> Result<ConvertOutcome, ConvertError> {
    let input = locate::investigation_path(root);
    if !input.exists() {
        return Ok(ConvertOutcome::MissingInput(input));
    }

    let json = fs::read_to_string(&input).map_err(|source| ConvertError::Read {
        path: input.clone(),
        source,
    })?;
    let doc = convert(&json)?;
    let rendered = emit::render(&doc)?;

    let output = locate::metadata_path(root);
    fs::write(&output, &rendered).map_err(|source| ConvertError::Write {
        path: output.clone(),
        source,
    })?;

    Ok(ConvertOutcome::Written(output))
}
