//! Check command implementation.
//!
//! Responsibilities:
//! - Parse each file on its own and report how many keys it defines.
//!
//! Does NOT handle:
//! - Merging files (see `print`).
//!
//! Invariants / Assumptions:
//! - Stops at the first file that fails to read or parse.
//! - Never prints values.

use anyhow::Result;
use serde::Serialize;

use crate::args::{FileArgs, OutputFormat};

#[derive(Debug, Serialize)]
struct FileCheck {
    path: String,
    keys: usize,
}

/// Run the check command.
pub fn run(files: &FileArgs, format: OutputFormat) -> Result<()> {
    let mut checks = Vec::new();

    for path in files.loader().files() {
        let vars = envtag::read_file(&path)?;
        tracing::debug!(path = %path.display(), keys = vars.len(), "File parsed");

        let check = FileCheck {
            path: path.display().to_string(),
            keys: vars.len(),
        };
        if format == OutputFormat::Env {
            println!("{}: {} keys", check.path, check.keys);
        }
        checks.push(check);
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&checks)?);
    }
    Ok(())
}
