//! Get command implementation.
//!
//! Responsibilities:
//! - Layer the files onto the process environment and print one variable.
//!
//! Invariants / Assumptions:
//! - Variables already set in the process environment are overwritten only
//!   by the first file.
//! - An empty value counts as absent, so `--default` applies to it.

use anyhow::Result;
use envtag::{EnvStore, ProcessEnv};

use crate::args::FileArgs;
use crate::error::CommandError;

/// Run the get command.
pub fn run(key: &str, files: &FileArgs, default: Option<&str>) -> Result<()> {
    let mut env = ProcessEnv::new();
    files.loader().load_into(&mut env)?;

    let value = match default {
        Some(fallback) => env.string_or(key, fallback),
        None => env
            .lookup(key)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| CommandError::KeyNotFound(key.to_string()))?,
    };

    println!("{value}");
    Ok(())
}
