//! Layered loading of `.env` files onto an environment store.
//!
//! Responsibilities:
//! - Read and parse individual files (`read_file`).
//! - Layer an ordered list of files onto a store (`DotenvLoader`, `load_files`).
//! - Report how many keys each file applied or skipped.
//!
//! Does NOT handle:
//! - The file grammar (see `parser.rs`).
//! - Binding values onto records (see `bind/`).
//!
//! Invariants / Assumptions:
//! - A missing file is an error, not a silent skip.
//! - Values are never logged; only paths, keys, and counts.

mod builder;
mod error;
mod report;

use std::path::Path;

pub use builder::{DotenvLoader, load_files, load_files_into};
pub use error::LoadError;
pub use report::{FileReport, LoadSummary};

use crate::parser::{self, EnvMap};

/// Reads and parses one `.env` file without touching any store.
pub fn read_file(path: impl AsRef<Path>) -> Result<EnvMap, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parser::parse(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests;
