//! Error types for layered `.env` loading.
//!
//! Responsibilities:
//! - Wrap read, parse, and store failures with the file they came from.
//!
//! Invariants:
//! - Every variant carries the path of the file being loaded.
//! - Messages NEVER include values from the file; parse errors report the
//!   line number only.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::env::EnvError;
use crate::parser::ParseError;

/// Errors that can occur while loading `.env` files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to load file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("failed to load file '{}': {source}", path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: EnvError,
    },
}

impl LoadError {
    /// The file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Read { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Store { path, .. } => path,
        }
    }

    /// Returns true if the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Read { source, .. } if source.kind() == ErrorKind::NotFound)
    }
}
