//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failures.
//! - Map library and command errors found in an `anyhow` chain to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Clap usage errors keep clap's own exit code (2).

use std::io::ErrorKind;

use envtag::LoadError;
use thiserror::Error;

/// Structured exit codes for envtag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// A file could not be read for a reason other than not existing.
    IoError = 3,

    /// A requested file or key does not exist.
    NotFound = 4,

    /// A file exists but is not valid `.env` syntax.
    ///
    /// Scripts should fix the file and not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Command-level failures that are not library errors.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("environment variable {0} is not set and no default was given")]
    KeyNotFound(String),
}

impl From<&LoadError> for ExitCode {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::Read { source, .. } if source.kind() == ErrorKind::NotFound => {
                ExitCode::NotFound
            }
            LoadError::Read { .. } => ExitCode::IoError,
            LoadError::Parse { .. } => ExitCode::ValidationError,
            LoadError::Store { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(load_err) = cause.downcast_ref::<LoadError>() {
                return ExitCode::from(load_err);
            }
            if let Some(CommandError::KeyNotFound(_)) = cause.downcast_ref::<CommandError>() {
                return ExitCode::NotFound;
            }
        }
        ExitCode::GeneralError
    }
}
