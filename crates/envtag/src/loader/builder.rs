//! Builder for layered `.env` loading.
//!
//! Responsibilities:
//! - Collect the ordered file list and layer each file onto a store.
//!
//! Invariants / Assumptions:
//! - The first file overwrites existing keys; every later file only fills
//!   keys the store does not hold at the time that file is applied.
//! - Files are applied strictly in the order given.
//! - An empty file list means the single default file (`.env`).
//! - The first failure stops loading. Keys applied by earlier files stay.

use std::path::{Path, PathBuf};

use super::error::LoadError;
use super::read_file;
use super::report::{FileReport, LoadSummary};
use crate::constants::DEFAULT_ENV_FILE;
use crate::env::{EnvStore, ProcessEnv};
use crate::parser::EnvMap;

/// Loads one or more `.env` files onto an environment store.
#[derive(Debug, Clone, Default)]
pub struct DotenvLoader {
    files: Vec<PathBuf>,
}

impl DotenvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a file to the load order.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Appends several files to the load order.
    pub fn with_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(paths.into_iter().map(Into::into));
        self
    }

    /// The files that will be loaded, in order, with the default applied.
    pub fn files(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            vec![PathBuf::from(DEFAULT_ENV_FILE)]
        } else {
            self.files.clone()
        }
    }

    /// Layers every file onto the process environment.
    ///
    /// Must run before other threads read the environment.
    pub fn load(&self) -> Result<LoadSummary, LoadError> {
        self.load_into(&mut ProcessEnv::new())
    }

    /// Layers every file onto `env`.
    ///
    /// # Errors
    ///
    /// Returns the first read, parse, or store failure, tagged with its file.
    pub fn load_into(&self, env: &mut dyn EnvStore) -> Result<LoadSummary, LoadError> {
        let mut summary = LoadSummary::default();

        for (index, path) in self.files().into_iter().enumerate() {
            let vars = read_file(&path)?;
            let overwrite = index == 0;
            let report = apply(env, path, &vars, overwrite)?;

            tracing::debug!(
                path = %report.path.display(),
                applied = report.applied,
                skipped = report.skipped,
                overwrite,
                "Loaded env file"
            );
            summary.files.push(report);
        }

        Ok(summary)
    }
}

fn apply(
    env: &mut dyn EnvStore,
    path: PathBuf,
    vars: &EnvMap,
    overwrite: bool,
) -> Result<FileReport, LoadError> {
    let mut report = FileReport::new(path);

    for (key, value) in vars {
        if key.is_empty() {
            tracing::warn!(path = %report.path.display(), "Skipping entry with empty key");
            report.skipped += 1;
            continue;
        }
        if !overwrite && env.contains(key) {
            tracing::trace!(key = %key, "Key already set, keeping existing value");
            report.skipped += 1;
            continue;
        }
        env.set(key, value).map_err(|source| LoadError::Store {
            path: report.path.clone(),
            source,
        })?;
        report.applied += 1;
    }

    Ok(report)
}

/// Layers `files` onto the process environment.
///
/// See [`DotenvLoader`] for the merge rules.
pub fn load_files<P: AsRef<Path>>(files: &[P]) -> Result<LoadSummary, LoadError> {
    load_files_into(&mut ProcessEnv::new(), files)
}

/// Layers `files` onto `env`.
pub fn load_files_into<P: AsRef<Path>>(
    env: &mut dyn EnvStore,
    files: &[P],
) -> Result<LoadSummary, LoadError> {
    DotenvLoader::new()
        .with_files(files.iter().map(|p| p.as_ref().to_path_buf()))
        .load_into(env)
}
