//! Per-file results of a layered load.

use std::path::PathBuf;

/// What loading one file did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    /// Keys written to the store.
    pub applied: usize,
    /// Keys left alone, either because the store already held them or
    /// because the key was empty.
    pub skipped: usize,
}

impl FileReport {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            applied: 0,
            skipped: 0,
        }
    }
}

/// Reports for every file loaded, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub files: Vec<FileReport>,
}

impl LoadSummary {
    /// Total keys written across all files.
    pub fn applied(&self) -> usize {
        self.files.iter().map(|f| f.applied).sum()
    }

    /// Total keys skipped across all files.
    pub fn skipped(&self) -> usize {
        self.files.iter().map(|f| f.skipped).sum()
    }
}
