//! Environment stores consulted by the loader, the binder, and lookup helpers.
//!
//! Responsibilities:
//! - Define the `EnvStore` seam over "a string key/value environment".
//! - Provide `ProcessEnv` (the real process environment) and `MemoryEnv`
//!   (an isolated in-memory store for tests and dry runs).
//! - Provide single-key lookup helpers with explicit fallback values.
//!
//! Does NOT handle:
//! - Parsing `.env` files (see `parser.rs`).
//! - Layering files onto a store (see `loader/`).
//!
//! Invariants:
//! - Stores only add or overwrite; nothing here removes a key.
//! - `ProcessEnv` is process-global: callers must finish loading before
//!   concurrent readers start binding.
//! - Lookup helpers never log values.

use std::collections::BTreeMap;

use chrono::TimeDelta;
use thiserror::Error;

use crate::bind::{FieldKind, FieldValue, parse_duration};

/// Errors raised when a store refuses a write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("invalid environment variable name {key:?}")]
    InvalidKey { key: String },

    #[error("invalid value for environment variable {key}: contains a NUL byte")]
    InvalidValue { key: String },
}

/// A string key/value environment.
pub trait EnvStore {
    /// Returns the value for `key`, or `None` if the key is not present.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Adds or overwrites `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError>;

    /// Returns true if `key` is present, even with an empty value.
    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Returns the value of `key`, or `fallback` when it is absent or empty.
    fn string_or(&self, key: &str, fallback: &str) -> String {
        match self.lookup(key) {
            Some(value) if !value.is_empty() => value,
            _ => fallback.to_string(),
        }
    }

    /// Returns `key` parsed as a base-10 integer, or `fallback` when it is
    /// absent or does not parse.
    fn int_or(&self, key: &str, fallback: i64) -> i64 {
        match self.lookup(key).map(|v| FieldKind::Int.coerce(&v)) {
            Some(Ok(FieldValue::Int(value))) => value,
            _ => fallback,
        }
    }

    /// Returns `key` parsed as a boolean, or `fallback` when it is absent or
    /// does not parse.
    fn bool_or(&self, key: &str, fallback: bool) -> bool {
        match self.lookup(key).map(|v| FieldKind::Bool.coerce(&v)) {
            Some(Ok(FieldValue::Bool(value))) => value,
            _ => fallback,
        }
    }

    /// Returns `key` parsed as a duration such as `"1m30s"`, or `fallback`
    /// when it is absent or does not parse.
    fn duration_or(&self, key: &str, fallback: TimeDelta) -> TimeDelta {
        self.lookup(key)
            .and_then(|v| parse_duration(&v).ok())
            .unwrap_or(fallback)
    }

    /// Returns the value of `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is absent or empty.
    fn must_string(&self, key: &str) -> String {
        let value = self.string_or(key, "");
        if value.is_empty() {
            panic!("environment variable {key} is not defined");
        }
        value
    }
}

/// The operating system environment of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvStore for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).and_then(|v| v.into_string().ok())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return Err(EnvError::InvalidKey {
                key: key.to_string(),
            });
        }
        if value.contains('\0') {
            return Err(EnvError::InvalidValue {
                key: key.to_string(),
            });
        }
        // SAFETY: mutating the process environment is only sound while no other
        // thread reads it. Loading is expected to happen once at startup, before
        // any concurrent reader exists.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}

/// An isolated, ordered in-memory environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates over all variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consumes the store and returns the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.vars
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvStore for MemoryEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }
}
