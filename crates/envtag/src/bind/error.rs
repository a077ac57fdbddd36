//! Error types for binding records.
//!
//! Invariants:
//! - Every variant names the field it came from; nested failures keep the
//!   full path through `BindError::Nested`.
//! - Coercion errors include the offending value, directive and missing-key
//!   errors do not.

use thiserror::Error;

use super::directive::DirectiveError;
use super::value::CoerceError;

/// Errors that can occur while binding a record from an environment store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindError {
    #[error("error on field {field}: {source}")]
    Directive {
        field: String,
        #[source]
        source: DirectiveError,
    },

    #[error("error on field {field}: missing required env var {key}")]
    MissingRequired { field: String, key: String },

    #[error("error on field {field} ({key}): {source}")]
    Coerce {
        field: String,
        key: String,
        #[source]
        source: CoerceError,
    },

    #[error("in {field}: {source}")]
    Nested {
        field: String,
        #[source]
        source: Box<BindError>,
    },
}

impl BindError {
    /// Dotted path from the top-level record to the failing field,
    /// e.g. `"database.url"`.
    pub fn field_path(&self) -> String {
        match self {
            BindError::Nested { field, source } => format!("{field}.{}", source.field_path()),
            BindError::Directive { field, .. }
            | BindError::MissingRequired { field, .. }
            | BindError::Coerce { field, .. } => field.clone(),
        }
    }

    /// The innermost error, with all `Nested` layers removed.
    pub fn root(&self) -> &BindError {
        match self {
            BindError::Nested { source, .. } => source.root(),
            other => other,
        }
    }

    /// The environment key involved, when the failure concerns one.
    pub fn key(&self) -> Option<&str> {
        match self.root() {
            BindError::MissingRequired { key, .. } | BindError::Coerce { key, .. } => {
                Some(key.as_str())
            }
            BindError::Directive {
                source: DirectiveError::RequiredWithDefault { key },
                ..
            } => Some(key.as_str()),
            _ => None,
        }
    }
}
