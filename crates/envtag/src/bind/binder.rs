//! Directive-driven binding of environment values onto records.
//!
//! Responsibilities:
//! - Walk a record through its `EnvBind` implementation, field by field.
//! - Resolve each field's directive, look up its key, apply the
//!   required/default policy, and coerce the value into the field type.
//! - Recurse into nested records and prefix their errors with the field name.
//!
//! Does NOT handle:
//! - Loading `.env` files (see `loader/`); the binder only reads a store.
//!
//! Invariants:
//! - A directive is parsed, and its errors reported, before any lookup for
//!   that field.
//! - An empty value counts as absent: it triggers the required error or the
//!   default just like a missing key.
//! - An absent optional field without a default is coerced from the empty
//!   string: text fields become empty, every other kind fails to coerce.
//! - The first failing field aborts binding; fields bound before it keep
//!   their new values.

use super::directive::Directive;
use super::error::BindError;
use super::value::EnvValue;
use crate::env::EnvStore;

/// A record whose fields can be populated from an environment store.
///
/// Implementations register every bound field with [`Binder::field`] and
/// every nested record with [`Binder::nested`], in declaration order. Fields
/// that are not registered are left untouched.
pub trait EnvBind {
    fn bind_env(&mut self, binder: &mut Binder<'_>) -> Result<(), BindError>;
}

/// Reads field values from an environment store on behalf of a record.
pub struct Binder<'a> {
    env: &'a dyn EnvStore,
}

impl<'a> Binder<'a> {
    pub fn new(env: &'a dyn EnvStore) -> Self {
        Self { env }
    }

    /// Binds one field according to `directive`, e.g. `"DB_PORT,default=5432"`.
    pub fn field<T: EnvValue>(
        &mut self,
        name: &str,
        slot: &mut T,
        directive: &str,
    ) -> Result<(), BindError> {
        let directive = Directive::parse(directive).map_err(|source| BindError::Directive {
            field: name.to_string(),
            source,
        })?;

        let raw = match self.env.lookup(&directive.key).filter(|v| !v.is_empty()) {
            Some(value) => value,
            None if directive.required => {
                return Err(BindError::MissingRequired {
                    field: name.to_string(),
                    key: directive.key,
                });
            }
            None => match directive.default {
                Some(ref default) => {
                    tracing::trace!(field = name, key = %directive.key, "Using default value");
                    default.clone()
                }
                None => {
                    tracing::trace!(field = name, key = %directive.key, "Optional key not set");
                    String::new()
                }
            },
        };

        *slot = T::from_env_str(&raw).map_err(|source| BindError::Coerce {
            field: name.to_string(),
            key: directive.key,
            source,
        })?;
        Ok(())
    }

    /// Binds a nested record, prefixing any failure with `name`.
    pub fn nested<R: EnvBind + ?Sized>(
        &mut self,
        name: &str,
        record: &mut R,
    ) -> Result<(), BindError> {
        let mut child = Binder::new(self.env);
        record.bind_env(&mut child).map_err(|source| BindError::Nested {
            field: name.to_string(),
            source: Box::new(source),
        })
    }
}

/// Populates `record` from `env`.
pub fn bind<R: EnvBind + ?Sized>(env: &dyn EnvStore, record: &mut R) -> Result<(), BindError> {
    let mut binder = Binder::new(env);
    let result = record.bind_env(&mut binder);
    if let Err(ref e) = result {
        tracing::debug!(field = %e.field_path(), "Binding failed");
    }
    result
}

/// Builds a record from its `Default` value and populates it from `env`.
pub fn from_env<R: EnvBind + Default>(env: &dyn EnvStore) -> Result<R, BindError> {
    let mut record = R::default();
    bind(env, &mut record)?;
    Ok(record)
}
