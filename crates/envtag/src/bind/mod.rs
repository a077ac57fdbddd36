//! Typed binding of environment values onto configuration records.
//!
//! Responsibilities:
//! - Parse per-field directives (`directive.rs`).
//! - Coerce raw strings into field types (`value.rs`, `duration.rs`, `timestamp.rs`).
//! - Drive records through `EnvBind` and report failures with a field path (`binder.rs`).
//!
//! Does NOT handle:
//! - Reading or layering `.env` files (see `loader/`).
//!
//! Invariants:
//! - Binding only reads the store; it never writes to it.

mod binder;
mod directive;
mod duration;
mod error;
mod timestamp;
mod value;

pub use binder::{Binder, EnvBind, bind, from_env};
pub use directive::{Directive, DirectiveError};
pub use duration::{DurationError, parse_duration};
pub use error::BindError;
pub use timestamp::parse_timestamp;
pub use value::{CoerceError, EnvValue, FieldKind, FieldValue};

#[cfg(test)]
mod tests;
