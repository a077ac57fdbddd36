//! Layered `.env` loading and typed binding of environment variables.
//!
//! This crate provides a parser for `.env`-style files, a loader that layers
//! one or more of those files onto an environment store, and a binder that
//! populates typed configuration records from that store using per-field
//! directives such as `"DB_PORT,default=5432"`.
//!
//! ```
//! use envtag::{Binder, BindError, EnvBind, MemoryEnv};
//! use chrono::TimeDelta;
//!
//! #[derive(Debug, Default)]
//! struct ApiConfig {
//!     port: u16,
//!     read_timeout: TimeDelta,
//! }
//!
//! impl EnvBind for ApiConfig {
//!     fn bind_env(&mut self, binder: &mut Binder<'_>) -> Result<(), BindError> {
//!         binder.field("port", &mut self.port, "API_PORT,default=8080")?;
//!         binder.field("read_timeout", &mut self.read_timeout, "API_READ_TIMEOUT,default=5s")?;
//!         Ok(())
//!     }
//! }
//!
//! let env = MemoryEnv::from_iter([("API_PORT", "9090")]);
//! let config: ApiConfig = envtag::from_env(&env).unwrap();
//! assert_eq!(config.port, 9090);
//! assert_eq!(config.read_timeout, TimeDelta::seconds(5));
//! ```

mod bind;
pub mod constants;
mod env;
mod loader;
pub mod parser;

pub use bind::{
    BindError, Binder, CoerceError, Directive, DirectiveError, DurationError, EnvBind, EnvValue,
    FieldKind, FieldValue, bind, from_env, parse_duration, parse_timestamp,
};
pub use env::{EnvError, EnvStore, MemoryEnv, ProcessEnv};
pub use loader::{
    DotenvLoader, FileReport, LoadError, LoadSummary, load_files, load_files_into, read_file,
};
pub use parser::{EnvMap, ParseError};
