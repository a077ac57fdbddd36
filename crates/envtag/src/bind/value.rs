//! Type-directed coercion of environment strings.
//!
//! Responsibilities:
//! - Define the closed set of supported field kinds (`FieldKind`) and the
//!   values they produce (`FieldValue`).
//! - Map Rust field types onto a kind through the `EnvValue` trait.
//!
//! Does NOT handle:
//! - Looking up keys or applying defaults (see `binder.rs`).
//!
//! Invariants:
//! - A new kind is added by extending `FieldKind`, `FieldValue`, and
//!   `FieldKind::coerce`; there is no open-ended conversion hook.
//! - Narrow integer targets reject out-of-range values instead of truncating.

use chrono::{DateTime, FixedOffset, TimeDelta};
use thiserror::Error;

use super::duration::{DurationError, parse_duration};
use super::timestamp::parse_timestamp;

/// Errors converting an environment string into a field value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    #[error("invalid int value {0:?}")]
    InvalidInt(String),

    #[error("invalid uint value {0:?}")]
    InvalidUint(String),

    #[error("invalid float value {0:?}")]
    InvalidFloat(String),

    #[error("invalid bool value {0:?} (expected true, false, 1, or 0)")]
    InvalidBool(String),

    #[error("invalid duration value: {0}")]
    InvalidDuration(#[from] DurationError),

    #[error("unknown time format: {0}")]
    UnknownTimeFormat(String),

    #[error("value {value} is out of range for {type_name}")]
    OutOfRange {
        value: String,
        type_name: &'static str,
    },

    #[error("negative duration {0} cannot be stored in an unsigned duration")]
    NegativeDuration(String),

    #[error("unsupported field type {type_name} for {kind:?} value")]
    UnsupportedType {
        type_name: &'static str,
        kind: FieldKind,
    },
}

/// The closed set of field kinds the binder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Int,
    Uint,
    Float,
    Bool,
    Duration,
    Timestamp,
}

/// A coerced value of some `FieldKind`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Duration(TimeDelta),
    Timestamp(DateTime<FixedOffset>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Uint(_) => FieldKind::Uint,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Duration(_) => FieldKind::Duration,
            FieldValue::Timestamp(_) => FieldKind::Timestamp,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" => Some(true),
        "0" => Some(false),
        _ if raw.eq_ignore_ascii_case("true") => Some(true),
        _ if raw.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

impl FieldKind {
    /// Converts `raw` into a value of this kind.
    pub fn coerce(self, raw: &str) -> Result<FieldValue, CoerceError> {
        match self {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Int => raw
                .parse()
                .map(FieldValue::Int)
                .map_err(|_| CoerceError::InvalidInt(raw.to_string())),
            FieldKind::Uint => raw
                .parse()
                .map(FieldValue::Uint)
                .map_err(|_| CoerceError::InvalidUint(raw.to_string())),
            FieldKind::Float => raw
                .parse()
                .map(FieldValue::Float)
                .map_err(|_| CoerceError::InvalidFloat(raw.to_string())),
            FieldKind::Bool => parse_bool(raw)
                .map(FieldValue::Bool)
                .ok_or_else(|| CoerceError::InvalidBool(raw.to_string())),
            FieldKind::Duration => Ok(FieldValue::Duration(parse_duration(raw)?)),
            FieldKind::Timestamp => parse_timestamp(raw)
                .map(FieldValue::Timestamp)
                .ok_or_else(|| CoerceError::UnknownTimeFormat(raw.to_string())),
        }
    }
}

/// A Rust type that can be bound from an environment string.
pub trait EnvValue: Sized {
    /// The kind used to coerce the raw string.
    const KIND: FieldKind;

    /// Converts a coerced value into `Self`.
    fn from_value(value: FieldValue) -> Result<Self, CoerceError>;

    /// Coerces `raw` straight into `Self`.
    fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
        Self::from_value(Self::KIND.coerce(raw)?)
    }
}

fn unsupported<T>(value: &FieldValue) -> CoerceError {
    CoerceError::UnsupportedType {
        type_name: std::any::type_name::<T>(),
        kind: value.kind(),
    }
}

impl EnvValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn from_value(value: FieldValue) -> Result<Self, CoerceError> {
        match value {
            FieldValue::Text(text) => Ok(text),
            other => Err(unsupported::<Self>(&other)),
        }
    }
}

macro_rules! impl_env_value_int {
    ($variant:ident, $kind:ident, $($ty:ty),+) => {
        $(
            impl EnvValue for $ty {
                const KIND: FieldKind = FieldKind::$kind;

                fn from_value(value: FieldValue) -> Result<Self, CoerceError> {
                    match value {
                        FieldValue::$variant(n) => {
                            <$ty>::try_from(n).map_err(|_| CoerceError::OutOfRange {
                                value: n.to_string(),
                                type_name: stringify!($ty),
                            })
                        }
                        other => Err(unsupported::<Self>(&other)),
                    }
                }
            }
        )+
    };
}

impl_env_value_int!(Int, Int, i8, i16, i32, i64, isize);
impl_env_value_int!(Uint, Uint, u8, u16, u32, u64, usize);

impl EnvValue for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn from_value(value: FieldValue) -> Result<Self, CoerceError> {
        match value {
            FieldValue::Float(n) => Ok(n),
            other => Err(unsupported::<Self>(&other)),
        }
    }
}

impl EnvValue for f32 {
    const KIND: FieldKind = FieldKind::Float;

    fn from_value(value: FieldValue) -> Result<Self, CoerceError> {
        match value {
            FieldValue::Float(n) => Ok(n as f32),
            other => Err(unsupported::<Self>(&other)),
        }
    }
}

impl EnvValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn from_value(value: FieldValue) -> Result<Self, CoerceError> {
        match value {
            FieldValue::Bool(b) => Ok(b),
            other => Err(unsupported::<Self>(&other)),
        }
    }
}

impl EnvValue for TimeDelta {
    const KIND: FieldKind = FieldKind::Duration;

    fn from_value(value: FieldValue) -> Result<Self, CoerceError> {
        match value {
            FieldValue::Duration(d) => Ok(d),
            other => Err(unsupported::<Self>(&other)),
        }
    }
}

impl EnvValue for std::time::Duration {
    const KIND: FieldKind = FieldKind::Duration;

    fn from_value(value: FieldValue) -> Result<Self, CoerceError> {
        match value {
            FieldValue::Duration(d) => d
                .to_std()
                .map_err(|_| CoerceError::NegativeDuration(d.to_string())),
            other => Err(unsupported::<Self>(&other)),
        }
    }
}

impl EnvValue for DateTime<FixedOffset> {
    const KIND: FieldKind = FieldKind::Timestamp;

    fn from_value(value: FieldValue) -> Result<Self, CoerceError> {
        match value {
            FieldValue::Timestamp(t) => Ok(t),
            other => Err(unsupported::<Self>(&other)),
        }
    }
}
