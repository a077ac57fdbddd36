//! Tests for record binding.
//!
//! Responsibilities:
//! - Test field binding, required/default policy, and coercion failures.
//! - Test nested records and the field paths reported for their failures.
//!
//! Does NOT handle:
//! - Directive grammar and per-type coercion (tested next to those modules).
//!
//! Invariants:
//! - Tests bind from `MemoryEnv` unless they exercise `ProcessEnv`; those use
//!   `serial_test` and restore every variable they touch.
