//! Centralized constants for the envtag workspace.
//!
//! This module contains the file names and directive tokens shared by the
//! loader, the binder, and the CLI.

// =============================================================================
// Files
// =============================================================================

/// File loaded when no file names are given.
pub const DEFAULT_ENV_FILE: &str = ".env";

// =============================================================================
// File grammar
// =============================================================================

/// Separates a key from its value.
pub const KEY_VALUE_DELIMITER: char = '=';

/// Starts a full-line or end-of-line comment.
pub const COMMENT_CHAR: char = '#';

/// Opens and closes a verbatim value.
pub const QUOTE_CHAR: char = '"';

// =============================================================================
// Binding directives
// =============================================================================

/// Separates the parts of a binding directive.
pub const DIRECTIVE_SEPARATOR: char = ',';

/// Directive part marking a field as required.
pub const DIRECTIVE_REQUIRED: &str = "required";

/// Directive prefix introducing a default value.
pub const DIRECTIVE_DEFAULT_PREFIX: &str = "default=";
