//! Binding directive parsing.
//!
//! A directive is the per-field string `"<ENV_KEY>[,required][,default=<value>]"`.

use std::str::FromStr;

use thiserror::Error;

use crate::constants::{DIRECTIVE_DEFAULT_PREFIX, DIRECTIVE_REQUIRED, DIRECTIVE_SEPARATOR};

/// Errors in a binding directive. These are authoring errors in the record
/// definition, detected before any environment lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("environment variable key must be set")]
    EmptyKey,

    #[error("cannot be both required and have default: {key}")]
    RequiredWithDefault { key: String },
}

/// Parsed form of a binding directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Environment variable name.
    pub key: String,
    /// Fail binding when the variable is absent or empty.
    pub required: bool,
    /// Value used when the variable is absent or empty.
    pub default: Option<String>,
}

impl Directive {
    /// Parses a directive such as `"DB_PORT,default=5432"` or `"DB_NAME,required"`.
    ///
    /// Parts after the key are trimmed before matching. The default value is
    /// everything after `default=` in its part, so it cannot contain a comma.
    /// Unrecognized parts are ignored.
    pub fn parse(raw: &str) -> Result<Self, DirectiveError> {
        let mut parts = raw.split(DIRECTIVE_SEPARATOR);

        let key = parts.next().unwrap_or_default().trim();
        if key.is_empty() {
            return Err(DirectiveError::EmptyKey);
        }

        let mut directive = Directive {
            key: key.to_string(),
            required: false,
            default: None,
        };

        for part in parts.map(str::trim) {
            if part == DIRECTIVE_REQUIRED {
                directive.required = true;
            } else if let Some(value) = part.strip_prefix(DIRECTIVE_DEFAULT_PREFIX) {
                directive.default = Some(value.to_string());
            } else {
                tracing::warn!(
                    key = %directive.key,
                    option = part,
                    "Ignoring unknown directive option"
                );
            }
        }

        if directive.required && directive.has_default() {
            return Err(DirectiveError::RequiredWithDefault {
                key: directive.key,
            });
        }

        Ok(directive)
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

impl FromStr for Directive {
    type Err = DirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_only() {
        let directive = Directive::parse("APP_NAME").unwrap();
        assert_eq!(directive.key, "APP_NAME");
        assert!(!directive.required);
        assert!(!directive.has_default());
    }

    #[test]
    fn test_parse_trims_key_and_parts() {
        let directive = Directive::parse("  DB_NAME , required ").unwrap();
        assert_eq!(directive.key, "DB_NAME");
        assert!(directive.required);
    }

    #[test]
    fn test_parse_default_keeps_everything_after_prefix() {
        let directive =
            Directive::parse("MAILER_FROM,default=Appname <noreply@appname.com>").unwrap();
        assert_eq!(
            directive.default.as_deref(),
            Some("Appname <noreply@appname.com>")
        );

        let directive = Directive::parse("ADDR,default=:9090").unwrap();
        assert_eq!(directive.default.as_deref(), Some(":9090"));

        let directive = Directive::parse("QUERY,default=a=b").unwrap();
        assert_eq!(directive.default.as_deref(), Some("a=b"));
    }

    #[test]
    fn test_parse_empty_default_is_still_a_default() {
        let directive = Directive::parse("OPTIONAL,default=").unwrap();
        assert!(directive.has_default());
        assert_eq!(directive.default.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_empty_key_fails() {
        assert_eq!(Directive::parse(""), Err(DirectiveError::EmptyKey));
        assert_eq!(Directive::parse("  ,required"), Err(DirectiveError::EmptyKey));
    }

    #[test]
    fn test_required_and_default_are_mutually_exclusive() {
        let err = Directive::parse("KEY,required,default=5").unwrap_err();
        assert_eq!(
            err,
            DirectiveError::RequiredWithDefault {
                key: "KEY".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "cannot be both required and have default: KEY"
        );

        // Order of parts does not matter.
        assert!(Directive::parse("KEY,default=5,required").is_err());
    }

    #[test]
    fn test_unknown_parts_are_ignored() {
        let directive = Directive::parse("KEY,secret,optional").unwrap();
        assert_eq!(directive.key, "KEY");
        assert!(!directive.required);
        assert!(!directive.has_default());
    }

    #[test]
    fn test_from_str() {
        let directive: Directive = "PORT,default=8080".parse().unwrap();
        assert_eq!(directive.default.as_deref(), Some("8080"));
    }
}
