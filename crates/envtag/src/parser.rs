//! Parser for `.env`-style files.
//!
//! Responsibilities:
//! - Turn raw file bytes into a key/value map.
//! - Enforce the file grammar: full-line comments, `KEY=value`, quoted values,
//!   end-of-line comments outside quotes, whitespace trimming.
//!
//! Does NOT handle:
//! - Reading files from disk or merging maps into an environment (see `loader/`).
//! - Variable interpolation or line continuations (not part of the grammar).
//!
//! Invariants:
//! - `\r\n` is normalized to `\n` before parsing.
//! - Parsing either returns the whole map or an error; no partial result escapes.
//! - A repeated key keeps its last value.
//! - Errors report the line number only, NEVER the line content, so secrets in
//!   malformed files do not leak into logs.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::constants::{COMMENT_CHAR, KEY_VALUE_DELIMITER, QUOTE_CHAR};

/// Key/value pairs parsed from one file, ordered by key.
pub type EnvMap = BTreeMap<String, String>;

/// Syntax errors in a `.env` file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A key was started but no `=` follows it.
    #[error("malformed line {line}: missing '=' in environment variable")]
    MissingDelimiter { line: usize },

    /// A quoted value is never closed.
    #[error("malformed value on line {line}: missing end quote '\"' in environment variable")]
    MissingEndQuote { line: usize },

    /// The input is not UTF-8.
    #[error("input is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Parses the contents of a `.env` file.
///
/// # Errors
///
/// Returns `ParseError::MissingDelimiter` when a key has no `=`,
/// `ParseError::MissingEndQuote` when a quoted value is not closed, and
/// `ParseError::InvalidUtf8` when `src` is not UTF-8.
pub fn parse(src: &[u8]) -> Result<EnvMap, ParseError> {
    let text = std::str::from_utf8(src).map_err(|e| ParseError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })?;
    parse_str(text)
}

/// Parses `.env` content that is already a string.
pub fn parse_str(text: &str) -> Result<EnvMap, ParseError> {
    let normalized = text.replace("\r\n", "\n");
    let mut cursor = Cursor::new(&normalized);
    let mut map = EnvMap::new();

    while cursor.skip_to_line_start() {
        let key = cursor.read_key()?;
        let value = cursor.read_value()?;
        map.insert(key, value);
    }

    Ok(map)
}

/// Position within the normalized source.
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// 1-based line number of byte offset `pos`.
    fn line_at(&self, pos: usize) -> usize {
        self.src[..pos].matches('\n').count() + 1
    }

    /// Advances to the start of the next key, skipping whitespace, blank lines,
    /// and full-line comments. Returns false at end of input.
    fn skip_to_line_start(&mut self) -> bool {
        loop {
            let rest = self.rest();
            let Some(offset) = rest.find(|c: char| !c.is_whitespace()) else {
                self.pos = self.src.len();
                return false;
            };
            self.pos += offset;

            if !self.rest().starts_with(COMMENT_CHAR) {
                return true;
            }
            match self.rest().find('\n') {
                Some(newline) => self.pos += newline,
                None => {
                    self.pos = self.src.len();
                    return false;
                }
            }
        }
    }

    /// Reads everything up to the next `=` as the key.
    fn read_key(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        let Some(delimiter) = self.rest().find(KEY_VALUE_DELIMITER) else {
            return Err(ParseError::MissingDelimiter {
                line: self.line_at(start),
            });
        };
        let key = self.rest()[..delimiter].trim().to_string();
        self.pos += delimiter + KEY_VALUE_DELIMITER.len_utf8();
        Ok(key)
    }

    /// Reads a quoted or unquoted value and leaves the cursor on the next line.
    fn read_value(&mut self) -> Result<String, ParseError> {
        // Only same-line whitespace is skipped: `KEY=` followed by a newline is
        // an empty value, not the start of a value on the next line.
        let rest = self.rest();
        let leading = rest
            .find(|c: char| c == '\n' || !c.is_whitespace())
            .unwrap_or(rest.len());
        self.pos += leading;

        if self.rest().starts_with(QUOTE_CHAR) {
            self.read_quoted_value()
        } else {
            Ok(self.read_unquoted_value())
        }
    }

    fn read_quoted_value(&mut self) -> Result<String, ParseError> {
        let open = self.pos;
        self.pos += QUOTE_CHAR.len_utf8();

        let Some(close) = self.rest().find(QUOTE_CHAR) else {
            return Err(ParseError::MissingEndQuote {
                line: self.line_at(open),
            });
        };
        let value = self.rest()[..close].to_string();
        self.pos += close + QUOTE_CHAR.len_utf8();

        // Anything after the closing quote on the same line is discarded.
        self.skip_past_newline();
        Ok(value)
    }

    fn read_unquoted_value(&mut self) -> String {
        let rest = self.rest();
        let line = match rest.find('\n') {
            Some(newline) => &rest[..newline],
            None => rest,
        };
        self.skip_past_newline();

        strip_inline_comment(line).trim().to_string()
    }

    fn skip_past_newline(&mut self) {
        match self.rest().find('\n') {
            Some(newline) => self.pos += newline + 1,
            None => self.pos = self.src.len(),
        }
    }
}

/// Cuts an unquoted value at the first `#` preceded by whitespace.
///
/// A `#` at the very start of the value, or glued to the previous character
/// (`pass#word`), is part of the value.
fn strip_inline_comment(value: &str) -> &str {
    let mut previous: Option<char> = None;
    for (index, c) in value.char_indices() {
        if c == COMMENT_CHAR && previous.is_some_and(char::is_whitespace) {
            return &value[..index];
        }
        previous = Some(c);
    }
    value
}
