//! Print command implementation.
//!
//! Responsibilities:
//! - Layer the files into an isolated in-memory store.
//! - Render the merged variables as `KEY=value` lines or JSON.
//!
//! Invariants / Assumptions:
//! - The process environment is neither read nor modified, so the output
//!   depends only on the files.
//! - `env` output parses back to the same map, except for values that start
//!   with a quote or contain both a quote and whitespace or `#`. The `.env`
//!   grammar has no escapes, so those values cannot be written back.

use std::borrow::Cow;

use anyhow::Result;
use envtag::MemoryEnv;

use crate::args::{FileArgs, OutputFormat};

/// Run the print command.
pub fn run(files: &FileArgs, format: OutputFormat, keys_only: bool) -> Result<()> {
    let mut env = MemoryEnv::new();
    let summary = files.loader().load_into(&mut env)?;
    tracing::debug!(
        files = summary.files.len(),
        applied = summary.applied(),
        skipped = summary.skipped(),
        "Merged env files"
    );

    print!("{}", render(&env, format, keys_only)?);
    Ok(())
}

fn render(env: &MemoryEnv, format: OutputFormat, keys_only: bool) -> Result<String> {
    let mut out = match (format, keys_only) {
        (OutputFormat::Env, true) => env.iter().map(|(key, _)| format!("{key}\n")).collect(),
        (OutputFormat::Env, false) => env
            .iter()
            .map(|(key, value)| format!("{key}={}\n", render_value(value)))
            .collect(),
        (OutputFormat::Json, true) => {
            let keys: Vec<&str> = env.iter().map(|(key, _)| key).collect();
            serde_json::to_string_pretty(&keys)?
        }
        (OutputFormat::Json, false) => {
            let map: serde_json::Map<String, serde_json::Value> = env
                .iter()
                .map(|(key, value)| (key.to_string(), value.into()))
                .collect();
            serde_json::to_string_pretty(&map)?
        }
    };
    if format == OutputFormat::Json {
        out.push('\n');
    }
    Ok(out)
}

/// Quotes values that would otherwise be trimmed or cut at a comment.
fn render_value(value: &str) -> Cow<'_, str> {
    let needs_quotes = value.contains(|c: char| c.is_whitespace() || c == '#');
    if needs_quotes && !value.contains('"') {
        Cow::Owned(format!("\"{value}\""))
    } else {
        Cow::Borrowed(value)
    }
}
