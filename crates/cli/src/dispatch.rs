//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup and exit codes (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check { files, format } => commands::check::run(&files, format),
        Commands::Print {
            files,
            format,
            keys_only,
        } => commands::print::run(&files, format, keys_only),
        Commands::Get {
            key,
            files,
            default,
        } => commands::get::run(&key, &files, default.as_deref()),
    }
}
