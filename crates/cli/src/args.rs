//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve the `.env` file list and output format from flags or environment.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use envtag::DotenvLoader;

#[derive(Parser)]
#[command(name = "envtag")]
#[command(about = "Inspect and query layered .env files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envtag check\n  envtag print -f .env -f .env.local --format json\n  envtag get DATABASE_URL -f .env.production\n  envtag get PORT --default 8080\n"
)]
pub struct Cli {
    /// Log output format for diagnostics written to stderr
    #[arg(long, global = true, env = "ENVTAG_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse every file and report how many keys each defines
    Check {
        #[command(flatten)]
        files: FileArgs,

        /// Output format
        #[arg(long, env = "ENVTAG_FORMAT", default_value = "env")]
        format: OutputFormat,
    },

    /// Layer the files in isolation and print the merged result
    Print {
        #[command(flatten)]
        files: FileArgs,

        /// Output format
        #[arg(long, env = "ENVTAG_FORMAT", default_value = "env")]
        format: OutputFormat,

        /// Print only the key names
        #[arg(long)]
        keys_only: bool,
    },

    /// Layer the files onto the process environment and print one value
    Get {
        /// Name of the variable to print
        key: String,

        #[command(flatten)]
        files: FileArgs,

        /// Value to print when the variable is absent or empty
        #[arg(long, allow_hyphen_values = true)]
        default: Option<String>,
    },
}

/// The ordered `.env` file list shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct FileArgs {
    /// File to load; repeat to layer several files. The first file wins.
    ///
    /// Defaults to `.env` in the current directory.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        env = "ENVTAG_FILES",
        value_delimiter = ','
    )]
    pub files: Vec<PathBuf>,
}

impl FileArgs {
    pub fn loader(&self) -> DotenvLoader {
        DotenvLoader::new().with_files(self.files.iter().cloned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `KEY=value` lines
    Env,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
