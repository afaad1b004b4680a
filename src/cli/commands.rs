//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pagination resolution and navigation CLI
#[derive(Parser, Debug)]
#[command(name = "slice-pagination")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Registry definition file (YAML or JSON); built-in systems when omitted
    #[arg(short, long, global = true)]
    pub registry: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level after applying `--verbose`
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a query string (e.g. "offset=20&limit=10") into a pagination
    Resolve {
        /// Query string, with or without the leading '?'
        query: String,
    },

    /// Print page metadata and navigation links for a request URL
    Links {
        /// Request URL including its query string
        url: String,

        /// The fetch returned more rows than the limit
        #[arg(long)]
        has_next: bool,

        /// Key of the last row on the page (cursor pagination)
        #[arg(long)]
        next_cursor: Option<String>,
    },

    /// List registered pagination systems in selection order
    Systems,
}
