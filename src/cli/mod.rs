//! CLI module
//!
//! Command-line interface for inspecting pagination resolution.
//!
//! # Commands
//!
//! - `resolve` - Resolve a query string into a pagination
//! - `links` - Print navigation links for a URL
//! - `systems` - List registered systems in selection order

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
