//! CLI module
//!
//! Command-line interface for generating types.
//!
//! # Commands
//!
//! - `generate` - Generate types for one source
//! - `batch` - Generate types for every source in a config file
//! - `languages` - List supported target languages

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
