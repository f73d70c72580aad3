//! CLI commands and argument parsing

use crate::types::{DEFAULT_LANG, DEFAULT_NAME, DEFAULT_OUTPUT_DIR};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate typed data-structure definitions from JSON samples
#[derive(Parser, Debug)]
#[command(name = "trainxm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate types for a single source
    Generate {
        /// Local JSON file or http(s) URL
        #[arg(short, long)]
        source: String,

        /// Base output directory
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Name of the top-level type (also the file stem)
        #[arg(short, long, default_value = DEFAULT_NAME)]
        name: String,

        /// Target language
        #[arg(short, long, default_value = DEFAULT_LANG)]
        lang: String,

        /// Request headers as a JSON object (remote sources only)
        #[arg(short = 'H', long, default_value = "{}")]
        headers: String,
    },

    /// Generate types for every source in a batch configuration file
    Batch {
        /// Batch configuration file (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Base output directory; each entry's `outputDir` is joined under it
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
    },

    /// List supported target languages
    Languages,
}
