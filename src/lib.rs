// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # trainxm
//!
//! Generate typed data-structure definitions from JSON samples.
//!
//! Samples come from local files or remote HTTP endpoints, one at a time or as a batch
//! described by a configuration file. Each sample is turned into source code for one of
//! twelve target languages and written to `<output>/<subdir>/<name>.<ext>`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trainxm::{pipeline::Pipeline, Result, SourceDescriptor};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let pipeline = Pipeline::new("./types")?;
//!
//!     let descriptor = SourceDescriptor::new("User", "https://api.github.com/users/octocat")
//!         .with_lang("rust");
//!     let result = pipeline.run(&descriptor).await?;
//!
//!     println!("{}", result.output_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │            Pipeline: run(descriptor) / run_batch(config)     │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──┬────────────────┬───────────┐
//! │   Source     │    Codegen       │    Planner     │  Config   │
//! ├──────────────┼──────────────────┼────────────────┼───────────┤
//! │ Local file   │ Schema inference │ Extension table│ Batch file│
//! │ HTTP GET     │ Type model       │ Output dirs    │ Headers   │
//! │              │ 12 renderers     │                │           │
//! └──────────────┴──────────────────┴────────────────┴───────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client for remote sources
pub mod http;

/// Local and remote source resolution
pub mod source;

/// Output path planning
pub mod planner;

/// Schema inference from JSON data
pub mod schema;

/// Type generation and per-language renderers
pub mod codegen;

/// Batch configuration and header parsing
pub mod config;

/// Single and batch generation runs
pub mod pipeline;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use types::*;

// Re-export commonly used types
pub use codegen::{SchemaGenerator, TypeGenerator};
pub use config::BatchConfig;
pub use pipeline::{BatchReport, Pipeline};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
