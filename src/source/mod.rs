//! Source resolution module
//!
//! Turns a source location into parsed JSON.
//!
//! # Overview
//!
//! - `SourceResolver` - dispatches on `SourceLocation` (local file or remote URL)
//! - `read_json_file` - path resolution, existence check and JSON parsing for local files
//! - `parse_json_slice` - byte-level JSON parsing used for files, response bodies and samples
//!
//! Every call resolves from scratch; nothing is cached across descriptors.

mod json;
mod resolver;

pub use json::{parse_json_slice, MAX_NESTING_DEPTH};
pub use resolver::{read_json_file, resolve_path, SourceResolver};
