//! Schema inference module
//!
//! Infers a structural schema from a JSON sample.
//!
//! # Features
//!
//! - **Type Inference**: Infers types from JSON values
//! - **Element Merging**: Merges array elements into one item schema
//! - **Optional Detection**: Keys missing from some objects become optional
//! - **Nullable Detection**: `null` values mark a property nullable
//! - **Nested Object Support**: Handles nested objects recursively

mod inference;
mod types;

pub use inference::{infer_schema, merge_property, SchemaInferrer};
pub use types::{JsonType, SchemaProperty};

#[cfg(test)]
mod tests;
