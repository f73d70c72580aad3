//! Type generation module
//!
//! Boundary to the type-inference/rendering engine.
//!
//! # Overview
//!
//! - `TypeGenerator` - the call contract: name + JSON sample + language → rendered text
//! - `SchemaGenerator` - built-in engine: schema inference → `TypeModel` → `Renderer`
//! - `renderers` - one renderer per supported target language
//!
//! The pipeline treats a generator call as one opaque, non-retried step.

pub mod model;
pub mod naming;
pub mod renderers;

pub use model::{Field, Record, TypeModel, TypeRef};
pub use renderers::{renderer_for, Renderer};

use crate::error::{Error, Result};
use crate::schema::SchemaInferrer;
use crate::source::parse_json_slice;

/// Generates source text for a named JSON sample
pub trait TypeGenerator: Send + Sync {
    /// Render types for `sample` (one JSON document) in `lang`.
    ///
    /// Fails with `Error::Generation` for malformed samples or unsupported languages.
    fn generate(&self, name: &str, sample: &str, lang: &str) -> Result<String>;
}

/// Built-in generator backed by schema inference
#[derive(Debug, Clone, Default)]
pub struct SchemaGenerator {
    inferrer: SchemaInferrer,
}

impl SchemaGenerator {
    /// Create a generator with default inference settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the type model for a sample without rendering it
    pub fn model(&self, name: &str, sample: &str) -> Result<TypeModel> {
        let value = parse_json_slice(sample.as_bytes())
            .map_err(|e| Error::generation(format!("Malformed JSON sample for '{name}': {e}")))?;
        let schema = self.inferrer.infer(&value);
        Ok(TypeModel::from_schema(name, &schema))
    }
}

impl TypeGenerator for SchemaGenerator {
    fn generate(&self, name: &str, sample: &str, lang: &str) -> Result<String> {
        let renderer = renderer_for(lang)
            .ok_or_else(|| Error::generation(format!("Unsupported target language: {lang}")))?;
        let model = self.model(name, sample)?;
        Ok(renderer.render(&model).join("\n"))
    }
}
