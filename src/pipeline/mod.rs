//! Generation pipeline module
//!
//! Drives descriptors through resolve → generate → plan → write.
//!
//! # Overview
//!
//! - `Pipeline::run` - one descriptor; any failure is returned to the caller
//! - `Pipeline::run_batch` - every entry of a `BatchConfig`, strictly in order, each failure
//!   recorded against its own entry
//! - `BatchReport` - ordered outcomes plus counts
//!
//! The output file is written last, through a temporary file renamed into place, so a failed
//! descriptor never leaves a file (or a truncated one) behind.

mod types;

pub use types::BatchReport;

use crate::codegen::{SchemaGenerator, TypeGenerator};
use crate::config::BatchConfig;
use crate::error::{Error, Result};
use crate::planner::OutputPlanner;
use crate::source::SourceResolver;
use crate::types::{BatchOutcome, GenerationResult, SourceDescriptor};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Resolves, generates and writes types for source descriptors
pub struct Pipeline {
    resolver: SourceResolver,
    generator: Box<dyn TypeGenerator>,
    planner: OutputPlanner,
}

impl Pipeline {
    /// Create a pipeline writing under `output_dir` with the built-in generator
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            resolver: SourceResolver::new()?,
            generator: Box::new(SchemaGenerator::new()),
            planner: OutputPlanner::new(output_dir),
        })
    }

    /// Replace the source resolver
    #[must_use]
    pub fn with_resolver(mut self, resolver: SourceResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replace the type generator
    #[must_use]
    pub fn with_generator(mut self, generator: impl TypeGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    /// Generate types for one descriptor and write them to disk
    pub async fn run(&self, descriptor: &SourceDescriptor) -> Result<GenerationResult> {
        debug!(
            "Generating {} types for '{}' from {}",
            descriptor.lang, descriptor.name, descriptor.location
        );

        let value = self
            .resolver
            .resolve(&descriptor.location, &descriptor.headers)
            .await?;

        let sample = serde_json::to_string(&value)
            .map_err(|e| Error::generation(format!("Failed to serialize sample: {e}")))?;
        let rendered_text = self
            .generator
            .generate(&descriptor.name, &sample, &descriptor.lang)?;

        let output_path =
            self.planner
                .plan(&descriptor.output_subdir, &descriptor.name, &descriptor.lang)?;
        write_output(&output_path, &rendered_text)?;

        debug!("Wrote {} bytes to {}", rendered_text.len(), output_path.display());

        Ok(GenerationResult {
            rendered_text,
            output_path,
        })
    }

    /// Run every entry of a batch, in declared order.
    ///
    /// Never fails: each entry's error is captured in its outcome.
    pub async fn run_batch(&self, config: &BatchConfig) -> BatchReport {
        let start = Instant::now();
        let mut report = BatchReport::new();

        info!("Processing {} sources", config.len());

        for (label, descriptor) in config.entries() {
            let result = match descriptor {
                Ok(descriptor) => self.run(&descriptor).await,
                Err(e) => Err(e),
            };

            let outcome = match result {
                Ok(generated) => BatchOutcome::succeeded(&label, &generated.output_path),
                Err(e) => {
                    warn!("Failed to process '{label}': {e}");
                    BatchOutcome::failed(&label, e.to_string())
                }
            };
            report.push(outcome);
        }

        #[allow(clippy::cast_possible_truncation)]
        report.set_duration(start.elapsed().as_millis() as u64);

        info!(
            "Batch complete in {}ms: {}",
            report.duration_ms,
            report.summary()
        );

        report
    }
}

/// Write `contents` to `path` via a sibling temporary file.
///
/// The destination is either left untouched or fully replaced.
fn write_output(path: &Path, contents: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("resolver", &self.resolver)
            .field("planner", &self.planner)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
