//! Output planning module
//!
//! Maps a descriptor's name and language to a destination file.
//!
//! # Overview
//!
//! - `EXTENSIONS` - language identifier → file extension table
//! - `OutputPlanner` - joins base dir, sub-directory and `name.ext`, creating directories
//!
//! Existing files at the planned path are overwritten by the caller without complaint.

mod extensions;

pub use extensions::{extension_for, is_known_language, EXTENSIONS, FALLBACK_EXTENSION};

use crate::error::Result;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Computes output paths under a base directory
#[derive(Debug, Clone)]
pub struct OutputPlanner {
    base_dir: PathBuf,
}

impl OutputPlanner {
    /// Create a planner rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Directory that files for `subdir` land in
    pub fn destination_dir(&self, subdir: &str) -> PathBuf {
        if subdir.is_empty() {
            self.base_dir.clone()
        } else {
            self.base_dir.join(subdir)
        }
    }

    /// Compute the destination path without touching the filesystem
    pub fn output_path(&self, subdir: &str, name: &str, lang: &str) -> PathBuf {
        self.destination_dir(subdir)
            .join(format!("{name}.{}", extension_for(lang)))
    }

    /// Compute the destination path, creating its directory (and ancestors) if absent
    pub fn plan(&self, subdir: &str, name: &str, lang: &str) -> Result<PathBuf> {
        let dir = self.destination_dir(subdir);
        if !dir.exists() {
            debug!("Creating output directory: {}", dir.display());
        }
        fs::create_dir_all(&dir)?;
        Ok(self.output_path(subdir, name, lang))
    }
}
