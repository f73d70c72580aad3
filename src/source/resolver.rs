//! Local and remote JSON resolution

use super::json::parse_json_slice;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::{SourceLocation, StringMap};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves source locations into parsed JSON
#[derive(Debug, Clone)]
pub struct SourceResolver {
    client: HttpClient,
}

impl SourceResolver {
    /// Create a resolver with a default HTTP client
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(HttpClient::new()?))
    }

    /// Create a resolver around an existing HTTP client
    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }

    /// Resolve a location into a JSON value.
    ///
    /// Headers are only sent for remote sources.
    pub async fn resolve(&self, location: &SourceLocation, headers: &StringMap) -> Result<Value> {
        match location {
            SourceLocation::Local(path) => {
                debug!("Reading local JSON file: {}", path.display());
                read_json_file(path)
            }
            SourceLocation::Remote(url) => {
                debug!("Fetching JSON from URL: {}", url);
                self.client.get_json(url, headers).await
            }
        }
    }

    /// Classify and resolve a raw source string
    pub async fn resolve_str(&self, source: &str, headers: &StringMap) -> Result<Value> {
        self.resolve(&SourceLocation::classify(source), headers)
            .await
    }
}

/// Resolve a path against the current working directory
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

/// Read and parse a local JSON file.
///
/// Fails with `NotFound` before reading if the resolved path does not exist.
pub fn read_json_file(path: &Path) -> Result<Value> {
    let resolved = resolve_path(path)?;
    if !resolved.exists() {
        return Err(Error::not_found(resolved.display().to_string()));
    }

    let content = fs::read(&resolved)?;
    parse_json_slice(&content)
        .map_err(|e| Error::parse(format!("Invalid JSON in {}: {e}", resolved.display())))
}
