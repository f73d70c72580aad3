//! Batch configuration and header parsing
//!
//! A batch configuration is a JSON document of the form:
//!
//! ```json
//! { "sources": [ { "name": "Users", "source": "users.json", "lang": "go",
//!                  "headers": {}, "outputDir": "models" } ] }
//! ```
//!
//! The `sources` array is validated up front. Individual entries are parsed lazily so one
//! malformed entry fails on its own without taking the rest of the batch down.

use crate::error::{Error, Result};
use crate::source::{parse_json_slice, resolve_path};
use crate::types::{SourceDescriptor, StringMap, DEFAULT_LANG};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

// ============================================================================
// Batch Config
// ============================================================================

/// Parsed batch configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Raw source entries, in declared order
    pub sources: Vec<Value>,
}

impl BatchConfig {
    /// Load a batch configuration file, resolved against the working directory
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let resolved = resolve_path(path.as_ref())?;
        if !resolved.exists() {
            return Err(Error::not_found(resolved.display().to_string()));
        }

        let content = fs::read(&resolved)?;
        Self::from_slice(&content)
    }

    /// Parse a batch configuration from a JSON string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Parse a batch configuration from raw bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value = parse_json_slice(bytes)
            .map_err(|e| Error::parse(format!("Invalid config JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Validate the top-level shape of a configuration value
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(mut map) => match map.remove("sources") {
                Some(Value::Array(sources)) => Ok(Self { sources }),
                _ => Err(Error::config("Config file must contain a \"sources\" array")),
            },
            _ => Err(Error::config("Config file must be a JSON object")),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Parse every entry, pairing each with a display label
    pub fn entries(&self) -> impl Iterator<Item = (String, Result<SourceDescriptor>)> + '_ {
        self.sources.iter().enumerate().map(|(index, entry)| {
            let label = entry_label(index, entry);
            let descriptor = parse_entry(&label, entry);
            (label, descriptor)
        })
    }
}

// ============================================================================
// Source Entries
// ============================================================================

/// One element of the `sources` array
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SourceEntry {
    name: String,
    source: String,
    #[serde(default)]
    lang: Option<String>,
    #[serde(default)]
    headers: Option<Map<String, Value>>,
    #[serde(default)]
    output_dir: Option<String>,
}

/// Label used to report an entry: its `name`, or `sources[<index>]`
pub fn entry_label(index: usize, entry: &Value) -> String {
    entry
        .get("name")
        .and_then(Value::as_str)
        .map_or_else(|| format!("sources[{index}]"), str::to_string)
}

/// Build a descriptor from one config entry, applying defaults for omitted fields
pub fn parse_entry(label: &str, entry: &Value) -> Result<SourceDescriptor> {
    let entry = SourceEntry::deserialize(entry)
        .map_err(|e| Error::invalid_descriptor(label, e.to_string()))?;

    let headers = match &entry.headers {
        Some(map) => headers_from_map(map).map_err(|m| Error::invalid_descriptor(label, m))?,
        None => StringMap::new(),
    };

    Ok(SourceDescriptor::new(entry.name, &entry.source)
        .with_lang(entry.lang.unwrap_or_else(|| DEFAULT_LANG.to_string()))
        .with_headers(headers)
        .with_output_subdir(entry.output_dir.unwrap_or_default()))
}

// ============================================================================
// Headers
// ============================================================================

/// Parse a `--headers` JSON object.
///
/// Called before any I/O so a malformed value fails fast.
pub fn parse_headers(raw: &str) -> Result<StringMap> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| Error::parse(format!("Invalid headers JSON: {e}")))?;

    match value {
        Value::Object(map) => headers_from_map(&map).map_err(Error::parse),
        _ => Err(Error::parse("Invalid headers JSON: expected an object")),
    }
}

/// Convert a JSON object into header pairs.
///
/// Strings pass through verbatim; other scalars use their JSON text.
fn headers_from_map(map: &Map<String, Value>) -> std::result::Result<StringMap, String> {
    map.iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key.clone(), s.clone())),
            Value::Number(_) | Value::Bool(_) | Value::Null => Ok((key.clone(), value.to_string())),
            Value::Array(_) | Value::Object(_) => {
                Err(format!("header '{key}' must be a string or scalar"))
            }
        })
        .collect()
}
