//! Common types used throughout trainxm
//!
//! Source descriptors, their resolved location, and the per-run result types.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Defaults
// ============================================================================

/// Default target language
pub const DEFAULT_LANG: &str = "typescript";

/// Default logical name for a single-source run
pub const DEFAULT_NAME: &str = "ApiTypes";

/// Default base output directory
pub const DEFAULT_OUTPUT_DIR: &str = "./types";

// ============================================================================
// Source Location
// ============================================================================

/// Where a source's JSON lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// File path, relative to the process working directory unless absolute
    Local(PathBuf),
    /// Absolute `http://` or `https://` URL
    Remote(String),
}

impl SourceLocation {
    /// Classify a raw source string.
    ///
    /// Remote iff the string starts with `http://` or `https://` (case-sensitive).
    pub fn classify(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            SourceLocation::Remote(source.to_string())
        } else {
            SourceLocation::Local(PathBuf::from(source))
        }
    }

    /// Check if this is a remote source
    pub fn is_remote(&self) -> bool {
        matches!(self, SourceLocation::Remote(_))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Local(path) => write!(f, "{}", path.display()),
            SourceLocation::Remote(url) => write!(f, "{url}"),
        }
    }
}

// ============================================================================
// Source Descriptor
// ============================================================================

/// One named JSON input plus its target language and output placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    /// Logical name, used for the generated top-level type and the file stem
    pub name: String,
    /// Classified source location
    pub location: SourceLocation,
    /// Target language identifier
    pub lang: String,
    /// Request headers, only sent for remote sources
    pub headers: StringMap,
    /// Sub-directory under the base output directory (may be empty)
    pub output_subdir: String,
}

impl SourceDescriptor {
    /// Create a descriptor with default language, no headers and no sub-directory
    pub fn new(name: impl Into<String>, source: &str) -> Self {
        Self {
            name: name.into(),
            location: SourceLocation::classify(source),
            lang: DEFAULT_LANG.to_string(),
            headers: StringMap::new(),
            output_subdir: String::new(),
        }
    }

    /// Set the target language
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set request headers
    #[must_use]
    pub fn with_headers(mut self, headers: StringMap) -> Self {
        self.headers = headers;
        self
    }

    /// Add a single request header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the output sub-directory
    #[must_use]
    pub fn with_output_subdir(mut self, subdir: impl Into<String>) -> Self {
        self.output_subdir = subdir.into();
        self
    }
}

// ============================================================================
// Results
// ============================================================================

/// Rendered text and where it was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub rendered_text: String,
    pub output_path: PathBuf,
}

/// Outcome of one descriptor within a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Descriptor name (or `sources[<index>]` when the entry had none)
    pub name: String,
    pub success: bool,
    pub error_message: Option<String>,
    pub output_path: Option<PathBuf>,
}

impl BatchOutcome {
    /// Create a successful outcome
    pub fn succeeded(name: impl Into<String>, output_path: &Path) -> Self {
        Self {
            name: name.into(),
            success: true,
            error_message: None,
            output_path: Some(output_path.to_path_buf()),
        }
    }

    /// Create a failed outcome
    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            success: false,
            error_message: Some(message.into()),
            output_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("http://example.com/data.json", true ; "http url")]
    #[test_case("https://example.com/data.json", true ; "https url")]
    #[test_case("data/http_samples.json", false ; "path containing http")]
    #[test_case("./https/sample.json", false ; "directory named https")]
    #[test_case("HTTP://EXAMPLE.COM", false ; "uppercase scheme")]
    #[test_case("ftp://example.com/data.json", false ; "other scheme")]
    #[test_case("http:/example.com", false ; "malformed prefix")]
    fn test_classify(source: &str, remote: bool) {
        assert_eq!(SourceLocation::classify(source).is_remote(), remote);
    }

    #[test]
    fn test_descriptor_defaults() {
        let desc = SourceDescriptor::new("Users", "users.json");
        assert_eq!(desc.lang, "typescript");
        assert!(desc.headers.is_empty());
        assert!(desc.output_subdir.is_empty());
        assert_eq!(
            desc.location,
            SourceLocation::Local(PathBuf::from("users.json"))
        );
    }

    #[test]
    fn test_descriptor_builder() {
        let desc = SourceDescriptor::new("Users", "https://api.example.com/users")
            .with_lang("rust")
            .header("Authorization", "Bearer abc")
            .with_output_subdir("api");

        assert_eq!(desc.lang, "rust");
        assert_eq!(
            desc.headers.get("Authorization"),
            Some(&"Bearer abc".to_string())
        );
        assert_eq!(desc.output_subdir, "api");
        assert!(desc.location.is_remote());
        assert_eq!(desc.location.to_string(), "https://api.example.com/users");
    }

    #[test]
    fn test_batch_outcome() {
        let ok = BatchOutcome::succeeded("Users", Path::new("types/Users.ts"));
        assert!(ok.success);
        assert!(ok.error_message.is_none());

        let failed = BatchOutcome::failed("Orders", "File not found: orders.json");
        assert!(!failed.success);
        assert!(failed.output_path.is_none());
        assert_eq!(
            failed.error_message.as_deref(),
            Some("File not found: orders.json")
        );
    }
}
