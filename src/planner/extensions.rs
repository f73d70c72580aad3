//! Language → file extension table

/// Extension used for languages missing from the table
pub const FALLBACK_EXTENSION: &str = "txt";

/// Supported language identifiers and their file extensions.
///
/// Adding a target language is a one-line edit here.
pub const EXTENSIONS: &[(&str, &str)] = &[
    ("typescript", "ts"),
    ("javascript", "js"),
    ("flow", "js"),
    ("swift", "swift"),
    ("kotlin", "kt"),
    ("java", "java"),
    ("go", "go"),
    ("rust", "rs"),
    ("csharp", "cs"),
    ("python", "py"),
    ("ruby", "rb"),
    ("dart", "dart"),
];

/// Look up the extension for a language, falling back to `txt`
pub fn extension_for(lang: &str) -> &'static str {
    EXTENSIONS
        .iter()
        .find(|(name, _)| *name == lang)
        .map_or(FALLBACK_EXTENSION, |(_, ext)| ext)
}

/// Check if a language identifier is in the table
pub fn is_known_language(lang: &str) -> bool {
    EXTENSIONS.iter().any(|(name, _)| *name == lang)
}
