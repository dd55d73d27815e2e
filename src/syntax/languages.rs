//! Language identification from file extensions.

use std::path::Path;

/// Supported language identifiers. Only the C family has a highlight
/// profile; every other file classifies as normal text throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    PlainText,
    C,
}

impl LanguageId {
    /// Detect language from a file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "c" | "h" | "cpp" | "cc" => LanguageId::C,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from a file path.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageId::PlainText)
    }

    /// Whether this language has a highlight profile.
    pub fn has_highlighting(&self) -> bool {
        !matches!(self, LanguageId::PlainText)
    }
}
