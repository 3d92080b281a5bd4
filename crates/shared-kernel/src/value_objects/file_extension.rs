// crates/shared-kernel/src/value_objects/file_extension.rs
use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

/// Lowercased file extension without the leading dot.
///
/// Configuration may spell extensions as `.PDF`, `pdf` or `Pdf`; all of them
/// normalize to the same value so set membership is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(from = "String", into = "String")]
pub struct FileExtension(String);

impl FileExtension {
    pub fn new(ext: impl AsRef<str>) -> Self {
        let ext = ext.as_ref().trim();
        Self(ext.strip_prefix('.').unwrap_or(ext).to_lowercase())
    }

    /// Extension of `path`, or the empty extension when there is none.
    pub fn from_path(path: &Path) -> Self {
        path.extension().map(|e| Self::new(e.to_string_lossy())).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn no_ext() -> Self {
        Self(String::new())
    }

    /// Dotted form used in user-facing messages (`.pdf`, or empty).
    pub fn dotted(&self) -> String {
        if self.0.is_empty() { String::new() } else { format!(".{}", self.0) }
    }
}

impl Default for FileExtension {
    fn default() -> Self {
        Self::no_ext()
    }
}

impl From<String> for FileExtension {
    fn from(ext: String) -> Self {
        Self::new(ext)
    }
}

impl From<&str> for FileExtension {
    fn from(ext: &str) -> Self {
        Self::new(ext)
    }
}

impl From<FileExtension> for String {
    fn from(ext: FileExtension) -> Self {
        ext.0
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() { write!(f, "(noext)") } else { write!(f, "{}", self.0) }
    }
}
