//! Rules for turning an extraction attempt into the text handed downstream.
//!
//! Extractors report `Result<String, ExtractionError>`. Only here, at the
//! boundary, are failures rendered as bracketed placeholder strings. Callers
//! treat placeholders as ordinary content.

use project_radar_shared_kernel::{ExtractionError, ExtractionResult, FileExtension};

use crate::config::ExtractionLimits;

pub const SCANNED_PDF_WARNING: &str = "[Warning: unable to read PDF text, possibly a scanned document]";

/// Outcome of reading one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Content(String),
    Unsupported(FileExtension),
    ScannedDocument,
    Failed(String),
}

impl ExtractionOutcome {
    pub fn from_result(result: ExtractionResult<String>) -> Self {
        match result {
            Ok(text) => Self::Content(text),
            Err(ExtractionError::Unsupported { extension }) => Self::Unsupported(FileExtension::new(extension)),
            Err(ExtractionError::NoExtractableText) => Self::ScannedDocument,
            Err(other) => Self::Failed(other.to_string()),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        !matches!(self, Self::Content(_))
    }

    /// Final text: content capped at `limits.max_chars`, or a placeholder.
    pub fn render(self, limits: &ExtractionLimits) -> String {
        match self {
            Self::Content(text) => truncate_chars(text, limits.max_chars),
            Self::Unsupported(ext) => format!("[Unsupported format: {}]", ext.dotted()),
            Self::ScannedDocument => SCANNED_PDF_WARNING.to_string(),
            Self::Failed(reason) => format!("[Read error: {reason}]"),
        }
    }
}

/// Keeps at most `max_chars` Unicode scalar values.
pub fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((byte_idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_idx);
    }
    text
}
