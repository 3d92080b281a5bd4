// crates/ports/src/extraction.rs
use std::path::Path;

use project_radar_domain::ExtractionLimits;
use project_radar_shared_kernel::ExtractionResult;

/// Text extractor for one family of file formats.
pub trait ContentExtractor: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Lowercase extensions (without dot) this extractor handles.
    fn extensions(&self) -> &[&'static str];

    fn can_extract(&self, ext: &str) -> bool {
        self.extensions().contains(&ext)
    }

    /// Raw extracted text before the final length cap.
    ///
    /// # Errors
    /// Any read or parse failure; the caller turns it into placeholder text.
    fn extract(&self, path: &Path, limits: &ExtractionLimits) -> ExtractionResult<String>;
}

/// Total document reader: always returns text, never an error.
pub trait DocumentReader: Send + Sync {
    fn read_content(&self, path: &Path) -> String;
}
