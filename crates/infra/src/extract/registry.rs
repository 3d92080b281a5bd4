// crates/infra/src/extract/registry.rs
use std::path::Path;

use log::warn;
use project_radar_domain::{ExtractionLimits, ExtractionOutcome};
use project_radar_ports::extraction::{ContentExtractor, DocumentReader};
use project_radar_shared_kernel::FileExtension;

use super::{DocxExtractor, PdfExtractor, SpreadsheetExtractor, TextExtractor};

/// Dispatches documents to the extractor registered for their extension.
///
/// This is the only place where extraction failures become placeholder text.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn ContentExtractor>>,
    limits: ExtractionLimits,
}

impl ExtractorRegistry {
    /// Registry with the built-in text, PDF, Word and spreadsheet extractors.
    pub fn new(limits: ExtractionLimits) -> Self {
        Self::with_extractors(
            limits,
            vec![
                Box::new(TextExtractor),
                Box::new(PdfExtractor),
                Box::new(DocxExtractor),
                Box::new(SpreadsheetExtractor),
            ],
        )
    }

    pub fn with_extractors(limits: ExtractionLimits, extractors: Vec<Box<dyn ContentExtractor>>) -> Self {
        Self { extractors, limits }
    }

    pub fn limits(&self) -> &ExtractionLimits {
        &self.limits
    }

    /// Runs the matching extractor and classifies the result.
    pub fn extract(&self, path: &Path) -> ExtractionOutcome {
        let ext = FileExtension::from_path(path);
        let Some(extractor) = self.extractors.iter().find(|x| x.can_extract(ext.as_str())) else {
            return ExtractionOutcome::Unsupported(ext);
        };

        let result = extractor.extract(path, &self.limits);
        if let Err(err) = &result {
            warn!("{} extractor could not read {}: {err}", extractor.name(), path.display());
        }
        ExtractionOutcome::from_result(result)
    }
}

impl DocumentReader for ExtractorRegistry {
    fn read_content(&self, path: &Path) -> String {
        self.extract(path).render(&self.limits)
    }
}
