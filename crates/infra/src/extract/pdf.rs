// crates/infra/src/extract/pdf.rs
use std::path::Path;

use log::debug;
use lopdf::Document;
use project_radar_domain::ExtractionLimits;
use project_radar_ports::extraction::ContentExtractor;
use project_radar_shared_kernel::{ExtractionError, ExtractionResult};

/// PDF text layer, first `max_pdf_pages` pages only.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl ContentExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extensions(&self) -> &[&'static str] {
        &["pdf"]
    }

    fn extract(&self, path: &Path, limits: &ExtractionLimits) -> ExtractionResult<String> {
        let doc = Document::load(path).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

        let mut text = String::new();
        for &page_number in doc.get_pages().keys().take(limits.max_pdf_pages) {
            match doc.extract_text(&[page_number]) {
                Ok(page_text) if !page_text.is_empty() => {
                    text.push_str(&page_text);
                    text.push('\n');
                }
                Ok(_) => {}
                Err(err) => debug!("{}: page {page_number} has no decodable text: {err}", path.display()),
            }
        }

        if text.trim().is_empty() {
            return Err(ExtractionError::NoExtractableText);
        }
        Ok(text)
    }
}
