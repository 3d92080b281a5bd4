// crates/infra/src/extract/text.rs
use std::path::Path;

use project_radar_domain::ExtractionLimits;
use project_radar_ports::extraction::ContentExtractor;
use project_radar_shared_kernel::ExtractionResult;

use crate::persistence::FileReader;

const TEXT_EXTENSIONS: &[&str] = &["c", "h", "cpp", "py", "js", "txt", "md", "json"];

/// Plain text and source files, decoded permissively.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextExtractor;

impl ContentExtractor for TextExtractor {
    fn name(&self) -> &'static str {
        "text"
    }

    fn extensions(&self) -> &[&'static str] {
        TEXT_EXTENSIONS
    }

    fn extract(&self, path: &Path, _limits: &ExtractionLimits) -> ExtractionResult<String> {
        Ok(FileReader::read_lossy(path)?)
    }
}
