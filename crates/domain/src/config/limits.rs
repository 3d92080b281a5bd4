use std::time::Duration;

const SECS_PER_DAY: u64 = 24 * 3600;

use serde::{Deserialize, Serialize};

/// Caps applied by the content extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionLimits {
    /// Pages read from the start of a PDF.
    pub max_pdf_pages: usize,
    /// Data rows read per spreadsheet sheet (the header row is extra).
    pub max_sheet_rows: usize,
    /// Final length cap in characters.
    pub max_chars: usize,
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self { max_pdf_pages: 30, max_sheet_rows: 400, max_chars: 5000 }
    }
}

/// Weekly report job settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub window_days: u64,
}

impl ReportSettings {
    /// Window length; saturates instead of wrapping for absurd day counts.
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_days.saturating_mul(SECS_PER_DAY))
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self { window_days: 7 }
    }
}
