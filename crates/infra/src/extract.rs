// crates/infra/src/extract.rs
//! Per-format content extractors and the registry that dispatches to them.

mod docx;
mod pdf;
mod registry;
mod spreadsheet;
mod text;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use registry::ExtractorRegistry;
pub use spreadsheet::{SpreadsheetExtractor, render_sheets, sheet_to_csv, xlsx_sheet_head};
pub use text::TextExtractor;
