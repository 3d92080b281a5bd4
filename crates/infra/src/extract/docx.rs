// crates/infra/src/extract/docx.rs
use std::{io::BufRead, path::Path};

use project_radar_domain::ExtractionLimits;
use project_radar_ports::extraction::ContentExtractor;
use project_radar_shared_kernel::{ExtractionError, ExtractionResult};
use quick_xml::{Reader, events::Event};
use zip::ZipArchive;

use crate::persistence::FileReader;

const DOCUMENT_PART: &str = "word/document.xml";

/// Word documents: body paragraphs joined with `\n`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl ContentExtractor for DocxExtractor {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn extensions(&self) -> &[&'static str] {
        &["docx"]
    }

    fn extract(&self, path: &Path, _limits: &ExtractionLimits) -> ExtractionResult<String> {
        let file = FileReader::open_buffered(path)?;
        let mut archive = ZipArchive::new(file).map_err(|e| ExtractionError::Archive(e.to_string()))?;
        let part = archive.by_name(DOCUMENT_PART).map_err(|e| ExtractionError::Archive(e.to_string()))?;
        let paragraphs = body_paragraphs(std::io::BufReader::new(part))?;
        Ok(paragraphs.join("\n"))
    }
}

/// Collects top-level body paragraphs. Paragraphs inside tables and nested
/// paragraphs (text boxes) are not body paragraphs.
pub(crate) fn body_paragraphs<R: BufRead>(source: R) -> ExtractionResult<Vec<String>> {
    let mut reader = Reader::from_reader(source);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut table_depth = 0usize;
    let mut paragraph_depth = 0usize;
    let mut in_text = false;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| ExtractionError::Xml(e.to_string()))?;
        let collecting = table_depth == 0 && paragraph_depth == 1;
        match event {
            Event::Start(ref e) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:p" => {
                    paragraph_depth += 1;
                    if table_depth == 0 && paragraph_depth == 1 {
                        current.clear();
                    }
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(ref e) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:p" => {
                    if collecting {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(ref e) => match e.name().as_ref() {
                b"w:p" if table_depth == 0 && paragraph_depth == 0 => paragraphs.push(String::new()),
                b"w:tab" if collecting => current.push('\t'),
                b"w:br" | b"w:cr" if collecting => current.push('\n'),
                _ => {}
            },
            Event::Text(ref e) if in_text && collecting => {
                let text = e.unescape().map_err(|e| ExtractionError::Xml(e.to_string()))?;
                current.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
