// crates/infra/src/extract/spreadsheet.rs
use std::{
    fmt::Write as _,
    io::{Read, Seek},
    path::Path,
};

use calamine::{Cell, Data, DataRef, Range, Reader, Sheets, Xlsx, XlsxError, open_workbook_auto};
use log::warn;
use project_radar_domain::ExtractionLimits;
use project_radar_ports::extraction::ContentExtractor;
use project_radar_shared_kernel::{ExtractionError, ExtractionResult};

/// Excel workbooks: every sheet rendered as comma-separated text.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpreadsheetExtractor;

impl ContentExtractor for SpreadsheetExtractor {
    fn name(&self) -> &'static str {
        "spreadsheet"
    }

    fn extensions(&self) -> &[&'static str] {
        &["xlsx", "xls"]
    }

    fn extract(&self, path: &Path, limits: &ExtractionLimits) -> ExtractionResult<String> {
        let mut workbook = open_workbook_auto(path).map_err(|e| ExtractionError::Spreadsheet(e.to_string()))?;
        let max_rows = limits.max_sheet_rows;
        // One sheet in memory at a time: each range is rendered and dropped before the next loads.
        let sheets = workbook.sheet_names().into_iter().map(|name| {
            let range = load_sheet(&mut workbook, &name, max_rows);
            (name, range)
        });
        Ok(render_sheets(sheets, max_rows))
    }
}

fn load_sheet<RS>(workbook: &mut Sheets<RS>, name: &str, max_rows: usize) -> Result<Range<Data>, String>
where
    RS: Read + Seek,
{
    match workbook {
        Sheets::Xlsx(xlsx) => xlsx_sheet_head(xlsx, name, max_rows).map_err(|e| e.to_string()),
        other => other.worksheet_range(name).map_err(|e| e.to_string()),
    }
}

/// Streams an xlsx sheet and stops after the header row plus `max_rows` rows.
///
/// Rows are counted from the first non-empty cell, matching what
/// `worksheet_range` would return for the same sheet.
pub fn xlsx_sheet_head<RS: Read + Seek>(
    xlsx: &mut Xlsx<RS>,
    name: &str,
    max_rows: usize,
) -> Result<Range<Data>, XlsxError> {
    let mut reader = xlsx.worksheet_cells_reader(name)?;
    let mut cells = Vec::new();
    let mut first_row: Option<u32> = None;
    while let Some(cell) = reader.next_cell()? {
        if *cell.get_value() == DataRef::Empty {
            continue;
        }
        let (row, col) = cell.get_position();
        let first = *first_row.get_or_insert(row);
        if usize::try_from(row.saturating_sub(first)).unwrap_or(usize::MAX) > max_rows {
            break;
        }
        cells.push(Cell::new((row, col), Data::from(cell.get_value().clone())));
    }
    Ok(Range::from_sparse(cells))
}

/// Renders sheets in workbook order, each behind a `=== Sheet: name ===` line.
///
/// A sheet that failed to load contributes its header line only.
pub fn render_sheets<I>(sheets: I, max_rows: usize) -> String
where
    I: IntoIterator<Item = (String, Result<Range<Data>, String>)>,
{
    let mut out = String::new();
    for (name, range) in sheets {
        let _ = write!(out, "\n=== Sheet: {name} ===\n");
        match range {
            Ok(range) => out.push_str(&sheet_to_csv(&range, max_rows)),
            Err(reason) => warn!("sheet '{name}' could not be read: {reason}"),
        }
    }
    out
}

/// First row as header, then at most `max_rows` data rows; one line per row.
pub fn sheet_to_csv(range: &Range<Data>, max_rows: usize) -> String {
    let mut out = String::new();
    for row in range.rows().take(max_rows.saturating_add(1)) {
        let line = row.iter().map(|cell| csv_field(&cell.to_string())).collect::<Vec<_>>().join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
