// src/presentation.rs
use std::path::Path;

use anyhow::Result;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use project_radar_domain::FileRecord;
use project_radar_usecase::ScanOutput;
use serde::Serialize;

use crate::cli::OutputFormat;

pub fn print_scan(output: &ScanOutput, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(output),
        OutputFormat::Table => {
            println!("{}", scan_table(&output.files));
            println!("[project_radar] {} files", output.files.len());
            Ok(())
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_extracted(path: &Path, content: &str) {
    let name = path.file_name().map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy());
    println!("=== File: {name} ===\n{content}\n");
}

fn scan_table(files: &[FileRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Updated", "Project", "Owner", "File", "Path"]);
    for file in files {
        table.add_row(vec![file.modified_at(), file.project(), file.owner(), file.filename(), file.path()]);
    }
    table
}
