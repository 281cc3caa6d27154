//! CSV reading with a single header row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::table::SourceTable;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Reads a HubSpot export from disk.
pub fn read_csv_table(path: &Path) -> Result<SourceTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let table = read_csv_from_reader(file, &path.display().to_string())?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers.len(),
        "loaded export"
    );
    Ok(table)
}

/// Reads an export from any reader.
///
/// The first non-blank row is the header. Blank rows are skipped, short rows
/// are padded with empty cells and cells beyond the header width are dropped.
pub fn read_csv_from_reader<R: Read>(reader: R, source_name: &str) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            source_name: source_name.to_string(),
            line: e.position().map(|pos| pos.line()).unwrap_or(0),
            message: e.to_string(),
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => {
                headers = Some(record.iter().map(normalize_header).collect());
            }
            Some(names) => {
                let mut row = Vec::with_capacity(names.len());
                for idx in 0..names.len() {
                    row.push(record.get(idx).map(normalize_cell).unwrap_or_default());
                }
                rows.push(row);
            }
        }
    }

    let Some(headers) = headers else {
        return Err(IngestError::EmptyCsv {
            source_name: source_name.to_string(),
        });
    };
    if headers.len() > 100 {
        tracing::warn!(
            source = source_name,
            columns = headers.len(),
            "export has more columns than expected"
        );
    }
    Ok(SourceTable::new(source_name, headers, rows))
}
