//! Reevo import file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDateTime;
use crm_model::{DestinationField, DestinationRecord};

use crate::error::{OutputError, Result};

/// `reevo_import_ready_YYYYmmdd_HHMMSS.csv`
pub fn import_file_name(timestamp: NaiveDateTime) -> String {
    format!("reevo_import_ready_{}.csv", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Write records as import CSV: header row, then one row per record.
///
/// Returns the number of data rows written.
pub fn write_import_csv<'a, W: Write>(
    records: impl IntoIterator<Item = &'a DestinationRecord>,
    writer: W,
) -> Result<usize> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    csv.write_record(DestinationField::headers())?;
    let mut rows = 0;
    for record in records {
        csv.write_record(record.values())?;
        rows += 1;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(rows)
}

/// Write the import file at `path`, replacing any existing file.
pub fn write_import_file<'a>(
    path: &Path,
    records: impl IntoIterator<Item = &'a DestinationRecord>,
) -> Result<usize> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = write_import_csv(records, BufWriter::new(file))?;
    tracing::info!(path = %path.display(), rows, "wrote import file");
    Ok(rows)
}
