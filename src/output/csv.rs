use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::MessageRecord;

/// Column order of the exported table
pub const CSV_HEADERS: [&str; 12] = [
    "date",
    "user",
    "message",
    "only_date",
    "year",
    "month_num",
    "month",
    "day",
    "day_name",
    "hour",
    "minute",
    "period",
];

/// Write records as CSV with a header row
///
/// Bodies keep their embedded newlines; the writer quotes such fields.
///
/// # Errors
///
/// Returns an error if a row cannot be serialized or the writer fails.
pub fn write_csv<W: Write>(records: &[MessageRecord], writer: W) -> Result<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if records.is_empty() {
        // serialize() only emits headers alongside the first row
        csv_writer.write_record(CSV_HEADERS).context("Failed to write CSV header")?;
    }
    for record in records {
        csv_writer.serialize(record).context("Failed to write CSV row")?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Write records as CSV to `path`, replacing any existing file
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_csv_file(records: &[MessageRecord], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_csv(records, BufWriter::new(file))
        .with_context(|| format!("Failed to export records to {}", path.display()))?;

    debug!(path = %path.display(), rows = records.len(), "Wrote CSV export");
    Ok(())
}

/// Render records as a CSV string
///
/// # Errors
///
/// Returns an error if a row cannot be serialized.
pub fn records_to_csv_string(records: &[MessageRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    String::from_utf8(buffer).context("CSV output is not valid UTF-8")
}
