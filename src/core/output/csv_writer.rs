//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::{ExportRow, OutputConfig, export_rows};
use crate::error::{ChatstatError, Result};
use crate::message::MessageRecord;

const BASE_COLUMNS: [&str; 3] = ["Timestamp", "Author", "Body"];
const CALENDAR_COLUMNS: [&str; 8] = [
    "Date", "Year", "Month", "MonthName", "Day", "DayName", "Hour", "Period",
];

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Author`, `Body`, followed by the calendar
///   columns when [`OutputConfig::include_calendar`] is set
/// - Encoding: UTF-8
pub fn write_csv(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let path = output_path.as_ref();
    let file = File::create(path)?;
    write_rows(file, records, config)?;
    tracing::debug!(path = %path.display(), records = records.len(), "wrote CSV export");
    Ok(())
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`], returned in memory.
pub fn to_csv(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(&mut buffer, records, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<W: Write>(
    out: W,
    records: &[MessageRecord],
    config: &OutputConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;
    for row in export_rows(records, config) {
        writer.write_record(build_record(&row))?;
    }

    writer.flush().map_err(ChatstatError::from)
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = BASE_COLUMNS.to_vec();
    if config.include_calendar {
        header.extend(CALENDAR_COLUMNS);
    }
    header
}

// csv cannot serialize flattened structs, so rows are built by hand.
fn build_record(row: &ExportRow<'_>) -> Vec<String> {
    let mut record = vec![
        row.timestamp.clone(),
        row.author.to_string(),
        row.body.to_string(),
    ];

    if let Some(cal) = row.calendar {
        record.extend([
            cal.date.to_string(),
            cal.year.to_string(),
            cal.month.to_string(),
            cal.month_name.to_string(),
            cal.day.to_string(),
            cal.day_name.to_string(),
            cal.hour.to_string(),
            cal.period.clone(),
        ]);
    }

    record
}
