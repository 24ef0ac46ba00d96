//! JSON Lines (JSONL) output writer.
//!
//! One record per line, in source order. Suited to line-oriented tools
//! (`jq -c`, `grep`) and to appending exports from several chats.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::models::{OutputConfig, export_rows};
use crate::error::Result;
use crate::message::MessageRecord;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2024-01-01 09:05:00","author":"Alice","body":"Hello\n"}
/// {"timestamp":"2024-01-01 09:06:00","author":"Bob","body":"Hi\n"}
/// ```
pub fn write_jsonl(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, records, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(&mut buffer, records, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(
    writer: &mut W,
    records: &[MessageRecord],
    config: &OutputConfig,
) -> Result<()> {
    for row in export_rows(records, config) {
        let line = serde_json::to_string(&row)?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
