//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::analyzer::Report;
use crate::core::models::{ExportRow, OutputConfig, export_rows};
use crate::error::Result;
use crate::message::MessageRecord;

/// Writes records to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2024-01-01 09:05:00", "author": "Alice", "body": "Hello\n"},
///   {"timestamp": "2024-01-01 09:06:00", "author": "group_notification", "body": "..."}
/// ]
/// ```
pub fn write_json(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path.as_ref())?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a JSON array string.
///
/// Same format as [`write_json`], returned in memory.
pub fn to_json(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let rows: Vec<ExportRow<'_>> = export_rows(records, config).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Serializes a full analysis report as pretty-printed JSON.
pub fn report_to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::Analyzer;
    use crate::core::capabilities::StopWords;
    use crate::core::filter::UserFilter;
    use crate::config::AnalysisConfig;
    use crate::parser::parse;
    use tempfile::NamedTempFile;

    const LOG: &str = "\
[1/1/24, 9:05:00 AM] Alice: Hello\n\
[1/1/24, 9:06:00 AM] Bob joined using this group's invite link\n";

    #[test]
    fn test_write_json_basic() {
        let records = parse(LOG);
        let temp_file = NamedTempFile::new().unwrap();

        write_json(&records, temp_file.path(), &OutputConfig::new()).unwrap();
        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["timestamp"], "2024-01-01 09:05:00");
        assert_eq!(rows[0]["author"], "Alice");
        assert_eq!(rows[0]["body"], "Hello\n");
        assert_eq!(rows[1]["author"], "group_notification");
        assert!(rows[0].get("month_name").is_none());
    }

    #[test]
    fn test_to_json_with_calendar() {
        let records = parse(LOG);
        let config = OutputConfig::new().with_calendar().without_notifications();
        let parsed: serde_json::Value =
            serde_json::from_str(&to_json(&records, &config).unwrap()).unwrap();

        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["year"], 2024);
        assert_eq!(rows[0]["month_name"], "January");
        assert_eq!(rows[0]["day_name"], "Monday");
        assert_eq!(rows[0]["period"], "09-10");
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[], &OutputConfig::new()).unwrap(), "[]");
    }

    #[test]
    fn test_report_to_json() {
        let records = parse(LOG);
        let analyzer = Analyzer::new(AnalysisConfig::new().without_stop_words())
            .with_stop_words(Some(StopWords::from_text("the")));
        let report = analyzer.report(&UserFilter::Overall, &records);

        let parsed: serde_json::Value =
            serde_json::from_str(&report_to_json(&report).unwrap()).unwrap();
        assert_eq!(parsed["view"], "Overall");
        assert_eq!(parsed["stats"]["messages"], 2);
        assert_eq!(parsed["monthly_timeline"][0]["label"], "January-2024");
        assert_eq!(parsed["word_cloud"]["status"], "ready");
        assert!(parsed.get("busy_users").is_some());
    }
}
