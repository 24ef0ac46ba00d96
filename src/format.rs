//! Export formats for parsed records.
//!
//! These types carry no CLI dependencies; the binary maps its flags onto
//! them.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::models::OutputConfig;
//! use chatstat::format::{ExportFormat, write_records};
//! use chatstat::parser::parse;
//!
//! let records = parse("[1/1/24, 9:05:00 AM] Alice: Hello\n");
//!
//! let format = ExportFormat::from_path("records.jsonl")?;
//! write_records(&records, "records.jsonl", format, &OutputConfig::new())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::{ChatstatError, Result};
use crate::message::MessageRecord;

/// File format of a record export.
///
/// ```rust
/// use chatstat::format::ExportFormat;
///
/// let format: ExportFormat = "ndjson".parse().unwrap();
/// assert_eq!(format, ExportFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExportFormat {
    /// Semicolon-delimited table
    #[default]
    Csv,
    /// Pretty-printed JSON array
    Json,
    /// One JSON object per line (NDJSON)
    Jsonl,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Jsonl => "jsonl",
        }
    }

    /// Returns every accepted format name.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Cargo feature that enables the writer for this format.
    pub fn required_feature(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv-output",
            ExportFormat::Json | ExportFormat::Jsonl => "json-output",
        }
    }

    /// Detects the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidFormat`] for an unknown or missing
    /// extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        ext.parse().map_err(|_| {
            ChatstatError::invalid_format(
                "export",
                format!("unknown file extension '.{ext}', expected one of: csv, json, jsonl"),
            )
        })
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{s}'. Expected one of: {}",
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes records to `path` with the writer for `format`.
///
/// # Errors
///
/// Fails if the writer's feature is disabled or the file cannot be written.
#[allow(unused_variables)]
pub fn write_records(
    records: &[MessageRecord],
    path: impl AsRef<Path>,
    format: ExportFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        ExportFormat::Json => crate::core::output::write_json(records, path, config),
        #[cfg(feature = "json-output")]
        ExportFormat::Jsonl => crate::core::output::write_jsonl(records, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders records in `format` as a string.
#[allow(unused_variables)]
pub fn records_to_string(
    records: &[MessageRecord],
    format: ExportFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::to_csv(records, config),
        #[cfg(feature = "json-output")]
        ExportFormat::Json => crate::core::output::to_json(records, config),
        #[cfg(feature = "json-output")]
        ExportFormat::Jsonl => crate::core::output::to_jsonl(records, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

#[allow(dead_code)]
fn feature_disabled(format: ExportFormat) -> ChatstatError {
    ChatstatError::invalid_format(
        "export",
        format!(
            "{format} export requires the '{}' feature",
            format.required_feature()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(ExportFormat::from_str("csv").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_str("JSON").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::from_str("ndjson").unwrap(), ExportFormat::Jsonl);
        assert!(ExportFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path("out.csv").unwrap(), ExportFormat::Csv);
        assert_eq!(
            ExportFormat::from_path("/tmp/dir.v2/out.JSONL").unwrap(),
            ExportFormat::Jsonl
        );
        let err = ExportFormat::from_path("out.txt").unwrap_err();
        assert!(err.is_invalid_format());
        assert!(ExportFormat::from_path("no_extension").is_err());
    }

    #[test]
    fn test_format_display_and_serde() {
        assert_eq!(ExportFormat::Jsonl.to_string(), "JSONL");
        assert_eq!(serde_json::to_string(&ExportFormat::Csv).unwrap(), "\"csv\"");
        assert_eq!(ExportFormat::default(), ExportFormat::Csv);
    }

    #[cfg(all(feature = "csv-output", feature = "json-output"))]
    #[test]
    fn test_records_to_string_dispatch() {
        let records = crate::parser::parse("[1/1/24, 9:05:00 AM] Alice: Hello\n");
        let config = OutputConfig::new();

        let csv = records_to_string(&records, ExportFormat::Csv, &config).unwrap();
        assert!(csv.starts_with("Timestamp;Author;Body"));

        let json = records_to_string(&records, ExportFormat::Json, &config).unwrap();
        assert!(json.trim_start().starts_with('['));

        let jsonl = records_to_string(&records, ExportFormat::Jsonl, &config).unwrap();
        assert_eq!(jsonl.lines().count(), 1);
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_write_records_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        let records = crate::parser::parse("[1/1/24, 9:05:00 AM] Alice: Hello\n");

        write_records(&records, &path, ExportFormat::Csv, &OutputConfig::new()).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("Alice"));
    }
}
