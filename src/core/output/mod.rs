//! Export writers for parsed records and reports.
//!
//! - [`write_csv`] / [`to_csv`] - semicolon-delimited table - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON record per line - requires `json-output` feature
//! - [`report_to_json`] - a full [`Report`](crate::core::analyzer::Report) as JSON - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::models::OutputConfig;
//! use chatstat::core::output::{to_csv, write_jsonl};
//! use chatstat::parser::parse;
//!
//! let records = parse("[1/1/24, 9:05:00 AM] Alice: Hello\n");
//! let config = OutputConfig::new().with_calendar();
//!
//! write_jsonl(&records, "records.jsonl", &config)?;
//! let csv_string = to_csv(&records, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{report_to_json, to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
