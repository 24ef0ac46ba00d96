//! Record filtering, statistics and export.
//!
//! This module contains:
//! - [`filter`] - Author selection and date ranges
//! - [`capabilities`] - URL, emoji and stop-word providers
//! - [`stats`] - Counts, timelines, activity maps and the heatmap
//! - [`words`] - Word cloud text, common words and emoji frequency
//! - [`analyzer`] - Every statistic for one view in a single [`Report`]
//! - [`models`] - Export configuration
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstat::core::{Analyzer, UserFilter};
//! use chatstat::config::AnalysisConfig;
//! use chatstat::parser::parse;
//!
//! let records = parse("[1/1/24, 9:05:00 AM] Alice: Hello\n");
//! let report = Analyzer::new(AnalysisConfig::new().without_stop_words())
//!     .report(&UserFilter::Overall, &records);
//! assert_eq!(report.stats.messages, 1);
//! ```

pub mod analyzer;
pub mod capabilities;
pub mod filter;
pub mod models;
pub mod output;
pub mod stats;
pub mod words;

pub use analyzer::{Analyzer, Report};
pub use capabilities::{EmojiSet, LinkUrlExtractor, StopWords, UnicodeEmojiSet, UrlExtractor};
pub use filter::{FilterConfig, UserFilter, apply_filters};
pub use models::OutputConfig;
pub use stats::{
    BasicStats, BusyUsers, Heatmap, activity_heatmap, daily_timeline, fetch_stats,
    month_activity_map, monthly_timeline, most_busy_users, week_activity_map,
};
pub use words::{WordAnalysis, emoji_frequency, most_common_words, word_cloud};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{report_to_json, to_json, to_jsonl, write_json, write_jsonl};
