//! # Chatstat
//!
//! A Rust library for parsing exported WhatsApp chat logs and computing
//! message statistics from them.
//!
//! ## Overview
//!
//! A chat export is plain text in which every message starts with a
//! bracketed timestamp such as `[1/1/24, 9:05:00 AM]`. Chatstat splits the
//! text into [`MessageRecord`]s (timestamp, [`Author`], body and derived
//! calendar fields) and aggregates them into:
//!
//! - Top-level counts: messages, words, media and links
//! - Monthly and daily timelines
//! - Weekday and month activity maps, and a weekday × hour heatmap
//! - The busiest authors and their share of the chat
//! - Word cloud text, most common words and emoji frequency
//!
//! Every statistic can be computed for the whole chat
//! ([`UserFilter::Overall`](core::filter::UserFilter::Overall)) or for one
//! author.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! let records = parse(
//!     "[1/1/24, 9:05:00 AM] Alice: Hello\n\
//!      [1/1/24, 9:06:00 AM] Bob: Hi https://example.com\n",
//! );
//!
//! let stats = fetch_stats(&UserFilter::Overall, &records, "<Media omitted>", &LinkUrlExtractor::new());
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.links, 1);
//!
//! let timeline = monthly_timeline(&UserFilter::Overall, &records);
//! assert_eq!(timeline[0].label, "January-2024");
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`](parser::ChatParser) and [`parse`](parser::parse)
//! - [`parsing`] - Timestamp and author splitting primitives
//! - [`message`] - [`MessageRecord`], [`Author`], calendar fields
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`core`] - Filters, capabilities, statistics, [`Analyzer`](core::Analyzer) and writers
//! - [`format`] - [`ExportFormat`](format::ExportFormat) and format dispatch
//! - [`error`] - [`ChatstatError`] and [`Result`]
//! - `cli` - CLI argument types (`cli` feature)
//! - [`prelude`] - Convenient re-exports
//!
//! ## Logging
//!
//! The library emits [`tracing`] events (`warn` for excluded records and a
//! missing stop-word list, `debug` for summaries). Install any subscriber to
//! see them; the `chatstat` binary logs to stderr.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

pub use error::{ChatstatError, Result};
pub use message::{Author, MessageRecord};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::message::{Author, CalendarFields, MessageRecord};

    pub use crate::error::{ChatstatError, Result};

    pub use crate::config::{AnalysisConfig, DateOrder, ParserConfig};
    pub use crate::parser::{ChatParser, authors, parse};

    pub use crate::core::analyzer::{Analyzer, Report};
    pub use crate::core::capabilities::{
        EmojiSet, LinkUrlExtractor, StopWords, UnicodeEmojiSet, UrlExtractor,
    };
    pub use crate::core::filter::{FilterConfig, UserFilter, apply_filters};
    pub use crate::core::models::OutputConfig;
    pub use crate::core::stats::{
        activity_heatmap, daily_timeline, fetch_stats, month_activity_map, monthly_timeline,
        most_busy_users, week_activity_map,
    };
    pub use crate::core::words::{WordAnalysis, emoji_frequency, most_common_words, word_cloud};

    pub use crate::format::{ExportFormat, write_records};
}
