//! Chat log parser.
//!
//! [`ChatParser`] turns the full text of an exported chat log into an ordered
//! sequence of [`MessageRecord`]s:
//!
//! 1. Every bracketed timestamp in the text is located.
//! 2. Text before the first timestamp is a preamble and is discarded.
//! 3. Each timestamp owns the text up to the next timestamp (or the end).
//! 4. The timestamp is parsed day-first, falling back to month-first.
//! 5. An `Author: ` prefix is split off; segments without one become
//!    system notifications.
//!
//! A document without any timestamp yields an empty sequence. A record whose
//! timestamp matches the pattern but is not a valid date under any reading is
//! excluded and logged; parsing continues with the next one.
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::parse;
//! use chatstat::Author;
//!
//! let log = "[1/1/24, 9:05:00 AM] Alice: Hello there\n\
//!            [1/1/24, 9:06:00 AM] Bob: Hi\n";
//!
//! let records = parse(log);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].author(), &Author::user("Alice"));
//! assert_eq!(records[0].body(), "Hello there\n");
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::error::{ChatstatError, Result};
use crate::message::MessageRecord;
use crate::parsing::author::{author_regex, split_author};
use crate::parsing::timestamp::{parse_timestamp, timestamp_regex};

/// Parser for exported chat logs with bracketed timestamps.
///
/// The parser holds only compiled patterns and configuration; every call
/// builds a fresh record sequence, so one instance can serve any number of
/// documents without sharing state between them.
///
/// # Example
///
/// ```rust,no_run
/// use chatstat::parser::ChatParser;
///
/// let parser = ChatParser::new();
/// let records = parser.parse("WhatsApp Chat.txt".as_ref())?;
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChatParser {
    config: ParserConfig,
    timestamp_re: Regex,
    author_re: Regex,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            timestamp_re: timestamp_regex(),
            author_re: author_regex(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses a chat export from disk.
    ///
    /// The file must be UTF-8; a leading byte order mark is tolerated.
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let content = fs::read_to_string(path).map_err(|e| ChatstatError::read(path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "read chat export");
        Ok(self.parse_str(&content))
    }

    /// Parses the full text of a chat export.
    pub fn parse_str(&self, raw: &str) -> Vec<MessageRecord> {
        let text = if self.config.strip_bom {
            raw.strip_prefix('\u{feff}').unwrap_or(raw)
        } else {
            raw
        };

        let matches: Vec<regex::Match<'_>> = self.timestamp_re.find_iter(text).collect();
        if matches.is_empty() {
            debug!("no timestamps found; returning empty record sequence");
            return Vec::new();
        }

        let mut records = Vec::with_capacity(matches.len());
        let mut skipped = 0usize;

        for (i, stamp) in matches.iter().enumerate() {
            let end = matches.get(i + 1).map_or(text.len(), |next| next.start());
            let segment = &text[stamp.end()..end];

            let Some(timestamp) = parse_timestamp(
                stamp.as_str(),
                self.config.date_order,
                self.config.swap_on_invalid,
            ) else {
                warn!(
                    timestamp = stamp.as_str(),
                    offset = stamp.start(),
                    "excluding record with unparseable timestamp"
                );
                skipped += 1;
                continue;
            };

            let (author, body) = split_author(&self.author_re, segment);
            records.push(MessageRecord::new(timestamp, author, body));
        }

        debug!(records = records.len(), skipped, "parsed chat log");
        records
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a chat export with the default configuration.
pub fn parse(raw: &str) -> Vec<MessageRecord> {
    ChatParser::new().parse_str(raw)
}

/// Returns every real author in the records, sorted and de-duplicated.
///
/// System notifications are never listed.
pub fn authors(records: &[MessageRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.author().name())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
