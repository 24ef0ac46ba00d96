//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how timestamps are read and how the input is cleaned
//! - [`AnalysisConfig`] - limits, the media placeholder and the stop-word file
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AnalysisConfig, ParserConfig};
//! use chatstat::parsing::DateOrder;
//! use chatstat::parser::ChatParser;
//!
//! let parser = ChatParser::with_config(
//!     ParserConfig::new().with_date_order(DateOrder::MonthFirst),
//! );
//!
//! let analysis = AnalysisConfig::new()
//!     .with_common_words_limit(10)
//!     .with_stop_words_path("stop_words.txt");
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use crate::parsing::DateOrder;

/// Default media placeholder written by WhatsApp in place of attachments.
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Default location of the stop-word list.
pub const DEFAULT_STOP_WORDS_PATH: &str = "stop_hinglish.txt";

/// Configuration for chat log parsing.
///
/// # Example
///
/// ```rust
/// use chatstat::config::ParserConfig;
///
/// let config = ParserConfig::new().with_swap_on_invalid(false);
/// assert!(!config.swap_on_invalid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Preferred reading of ambiguous dates (default: day first)
    pub date_order: DateOrder,

    /// Retry with the other order when the preferred one is not a valid
    /// calendar date (default: true)
    pub swap_on_invalid: bool,

    /// Drop a leading UTF-8 byte order mark (default: true)
    pub strip_bom: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::DayFirst,
            swap_on_invalid: true,
            strip_bom: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preferred date order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Sets whether the other date order is tried for invalid dates.
    #[must_use]
    pub fn with_swap_on_invalid(mut self, enabled: bool) -> Self {
        self.swap_on_invalid = enabled;
        self
    }

    /// Sets whether a leading byte order mark is removed.
    #[must_use]
    pub fn with_strip_bom(mut self, enabled: bool) -> Self {
        self.strip_bom = enabled;
        self
    }
}

/// Configuration for the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Body that marks an omitted attachment (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// How many authors the busiest-users ranking keeps (default: 5)
    pub busy_users_limit: usize,

    /// How many words the common-words ranking keeps (default: 20)
    pub common_words_limit: usize,

    /// How many emoji the emoji ranking keeps (default: 10)
    pub emoji_limit: usize,

    /// Whitespace-delimited stop-word list (default: `stop_hinglish.txt`)
    pub stop_words_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
            busy_users_limit: 5,
            common_words_limit: 20,
            emoji_limit: 10,
            stop_words_path: Some(PathBuf::from(DEFAULT_STOP_WORDS_PATH)),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder token.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the size of the busiest-users ranking.
    #[must_use]
    pub fn with_busy_users_limit(mut self, limit: usize) -> Self {
        self.busy_users_limit = limit;
        self
    }

    /// Sets the size of the common-words ranking.
    #[must_use]
    pub fn with_common_words_limit(mut self, limit: usize) -> Self {
        self.common_words_limit = limit;
        self
    }

    /// Sets the size of the emoji ranking.
    #[must_use]
    pub fn with_emoji_limit(mut self, limit: usize) -> Self {
        self.emoji_limit = limit;
        self
    }

    /// Sets the stop-word file location.
    #[must_use]
    pub fn with_stop_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words_path = Some(path.into());
        self
    }

    /// Disables stop-word loading; word features report "unavailable".
    #[must_use]
    pub fn without_stop_words(mut self) -> Self {
        self.stop_words_path = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.date_order, DateOrder::DayFirst);
        assert!(config.swap_on_invalid);
        assert!(config.strip_bom);
    }

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::new()
            .with_date_order(DateOrder::MonthFirst)
            .with_swap_on_invalid(false)
            .with_strip_bom(false);
        assert_eq!(config.date_order, DateOrder::MonthFirst);
        assert!(!config.swap_on_invalid);
        assert!(!config.strip_bom);
    }

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.media_placeholder, "<Media omitted>");
        assert_eq!(config.busy_users_limit, 5);
        assert_eq!(config.common_words_limit, 20);
        assert_eq!(config.emoji_limit, 10);
        assert_eq!(
            config.stop_words_path,
            Some(PathBuf::from("stop_hinglish.txt"))
        );
    }

    #[test]
    fn test_analysis_config_builder() {
        let config = AnalysisConfig::new()
            .with_media_placeholder("<attached>")
            .with_busy_users_limit(3)
            .with_common_words_limit(7)
            .with_emoji_limit(2)
            .without_stop_words();
        assert_eq!(config.media_placeholder, "<attached>");
        assert_eq!(config.busy_users_limit, 3);
        assert_eq!(config.common_words_limit, 7);
        assert_eq!(config.emoji_limit, 2);
        assert!(config.stop_words_path.is_none());
    }

    #[test]
    fn test_config_serde_fills_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"emoji_limit": 3}"#).unwrap();
        assert_eq!(config.emoji_limit, 3);
        assert_eq!(config.common_words_limit, 20);

        let parser: ParserConfig =
            serde_json::from_str(r#"{"date_order": "month_first"}"#).unwrap();
        assert_eq!(parser.date_order, DateOrder::MonthFirst);
        assert!(parser.swap_on_invalid);
    }
}
