//! One-call analysis of a parsed document.
//!
//! [`Analyzer`] owns the capabilities the individual statistics need (URL
//! extraction, emoji membership, stop words) and runs all of them for a
//! [`UserFilter`], collecting the results in a serializable [`Report`].

use serde::Serialize;
use tracing::debug;

use super::capabilities::{EmojiSet, LinkUrlExtractor, StopWords, UnicodeEmojiSet, UrlExtractor};
use super::filter::UserFilter;
use super::stats::{
    BasicStats, BusyUsers, DailyBucket, Heatmap, MonthlyBucket, activity_heatmap, daily_timeline,
    fetch_stats, month_activity_map, monthly_timeline, most_busy_users, week_activity_map,
};
use super::words::{WordAnalysis, emoji_frequency, most_common_words, word_cloud};
use crate::config::AnalysisConfig;
use crate::message::MessageRecord;

/// Every statistic for one view of a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// `Overall` or the selected author.
    pub view: String,
    pub stats: BasicStats,
    pub monthly_timeline: Vec<MonthlyBucket>,
    pub daily_timeline: Vec<DailyBucket>,
    pub busy_days: Vec<(&'static str, usize)>,
    pub busy_months: Vec<(&'static str, usize)>,
    pub heatmap: Heatmap,
    /// Only present for the overall view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub word_cloud: WordAnalysis<String>,
    pub common_words: WordAnalysis<Vec<(String, usize)>>,
    pub emoji: Vec<(char, usize)>,
}

/// Runs every statistic with a fixed set of capabilities.
///
/// # Example
///
/// ```rust
/// use chatstat::config::AnalysisConfig;
/// use chatstat::core::analyzer::Analyzer;
/// use chatstat::core::capabilities::StopWords;
/// use chatstat::core::filter::UserFilter;
/// use chatstat::parser::parse;
///
/// let records = parse(
///     "[1/1/24, 9:05:00 AM] Alice: Hello there\n\
///      [1/1/24, 9:06:00 AM] Bob: Hi\n",
/// );
///
/// let analyzer = Analyzer::new(AnalysisConfig::new().without_stop_words())
///     .with_stop_words(Some(StopWords::from_text("there")));
/// let report = analyzer.report(&UserFilter::Overall, &records);
///
/// assert_eq!(report.stats.messages, 2);
/// assert_eq!(report.monthly_timeline[0].label, "January-2024");
/// assert!(report.busy_users.is_some());
/// ```
pub struct Analyzer {
    config: AnalysisConfig,
    stop_words: Option<StopWords>,
    urls: Box<dyn UrlExtractor>,
    emoji: Box<dyn EmojiSet>,
}

impl Analyzer {
    /// Creates an analyzer with the default capabilities.
    ///
    /// The stop-word list is read once from `config.stop_words_path`; a
    /// missing file leaves word features unavailable.
    pub fn new(config: AnalysisConfig) -> Self {
        let stop_words = config
            .stop_words_path
            .as_deref()
            .and_then(StopWords::load_optional);

        Self {
            config,
            stop_words,
            urls: Box::new(LinkUrlExtractor::new()),
            emoji: Box::new(UnicodeEmojiSet),
        }
    }

    /// Replaces the stop-word list.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: Option<StopWords>) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Replaces the URL extractor.
    #[must_use]
    pub fn with_url_extractor(mut self, urls: impl UrlExtractor + 'static) -> Self {
        self.urls = Box::new(urls);
        self
    }

    /// Replaces the emoji set.
    #[must_use]
    pub fn with_emoji_set(mut self, emoji: impl EmojiSet + 'static) -> Self {
        self.emoji = Box::new(emoji);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Returns the stop-word list, if one is loaded.
    pub fn stop_words(&self) -> Option<&StopWords> {
        self.stop_words.as_ref()
    }

    /// Computes every statistic for `filter`.
    pub fn report(&self, filter: &UserFilter, records: &[MessageRecord]) -> Report {
        let placeholder = self.config.media_placeholder.as_str();
        let stop_words = self.stop_words.as_ref();

        let report = Report {
            view: filter.to_string(),
            stats: fetch_stats(filter, records, placeholder, self.urls.as_ref()),
            monthly_timeline: monthly_timeline(filter, records),
            daily_timeline: daily_timeline(filter, records),
            busy_days: week_activity_map(filter, records),
            busy_months: month_activity_map(filter, records),
            heatmap: activity_heatmap(filter, records),
            busy_users: filter
                .is_overall()
                .then(|| most_busy_users(records, self.config.busy_users_limit)),
            word_cloud: word_cloud(filter, records, stop_words, placeholder),
            common_words: most_common_words(
                filter,
                records,
                stop_words,
                placeholder,
                self.config.common_words_limit,
            ),
            emoji: emoji_frequency(filter, records, self.emoji.as_ref(), self.config.emoji_limit),
        };

        debug!(
            view = %report.view,
            messages = report.stats.messages,
            "analysis complete"
        );
        report
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use std::collections::HashSet;

    const LOG: &str = "\
[1/1/24, 9:05:00 AM] Alice: Hello there 😀\n\
[1/1/24, 9:06:00 AM] Bob: Hi https://example.com\n\
[1/1/24, 9:07:00 AM] Messages and calls are end-to-end encrypted\n";

    fn analyzer() -> Analyzer {
        Analyzer::new(AnalysisConfig::new().without_stop_words())
            .with_stop_words(Some(StopWords::from_text("there")))
    }

    #[test]
    fn test_overall_report() {
        let records = parse(LOG);
        let report = analyzer().report(&UserFilter::Overall, &records);
        assert_eq!(report.view, "Overall");
        assert_eq!(report.stats.messages, 3);
        assert_eq!(report.stats.links, 1);
        assert_eq!(report.heatmap.total(), 3);
        assert_eq!(report.emoji, vec![('😀', 1)]);
        let busy = report.busy_users.unwrap();
        assert_eq!(busy.top.len(), 2);
    }

    #[test]
    fn test_author_report_has_no_busy_users() {
        let records = parse(LOG);
        let report = analyzer().report(&UserFilter::author("Alice"), &records);
        assert_eq!(report.view, "Alice");
        assert_eq!(report.stats.messages, 1);
        assert!(report.busy_users.is_none());
        assert_eq!(report.word_cloud, WordAnalysis::Ready("hello 😀".to_string()));
    }

    #[test]
    fn test_missing_stop_words_only_affects_word_features() {
        let records = parse(LOG);
        let analyzer = Analyzer::new(
            AnalysisConfig::new().with_stop_words_path("/no/such/stop_words.txt"),
        );
        assert!(analyzer.stop_words().is_none());

        let report = analyzer.report(&UserFilter::Overall, &records);
        assert!(report.word_cloud.is_unavailable());
        assert!(report.common_words.is_unavailable());
        assert_eq!(report.stats.messages, 3);
        assert_eq!(report.monthly_timeline.len(), 1);
    }

    #[test]
    fn test_empty_document_report() {
        let report = analyzer().report(&UserFilter::Overall, &[]);
        assert_eq!(report.stats, BasicStats::default());
        assert!(report.monthly_timeline.is_empty());
        assert!(report.heatmap.is_empty());
        assert!(report.word_cloud.is_no_data());
        assert!(report.emoji.is_empty());
        assert_eq!(report.busy_users, Some(BusyUsers::default()));
    }

    #[test]
    fn test_custom_capabilities() {
        struct NoUrls;
        impl UrlExtractor for NoUrls {
            fn find_urls<'a>(&self, _text: &'a str) -> Vec<&'a str> {
                Vec::new()
            }
        }

        let records = parse(LOG);
        let only_h: HashSet<char> = ['H'].into_iter().collect();
        let report = analyzer()
            .with_url_extractor(NoUrls)
            .with_emoji_set(only_h)
            .report(&UserFilter::Overall, &records);
        assert_eq!(report.stats.links, 0);
        assert_eq!(report.emoji, vec![('H', 2)]);
    }

    #[test]
    fn test_report_is_idempotent() {
        let records = parse(LOG);
        let analyzer = analyzer();
        assert_eq!(
            analyzer.report(&UserFilter::Overall, &records),
            analyzer.report(&UserFilter::Overall, &records)
        );
    }
}
