//! Word and emoji frequencies.
//!
//! Word features share one cleaning rule: system notifications and media
//! placeholders are skipped, bodies are lower-cased and split on whitespace,
//! and tokens in the stop-word list are dropped. Without a stop-word list the
//! word features report [`WordAnalysis::Unavailable`].

use serde::Serialize;

use super::capabilities::{EmojiSet, StopWords};
use super::filter::UserFilter;
use super::stats::rank_by_frequency;
use crate::message::MessageRecord;

/// Result of a word feature that depends on the stop-word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum WordAnalysis<T> {
    /// The stop-word list could not be loaded.
    Unavailable,
    /// Nothing was left after cleaning.
    NoData,
    /// The computed value.
    Ready(T),
}

impl<T> WordAnalysis<T> {
    /// Returns the value if it was computed.
    pub fn ready(&self) -> Option<&T> {
        match self {
            WordAnalysis::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if the stop-word list was missing.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, WordAnalysis::Unavailable)
    }

    /// Returns `true` if cleaning left nothing.
    pub fn is_no_data(&self) -> bool {
        matches!(self, WordAnalysis::NoData)
    }
}

/// Lower-cased, stop-word-free tokens of every eligible body, in order.
fn cleaned_tokens<'a>(
    filter: &'a UserFilter,
    records: &'a [MessageRecord],
    stop_words: &'a StopWords,
    media_placeholder: &'a str,
) -> impl Iterator<Item = String> + 'a {
    filter
        .select(records)
        .filter(move |r| !r.is_notification() && !r.is_media(media_placeholder))
        .flat_map(move |r| {
            r.body()
                .to_lowercase()
                .split_whitespace()
                .filter(|token| !stop_words.contains(token))
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
}

/// Builds the normalized text blob a word-cloud renderer consumes.
///
/// ```
/// use chatstat::core::capabilities::StopWords;
/// use chatstat::core::filter::UserFilter;
/// use chatstat::core::words::{WordAnalysis, word_cloud};
/// use chatstat::parser::parse;
///
/// let records = parse("[1/1/24, 9:05:00 AM] Alice: Hello THE World\n");
/// let stop = StopWords::from_text("the");
///
/// let cloud = word_cloud(&UserFilter::Overall, &records, Some(&stop), "<Media omitted>");
/// assert_eq!(cloud, WordAnalysis::Ready("hello world".to_string()));
///
/// let missing = word_cloud(&UserFilter::Overall, &records, None, "<Media omitted>");
/// assert!(missing.is_unavailable());
/// ```
pub fn word_cloud(
    filter: &UserFilter,
    records: &[MessageRecord],
    stop_words: Option<&StopWords>,
    media_placeholder: &str,
) -> WordAnalysis<String> {
    let Some(stop_words) = stop_words else {
        return WordAnalysis::Unavailable;
    };

    let text = cleaned_tokens(filter, records, stop_words, media_placeholder)
        .collect::<Vec<_>>()
        .join(" ");

    if text.trim().is_empty() {
        WordAnalysis::NoData
    } else {
        WordAnalysis::Ready(text)
    }
}

/// Ranks cleaned tokens by count, keeping at most `limit`.
///
/// Ties keep the order in which words first appear.
pub fn most_common_words(
    filter: &UserFilter,
    records: &[MessageRecord],
    stop_words: Option<&StopWords>,
    media_placeholder: &str,
    limit: usize,
) -> WordAnalysis<Vec<(String, usize)>> {
    let Some(stop_words) = stop_words else {
        return WordAnalysis::Unavailable;
    };

    let mut ranked = rank_by_frequency(cleaned_tokens(
        filter,
        records,
        stop_words,
        media_placeholder,
    ));
    ranked.truncate(limit);

    if ranked.is_empty() {
        WordAnalysis::NoData
    } else {
        WordAnalysis::Ready(ranked)
    }
}

/// Ranks emoji by count across every body, keeping at most `limit`.
///
/// Each character is tested on its own, so a multi-code-point sequence such
/// as a flag counts as its component symbols.
pub fn emoji_frequency(
    filter: &UserFilter,
    records: &[MessageRecord],
    emoji: &dyn EmojiSet,
    limit: usize,
) -> Vec<(char, usize)> {
    let mut ranked = rank_by_frequency(
        filter
            .select(records)
            .flat_map(|r| r.body().chars())
            .filter(|&c| emoji.is_emoji(c)),
    );
    ranked.truncate(limit);
    ranked
}
