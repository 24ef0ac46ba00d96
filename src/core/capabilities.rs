//! Capabilities the aggregator consumes without owning.
//!
//! URL detection, emoji membership and the stop-word list are passed into
//! aggregator calls explicitly instead of being looked up globally, so every
//! statistic is a pure function of its arguments.
//!
//! | Capability | Trait / type | Default implementation |
//! |------------|--------------|------------------------|
//! | URL extraction | [`UrlExtractor`] | [`LinkUrlExtractor`] |
//! | Emoji membership | [`EmojiSet`] | [`UnicodeEmojiSet`] |
//! | Stop words | [`StopWords`] | loaded from a text file |

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use linkify::{LinkFinder, LinkKind};
use tracing::{debug, warn};

use crate::error::{ChatstatError, Result};

/// Finds URLs inside message text.
pub trait UrlExtractor {
    /// Returns every URL found in `text`, in order of appearance.
    fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Number of URLs in `text`.
    fn count_urls(&self, text: &str) -> usize {
        self.find_urls(text).len()
    }
}

/// Tells whether a single character is an emoji.
pub trait EmojiSet {
    /// Returns `true` if `c` is a recognized emoji code point.
    fn is_emoji(&self, c: char) -> bool;
}

/// URL detection backed by [`linkify`].
///
/// Recognizes URLs with a scheme, hosts starting with `www.` and bare domains
/// (`docs.rs/regex`). A bare domain needs a letter in its first label and an
/// alphabetic top-level domain of two or more characters, so version strings
/// like `1.2.in` and abbreviations like `e.g.` are not links. The domain part
/// of an email address is not a link either. Trailing sentence punctuation is
/// not part of the URL.
///
/// ```
/// use chatstat::core::capabilities::{LinkUrlExtractor, UrlExtractor};
///
/// let urls = LinkUrlExtractor::new();
/// let found = urls.find_urls("see https://example.com/a, or www.rust-lang.org.");
/// assert_eq!(found, vec!["https://example.com/a", "www.rust-lang.org"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkUrlExtractor;

impl LinkUrlExtractor {
    /// Creates the extractor. Scheme-less domains are accepted.
    pub const fn new() -> Self {
        Self
    }
}

impl UrlExtractor for LinkUrlExtractor {
    fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url]).url_must_have_scheme(false);

        finder
            .links(text)
            .filter(|link| !text[..link.start()].ends_with('@'))
            .map(|link| link.as_str())
            .filter(|url| url.contains("://") || is_bare_domain(url))
            .collect()
    }
}

/// Host check for URLs written without a scheme.
fn is_bare_domain(url: &str) -> bool {
    let host = url.split(['/', '?', '#', ':']).next().unwrap_or_default();
    if host.contains('@') {
        return false;
    }

    let labels: Vec<&str> = host.split('.').collect();
    let (Some(first), Some(tld)) = (labels.first(), labels.last()) else {
        return false;
    };

    labels.len() >= 2
        && first.chars().any(char::is_alphabetic)
        && tld.chars().count() >= 2
        && (tld.chars().all(char::is_alphabetic) || tld.starts_with("xn--"))
}

/// Emoji membership from the Unicode emoji data shipped with [`emojis`].
///
/// A character counts when it is an emoji on its own or when it becomes one
/// with a trailing U+FE0F presentation selector (`❤`, `⤴`). Skin tone
/// modifiers, hair components and regional indicators are counted as well so
/// flags and toned emoji are tallied per code point. Joiners and variation
/// selectors are not emoji on their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmojiSet;

impl EmojiSet for UnicodeEmojiSet {
    fn is_emoji(&self, c: char) -> bool {
        if c.is_ascii() {
            return false;
        }
        if matches!(u32::from(c), 0x1F1E6..=0x1F1FF | 0x1F3FB..=0x1F3FF | 0x1F9B0..=0x1F9B3) {
            return true;
        }

        let mut buf = [0; 4];
        if emojis::get(c.encode_utf8(&mut buf)).is_some() {
            return true;
        }

        let qualified: String = [c, '\u{fe0f}'].into_iter().collect();
        emojis::get(&qualified).is_some()
    }
}

impl EmojiSet for HashSet<char> {
    fn is_emoji(&self, c: char) -> bool {
        self.contains(&c)
    }
}

/// A set of tokens excluded from word statistics.
///
/// Tokens are compared after lower-casing the message, so the list should be
/// lower-case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Builds a set from whitespace-delimited text.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Reads a whitespace-delimited stop-word file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ChatstatError::read(path, e))?;
        let words = Self::from_text(text.trim_start_matches('\u{feff}'));
        debug!(path = %path.display(), count = words.len(), "loaded stop words");
        Ok(words)
    }

    /// Reads a stop-word file, returning `None` if it is missing or unreadable.
    ///
    /// Word features degrade to "unavailable" in that case instead of failing
    /// the whole analysis.
    pub fn load_optional(path: &Path) -> Option<Self> {
        match Self::load(path) {
            Ok(words) => Some(words),
            Err(e) => {
                warn!(error = %e, "stop-word list unavailable; word statistics disabled");
                None
            }
        }
    }

    /// Returns `true` if `word` is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
