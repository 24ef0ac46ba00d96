//! Author prefix detection.
//!
//! After its timestamp, a message segment reads either `Alice: body` or, for
//! system notifications, just the notification text. The author label is the
//! shortest run of characters followed by a colon and one whitespace
//! character.

use regex::Regex;

use crate::message::Author;

/// Shortest prefix ending in `:` plus one whitespace character.
pub const AUTHOR_PATTERN: &str = r"(?s)^(.+?):\s";

/// Compiles [`AUTHOR_PATTERN`].
pub(crate) fn author_regex() -> Regex {
    Regex::new(AUTHOR_PATTERN).expect("author pattern is a valid regex")
}

/// Characters between the closing bracket and the author label.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{200e}'
}

/// Splits a segment into its author classification and body.
///
/// The separator after the timestamp bracket (a space, sometimes preceded by
/// a left-to-right mark) belongs to neither part. Without an author prefix
/// the whole remaining segment becomes the body of a
/// [`Author::SystemNotification`].
///
/// ```
/// use chatstat::Author;
/// use chatstat::parsing::split_author;
///
/// let re = regex::Regex::new(chatstat::parsing::AUTHOR_PATTERN).unwrap();
///
/// let (author, body) = split_author(&re, " Alice: Hello there\n");
/// assert_eq!(author, Author::user("Alice"));
/// assert_eq!(body, "Hello there\n");
///
/// let (author, body) = split_author(&re, " Missed voice call\n");
/// assert_eq!(author, Author::SystemNotification);
/// assert_eq!(body, "Missed voice call\n");
/// ```
pub fn split_author<'a>(re: &Regex, segment: &'a str) -> (Author, &'a str) {
    let segment = segment.trim_start_matches(is_separator);

    match re.captures(segment) {
        Some(caps) => {
            let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
                return (Author::SystemNotification, segment);
            };
            (Author::user(label.as_str()), &segment[whole.end()..])
        }
        None => (Author::SystemNotification, segment),
    }
}
