//! Bracketed timestamp recognition and calendar parsing.
//!
//! Exports handled here prefix each message with a timestamp such as
//! `[20/12/25, 3:46:30 PM]`. Day and month take one or two digits, the year
//! two or four, the hour one or two, and the AM/PM marker is optional and may
//! be separated by any whitespace (iOS uses U+202F NARROW NO-BREAK SPACE).

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pattern matching one bracketed timestamp anywhere in the document.
pub const TIMESTAMP_PATTERN: &str =
    r"\[\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}:\d{2}(?:\s?[APap][Mm])?\]";

/// Which numeric field comes first in the date part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `D/M/Y`
    /// Example: [20/12/25, 3:46:30 PM]
    #[default]
    DayFirst,
    /// `M/D/Y`
    /// Example: [12/20/25, 3:46:30 PM]
    MonthFirst,
}

impl DateOrder {
    /// The other reading of an ambiguous date.
    pub fn swapped(self) -> Self {
        match self {
            DateOrder::DayFirst => DateOrder::MonthFirst,
            DateOrder::MonthFirst => DateOrder::DayFirst,
        }
    }

    /// Returns chrono format strings for this order.
    ///
    /// Two-digit years are tried before four-digit ones: `%Y` would happily
    /// read `24` as the year 24 AD.
    pub fn date_parse_formats(self, twelve_hour: bool) -> &'static [&'static str] {
        match (self, twelve_hour) {
            (DateOrder::DayFirst, true) => &["%d/%m/%y, %I:%M:%S %p", "%d/%m/%Y, %I:%M:%S %p"],
            (DateOrder::DayFirst, false) => &["%d/%m/%y, %H:%M:%S", "%d/%m/%Y, %H:%M:%S"],
            (DateOrder::MonthFirst, true) => &["%m/%d/%y, %I:%M:%S %p", "%m/%d/%Y, %I:%M:%S %p"],
            (DateOrder::MonthFirst, false) => &["%m/%d/%y, %H:%M:%S", "%m/%d/%Y, %H:%M:%S"],
        }
    }
}

/// Compiles [`TIMESTAMP_PATTERN`].
pub(crate) fn timestamp_regex() -> Regex {
    Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is a valid regex")
}

/// Parses a matched timestamp such as `[1/1/24, 9:05:00 AM]`.
///
/// Brackets are optional. The preferred `order` is tried first; when
/// `swap_on_invalid` is set and that reading is not a real calendar date
/// (e.g. month 15), the other order is tried. Returns `None` when no variant
/// yields a valid date-time.
pub fn parse_timestamp(
    raw: &str,
    order: DateOrder,
    swap_on_invalid: bool,
) -> Option<NaiveDateTime> {
    let normalized = normalize(raw);
    let twelve_hour = normalized.ends_with(" AM") || normalized.ends_with(" PM");

    parse_with_order(&normalized, order, twelve_hour).or_else(|| {
        if swap_on_invalid {
            parse_with_order(&normalized, order.swapped(), twelve_hour)
        } else {
            None
        }
    })
}

fn parse_with_order(s: &str, order: DateOrder, twelve_hour: bool) -> Option<NaiveDateTime> {
    order
        .date_parse_formats(twelve_hour)
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}

/// Strips brackets, collapses whitespace and separates an attached meridiem:
/// `[1/1/24,\u{202f}9:05:00pm]` becomes `1/1/24, 9:05:00 PM`.
fn normalize(raw: &str) -> String {
    let inner = raw
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']');
    let mut out = inner.split_whitespace().collect::<Vec<_>>().join(" ");

    let upper = out.to_ascii_uppercase();
    if upper.ends_with("AM") || upper.ends_with("PM") {
        let split = out.len() - 2;
        let marker = upper[split..].to_string();
        out.truncate(split);
        let trimmed_len = out.trim_end().len();
        out.truncate(trimmed_len);
        out.push(' ');
        out.push_str(&marker);
    }

    out
}
