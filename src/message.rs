//! Parsed chat records.
//!
//! This module provides [`MessageRecord`], one entry per message found in an
//! exported chat log, and [`Author`], the classification of who wrote it.
//!
//! # Overview
//!
//! A record consists of:
//! - **Parsed**: `timestamp`, `author` and `body`
//! - **Derived**: calendar fields ([`CalendarFields`]) computed once when the
//!   record is built
//!
//! Records are immutable once constructed: fields are private and only
//! reachable through accessors.
//!
//! # Examples
//!
//! ```
//! use chatstat::{Author, MessageRecord};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(23, 15, 0)
//!     .unwrap();
//! let record = MessageRecord::new(ts, Author::user("Alice"), "Happy new year!\n");
//!
//! assert_eq!(record.author().name(), Some("Alice"));
//! assert_eq!(record.calendar().month_name, "January");
//! assert_eq!(record.calendar().day_name, "Monday");
//! assert_eq!(record.calendar().period, "23-00");
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Serialize, Serializer};

/// Label used when a notification is rendered as an author column.
pub const NOTIFICATION_LABEL: &str = "group_notification";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Who wrote a message.
///
/// Every record carries exactly one classification: either a real author
/// label taken from the `Name: ` prefix, or [`Author::SystemNotification`]
/// when the segment had no such prefix ("X joined", encryption notices,
/// missed calls, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Author {
    /// A participant identified by the label before `": "`.
    User(String),
    /// A message without an author prefix.
    SystemNotification,
}

impl Author {
    /// Creates a real author.
    pub fn user(name: impl Into<String>) -> Self {
        Author::User(name.into())
    }

    /// Returns the author name, or `None` for notifications.
    pub fn name(&self) -> Option<&str> {
        match self {
            Author::User(name) => Some(name),
            Author::SystemNotification => None,
        }
    }

    /// Returns `true` for the notification sentinel.
    pub fn is_notification(&self) -> bool {
        matches!(self, Author::SystemNotification)
    }

    /// Returns the name, or [`NOTIFICATION_LABEL`] for notifications.
    pub fn label(&self) -> &str {
        self.name().unwrap_or(NOTIFICATION_LABEL)
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Author {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Calendar features derived from a record's timestamp.
///
/// | Field | Example |
/// |-------|---------|
/// | `date` | `2024-01-01` |
/// | `year` | `2024` |
/// | `month` | `1` |
/// | `month_name` | `January` |
/// | `day` | `1` |
/// | `day_name` | `Monday` |
/// | `hour` | `9` |
/// | `period` | `09-10` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarFields {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub day: u32,
    pub day_name: &'static str,
    pub hour: u32,
    pub period: String,
}

impl CalendarFields {
    /// Derives every field from a timestamp.
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        let hour = ts.hour();
        Self {
            date: ts.date(),
            year: ts.year(),
            month: ts.month(),
            month_name: month_name(ts.month()),
            day: ts.day(),
            day_name: weekday_name(ts.weekday()),
            hour,
            period: hour_period(hour),
        }
    }
}

/// English month name for a 1-based month number.
///
/// Out-of-range values map to an empty string.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}

/// English weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Hour bucket label `HH-HH`; hour 23 wraps to `23-00`.
pub fn hour_period(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

/// One parsed message.
///
/// Built by the parser in source order. The record sequence is never
/// reordered, even when timestamps in a malformed export go backwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    timestamp: NaiveDateTime,
    author: Author,
    body: String,
    #[serde(flatten)]
    calendar: CalendarFields,
}

impl MessageRecord {
    /// Creates a record and derives its calendar fields.
    pub fn new(timestamp: NaiveDateTime, author: Author, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            author,
            body: body.into(),
            calendar: CalendarFields::from_timestamp(timestamp),
        }
    }

    /// Returns the parsed timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the author classification.
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Returns the message body without the `Author: ` prefix.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the derived calendar fields.
    pub fn calendar(&self) -> &CalendarFields {
        &self.calendar
    }

    /// Returns `true` if this record has no author prefix.
    pub fn is_notification(&self) -> bool {
        self.author.is_notification()
    }

    /// Returns `true` if the record was written by `name`.
    pub fn is_authored_by(&self, name: &str) -> bool {
        self.author.name() == Some(name)
    }

    /// Returns `true` if the body is the media placeholder.
    ///
    /// Trailing line breaks are ignored, since every body except the last one
    /// in a document ends with the newline that separated it from the next
    /// timestamp.
    pub fn is_media(&self, placeholder: &str) -> bool {
        self.body.trim_end_matches(['\r', '\n']) == placeholder
    }

    /// Number of whitespace-separated words in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}
