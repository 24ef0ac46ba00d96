//! Filter records by author and date range.
//!
//! [`UserFilter`] is the author selector every aggregator takes. The wider
//! [`FilterConfig`] adds an optional inclusive date range and is applied
//! once, before analysis, with [`apply_filters`].
//!
//! # Behavior Notes
//!
//! - [`UserFilter::Overall`] keeps every record, notifications included
//! - [`UserFilter::Author`] matches the author label exactly and never
//!   matches a notification
//! - Date bounds are inclusive calendar days
//!
//! # Example
//!
//! ```
//! use chatstat::core::filter::{FilterConfig, UserFilter, apply_filters};
//! use chatstat::parser::parse;
//!
//! # fn main() -> chatstat::Result<()> {
//! let records = parse(
//!     "[1/1/24, 9:00:00 AM] Alice: old\n\
//!      [1/6/24, 9:00:00 AM] Alice: new\n\
//!      [1/6/24, 9:01:00 AM] Bob: hi\n",
//! );
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_user(UserFilter::author("Alice"));
//!
//! let filtered = apply_filters(&records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body(), "new\n");
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ChatstatError;
use crate::message::MessageRecord;

/// Which records an analysis covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserFilter {
    /// Every record, including system notifications.
    #[default]
    Overall,
    /// Only records written by this author.
    Author(String),
}

impl UserFilter {
    /// Creates an author filter.
    pub fn author(name: impl Into<String>) -> Self {
        UserFilter::Author(name.into())
    }

    /// Returns `true` if the record passes this filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            UserFilter::Overall => true,
            UserFilter::Author(name) => record.is_authored_by(name),
        }
    }

    /// Returns `true` for the overall view.
    pub fn is_overall(&self) -> bool {
        matches!(self, UserFilter::Overall)
    }

    /// Iterates over the records passing this filter, in source order.
    pub fn select<'a>(
        &'a self,
        records: &'a [MessageRecord],
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        records.iter().filter(move |r| self.matches(r))
    }
}

impl std::fmt::Display for UserFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserFilter::Overall => write!(f, "Overall"),
            UserFilter::Author(name) => write!(f, "{name}"),
        }
    }
}

/// Configuration for filtering records by author and date.
///
/// Filters are combined with AND logic.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only records on or after this day.
    pub after: Option<NaiveDate>,

    /// Include only records on or before this day.
    pub before: Option<NaiveDate>,

    /// Author selection.
    pub user: UserFilter,
}

impl FilterConfig {
    /// Creates a new filter configuration that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatstatError> {
        self.after = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatstatError> {
        self.before = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the author selection.
    #[must_use]
    pub fn with_user(mut self, user: UserFilter) -> Self {
        self.user = user;
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || !self.user.is_overall()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the record passes every active filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        let date = record.calendar().date;
        self.user.matches(record)
            && self.after.is_none_or(|after| date >= after)
            && self.before.is_none_or(|before| date <= before)
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate, ChatstatError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatstatError::invalid_date(date_str))
}

/// Returns the records matching every active filter, in source order.
pub fn apply_filters<'a>(
    records: &'a [MessageRecord],
    config: &FilterConfig,
) -> Vec<&'a MessageRecord> {
    records.iter().filter(|r| config.matches(r)).collect()
}
