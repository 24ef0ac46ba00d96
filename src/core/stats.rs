//! Counters, timelines and activity maps.
//!
//! Every function here is a pure read over a record slice: it takes a
//! [`UserFilter`], never fails, and returns an empty or zero value when no
//! record passes the filter. Calling the same function twice on the same
//! input yields the same output.
//!
//! | Function | Output |
//! |----------|--------|
//! | [`fetch_stats`] | message, word, media and link counts |
//! | [`most_busy_users`] | top authors plus a percentage breakdown |
//! | [`monthly_timeline`] | counts per (year, month), chronological |
//! | [`daily_timeline`] | counts per calendar date, chronological |
//! | [`week_activity_map`] | counts per weekday name, most active first |
//! | [`month_activity_map`] | counts per month name, most active first |
//! | [`activity_heatmap`] | weekday × hour-bucket grid |

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::capabilities::UrlExtractor;
use super::filter::UserFilter;
use crate::message::{Author, MessageRecord, hour_period};

/// Top-line statistics for a filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BasicStats {
    /// Number of records.
    pub messages: usize,
    /// Whitespace-separated words across all bodies.
    pub words: usize,
    /// Records whose body is the media placeholder.
    pub media: usize,
    /// URLs found across all bodies.
    pub links: usize,
}

/// Counts records, words, media placeholders and links.
pub fn fetch_stats(
    filter: &UserFilter,
    records: &[MessageRecord],
    media_placeholder: &str,
    urls: &dyn UrlExtractor,
) -> BasicStats {
    filter
        .select(records)
        .fold(BasicStats::default(), |mut stats, record| {
            stats.messages += 1;
            stats.words += record.word_count();
            if record.is_media(media_placeholder) {
                stats.media += 1;
            }
            stats.links += urls.count_urls(record.body());
            stats
        })
}

/// One row of the busiest-users breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorShare {
    pub author: Author,
    pub count: usize,
    /// Share of all records, in percent, rounded to two decimals.
    pub percent: f64,
}

/// Most active authors of the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// The most active real authors, most active first.
    ///
    /// System notifications are left out here but keep their row in
    /// [`BusyUsers::breakdown`], so `top` can hold fewer names than the
    /// breakdown and its counts do not add up to the document total.
    pub top: Vec<(String, usize)>,
    /// Every author key with its share of all records. System notifications
    /// appear as their own row so the percentages cover the whole document.
    pub breakdown: Vec<AuthorShare>,
}

/// Ranks authors over the whole record sequence.
///
/// This is an overall-only view; it does not take a [`UserFilter`].
pub fn most_busy_users(records: &[MessageRecord], limit: usize) -> BusyUsers {
    let total = records.len();
    if total == 0 {
        return BusyUsers::default();
    }

    let ranked = rank_by_frequency(records.iter().map(MessageRecord::author));

    let top = ranked
        .iter()
        .filter_map(|(author, count)| author.name().map(|name| (name.to_string(), *count)))
        .take(limit)
        .collect();

    let breakdown = ranked
        .into_iter()
        .map(|(author, count)| AuthorShare {
            author: author.clone(),
            count,
            percent: round2(count as f64 / total as f64 * 100.0),
        })
        .collect();

    BusyUsers { top, breakdown }
}

/// Message count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub count: usize,
    /// `MonthName-Year`, e.g. `January-2024`.
    pub label: String,
}

/// Counts records per (year, month), ordered chronologically.
pub fn monthly_timeline(filter: &UserFilter, records: &[MessageRecord]) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<(i32, u32), (&'static str, usize)> = BTreeMap::new();
    for record in filter.select(records) {
        let cal = record.calendar();
        buckets
            .entry((cal.year, cal.month))
            .or_insert((cal.month_name, 0))
            .1 += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month), (month_name, count))| MonthlyBucket {
            year,
            month,
            month_name,
            count,
            label: format!("{month_name}-{year}"),
        })
        .collect()
}

/// Message count for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub count: usize,
}

/// Counts records per calendar date, ordered chronologically.
pub fn daily_timeline(filter: &UserFilter, records: &[MessageRecord]) -> Vec<DailyBucket> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in filter.select(records) {
        *buckets.entry(record.calendar().date).or_default() += 1;
    }

    buckets
        .into_iter()
        .map(|(date, count)| DailyBucket { date, count })
        .collect()
}

/// Counts records per weekday name, most active first.
pub fn week_activity_map(
    filter: &UserFilter,
    records: &[MessageRecord],
) -> Vec<(&'static str, usize)> {
    rank_by_frequency(filter.select(records).map(|r| r.calendar().day_name))
}

/// Counts records per month name, most active first.
///
/// Months of different years share a bucket.
pub fn month_activity_map(
    filter: &UserFilter,
    records: &[MessageRecord],
) -> Vec<(&'static str, usize)> {
    rank_by_frequency(filter.select(records).map(|r| r.calendar().month_name))
}

/// Weekday × hour-bucket message counts.
///
/// Only weekdays and hour buckets that occur in the data get a row or
/// column; every other cell of the grid is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    /// Weekday names, Monday first.
    pub rows: Vec<&'static str>,
    /// Hour-bucket labels, `00-01` first.
    pub columns: Vec<String>,
    /// `cells[row][column]`
    pub cells: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Count for a weekday name and hour-bucket label, zero if absent.
    pub fn get(&self, row: &str, column: &str) -> usize {
        let r = self.rows.iter().position(|name| *name == row);
        let c = self.columns.iter().position(|label| label == column);
        match (r, c) {
            (Some(r), Some(c)) => self.cells[r][c],
            _ => 0,
        }
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Returns `true` if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds the weekday × hour-bucket grid.
pub fn activity_heatmap(filter: &UserFilter, records: &[MessageRecord]) -> Heatmap {
    let mut counts: HashMap<(u32, u32), usize> = HashMap::new();
    let mut weekdays: BTreeMap<u32, &'static str> = BTreeMap::new();
    let mut hours = BTreeSet::new();

    for record in filter.select(records) {
        let cal = record.calendar();
        let weekday = cal.date.weekday().num_days_from_monday();
        weekdays.insert(weekday, cal.day_name);
        hours.insert(cal.hour);
        *counts.entry((weekday, cal.hour)).or_default() += 1;
    }

    let cells = weekdays
        .keys()
        .map(|&w| {
            hours
                .iter()
                .map(|&h| counts.get(&(w, h)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Heatmap {
        rows: weekdays.into_values().collect(),
        columns: hours.iter().map(|&h| hour_period(h)).collect(),
        cells,
    }
}

/// Counts items and orders them by descending count.
///
/// Ties keep the order in which items were first seen.
pub(crate) fn rank_by_frequency<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        if let Some(&i) = index.get(&item) {
            counts[i].1 += 1;
        } else {
            index.insert(item.clone(), counts.len());
            counts.push((item, 1));
        }
    }

    // sort_by is stable, which keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
