//! Export row model and output configuration.

use serde::Serialize;

use crate::message::{CalendarFields, MessageRecord};

/// Timestamp layout used by every export format.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Configuration for record exports.
/// Controls which columns are written and which records are kept.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Write the derived calendar columns (date, year, month, ...)
    pub include_calendar: bool,
    /// Leave system notifications out of the export
    pub skip_notifications: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_calendar(mut self) -> Self {
        self.include_calendar = true;
        self
    }

    #[must_use]
    pub fn without_notifications(mut self) -> Self {
        self.skip_notifications = true;
        self
    }

    /// Returns `true` if the record belongs in the export.
    pub fn keeps(&self, record: &MessageRecord) -> bool {
        !(self.skip_notifications && record.is_notification())
    }
}

/// One exported record, shaped by [`OutputConfig`].
#[derive(Debug, Serialize)]
pub(crate) struct ExportRow<'a> {
    pub timestamp: String,
    pub author: &'a str,
    pub body: &'a str,
    #[serde(flatten)]
    pub calendar: Option<&'a CalendarFields>,
}

impl<'a> ExportRow<'a> {
    pub(crate) fn new(record: &'a MessageRecord, config: &OutputConfig) -> Self {
        Self {
            timestamp: record.timestamp().format(EXPORT_TIMESTAMP_FORMAT).to_string(),
            author: record.author().label(),
            body: record.body(),
            calendar: config.include_calendar.then(|| record.calendar()),
        }
    }
}

/// Rows for every record the configuration keeps, in source order.
pub(crate) fn export_rows<'a>(
    records: &'a [MessageRecord],
    config: &'a OutputConfig,
) -> impl Iterator<Item = ExportRow<'a>> + 'a {
    records
        .iter()
        .filter(|r| config.keeps(r))
        .map(|r| ExportRow::new(r, config))
}
