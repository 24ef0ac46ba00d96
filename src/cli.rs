//! Command-line interface definition using clap.
//!
//! [`Args`] maps straight onto the library configuration types:
//! [`ParserConfig`], [`AnalysisConfig`], [`FilterConfig`] and
//! [`OutputConfig`].

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{AnalysisConfig, DEFAULT_STOP_WORDS_PATH, DateOrder, ParserConfig};
use crate::core::filter::{FilterConfig, UserFilter};
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::format::ExportFormat;

/// Compute message statistics, timelines, heatmaps and word/emoji
/// frequencies from an exported WhatsApp chat log.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --user Alice --stop-words stop_hinglish.txt
    chatstat chat.txt --after 2024-01-01 --before 2024-06-30
    chatstat chat.txt --json > report.json
    chatstat chat.txt --export records.csv --calendar
    chatstat chat.txt --list-users")]
pub struct Args {
    /// Path to the exported chat log (.txt)
    pub input: PathBuf,

    /// Analyze a single author instead of the whole chat
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Stop-word list used by the word cloud and common words
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STOP_WORDS_PATH)]
    pub stop_words: PathBuf,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Read ambiguous dates as month/day instead of day/month
    #[arg(long)]
    pub month_first: bool,

    /// Number of busiest users to list
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top: usize,

    /// Number of common words to list
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub words: usize,

    /// Number of emoji to list
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub emoji: usize,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Also export the parsed record table to this file
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export format (defaults to the export file's extension)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportArg>,

    /// Include derived calendar columns in the export
    #[arg(long)]
    pub calendar: bool,

    /// Leave system notifications out of the export
    #[arg(long)]
    pub no_notifications: bool,

    /// Print the authors found in the chat and exit
    #[arg(long)]
    pub list_users: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Export format flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportArg {
    /// CSV with semicolon delimiter
    Csv,
    /// JSON array
    Json,
    /// JSON Lines
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> ExportFormat {
        match arg {
            ExportArg::Csv => ExportFormat::Csv,
            ExportArg::Json => ExportFormat::Json,
            ExportArg::Jsonl => ExportFormat::Jsonl,
        }
    }
}

impl Args {
    pub fn parser_config(&self) -> ParserConfig {
        let order = if self.month_first {
            DateOrder::MonthFirst
        } else {
            DateOrder::DayFirst
        };
        ParserConfig::new().with_date_order(order)
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_stop_words_path(&self.stop_words)
            .with_busy_users_limit(self.top)
            .with_common_words_limit(self.words)
            .with_emoji_limit(self.emoji)
    }

    /// Builds the date filter. Author selection is validated separately.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(after) = &self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            config = config.with_date_to(before)?;
        }
        Ok(config)
    }

    pub fn user_filter(&self) -> UserFilter {
        self.user
            .as_ref()
            .map_or(UserFilter::Overall, UserFilter::author)
    }

    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.calendar {
            config = config.with_calendar();
        }
        if self.no_notifications {
            config = config.without_notifications();
        }
        config
    }

    /// Export format from `--format`, else from the export path's extension.
    pub fn export_format(&self) -> Result<Option<ExportFormat>> {
        match (&self.export, self.format) {
            (None, _) => Ok(None),
            (Some(_), Some(arg)) => Ok(Some(arg.into())),
            (Some(path), None) => ExportFormat::from_path(path).map(Some),
        }
    }

    /// Log filter directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
