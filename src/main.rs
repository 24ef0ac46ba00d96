//! # chatstat CLI
//!
//! Command-line front end for the chatstat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatstat::cli::Args;
use chatstat::core::{Analyzer, Report, UserFilter, WordAnalysis, apply_filters, report_to_json};
use chatstat::format::write_records;
use chatstat::parser::{ChatParser, authors};
use chatstat::{ChatstatError, MessageRecord};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

fn main() {
    let args = <Args as ClapParser>::parse();
    setup_logging(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Installs a stderr subscriber. `RUST_LOG` overrides the `-v` level.
fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let total_start = Instant::now();
    let text_mode = !args.json;

    let parser = ChatParser::with_config(args.parser_config());
    let records = parser.parse(&args.input)?;
    let known = authors(&records);

    if args.list_users {
        for name in &known {
            println!("{name}");
        }
        return Ok(());
    }

    let view = args.user_filter();
    if let UserFilter::Author(name) = &view {
        if !known.contains(name) {
            return Err(ChatstatError::unknown_author(name.clone(), known));
        }
    }

    let date_filter = args.filter_config()?;
    let export = args.export.as_ref().zip(args.export_format()?);
    let records: Vec<MessageRecord> = if date_filter.has_date_filter() {
        apply_filters(&records, &date_filter).into_iter().cloned().collect()
    } else {
        records
    };

    if text_mode {
        println!("📦 chatstat v{}", env!("CARGO_PKG_VERSION"));
        println!("{RULE}");
        println!("📂 Input:   {}", args.input.display());
        println!("👤 View:    {view}");
        if let Some(after) = &args.after {
            println!("📅 After:   {after}");
        }
        if let Some(before) = &args.before {
            println!("📅 Before:  {before}");
        }
        println!("   Parsed {} messages from {} authors", records.len(), known.len());
        println!();
    }

    let analyzer = Analyzer::new(args.analysis_config());
    let report = analyzer.report(&view, &records);

    if text_mode {
        print_report(&report, args);
    } else {
        println!("{}", report_to_json(&report)?);
    }

    if let Some((path, format)) = export {
        let config = args.output_config();
        let selected: Vec<MessageRecord> = view.select(&records).cloned().collect();
        write_records(&selected, path, format, &config)?;
        if text_mode {
            let written = selected.iter().filter(|r| config.keeps(r)).count();
            println!();
            println!(
                "💾 Exported {} records to {} ({format})",
                written,
                path.display()
            );
        }
    }

    if text_mode {
        println!();
        println!(
            "✅ Done in {:.2}s",
            total_start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{RULE}");
}

fn print_report(report: &Report, args: &Args) {
    section("📊 Top Statistics");
    println!("   Total messages: {}", report.stats.messages);
    println!("   Total words:    {}", report.stats.words);
    println!("   Media shared:   {}", report.stats.media);
    println!("   Links shared:   {}", report.stats.links);

    section("📅 Monthly Timeline");
    if report.monthly_timeline.is_empty() {
        println!("⚠️  No messages in this view");
    }
    for bucket in &report.monthly_timeline {
        println!("   {:<16} {}", bucket.label, bucket.count);
    }

    section("📆 Daily Timeline");
    if report.daily_timeline.is_empty() {
        println!("⚠️  No messages in this view");
    }
    for bucket in &report.daily_timeline {
        println!("   {}  {}", bucket.date, bucket.count);
    }

    section("🗓️  Activity Map");
    println!("   Most busy day:");
    for (day, count) in &report.busy_days {
        println!("     {day:<10} {count}");
    }
    println!("   Most busy month:");
    for (month, count) in &report.busy_months {
        println!("     {month:<10} {count}");
    }

    section("🔥 Weekly Activity Heatmap");
    print_heatmap(report);

    if let Some(busy) = &report.busy_users {
        section("👥 Most Busy Users");
        for (name, count) in &busy.top {
            println!("   {name:<20} {count}");
        }
        println!();
        for share in &busy.breakdown {
            println!("   {:<20} {:>6.2}%", share.author.label(), share.percent);
        }
    }

    section("☁️  Word Cloud");
    match &report.word_cloud {
        WordAnalysis::Ready(text) => {
            let tokens = text.split_whitespace().count();
            let preview: Vec<&str> = text.split_whitespace().take(30).collect();
            println!("   {} tokens: {}", tokens, preview.join(" "));
        }
        WordAnalysis::NoData => println!("⚠️  No words left after cleaning"),
        WordAnalysis::Unavailable => println!(
            "⚠️  Stop-word list not found at {}; word cloud unavailable",
            args.stop_words.display()
        ),
    }

    section("💬 Most Common Words");
    match &report.common_words {
        WordAnalysis::Ready(words) => {
            for (word, count) in words {
                println!("   {word:<20} {count}");
            }
        }
        WordAnalysis::NoData => println!("⚠️  No words left after cleaning"),
        WordAnalysis::Unavailable => println!(
            "⚠️  Stop-word list not found at {}; common words unavailable",
            args.stop_words.display()
        ),
    }

    section("😀 Emoji Analysis");
    if report.emoji.is_empty() {
        println!("⚠️  No emoji found");
    }
    for (emoji, count) in &report.emoji {
        println!("   {emoji}  {count}");
    }
}

fn print_heatmap(report: &Report) {
    let heatmap = &report.heatmap;
    if heatmap.is_empty() {
        println!("⚠️  No messages in this view");
        return;
    }

    print!("   {:<10}", "");
    for column in &heatmap.columns {
        print!(" {column:>5}");
    }
    println!();

    for (row, cells) in heatmap.rows.iter().zip(&heatmap.cells) {
        print!("   {row:<10}");
        for count in cells {
            print!(" {count:>5}");
        }
        println!();
    }
}
