//! Synthetic chat log generator for stress testing chatstat.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [clock]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt 24h
//!
//! `clock` is `12h` (default, `9:05:00 AM`) or `24h` (`09:05:00`).

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const AUTHORS: &[&str] = &[
    "Alice",
    "Bob",
    "Charlie",
    "Иван",
    "村上",
    "محمد",
    "Dana: the admin",
    "+91 98765 43210",
    "🔥FireUser🔥",
];

const WORDS: &[&str] = &[
    "hello", "kya", "hai", "bhai", "meeting", "tomorrow", "ok", "lol", "the", "and", "yes",
    "no", "party", "kal", "aaj", "office", "call", "me", "please", "thanks",
];

const EMOJIS: &[&str] = &["😀", "😂", "😍", "🤔", "🔥", "👍", "❤️", "🎉", "🇮🇳", "👨‍👩‍👧"];

const LINKS: &[&str] = &[
    "https://example.com/a",
    "www.rust-lang.org",
    "http://x.org/path?q=1",
    "google.com",
];

const NOTIFICATIONS: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
    "Alice created group \"Weekend plans\"",
    "Bob added Charlie",
    "Charlie left",
    "You changed this group's icon",
];

const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

#[derive(Clone, Copy)]
enum Clock {
    Twelve,
    TwentyFour,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_chat.txt", String::as_str);
    let clock = match args.get(3).map(String::as_str) {
        None | Some("12h") => Clock::Twelve,
        Some("24h") => Clock::TwentyFour,
        Some(other) => {
            eprintln!("Unknown clock: {other}. Use '12h' or '24h'");
            std::process::exit(1);
        }
    };

    println!("🧪 Chat Log Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    println!();

    let start = Instant::now();
    let bytes = generate(count, output, clock)?;
    let elapsed = start.elapsed();

    println!(
        "✅ Wrote {:.2} MB in {:.2}s",
        bytes as f64 / 1_048_576.0,
        elapsed.as_secs_f64()
    );
    Ok(())
}

fn generate(count: usize, output: &str, clock: Clock) -> io::Result<usize> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();

    let mut ts = NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();
    let mut bytes_written = 0usize;

    let preamble = "Chat export generated for testing\n";
    writer.write_all(preamble.as_bytes())?;
    bytes_written += preamble.len();

    for i in 0..count {
        ts += Duration::seconds(rng.gen_range(1..7_200));
        let line = if i == 0 || rng.gen_ratio(1, 40) {
            format!("{} {}\n", stamp(ts, clock), pick(&mut rng, NOTIFICATIONS))
        } else {
            let author = pick(&mut rng, AUTHORS);
            format!("{} {}: {}\n", stamp(ts, clock), author, body(&mut rng))
        };
        writer.write_all(line.as_bytes())?;
        bytes_written += line.len();

        if (i + 1) % 100_000 == 0 {
            println!("   ... {} messages", i + 1);
        }
    }

    writer.flush()?;
    Ok(bytes_written)
}

fn stamp(ts: NaiveDateTime, clock: Clock) -> String {
    match clock {
        Clock::Twelve => ts.format("[%-d/%-m/%y, %-I:%M:%S %p]").to_string(),
        Clock::TwentyFour => ts.format("[%d/%m/%Y, %H:%M:%S]").to_string(),
    }
}

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn body<R: Rng>(rng: &mut R) -> String {
    if rng.gen_ratio(1, 15) {
        return MEDIA_PLACEHOLDER.to_string();
    }

    let mut parts: Vec<&str> = (0..rng.gen_range(1..12)).map(|_| pick(rng, WORDS)).collect();
    if rng.gen_ratio(1, 5) {
        parts.push(pick(rng, EMOJIS));
    }
    if rng.gen_ratio(1, 12) {
        parts.push(pick(rng, LINKS));
    }

    let mut text = parts.join(" ");
    // Continuation lines belong to the same message.
    if rng.gen_ratio(1, 20) {
        text.push_str("\nsecond line ");
        text.push_str(pick(rng, WORDS));
    }
    text
}
