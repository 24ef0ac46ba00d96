//! Property-based tests for chatstat.
//!
//! Logs are assembled from predefined fragments so every generated document
//! uses the bracketed timestamp convention.

use proptest::prelude::*;

use chatstat::prelude::*;

const MEDIA: &str = "<Media omitted>";

fn arb_author() -> impl Strategy<Value = Option<String>> {
    prop::sample::select(vec![
        Some("Alice".to_string()),
        Some("Bob".to_string()),
        Some("Иван".to_string()),
        Some("+91 98765 43210".to_string()),
        Some("🔥Fire🔥".to_string()),
        None,
    ])
}

fn arb_body() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "hi there https://example.com".to_string(),
        "<Media omitted>".to_string(),
        "Привет мир 😀".to_string(),
        "two\nlines".to_string(),
        "🎉🔥 party".to_string(),
        "ok".to_string(),
        "time 10:30 works".to_string(),
        String::new(),
    ])
}

fn arb_stamp() -> impl Strategy<Value = String> {
    (1u32..=28, 1u32..=12, prop::bool::ANY, 0u32..24, 0u32..60).prop_map(
        |(day, month, four_digit, hour, minute)| {
            let year = if four_digit { "2024" } else { "24" };
            let (h12, meridiem) = match hour {
                0 => (12, "AM"),
                1..=11 => (hour, "AM"),
                12 => (12, "PM"),
                _ => (hour - 12, "PM"),
            };
            format!("[{day}/{month}/{year}, {h12}:{minute:02}:00 {meridiem}]")
        },
    )
}

/// One generated line plus what it should parse into.
fn arb_line() -> impl Strategy<Value = (String, Option<String>, String)> {
    (arb_stamp(), arb_author(), arb_body()).prop_map(|(stamp, author, body)| {
        let line = match &author {
            Some(name) => format!("{stamp} {name}: {body}\n"),
            // Notification bodies never contain a colon-space.
            None => format!("{stamp} {}\n", body.replace(": ", " ")),
        };
        (line, author, body)
    })
}

fn arb_log(max_len: usize) -> impl Strategy<Value = Vec<(String, Option<String>, String)>> {
    prop::collection::vec(arb_line(), 0..max_len)
}

fn join(lines: &[(String, Option<String>, String)]) -> String {
    lines.iter().map(|(line, _, _)| line.as_str()).collect()
}

fn filters() -> Vec<UserFilter> {
    vec![
        UserFilter::Overall,
        UserFilter::author("Alice"),
        UserFilter::author("Иван"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// Every generated line becomes exactly one record, in order
    #[test]
    fn parse_preserves_count_and_authors(lines in arb_log(30)) {
        let records = parse(&join(&lines));
        prop_assert_eq!(records.len(), lines.len());

        for (record, (_, author, _)) in records.iter().zip(&lines) {
            prop_assert_eq!(record.author().name(), author.as_deref());
            prop_assert_eq!(record.is_notification(), author.is_none());
        }
    }

    /// Authored bodies survive the author + ": " + body round trip
    #[test]
    fn authored_body_round_trip(lines in arb_log(20)) {
        let records = parse(&join(&lines));
        for (record, (_, author, body)) in records.iter().zip(&lines) {
            if author.is_some() {
                prop_assert_eq!(record.body(), format!("{body}\n"));
            }
        }
    }

    /// Parsing is deterministic
    #[test]
    fn parse_is_deterministic(lines in arb_log(20)) {
        let text = join(&lines);
        prop_assert_eq!(parse(&text), parse(&text));
    }

    /// Text without a bracketed timestamp yields no records
    #[test]
    fn no_timestamp_no_records(text in "[a-zA-Z0-9 ,.:!?\\n]{0,200}") {
        prop_assert!(parse(&text).is_empty());
    }

    /// Any preamble before the first timestamp is discarded
    #[test]
    fn preamble_is_discarded(preamble in "[a-z ]{0,40}\\n", lines in arb_log(10)) {
        let with = parse(&format!("{preamble}{}", join(&lines)));
        let without = parse(&join(&lines));
        prop_assert_eq!(with, without);
    }

    // ============================================
    // AGGREGATOR PROPERTIES
    // ============================================

    /// Activity maps and the heatmap sum to the filtered record count
    #[test]
    fn activity_totals_match_record_count(lines in arb_log(40)) {
        let records = parse(&join(&lines));
        let urls = LinkUrlExtractor::new();

        for filter in filters() {
            let total = fetch_stats(&filter, &records, MEDIA, &urls).messages;
            prop_assert_eq!(total, filter.select(&records).count());

            let week: usize = week_activity_map(&filter, &records).iter().map(|(_, n)| n).sum();
            let month: usize = month_activity_map(&filter, &records).iter().map(|(_, n)| n).sum();
            let monthly: usize = monthly_timeline(&filter, &records).iter().map(|b| b.count).sum();
            let daily: usize = daily_timeline(&filter, &records).iter().map(|b| b.count).sum();

            prop_assert_eq!(week, total);
            prop_assert_eq!(month, total);
            prop_assert_eq!(monthly, total);
            prop_assert_eq!(daily, total);
            prop_assert_eq!(activity_heatmap(&filter, &records).total(), total);
        }
    }

    /// Activity maps are ranked most active first
    #[test]
    fn activity_maps_are_descending(lines in arb_log(40)) {
        let records = parse(&join(&lines));
        let week = week_activity_map(&UserFilter::Overall, &records);
        prop_assert!(week.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    /// Busy-user percentages cover the whole document
    #[test]
    fn busy_user_breakdown_covers_everything(lines in arb_log(40)) {
        let records = parse(&join(&lines));
        let busy = most_busy_users(&records, 5);

        let counted: usize = busy.breakdown.iter().map(|s| s.count).sum();
        prop_assert_eq!(counted, records.len());
        prop_assert!(busy.top.len() <= 5);
        prop_assert!(busy.top.iter().all(|(name, _)| name != "group_notification"));
    }

    /// Author views never include notifications
    #[test]
    fn author_views_exclude_notifications(lines in arb_log(30)) {
        let records = parse(&join(&lines));
        for filter in filters().into_iter().skip(1) {
            prop_assert!(filter.select(&records).all(|r| !r.is_notification()));
        }
    }

    /// Running the full report twice gives identical output
    #[test]
    fn report_is_idempotent(lines in arb_log(30)) {
        let records = parse(&join(&lines));
        let analyzer = Analyzer::new(AnalysisConfig::new().without_stop_words())
            .with_stop_words(Some(StopWords::from_text("ok hi")));

        for filter in filters() {
            prop_assert_eq!(
                analyzer.report(&filter, &records),
                analyzer.report(&filter, &records)
            );
        }
    }

    /// Common words are ranked and bounded by the limit
    #[test]
    fn common_words_ranked_and_limited(lines in arb_log(30), limit in 0usize..25) {
        let records = parse(&join(&lines));
        let stop = StopWords::default();
        if let WordAnalysis::Ready(words) =
            most_common_words(&UserFilter::Overall, &records, Some(&stop), MEDIA, limit)
        {
            prop_assert!(words.len() <= limit);
            prop_assert!(words.windows(2).all(|w| w[0].1 >= w[1].1));
            prop_assert!(words.iter().all(|(w, _)| *w == w.to_lowercase()));
        }
    }
}
