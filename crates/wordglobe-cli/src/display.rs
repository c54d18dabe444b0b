//! Vertical card display for word dashboards and their feedback.
//!
//! Terminal output is plain text, so feedback is shown unescaped. Links and
//! delete indices still go through [`sanitize_entry`] so only validated
//! tracker URLs are printed.

use wordglobe_core::catalogue::themes;
use wordglobe_core::render::{display_date, star_strip};
use wordglobe_core::search::SearchHit;
use wordglobe_core::{DashboardData, MergedEntry, TrackerConfig, sanitize_entry};

const MAX_COMMENT_CHARS: usize = 60;

// ── Catalogue ──

pub fn print_catalogue() {
    for theme in themes() {
        println!("{} ({})", theme.name, theme.color);
        println!("  {}", theme.words.join(", "));
    }
}

pub fn print_search(term: &str, hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No words match \"{}\"", term.trim());
        return;
    }
    for hit in hits {
        println!("  {:<26} {}", hit.word, hit.theme.name);
    }
}

// ── Dashboard ──

/// Print a word's dashboard as a card.
pub fn print_dashboard(data: &DashboardData) {
    println!("=== {} ===", data.word);
    println!("{}", data.description);
    println!();

    println!("Brand");
    println!("  {:<26} {}", "name", data.brand);
    println!("  {:<26} {}", "tagline", data.tagline);
    println!("  {:<26} {}", "mascot", data.mascot);
    println!("  {:<26} {} ({})", "category", data.category, data.color);
    println!();

    println!("Metrics");
    println!("  {:<26} {}", "users", data.metrics.users);
    println!("  {:<26} {}", "uptime", data.metrics.uptime);
    println!("  {:<26} {}", "satisfaction", data.metrics.satisfaction);
    println!("  {:<26} {}", "performance", data.metrics.performance);
    println!();

    println!("Features");
    for feature in &data.features {
        println!("  - {feature}");
    }
    println!();
}

// ── Feedback ──

pub fn print_feedback(entries: &[MergedEntry], config: &TrackerConfig) {
    if entries.is_empty() {
        println!("No feedback available yet.");
        return;
    }

    println!("Team Feedback ({})", entries.len());
    for entry in entries {
        let safe = sanitize_entry(entry, config);
        println!("  {}", entry_heading(entry));
        if !entry.record.comments.is_empty() {
            println!("    {}", shorten(&entry.record.comments));
        }
        match (&safe.origin_url, safe.deletable_index) {
            (Some(url), _) => println!("    {url}"),
            (None, Some(index)) => println!("    local, delete with index {index}"),
            (None, None) => println!("    local"),
        }
    }
}

fn entry_heading(entry: &MergedEntry) -> String {
    let record = &entry.record;
    format!(
        "{:<26} {}  {}",
        record.name,
        star_strip(record.rating),
        display_date(&record.timestamp)
    )
}

/// First line of a comment, cut to a terminal-friendly width.
fn shorten(comments: &str) -> String {
    let line = comments.lines().next().unwrap_or_default();
    if line.chars().count() > MAX_COMMENT_CHARS {
        let cut: String = line.chars().take(MAX_COMMENT_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}
