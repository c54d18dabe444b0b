//! HTML rendering of a word's feedback list.

use std::fmt::Write;

use chrono::DateTime;

use crate::feedback::MAX_RATING;
use crate::sanitize::{SanitizedEntry, escape_html};

/// `★` per point of rating, padded with `☆` to five.
pub fn star_strip(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Calendar date of an RFC 3339 timestamp, or the raw text when it does not parse.
pub fn display_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp.trim())
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Render the feedback card body for `word`.
///
/// Entries must already be sanitized; `all_feedback_url` is the tracker
/// listing linked at the bottom.
pub fn feedback_html(word: &str, entries: &[SanitizedEntry], all_feedback_url: &str) -> String {
    let word = escape_html(word);
    let mut out = String::new();

    if entries.is_empty() {
        let _ = write!(
            out,
            "<div class=\"card-content\">\n\
             <div class=\"feedback-header\">\n\
             <span>No feedback available yet.</span>\n\
             <button class=\"feedback-btn feedback-add-new\" data-word=\"{word}\" data-action=\"add-new\">Add Feedback</button>\n\
             </div>\n\
             </div>\n"
        );
        return out;
    }

    let _ = write!(
        out,
        "<div class=\"card-content\">\n\
         <div class=\"feedback-header\">\n\
         <strong>Team Feedback ({count})</strong>\n\
         <button class=\"feedback-btn feedback-add-new\" data-word=\"{word}\" data-action=\"add-new\">Add Feedback</button>\n\
         </div>\n\
         <div id=\"feedback-list-{word}\">\n",
        count = entries.len(),
    );

    for entry in entries {
        push_entry(&mut out, &word, entry);
    }

    let _ = write!(
        out,
        "</div>\n\
         <a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">View all feedback on GitHub →</a>\n\
         </div>\n",
        href = escape_html(all_feedback_url),
    );
    out
}

fn push_entry(out: &mut String, word: &str, entry: &SanitizedEntry) {
    let _ = writeln!(out, "<div class=\"feedback-entry\">");
    let _ = writeln!(
        out,
        "<strong class=\"feedback-name\">{}</strong> <span class=\"feedback-stars\">{}</span>",
        entry.name,
        star_strip(entry.rating)
    );
    if let Some(index) = entry.deletable_index {
        let _ = writeln!(
            out,
            "<button class=\"feedback-btn feedback-delete\" data-word=\"{word}\" data-feedback-index=\"{index}\" data-action=\"delete\">Delete</button>"
        );
    }
    if !entry.comments.is_empty() {
        let _ = writeln!(out, "<div class=\"feedback-comment\">\"{}\"</div>", entry.comments);
    }
    let _ = write!(
        out,
        "<span class=\"feedback-date\">{}</span> ",
        escape_html(&display_date(&entry.timestamp))
    );
    match &entry.origin_url {
        Some(url) => {
            let _ = writeln!(
                out,
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">GitHub Issue →</a>",
                escape_html(url)
            );
        }
        None => {
            let _ = writeln!(out, "<span class=\"feedback-local\">Local</span>");
        }
    }
    let _ = writeln!(out, "</div>");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, origin_url: Option<&str>, deletable_index: Option<usize>) -> SanitizedEntry {
        SanitizedEntry {
            name: name.into(),
            comments: String::new(),
            rating: 4,
            timestamp: "2026-02-21T10:00:00Z".into(),
            word: "Cloud".into(),
            origin_url: origin_url.map(str::to_string),
            deletable_index,
        }
    }

    #[test]
    fn stars() {
        assert_eq!(star_strip(0), "☆☆☆☆☆");
        assert_eq!(star_strip(3), "★★★☆☆");
        assert_eq!(star_strip(5), "★★★★★");
        assert_eq!(star_strip(9), "★★★★★");
    }

    #[test]
    fn dates() {
        assert_eq!(display_date("2026-02-21T23:30:00-02:00"), "2026-02-21");
        assert_eq!(display_date("garbage"), "garbage");
    }

    #[test]
    fn empty_list_message() {
        let html = feedback_html("Cloud", &[], "https://github.com/o/r/issues?labels=feedback");
        assert!(html.contains("No feedback available yet."));
        assert!(!html.contains("Team Feedback"));
    }

    #[test]
    fn delete_only_for_local_entries() {
        let entries = vec![
            entry("Remote", Some("https://github.com/o/r/issues/1"), None),
            entry("Local", None, Some(0)),
        ];
        let html = feedback_html("Cloud", &entries, "https://github.com/o/r/issues?labels=feedback");
        assert!(html.contains("Team Feedback (2)"));
        assert_eq!(html.matches("feedback-delete").count(), 1);
        assert!(html.contains("data-feedback-index=\"0\""));
        assert!(html.contains("GitHub Issue →"));
        assert!(html.contains("feedback-local"));
    }

    #[test]
    fn word_is_escaped() {
        let html = feedback_html("<b>", &[], "x");
        assert!(html.contains("data-word=\"&lt;b&gt;\""));
    }
}
