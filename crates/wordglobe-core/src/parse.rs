//! Recover structured feedback from a tracker issue's free-text body.
//!
//! Issues are filed through a pre-filled web form, so the only structure is the
//! Markdown layout produced by [`crate::issue_form::issue_body`]. People edit
//! that text before submitting, which is why every field has a looser fallback.

use std::sync::LazyLock;

use regex::Regex;

use crate::feedback::{FeedbackRecord, Issue};

/// Title prefix of every feedback issue.
pub const TITLE_PREFIX: &str = "Feedback: ";
/// Name recorded when the body has no `**Name:**` line.
pub const ANONYMOUS: &str = "Anonymous";
/// Body text written when the author left no comment.
pub const NO_COMMENTS_PLACEHOLDER: &str = "No additional comments provided.";

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern compiles")
}

static RATING_LABELLED: LazyLock<Regex> =
    LazyLock::new(|| regex(r"\*\*Rating:\*\*[^\n]*?\((\d)/5\)"));
static RATING_LOOSE: LazyLock<Regex> = LazyLock::new(|| regex(r"\*\*Rating:\*\*.*?(\d)/5"));
static NAME: LazyLock<Regex> = LazyLock::new(|| regex(r"\*\*Name:\*\*[ \t]*(.+)"));

// Comment section, tightest first.
static COMMENTS_TO_RULE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?s)## Comments\s*\n(.*?)\n---"));
static COMMENTS_TO_NEXT_FIELD: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?s)## Comments\s*\n(.*?)(?:\n##|\n---|\n\*\*|$)"));
static COMMENTS_TO_END: LazyLock<Regex> = LazyLock::new(|| regex(r"(?s)## Comments\s*\n(.*)$"));
static TRAILING_FOOTER: LazyLock<Regex> = LazyLock::new(|| regex(r"(?s)\n---.*$"));

/// Star rating in the body, or 0 when none can be found.
pub fn extract_rating(body: &str) -> u8 {
    RATING_LABELLED
        .captures(body)
        .or_else(|| RATING_LOOSE.captures(body))
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Author name, or [`ANONYMOUS`].
pub fn extract_name(body: &str) -> String {
    NAME.captures(body)
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| ANONYMOUS.to_string())
}

/// Comment text under `## Comments`, empty when absent or placeholder.
pub fn extract_comments(body: &str) -> String {
    let comments = if let Some(caps) = COMMENTS_TO_RULE.captures(body) {
        caps[1].trim().to_string()
    } else if let Some(caps) = COMMENTS_TO_NEXT_FIELD.captures(body) {
        caps[1].trim().to_string()
    } else if let Some(caps) = COMMENTS_TO_END.captures(body) {
        TRAILING_FOOTER
            .replace(caps[1].trim(), "")
            .trim()
            .to_string()
    } else {
        String::new()
    };

    if comments == NO_COMMENTS_PLACEHOLDER {
        String::new()
    } else {
        comments
    }
}

/// Subject word encoded in an issue title.
pub fn word_from_title(title: &str) -> &str {
    title.strip_prefix(TITLE_PREFIX).unwrap_or(title)
}

/// Build a feedback record from a tracker issue.
///
/// Email is never published on the tracker, so it is left empty.
pub fn parse_issue(issue: &Issue) -> FeedbackRecord {
    let body = issue.body.as_deref().unwrap_or_default();
    let rating = extract_rating(body);
    if rating == 0 {
        tracing::debug!(url = %issue.html_url, "issue body has no rating");
    }
    FeedbackRecord {
        name: extract_name(body),
        email: String::new(),
        rating,
        comments: extract_comments(body),
        timestamp: issue.created_at.clone(),
        word: word_from_title(&issue.title).to_string(),
        origin_url: Some(issue.html_url.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BODY: &str = "## Proposal Information
**Proposal Name:** Analytics

## Feedback Details
**Name:** Ada Lovelace
**Email:** ada@example.com
**Rating:** ⭐⭐⭐⭐ (4/5)

## Comments
Charts load quickly.
Would like CSV export.

---
**Submitted:** 2026-02-21T10:00:00Z
**Type:** Dashboard Feedback";

    fn issue(title: &str, body: Option<&str>) -> Issue {
        Issue {
            title: title.into(),
            body: body.map(str::to_string),
            created_at: "2026-02-21T10:00:05Z".into(),
            html_url: "https://github.com/tislov-dev/3d-word-globe-dashboard/issues/7".into(),
            pull_request: None,
        }
    }

    #[test]
    fn parses_generated_body() {
        let rec = parse_issue(&issue("Feedback: Analytics", Some(FULL_BODY)));
        assert_eq!(rec.name, "Ada Lovelace");
        assert_eq!(rec.rating, 4);
        assert_eq!(rec.comments, "Charts load quickly.\nWould like CSV export.");
        assert_eq!(rec.word, "Analytics");
        assert_eq!(rec.timestamp, "2026-02-21T10:00:05Z");
        assert_eq!(rec.email, "");
        assert_eq!(
            rec.origin_url.as_deref(),
            Some("https://github.com/tislov-dev/3d-word-globe-dashboard/issues/7")
        );
    }

    #[test]
    fn rating_with_outline_stars() {
        assert_eq!(extract_rating("**Rating:** ★★★☆☆ (3/5)"), 3);
    }

    #[test]
    fn rating_loose_form() {
        assert_eq!(extract_rating("**Rating:** about 2/5 overall"), 2);
    }

    #[test]
    fn rating_missing_is_zero() {
        assert_eq!(extract_rating("Great stuff, five stars"), 0);
        assert_eq!(extract_rating("**Rating:**\n(4/5)"), 0);
    }

    #[test]
    fn name_defaults_to_anonymous() {
        assert_eq!(extract_name("no fields here"), ANONYMOUS);
        assert_eq!(extract_name("**Name:**   \nnext"), ANONYMOUS);
        assert_eq!(extract_name("**Name:** Grace  "), "Grace");
    }

    #[test]
    fn no_comments_section() {
        assert_eq!(extract_comments("**Name:** Grace\n**Rating:** ⭐ (1/5)"), "");
    }

    #[test]
    fn placeholder_comment_is_empty() {
        let body = "## Comments\nNo additional comments provided.\n\n---\n**Type:** Dashboard Feedback";
        assert_eq!(extract_comments(body), "");
    }

    #[test]
    fn comments_stop_at_next_heading() {
        let body = "## Comments\nTight layout.\n## Extra\nignored";
        assert_eq!(extract_comments(body), "Tight layout.");
    }

    #[test]
    fn comments_stop_at_bold_field() {
        let body = "## Comments\nNeeds dark mode.\n**Submitted:** today";
        assert_eq!(extract_comments(body), "Needs dark mode.");
    }

    #[test]
    fn comments_run_to_end_of_body() {
        let body = "## Comments\nLast line of the issue";
        assert_eq!(extract_comments(body), "Last line of the issue");
    }

    #[test]
    fn empty_body_yields_defaults() {
        let rec = parse_issue(&issue("Cloud pricing question", None));
        assert_eq!(rec.name, ANONYMOUS);
        assert_eq!(rec.rating, 0);
        assert_eq!(rec.comments, "");
        assert_eq!(rec.word, "Cloud pricing question");
    }
}
