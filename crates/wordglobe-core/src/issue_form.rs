//! Pre-filled issue-creation links for the tracker's web UI.
//!
//! The tracker only accepts authenticated writes, which this tool does not
//! hold. Instead the author is sent to the tracker's "new issue" page with the
//! title, body and labels filled in, and files it themselves.

use url::Url;

use crate::config::TrackerConfig;
use crate::feedback::{FEEDBACK_LABEL, FeedbackRecord, feedback_labels};
use crate::parse::{NO_COMMENTS_PLACEHOLDER, TITLE_PREFIX};

const RATING_GLYPH: &str = "⭐";
const ISSUE_TEMPLATE: &str = "feedback.md";

pub fn issue_title(word: &str) -> String {
    format!("{TITLE_PREFIX}{word}")
}

/// Markdown body for a feedback issue.
///
/// The layout is what [`crate::parse`] reads back. The author's email is
/// deliberately left out: issues are public.
pub fn issue_body(record: &FeedbackRecord) -> String {
    let stars = RATING_GLYPH.repeat(usize::from(record.rating));
    let comments = if record.comments.trim().is_empty() {
        NO_COMMENTS_PLACEHOLDER
    } else {
        record.comments.trim()
    };

    format!(
        "## Proposal Information\n\
         **Proposal Name:** {word}\n\
         \n\
         ## Feedback Details\n\
         **Name:** {name}\n\
         **Rating:** {stars} ({rating}/5)\n\
         \n\
         ## Comments\n\
         {comments}\n\
         \n\
         ---\n\
         **Submitted:** {timestamp}\n\
         **Type:** Dashboard Feedback",
        word = record.word,
        name = record.name,
        rating = record.rating,
        timestamp = record.timestamp,
    )
}

fn new_issue_url(config: &TrackerConfig) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{}/issues/new", config.repo_web_url()))
}

/// `…/issues/new?title=…&body=…&labels=feedback,proposal:<word>` for a record.
pub fn creation_url(config: &TrackerConfig, record: &FeedbackRecord) -> Result<Url, url::ParseError> {
    let mut url = new_issue_url(config)?;
    url.query_pairs_mut()
        .append_pair("title", &issue_title(&record.word))
        .append_pair("body", &issue_body(record))
        .append_pair("labels", &feedback_labels(&record.word));
    Ok(url)
}

/// Blank feedback form based on the repository's issue template.
pub fn manual_issue_url(config: &TrackerConfig, word: &str) -> Result<Url, url::ParseError> {
    let mut url = new_issue_url(config)?;
    url.query_pairs_mut()
        .append_pair("template", ISSUE_TEMPLATE)
        .append_pair("title", &issue_title(word))
        .append_pair("labels", &feedback_labels(word));
    Ok(url)
}

/// Tracker listing of every feedback issue.
pub fn all_feedback_url(config: &TrackerConfig) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("{}/issues", config.repo_web_url()))?;
    url.query_pairs_mut().append_pair("labels", FEEDBACK_LABEL);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Issue;
    use crate::parse::parse_issue;

    fn record(comments: &str) -> FeedbackRecord {
        FeedbackRecord {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            rating: 3,
            comments: comments.into(),
            timestamp: "2026-02-21T10:00:00.000Z".into(),
            word: "CI/CD".into(),
            origin_url: None,
        }
    }

    fn query(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn body_has_stars_and_no_email() {
        let body = issue_body(&record("Fast builds"));
        assert!(body.contains("**Rating:** ⭐⭐⭐ (3/5)"));
        assert!(body.contains("**Name:** Ada Lovelace"));
        assert!(!body.contains("ada@example.com"));
    }

    #[test]
    fn empty_comment_uses_placeholder() {
        let body = issue_body(&record("   "));
        assert!(body.contains("## Comments\nNo additional comments provided.\n"));
    }

    #[test]
    fn generated_body_parses_back() {
        let rec = record("Line one\nLine two");
        let issue = Issue {
            title: issue_title(&rec.word),
            body: Some(issue_body(&rec)),
            created_at: rec.timestamp.clone(),
            html_url: "https://github.com/tislov-dev/3d-word-globe-dashboard/issues/3".into(),
            pull_request: None,
        };
        let parsed = parse_issue(&issue);
        assert_eq!(parsed.name, rec.name);
        assert_eq!(parsed.rating, rec.rating);
        assert_eq!(parsed.comments, rec.comments);
        assert_eq!(parsed.word, rec.word);
    }

    #[test]
    fn creation_url_carries_title_body_labels() {
        let cfg = TrackerConfig::default();
        let url = creation_url(&cfg, &record("ok")).unwrap();
        assert_eq!(url.host_str(), Some("github.com"));
        assert_eq!(url.path(), "/tislov-dev/3d-word-globe-dashboard/issues/new");
        assert_eq!(query(&url, "title").as_deref(), Some("Feedback: CI/CD"));
        assert_eq!(query(&url, "labels").as_deref(), Some("feedback,proposal:ci/cd"));
        assert!(query(&url, "body").unwrap().contains("(3/5)"));
    }

    #[test]
    fn auxiliary_links() {
        let cfg = TrackerConfig::default();
        let manual = manual_issue_url(&cfg, "KPIs").unwrap();
        assert_eq!(query(&manual, "template").as_deref(), Some("feedback.md"));
        assert_eq!(query(&manual, "labels").as_deref(), Some("feedback,proposal:kpis"));

        let all = all_feedback_url(&cfg).unwrap();
        assert_eq!(
            all.as_str(),
            "https://github.com/tislov-dev/3d-word-globe-dashboard/issues?labels=feedback"
        );
    }
}
