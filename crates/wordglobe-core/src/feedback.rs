//! Feedback records and the raw tracker issues they are recovered from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest and highest valid star rating.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Fixed label every feedback issue carries.
pub const FEEDBACK_LABEL: &str = "feedback";

/// One piece of feedback about a subject word.
///
/// Local records carry the author's email and no `origin_url`; records parsed
/// from the tracker carry an `origin_url` and an empty email. A rating of 0
/// means "no rating recorded" and never reaches the local cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub rating: u8,
    #[serde(default)]
    pub comments: String,
    /// ISO 8601 timestamp string.
    pub timestamp: String,
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
}

impl FeedbackRecord {
    /// Parse `timestamp` as RFC 3339. `None` when the stored text is not a
    /// valid timestamp.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.timestamp.trim())
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }

    pub fn has_valid_rating(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }
}

/// The subset of a tracker issue the feedback pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    /// The tracker returns `null` for issues created without a body.
    #[serde(default)]
    pub body: Option<String>,
    pub created_at: String,
    pub html_url: String,
    /// Present when the listing entry is a pull request rather than an issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestRef>,
}

/// Marker object the tracker attaches to pull requests in issue listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    #[serde(default)]
    pub html_url: Option<String>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Per-word tracker label: `proposal:<word, lowercased>`.
pub fn proposal_label(word: &str) -> String {
    format!("proposal:{}", word.to_lowercase())
}

/// Label set attached to a feedback issue: `feedback,proposal:<word>`.
pub fn feedback_labels(word: &str) -> String {
    format!("{FEEDBACK_LABEL},{}", proposal_label(word))
}
