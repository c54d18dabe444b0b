//! Find the tracker issues that hold feedback for a word.
//!
//! Label hygiene on the tracker is imperfect: issues filed by hand may lack the
//! per-word label or every label. An empty result therefore widens the query
//! in two steps, trading precision for recall:
//!
//! 1. `feedback` + `proposal:<word>` labels, taken as-is.
//! 2. `feedback` label only, titles containing `feedback: <word>`.
//! 3. Every issue (only when step 2's query itself returned nothing), titles
//!    containing the bare word.
//!
//! Matching in steps 2 and 3 is case-insensitive and skips pull requests,
//! which the tracker lists alongside issues.

use async_trait::async_trait;
use tracing::{debug, info, warn};
use wordglobe_core::feedback::{FEEDBACK_LABEL, proposal_label};
use wordglobe_core::{FeedbackRecord, Issue, parse_issue};

use crate::SyncError;

/// Somewhere tracker issues can be listed from.
#[async_trait]
pub trait IssueSource {
    /// Open and closed issues carrying every label in `labels`. An empty
    /// slice lists every issue.
    async fn list_issues(&self, labels: &[&str]) -> Result<Vec<Issue>, SyncError>;
}

#[async_trait]
impl<T: IssueSource + Sync + ?Sized> IssueSource for &T {
    async fn list_issues(&self, labels: &[&str]) -> Result<Vec<Issue>, SyncError> {
        (**self).list_issues(labels).await
    }
}

fn titles_containing(issues: Vec<Issue>, needle: &str) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|issue| !issue.is_pull_request())
        .filter(|issue| issue.title.to_lowercase().contains(needle))
        .collect()
}

/// Raw feedback issues for `word`.
///
/// A failure of the primary query is returned as an error. Failures of the
/// widened queries are logged and treated as "nothing found".
pub async fn fetch_feedback_issues<S>(source: &S, word: &str) -> Result<Vec<Issue>, SyncError>
where
    S: IssueSource + Sync + ?Sized,
{
    let proposal = proposal_label(word);
    let issues = source.list_issues(&[FEEDBACK_LABEL, proposal.as_str()]).await?;
    if !issues.is_empty() {
        return Ok(issues);
    }

    let lowered = word.to_lowercase();
    debug!(word = %word, "no labelled issues, retrying with feedback label only");
    let feedback_issues = match source.list_issues(&[FEEDBACK_LABEL]).await {
        Ok(issues) => issues,
        Err(e) => {
            warn!(word = %word, error = %e, "feedback-label query failed");
            return Ok(Vec::new());
        }
    };
    if !feedback_issues.is_empty() {
        return Ok(titles_containing(
            feedback_issues,
            &format!("feedback: {lowered}"),
        ));
    }

    debug!(word = %word, "no feedback-labelled issues, scanning all issues");
    match source.list_issues(&[]).await {
        Ok(all) => Ok(titles_containing(all, &lowered)),
        Err(e) => {
            warn!(word = %word, error = %e, "unfiltered issue query failed");
            Ok(Vec::new())
        }
    }
}

/// Remote feedback records for `word`.
///
/// Never fails: when the tracker cannot be reached the result is empty and a
/// warning is logged, so callers carry on with local data.
pub async fn load_remote_feedback<S>(source: &S, word: &str) -> Vec<FeedbackRecord>
where
    S: IssueSource + Sync + ?Sized,
{
    match fetch_feedback_issues(source, word).await {
        Ok(issues) => {
            info!(word = %word, count = issues.len(), "loaded tracker feedback");
            issues.iter().map(parse_issue).collect()
        }
        Err(e) => {
            warn!(word = %word, error = %e, "could not load tracker feedback, using local cache only");
            Vec::new()
        }
    }
}
