//! HTTP client for the tracker's public issue listing.

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;
use wordglobe_core::{Issue, TrackerConfig};

use crate::{IssueSource, SyncError};

const USER_AGENT: &str = concat!("wordglobe/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";
const PAGE_SIZE: &str = "100";

/// Read-only client for `GET /repos/{owner}/{repo}/issues`.
///
/// Unauthenticated: only public issues are visible and the tracker's anonymous
/// rate limit applies.
pub struct TrackerClient {
    client: reqwest::Client,
    issues_url: String,
}

impl TrackerClient {
    pub fn new(config: &TrackerConfig) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            issues_url: config.issues_api_url(),
        })
    }

    /// Listing URL for the given labels, open and closed issues alike.
    fn listing_url(&self, labels: &[&str]) -> Result<Url, SyncError> {
        let mut url = Url::parse(&self.issues_url)?;
        {
            let mut query = url.query_pairs_mut();
            if !labels.is_empty() {
                query.append_pair("labels", &labels.join(","));
            }
            query.append_pair("state", "all");
            query.append_pair("per_page", PAGE_SIZE);
        }
        Ok(url)
    }
}

#[async_trait]
impl IssueSource for TrackerClient {
    async fn list_issues(&self, labels: &[&str]) -> Result<Vec<Issue>, SyncError> {
        let url = self.listing_url(labels)?;

        debug!(url = %url, "listing tracker issues");
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let issues: Vec<Issue> = serde_json::from_str(&body)?;
        info!(labels = %labels.join(","), count = issues.len(), "listed tracker issues");
        Ok(issues)
    }
}
