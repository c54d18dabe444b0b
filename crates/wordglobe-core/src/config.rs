//! Issue tracker coordinates shared by the fetcher, the issue-form builder and
//! origin-URL validation.

pub const DEFAULT_OWNER: &str = "tislov-dev";
pub const DEFAULT_REPO: &str = "3d-word-globe-dashboard";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_WEB_BASE: &str = "https://github.com";

/// Fixed tracker configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub owner: String,
    pub repo: String,
    /// REST API root, e.g. `https://api.github.com` (no trailing slash).
    pub api_base: String,
    /// Web root that issue pages live under, e.g. `https://github.com`.
    pub web_base: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OWNER, DEFAULT_REPO, DEFAULT_API_BASE, DEFAULT_WEB_BASE)
    }
}

impl TrackerConfig {
    pub fn new(owner: &str, repo: &str, api_base: &str, web_base: &str) -> Self {
        Self {
            owner: owner.trim_matches('/').to_string(),
            repo: repo.trim_matches('/').to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
            web_base: web_base.trim_end_matches('/').to_string(),
        }
    }

    /// `{api_base}/repos/{owner}/{repo}/issues`
    pub fn issues_api_url(&self) -> String {
        format!("{}/repos/{}/{}/issues", self.api_base, self.owner, self.repo)
    }

    /// `{web_base}/{owner}/{repo}`
    pub fn repo_web_url(&self) -> String {
        format!("{}/{}/{}", self.web_base, self.owner, self.repo)
    }

    /// Path prefix every genuine issue page on the web host starts with.
    pub fn issue_path_prefix(&self) -> String {
        format!("/{}/{}/", self.owner, self.repo)
    }
}
