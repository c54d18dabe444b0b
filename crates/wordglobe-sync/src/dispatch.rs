//! Hand a pre-filled issue form to the author.
//!
//! The tracker needs interactive authorization to file issues, so "creating"
//! feedback remotely means opening the tracker's new-issue page. A successful
//! dispatch only means the page was handed off, not that an issue was filed.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("could not open {url}: {source}")]
    Open { url: String, source: std::io::Error },

    #[error("{0}")]
    Other(String),
}

pub trait IssueDispatcher {
    fn dispatch(&self, url: &Url) -> Result<(), DispatchError>;
}

impl<T: IssueDispatcher + ?Sized> IssueDispatcher for &T {
    fn dispatch(&self, url: &Url) -> Result<(), DispatchError> {
        (**self).dispatch(url)
    }
}

/// Opens the form in the system's default browser.
#[cfg(feature = "browser")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDispatcher;

#[cfg(feature = "browser")]
impl IssueDispatcher for BrowserDispatcher {
    fn dispatch(&self, url: &Url) -> Result<(), DispatchError> {
        open::that(url.as_str()).map_err(|source| DispatchError::Open {
            url: url.to_string(),
            source,
        })?;
        tracing::info!(host = url.host_str().unwrap_or_default(), "opened issue form in browser");
        Ok(())
    }
}
