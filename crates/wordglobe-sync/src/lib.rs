//! Sync layer: reading feedback issues from the tracker, handing new feedback
//! to the tracker's web form, and reconciling both with the local cache.

mod error;
pub use error::SyncError;

pub mod dispatch;
pub mod fetch;
pub mod service;

#[cfg(feature = "http")]
pub mod http;

pub use dispatch::{DispatchError, IssueDispatcher};
pub use fetch::{IssueSource, fetch_feedback_issues, load_remote_feedback};
pub use service::{FeedbackService, ServiceError, SubmitOutcome};

#[cfg(feature = "browser")]
pub use dispatch::BrowserDispatcher;

#[cfg(feature = "http")]
pub use http::TrackerClient;
