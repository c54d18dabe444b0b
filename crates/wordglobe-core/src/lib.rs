pub mod catalogue;
pub mod config;
pub mod dashboard;
pub mod feedback;
pub mod issue_form;
pub mod merge;
pub mod parse;
pub mod render;
pub mod sanitize;
pub mod search;
pub mod submission;

pub use catalogue::{Theme, THEMES};
pub use config::TrackerConfig;
pub use dashboard::DashboardData;
pub use feedback::{FeedbackRecord, Issue, PullRequestRef};
pub use merge::{merge_feedback, MergedEntry, Origin};
pub use parse::parse_issue;
pub use sanitize::{sanitize_entry, SanitizedEntry};
pub use search::ViewState;
pub use submission::{FeedbackForm, SubmitError, Submission, SubmissionState, ValidationError};
