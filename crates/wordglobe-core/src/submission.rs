//! Feedback form validation and the per-attempt submission state machine.
//!
//! ```text
//! Idle ──begin──▶ Validating ──invalid──▶ Idle
//!                     │
//!                   valid
//!                     ▼
//!               OpeningRemote ──dispatched──▶ Success (locked)
//!                     │
//!                   failed
//!                     ▼
//!               RemoteFailed ──begin──▶ Validating …
//! ```
//!
//! The local write happens between `OpeningRemote` and the terminal state
//! whatever the dispatch outcome; the caller drives that step.

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::feedback::{FeedbackRecord, MAX_RATING, MIN_RATING};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter your name")]
    MissingName,
    #[error("please enter your email")]
    MissingEmail,
    #[error("please provide a rating")]
    MissingRating,
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("feedback for this word has already been submitted")]
    Locked,
    #[error("a submission is already in progress")]
    InProgress,
}

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    /// 0 until the author picks a star.
    pub rating: u8,
    pub comments: String,
}

impl FeedbackForm {
    /// Check required fields and build the record stamped with `now`.
    pub fn validate(&self, word: &str, now: DateTime<Utc>) -> Result<FeedbackRecord, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if self.rating == 0 {
            return Err(ValidationError::MissingRating);
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ValidationError::RatingOutOfRange(self.rating));
        }

        Ok(FeedbackRecord {
            name: name.to_string(),
            email: email.to_string(),
            rating: self.rating,
            comments: self.comments.trim().to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            word: word.to_string(),
            origin_url: None,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    OpeningRemote,
    Success,
    RemoteFailed,
}

impl SubmissionState {
    /// Message shown to the author once the attempt has finished.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Success => Some(
                "GitHub issue page opened! Please submit the pre-filled issue on GitHub. Also saved locally.",
            ),
            Self::RemoteFailed => {
                Some("Feedback saved locally. Could not open GitHub; your feedback is stored on this machine only.")
            }
            _ => None,
        }
    }
}

/// Submission form for one word.
#[derive(Debug, Clone)]
pub struct Submission {
    word: String,
    state: SubmissionState,
}

impl Submission {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            state: SubmissionState::Idle,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// After a confirmed dispatch the form is disabled.
    pub fn is_locked(&self) -> bool {
        self.state == SubmissionState::Success
    }

    /// Validate the form. On success the machine is in `OpeningRemote` and the
    /// returned record should be dispatched and cached; on a validation error
    /// it is back in `Idle` and nothing may be written.
    pub fn begin(&mut self, form: &FeedbackForm, now: DateTime<Utc>) -> Result<FeedbackRecord, SubmitError> {
        match self.state {
            SubmissionState::Idle | SubmissionState::RemoteFailed => {}
            SubmissionState::Success => return Err(SubmitError::Locked),
            SubmissionState::Validating | SubmissionState::OpeningRemote => {
                return Err(SubmitError::InProgress);
            }
        }

        self.state = SubmissionState::Validating;
        match form.validate(&self.word, now) {
            Ok(record) => {
                self.state = SubmissionState::OpeningRemote;
                Ok(record)
            }
            Err(e) => {
                self.state = SubmissionState::Idle;
                Err(e.into())
            }
        }
    }

    /// Record the dispatch outcome once the local write is done.
    pub fn finish(&mut self, dispatched: bool) -> SubmissionState {
        if self.state == SubmissionState::OpeningRemote {
            self.state = if dispatched {
                SubmissionState::Success
            } else {
                SubmissionState::RemoteFailed
            };
        }
        self.state
    }

    /// Abandon an attempt whose local write failed; the form stays editable.
    pub fn abort(&mut self) {
        if self.state == SubmissionState::OpeningRemote {
            self.state = SubmissionState::Idle;
        }
    }
}
