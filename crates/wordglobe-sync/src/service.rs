//! Feedback service: load, submit and delete feedback for a word.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;
use wordglobe_core::issue_form::creation_url;
use wordglobe_core::sanitize::sanitize_all;
use wordglobe_core::{
    FeedbackForm, FeedbackRecord, MergedEntry, SanitizedEntry, SubmitError, Submission,
    SubmissionState, TrackerConfig, merge_feedback,
};
use wordglobe_store::{FeedbackCache, KeyValueStore, StoreError};

use crate::{IssueDispatcher, IssueSource, load_remote_feedback};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error("local cache: {0}")]
    Store(#[from] StoreError),
}

/// Result of a submission that passed validation.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// `Success` or `RemoteFailed`.
    pub state: SubmissionState,
    pub record: FeedbackRecord,
    /// Pre-filled issue form, when one could be built.
    pub issue_url: Option<Url>,
}

impl SubmitOutcome {
    pub fn message(&self) -> &'static str {
        self.state.message().unwrap_or_default()
    }
}

/// Ties the tracker, the issue-form hand-off and the local cache together.
pub struct FeedbackService<Src, D, S> {
    config: TrackerConfig,
    source: Src,
    dispatcher: D,
    cache: FeedbackCache<S>,
}

impl<Src, D, S> FeedbackService<Src, D, S>
where
    Src: IssueSource + Sync,
    D: IssueDispatcher,
    S: KeyValueStore,
{
    pub fn new(config: TrackerConfig, source: Src, dispatcher: D, cache: FeedbackCache<S>) -> Self {
        Self {
            config,
            source,
            dispatcher,
            cache,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn cache(&self) -> &FeedbackCache<S> {
        &self.cache
    }

    /// Tracker and local feedback for `word`, deduplicated, newest first.
    ///
    /// Tracker failures degrade to local-only results; only a failing local
    /// backend is an error.
    pub async fn load(&self, word: &str) -> Result<Vec<MergedEntry>, StoreError> {
        let remote = load_remote_feedback(&self.source, word).await;
        let local = self.cache.read_all(word)?;
        let merged = merge_feedback(remote, local);
        info!(word = %word, count = merged.len(), "merged feedback");
        Ok(merged)
    }

    /// [`load`](Self::load), escaped and with untrusted links removed.
    pub async fn load_sanitized(&self, word: &str) -> Result<Vec<SanitizedEntry>, StoreError> {
        let merged = self.load(word).await?;
        Ok(sanitize_all(&merged, &self.config))
    }

    /// Run one submission attempt stamped with the current time.
    pub fn submit(
        &self,
        submission: &mut Submission,
        form: &FeedbackForm,
    ) -> Result<SubmitOutcome, ServiceError> {
        self.submit_at(submission, form, Utc::now())
    }

    /// Run one submission attempt.
    ///
    /// Validation errors leave the cache untouched. Otherwise the issue form is
    /// dispatched and the record is cached locally whether or not the dispatch
    /// worked.
    pub fn submit_at(
        &self,
        submission: &mut Submission,
        form: &FeedbackForm,
        now: DateTime<Utc>,
    ) -> Result<SubmitOutcome, ServiceError> {
        let record = submission.begin(form, now)?;
        let word = submission.word().to_string();

        let issue_url = match creation_url(&self.config, &record) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(word = %word, error = %e, "could not build issue form URL");
                None
            }
        };
        let dispatched = match &issue_url {
            Some(url) => match self.dispatcher.dispatch(url) {
                Ok(()) => true,
                Err(e) => {
                    warn!(word = %word, error = %e, "issue form dispatch failed, keeping feedback local");
                    false
                }
            },
            None => false,
        };

        if let Err(e) = self.cache.append(&word, record.clone()) {
            submission.abort();
            return Err(e.into());
        }

        let state = submission.finish(dispatched);
        info!(word = %word, ?state, "feedback submitted");
        Ok(SubmitOutcome {
            state,
            record,
            issue_url,
        })
    }

    /// Delete a local record by its cache index. Out-of-range is a no-op.
    pub fn delete(&self, word: &str, index: usize) -> Result<Option<FeedbackRecord>, StoreError> {
        self.cache.delete_at(word, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DispatchError;
    use crate::fetch::tests::{FakeSource, issue};
    use chrono::TimeZone;
    use std::sync::Mutex;
    use wordglobe_core::{Origin, ValidationError};
    use wordglobe_store::MemoryStore;

    #[derive(Default)]
    struct RecordingDispatcher {
        fail: bool,
        opened: Mutex<Vec<Url>>,
    }

    impl IssueDispatcher for RecordingDispatcher {
        fn dispatch(&self, url: &Url) -> Result<(), DispatchError> {
            if self.fail {
                return Err(DispatchError::Other("popup blocked".into()));
            }
            self.opened.lock().unwrap().push(url.clone());
            Ok(())
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 21, 10, 0, 0).unwrap()
    }

    fn form(rating: u8) -> FeedbackForm {
        FeedbackForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            rating,
            comments: "Nice <b>charts</b>".into(),
        }
    }

    fn service(
        source: FakeSource,
        fail: bool,
    ) -> FeedbackService<FakeSource, RecordingDispatcher, MemoryStore> {
        FeedbackService::new(
            TrackerConfig::default(),
            source,
            RecordingDispatcher {
                fail,
                ..Default::default()
            },
            FeedbackCache::new(MemoryStore::new()),
        )
    }

    #[test]
    fn every_valid_rating_is_cached() {
        let svc = service(FakeSource::default(), false);
        for rating in 1..=5 {
            let mut submission = Submission::new("Cloud");
            let outcome = svc.submit_at(&mut submission, &form(rating), now()).unwrap();
            assert_eq!(outcome.state, SubmissionState::Success);
            assert!(submission.is_locked());
        }
        assert_eq!(svc.cache().read_all("Cloud").unwrap().len(), 5);
        assert_eq!(svc.dispatcher.opened.lock().unwrap().len(), 5);
    }

    #[test]
    fn zero_rating_writes_nothing() {
        let svc = service(FakeSource::default(), false);
        let mut submission = Submission::new("Cloud");
        let err = svc.submit_at(&mut submission, &form(0), now()).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Submit(SubmitError::Invalid(ValidationError::MissingRating))
        ));
        assert!(svc.cache().read_all("Cloud").unwrap().is_empty());
        assert!(svc.dispatcher.opened.lock().unwrap().is_empty());
        assert_eq!(submission.state(), SubmissionState::Idle);
    }

    #[test]
    fn dispatch_failure_still_saves_locally() {
        let svc = service(FakeSource::default(), true);
        let mut submission = Submission::new("Cloud");
        let outcome = svc.submit_at(&mut submission, &form(3), now()).unwrap();
        assert_eq!(outcome.state, SubmissionState::RemoteFailed);
        assert!(outcome.message().contains("saved locally"));
        assert!(!submission.is_locked());
        assert_eq!(svc.cache().read_all("Cloud").unwrap().len(), 1);
    }

    #[test]
    fn dispatched_url_is_the_prefilled_form() {
        let svc = service(FakeSource::default(), false);
        let mut submission = Submission::new("Cloud");
        let outcome = svc.submit_at(&mut submission, &form(5), now()).unwrap();
        let url = outcome.issue_url.unwrap();
        assert_eq!(url.path(), "/tislov-dev/3d-word-globe-dashboard/issues/new");
        assert_eq!(svc.dispatcher.opened.lock().unwrap()[0], url);
    }

    #[tokio::test]
    async fn echoed_submission_shows_once() {
        let mut echoed = issue("Feedback: Cloud", 4);
        echoed.created_at = "2026-02-21T10:00:40Z".into();
        let svc = service(
            FakeSource::default().with("feedback,proposal:cloud", vec![echoed]),
            false,
        );
        let mut submission = Submission::new("Cloud");
        svc.submit_at(&mut submission, &form(4), now()).unwrap();

        let merged = svc.load("Cloud").await.unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].origin, Origin::Remote);
    }

    #[tokio::test]
    async fn tracker_outage_falls_back_to_local() {
        let svc = service(
            FakeSource::default().failing("feedback,proposal:cloud", 503),
            false,
        );
        let mut submission = Submission::new("Cloud");
        svc.submit_at(&mut submission, &form(2), now()).unwrap();

        let entries = svc.load_sanitized("Cloud").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_local());
        assert_eq!(entries[0].deletable_index, Some(0));
        assert_eq!(entries[0].comments, "Nice &lt;b&gt;charts&lt;/b&gt;");
    }

    #[tokio::test]
    async fn delete_removes_local_entry() {
        let svc = service(FakeSource::default(), false);
        for rating in [1, 2, 3] {
            svc.submit_at(&mut Submission::new("Cloud"), &form(rating), now())
                .unwrap();
        }
        assert!(svc.delete("Cloud", 1).unwrap().is_some());
        assert!(svc.delete("Cloud", 5).unwrap().is_none());
        let ratings: Vec<u8> = svc
            .load("Cloud")
            .await
            .unwrap()
            .iter()
            .map(|e| e.record.rating)
            .collect();
        assert_eq!(ratings, [1, 3]);
    }
}
