//! Reconcile tracker feedback with the local cache.
//!
//! A submission is written to the local cache immediately and shows up on the
//! tracker later (if the author actually files the pre-filled issue). Once the
//! tracker copy exists the local copy is suppressed; until then, or if it never
//! appears, the local record is shown on its own.

use std::cmp::Reverse;

use crate::feedback::FeedbackRecord;

/// Records this far apart or more are never the same submission.
pub const DUPLICATE_WINDOW_MS: i64 = 60_000;

/// Where a merged record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    /// Position of the record in the word's local cache sequence.
    Local { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedEntry {
    pub record: FeedbackRecord,
    pub origin: Origin,
}

/// Same word, author and rating, created less than [`DUPLICATE_WINDOW_MS`] apart.
///
/// Records whose timestamps do not parse are never duplicates.
pub fn is_duplicate(a: &FeedbackRecord, b: &FeedbackRecord) -> bool {
    if a.word != b.word || a.name != b.name || a.rating != b.rating {
        return false;
    }
    match (a.timestamp_utc(), b.timestamp_utc()) {
        (Some(ta), Some(tb)) => (ta - tb).num_milliseconds().abs() < DUPLICATE_WINDOW_MS,
        _ => false,
    }
}

/// Merge remote and local feedback for one word, newest first.
///
/// All remote records are kept. A local record is kept only if no remote
/// record duplicates it. The sort is stable, so records with equal timestamps
/// keep remote-then-local input order; unparseable timestamps sort last.
pub fn merge_feedback(remote: Vec<FeedbackRecord>, local: Vec<FeedbackRecord>) -> Vec<MergedEntry> {
    let local_only: Vec<MergedEntry> = local
        .into_iter()
        .enumerate()
        .filter(|(_, record)| !remote.iter().any(|r| is_duplicate(r, record)))
        .map(|(index, record)| MergedEntry {
            record,
            origin: Origin::Local { index },
        })
        .collect();

    let mut merged: Vec<MergedEntry> = remote
        .into_iter()
        .map(|record| MergedEntry {
            record,
            origin: Origin::Remote,
        })
        .collect();
    merged.extend(local_only);

    merged.sort_by_key(|e| Reverse(e.record.timestamp_utc()));
    merged
}
