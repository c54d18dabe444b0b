//! Make merged feedback safe to drop into HTML.

use url::Url;

use crate::config::TrackerConfig;
use crate::merge::{MergedEntry, Origin};

/// Escape `& < > " '` for use in HTML text or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// True when `raw` is an issue page of the configured repository on the
/// tracker's web host.
pub fn is_valid_origin_url(raw: &str, config: &TrackerConfig) -> bool {
    let (Ok(url), Ok(web)) = (Url::parse(raw), Url::parse(&config.web_base)) else {
        return false;
    };
    matches!(url.scheme(), "http" | "https")
        && url.host_str().is_some()
        && url.host_str() == web.host_str()
        && url.path().starts_with(&config.issue_path_prefix())
}

/// A merged entry ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedEntry {
    /// HTML-escaped.
    pub name: String,
    /// HTML-escaped; empty when there is no comment.
    pub comments: String,
    pub rating: u8,
    pub timestamp: String,
    pub word: String,
    /// Present only when the origin URL passed validation.
    pub origin_url: Option<String>,
    /// Local cache slot this entry can be deleted from. Never set for entries
    /// with a validated origin URL.
    pub deletable_index: Option<usize>,
}

impl SanitizedEntry {
    /// Entries without a validated tracker link are shown as stored locally.
    pub fn is_local(&self) -> bool {
        self.origin_url.is_none()
    }
}

pub fn sanitize_entry(entry: &MergedEntry, config: &TrackerConfig) -> SanitizedEntry {
    let record = &entry.record;
    let origin_url = record
        .origin_url
        .as_deref()
        .filter(|url| is_valid_origin_url(url, config))
        .map(str::to_string);
    let deletable_index = match (entry.origin, &origin_url) {
        (Origin::Local { index }, None) => Some(index),
        _ => None,
    };

    SanitizedEntry {
        name: escape_html(&record.name),
        comments: escape_html(&record.comments),
        rating: record.rating,
        timestamp: record.timestamp.clone(),
        word: record.word.clone(),
        origin_url,
        deletable_index,
    }
}

pub fn sanitize_all(entries: &[MergedEntry], config: &TrackerConfig) -> Vec<SanitizedEntry> {
    entries.iter().map(|e| sanitize_entry(e, config)).collect()
}
