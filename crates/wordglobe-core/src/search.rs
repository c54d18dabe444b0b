//! Word search and the view state that owns it.

use crate::catalogue::{self, Theme};

/// One search hit with the theme it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub word: &'static str,
    pub theme: &'static Theme,
}

/// Words containing `term` (trimmed, case-insensitive), in catalogue order.
/// A blank term matches nothing.
pub fn search_words(term: &str) -> Vec<SearchHit> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    catalogue::THEMES
        .iter()
        .flat_map(|theme| theme.words.iter().map(move |&word| SearchHit { word, theme }))
        .filter(|hit| hit.word.to_lowercase().contains(&term))
        .collect()
}

/// What the globe is currently showing: the active search, which words are
/// highlighted, and which word's dashboard is open.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    results: Vec<SearchHit>,
    selected: Option<&'static str>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a search, replacing the highlight. Returns the hits.
    pub fn search(&mut self, term: &str) -> &[SearchHit] {
        self.search_term = term.trim().to_lowercase();
        self.results = search_words(&self.search_term);
        &self.results
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.results.clear();
    }

    /// Open the dashboard for a catalogue word (case-insensitive). Closes the
    /// result list but keeps the search term. Returns the catalogue spelling.
    pub fn select(&mut self, word: &str) -> Option<&'static str> {
        let found = catalogue::lookup(word)?;
        self.results.clear();
        self.selected = Some(found);
        Some(found)
    }

    pub fn close_dashboard(&mut self) {
        self.selected = None;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_highlighted(&self, word: &str) -> bool {
        self.results.iter().any(|hit| hit.word == word)
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }
}
