//! Term-based note matching.
//!
//! # Invariants
//! - Terms are whitespace-separated and lowercased at parse time.
//! - A note matches iff every term is a substring of its lowercased title or
//!   its lowercased content. Different terms may hit different fields.
//! - A query with zero terms matches every note.

use crate::model::note::Note;
use crate::model::NoteMap;

/// Parsed search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    terms: Vec<String>,
}

impl SearchQuery {
    /// Splits `text` into lowercase terms. Blank text yields no terms.
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let terms = text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>();
        Self { text, terms }
    }

    /// Original query text, kept so callers can re-run the same search.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// True when the query has no terms and therefore matches everything.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns whether `note` satisfies every term.
    pub fn matches(&self, note: &Note) -> bool {
        if self.terms.is_empty() {
            return true;
        }

        let title = note.title.to_lowercase();
        let content = note.content.to_lowercase();
        self.terms
            .iter()
            .all(|term| title.contains(term.as_str()) || content.contains(term.as_str()))
    }
}

/// Collects the notes matching `query` into an owned map.
pub fn filter_notes<'a, I>(notes: I, query: &SearchQuery) -> NoteMap
where
    I: IntoIterator<Item = &'a Note>,
{
    notes
        .into_iter()
        .filter(|note| query.matches(note))
        .map(|note| (note.id, note.clone()))
        .collect()
}
