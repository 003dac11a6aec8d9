//! Derived views over the note collection: text/tag filtering, tag
//! frequency and summary counts. Nothing here is persisted; every view is
//! recomputed from the current notes.

use std::collections::HashMap;

use serde::Serialize;

use crate::entity::{normalize_tag, Note, TagCount};

/// Filter applied to the note list.
///
/// A note passes when it matches the text query (case-insensitive
/// substring of title, content or any tag) and carries every required tag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoteFilter {
    /// Free-text query. Empty matches everything.
    pub query: String,
    /// Tags a note must all carry. Empty matches everything.
    pub tags: Vec<String>,
}

impl NoteFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.require_tag(tag.as_ref());
        }
        self
    }

    /// Check if filter has any constraints.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.tags.is_empty()
    }

    /// Add a required tag, ignoring blanks and duplicates.
    pub fn require_tag(&mut self, raw: &str) {
        if let Some(tag) = normalize_tag(raw) {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
    }

    /// Add the tag to the selection, or remove it if already selected.
    pub fn toggle_tag(&mut self, raw: &str) {
        let Some(tag) = normalize_tag(raw) else {
            return;
        };
        if let Some(pos) = self.tags.iter().position(|t| *t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag);
        }
    }

    /// Narrow the selection to exactly this tag, unless it is already selected.
    pub fn focus_tag(&mut self, raw: &str) {
        let Some(tag) = normalize_tag(raw) else {
            return;
        };
        if !self.tags.contains(&tag) {
            self.tags = vec![tag];
        }
    }

    pub fn matches_text(&self, note: &Note) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        note.title.to_lowercase().contains(&needle)
            || note.content.to_lowercase().contains(&needle)
            || note.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    pub fn matches_tags(&self, note: &Note) -> bool {
        self.tags.iter().all(|t| note.has_tag(t))
    }

    pub fn matches(&self, note: &Note) -> bool {
        self.matches_text(note) && self.matches_tags(note)
    }

    /// Matching notes, most recently updated first.
    ///
    /// The sort is stable, so notes with equal `updated_at` keep their
    /// collection order.
    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        let mut result: Vec<&Note> = notes.iter().filter(|n| self.matches(n)).collect();
        result.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        result
    }
}

/// Parse a raw query string into a filter.
///
/// `tag:<name>` tokens become required tags; the remaining words, joined
/// by single spaces, form the text query.
///
/// # Examples
///
/// ```ignore
/// let filter = parse_query("tag:work tag:urgent quarterly report");
/// assert_eq!(filter.query, "quarterly report");
/// assert_eq!(filter.tags, vec!["work", "urgent"]);
/// ```
pub fn parse_query(raw: &str) -> NoteFilter {
    let mut filter = NoteFilter::default();
    let mut remaining = Vec::new();

    for token in raw.split_whitespace() {
        if let Some(value) = token.strip_prefix("tag:") {
            filter.require_tag(value);
        } else {
            remaining.push(token);
        }
    }

    filter.query = remaining.join(" ");
    filter
}

/// Count how many notes carry each tag.
///
/// Sorted by count descending; equal counts keep the order in which the
/// tags were first seen while walking the collection.
pub fn tag_frequency(notes: &[Note]) -> Vec<TagCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TagCount> = Vec::new();

    for tag in notes.iter().flat_map(|n| n.tags.iter()) {
        match index.get(tag.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(tag.as_str(), counts.len());
                counts.push(TagCount {
                    name: tag.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Headline numbers for the collection and the current filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_notes: usize,
    pub total_tags: usize,
    pub filtered: usize,
}

impl Stats {
    pub fn compute(notes: &[Note], filter: &NoteFilter) -> Self {
        Self {
            total_notes: notes.len(),
            total_tags: tag_frequency(notes).len(),
            filtered: notes.iter().filter(|n| filter.matches(n)).count(),
        }
    }
}
