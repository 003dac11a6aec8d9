//! The note collection and every mutation applied to it.

use chrono::Utc;
use tracing::debug;

use crate::confirm::Confirm;
use crate::entity::{normalize_tags, Note};
use crate::error::{NotekeeperError, Result};
use crate::id;
use crate::storage::{NoteStorage, Slot};

/// Single owner of the note collection.
///
/// Insertion order is newest-first; display order is derived elsewhere.
/// Every successful mutation writes the whole collection back through the
/// storage adapter.
#[derive(Debug)]
pub struct NoteStore<S: Slot> {
    notes: Vec<Note>,
    storage: NoteStorage<S>,
}

impl<S: Slot> NoteStore<S> {
    /// Load whatever the storage holds and take ownership of it.
    pub fn open(storage: NoteStorage<S>) -> Self {
        let notes = storage.load();
        debug!(count = notes.len(), "opened note store");
        Self { notes, storage }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn storage(&self) -> &NoteStorage<S> {
        &self.storage
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Resolve a full id or a unique id prefix.
    pub fn find(&self, key: &str) -> Result<&Note> {
        if let Some(note) = self.get(key) {
            return Ok(note);
        }

        let mut matches = self.notes.iter().filter(|n| n.id.starts_with(key));
        match (matches.next(), matches.next()) {
            (Some(note), None) if !key.is_empty() => Ok(note),
            (Some(_), _) => Err(NotekeeperError::AmbiguousId(key.to_string())),
            (None, _) => Err(NotekeeperError::NoteNotFound(key.to_string())),
        }
    }

    /// Create a note and put it at the front of the collection.
    ///
    /// Blank title or content is rejected before an id is generated.
    pub fn create(&mut self, title: &str, content: &str, tags: Vec<String>) -> Result<Note> {
        let (title, content) = validated(title, content)?;

        let note = Note::new(self.fresh_id(), title, content, normalize_tags(tags), Utc::now());
        self.notes.insert(0, note.clone());
        debug!(id = %note.id, "created note");

        self.persist();
        Ok(note)
    }

    /// Replace a note's title, content and tags in place.
    pub fn update(&mut self, id: &str, title: &str, content: &str, tags: Vec<String>) -> Result<Note> {
        let (title, content) = validated(title, content)?;

        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NotekeeperError::NoteNotFound(id.to_string()))?;

        note.title = title;
        note.content = content;
        note.tags = normalize_tags(tags);
        // Never move backwards, even if the clock does.
        note.updated_at = Utc::now().max(note.updated_at);
        let updated = note.clone();
        debug!(id = %updated.id, "updated note");

        self.persist();
        Ok(updated)
    }

    /// Remove a note. Returns `false` if no note had that id.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return false;
        }

        debug!(id, "deleted note");
        self.persist();
        true
    }

    /// Delete after asking `confirm`. A "no" leaves the store untouched.
    pub fn delete_confirmed<C: Confirm>(&mut self, id: &str, confirm: &mut C) -> Result<bool> {
        let prompt = match self.get(id) {
            Some(note) => format!("Delete note ({}) - {}?", note.short_id(), note.title),
            None => return Ok(false),
        };

        if !confirm.confirm(&prompt)? {
            debug!(id, "delete cancelled");
            return Ok(false);
        }

        Ok(self.delete(id))
    }

    fn persist(&mut self) {
        self.storage.save(&self.notes);
    }

    fn fresh_id(&self) -> String {
        loop {
            let candidate = id::generate();
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

fn validated(title: &str, content: &str) -> Result<(String, String)> {
    let title = title.trim();
    let content = content.trim();

    if title.is_empty() {
        return Err(NotekeeperError::Validation("title must not be empty".to_string()));
    }
    if content.is_empty() {
        return Err(NotekeeperError::Validation("content must not be empty".to_string()));
    }

    Ok((title.to_string(), content.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::Always;
    use crate::storage::MemorySlot;

    fn empty_store() -> NoteStore<MemorySlot> {
        NoteStore::open(NoteStorage::new(MemorySlot::new()))
    }

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_create_sets_equal_timestamps_and_unique_id() {
        let mut store = empty_store();
        let a = store.create("A", "apple", tags(&["fruit"])).unwrap();
        let b = store.create("B", "bolt", tags(&["metal"])).unwrap();

        assert_eq!(a.created_at, a.updated_at);
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_trims_and_prepends() {
        let mut store = empty_store();
        store.create("first", "one", vec![]).unwrap();
        let second = store.create("  second  ", "\ttwo\n", vec![]).unwrap();

        assert_eq!(second.title, "second");
        assert_eq!(second.content, "two");
        assert_eq!(store.notes()[0].id, second.id);
    }

    #[test]
    fn test_create_normalizes_tags() {
        let mut store = empty_store();
        let note = store.create("t", "c", tags(&["Rust", "rust", " ", "CLI"])).unwrap();
        assert_eq!(note.tags, vec!["rust", "cli"]);
    }

    #[test]
    fn test_create_with_empty_title_is_rejected() {
        let mut store = empty_store();
        let result = store.create("   ", "content", vec![]);

        assert!(matches!(result, Err(NotekeeperError::Validation(_))));
        assert!(store.is_empty());
        assert!(store.storage().slot().data().is_none());
    }

    #[test]
    fn test_create_with_empty_content_is_rejected() {
        let mut store = empty_store();
        assert!(store.create("title", "\n", vec![]).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_preserves_id_created_and_position() {
        let mut store = empty_store();
        let original = store.create("A", "apple", vec![]).unwrap();
        store.create("B", "bolt", vec![]).unwrap();

        let updated = store
            .update(&original.id, "A2", "apricot", tags(&["fruit"]))
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
        assert_eq!(updated.title, "A2");
        assert_eq!(updated.tags, vec!["fruit"]);
        assert_eq!(store.notes()[1].id, original.id);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = empty_store();
        store.create("A", "apple", vec![]).unwrap();
        let before = store.notes().to_vec();

        let result = store.update("missing", "x", "y", vec![]);
        assert!(matches!(result, Err(NotekeeperError::NoteNotFound(_))));
        assert_eq!(store.notes(), before.as_slice());
    }

    #[test]
    fn test_update_with_blank_content_is_rejected() {
        let mut store = empty_store();
        let note = store.create("A", "apple", vec![]).unwrap();

        assert!(store.update(&note.id, "A", "  ", vec![]).is_err());
        assert_eq!(store.get(&note.id).unwrap().content, "apple");
    }

    #[test]
    fn test_delete() {
        let mut store = empty_store();
        let a = store.create("A", "apple", vec![]).unwrap();
        store.create("B", "bolt", vec![]).unwrap();

        assert!(store.delete(&a.id));
        assert!(store.get(&a.id).is_none());
        assert_eq!(store.len(), 1);

        assert!(!store.delete(&a.id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_confirmed_no_keeps_note() {
        let mut store = empty_store();
        let a = store.create("A", "apple", vec![]).unwrap();

        assert!(!store.delete_confirmed(&a.id, &mut Always(false)).unwrap());
        assert!(store.get(&a.id).is_some());

        assert!(store.delete_confirmed(&a.id, &mut Always(true)).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_confirmed_missing_does_not_prompt() {
        struct Panicking;
        impl Confirm for Panicking {
            fn confirm(&mut self, _prompt: &str) -> Result<bool> {
                panic!("should not prompt for a missing note");
            }
        }

        let mut store = empty_store();
        assert!(!store.delete_confirmed("nope", &mut Panicking).unwrap());
    }

    #[test]
    fn test_every_mutation_persists() {
        let mut store = empty_store();
        let a = store.create("A", "apple", vec![]).unwrap();
        let reloaded = NoteStorage::new(store.storage().slot().clone()).load();
        assert_eq!(reloaded.len(), 1);

        store.update(&a.id, "A", "avocado", vec![]).unwrap();
        let reloaded = NoteStorage::new(store.storage().slot().clone()).load();
        assert_eq!(reloaded[0].content, "avocado");

        store.delete(&a.id);
        let reloaded = NoteStorage::new(store.storage().slot().clone()).load();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_open_loads_existing() {
        let mut store = empty_store();
        let a = store.create("A", "apple", vec![]).unwrap();

        let reopened = NoteStore::open(NoteStorage::new(store.storage().slot().clone()));
        assert_eq!(reopened.get(&a.id), Some(&a));
    }

    #[test]
    fn test_find_by_prefix() {
        let mut store = empty_store();
        let a = store.create("A", "apple", vec![]).unwrap();

        assert_eq!(store.find(&a.id).unwrap().id, a.id);
        assert_eq!(store.find(&a.id[..a.id.len() - 2]).unwrap().id, a.id);
        assert!(matches!(store.find("zzzz-nope"), Err(NotekeeperError::NoteNotFound(_))));
    }

    #[test]
    fn test_find_ambiguous_prefix() {
        let mut store = empty_store();
        store.create("A", "apple", vec![]).unwrap();
        store.create("B", "bolt", vec![]).unwrap();

        // Both ids start with the same base-36 millisecond timestamp digit.
        let first = store.notes()[0].id.chars().next().unwrap().to_string();
        assert!(matches!(store.find(&first), Err(NotekeeperError::AmbiguousId(_))));
        assert!(store.find("").is_err());
    }
}
