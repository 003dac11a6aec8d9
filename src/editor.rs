//! Transient edit form that stages changes before they reach the store.
//!
//! The editor is either closed or editing; when editing it targets an
//! existing note (`Some(id)`) or a note that does not exist yet (`None`).
//! Nothing touches the store until a save succeeds.

use tracing::debug;

use crate::entity::{normalize_tag, Note};
use crate::error::NotekeeperError;
use crate::storage::Slot;
use crate::store::NoteStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Editing { target: Option<String> },
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    /// Commits the tag input.
    Enter,
    /// Commits the tag input.
    Comma,
    /// Save accelerator (Ctrl+Enter).
    CtrlEnter,
    /// Cancel accelerator.
    Escape,
}

/// Staged field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorForm {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub tag_input: String,
}

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The store accepted the note; the editor is closed.
    Saved(Note),
    /// Title or content was blank; the editor stays open.
    Blocked,
    /// The note being edited no longer exists; the editor is closed.
    Missing(String),
    /// There was nothing open to save.
    NotOpen,
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    TagAdded(String),
    TagIgnored,
    Save(SaveOutcome),
    Cancelled,
    Ignored,
}

#[derive(Debug, Default)]
pub struct Editor {
    state: EditorState,
    form: EditorForm,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn form(&self) -> &EditorForm {
        &self.form
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Editing { .. })
    }

    /// Open an empty form for a new note.
    pub fn open_new(&mut self) {
        self.form = EditorForm::default();
        self.state = EditorState::Editing { target: None };
    }

    /// Open a form seeded from an existing note.
    pub fn open_existing(&mut self, note: &Note) {
        self.form = EditorForm {
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
            tag_input: String::new(),
        };
        self.state = EditorState::Editing {
            target: Some(note.id.clone()),
        };
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if self.is_open() {
            self.form.title = title.into();
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        if self.is_open() {
            self.form.content = content.into();
        }
    }

    pub fn set_tag_input(&mut self, input: impl Into<String>) {
        if self.is_open() {
            self.form.tag_input = input.into();
        }
    }

    /// Stage the tag input and clear it.
    ///
    /// Returns the staged tag, or `None` if the input was blank or already
    /// staged.
    pub fn commit_tag_input(&mut self) -> Option<String> {
        if !self.is_open() {
            return None;
        }
        let input = std::mem::take(&mut self.form.tag_input);
        let tag = normalize_tag(&input)?;
        if self.form.tags.contains(&tag) {
            return None;
        }
        self.form.tags.push(tag.clone());
        Some(tag)
    }

    /// Type a comma-separated run of tags, committing at each comma and
    /// at the end.
    pub fn enter_tags(&mut self, raw: &str) {
        for part in raw.split(',') {
            self.set_tag_input(part);
            self.commit_tag_input();
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        if !self.is_open() {
            return;
        }
        let tag = tag.trim().to_lowercase();
        self.form.tags.retain(|t| *t != tag);
    }

    /// Discard staged edits and close.
    pub fn cancel(&mut self) {
        self.form = EditorForm::default();
        self.state = EditorState::Closed;
    }

    /// Commit the staged note to the store.
    pub fn save<S: Slot>(&mut self, store: &mut NoteStore<S>) -> SaveOutcome {
        let target = match &self.state {
            EditorState::Closed => return SaveOutcome::NotOpen,
            EditorState::Editing { target } => target.clone(),
        };

        let EditorForm {
            title,
            content,
            tags,
            ..
        } = &self.form;

        if title.trim().is_empty() || content.trim().is_empty() {
            debug!("save blocked: blank title or content");
            return SaveOutcome::Blocked;
        }

        let result = match &target {
            None => store.create(title, content, tags.clone()),
            Some(id) => store.update(id, title, content, tags.clone()),
        };

        let outcome = match result {
            Ok(note) => SaveOutcome::Saved(note),
            Err(NotekeeperError::NoteNotFound(id)) => SaveOutcome::Missing(id),
            // Validation already passed above, so the store has no other reason to refuse.
            Err(_) => return SaveOutcome::Blocked,
        };

        self.cancel();
        outcome
    }

    /// Dispatch a key press.
    pub fn handle_key<S: Slot>(&mut self, key: EditorKey, store: &mut NoteStore<S>) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        match key {
            EditorKey::Enter | EditorKey::Comma => match self.commit_tag_input() {
                Some(tag) => KeyOutcome::TagAdded(tag),
                None => KeyOutcome::TagIgnored,
            },
            EditorKey::CtrlEnter => KeyOutcome::Save(self.save(store)),
            EditorKey::Escape => {
                self.cancel();
                KeyOutcome::Cancelled
            }
        }
    }
}
