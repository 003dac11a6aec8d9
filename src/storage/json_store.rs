use tracing::{debug, error, warn};

use crate::entity::{normalize_tags, Note};
use crate::error::Result;

use super::slot::Slot;

/// Default name of the persistent slot.
pub const DEFAULT_SLOT: &str = "notes-keeper-data";

/// Whole-collection JSON persistence on top of a [`Slot`].
///
/// Neither direction ever fails from the caller's point of view: a failed
/// save is logged and the in-memory collection stays authoritative, and
/// unreadable data loads as an empty collection.
#[derive(Debug, Clone)]
pub struct NoteStorage<S: Slot> {
    slot: S,
}

impl<S: Slot> NoteStorage<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Serialize `notes` and write them to the slot.
    ///
    /// Returns whether the write went through; failures are logged only.
    pub fn save(&mut self, notes: &[Note]) -> bool {
        match self.try_save(notes) {
            Ok(()) => {
                debug!(count = notes.len(), "saved notes");
                true
            }
            Err(e) => {
                error!(error = %e, "failed to save notes");
                false
            }
        }
    }

    /// Read the slot back into notes. Missing or corrupt data yields `[]`.
    pub fn load(&self) -> Vec<Note> {
        match self.try_load() {
            Ok(notes) => notes,
            Err(e) => {
                warn!(error = %e, "failed to load notes, starting empty");
                Vec::new()
            }
        }
    }

    fn try_save(&mut self, notes: &[Note]) -> Result<()> {
        let json = serde_json::to_string(notes)?;
        self.slot.write(&json)
    }

    fn try_load(&self) -> Result<Vec<Note>> {
        match self.slot.read()? {
            Some(data) if !data.trim().is_empty() => {
                let mut notes: Vec<Note> = serde_json::from_str(&data)?;
                // Data written by other tools may carry mixed-case or repeated tags.
                for note in &mut notes {
                    note.tags = normalize_tags(std::mem::take(&mut note.tags));
                }
                Ok(notes)
            }
            _ => Ok(Vec::new()),
        }
    }
}
