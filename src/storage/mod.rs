mod json_store;
mod slot;

pub use json_store::{NoteStorage, DEFAULT_SLOT};
pub use slot::{FileSlot, MemorySlot, Slot};
