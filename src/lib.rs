pub mod cli;
pub mod config;
pub mod confirm;
pub mod editor;
pub mod entity;
pub mod error;
pub mod id;
pub mod logging;
pub mod project;
pub mod search;
pub mod storage;
pub mod store;

pub use editor::{Editor, EditorKey, EditorState, SaveOutcome};
pub use entity::{Note, TagCount};
pub use error::{NotekeeperError, Result};
pub use project::Project;
pub use search::NoteFilter;
pub use store::NoteStore;
