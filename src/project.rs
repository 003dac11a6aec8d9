//! On-disk project layout: a `.notekeeper/` directory holding the config
//! and the note slot.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{NotekeeperError, Result};
use crate::storage::{FileSlot, NoteStorage};
use crate::store::NoteStore;

pub const PROJECT_DIR: &str = ".notekeeper";

/// An opened project: its settings and the directory they came from.
#[derive(Debug, Clone)]
pub struct Project {
    dir: PathBuf,
    config: Config,
}

impl Project {
    /// Create `.notekeeper/` under `root` with a default config and an empty slot.
    pub fn init(root: &Path) -> Result<Self> {
        let dir = root.join(PROJECT_DIR);
        if dir.exists() {
            return Err(NotekeeperError::AlreadyInitialized);
        }

        fs::create_dir_all(&dir)?;
        let config = Config::default();
        config.save(&dir)?;

        let project = Self { dir, config };
        let mut storage = NoteStorage::new(project.slot());
        if !storage.save(&[]) {
            return Err(NotekeeperError::Storage(format!(
                "could not create {}",
                project.slot().path().display()
            )));
        }

        Ok(project)
    }

    /// Open the project under `root`.
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(PROJECT_DIR);
        if !dir.is_dir() {
            return Err(NotekeeperError::NotInitialized);
        }
        let config = Config::load(&dir)?;
        Ok(Self { dir, config })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn slot(&self) -> FileSlot {
        FileSlot::new(&self.dir, &self.config.slot)
    }

    /// Load the note store backed by this project's slot.
    pub fn store(&self) -> NoteStore<FileSlot> {
        NoteStore::open(NoteStorage::new(self.slot()))
    }
}

/// Find the project root by looking for `.notekeeper/` or `.git/`
/// upwards from the current directory.
pub fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_root_from(&cwd)
}

fn find_root_from(start: &Path) -> PathBuf {
    let mut current = start;
    loop {
        if current.join(PROJECT_DIR).exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return start.to_path_buf(),
        }
    }
}
