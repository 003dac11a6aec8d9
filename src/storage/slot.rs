use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A single named location holding the serialized note collection.
pub trait Slot {
    /// Read the slot. `Ok(None)` means nothing has been saved yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the slot's contents.
    fn write(&mut self, data: &str) -> Result<()>;
}

/// Slot backed by `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: &Path, name: &str) -> Self {
        Self {
            path: dir.join(format!("{}.json", name)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Slot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&mut self, data: &str) -> Result<()> {
        // Write next to the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-process slot, used when the collection does not need to outlive the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    data: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.data.clone())
    }

    fn write(&mut self, data: &str) -> Result<()> {
        self.data = Some(data.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_slot_missing_reads_none() {
        let tmp = TempDir::new().unwrap();
        let slot = FileSlot::new(tmp.path(), "notes");
        assert!(slot.read().unwrap().is_none());
    }

    #[test]
    fn test_file_slot_write_then_read() {
        let tmp = TempDir::new().unwrap();
        let mut slot = FileSlot::new(tmp.path(), "notes");
        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
        assert!(tmp.path().join("notes.json").exists());
        assert!(!tmp.path().join("notes.json.tmp").exists());
    }

    #[test]
    fn test_file_slot_write_into_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let mut slot = FileSlot::new(&tmp.path().join("nope"), "notes");
        assert!(slot.write("[]").is_err());
    }

    #[test]
    fn test_memory_slot() {
        let mut slot = MemorySlot::new();
        assert!(slot.read().unwrap().is_none());
        slot.write("data").unwrap();
        assert_eq!(slot.data(), Some("data"));
    }
}
