use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::DEFAULT_SLOT;

pub const CONFIG_FILE: &str = "config.yaml";

/// Per-project settings, stored as YAML inside `.notekeeper/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the slot file holding the notes (without `.json`).
    pub slot: String,
    /// Default tracing filter, e.g. "warn" or "notekeeper=debug".
    pub log_level: String,
    /// Colour tags in terminal output. Ignored when stdout is not a TTY.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slot: DEFAULT_SLOT.to_string(),
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Read `config.yaml` from `dir`; a missing file means defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&text)?)
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(dir.join(CONFIG_FILE), yaml)?;
        Ok(())
    }
}
