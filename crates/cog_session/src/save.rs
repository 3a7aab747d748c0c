//! Session save/load

use crate::flags::SessionFlags;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Current session save version
pub const SAVE_VERSION: u32 = 1;

/// Save system errors
#[derive(Debug, Error)]
pub enum SaveError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    /// Version mismatch
    #[error("Version mismatch: save version {0}, current version {1}")]
    VersionMismatch(u32, u32),
    /// Slot not found
    #[error("Save slot not found: {0}")]
    SlotNotFound(String),
}

/// Save file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveFormat {
    /// JSON (human readable)
    Json,
    /// Binary (compact)
    Binary,
}

impl Default for SaveFormat {
    fn default() -> Self {
        Self::Binary
    }
}

impl SaveFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Binary => "sav",
        }
    }
}

/// Save data header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveHeader {
    /// Save format version
    pub version: u32,
    /// Save name/title
    pub name: String,
    /// Save timestamp (Unix timestamp)
    pub timestamp: u64,
    /// Level the session was in
    pub level: String,
}

impl SaveHeader {
    /// Create a new header
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: SAVE_VERSION,
            name: name.into(),
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            level: String::new(),
        }
    }

    /// Set current level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }
}

/// A saved session: header plus every written flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSave {
    /// Save header
    pub header: SaveHeader,
    /// Session flags
    pub flags: SessionFlags,
}

impl SessionSave {
    /// Create a save from the current flags
    pub fn new(name: impl Into<String>, flags: SessionFlags) -> Self {
        Self {
            header: SaveHeader::new(name),
            flags,
        }
    }

    /// Set current level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.header = self.header.with_level(level);
        self
    }
}

/// Directory of session save slots
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Base save directory
    save_dir: PathBuf,
    /// Save file format
    format: SaveFormat,
    /// Highest save version this store accepts
    version: u32,
}

impl SessionStore {
    /// Create a store rooted at a directory
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
            format: SaveFormat::Binary,
            version: SAVE_VERSION,
        }
    }

    /// Set save format
    pub fn with_format(mut self, format: SaveFormat) -> Self {
        self.format = format;
        self
    }

    /// Set version
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Base directory
    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.save_dir.join(format!("{}.{}", slot, self.format.extension()))
    }

    /// Save a session to a slot
    pub fn save(&self, slot: &str, data: &SessionSave) -> Result<(), SaveError> {
        fs::create_dir_all(&self.save_dir)?;

        let bytes = match self.format {
            SaveFormat::Json => serde_json::to_vec_pretty(data)
                .map_err(|e| SaveError::Serialization(e.to_string()))?,
            SaveFormat::Binary => bincode::serialize(data)
                .map_err(|e| SaveError::Serialization(e.to_string()))?,
        };

        let path = self.slot_path(slot);
        fs::write(&path, bytes)?;
        log::info!(
            "Saved session '{}' ({} flags) to {}",
            data.header.name,
            data.flags.len(),
            path.display()
        );
        Ok(())
    }

    /// Load a session from a slot
    pub fn load(&self, slot: &str) -> Result<SessionSave, SaveError> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Err(SaveError::SlotNotFound(slot.to_string()));
        }

        let bytes = fs::read(&path)?;
        let data: SessionSave = match self.format {
            SaveFormat::Json => serde_json::from_slice(&bytes)
                .map_err(|e| SaveError::Deserialization(e.to_string()))?,
            SaveFormat::Binary => bincode::deserialize(&bytes)
                .map_err(|e| SaveError::Deserialization(e.to_string()))?,
        };

        if data.header.version > self.version {
            return Err(SaveError::VersionMismatch(data.header.version, self.version));
        }

        log::info!("Loaded session '{}' from {}", data.header.name, path.display());
        Ok(data)
    }

    /// Delete a save slot
    pub fn delete(&self, slot: &str) -> Result<(), SaveError> {
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Check if slot exists
    pub fn exists(&self, slot: &str) -> bool {
        self.slot_path(slot).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::FlagStore;
    use crate::key::{EntityId, FlagKey};
    use std::env::temp_dir;

    fn sample_flags() -> SessionFlags {
        SessionFlags::new()
            .with(FlagKey::circuit("belt"), true)
            .with(FlagKey::instance("DashFuseBox", &EntityId::new("a-01", 4)), true)
            .with(FlagKey::named("fuse_cutscene_seen"), false)
    }

    #[test]
    fn test_json_round_trip() {
        let dir = temp_dir().join("cog_session_json_saves");
        let _ = fs::remove_dir_all(&dir);

        let store = SessionStore::new(&dir).with_format(SaveFormat::Json);
        let save = SessionSave::new("Test", sample_flags()).with_level("a-01");
        store.save("slot1", &save).unwrap();
        assert!(store.exists("slot1"));

        let loaded = store.load("slot1").unwrap();
        assert_eq!(loaded, save);
        assert!(loaded.flags.get(&FlagKey::circuit("belt")));

        store.delete("slot1").unwrap();
        assert!(!store.exists("slot1"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_json_uses_string_keys() {
        let json = serde_json::to_value(sample_flags()).unwrap();
        assert_eq!(json["flags"]["FactoryActivation:belt"], serde_json::json!(true));
        assert_eq!(json["flags"]["DashFuseBox:a-01:4"], serde_json::json!(true));
    }

    #[test]
    fn test_binary_round_trip() {
        let dir = temp_dir().join("cog_session_bin_saves");
        let _ = fs::remove_dir_all(&dir);

        let store = SessionStore::new(&dir);
        let save = SessionSave::new("Binary", sample_flags());
        store.save("quick", &save).unwrap();
        assert_eq!(store.load("quick").unwrap().flags, save.flags);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_slot() {
        let store = SessionStore::new(temp_dir().join("cog_session_missing"));
        assert!(matches!(store.load("nope"), Err(SaveError::SlotNotFound(_))));
    }

    #[test]
    fn test_newer_version_rejected() {
        let dir = temp_dir().join("cog_session_version_saves");
        let _ = fs::remove_dir_all(&dir);

        let writer = SessionStore::new(&dir).with_version(2);
        let mut save = SessionSave::new("Future", SessionFlags::new());
        save.header.version = 2;
        writer.save("slot", &save).unwrap();

        let reader = SessionStore::new(&dir);
        assert!(matches!(reader.load("slot"), Err(SaveError::VersionMismatch(2, 1))));

        let _ = fs::remove_dir_all(&dir);
    }
}
