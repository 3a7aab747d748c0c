//! Session flag store

use crate::key::FlagKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key→bool store scoped to a play session
///
/// Absent keys read as `false`. Writes overwrite; there are no multi-key
/// transactions since every writer only touches its own keys.
pub trait FlagStore {
    /// Read a flag
    fn get(&self, key: &FlagKey) -> bool;

    /// Write a flag
    fn set(&mut self, key: FlagKey, value: bool);

    /// Whether every key is set. Vacuously true for an empty slice.
    fn all_set(&self, keys: &[FlagKey]) -> bool {
        keys.iter().all(|key| self.get(key))
    }
}

/// In-memory session flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionFlags {
    flags: HashMap<FlagKey, bool>,
}

impl SessionFlags {
    /// Create an empty flag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag (builder form)
    pub fn with(mut self, key: FlagKey, value: bool) -> Self {
        self.flags.insert(key, value);
        self
    }

    /// Whether a key has ever been written
    pub fn contains(&self, key: &FlagKey) -> bool {
        self.flags.contains_key(key)
    }

    /// Number of written keys
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no key has been written
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterate over written keys
    pub fn iter(&self) -> impl Iterator<Item = (&FlagKey, bool)> {
        self.flags.iter().map(|(key, value)| (key, *value))
    }

    /// Keys currently set to `true`
    pub fn set_keys(&self) -> impl Iterator<Item = &FlagKey> {
        self.flags.iter().filter(|(_, value)| **value).map(|(key, _)| key)
    }

    /// Capture a consistent point-in-time view
    pub fn snapshot(&self) -> FlagSnapshot {
        FlagSnapshot {
            flags: self.flags.clone(),
        }
    }
}

impl FlagStore for SessionFlags {
    fn get(&self, key: &FlagKey) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    fn set(&mut self, key: FlagKey, value: bool) {
        log::debug!("Session flag {} = {}", key, value);
        self.flags.insert(key, value);
    }
}

/// Read-only copy of the flags at one instant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlagSnapshot {
    flags: HashMap<FlagKey, bool>,
}

impl FlagSnapshot {
    /// Read a flag
    pub fn get(&self, key: &FlagKey) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Whether every key is set
    pub fn all_set(&self, keys: &[FlagKey]) -> bool {
        keys.iter().all(|key| self.get(key))
    }
}
