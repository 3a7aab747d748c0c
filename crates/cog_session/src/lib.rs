//! Cog Session - Session-Scoped Flags
//!
//! This crate provides the key→bool flag store that outlives entities within a
//! playthrough, plus save/load for it.
//!
//! # Features
//!
//! - Typed flag keys with a fixed string form per namespace
//! - Absent flags read as `false`
//! - Point-in-time snapshots for multi-key queries
//! - JSON or binary session saves with versioning
//!
//! # Example
//!
//! ```ignore
//! use cog_session::prelude::*;
//!
//! let mut flags = SessionFlags::new();
//! flags.set(FlagKey::circuit("conveyor_a"), true);
//! assert!(flags.get(&FlagKey::circuit("conveyor_a")));
//!
//! let store = SessionStore::new("saves").with_format(SaveFormat::Json);
//! store.save("slot1", &SessionSave::new("Chapter 1", flags))?;
//! ```

pub mod flags;
pub mod key;
pub mod save;

pub mod prelude {
    pub use crate::flags::{FlagSnapshot, FlagStore, SessionFlags};
    pub use crate::key::{EntityId, FlagKey, FlagNamespace, InvalidKey, CIRCUIT_NAMESPACE};
    pub use crate::save::{SaveError, SaveFormat, SaveHeader, SessionSave, SessionStore};
}

pub use prelude::*;
