//! # cog_signals - Activation Signals
//!
//! Lets a circuit-completion event reach every listener tagged with a matching
//! activation id:
//! - `ActivationId` / `ActivationSet` parsed from level attributes
//! - `Activator` listener components with idempotent activation
//! - `ActivationRegistry` seam with a `ListenerRegistry` implementation
//! - `EventQueue` for ordered single-type events

pub mod activator;
pub mod id;
pub mod queue;
pub mod registry;

pub use activator::*;
pub use id::*;
pub use queue::*;
pub use registry::*;

/// Prelude
pub mod prelude {
    pub use crate::activator::{ActivateCallback, Activator};
    pub use crate::id::{ActivationId, ActivationSet};
    pub use crate::queue::EventQueue;
    pub use crate::registry::{ActivationRegistry, ListenerHandle, ListenerId, ListenerRegistry};
}
