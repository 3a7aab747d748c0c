//! Contact events

use crate::error::BoxError;
use serde::{Deserialize, Serialize};

/// A firing overlap between an actor's trigger shape and a hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEvent {
    /// The actor owning the trigger
    pub actor: u64,
    /// The hazard that touched it
    pub hazard: u64,
    /// Whether this contact spent a one-shot trigger
    pub exhausted: bool,
}

impl ContactEvent {
    /// Create a contact event
    pub fn new(actor: u64, hazard: u64) -> Self {
        Self {
            actor,
            hazard,
            exhausted: false,
        }
    }

    /// Mark as the contact that exhausted its trigger
    pub fn exhausting(mut self) -> Self {
        self.exhausted = true;
        self
    }
}

/// Contact callback: receives the owning actor and the hazard.
///
/// Runs while the alternate shape is still installed on the actor.
pub type ContactCallback<A, H> = Box<dyn FnMut(&mut A, &H) -> Result<(), BoxError> + Send>;
