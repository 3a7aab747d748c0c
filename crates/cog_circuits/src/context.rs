//! Services a circuit entity talks to during an update

use crate::effects::FuseEffect;
use cog_session::FlagStore;
use cog_signals::{ActivationRegistry, EventQueue};

/// Borrowed collaborators for one fuse box call
pub struct CircuitContext<'a> {
    /// Session flag store
    pub flags: &'a mut dyn FlagStore,
    /// Listener registry used to fan out activations
    pub registry: &'a dyn ActivationRegistry,
    /// Effect requests
    pub effects: &'a mut EventQueue<FuseEffect>,
}

impl<'a> CircuitContext<'a> {
    /// Bundle the services
    pub fn new(
        flags: &'a mut dyn FlagStore,
        registry: &'a dyn ActivationRegistry,
        effects: &'a mut EventQueue<FuseEffect>,
    ) -> Self {
        Self {
            flags,
            registry,
            effects,
        }
    }
}

/// Player that can get its dash back
pub trait DashRefill {
    /// Restore dashes; returns true if anything was refilled
    fn refill_dash(&mut self) -> bool;
}

/// Result of a dash into a fuse box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashOutcome {
    /// The box broke; the player rebounds
    Rebound,
    /// Not a breaking dash; resolve as a plain collision
    NormalCollision,
}
