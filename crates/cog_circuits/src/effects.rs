//! Presentation requests emitted by circuit entities
//!
//! Fuse boxes never drive audio, particles or cutscenes directly. They push
//! `FuseEffect`s into a queue that the host drains after the update pass.

use crate::config::{DisplacementPulse, SparkParticles};
use cog_math::Vec2;
use cog_session::EntityId;

/// Effect requested by a fuse box
#[derive(Debug, Clone, PartialEq)]
pub enum FuseEffect {
    /// Companion door entered the scene
    DoorAdded {
        /// Owning fuse box
        owner: EntityId,
    },
    /// Companion door left the scene
    DoorRemoved {
        /// Owning fuse box
        owner: EntityId,
    },
    /// First-break cutscene should play
    StartCutscene {
        /// Fuse box that was broken
        owner: EntityId,
    },
    /// Fuse box sprite animation
    SpriteAnimation {
        /// Animated entity
        owner: EntityId,
        /// Animation name
        animation: String,
    },
    /// One-shot sound at a world position
    Sound {
        /// Sound event path
        event: String,
        /// World position
        position: Vec2,
    },
    /// Screen displacement pulse
    DisplacementBurst {
        /// World center
        center: Vec2,
        /// Pulse shape
        pulse: DisplacementPulse,
    },
    /// Spark particles
    Sparks {
        /// World origin
        origin: Vec2,
        /// Random offset range around the origin
        range: Vec2,
        /// Particle count
        count: u32,
        /// Launch direction (radians)
        direction: f32,
        /// Particle look
        particles: SparkParticles,
    },
}

impl FuseEffect {
    /// Entity the effect belongs to, when it names one
    pub fn owner(&self) -> Option<&EntityId> {
        match self {
            Self::DoorAdded { owner }
            | Self::DoorRemoved { owner }
            | Self::StartCutscene { owner }
            | Self::SpriteAnimation { owner, .. } => Some(owner),
            _ => None,
        }
    }
}
