//! # cog_circuits - Circuit-Activated Entities
//!
//! Fuse boxes that close named circuits when dashed open:
//! - `FuseBox` state machine (Idle, Triggered, Busted) with persisted
//!   instance and circuit flags
//! - `FuseBoxData` level data and `FuseBoxConfig` tuning
//! - `FuseEffect` presentation requests queued for the host
//! - `CircuitContext` bundling the flag store, listener registry and effect queue
//!
//! ```ignore
//! let mut fuse = FuseBox::from_data(&data, offset, FuseBoxConfig::default());
//! fuse.added(&mut ctx);
//! if fuse.on_dash(&mut ctx, Some(&mut player), dash_dir) == DashOutcome::Rebound {
//!     player.rebound();
//! }
//! ```

pub mod config;
pub mod context;
pub mod data;
pub mod door;
pub mod effects;
pub mod error;
pub mod fuse_box;

pub mod prelude {
    pub use crate::config::{DisplacementPulse, FuseBoxConfig, SparkParticles};
    pub use crate::context::{CircuitContext, DashOutcome, DashRefill};
    pub use crate::data::{Facing, FuseBoxData};
    pub use crate::door::{DoorPose, FuseDoor, DOOR_OPEN_FRAME};
    pub use crate::effects::FuseEffect;
    pub use crate::error::{CircuitError, Result};
    pub use crate::fuse_box::{FuseBox, FuseState, FUSE_BOX_KIND};
}

pub use prelude::*;
