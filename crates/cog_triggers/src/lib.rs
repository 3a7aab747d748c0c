//! Cog Triggers - Alternate Hitbox Contact Checks
//!
//! This crate lets an actor test an auxiliary collision shape against a moving
//! hazard without disturbing the actor's primary collider.
//!
//! # Features
//!
//! - Hitbox, circle and compound collision shapes
//! - Alternate shape swapped in only for the duration of one overlap test
//! - One-shot and repeatable contact callbacks
//! - Shape restoration on every exit path, including callback errors and panics
//!
//! # Example
//!
//! ```ignore
//! use cog_triggers::prelude::*;
//!
//! let mut trigger = TriggerCollider::new()
//!     .with_shape(CollisionShape::hitbox(8.0, 8.0))
//!     .on_contact(|actor: &mut Crate, wall: &SteamWall| {
//!         actor.melt();
//!         Ok(())
//!     });
//!
//! // Called by the hazard once per tick
//! if let Some(contact) = trigger.check(&mut actor, &wall)? {
//!     log::info!("{:?}", contact);
//! }
//! ```

pub mod body;
pub mod error;
pub mod events;
pub mod shape;
pub mod system;
pub mod trigger;

pub mod prelude {
    pub use crate::body::{Body, Collide};
    pub use crate::error::{Result, TriggerError};
    pub use crate::events::{ContactCallback, ContactEvent};
    pub use crate::shape::{CircleShape, CollisionShape, Hitbox};
    pub use crate::system::sweep;
    pub use crate::trigger::{TriggerCollider, TriggerMode};
}

pub use prelude::*;
