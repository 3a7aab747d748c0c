//! Trigger collider component

use crate::body::Collide;
use crate::error::{BoxError, Result, TriggerError};
use crate::events::{ContactCallback, ContactEvent};
use crate::shape::CollisionShape;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Trigger behavior mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerMode {
    /// Fire once, then stay inert
    OneShot,
    /// Fire on every overlapping check
    Repeatable,
}

impl Default for TriggerMode {
    fn default() -> Self {
        Self::OneShot
    }
}

/// Secondary collision shape with a contact callback.
///
/// The collider lives next to its actor and shares its lifetime; the hazard's
/// update logic pushes checks into it once per tick.
pub struct TriggerCollider<A, H> {
    /// Alternate shape; the actor's primary shape is used when `None`
    pub shape: Option<CollisionShape>,
    /// Trigger mode
    pub mode: TriggerMode,
    /// Cleared permanently after a one-shot fires
    active_for_checks: bool,
    /// Total number of callback invocations
    fire_count: u32,
    /// Contact callback (not serialized)
    on_contact: Option<ContactCallback<A, H>>,
}

impl<A: Collide, H: Collide> TriggerCollider<A, H> {
    /// Create a one-shot trigger with no shape and no callback
    pub fn new() -> Self {
        Self {
            shape: None,
            mode: TriggerMode::OneShot,
            active_for_checks: true,
            fire_count: 0,
            on_contact: None,
        }
    }

    /// Set alternate shape
    pub fn with_shape(mut self, shape: CollisionShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Set mode
    pub fn with_mode(mut self, mode: TriggerMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set contact callback
    pub fn on_contact<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut A, &H) -> std::result::Result<(), BoxError> + Send + 'static,
    {
        self.on_contact = Some(Box::new(f));
        self
    }

    /// Whether checks still do anything
    pub fn active_for_checks(&self) -> bool {
        self.active_for_checks
    }

    /// Number of times the callback has been invoked
    pub fn fire_count(&self) -> u32 {
        self.fire_count
    }

    /// Whether a callback is registered
    pub fn has_callback(&self) -> bool {
        self.on_contact.is_some()
    }

    /// Test the actor against a hazard and invoke the callback on overlap.
    ///
    /// The alternate shape is installed on the actor for the overlap test and
    /// the callback, and the original shape is put back before this returns,
    /// whether the callback succeeds, fails or panics.
    pub fn check(&mut self, actor: &mut A, hazard: &H) -> Result<Option<ContactEvent>> {
        if !self.active_for_checks {
            return Ok(None);
        }
        let Some(callback) = self.on_contact.as_mut() else {
            return Ok(None);
        };

        let mut swap = ShapeSwap::install(actor, self.shape.as_ref());
        if !hazard.body().collides(swap.body()) {
            return Ok(None);
        }

        let mut event = ContactEvent::new(swap.body().id, hazard.body().id);
        self.fire_count += 1;
        if self.mode == TriggerMode::OneShot {
            self.active_for_checks = false;
            event = event.exhausting();
        }

        log::debug!(
            "Trigger on entity {} touched hazard {} (fire #{})",
            event.actor,
            event.hazard,
            self.fire_count
        );

        callback(&mut *swap, hazard).map_err(TriggerError::Callback)?;

        if event.exhausted {
            log::debug!("One-shot trigger on entity {} is now inert", event.actor);
        }
        Ok(Some(event))
    }
}

impl<A: Collide, H: Collide> Default for TriggerCollider<A, H> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Debug implementation (skip callback)
impl<A, H> std::fmt::Debug for TriggerCollider<A, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerCollider")
            .field("shape", &self.shape)
            .field("mode", &self.mode)
            .field("active_for_checks", &self.active_for_checks)
            .field("fire_count", &self.fire_count)
            .field("has_callback", &self.on_contact.is_some())
            .finish()
    }
}

/// Holds an actor with a temporarily installed shape; the shape the actor had
/// on entry is put back on drop, alternate or not
struct ShapeSwap<'a, A: Collide> {
    actor: &'a mut A,
    original: Option<CollisionShape>,
}

impl<'a, A: Collide> ShapeSwap<'a, A> {
    fn install(actor: &'a mut A, alternate: Option<&CollisionShape>) -> Self {
        let original = match alternate {
            Some(shape) => actor.body_mut().replace_shape(Some(shape.clone())),
            None => actor.body().shape.clone(),
        };
        Self { actor, original }
    }
}

impl<A: Collide> Deref for ShapeSwap<'_, A> {
    type Target = A;

    fn deref(&self) -> &A {
        &*self.actor
    }
}

impl<A: Collide> DerefMut for ShapeSwap<'_, A> {
    fn deref_mut(&mut self) -> &mut A {
        &mut *self.actor
    }
}

impl<A: Collide> Drop for ShapeSwap<'_, A> {
    fn drop(&mut self) {
        self.actor.body_mut().shape = self.original.take();
    }
}
