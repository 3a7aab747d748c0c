//! Activation listener component

use crate::id::ActivationId;

/// Callback run when an activator is first activated
pub type ActivateCallback = Box<dyn FnMut(&ActivationId) + Send>;

/// Listener tagged with an activation id.
///
/// Activation is idempotent: the callback runs on the first `activate()` only,
/// so the order in which a fan-out reaches listeners never matters.
pub struct Activator {
    /// Id this listener responds to
    activation_id: ActivationId,
    /// Whether the listener has been activated
    activated: bool,
    /// Number of activation requests received, including repeats
    requests: u32,
    /// Callback (not serialized)
    on_activate: Option<ActivateCallback>,
}

impl Activator {
    /// Create an inactive listener
    pub fn new(activation_id: impl Into<ActivationId>) -> Self {
        Self {
            activation_id: activation_id.into(),
            activated: false,
            requests: 0,
            on_activate: None,
        }
    }

    /// Start already activated (e.g. its circuit flag was set before load)
    pub fn started(mut self, activated: bool) -> Self {
        self.activated = activated;
        self
    }

    /// Set activation callback
    pub fn on_activate<F>(mut self, f: F) -> Self
    where
        F: FnMut(&ActivationId) + Send + 'static,
    {
        self.on_activate = Some(Box::new(f));
        self
    }

    /// Id this listener responds to
    pub fn activation_id(&self) -> &ActivationId {
        &self.activation_id
    }

    /// Whether the listener has been activated
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Number of activation requests received
    pub fn requests(&self) -> u32 {
        self.requests
    }

    /// Activate; returns `true` only on the first activation
    pub fn activate(&mut self) -> bool {
        self.requests += 1;
        if self.activated {
            return false;
        }

        self.activated = true;
        log::debug!("Activator '{}' activated", self.activation_id);
        if let Some(ref mut callback) = self.on_activate {
            callback(&self.activation_id);
        }
        true
    }
}

// Manual Debug implementation (skip callback)
impl std::fmt::Debug for Activator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Activator")
            .field("activation_id", &self.activation_id)
            .field("activated", &self.activated)
            .field("requests", &self.requests)
            .finish()
    }
}
