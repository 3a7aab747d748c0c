//! Listener registry and synchronous fan-out

use crate::activator::Activator;
use crate::id::ActivationSet;
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared handle to a listener; the owning entity keeps a clone
pub type ListenerHandle = Arc<Mutex<Activator>>;

/// Registration ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Scene-wide query-and-notify service for activation listeners.
///
/// Every matching listener is notified before `notify` returns. Delivery order
/// is unspecified.
pub trait ActivationRegistry {
    /// Activate every listener whose id is in `ids`; returns how many matched
    fn notify(&self, ids: &ActivationSet) -> usize;
}

/// Registry of listener handles
pub struct ListenerRegistry {
    /// Registered listeners
    listeners: Vec<(ListenerId, ListenerHandle)>,
    /// Next listener ID
    next_id: u64,
}

impl ListenerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    /// Wrap a listener in a handle and register it
    pub fn add(&mut self, activator: Activator) -> (ListenerId, ListenerHandle) {
        let handle = Arc::new(Mutex::new(activator));
        let id = self.register(handle.clone());
        (id, handle)
    }

    /// Register an existing handle
    pub fn register(&mut self, handle: ListenerHandle) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, handle));
        id
    }

    /// Unregister; returns whether the id was registered
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Listeners whose id is in `ids`
    pub fn listeners_for(&self, ids: &ActivationSet) -> Vec<ListenerHandle> {
        self.listeners
            .iter()
            .filter(|(_, handle)| ids.contains(handle.lock().activation_id()))
            .map(|(_, handle)| handle.clone())
            .collect()
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivationRegistry for ListenerRegistry {
    fn notify(&self, ids: &ActivationSet) -> usize {
        let matching = self.listeners_for(ids);
        for handle in &matching {
            handle.lock().activate();
        }
        let notified = matching.len();
        log::debug!("Notified {} listener(s) for {} activation id(s)", notified, ids.len());
        notified
    }
}
