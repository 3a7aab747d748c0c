//! Ordered single-type event queue

use std::collections::VecDeque;

/// FIFO channel for one event type.
///
/// Producers push during a tick; the owner drains once the tick's
/// transitions have run.
#[derive(Debug, Clone)]
pub struct EventQueue<E> {
    queue: VecDeque<E>,
}

impl<E> EventQueue<E> {
    /// Create a new queue
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Send an event
    pub fn send(&mut self, event: E) {
        self.queue.push_back(event);
    }

    /// Receive the oldest event
    pub fn receive(&mut self) -> Option<E> {
        self.queue.pop_front()
    }

    /// Drain all events in send order
    pub fn drain(&mut self) -> Vec<E> {
        self.queue.drain(..).collect()
    }

    /// Peek at pending events without consuming them
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.queue.iter()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Get pending count
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Extend<E> for EventQueue<E> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        self.queue.extend(iter);
    }
}
