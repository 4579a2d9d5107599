// Buffers action emissions so ECS systems can consume them
use std::sync::{Arc, Mutex, PoisonError};

use crate::events::Listener;
use super::binding::ActionInfo;

/// Cloneable mailbox for [`ActionInfo`] emissions.
///
/// Action callbacks run inside the input tick and cannot borrow the ECS world.
/// Subscribe [`ActionQueue::listener`] instead and `drain` the queue from a system.
#[derive(Clone, Debug)]
pub struct ActionQueue {
    pending: Arc<Mutex<Vec<ActionInfo>>>,
    listener: Listener<ActionInfo>,
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionQueue {
    pub fn new() -> Self {
        let pending = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&pending);
        let listener = Listener::new(move |info: &ActionInfo| {
            sink.lock().unwrap_or_else(PoisonError::into_inner).push(*info);
        });
        Self { pending, listener }
    }

    /// Handle to register with `InputActions`; the same handle every call
    pub fn listener(&self) -> &Listener<ActionInfo> {
        &self.listener
    }

    /// Take every buffered emission, oldest first
    pub fn drain(&self) -> Vec<ActionInfo> {
        std::mem::take(&mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
