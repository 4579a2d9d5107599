// Type-indexed publish/subscribe dispatcher
use bevy::prelude::*;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use super::listener::{Listener, ListenerKey};

/// Marker for payloads that can travel over the [`EventBus`].
pub trait GameEvent: Any + Send + Sync {}

/// Kind-erased adapter wrapping one typed listener
struct ErasedListener {
    key: ListenerKey,
    invoke: Box<dyn Fn(&dyn Any) + Send + Sync>,
}

/// Ordered adapters for one event kind, in registration order
struct DeliveryChain {
    kind_name: &'static str,
    adapters: Vec<ErasedListener>,
}

/// Multicast dispatcher keyed by payload type.
///
/// Listeners register for a concrete [`GameEvent`] type and only ever see payloads
/// of that exact type. Delivery is synchronous on the publishing thread, in
/// registration order. Duplicate adds and removals of unknown handles are no-ops.
#[derive(Resource, Default)]
pub struct EventBus {
    chains: HashMap<TypeId, DeliveryChain>,
    // handle -> kind it was registered under
    lookups: HashMap<ListenerKey, TypeId>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for events of type `T`. Returns false if this handle
    /// is already registered.
    pub fn add_listener<T: GameEvent>(&mut self, listener: &Listener<T>) -> bool {
        let key = listener.key();
        if self.lookups.contains_key(&key) {
            debug!("Listener {:?} already registered for {}", key, type_name::<T>());
            return false;
        }

        let typed = listener.clone();
        let adapter = ErasedListener {
            key,
            invoke: Box::new(move |payload: &dyn Any| {
                if let Some(event) = payload.downcast_ref::<T>() {
                    typed.call(event);
                }
            }),
        };

        let kind = TypeId::of::<T>();
        self.chains
            .entry(kind)
            .or_insert_with(|| DeliveryChain {
                kind_name: type_name::<T>(),
                adapters: Vec::new(),
            })
            .adapters
            .push(adapter);
        self.lookups.insert(key, kind);
        true
    }

    /// Unregister `listener`. Drops the whole chain for `T` once it is empty.
    /// Returns false if the handle was not registered.
    pub fn remove_listener<T: GameEvent>(&mut self, listener: &Listener<T>) -> bool {
        let key = listener.key();
        let Some(kind) = self.lookups.remove(&key) else {
            return false;
        };

        if let Some(chain) = self.chains.get_mut(&kind) {
            chain.adapters.retain(|adapter| adapter.key != key);
            if chain.adapters.is_empty() {
                self.chains.remove(&kind);
            }
        }
        true
    }

    pub fn has_listener<T: GameEvent>(&self, listener: &Listener<T>) -> bool {
        self.lookups.contains_key(&listener.key())
    }

    /// Drop every registration for every kind
    pub fn remove_all(&mut self) {
        self.lookups.clear();
        self.chains.clear();
    }

    /// Deliver `event` to every listener registered for `T`, returning how many
    /// were invoked. Publishing with no listeners is logged and otherwise ignored.
    pub fn publish<T: GameEvent>(&self, event: &T) -> usize {
        let Some(chain) = self.chains.get(&TypeId::of::<T>()) else {
            debug!("Event of type {} published, but no listeners were found", type_name::<T>());
            return 0;
        };

        for adapter in &chain.adapters {
            (adapter.invoke)(event);
        }
        chain.adapters.len()
    }

    pub fn listener_count<T: GameEvent>(&self) -> usize {
        self.chains
            .get(&TypeId::of::<T>())
            .map_or(0, |chain| chain.adapters.len())
    }

    /// Number of event kinds with at least one listener
    pub fn kind_count(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookups.is_empty()
    }

    /// Type names of every kind that currently has listeners
    pub fn registered_kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.chains.values().map(|chain| chain.kind_name)
    }
}
