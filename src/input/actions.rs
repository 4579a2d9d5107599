// Input action state machine - turns raw key state into three-phase action events
use bevy::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::events::Listener;
use super::binding::{ActionBinding, ActionInfo, ActionRecord, ActionState};
use super::sampler::InputSampler;

type PointerPredicate = Arc<dyn Fn(&ActionInfo) -> bool + Send + Sync>;

struct ActionSubscription {
    name: String,
    listener: Listener<ActionInfo>,
}

struct MousePositionSubscription {
    predicate: PointerPredicate,
    listener: Listener<ActionInfo>,
}

/// Registry of named action bindings and their listeners.
///
/// Each call to [`InputActions::tick`] walks every binding in registration order,
/// running the Initiated, Executing and Finished checks in turn, then evaluates
/// every mouse-position listener. All emissions are synchronous.
///
/// A binding is held between its Initiated and Finished emissions; only held
/// bindings have a recorded initial pointer position. Edge cases:
/// - Executing is never emitted on the tick a binding is initiated.
/// - A press rejected by the modifier gate stays silent through its release,
///   even if the modifier is held by then.
/// - A release with no recorded position (binding re-added mid-press) still emits
///   Finished, with both positions set to the current pointer position.
/// - A release while the modifier is up emits nothing but still clears the
///   recorded position.
#[derive(Resource, Default)]
pub struct InputActions {
    records: Vec<ActionRecord>,
    initial_positions: HashMap<ActionBinding, Vec2>,
    // presses that went down while the modifier was up
    gated_presses: HashSet<ActionBinding>,
    subscriptions: Vec<ActionSubscription>,
    mouse_position_subscriptions: Vec<MousePositionSubscription>,
    last_pointer: Vec2,
}

impl InputActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `binding` to `name`. Returns false if the binding is already mapped;
    /// the existing mapping is kept.
    pub fn add_action(&mut self, name: impl Into<String>, binding: ActionBinding) -> bool {
        if self.records.iter().any(|record| record.binding == binding) {
            return false;
        }
        self.records.push(ActionRecord { binding, name: name.into() });
        true
    }

    /// Remove the mapping for this exact binding and forget any press in progress
    pub fn remove_action(&mut self, binding: &ActionBinding) -> bool {
        let Some(index) = self.records.iter().position(|record| record.binding == *binding) else {
            return false;
        };
        self.records.remove(index);
        self.initial_positions.remove(binding);
        self.gated_presses.remove(binding);
        true
    }

    /// Subscribe `listener` to every emission for `name`. A handle can only be
    /// subscribed once; re-adding it returns false and keeps the first name.
    pub fn add_action_listener(
        &mut self,
        name: impl Into<String>,
        listener: &Listener<ActionInfo>,
    ) -> bool {
        if self.has_action_listener(listener) {
            return false;
        }
        self.subscriptions.push(ActionSubscription {
            name: name.into(),
            listener: listener.clone(),
        });
        true
    }

    pub fn remove_action_listener(&mut self, listener: &Listener<ActionInfo>) -> bool {
        let key = listener.key();
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.listener.key() != key);
        self.subscriptions.len() != before
    }

    pub fn has_action_listener(&self, listener: &Listener<ActionInfo>) -> bool {
        let key = listener.key();
        self.subscriptions.iter().any(|sub| sub.listener.key() == key)
    }

    /// Call `listener` on every tick where `predicate` holds for the current
    /// pointer position. Both positions of the info carry the raw pointer and the
    /// state is always `Executing`.
    pub fn add_mouse_position_listener(
        &mut self,
        predicate: impl Fn(&ActionInfo) -> bool + Send + Sync + 'static,
        listener: &Listener<ActionInfo>,
    ) -> bool {
        if self.has_mouse_position_listener(listener) {
            return false;
        }
        self.mouse_position_subscriptions.push(MousePositionSubscription {
            predicate: Arc::new(predicate),
            listener: listener.clone(),
        });
        true
    }

    pub fn remove_mouse_position_listener(&mut self, listener: &Listener<ActionInfo>) -> bool {
        let key = listener.key();
        let before = self.mouse_position_subscriptions.len();
        self.mouse_position_subscriptions
            .retain(|sub| sub.listener.key() != key);
        self.mouse_position_subscriptions.len() != before
    }

    pub fn has_mouse_position_listener(&self, listener: &Listener<ActionInfo>) -> bool {
        let key = listener.key();
        self.mouse_position_subscriptions
            .iter()
            .any(|sub| sub.listener.key() == key)
    }

    pub fn action_name(&self, binding: &ActionBinding) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record.binding == *binding)
            .map(|record| record.name.as_str())
    }

    /// Bindings mapped to `name`, in registration order
    pub fn bindings_for<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a ActionBinding> + 'a {
        self.records
            .iter()
            .filter(move |record| record.name == name)
            .map(|record| &record.binding)
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn binding_count(&self) -> usize {
        self.records.len()
    }

    /// True between a binding's Initiated and Finished emissions
    pub fn is_held(&self, binding: &ActionBinding) -> bool {
        self.initial_positions.contains_key(binding)
    }

    pub fn last_pointer_position(&self) -> Vec2 {
        self.last_pointer
    }

    /// Advance every binding by one frame of sampled input
    pub fn tick(&mut self, sampler: &impl InputSampler) {
        let pointer = sampler.pointer_position();
        self.last_pointer = pointer;

        let Self {
            records,
            initial_positions,
            gated_presses,
            subscriptions,
            mouse_position_subscriptions,
            ..
        } = self;
        let subscriptions: &[ActionSubscription] = subscriptions;

        for record in records.iter() {
            let binding = record.binding;
            let modifier_held = binding
                .modifier
                .map_or(true, |modifier| sampler.is_key_held(modifier));

            // Initiated
            let pressed = sampler.is_key_down(binding.key);
            if pressed && !modifier_held {
                gated_presses.insert(binding);
            }
            let initiated = pressed && modifier_held;
            if initiated {
                initial_positions.insert(binding, pointer);
                broadcast(subscriptions, &record.name, ActionInfo {
                    initial_position: pointer,
                    last_position: pointer,
                    state: ActionState::Initiated,
                });
            }

            // Executing
            let held = sampler.is_key_held(binding.key);
            if !initiated && binding.should_tick && held && modifier_held {
                if let Some(&initial) = initial_positions.get(&binding) {
                    broadcast(subscriptions, &record.name, ActionInfo {
                        initial_position: initial,
                        last_position: pointer,
                        state: ActionState::Executing,
                    });
                }
            }

            // Finished
            if sampler.is_key_up(binding.key) {
                let recorded = initial_positions.remove(&binding);
                if gated_presses.remove(&binding) {
                    debug!("Action '{}' pressed before its modifier, ignoring", record.name);
                } else if modifier_held {
                    broadcast(subscriptions, &record.name, ActionInfo {
                        initial_position: recorded.unwrap_or(pointer),
                        last_position: pointer,
                        state: ActionState::Finished,
                    });
                } else if recorded.is_some() {
                    debug!(
                        "Action '{}' released without its modifier, dropping press",
                        record.name
                    );
                }
            }
        }

        let info = ActionInfo {
            initial_position: pointer,
            last_position: pointer,
            state: ActionState::Executing,
        };
        for sub in mouse_position_subscriptions.iter() {
            if (sub.predicate)(&info) {
                sub.listener.call(&info);
            }
        }
    }
}

fn broadcast(subscriptions: &[ActionSubscription], name: &str, info: ActionInfo) {
    for sub in subscriptions.iter().filter(|sub| sub.name == name) {
        sub.listener.call(&info);
    }
}
