// RTS input layer: type-indexed event bus plus a polling action state machine
//
// Modules:
// - events: EventBus resource, GameEvent trait, Listener handles
// - input: InputActions resource, bindings, samplers and systems
// - constants: Action names and the default binding table

pub mod constants;
pub mod events;
pub mod input;

use bevy::input::InputSystem;
use bevy::prelude::*;

pub use events::{EventBus, GameEvent, Listener, ListenerKey};
pub use input::{
    ActionBinding, ActionInfo, ActionQueue, ActionRecord, ActionState, ButtonInputSampler,
    InputActions, InputKey, InputSampler,
};

/// Inserts one [`EventBus`] and one [`InputActions`] resource and ticks the
/// action state machine every frame in `PreUpdate`, after Bevy's input systems.
pub struct InputEventsPlugin {
    /// Register `constants::DEFAULT_ACTIONS` at startup
    pub register_default_actions: bool,
}

impl Default for InputEventsPlugin {
    fn default() -> Self {
        Self { register_default_actions: true }
    }
}

impl Plugin for InputEventsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EventBus>()
            .init_resource::<InputActions>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ButtonInput<MouseButton>>()
            .add_systems(PreUpdate, input::tick_input_actions.after(InputSystem));

        if self.register_default_actions {
            app.add_systems(Startup, input::register_default_actions);
        }
    }
}
