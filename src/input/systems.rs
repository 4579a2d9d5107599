// ECS systems driving the input action state machine
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::DEFAULT_ACTIONS;
use super::actions::InputActions;
use super::sampler::ButtonInputSampler;

/// System: Sample keyboard, mouse and cursor state and advance every action binding.
/// Keeps the last known pointer position while the cursor is outside the window.
pub fn tick_input_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut actions: ResMut<InputActions>,
) {
    let pointer = window_query
        .single()
        .ok()
        .and_then(|window| window.cursor_position())
        .unwrap_or_else(|| actions.last_pointer_position());

    let sampler = ButtonInputSampler::new(&keyboard, &mouse_button, pointer);
    actions.tick(&sampler);
}

/// Startup system: Register the default binding table
pub fn register_default_actions(mut actions: ResMut<InputActions>) {
    let mut added = 0;
    for &(name, binding) in DEFAULT_ACTIONS {
        if actions.add_action(name, binding) {
            added += 1;
        }
    }
    info!("Registered {} default input actions", added);
}
