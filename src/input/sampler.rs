// Raw key and pointer sampling behind the action state machine
use bevy::prelude::*;

use super::binding::InputKey;

/// Per-frame view of raw key state and pointer position
pub trait InputSampler {
    /// Key went down this frame
    fn is_key_down(&self, key: InputKey) -> bool;
    /// Key is currently held, including the frame it went down
    fn is_key_held(&self, key: InputKey) -> bool;
    /// Key was released this frame
    fn is_key_up(&self, key: InputKey) -> bool;
    fn pointer_position(&self) -> Vec2;
}

/// Sampler backed by Bevy's `ButtonInput` resources
pub struct ButtonInputSampler<'a> {
    keys: &'a ButtonInput<KeyCode>,
    mouse: &'a ButtonInput<MouseButton>,
    pointer: Vec2,
}

impl<'a> ButtonInputSampler<'a> {
    pub fn new(
        keys: &'a ButtonInput<KeyCode>,
        mouse: &'a ButtonInput<MouseButton>,
        pointer: Vec2,
    ) -> Self {
        Self { keys, mouse, pointer }
    }
}

impl InputSampler for ButtonInputSampler<'_> {
    fn is_key_down(&self, key: InputKey) -> bool {
        match key {
            InputKey::Key(code) => self.keys.just_pressed(code),
            InputKey::Mouse(button) => self.mouse.just_pressed(button),
        }
    }

    fn is_key_held(&self, key: InputKey) -> bool {
        match key {
            InputKey::Key(code) => self.keys.pressed(code),
            InputKey::Mouse(button) => self.mouse.pressed(button),
        }
    }

    fn is_key_up(&self, key: InputKey) -> bool {
        match key {
            InputKey::Key(code) => self.keys.just_released(code),
            InputKey::Mouse(button) => self.mouse.just_released(button),
        }
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }
}
