// Action binding data shared by the input state machine and its listeners
use bevy::prelude::*;

/// A keyboard key or mouse button that can trigger an action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKey {
    Key(KeyCode),
    Mouse(MouseButton),
}

impl From<KeyCode> for InputKey {
    fn from(code: KeyCode) -> Self {
        InputKey::Key(code)
    }
}

impl From<MouseButton> for InputKey {
    fn from(button: MouseButton) -> Self {
        InputKey::Mouse(button)
    }
}

/// Trigger key plus optional modifier. `should_tick` bindings also emit
/// [`ActionState::Executing`] every frame while held.
///
/// Bindings are compared by value, so registering an identical binding twice is
/// a no-op while two bindings that differ only in `should_tick` are distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActionBinding {
    pub key: InputKey,
    pub modifier: Option<InputKey>,
    pub should_tick: bool,
}

impl ActionBinding {
    pub const fn new(key: InputKey) -> Self {
        Self {
            key,
            modifier: None,
            should_tick: false,
        }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(InputKey::Key(code))
    }

    pub const fn mouse(button: MouseButton) -> Self {
        Self::new(InputKey::Mouse(button))
    }

    pub const fn ticking(mut self) -> Self {
        self.should_tick = true;
        self
    }

    pub const fn with_modifier(mut self, modifier: InputKey) -> Self {
        self.modifier = Some(modifier);
        self
    }
}

/// One binding mapped to one action name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRecord {
    pub binding: ActionBinding,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionState {
    Initiated,
    Executing,
    Finished,
}

/// Notification sent to action and pointer listeners
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionInfo {
    /// Pointer position when the binding was initiated
    pub initial_position: Vec2,
    pub last_position: Vec2,
    pub state: ActionState,
}

impl ActionInfo {
    pub fn drag_delta(&self) -> Vec2 {
        self.last_position - self.initial_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builder_sets_fields() {
        let binding = ActionBinding::mouse(MouseButton::Left)
            .ticking()
            .with_modifier(KeyCode::ShiftLeft.into());
        assert_eq!(binding.key, InputKey::Mouse(MouseButton::Left));
        assert_eq!(binding.modifier, Some(InputKey::Key(KeyCode::ShiftLeft)));
        assert!(binding.should_tick);
    }

    #[test]
    fn tick_flag_distinguishes_bindings() {
        let mut set = HashSet::new();
        set.insert(ActionBinding::mouse(MouseButton::Left));
        set.insert(ActionBinding::mouse(MouseButton::Left).ticking());
        set.insert(ActionBinding::mouse(MouseButton::Left));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn drag_delta_is_last_minus_initial() {
        let info = ActionInfo {
            initial_position: Vec2::new(10.0, 20.0),
            last_position: Vec2::new(15.0, 5.0),
            state: ActionState::Executing,
        };
        assert_eq!(info.drag_delta(), Vec2::new(5.0, -15.0));
    }
}
