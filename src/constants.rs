use bevy::prelude::{KeyCode, MouseButton};

use crate::input::{ActionBinding, InputKey};

// Action names
pub const SIMPLE_SELECT: &str = "SimpleSelect";
pub const DRAG_SELECT: &str = "DragSelect";
pub const RIGHT_CLICK: &str = "RightClick";
pub const CAMERA_FORWARD: &str = "CameraForward";
pub const CAMERA_BACKWARD: &str = "CameraBackward";
pub const CAMERA_LEFT: &str = "CameraLeft";
pub const CAMERA_RIGHT: &str = "CameraRight";
pub const RETURN: &str = "Return";
pub const ADD_MODIFIER: &str = "AddModifier";        // Shift: add to current selection
pub const COMPOUND_MODIFIER: &str = "CompoundModifier"; // Ctrl: compound group commands

// Default key configuration, registered at startup by InputEventsPlugin
pub const DEFAULT_ACTIONS: &[(&str, ActionBinding)] = &[
    (SIMPLE_SELECT, ActionBinding::mouse(MouseButton::Left)),
    (DRAG_SELECT, ActionBinding::mouse(MouseButton::Left).ticking()),
    (RIGHT_CLICK, ActionBinding::mouse(MouseButton::Right)),
    (CAMERA_FORWARD, ActionBinding::key(KeyCode::ArrowUp).ticking()),
    (CAMERA_BACKWARD, ActionBinding::key(KeyCode::ArrowDown).ticking()),
    (CAMERA_LEFT, ActionBinding::key(KeyCode::ArrowLeft).ticking()),
    (CAMERA_RIGHT, ActionBinding::key(KeyCode::ArrowRight).ticking()),
    (RETURN, ActionBinding::key(KeyCode::Enter)),
    (ADD_MODIFIER, ActionBinding::new(InputKey::Key(KeyCode::ShiftLeft))),
    (COMPOUND_MODIFIER, ActionBinding::new(InputKey::Key(KeyCode::ControlLeft))),
];

// Demo consumer settings
pub const BOX_SELECT_DRAG_THRESHOLD: f32 = 8.0;     // Pixels before a drag counts as box select
pub const SCREEN_EDGE_MARGIN: f32 = 12.0;           // Left-edge pixels for the edge gesture
