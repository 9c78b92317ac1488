use std::collections::HashSet;

use crate::coords::Size;

use super::types::{InputEvent, KeyPress, MouseButton};

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held buttons, pointer position).
/// `InputFrame` provides events and transitions for the current frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Key presses (including auto-repeat) this frame, in arrival order.
    pub keys_pressed: Vec<KeyPress>,

    /// Mouse buttons pressed this frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons released this frame.
    pub buttons_released: HashSet<MouseButton>,

    /// Last resize reported this frame.
    pub resized: Option<Size>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.resized = None;
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
