use std::collections::HashSet;

use crate::coords::Pos;

use super::frame::InputFrame;
use super::types::{InputEvent, KeyPress, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent};

/// Current input state for the terminal.
///
/// Holds "is down" information and current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
///
/// Terminals rarely report key releases, so no held-key set is kept.
#[derive(Debug)]
pub struct InputState {
    /// Modifiers of the most recent key or pointer event.
    pub modifiers: Modifiers,

    /// Whether the terminal is focused. Assumed `true` until told otherwise.
    pub focused: bool,

    /// Pointer position in cells, when mouse capture is on.
    pub pointer_pos: Option<Pos>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            modifiers: Modifiers::default(),
            focused: true,
            pointer_pos: None,
            buttons_down: HashSet::new(),
        }
    }
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoid stuck buttons when focus changes mid-press.
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(pos) => {
                self.pointer_pos = Some(*pos);
            }

            InputEvent::Key { key, state, modifiers } => {
                self.modifiers = *modifiers;

                if matches!(state, KeyState::Pressed | KeyState::Repeated) {
                    frame.keys_pressed.push(KeyPress::new(*key, *modifiers));
                }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, pos, modifiers }) => {
                self.pointer_pos = Some(*pos);
                self.modifiers = *modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }

            InputEvent::Resized(size) => {
                frame.resized = Some(*size);
            }
        }

        frame.push_event(ev);
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}
