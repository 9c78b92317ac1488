//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose crossterm types.
//! Runtime code is responsible for translating terminal events into `InputEvent`s.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyPress,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
};
