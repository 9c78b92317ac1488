use std::time::Instant;

use crate::input::InputEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called for every translated input event, before the frame that sees it.
    fn on_input_event(&mut self, event: &InputEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Earliest instant the app needs a frame, if any.
    ///
    /// The runtime wakes up no later than this even when no input arrives.
    fn next_deadline(&self) -> Option<Instant> {
        None
    }
}
