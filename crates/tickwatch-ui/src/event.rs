use tickwatch_engine::coords::Pos;
use tickwatch_engine::input::Key;

pub use tickwatch_engine::input::Modifiers;

/// Input events routed through the widget tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Primary mouse button pressed and released at `pos`.
    Click { pos: Pos },
    /// Pointer is over `pos` (sent every frame while the position is known).
    Hover { pos: Pos },
    /// Key pressed (or auto-repeated).
    KeyPress { key: Key, modifiers: Modifiers },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing to siblings / parents.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
