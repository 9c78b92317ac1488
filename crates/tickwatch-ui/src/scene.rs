use tickwatch_engine::coords::{Pos, Rect};
use tickwatch_engine::input::{InputFrame, InputState, KeyPress, MouseButton};
use tickwatch_engine::render::Surface;

use crate::constraints::Constraints;
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::{Element, Widget};

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
///
/// Build it from the engine's `InputState` / `InputFrame` with
/// [`UiInput::from_engine`].
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Pointer position in cells, when known.
    pub mouse_pos: Option<Pos>,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
    /// Keys pressed this frame, in order.
    pub keys_pressed: Vec<KeyPress>,
}

impl UiInput {
    pub fn from_engine(state: &InputState, frame: &InputFrame) -> Self {
        Self {
            mouse_pos: state.pointer_pos,
            mouse_pressed: state.button_down(MouseButton::Left),
            mouse_clicked: frame.buttons_released.contains(&MouseButton::Left),
            keys_pressed: frame.keys_pressed.clone(),
        }
    }

    /// Events this input produces, in routing order: hover, click, keys.
    pub fn events(&self) -> Vec<UiEvent> {
        let mut events = Vec::with_capacity(self.keys_pressed.len() + 2);
        if let Some(pos) = self.mouse_pos {
            events.push(UiEvent::Hover { pos });
            if self.mouse_clicked {
                events.push(UiEvent::Click { pos });
            }
        }
        events.extend(
            self.keys_pressed
                .iter()
                .map(|k| UiEvent::KeyPress { key: k.key, modifiers: k.modifiers }),
        );
        events
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Drives one widget tree per frame: measure, paint into a [`Surface`], then
/// route the frame's input through the tree.
///
/// # Example
///
/// ```rust
/// use tickwatch_ui::prelude::*;
/// use tickwatch_engine::render::Surface;
///
/// let mut scene = UiScene::new();
/// let mut surface = Surface::new(Size::new(10, 1));
/// scene.frame_widget(Label::new("hello"), &mut surface, &UiInput::default());
/// assert_eq!(surface.row_text(0), "hello     ");
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    frames: u64,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames driven so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Measure and paint `root` over the whole surface without routing input.
    pub fn paint(&mut self, root: &Element, surface: &mut Surface, input: &UiInput) {
        let rect = surface.rect();
        // Pre-pass: let children compute their natural sizes. The root itself
        // always occupies the full surface, so its measured size is unused.
        let _ = root.measure(Constraints::loose(rect.size));
        let mut painter = Painter::new(surface, input.mouse_pos, input.mouse_pressed);
        root.paint(&mut painter, rect);
    }

    /// Paint `root`, then route this frame's events through it.
    ///
    /// Returns how many events a widget consumed.
    pub fn frame(&mut self, mut root: Element, surface: &mut Surface, input: &UiInput) -> usize {
        self.frames += 1;

        // ── paint ─────────────────────────────────────────────────────────
        self.paint(&root, surface, input);

        // ── events ────────────────────────────────────────────────────────
        let rect: Rect = surface.rect();
        let consumed = input
            .events()
            .iter()
            .filter(|ev| root.on_event(ev, rect).is_consumed())
            .count();

        if consumed > 0 {
            log::trace!("frame {}: {consumed} events consumed", self.frames);
        }
        consumed
    }

    /// Convenience: wrap any [`Widget`] in an [`Element`] and call [`frame`](Self::frame).
    pub fn frame_widget<W: Widget>(&mut self, root: W, surface: &mut Surface, input: &UiInput) -> usize {
        self.frame(root.into(), surface, input)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use tickwatch_engine::coords::Size;
    use tickwatch_engine::input::{InputEvent, Key, KeyState, Modifiers, MouseButtonState, PointerButtonEvent};

    use crate::widgets::button::Button;
    use crate::widgets::flex::Column;
    use crate::widgets::text::Label;

    #[test]
    fn input_from_engine_sees_release_as_click() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for st in [MouseButtonState::Pressed, MouseButtonState::Released] {
            state.apply_event(
                &mut frame,
                InputEvent::PointerButton(PointerButtonEvent {
                    button: MouseButton::Left,
                    state: st,
                    pos: Pos::new(4, 1),
                    modifiers: Modifiers::NONE,
                }),
            );
        }
        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::Char('r'), state: KeyState::Pressed, modifiers: Modifiers::NONE },
        );

        let input = UiInput::from_engine(&state, &frame);
        assert!(input.mouse_clicked && !input.mouse_pressed);
        assert_eq!(
            input.events(),
            [
                UiEvent::Hover { pos: Pos::new(4, 1) },
                UiEvent::Click { pos: Pos::new(4, 1) },
                UiEvent::KeyPress { key: Key::Char('r'), modifiers: Modifiers::NONE },
            ]
        );
    }

    #[test]
    fn no_pointer_means_no_pointer_events() {
        let input = UiInput { mouse_clicked: true, ..UiInput::default() };
        assert!(input.events().is_empty());
    }

    #[test]
    fn frame_paints_then_routes() {
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        let root = Column::new()
            .child(Label::new("title"))
            .child(Button::text("Go").shortcut(Key::Char('g')).on_click(move || c.set(c.get() + 1)));

        let mut scene = UiScene::new();
        let mut surface = Surface::new(Size::new(8, 2));
        let input = UiInput { keys_pressed: vec![KeyPress::plain(Key::Char('g'))], ..UiInput::default() };

        assert_eq!(scene.frame_widget(root, &mut surface, &input), 1);
        assert_eq!(clicks.get(), 1);
        assert_eq!(surface.row_text(0), "title   ");
        assert_eq!(surface.row_text(1), "   Go   ");
        assert_eq!(scene.frames(), 1);
    }
}
