use tickwatch_engine::coords::{Rect, Size};
use tickwatch_engine::input::Key;
use tickwatch_engine::paint::Style;

use crate::constraints::{inset_rect, Constraints, Edges};
use crate::event::{EventResult, UiEvent};
use crate::painter::{Border, Painter};
use crate::widget::{Element, Widget};
use crate::widgets::text::{Label, TextAlign};

/// A clickable widget that wraps any child content.
///
/// Activated by a primary click inside its rect or by one of its shortcut
/// keys (pressed without Ctrl/Alt/Meta, letters match either case). Visual
/// state (hover, press) is read from `Painter` during `paint`, so the button
/// tree can be rebuilt each frame.
///
/// # Example
/// ```rust
/// use tickwatch_ui::prelude::*;
///
/// let _ = Button::text("Reset")
///     .shortcut(Key::Char('r'))
///     .style(Style::new().bg(Color::rgb(40, 44, 52)))
///     .hover_style(Style::new().bg(Color::rgb(60, 66, 78)))
///     .border(Border::new(Color::rgb(90, 96, 110)))
///     .on_click(|| println!("reset"));
/// ```
pub struct Button {
    child: Element,
    on_click: Option<Box<dyn FnMut()>>,
    shortcuts: Vec<Key>,

    style: Style,
    hover_style: Style,
    press_style: Style,
    border: Option<Border>,
    padding: Edges,
    min_width: u16,
}

impl Button {
    pub fn new(child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            on_click: None,
            shortcuts: Vec::new(),
            style: Style::new(),
            hover_style: Style::new(),
            press_style: Style::new(),
            border: None,
            padding: Edges::horizontal(1),
            min_width: 0,
        }
    }

    /// A button showing a centered plain-text label.
    pub fn text(label: impl Into<String>) -> Self {
        Self::new(Label::new(label).align(TextAlign::Center))
    }

    /// Callback invoked when the button is activated.
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Adds a key that activates the button.
    pub fn shortcut(mut self, key: Key) -> Self {
        self.shortcuts.push(key);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Layered over `style` while the pointer is over the button.
    pub fn hover_style(mut self, style: Style) -> Self {
        self.hover_style = style;
        self
    }

    /// Layered over `style` while the primary button is held on it.
    pub fn press_style(mut self, style: Style) -> Self {
        self.press_style = style;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    fn insets(&self) -> Edges {
        match self.border {
            Some(_) => self.padding.plus(Edges::all(1)),
            None => self.padding,
        }
    }

    fn matches_shortcut(&self, key: Key) -> bool {
        self.shortcuts.iter().any(|k| k.char_eq_ignore_case(key))
    }

    fn activate(&mut self) -> EventResult {
        if let Some(f) = &mut self.on_click {
            f();
        }
        EventResult::Consumed
    }
}

impl Widget for Button {
    fn measure(&self, constraints: Constraints) -> Size {
        let insets = self.insets();
        let child = self.child.measure(constraints.shrink(insets));
        let w = child.width.saturating_add(insets.h()).max(self.min_width);
        let h = child.height.saturating_add(insets.v());
        constraints.constrain(Size::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        // Pick visual state.
        let style = if painter.is_pressed(rect) {
            self.style.patch(self.hover_style).patch(self.press_style)
        } else if painter.is_hovered(rect) {
            self.style.patch(self.hover_style)
        } else {
            self.style
        };

        painter.fill(rect, style);
        if let Some(border) = &self.border {
            painter.border(rect, border);
        }
        self.child.paint(painter, inset_rect(rect, self.insets()));
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::Click { pos } if rect.contains(*pos) => self.activate(),
            UiEvent::KeyPress { key, modifiers } if !modifiers.any_command() && self.matches_shortcut(*key) => {
                self.activate()
            }
            _ => EventResult::Ignored,
        }
    }
}
