use tickwatch_engine::coords::{Rect, Size};
use tickwatch_engine::paint::Color;

use crate::constraints::{inset_rect, Constraints, Edges};
use crate::event::{EventResult, UiEvent};
use crate::painter::{Border, Painter};
use crate::widget::{Element, Widget};

/// A single-child widget that applies padding, background, border and/or
/// centering.
///
/// All properties are optional; an empty `Container` is a no-op.
///
/// # Example
/// ```rust
/// use tickwatch_ui::prelude::*;
///
/// let _ = Container::new()
///     .background(Color::rgb(0x10, 0x12, 0x16))
///     .padding_all(1)
///     .centered()
///     .child(Label::new("hello"));
/// ```
pub struct Container {
    child: Option<Element>,
    padding: Edges,
    background: Option<Color>,
    border: Option<Border>,
    centered: bool,
    min_width: u16,
    min_height: u16,
}

impl Container {
    pub fn new() -> Self {
        Self {
            child: None,
            padding: Edges::default(),
            background: None,
            border: None,
            centered: false,
            min_width: 0,
            min_height: 0,
        }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn padding_all(mut self, v: u16) -> Self {
        self.padding = Edges::all(v);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Give the child its measured size, centered in the inner rect, instead
    /// of the whole inner rect.
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn min_size(mut self, width: u16, height: u16) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    fn insets(&self) -> Edges {
        match self.border {
            Some(_) => self.padding.plus(Edges::all(1)),
            None => self.padding,
        }
    }

    fn child_rect(&self, child: &Element, rect: Rect) -> Rect {
        let inner = inset_rect(rect, self.insets());
        if self.centered {
            inner.centered(child.measure(Constraints::loose(inner.size)))
        } else {
            inner
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn measure(&self, constraints: Constraints) -> Size {
        let insets = self.insets();
        let child = self
            .child
            .as_ref()
            .map(|c| c.measure(constraints.shrink(insets)))
            .unwrap_or_default();

        let w = child.width.saturating_add(insets.h()).max(self.min_width);
        let h = child.height.saturating_add(insets.v()).max(self.min_height);
        constraints.constrain(Size::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if let Some(bg) = self.background {
            painter.fill_rect(rect, bg);
        }
        if let Some(border) = &self.border {
            painter.border(rect, border);
        }
        if let Some(child) = &self.child {
            child.paint(painter, self.child_rect(child, rect));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        let Some(child) = &self.child else {
            return EventResult::Ignored;
        };
        let r = self.child_rect(child, rect);
        match &mut self.child {
            Some(child) => child.on_event(event, r),
            None => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::BorderChars;
    use crate::widgets::text::Label;
    use tickwatch_engine::render::Surface;

    fn render(c: &Container, w: u16, h: u16) -> Surface {
        let mut surface = Surface::new(Size::new(w, h));
        let mut painter = Painter::new(&mut surface, None, false);
        c.paint(&mut painter, Rect::new(0, 0, w, h));
        surface
    }

    #[test]
    fn measure_adds_padding_and_border() {
        let c = Container::new().padding_all(1).border(Border::new(Color::WHITE)).child(Label::new("ab"));
        assert_eq!(c.measure(Constraints::unbounded()), Size::new(6, 5));
    }

    #[test]
    fn empty_container_honours_min_size() {
        assert_eq!(Container::new().min_size(3, 2).measure(Constraints::unbounded()), Size::new(3, 2));
    }

    #[test]
    fn centered_child() {
        let s = render(&Container::new().centered().child(Label::new("ab")), 6, 3);
        assert_eq!(s.row_text(0), "      ");
        assert_eq!(s.row_text(1), "  ab  ");
    }

    #[test]
    fn background_fills_whole_rect() {
        let bg = Color::rgb(0x10, 0x12, 0x16);
        let s = render(&Container::new().background(bg).child(Label::new("x")), 3, 2);
        assert!((0..2).all(|y| (0..3).all(|x| s.get(x, y).unwrap().style.bg == Some(bg))));
        assert_eq!(s.row_text(0), "x  ");
    }

    #[test]
    fn border_wraps_child() {
        let c = Container::new()
            .border(Border::new(Color::WHITE).chars(BorderChars::ASCII))
            .child(Label::new("hi"));
        let s = render(&c, 4, 3);
        assert_eq!(s.row_text(0), "+--+");
        assert_eq!(s.row_text(1), "|hi|");
        assert_eq!(s.row_text(2), "+--+");
    }
}
