use tickwatch_engine::coords::{Pos, Rect, Size};
use tickwatch_engine::paint::{Color, Style};

use crate::constraints::Constraints;
use crate::markup::{self, Span};
use crate::painter::Painter;
use crate::widget::Widget;

/// Horizontal placement of a label inside its rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A single-line text widget.
///
/// Text wider than the allotted rect is clipped.
///
/// # Example
/// ```rust
/// use tickwatch_ui::prelude::*;
///
/// let _ = Label::markup("[b]12[/b]:00:00").align(TextAlign::Center);
/// let _ = Label::new("plain [not a tag]").color(Color::WHITE);
/// ```
pub struct Label {
    spans: Vec<Span>,
    style: Style,
    align: TextAlign,
}

impl Label {
    /// Plain text, shown verbatim.
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_spans(vec![Span::new(text, Style::new())])
    }

    /// Text with inline markup. Malformed markup is logged and shown as-is.
    pub fn markup(src: &str) -> Self {
        Self::from_spans(markup::parse_lossy(src))
    }

    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans, style: Style::new(), align: TextAlign::Left }
    }

    /// Base style; markup styles are layered on top.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style = self.style.fg(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.style = self.style.bold();
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    fn width(&self) -> u16 {
        u16::try_from(markup::spans_width(&self.spans)).unwrap_or(u16::MAX)
    }
}

impl Widget for Label {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.width(), 1))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let slack = rect.width().saturating_sub(self.width());
        let offset = match self.align {
            TextAlign::Left => 0,
            TextAlign::Center => slack / 2,
            TextAlign::Right => slack,
        };
        let origin = Pos::new(rect.x() + offset, rect.y());
        painter.spans(origin, &self.spans, self.style, rect.width() - offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickwatch_engine::render::Surface;

    fn paint(label: &Label, width: u16) -> Surface {
        let mut surface = Surface::new(Size::new(width, 1));
        let mut painter = Painter::new(&mut surface, None, false);
        label.paint(&mut painter, Rect::new(0, 0, width, 1));
        surface
    }

    #[test]
    fn measures_visible_width() {
        let label = Label::markup("[b]09[/b]:05:07");
        assert_eq!(label.measure(Constraints::unbounded()), Size::new(8, 1));
        assert_eq!(label.measure(Constraints::loose(Size::new(4, 4))), Size::new(4, 1));
    }

    #[test]
    fn alignment() {
        assert_eq!(paint(&Label::new("ab"), 6).row_text(0), "ab    ");
        assert_eq!(paint(&Label::new("ab").align(TextAlign::Center), 6).row_text(0), "  ab  ");
        assert_eq!(paint(&Label::new("ab").align(TextAlign::Right), 6).row_text(0), "    ab");
    }

    #[test]
    fn overflow_is_clipped() {
        assert_eq!(paint(&Label::new("abcdef").align(TextAlign::Center), 3).row_text(0), "abc");
    }

    #[test]
    fn base_style_under_markup() {
        let s = paint(&Label::markup("a[b]b[/b]").color(Color::WHITE), 2);
        let (a, b) = (s.get(0, 0).unwrap().style, s.get(1, 0).unwrap().style);
        assert_eq!((a.fg, a.bold), (Some(Color::WHITE), false));
        assert_eq!((b.fg, b.bold), (Some(Color::WHITE), true));
    }

    #[test]
    fn bad_markup_shows_source() {
        assert_eq!(paint(&Label::markup("[x]y"), 4).row_text(0), "[x]y");
    }
}
