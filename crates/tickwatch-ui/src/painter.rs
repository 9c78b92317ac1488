use tickwatch_engine::coords::{Pos, Rect};
use tickwatch_engine::paint::{Color, Style};
use tickwatch_engine::render::Surface;

use crate::markup::Span;

/// Box-drawing characters for [`Painter::border`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    pub const PLAIN: BorderChars = BorderChars {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    pub const ROUNDED: BorderChars = BorderChars {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        ..BorderChars::PLAIN
    };

    pub const ASCII: BorderChars = BorderChars {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };
}

/// A one-cell border: glyph set plus style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub chars: BorderChars,
    pub style: Style,
}

impl Border {
    pub fn new(color: Color) -> Self {
        Self { chars: BorderChars::ROUNDED, style: Style::new().fg(color) }
    }

    pub fn chars(mut self, chars: BorderChars) -> Self {
        self.chars = chars;
        self
    }
}

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's cell [`Surface`] and exposes per-frame pointer state so
/// widgets can express hover / pressed visuals directly in their paint
/// implementations.
pub struct Painter<'a> {
    pub(crate) surface: &'a mut Surface,
    /// Pointer position in cells, when known.
    pub mouse_pos: Option<Pos>,
    /// True while the primary button is held down.
    pub mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub fn new(surface: &'a mut Surface, mouse_pos: Option<Pos>, mouse_pressed: bool) -> Self {
        Self { surface, mouse_pos, mouse_pressed }
    }

    // ── input queries ─────────────────────────────────────────────────────

    /// Returns `true` if the pointer is inside `rect`.
    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.mouse_pos.is_some_and(|p| rect.contains(p))
    }

    /// Returns `true` if the primary button is held and the pointer is over `rect`.
    #[inline]
    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.mouse_pressed && self.is_hovered(rect)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Blanks `rect` and paints its background.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.surface.fill(rect, Style::new().bg(color));
    }

    /// Blanks `rect` and layers `style` over it.
    pub fn fill(&mut self, rect: Rect, style: Style) {
        self.surface.fill(rect, style);
    }

    /// Layers `style` over `rect` without touching the characters.
    pub fn style_rect(&mut self, rect: Rect, style: Style) {
        self.surface.fill_style(rect, style);
    }

    /// One line of text at `origin`, clipped to `max_width` cells.
    /// Returns the number of cells written.
    pub fn text(&mut self, origin: Pos, text: &str, style: Style, max_width: u16) -> u16 {
        self.surface.put_str(origin, text, style, max_width)
    }

    /// Styled spans laid out left to right from `origin`, each layered over
    /// `base`. Returns the number of cells written.
    pub fn spans(&mut self, origin: Pos, spans: &[Span], base: Style, max_width: u16) -> u16 {
        let mut written: u16 = 0;
        for span in spans {
            let remaining = max_width.saturating_sub(written);
            if remaining == 0 {
                break;
            }
            let at = Pos::new(origin.x.saturating_add(written), origin.y);
            written += self.surface.put_str(at, &span.text, base.patch(span.style), remaining);
        }
        written
    }

    /// A one-cell frame along the edge of `rect`. Needs at least 2×2 cells.
    pub fn border(&mut self, rect: Rect, border: &Border) {
        if rect.width() < 2 || rect.height() < 2 {
            return;
        }
        let (x0, y0) = (rect.x(), rect.y());
        let (x1, y1) = (rect.right() - 1, rect.bottom() - 1);
        let c = &border.chars;
        let style = border.style;

        for x in x0 + 1..x1 {
            self.surface.set(x, y0, c.horizontal, style);
            self.surface.set(x, y1, c.horizontal, style);
        }
        for y in y0 + 1..y1 {
            self.surface.set(x0, y, c.vertical, style);
            self.surface.set(x1, y, c.vertical, style);
        }
        self.surface.set(x0, y0, c.top_left, style);
        self.surface.set(x1, y0, c.top_right, style);
        self.surface.set(x0, y1, c.bottom_left, style);
        self.surface.set(x1, y1, c.bottom_right, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickwatch_engine::coords::Size;

    #[test]
    fn border_draws_frame() {
        let mut surface = Surface::new(Size::new(4, 3));
        let mut p = Painter::new(&mut surface, None, false);
        p.border(Rect::new(0, 0, 4, 3), &Border::new(Color::WHITE).chars(BorderChars::ASCII));
        assert_eq!(surface.row_text(0), "+--+");
        assert_eq!(surface.row_text(1), "|  |");
        assert_eq!(surface.row_text(2), "+--+");
    }

    #[test]
    fn too_small_border_is_skipped() {
        let mut surface = Surface::new(Size::new(3, 3));
        let mut p = Painter::new(&mut surface, None, false);
        p.border(Rect::new(0, 0, 1, 3), &Border::new(Color::WHITE));
        assert_eq!(surface.row_text(0), "   ");
    }

    #[test]
    fn spans_share_the_width_budget() {
        let mut surface = Surface::new(Size::new(10, 1));
        let mut p = Painter::new(&mut surface, None, false);
        let spans = [Span::new("ab", Style::new().bold()), Span::new("cdef", Style::new())];
        assert_eq!(p.spans(Pos::new(1, 0), &spans, Style::new(), 4), 4);
        assert_eq!(surface.row_text(0), " abcd     ");
        assert!(surface.get(1, 0).is_some_and(|c| c.style.bold));
        assert!(surface.get(3, 0).is_some_and(|c| !c.style.bold));
    }

    #[test]
    fn hover_and_press_need_a_pointer() {
        let mut surface = Surface::new(Size::new(4, 4));
        let rect = Rect::new(1, 1, 2, 2);
        assert!(!Painter::new(&mut surface, None, true).is_pressed(rect));
        let p = Painter::new(&mut surface, Some(Pos::new(2, 2)), true);
        assert!(p.is_hovered(rect) && p.is_pressed(rect));
    }
}
