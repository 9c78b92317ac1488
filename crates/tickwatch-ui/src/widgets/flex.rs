use tickwatch_engine::coords::{Pos, Rect, Size};

use crate::constraints::{inset_rect, Constraints, Edges};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

// ── Align ─────────────────────────────────────────────────────────────────

/// Cross-axis alignment inside a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Children fill the full cross-axis extent (default).
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

// ── Axis ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    fn main(self, s: Size) -> u16 {
        match self {
            Axis::Vertical => s.height,
            Axis::Horizontal => s.width,
        }
    }

    fn cross(self, s: Size) -> u16 {
        match self {
            Axis::Vertical => s.width,
            Axis::Horizontal => s.height,
        }
    }

    fn size(self, main: u16, cross: u16) -> Size {
        match self {
            Axis::Vertical => Size::new(cross, main),
            Axis::Horizontal => Size::new(main, cross),
        }
    }

    fn pos(self, main: u16, cross: u16) -> Pos {
        match self {
            Axis::Vertical => Pos::new(cross, main),
            Axis::Horizontal => Pos::new(main, cross),
        }
    }

    fn main_origin(self, r: Rect) -> u16 {
        match self {
            Axis::Vertical => r.y(),
            Axis::Horizontal => r.x(),
        }
    }

    fn cross_origin(self, r: Rect) -> u16 {
        match self {
            Axis::Vertical => r.x(),
            Axis::Horizontal => r.y(),
        }
    }
}

// ── Flex ──────────────────────────────────────────────────────────────────

/// Shared layout for [`Column`] and [`Row`].
struct Flex {
    axis: Axis,
    children: Vec<Element>,
    spacing: u16,
    padding: Edges,
    cross_align: Align,
}

impl Flex {
    fn new(axis: Axis) -> Self {
        Self { axis, children: Vec::new(), spacing: 0, padding: Edges::default(), cross_align: Align::Stretch }
    }

    fn child_constraints(&self, inner_cross: u16) -> Constraints {
        let max = self.axis.size(u16::MAX, inner_cross);
        match self.cross_align {
            // Only enforce the cross extent when it is actually bounded.
            Align::Stretch if inner_cross != u16::MAX => Constraints {
                min: self.axis.size(0, inner_cross),
                max,
            },
            _ => Constraints::loose(max),
        }
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let axis = self.axis;
        let inner = constraints.shrink(self.padding);
        let child_c = self.child_constraints(axis.cross(inner.max));

        let mut main: u16 = 0;
        let mut cross: u16 = 0;
        for (i, child) in self.children.iter().enumerate() {
            let s = child.measure(child_c);
            if i > 0 {
                main = main.saturating_add(self.spacing);
            }
            main = main.saturating_add(axis.main(s));
            cross = cross.max(axis.cross(s));
        }

        let pad_main = axis.main(Size::new(self.padding.h(), self.padding.v()));
        let pad_cross = axis.cross(Size::new(self.padding.h(), self.padding.v()));
        let max_cross = axis.cross(constraints.max);
        let cross = match self.cross_align {
            Align::Stretch if max_cross != u16::MAX => max_cross,
            _ => cross.saturating_add(pad_cross),
        };

        constraints.constrain(axis.size(main.saturating_add(pad_main), cross))
    }

    /// Child rects inside `rect`, in child order.
    fn layout(&self, rect: Rect) -> Vec<Rect> {
        let axis = self.axis;
        let inner = inset_rect(rect, self.padding);
        let inner_cross = axis.cross(inner.size);
        let child_c = self.child_constraints(inner_cross);

        let mut main = axis.main_origin(inner);
        let cross0 = axis.cross_origin(inner);
        self.children
            .iter()
            .map(|child| {
                let s = child.measure(child_c);
                let slack = inner_cross.saturating_sub(axis.cross(s));
                let cross = cross0
                    + match self.cross_align {
                        Align::Stretch | Align::Start => 0,
                        Align::Center => slack / 2,
                        Align::End => slack,
                    };
                let r = Rect::from_origin_size(axis.pos(main, cross), s);
                main = main.saturating_add(axis.main(s)).saturating_add(self.spacing);
                r
            })
            .collect()
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        for (child, r) in self.children.iter().zip(self.layout(rect)) {
            child.paint(painter, r);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        let rects = self.layout(rect);
        for (child, r) in self.children.iter_mut().zip(rects) {
            if child.on_event(event, r).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}

macro_rules! flex_widget {
    ($(#[$meta:meta])* $name:ident, $axis:expr) => {
        $(#[$meta])*
        pub struct $name(Flex);

        impl $name {
            pub fn new() -> Self {
                Self(Flex::new($axis))
            }

            /// Gap between children, in cells.
            pub fn spacing(mut self, v: u16) -> Self {
                self.0.spacing = v;
                self
            }

            pub fn padding(mut self, edges: Edges) -> Self {
                self.0.padding = edges;
                self
            }

            pub fn padding_all(mut self, v: u16) -> Self {
                self.0.padding = Edges::all(v);
                self
            }

            pub fn cross_align(mut self, align: Align) -> Self {
                self.0.cross_align = align;
                self
            }

            pub fn child(mut self, child: impl Into<Element>) -> Self {
                self.0.children.push(child.into());
                self
            }

            pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
                self.0.children.extend(iter.into_iter().map(Into::into));
                self
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Widget for $name {
            fn measure(&self, constraints: Constraints) -> Size {
                self.0.measure(constraints)
            }

            fn paint(&self, painter: &mut Painter, rect: Rect) {
                self.0.paint(painter, rect)
            }

            fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
                self.0.on_event(event, rect)
            }
        }
    };
}

flex_widget!(
    /// Vertical flex container. Children are stacked top to bottom.
    Column,
    Axis::Vertical
);

flex_widget!(
    /// Horizontal flex container. Children are placed left to right.
    Row,
    Axis::Horizontal
);

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::widgets::button::Button;
    use crate::widgets::text::Label;
    use tickwatch_engine::render::Surface;

    fn render(w: &impl Widget, size: Size) -> Surface {
        let mut surface = Surface::new(size);
        let mut painter = Painter::new(&mut surface, None, false);
        w.paint(&mut painter, Rect::from_origin_size(Pos::zero(), size));
        surface
    }

    // ── Column ────────────────────────────────────────────────────────────

    #[test]
    fn column_measures_sum_plus_spacing() {
        let col = Column::new().spacing(1).cross_align(Align::Start).child(Label::new("abc")).child(Label::new("de"));
        assert_eq!(col.measure(Constraints::unbounded()), Size::new(3, 3));
    }

    #[test]
    fn stretch_fills_bounded_width() {
        let col = Column::new().child(Label::new("a"));
        assert_eq!(col.measure(Constraints::loose(Size::new(20, 10))), Size::new(20, 1));
        // Unbounded width reports content width.
        assert_eq!(col.measure(Constraints::unbounded()), Size::new(1, 1));
    }

    #[test]
    fn column_centers_children() {
        let col = Column::new()
            .cross_align(Align::Center)
            .spacing(1)
            .child(Label::new("ab"))
            .child(Label::new("abcd"));
        let s = render(&col, Size::new(6, 3));
        assert_eq!(s.row_text(0), "  ab  ");
        assert_eq!(s.row_text(1), "      ");
        assert_eq!(s.row_text(2), " abcd ");
    }

    #[test]
    fn padding_offsets_children() {
        let col = Column::new().padding(Edges { top: 1, left: 2, ..Edges::default() }).child(Label::new("x"));
        let s = render(&col, Size::new(4, 2));
        assert_eq!(s.row_text(1), "  x ");
    }

    // ── Row ───────────────────────────────────────────────────────────────

    #[test]
    fn row_places_left_to_right() {
        let row = Row::new().spacing(2).child(Label::new("ab")).child(Label::new("c"));
        assert_eq!(row.measure(Constraints::unbounded()), Size::new(5, 1));
        assert_eq!(render(&row, Size::new(6, 1)).row_text(0), "ab  c ");
    }

    #[test]
    fn row_end_alignment() {
        let row = Row::new().cross_align(Align::End).child(Label::new("x"));
        let s = render(&row, Size::new(2, 3));
        assert_eq!(s.row_text(2), "x ");
    }

    // ── events ────────────────────────────────────────────────────────────

    #[test]
    fn clicks_reach_the_child_under_the_pointer() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let (h1, h2) = (hits.clone(), hits.clone());
        let mut row = Row::new()
            .spacing(1)
            .child(Button::text("A").on_click(move || h1.borrow_mut().push('A')))
            .child(Button::text("B").on_click(move || h2.borrow_mut().push('B')));

        let rect = Rect::new(0, 0, 10, 1);
        // "A" spans x 0..3, gap at 3, "B" spans 4..7.
        assert!(row.on_event(&UiEvent::Click { pos: Pos::new(5, 0) }, rect).is_consumed());
        assert!(!row.on_event(&UiEvent::Click { pos: Pos::new(3, 0) }, rect).is_consumed());
        assert!(row.on_event(&UiEvent::Click { pos: Pos::new(0, 0) }, rect).is_consumed());
        assert_eq!(*hits.borrow(), ['B', 'A']);
    }
}
