use tickwatch_engine::coords::{Rect, Size};

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every UI component implements.
///
/// Trees are rebuilt every frame, so widgets hold no retained state; hover and
/// press visuals are read from the [`Painter`].
///
/// # Implementing a custom widget
///
/// ```rust
/// use tickwatch_ui::prelude::*;
///
/// struct Dot(Color);
///
/// impl Widget for Dot {
///     fn measure(&self, constraints: Constraints) -> Size {
///         constraints.constrain(Size::new(1, 1))
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.text(rect.origin, "●", Style::new().fg(self.0), rect.width());
///     }
/// }
///
/// let _ = Column::new().child(Dot(Color::WHITE));
/// ```
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic; parents may call it several times per frame.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Draw this widget into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget, the universal child type for container widgets.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints) -> Size {
        self.0.measure(constraints)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        self.0.on_event(event, rect)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
