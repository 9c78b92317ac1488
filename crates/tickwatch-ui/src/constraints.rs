use tickwatch_engine::coords::{Rect, Size};

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides (padding, border), in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    #[inline]
    pub const fn all(v: u16) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    #[inline]
    pub fn horizontal(v: u16) -> Self {
        Self { left: v, right: v, ..Self::default() }
    }

    #[inline]
    pub fn vertical(v: u16) -> Self {
        Self { top: v, bottom: v, ..Self::default() }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> u16 {
        self.top.saturating_add(self.bottom)
    }

    /// Edge-wise sum.
    #[inline]
    #[must_use]
    pub fn plus(self, other: Edges) -> Edges {
        Edges {
            top: self.top.saturating_add(other.top),
            right: self.right.saturating_add(other.right),
            bottom: self.bottom.saturating_add(other.bottom),
            left: self.left.saturating_add(other.left),
        }
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. Parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
/// `u16::MAX` on an axis means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    pub min: Size,
    pub max: Size,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Size) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Size) -> Self {
        Self { min: Size::zero(), max }
    }

    /// No constraint.
    #[inline]
    pub fn unbounded() -> Self {
        Self::loose(Size::new(u16::MAX, u16::MAX))
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min.width).min(self.max.width),
            size.height.max(self.min.height).min(self.max.height),
        )
    }

    /// Shrink max inward by `edges` (for padding). Min becomes zero.
    #[inline]
    #[must_use]
    pub fn shrink(self, edges: Edges) -> Self {
        Self::loose(Size::new(
            self.max.width.saturating_sub(edges.h()),
            self.max.height.saturating_sub(edges.v()),
        ))
    }
}

// ── rect helper ──────────────────────────────────────────────────────────

/// Shrink a rect by `edges` (padding/inset).
#[inline]
pub fn inset_rect(rect: Rect, edges: Edges) -> Rect {
    Rect::new(
        rect.x().saturating_add(edges.left),
        rect.y().saturating_add(edges.top),
        rect.width().saturating_sub(edges.h()),
        rect.height().saturating_sub(edges.v()),
    )
}
