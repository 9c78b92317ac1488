use super::{Pos, Size};

/// Axis-aligned rectangle in cells (top-left origin).
///
/// Edges are computed with saturating arithmetic, so a rect never extends
/// past `u16::MAX`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub origin: Pos,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            origin: Pos::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Pos, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn x(self) -> u16 {
        self.origin.x
    }

    #[inline]
    pub fn y(self) -> u16 {
        self.origin.y
    }

    #[inline]
    pub fn width(self) -> u16 {
        self.size.width
    }

    #[inline]
    pub fn height(self) -> u16 {
        self.size.height
    }

    /// One past the right-most column.
    #[inline]
    pub fn right(self) -> u16 {
        self.origin.x.saturating_add(self.size.width)
    }

    /// One past the bottom row.
    #[inline]
    pub fn bottom(self) -> u16 {
        self.origin.y.saturating_add(self.size.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < self.right() && p.y < self.bottom()
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        }
    }

    /// Places a box of `size` centered in this rect, clipped to it.
    ///
    /// Odd leftovers go to the right / bottom.
    pub fn centered(self, size: Size) -> Rect {
        let size = size.min(self.size);
        Rect::new(
            self.origin.x.saturating_add((self.size.width - size.width) / 2),
            self.origin.y.saturating_add((self.size.height - size.height) / 2),
            size.width,
            size.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: u16, y: u16, w: u16, h: u16) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0, 0, 10, 10).contains(Pos::new(5, 5)));
    }

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(2, 3, 10, 10).contains(Pos::new(2, 3)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0, 0, 10, 10).contains(Pos::new(10, 10)));
        assert!(r(0, 0, 10, 10).contains(Pos::new(9, 9)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        assert!(!r(4, 4, 0, 3).contains(Pos::new(4, 4)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let i = r(0, 0, 10, 10).intersect(r(5, 5, 10, 10)).unwrap();
        assert_eq!(i, r(5, 5, 5, 5));
    }

    #[test]
    fn intersect_contained() {
        let inner = r(10, 10, 20, 20);
        assert_eq!(r(0, 0, 100, 100).intersect(inner).unwrap(), inner);
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        assert!(r(0, 0, 10, 10).intersect(r(10, 0, 10, 10)).is_none());
    }

    // ── edges ─────────────────────────────────────────────────────────────

    #[test]
    fn edges_saturate() {
        let rect = r(u16::MAX - 1, 0, 10, 1);
        assert_eq!(rect.right(), u16::MAX);
    }

    // ── centered ──────────────────────────────────────────────────────────

    #[test]
    fn centered_even_leftover() {
        assert_eq!(r(0, 0, 20, 10).centered(Size::new(10, 4)), r(5, 3, 10, 4));
    }

    #[test]
    fn centered_odd_leftover_goes_right() {
        assert_eq!(r(1, 1, 11, 5).centered(Size::new(4, 2)), r(4, 2, 4, 2));
    }

    #[test]
    fn centered_clips_oversized_box() {
        assert_eq!(r(0, 0, 8, 2).centered(Size::new(30, 30)), r(0, 0, 8, 2));
    }
}
