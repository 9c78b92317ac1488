use crate::coords::{Pos, Rect, Size};
use crate::paint::Style;

/// One character cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', style: Style::new() }
    }
}

/// A grid of styled cells, row-major.
///
/// Every character occupies exactly one cell; control characters are drawn as
/// spaces. Writes outside the grid are clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    size: Size,
    cells: Vec<Cell>,
}

impl Surface {
    pub fn new(size: Size) -> Self {
        Self { size, cells: vec![Cell::default(); size.area()] }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The whole surface as a rect at the origin.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Pos::zero(), self.size)
    }

    /// Resizes and blanks the surface. No-op when the size is unchanged.
    pub fn resize(&mut self, size: Size) {
        if size == self.size {
            return;
        }
        self.size = size;
        self.cells = vec![Cell::default(); size.area()];
    }

    /// Sets every cell to a blank carrying `style`.
    pub fn clear(&mut self, style: Style) {
        self.cells.fill(Cell { ch: ' ', style });
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.size.width && y < self.size.height)
            .then(|| y as usize * self.size.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Writes `ch` at `(x, y)`, layering `style` over the cell's current style.
    pub fn set(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(i) = self.index(x, y) {
            let cell = &mut self.cells[i];
            cell.ch = if ch.is_control() { ' ' } else { ch };
            cell.style = cell.style.patch(style);
        }
    }

    /// Layers `style` over every cell in `rect` without touching characters.
    pub fn fill_style(&mut self, rect: Rect, style: Style) {
        let Some(rect) = rect.intersect(self.rect()) else {
            return;
        };
        for y in rect.y()..rect.bottom() {
            for x in rect.x()..rect.right() {
                if let Some(i) = self.index(x, y) {
                    self.cells[i].style = self.cells[i].style.patch(style);
                }
            }
        }
    }

    /// Blanks `rect` and layers `style` over it.
    pub fn fill(&mut self, rect: Rect, style: Style) {
        let Some(rect) = rect.intersect(self.rect()) else {
            return;
        };
        for y in rect.y()..rect.bottom() {
            for x in rect.x()..rect.right() {
                self.set(x, y, ' ', style);
            }
        }
    }

    /// Writes `text` on one row starting at `pos`, stopping after `max_width`
    /// cells or at the right edge. Returns the number of cells written.
    pub fn put_str(&mut self, pos: Pos, text: &str, style: Style, max_width: u16) -> u16 {
        let limit = max_width.min(self.size.width.saturating_sub(pos.x));
        if pos.y >= self.size.height {
            return 0;
        }

        let mut written = 0;
        for ch in text.chars() {
            if written >= limit || ch == '\n' {
                break;
            }
            self.set(pos.x + written, pos.y, ch, style);
            written += 1;
        }
        written
    }

    /// The characters of row `y`, or an empty string past the bottom.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.size.height {
            return String::new();
        }
        let w = self.size.width as usize;
        let start = y as usize * w;
        self.cells[start..start + w].iter().map(|c| c.ch).collect()
    }

    /// The cells of row `y`.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.size.height {
            return &[];
        }
        let w = self.size.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    /// Rows whose cells differ from `previous`. Every row differs when the
    /// sizes do.
    pub fn changed_rows(&self, previous: &Surface) -> Vec<u16> {
        (0..self.size.height)
            .filter(|&y| previous.size != self.size || self.row(y) != previous.row(y))
            .collect()
    }
}
