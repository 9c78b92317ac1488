use super::Color;

/// Visual attributes of a cell.
///
/// `None` colors mean "leave whatever is underneath", which lets text be drawn
/// over a filled background without repeating the background color.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self { fg: None, bg: None, bold: false, italic: false, underline: false, dim: false }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Layers `top` over `self`: set colors replace, flags accumulate.
    #[must_use]
    pub fn patch(self, top: Style) -> Style {
        Style {
            fg: top.fg.or(self.fg),
            bg: top.bg.or(self.bg),
            bold: self.bold || top.bold,
            italic: self.italic || top.italic,
            underline: self.underline || top.underline,
            dim: self.dim || top.dim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_overrides_colors_and_merges_flags() {
        let base = Style::new().fg(Color::WHITE).bg(Color::BLACK).bold();
        let top = Style::new().fg(Color::rgb(1, 2, 3)).underline();
        let s = base.patch(top);
        assert_eq!(s.fg, Some(Color::rgb(1, 2, 3)));
        assert_eq!(s.bg, Some(Color::BLACK));
        assert!(s.bold && s.underline);
        assert!(!s.italic);
    }
}
