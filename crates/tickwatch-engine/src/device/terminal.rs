use std::io::{self, BufWriter, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture};
use crossterm::style::{Attribute, Color as TermColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::{execute, queue};

use crate::coords::Size;
use crate::paint::{Color, Style};
use crate::render::Surface;

/// Terminal session options.
#[derive(Debug, Clone)]
pub struct TerminalInit {
    /// Report mouse clicks and movement as input events.
    pub mouse_capture: bool,
    /// Draw on the alternate screen so the shell scrollback is left intact.
    pub alternate_screen: bool,
}

impl Default for TerminalInit {
    fn default() -> Self {
        Self { mouse_capture: true, alternate_screen: true }
    }
}

/// Raw-mode terminal session.
///
/// Entering puts the terminal in raw mode (and optionally the alternate
/// screen, mouse capture and focus reporting); dropping restores it, including
/// when the runtime unwinds with an error.
pub struct Terminal {
    out: BufWriter<Stdout>,
    init: TerminalInit,
    /// Last presented frame; `None` forces a full redraw.
    previous: Option<Surface>,
    active: bool,
}

impl Terminal {
    pub fn enter(init: TerminalInit) -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;

        // From here on, Drop restores whatever was switched on.
        let mut term = Self {
            out: BufWriter::new(io::stdout()),
            init,
            previous: None,
            active: true,
        };

        if term.init.alternate_screen {
            execute!(term.out, EnterAlternateScreen).context("failed to enter alternate screen")?;
        }
        execute!(term.out, Hide, Clear(ClearType::All)).context("failed to prepare screen")?;
        if term.init.mouse_capture {
            execute!(term.out, EnableMouseCapture).context("failed to enable mouse capture")?;
        }
        // Focus reporting is best effort; not every terminal understands it.
        if let Err(e) = execute!(term.out, EnableFocusChange) {
            log::debug!("focus reporting unavailable: {e}");
        }

        log::debug!("terminal session started ({:?})", term.init);
        Ok(term)
    }

    /// Current terminal size in cells.
    pub fn size(&self) -> Result<Size> {
        let (w, h) = terminal::size().context("failed to query terminal size")?;
        Ok(Size::new(w, h))
    }

    pub fn set_title(&mut self, title: &str) -> io::Result<()> {
        execute!(self.out, SetTitle(title))
    }

    /// Forgets the last frame so the next [`present`](Self::present) redraws every row.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Writes the rows of `surface` that changed since the last present.
    pub fn present(&mut self, surface: &Surface) -> io::Result<()> {
        let rows = match &self.previous {
            Some(prev) => surface.changed_rows(prev),
            None => {
                queue!(self.out, SetAttribute(Attribute::Reset), Clear(ClearType::All))?;
                (0..surface.size().height).collect()
            }
        };

        if rows.is_empty() {
            return Ok(());
        }

        for y in &rows {
            write_row(&mut self.out, surface, *y)?;
        }
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;

        log::trace!("presented {} rows", rows.len());
        match &mut self.previous {
            Some(prev) => prev.clone_from(surface),
            None => self.previous = Some(surface.clone()),
        }
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        // Attempt every step even if an earlier one fails.
        let mut result = execute!(self.out, SetAttribute(Attribute::Reset), Show);
        let _ = execute!(self.out, DisableFocusChange);
        if self.init.mouse_capture {
            result = result.and(execute!(self.out, DisableMouseCapture));
        }
        if self.init.alternate_screen {
            result = result.and(execute!(self.out, LeaveAlternateScreen));
        }
        result.and(terminal::disable_raw_mode())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::error!("failed to restore terminal: {e}");
        }
    }
}

fn write_row<W: Write>(out: &mut W, surface: &Surface, y: u16) -> io::Result<()> {
    queue!(out, MoveTo(0, y))?;

    let mut run = String::new();
    let mut run_style: Option<Style> = None;
    for cell in surface.row(y) {
        if run_style != Some(cell.style) {
            if let Some(style) = run_style {
                flush_run(out, &style, &run)?;
                run.clear();
            }
            run_style = Some(cell.style);
        }
        run.push(cell.ch);
    }
    if let Some(style) = run_style {
        flush_run(out, &style, &run)?;
    }
    Ok(())
}

fn flush_run<W: Write>(out: &mut W, style: &Style, text: &str) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(term_color(style.fg)),
        SetBackgroundColor(term_color(style.bg)),
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    queue!(out, Print(text))
}

fn term_color(color: Option<Color>) -> TermColor {
    match color {
        Some(Color { r, g, b }) => TermColor::Rgb { r, g, b },
        None => TermColor::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Pos;

    #[test]
    fn row_output_contains_text_and_styles() {
        let mut surface = Surface::new(Size::new(6, 1));
        surface.put_str(Pos::new(0, 0), "ab", Style::new().bold(), u16::MAX);
        surface.put_str(Pos::new(2, 0), "cd", Style::new().fg(Color::rgb(1, 2, 3)), u16::MAX);

        let mut buf = Vec::new();
        write_row(&mut buf, &surface, 0).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.contains("ab"));
        assert!(out.contains("cd"));
        // 24-bit foreground escape for rgb(1, 2, 3).
        assert!(out.contains("38;2;1;2;3"));
        // Bold attribute.
        assert!(out.contains("\x1b[1m"));
    }

    #[test]
    fn unset_colors_reset_to_terminal_default() {
        assert_eq!(term_color(None), TermColor::Reset);
        assert_eq!(term_color(Some(Color::rgb(9, 8, 7))), TermColor::Rgb { r: 9, g: 8, b: 7 });
    }
}
