use crate::coords::Size;
use crate::input::{InputFrame, InputState};
use crate::paint::{Color, Style};
use crate::render::Surface;
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

/// Terminal metadata for the current frame.
#[derive(Debug, Copy, Clone)]
pub struct WindowCtx<'a> {
    /// Terminal size in cells.
    pub size: Size,
    pub title: &'a str,
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub window: WindowCtx<'a>,
    pub surface: &'a mut Surface,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl FrameCtx<'_> {
    /// Clears the surface to `clear` and hands it to `draw`.
    ///
    /// The runtime presents the surface after `on_frame` returns.
    pub fn render<F>(&mut self, clear: Color, draw: F)
    where
        F: FnOnce(&mut Surface),
    {
        self.surface.resize(self.window.size);
        self.surface.clear(Style::new().bg(clear));
        draw(self.surface);
    }
}
