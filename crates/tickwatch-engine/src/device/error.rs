use std::io;

/// High-level response after a failed frame presentation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Transient error; drop this frame and redraw everything next frame.
    SkipFrame,
    /// The terminal is gone (closed pipe, hung-up tty); terminate gracefully.
    Fatal,
}

impl SurfaceErrorAction {
    pub fn classify(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
                SurfaceErrorAction::SkipFrame
            }
            _ => SurfaceErrorAction::Fatal,
        }
    }
}
