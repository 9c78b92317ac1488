//! Terminal device.
//!
//! Owns the raw-mode / alternate-screen session and presents surfaces to it.

mod error;
mod terminal;

pub use error::SurfaceErrorAction;
pub use terminal::{Terminal, TerminalInit};
