//! Coordinate and geometry types shared across the surface and UI.
//!
//! Canonical space:
//! - Terminal cells, `u16` like the terminal reports them
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod size;

pub use rect::Rect;
pub use size::{Pos, Size};
