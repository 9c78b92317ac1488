//! Tickwatch engine crate.
//!
//! This crate owns the terminal runtime pieces used by higher layers:
//! the host loop, input translation, frame timing, timers and the cell
//! surface widgets paint into.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod schedule;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
