//! Time logic behind the **Tickwatch** clock / stopwatch screen.
//!
//! This crate has no engine or terminal dependencies: any loop that can call
//! a function once per second and once per frame can drive it.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`stopwatch`] | `Stopwatch` accumulator |
//! | [`format`] | `MM:SS.CC` / `HH:MM:SS` formatting and markup variants |
//! | [`clock`] | `WallClock` source trait, `LocalClock`, `FixedClock` |
//! | [`display`] | `TimeDisplay`, the component the UI talks to |
//! | [`controls`] | `Control`, `ResetPolicy` |
//!
//! # Quick start
//!
//! ```rust
//! use tickwatch_core::TimeDisplay;
//!
//! let mut display = TimeDisplay::new();
//! display.start_stop();
//! for _ in 0..3 {
//!     display.tick_stopwatch(0.5);
//! }
//! assert_eq!(display.format_stopwatch(), "00:01.50");
//! ```

pub mod clock;
pub mod controls;
pub mod display;
pub mod format;
pub mod stopwatch;

pub use clock::{FixedClock, LocalClock, WallClock};
pub use controls::{Control, ResetPolicy};
pub use display::TimeDisplay;
pub use stopwatch::Stopwatch;
