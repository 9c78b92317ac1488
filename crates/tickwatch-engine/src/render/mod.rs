//! Cell surface.
//!
//! Widgets paint into a `Surface`; the device layer presents it to the
//! terminal. Nothing here touches the terminal, so frames can be rendered and
//! inspected in tests.

mod surface;

pub use surface::{Cell, Surface};
