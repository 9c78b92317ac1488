//! Tickwatch UI: a retained widget tree rendered into the engine's cell surface.
//!
//! # Quick start
//!
//! ```rust
//! use tickwatch_ui::prelude::*;
//! use tickwatch_engine::render::Surface;
//!
//! let mut scene = UiScene::new();
//! let mut surface = Surface::new(Size::new(12, 2));
//! scene.frame_widget(
//!     Column::new()
//!         .cross_align(Align::Center)
//!         .child(Label::markup("[b]12[/b]:00:00"))
//!         .child(Button::text("Start").on_click(|| println!("clicked!"))),
//!     &mut surface,
//!     &UiInput::default(),
//! );
//! assert_eq!(surface.row_text(0), "  12:00:00  ");
//! ```
//!
//! Applications implement [`Component`](app::Component) and hand it to
//! [`Application::run`], which owns the terminal loop, timers and message
//! dispatch.
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then use it anywhere an
//! [`Element`](widget::Element) is accepted.

pub mod app;
pub mod constraints;

pub use app::Application;
pub mod event;
pub mod markup;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI; import this in your component files.
pub mod prelude {
    pub use crate::app::{is_quit_key, Application, Component, Context, Emitter};
    pub use crate::constraints::{inset_rect, Constraints, Edges};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::markup::{MarkupError, Span};
    pub use crate::painter::{Border, BorderChars, Painter};
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        button::Button,
        container::Container,
        flex::{Align, Column, Row},
        text::{Label, TextAlign},
    };

    // Re-export the engine primitives everyone needs.
    pub use tickwatch_engine::coords::{Pos, Rect, Size};
    pub use tickwatch_engine::input::{Key, Modifiers};
    pub use tickwatch_engine::paint::{Color, Style};
    pub use tickwatch_engine::schedule::{Tick, TimerControl, TimerQueue};
}
