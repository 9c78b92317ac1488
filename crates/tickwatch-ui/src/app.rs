use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;

use tickwatch_engine::core::{App as EngineApp, AppControl, FrameCtx};
use tickwatch_engine::input::{InputEvent, Key, KeyPress, KeyState};
use tickwatch_engine::paint::Color;
use tickwatch_engine::schedule::TimerQueue;
use tickwatch_engine::window::{Runtime, RuntimeConfig, RuntimeCtx};

use crate::scene::{UiInput, UiScene};
use crate::widget::Element;

// ── Emitter ───────────────────────────────────────────────────────────────

/// Queue of messages raised by widget callbacks during a frame.
///
/// Cheap to clone; every clone feeds the same queue. The application drains it
/// after routing input and hands each message to [`Component::update`].
pub struct Emitter<M>(Rc<RefCell<VecDeque<M>>>);

impl<M> Clone for Emitter<M> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<M> Default for Emitter<M> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(VecDeque::new())))
    }
}

impl<M: 'static> Emitter<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, msg: M) {
        self.0.borrow_mut().push_back(msg);
    }

    /// A callback that emits a copy of `msg` each time it runs, for
    /// `Button::on_click`.
    pub fn callback(&self, msg: M) -> impl FnMut() + 'static
    where
        M: Clone,
    {
        let emitter = self.clone();
        move || emitter.emit(msg.clone())
    }

    pub fn pop(&self) -> Option<M> {
        self.0.borrow_mut().pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

// ── Component ─────────────────────────────────────────────────────────────

/// Handle given to [`Component::mount`] and [`Component::update`].
pub struct Context<'a, C: Component> {
    timers: &'a mut TimerQueue<C>,
    runtime: &'a mut RuntimeCtx,
}

impl<'a, C: Component> Context<'a, C> {
    pub fn new(timers: &'a mut TimerQueue<C>, runtime: &'a mut RuntimeCtx) -> Self {
        Self { timers, runtime }
    }

    /// The component's timers. Handlers receive the component itself.
    pub fn timers(&mut self) -> &mut TimerQueue<C> {
        self.timers
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.runtime.set_title(title);
    }

    /// Ends the application after the current frame.
    pub fn exit(&mut self) {
        self.runtime.exit();
    }
}

/// A screen: state plus a view of it.
///
/// The view is rebuilt from scratch every frame. Widget callbacks cannot touch
/// the component directly; they emit messages through the [`Emitter`], and the
/// application feeds those to [`update`](Self::update) once routing is done.
pub trait Component: Sized + 'static {
    type Message: 'static;

    /// Called once, on the first frame, before the first view.
    fn mount(&mut self, ctx: &mut Context<'_, Self>) {
        let _ = ctx;
    }

    fn view(&self, emit: &Emitter<Self::Message>) -> Element;

    fn update(&mut self, msg: Self::Message, ctx: &mut Context<'_, Self>);
}

// ── Application ───────────────────────────────────────────────────────────

/// Top-level UI application builder.
///
/// ```rust,no_run
/// use tickwatch_ui::prelude::*;
///
/// struct Hello;
///
/// impl Component for Hello {
///     type Message = ();
///     fn view(&self, _emit: &Emitter<()>) -> Element {
///         Label::new("hello").into()
///     }
///     fn update(&mut self, _msg: (), _ctx: &mut Context<'_, Self>) {}
/// }
///
/// Application::new().title("Hello").frame_rate(None).run(Hello).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Application {
    title: String,
    frame_rate: Option<u32>,
    background: Color,
    mouse: bool,
}

impl Application {
    pub fn new() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            title: runtime.title,
            frame_rate: runtime.frame_rate,
            background: Color::BLACK,
            mouse: runtime.mouse,
        }
    }

    /// Set the terminal title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Continuous redraw rate; `None` redraws only on input and timer deadlines.
    pub fn frame_rate(mut self, fps: Option<u32>) -> Self {
        self.frame_rate = fps;
        self
    }

    /// Color every frame is cleared to.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Capture the mouse for clicks and hover.
    pub fn mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }

    /// Runs `component` until a quit key is pressed or it calls
    /// [`Context::exit`]. Quit keys: `q`, `Esc`, `Ctrl+C`.
    pub fn run<C: Component>(self, component: C) -> Result<()> {
        let config = RuntimeConfig {
            title: self.title.clone(),
            frame_rate: self.frame_rate,
            mouse: self.mouse,
        };
        Runtime::run(config, UiAppState::new(self.background, component))
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

/// `q`, `Esc` or `Ctrl+C`.
pub fn is_quit_key(press: KeyPress) -> bool {
    let plain = !press.modifiers.any_command();
    press.is_ctrl('c') || (plain && matches!(press.key, Key::Char('q' | 'Q') | Key::Escape))
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Internal state that implements `tickwatch_engine::core::App`.
///
/// User code never sees this type.
struct UiAppState<C: Component> {
    background: Color,
    component: C,
    emitter: Emitter<C::Message>,
    timers: TimerQueue<C>,
    scene: UiScene,
    mounted: bool,
}

impl<C: Component> UiAppState<C> {
    fn new(background: Color, component: C) -> Self {
        Self {
            background,
            component,
            emitter: Emitter::new(),
            timers: TimerQueue::new(),
            scene: UiScene::new(),
            mounted: false,
        }
    }

    fn mount(&mut self, now: Instant, runtime: &mut RuntimeCtx) {
        // Timer delays count from the first frame, not from construction.
        self.timers = TimerQueue::starting_at(now);
        self.component.mount(&mut Context::new(&mut self.timers, runtime));
        self.mounted = true;
        log::debug!("component mounted with {} timers", self.timers.len());
    }

    /// Feeds queued messages to the component. Returns how many were handled.
    fn dispatch(&mut self, runtime: &mut RuntimeCtx) -> usize {
        let mut handled = 0;
        while let Some(msg) = self.emitter.pop() {
            self.component.update(msg, &mut Context::new(&mut self.timers, runtime));
            handled += 1;
        }
        handled
    }
}

impl<C: Component> EngineApp for UiAppState<C> {
    fn on_input_event(&mut self, event: &InputEvent) -> AppControl {
        match event {
            InputEvent::Key { key, state: KeyState::Pressed, modifiers }
                if is_quit_key(KeyPress::new(*key, *modifiers)) =>
            {
                log::info!("quit requested ({key})");
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if !self.mounted {
            self.mount(ctx.time.now, ctx.runtime);
        }

        // ── timers ────────────────────────────────────────────────────────
        self.timers.advance(ctx.time.now, &mut self.component);

        // ── layout + paint + events ───────────────────────────────────────
        let input = UiInput::from_engine(ctx.input, ctx.input_frame);
        let root = self.component.view(&self.emitter);
        let scene = &mut self.scene;
        ctx.render(self.background, |surface| {
            scene.frame(root, surface, &input);
        });

        // ── messages ──────────────────────────────────────────────────────
        // Repaint when a message changed state so the frame shows it.
        if self.dispatch(ctx.runtime) > 0 {
            let root = self.component.view(&self.emitter);
            let scene = &mut self.scene;
            ctx.render(self.background, |surface| scene.paint(&root, surface, &input));
        }

        AppControl::Continue
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }
}
