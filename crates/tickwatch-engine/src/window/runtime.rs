use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as TermMouseButton,
    MouseEvent, MouseEventKind,
};

use crate::coords::{Pos, Size};
use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{SurfaceErrorAction, Terminal, TerminalInit};
use crate::input::{
    InputEvent, InputFrame, InputState, Key, KeyState, Modifiers, MouseButton, MouseButtonState,
    PointerButtonEvent,
};
use crate::render::Surface;
use crate::time::{FrameClock, FrameTime};

/// Fastest the loop redraws for app deadlines when no frame rate is set.
const MIN_FRAME_GAP: Duration = Duration::from_millis(8);

/// Longest single wait for input; keeps the loop responsive to nothing-happens cases.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Terminal/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Continuous redraw rate. `None` redraws only on input and app deadlines.
    pub frame_rate: Option<u32>,
    /// Capture mouse clicks and movement.
    pub mouse: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tickwatch".to_string(),
            frame_rate: Some(30),
            mouse: true,
        }
    }
}

impl RuntimeConfig {
    /// Time between continuous frames; `None` when the rate is unset or zero.
    pub fn frame_interval(&self) -> Option<Duration> {
        self.frame_rate
            .filter(|&fps| fps > 0)
            .map(|fps| Duration::from_secs(1) / fps)
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.commands.push(Command::SetTitle(title.into()));
    }

    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }

    pub fn exit_requested(&self) -> bool {
        self.commands.iter().any(|c| matches!(c, Command::Exit))
    }
}

enum Command {
    SetTitle(String),
    Exit,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Takes over the terminal and drives `app` until it asks to exit.
    ///
    /// The terminal is restored on return, including when an error is returned.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: CoreApp,
    {
        let terminal = Terminal::enter(TerminalInit {
            mouse_capture: config.mouse,
            ..TerminalInit::default()
        })?;
        let mut state = RuntimeState::new(config, terminal, app)?;

        log::info!("runtime started: {:?}", state.config);
        let result = state.run_loop();
        match &result {
            Ok(()) => log::info!("runtime stopped after {} frames", state.frames),
            Err(e) => log::error!("runtime failed: {e:#}"),
        }
        result
    }
}

struct RuntimeState<A: CoreApp> {
    config: RuntimeConfig,
    terminal: Terminal,
    app: A,

    title: String,
    surface: Surface,
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
    last_frame: Option<Instant>,
    frames: u64,
    exit_requested: bool,
}

impl<A: CoreApp> RuntimeState<A> {
    fn new(config: RuntimeConfig, mut terminal: Terminal, app: A) -> Result<Self> {
        let size = terminal.size()?;
        let title = config.title.clone();
        if let Err(e) = terminal.set_title(&title) {
            log::debug!("could not set terminal title: {e}");
        }

        Ok(Self {
            config,
            terminal,
            app,
            title,
            surface: Surface::new(size),
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::new(),
            last_frame: None,
            frames: 0,
            exit_requested: false,
        })
    }

    fn run_loop(&mut self) -> Result<()> {
        while !self.exit_requested {
            let wake = next_wake(self.last_frame, self.config.frame_interval(), self.app.next_deadline());
            let timeout = poll_timeout(Instant::now(), wake);

            if event::poll(timeout).context("failed to poll terminal events")? {
                self.drain_events()?;
                if self.exit_requested {
                    break;
                }
            }

            let due = wake.is_some_and(|at| Instant::now() >= at);
            if due || !self.input_frame.is_empty() || self.last_frame.is_none() {
                self.frame()?;
            }
        }
        Ok(())
    }

    /// Reads every pending event without blocking past the first.
    fn drain_events(&mut self) -> Result<()> {
        loop {
            let raw = event::read().context("failed to read terminal event")?;
            if let Some(ev) = translate_input_event(&self.input_state, raw) {
                if matches!(ev, InputEvent::Resized(_)) {
                    self.terminal.invalidate();
                }
                if self.app.on_input_event(&ev) == AppControl::Exit {
                    self.exit_requested = true;
                    return Ok(());
                }
                self.input_state.apply_event(&mut self.input_frame, ev);
            }

            if !event::poll(Duration::ZERO).context("failed to poll terminal events")? {
                return Ok(());
            }
        }
    }

    fn frame(&mut self) -> Result<()> {
        if let Some(size) = self.input_frame.resized {
            self.surface.resize(size);
        }
        let size = self.surface.size();

        let ft: FrameTime = self.clock.tick();
        let mut runtime_ctx = RuntimeCtx::default();

        let control = {
            let mut ctx = FrameCtx {
                window: WindowCtx { size, title: &self.title },
                surface: &mut self.surface,
                input: &self.input_state,
                input_frame: &self.input_frame,
                time: ft,
                runtime: &mut runtime_ctx,
            };
            self.app.on_frame(&mut ctx)
        };

        // Clear per-frame deltas after the frame is consumed.
        self.input_frame.clear();
        self.last_frame = Some(ft.now);
        self.frames += 1;

        if let Err(e) = self.terminal.present(&self.surface) {
            match SurfaceErrorAction::classify(&e) {
                SurfaceErrorAction::SkipFrame => {
                    log::warn!("dropped frame {}: {e}", ft.frame_index);
                    self.terminal.invalidate();
                }
                SurfaceErrorAction::Fatal => {
                    return Err(e).context("failed to present frame");
                }
            }
        }

        if control == AppControl::Exit {
            runtime_ctx.exit();
        }
        self.apply_commands(runtime_ctx);
        Ok(())
    }

    fn apply_commands(&mut self, mut ctx: RuntimeCtx) {
        for cmd in ctx.commands.drain(..) {
            match cmd {
                Command::SetTitle(title) => {
                    if title != self.title {
                        if let Err(e) = self.terminal.set_title(&title) {
                            log::debug!("could not set terminal title: {e}");
                        }
                        self.title = title;
                    }
                }
                Command::Exit => self.exit_requested = true,
            }
        }
    }
}

/// When the next frame should be drawn.
///
/// With a frame rate the loop redraws continuously at that rate. Without one
/// it sleeps until the app's deadline, but never redraws faster than
/// [`MIN_FRAME_GAP`]. `None` means "only on input".
fn next_wake(
    last_frame: Option<Instant>,
    frame_interval: Option<Duration>,
    deadline: Option<Instant>,
) -> Option<Instant> {
    let Some(last) = last_frame else {
        // First frame: draw immediately.
        return Some(Instant::now());
    };

    match frame_interval {
        Some(interval) => Some(last + interval),
        None => deadline.map(|at| at.max(last + MIN_FRAME_GAP)),
    }
}

/// How long to block waiting for input before the next frame is due.
fn poll_timeout(now: Instant, wake: Option<Instant>) -> Duration {
    match wake {
        Some(at) => at.saturating_duration_since(now).min(IDLE_POLL),
        None => IDLE_POLL,
    }
}

fn translate_input_event(state: &InputState, event: Event) -> Option<InputEvent> {
    match event {
        Event::FocusGained => Some(InputEvent::Focused(true)),
        Event::FocusLost => Some(InputEvent::Focused(false)),
        Event::Resize(w, h) => Some(InputEvent::Resized(Size::new(w, h))),

        Event::Key(KeyEvent { code, modifiers, kind, .. }) => {
            let state = match kind {
                KeyEventKind::Press => KeyState::Pressed,
                KeyEventKind::Repeat => KeyState::Repeated,
                KeyEventKind::Release => KeyState::Released,
            };
            Some(InputEvent::Key {
                key: map_key(code),
                state,
                modifiers: map_modifiers(modifiers),
            })
        }

        Event::Mouse(MouseEvent { kind, column, row, modifiers }) => {
            let pos = Pos::new(column, row);
            let modifiers = map_modifiers(modifiers);
            let button_event = |button, st| {
                InputEvent::PointerButton(PointerButtonEvent {
                    button: map_mouse_button(button),
                    state: st,
                    pos,
                    modifiers,
                })
            };

            match kind {
                MouseEventKind::Down(b) => Some(button_event(b, MouseButtonState::Pressed)),
                MouseEventKind::Up(b) => Some(button_event(b, MouseButtonState::Released)),
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    (state.pointer_pos != Some(pos)).then_some(InputEvent::PointerMoved(pos))
                }
                _ => None,
            }
        }

        _ => None,
    }
}

fn map_modifiers(m: KeyModifiers) -> Modifiers {
    Modifiers {
        shift: m.contains(KeyModifiers::SHIFT),
        ctrl: m.contains(KeyModifiers::CONTROL),
        alt: m.contains(KeyModifiers::ALT),
        meta: m.contains(KeyModifiers::SUPER) || m.contains(KeyModifiers::META),
    }
}

fn map_mouse_button(b: TermMouseButton) -> MouseButton {
    match b {
        TermMouseButton::Left => MouseButton::Left,
        TermMouseButton::Right => MouseButton::Right,
        TermMouseButton::Middle => MouseButton::Middle,
    }
}

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Esc => Key::Escape,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Insert => Key::Insert,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::F(n) => Key::F(n),
        _ => Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent { code, modifiers, kind, state: KeyEventState::NONE })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE })
    }

    // ── config ────────────────────────────────────────────────────────────

    #[test]
    fn frame_interval_from_rate() {
        let cfg = RuntimeConfig { frame_rate: Some(50), ..RuntimeConfig::default() };
        assert_eq!(cfg.frame_interval(), Some(Duration::from_millis(20)));
    }

    #[test]
    fn zero_or_missing_rate_means_no_continuous_redraw() {
        for rate in [None, Some(0)] {
            let cfg = RuntimeConfig { frame_rate: rate, ..RuntimeConfig::default() };
            assert_eq!(cfg.frame_interval(), None);
        }
    }

    // ── pacing ────────────────────────────────────────────────────────────

    #[test]
    fn fixed_rate_wakes_one_interval_after_last_frame() {
        let last = Instant::now();
        let interval = Duration::from_millis(33);
        let deadline = Some(last + Duration::from_secs(5));
        assert_eq!(next_wake(Some(last), Some(interval), deadline), Some(last + interval));
    }

    #[test]
    fn without_rate_the_app_deadline_drives_frames() {
        let last = Instant::now();
        let deadline = last + Duration::from_millis(400);
        assert_eq!(next_wake(Some(last), None, Some(deadline)), Some(deadline));
        assert_eq!(next_wake(Some(last), None, None), None);
    }

    #[test]
    fn past_deadlines_are_floored_to_the_minimum_gap() {
        let last = Instant::now();
        // An every-frame timer reports a deadline that is already due.
        let wake = next_wake(Some(last), None, Some(last));
        assert_eq!(wake, Some(last + MIN_FRAME_GAP));
    }

    #[test]
    fn poll_timeout_is_bounded() {
        let now = Instant::now();
        assert_eq!(poll_timeout(now, None), IDLE_POLL);
        assert_eq!(poll_timeout(now, Some(now + Duration::from_secs(10))), IDLE_POLL);
        assert_eq!(poll_timeout(now, Some(now + Duration::from_millis(5))), Duration::from_millis(5));
        // Overdue wake-ups do not block.
        assert_eq!(poll_timeout(now + Duration::from_secs(1), Some(now)), Duration::ZERO);
    }

    // ── input translation ─────────────────────────────────────────────────

    #[test]
    fn key_press_with_ctrl() {
        let state = InputState::default();
        let ev = translate_input_event(
            &state,
            key_event(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press),
        );
        assert_eq!(
            ev,
            Some(InputEvent::Key { key: Key::Char('c'), state: KeyState::Pressed, modifiers: Modifiers::CTRL })
        );
    }

    #[test]
    fn escape_and_unknown_keys() {
        assert_eq!(map_key(KeyCode::Esc), Key::Escape);
        assert_eq!(map_key(KeyCode::CapsLock), Key::Unknown);
    }

    #[test]
    fn mouse_down_becomes_pointer_button() {
        let state = InputState::default();
        let ev = translate_input_event(&state, mouse(MouseEventKind::Down(TermMouseButton::Left), 7, 2));
        match ev {
            Some(InputEvent::PointerButton(b)) => {
                assert_eq!(b.button, MouseButton::Left);
                assert_eq!(b.state, MouseButtonState::Pressed);
                assert_eq!(b.pos, Pos::new(7, 2));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn repeated_moves_to_same_cell_are_dropped() {
        let mut state = InputState::default();
        state.pointer_pos = Some(Pos::new(1, 1));
        assert_eq!(translate_input_event(&state, mouse(MouseEventKind::Moved, 1, 1)), None);
        assert_eq!(
            translate_input_event(&state, mouse(MouseEventKind::Moved, 2, 1)),
            Some(InputEvent::PointerMoved(Pos::new(2, 1)))
        );
    }

    #[test]
    fn resize_event() {
        let state = InputState::default();
        assert_eq!(
            translate_input_event(&state, Event::Resize(80, 24)),
            Some(InputEvent::Resized(Size::new(80, 24)))
        );
    }

    #[test]
    fn scroll_is_ignored() {
        let state = InputState::default();
        assert_eq!(translate_input_event(&state, mouse(MouseEventKind::ScrollUp, 0, 0)), None);
    }

    // ── commands ──────────────────────────────────────────────────────────

    #[test]
    fn runtime_ctx_buffers_exit() {
        let mut ctx = RuntimeCtx::default();
        assert!(!ctx.exit_requested());
        ctx.set_title("x");
        ctx.exit();
        assert!(ctx.exit_requested());
        assert_eq!(ctx.commands.len(), 2);
    }
}
