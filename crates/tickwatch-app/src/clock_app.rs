use std::time::Duration;

use tickwatch_core::{Control, LocalClock, ResetPolicy, TimeDisplay, WallClock};
use tickwatch_engine::schedule::{Scheduler, TimerId};
use tickwatch_ui::prelude::*;

/// Screen background.
pub const BACKGROUND: Color = Color::rgb(0x10, 0x12, 0x16);

const TEXT: Color = Color::rgb(0xe6, 0xe8, 0xeb);
const HINT: Color = Color::rgb(0x5c, 0x61, 0x6a);
const BUTTON_BG: Color = Color::rgb(0x22, 0x26, 0x2e);
const BUTTON_HOVER: Color = Color::rgb(0x30, 0x36, 0x41);
const BUTTON_PRESS: Color = Color::rgb(0x3d, 0x6f, 0xb6);
const BUTTON_BORDER: Color = Color::rgb(0x4a, 0x50, 0x5c);
const RUNNING: Color = Color::rgb(0xe0, 0x6c, 0x75);

/// The clock / stopwatch screen.
///
/// The wall clock is refreshed by a 1 s timer. While the stopwatch runs, a
/// per-frame timer advances it by the real time since the previous frame; a
/// stopped stopwatch has no frame timer, so nothing asks for redraws.
pub struct ClockApp<C: WallClock = LocalClock> {
    display: TimeDisplay<C>,
    frame_timer: Option<TimerId>,
}

impl ClockApp<LocalClock> {
    pub fn new() -> Self {
        Self::with_display(TimeDisplay::new())
    }
}

impl Default for ClockApp<LocalClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: WallClock> ClockApp<C> {
    pub fn with_display(display: TimeDisplay<C>) -> Self {
        Self { display, frame_timer: None }
    }

    pub fn reset_policy(self, policy: ResetPolicy) -> Self {
        Self { display: self.display.reset_policy(policy), ..self }
    }

    pub fn display(&self) -> &TimeDisplay<C> {
        &self.display
    }
}

impl<C: WallClock + 'static> ClockApp<C> {
    /// Registers or cancels the per-frame stopwatch timer to match the
    /// running state.
    fn sync_frame_timer(&mut self, timers: &mut TimerQueue<Self>) {
        match (self.display.is_running(), self.frame_timer) {
            (true, None) => {
                let id = timers.every_frame(|app: &mut Self, tick: Tick| app.display.tick_stopwatch(tick.dt));
                self.frame_timer = Some(id);
            }
            (false, Some(id)) => {
                timers.cancel(id);
                self.frame_timer = None;
            }
            _ => {}
        }
    }
}

fn control_button(label: &str, keys: &[Key], accent: Option<Color>) -> Button {
    let base = Style::new().fg(accent.unwrap_or(TEXT)).bg(BUTTON_BG).bold();
    keys.iter().fold(
        Button::text(label)
            .min_width(11)
            .style(base)
            .hover_style(Style::new().bg(BUTTON_HOVER))
            .press_style(Style::new().bg(BUTTON_PRESS))
            .border(Border::new(BUTTON_BORDER)),
        |button, key| button.shortcut(*key),
    )
}

impl<C: WallClock + 'static> Component for ClockApp<C> {
    type Message = Control;

    fn mount(&mut self, ctx: &mut Context<'_, Self>) {
        let timers = ctx.timers();
        timers.every(Duration::from_secs(1), |app: &mut Self, _| {
            app.display.tick_wall_clock();
        });
        self.sync_frame_timer(timers);
    }

    fn view(&self, emit: &Emitter<Control>) -> Element {
        let display = &self.display;
        let start_stop_accent = display.is_running().then_some(RUNNING);

        let buttons = Row::new()
            .spacing(2)
            .child(
                control_button(display.label(Control::StartStop), &[Key::SPACE, Key::Char('s')], start_stop_accent)
                    .on_click(emit.callback(Control::StartStop)),
            )
            .child(
                control_button(display.label(Control::Reset), &[Key::Char('r')], None)
                    .on_click(emit.callback(Control::Reset)),
            );

        Container::new()
            .background(BACKGROUND)
            .centered()
            .child(
                Column::new()
                    .cross_align(Align::Center)
                    .spacing(1)
                    .child(Label::markup(display.clock_markup()).color(TEXT))
                    .child(Label::markup(&display.stopwatch_markup()).color(TEXT))
                    .child(buttons)
                    .child(Label::new("space/s start/stop · r reset · q quit").color(HINT)),
            )
            .into()
    }

    fn update(&mut self, control: Control, ctx: &mut Context<'_, Self>) {
        log::debug!("control: {control}");
        self.display.apply(control);
        self.sync_frame_timer(ctx.timers());
    }
}
