use crate::clock::{LocalClock, WallClock};
use crate::controls::{Control, ResetPolicy};
use crate::format::{format_stopwatch, format_wall_clock, stopwatch_markup, wall_clock_markup};
use crate::stopwatch::Stopwatch;

/// Default color for the de-emphasised centiseconds in [`TimeDisplay::stopwatch_markup`].
pub const DEFAULT_DIM_COLOR: &str = "#7a7f87";

/// Clock + stopwatch state behind the screen.
///
/// Owns the [`Stopwatch`] and a [`WallClock`] source. The host calls
/// [`tick_wall_clock`](Self::tick_wall_clock) once per second and
/// [`tick_stopwatch`](Self::tick_stopwatch) once per frame with the real
/// elapsed time. The last clock string is cached so a view can be rebuilt on
/// every frame without reading the clock again.
#[derive(Debug, Clone)]
pub struct TimeDisplay<C: WallClock = LocalClock> {
    clock: C,
    clock_text: String,
    clock_markup: String,
    stopwatch: Stopwatch,
    reset_policy: ResetPolicy,
    dim_color: String,
}

impl TimeDisplay<LocalClock> {
    /// A display reading the local system clock.
    pub fn new() -> Self {
        Self::with_clock(LocalClock)
    }
}

impl Default for TimeDisplay<LocalClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: WallClock> TimeDisplay<C> {
    /// A display reading `clock`. The clock string is primed immediately.
    pub fn with_clock(clock: C) -> Self {
        let mut display = Self {
            clock,
            clock_text: String::new(),
            clock_markup: String::new(),
            stopwatch: Stopwatch::new(),
            reset_policy: ResetPolicy::default(),
            dim_color: DEFAULT_DIM_COLOR.to_string(),
        };
        display.tick_wall_clock();
        display
    }

    pub fn reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    /// Color used for the centiseconds in the markup rendering.
    pub fn dim_color(mut self, color: impl Into<String>) -> Self {
        self.dim_color = color.into();
        self
    }

    // ── wall clock ────────────────────────────────────────────────────────

    /// Reads the clock and returns `HH:MM:SS`.
    pub fn tick_wall_clock(&mut self) -> String {
        let now = self.clock.now();
        self.clock_text = format_wall_clock(now);
        self.clock_markup = wall_clock_markup(now);
        self.clock_text.clone()
    }

    /// The string produced by the most recent [`tick_wall_clock`](Self::tick_wall_clock).
    pub fn clock_text(&self) -> &str {
        &self.clock_text
    }

    /// [`clock_text`](Self::clock_text) with the hours in bold.
    pub fn clock_markup(&self) -> &str {
        &self.clock_markup
    }

    pub fn clock_source(&self) -> &C {
        &self.clock
    }

    pub fn clock_source_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    // ── stopwatch ─────────────────────────────────────────────────────────

    /// Accumulates `delta_seconds` while running. Invalid deltas are ignored.
    pub fn tick_stopwatch(&mut self, delta_seconds: f64) {
        self.stopwatch.tick(delta_seconds);
    }

    /// `MM:SS.CC` for the accumulated total.
    pub fn format_stopwatch(&self) -> String {
        format_stopwatch(self.stopwatch.elapsed())
    }

    pub fn stopwatch_markup(&self) -> String {
        stopwatch_markup(self.stopwatch.elapsed(), &self.dim_color)
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.stopwatch.elapsed()
    }

    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    // ── controls ──────────────────────────────────────────────────────────

    pub fn start_stop(&mut self) {
        self.stopwatch.start_stop();
        log::debug!(
            "stopwatch {} at {}",
            if self.is_running() { "started" } else { "stopped" },
            self.format_stopwatch()
        );
    }

    /// Stops and clears, regardless of prior state.
    pub fn reset(&mut self) {
        self.stopwatch.reset();
        log::debug!("stopwatch reset");
    }

    /// The Reset button: behaves according to the configured [`ResetPolicy`].
    pub fn press_reset(&mut self) {
        match self.reset_policy {
            ResetPolicy::StopOnly if self.stopwatch.is_running() => {
                self.stopwatch.stop();
                log::debug!("stopwatch stopped by reset at {}", self.format_stopwatch());
            }
            ResetPolicy::StopOnly | ResetPolicy::Always => self.reset(),
        }
    }

    /// Dispatches a user action.
    pub fn apply(&mut self, control: Control) {
        match control {
            Control::StartStop => self.start_stop(),
            Control::Reset => self.press_reset(),
        }
    }

    /// `"Start"` while stopped, `"Stop"` while running.
    pub fn start_stop_label(&self) -> &'static str {
        if self.is_running() { "Stop" } else { "Start" }
    }

    pub fn label(&self, control: Control) -> &'static str {
        match control {
            Control::StartStop => self.start_stop_label(),
            Control::Reset => "Reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn display() -> TimeDisplay<FixedClock> {
        TimeDisplay::with_clock(FixedClock::hms(14, 5, 9).unwrap())
    }

    // ── wall clock ────────────────────────────────────────────────────────

    #[test]
    fn clock_is_primed_on_construction() {
        let d = display();
        assert_eq!(d.clock_text(), "14:05:09");
        assert_eq!(d.clock_markup(), "[b]14[/b]:05:09");
    }

    #[test]
    fn tick_wall_clock_reads_fresh_time() {
        let mut d = display();
        d.clock_source_mut().set(chrono::NaiveTime::from_hms_opt(0, 0, 1).unwrap());
        assert_eq!(d.clock_text(), "14:05:09");
        assert_eq!(d.tick_wall_clock(), "00:00:01");
        assert_eq!(d.clock_text(), "00:00:01");
    }

    #[test]
    fn wall_clock_does_not_touch_stopwatch() {
        let mut d = display();
        d.start_stop();
        d.tick_stopwatch(2.0);
        d.tick_wall_clock();
        assert_eq!(d.elapsed_seconds(), 2.0);
        assert!(d.is_running());
    }

    // ── stopwatch ─────────────────────────────────────────────────────────

    #[test]
    fn start_then_three_ticks() {
        let mut d = display();
        d.start_stop();
        for _ in 0..3 {
            d.tick_stopwatch(0.5);
        }
        assert_eq!(d.elapsed_seconds(), 1.5);
        assert_eq!(d.format_stopwatch(), "00:01.50");
    }

    #[test]
    fn ticks_before_start_are_ignored() {
        let mut d = display();
        d.tick_stopwatch(10.0);
        assert_eq!(d.format_stopwatch(), "00:00.00");
    }

    #[test]
    fn invalid_delta_is_a_no_op() {
        let mut d = display();
        d.start_stop();
        d.tick_stopwatch(1.0);
        d.tick_stopwatch(-3.0);
        d.tick_stopwatch(f64::NAN);
        assert_eq!(d.elapsed_seconds(), 1.0);
    }

    #[test]
    fn markup_uses_dim_color() {
        let mut d = display().dim_color("#333333");
        d.start_stop();
        d.tick_stopwatch(125.33);
        assert_eq!(d.stopwatch_markup(), "02:05.[color=#333333]33[/color]");
    }

    // ── controls ──────────────────────────────────────────────────────────

    #[test]
    fn start_stop_label_follows_state() {
        let mut d = display();
        assert_eq!(d.start_stop_label(), "Start");
        d.start_stop();
        assert_eq!(d.start_stop_label(), "Stop");
        assert_eq!(d.label(Control::StartStop), "Stop");
        assert_eq!(d.label(Control::Reset), "Reset");
    }

    #[test]
    fn reset_is_unconditional() {
        let mut d = display();
        d.start_stop();
        d.tick_stopwatch(4.0);
        d.reset();
        assert!(!d.is_running());
        assert_eq!(d.elapsed_seconds(), 0.0);
    }

    #[test]
    fn reset_button_while_running_only_stops() {
        let mut d = display();
        d.apply(Control::StartStop);
        d.tick_stopwatch(4.0);
        d.apply(Control::Reset);
        assert!(!d.is_running());
        assert_eq!(d.elapsed_seconds(), 4.0);

        d.apply(Control::Reset);
        assert_eq!(d.elapsed_seconds(), 0.0);
    }

    #[test]
    fn reset_button_with_always_policy_clears() {
        let mut d = display().reset_policy(ResetPolicy::Always);
        d.apply(Control::StartStop);
        d.tick_stopwatch(4.0);
        d.apply(Control::Reset);
        assert!(!d.is_running());
        assert_eq!(d.elapsed_seconds(), 0.0);
    }

    #[test]
    fn stop_then_resume_keeps_total() {
        let mut d = display();
        d.start_stop();
        d.tick_stopwatch(1.25);
        d.start_stop();
        d.tick_stopwatch(9.0);
        d.start_stop();
        d.tick_stopwatch(0.25);
        assert_eq!(d.format_stopwatch(), "00:01.50");
    }
}
