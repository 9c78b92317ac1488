use crate::format::format_stopwatch;

/// Stopwatch accumulator.
///
/// Invariants:
/// - `elapsed` is finite and `>= 0.0`
/// - `elapsed` only grows, and only while `running`
///
/// The stopwatch has no notion of wall time. The host passes the real time
/// elapsed since the previous tick to [`tick`](Self::tick), so irregular frame
/// pacing does not skew the total.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stopwatch {
    elapsed: f64,
    running: bool,
}

impl Stopwatch {
    /// A stopped stopwatch at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total accumulated seconds.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Adds `dt` seconds while running.
    ///
    /// Negative and non-finite deltas are dropped. Returns `true` when the
    /// total changed.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !dt.is_finite() || dt < 0.0 {
            log::trace!("stopwatch: rejected tick delta {dt}");
            return false;
        }
        if !self.running {
            return false;
        }

        let next = self.elapsed + dt;
        // An overflow to infinity would break the finite invariant.
        if !next.is_finite() {
            log::warn!("stopwatch: accumulator saturated at {}", self.elapsed);
            return false;
        }

        self.elapsed = next;
        dt > 0.0
    }

    /// Toggles between running and stopped.
    pub fn start_stop(&mut self) {
        self.running = !self.running;
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stops the stopwatch and clears the total, whatever the prior state.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    /// `MM:SS.CC` rendering of the current total.
    pub fn format(&self) -> String {
        format_stopwatch(self.elapsed)
    }
}
