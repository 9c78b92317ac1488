use std::fmt;
use std::time::{Duration, Instant};

/// Handle to a registered timer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TimerId(pub(crate) u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// One invocation of a timer handler.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tick {
    /// Seconds since this timer last fired, or since it was registered.
    pub dt: f64,

    /// Instant the queue was advanced to.
    pub now: Instant,

    /// Number of times this timer fired before, starting at 0.
    pub count: u64,
}

/// Returned by a handler to keep or drop its timer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TimerControl {
    #[default]
    Continue,
    Cancel,
}

impl From<()> for TimerControl {
    fn from(_: ()) -> Self {
        TimerControl::Continue
    }
}

/// Boxed timer handler over state `S`.
pub type TimerFn<S> = dyn FnMut(&mut S, Tick) -> TimerControl;

/// Registration interface for periodic and one-shot callbacks.
///
/// Implementations decide when handlers actually run; callers only describe
/// the cadence.
pub trait Scheduler<S> {
    /// Calls `handler` every `interval`.
    ///
    /// A zero interval means "on every advance", i.e. once per frame when the
    /// host advances the scheduler per frame.
    fn schedule_interval(&mut self, interval: Duration, handler: Box<TimerFn<S>>) -> TimerId;

    /// Calls `handler` once, `delay` from now.
    fn schedule_once(&mut self, delay: Duration, handler: Box<TimerFn<S>>) -> TimerId;

    /// Unregisters a timer. Returns `false` if it was not registered.
    fn cancel(&mut self, id: TimerId) -> bool;

    fn is_scheduled(&self, id: TimerId) -> bool;
}
