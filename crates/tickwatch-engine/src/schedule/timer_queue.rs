use std::fmt;
use std::time::{Duration, Instant};

use super::scheduler::{Scheduler, Tick, TimerControl, TimerFn, TimerId};

struct Timer<S> {
    id: TimerId,
    interval: Duration,
    repeat: bool,
    /// `None` when the deadline is past the range of `Instant`.
    next_due: Option<Instant>,
    last_fired: Instant,
    count: u64,
    handler: Box<TimerFn<S>>,
    done: bool,
}

/// Explicitly advanced timer list.
///
/// Timers fire in registration order. A timer fires at most once per
/// [`advance`](Self::advance); if the host falls behind by several periods
/// the missed periods are skipped and the next deadline is re-aligned after
/// `now`, and the handler sees the full gap in [`Tick::dt`].
///
/// # Example
///
/// ```rust
/// use std::time::{Duration, Instant};
/// use tickwatch_engine::schedule::TimerQueue;
///
/// let t0 = Instant::now();
/// let mut timers: TimerQueue<u32> = TimerQueue::starting_at(t0);
/// timers.every(Duration::from_secs(1), |seconds: &mut u32, _tick| *seconds += 1);
///
/// let mut seconds = 0;
/// timers.advance(t0 + Duration::from_millis(500), &mut seconds);
/// timers.advance(t0 + Duration::from_millis(1010), &mut seconds);
/// assert_eq!(seconds, 1);
/// ```
pub struct TimerQueue<S> {
    timers: Vec<Timer<S>>,
    next_id: u64,
    now: Instant,
}

impl<S: 'static> TimerQueue<S> {
    /// An empty queue whose notion of "now" is the current instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// An empty queue whose notion of "now" is `now`.
    ///
    /// Delays passed to registration methods are measured from the most recent
    /// advance, or from this instant before the first one.
    pub fn starting_at(now: Instant) -> Self {
        Self { timers: Vec::new(), next_id: 0, now }
    }

    /// Instant of the most recent advance.
    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    // ── registration helpers ──────────────────────────────────────────────

    /// Calls `f` every `interval`. Closures may return `()` or [`TimerControl`].
    pub fn every<F, R>(&mut self, interval: Duration, mut f: F) -> TimerId
    where
        F: FnMut(&mut S, Tick) -> R + 'static,
        R: Into<TimerControl>,
    {
        self.schedule_interval(interval, Box::new(move |s: &mut S, t: Tick| f(s, t).into()))
    }

    /// Calls `f` on every advance.
    pub fn every_frame<F, R>(&mut self, f: F) -> TimerId
    where
        F: FnMut(&mut S, Tick) -> R + 'static,
        R: Into<TimerControl>,
    {
        self.every(Duration::ZERO, f)
    }

    /// Calls `f` once after `delay`.
    pub fn once<F>(&mut self, delay: Duration, f: F) -> TimerId
    where
        F: FnOnce(&mut S, Tick) + 'static,
    {
        let mut f = Some(f);
        self.schedule_once(
            delay,
            Box::new(move |s: &mut S, t: Tick| {
                if let Some(f) = f.take() {
                    f(s, t);
                }
                TimerControl::Cancel
            }),
        )
    }

    // ── driving ───────────────────────────────────────────────────────────

    /// Fires every timer due at `now` and returns how many fired.
    ///
    /// `now` earlier than the previous advance is treated as the previous
    /// advance; time never runs backwards for handlers.
    pub fn advance(&mut self, now: Instant, state: &mut S) -> usize {
        let now = now.max(self.now);
        self.now = now;

        let mut fired = 0;
        for timer in self.timers.iter_mut() {
            let due = matches!(timer.next_due, Some(at) if at <= now);
            if !due || timer.done {
                continue;
            }

            let tick = Tick {
                dt: now.saturating_duration_since(timer.last_fired).as_secs_f64(),
                now,
                count: timer.count,
            };
            timer.last_fired = now;
            timer.count += 1;
            fired += 1;

            let control = (timer.handler)(state, tick);
            if !timer.repeat || control == TimerControl::Cancel {
                log::trace!("{} finished after {} ticks", timer.id, timer.count);
                timer.done = true;
                continue;
            }

            timer.next_due = realign(timer.next_due, timer.interval, now);
        }

        self.timers.retain(|t| !t.done);
        fired
    }

    /// Earliest instant at which some timer becomes due.
    ///
    /// Per-frame timers report the last advance, i.e. "already due".
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().filter_map(|t| t.next_due).min()
    }

    /// Drops every timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    fn push(&mut self, interval: Duration, repeat: bool, delay: Duration, handler: Box<TimerFn<S>>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        self.timers.push(Timer {
            id,
            interval,
            repeat,
            next_due: self.now.checked_add(delay),
            last_fired: self.now,
            count: 0,
            handler,
            done: false,
        });

        log::trace!("{id} scheduled (interval {interval:?}, repeat {repeat})");
        id
    }
}

/// Next deadline after `now`, phase-locked to the previous one.
fn realign(prev: Option<Instant>, interval: Duration, now: Instant) -> Option<Instant> {
    if interval.is_zero() {
        return Some(now);
    }
    let next = prev?.checked_add(interval)?;
    if next > now {
        Some(next)
    } else {
        now.checked_add(interval)
    }
}

impl<S: 'static> Scheduler<S> for TimerQueue<S> {
    fn schedule_interval(&mut self, interval: Duration, handler: Box<TimerFn<S>>) -> TimerId {
        self.push(interval, true, interval, handler)
    }

    fn schedule_once(&mut self, delay: Duration, handler: Box<TimerFn<S>>) -> TimerId {
        self.push(Duration::ZERO, false, delay, handler)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        let removed = self.timers.len() != before;
        if removed {
            log::trace!("{id} cancelled");
        }
        removed
    }

    fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id && !t.done)
    }
}

impl<S: 'static> Default for TimerQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for TimerQueue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerQueue")
            .field("timers", &self.timers.iter().map(|t| t.id).collect::<Vec<_>>())
            .field("now", &self.now)
            .finish()
    }
}
