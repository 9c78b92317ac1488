use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f64,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// By default delta time is the real elapsed time between ticks, so anything
/// accumulating `dt` (a stopwatch) stays in step with the wall clock even when
/// frames are late. Use [`with_clamps`](Self::with_clamps) when downstream code
/// prefers bounded steps over accuracy.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates an unclamped clock with its baseline at the current instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates an unclamped clock with an explicit baseline.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last: start,
            frame_index: 0,
            dt_min: Duration::ZERO,
            dt_max: Duration::MAX,
        }
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            dt_min,
            dt_max,
            ..Self::new()
        }
    }

    /// Resets the clock baseline.
    ///
    /// Useful when resuming from suspension (e.g. the terminal was stopped
    /// with ^Z) and the gap should not count as a frame.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Instant of the previous tick (or the baseline).
    pub fn last_tick(&self) -> Instant {
        self.last
    }

    /// Advances the clock to the current instant.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    ///
    /// An instant earlier than the previous tick yields `dt = 0`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f64(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn dt_is_real_elapsed_time() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        let ft = clock.tick_at(t0 + ms(16));
        assert!((ft.dt - 0.016).abs() < 1e-9);
        let ft = clock.tick_at(t0 + ms(16) + Duration::from_secs(3));
        assert!((ft.dt - 3.0).abs() < 1e-9);
    }

    #[test]
    fn frame_index_counts_ticks() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        assert_eq!(clock.tick_at(t0 + ms(1)).frame_index, 0);
        assert_eq!(clock.tick_at(t0 + ms(2)).frame_index, 1);
        assert_eq!(clock.tick_at(t0 + ms(3)).frame_index, 2);
    }

    #[test]
    fn going_backwards_yields_zero() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0 + ms(50));
        let ft = clock.tick_at(t0);
        assert_eq!(ft.dt, 0.0);
    }

    #[test]
    fn clamps_bound_dt() {
        let mut clock = FrameClock::with_clamps(ms(1), ms(250));
        let base = clock.last_tick();
        let ft = clock.tick_at(base);
        assert!((ft.dt - 0.001).abs() < 1e-9);
        let ft = clock.tick_at(base + Duration::from_secs(10));
        assert!((ft.dt - 0.25).abs() < 1e-9);
    }
}
