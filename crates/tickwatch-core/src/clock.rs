use chrono::{Local, NaiveTime};

/// Source of the current local time of day.
///
/// The wall clock is read fresh on every tick and never stored, so
/// implementations only answer "what time is it now".
pub trait WallClock {
    fn now(&self) -> NaiveTime;
}

/// The system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl WallClock for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock frozen at a given time. Useful for tests and screenshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveTime);

impl FixedClock {
    /// Returns `None` for out-of-range components.
    pub fn hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, min, sec).map(Self)
    }

    pub fn set(&mut self, time: NaiveTime) {
        self.0 = time;
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

impl<C: WallClock + ?Sized> WallClock for &C {
    fn now(&self) -> NaiveTime {
        (**self).now()
    }
}

impl<C: WallClock + ?Sized> WallClock for Box<C> {
    fn now(&self) -> NaiveTime {
        (**self).now()
    }
}
