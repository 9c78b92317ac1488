//! Periodic callbacks.
//!
//! [`Scheduler`] is the registration interface ("call this every N, until
//! cancelled"); [`TimerQueue`] is the in-process implementation. The queue is
//! advanced explicitly by whichever loop hosts it and never sleeps or reads the
//! clock itself, so it works the same under the terminal runtime and in tests.
//!
//! Handlers receive `&mut S`, the state the timers belong to, plus a [`Tick`]
//! describing how much real time passed since that timer last fired.

mod scheduler;
mod timer_queue;

pub use scheduler::{Scheduler, Tick, TimerControl, TimerFn, TimerId};
pub use timer_queue::TimerQueue;
