//! Single-threaded timer scheduling on a virtual clock.
//!
//! Controllers never sleep or spawn: they hand a delay and an event to a
//! [`Scheduler`] and get a [`TimerHandle`] back. The driver (terminal loop or
//! test) moves the clock forward with [`Scheduler::pop_due`] and feeds each
//! fired event back into the controller that owns the queue.

mod queue;

pub use queue::TimerQueue;

use std::time::Duration;

/// Identifies one scheduled timer. Repeating timers keep their handle
/// across periods, so a single `cancel` stops every future firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Schedule-after / cancel-by-handle abstraction used by the page controllers.
pub trait Scheduler {
    /// Payload delivered when a timer fires.
    type Event: Clone;

    /// Current position of the clock.
    fn now(&self) -> Duration;

    /// Fire `event` once, `delay` after [`Scheduler::now`].
    fn schedule_once(&mut self, delay: Duration, event: Self::Event) -> TimerHandle;

    /// Fire `event` every `period`, first firing one period from now.
    fn schedule_repeating(&mut self, period: Duration, event: Self::Event) -> TimerHandle;

    /// Cancel a timer. Returns false if it already fired (one-shot) or was
    /// cancelled before.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Whether the timer will still fire.
    fn is_pending(&self, handle: TimerHandle) -> bool;

    /// Number of live timers.
    fn pending(&self) -> usize;

    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock moves to the fired timer's deadline, so anything scheduled
    /// while handling the event is measured from that instant. When nothing
    /// is due the clock moves to `until` and `None` is returned.
    fn pop_due(&mut self, until: Duration) -> Option<Self::Event>;
}
