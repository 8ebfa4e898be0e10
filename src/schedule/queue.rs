use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

use super::{Scheduler, TimerHandle};

/// Repeating timers never fire more often than this.
const MIN_PERIOD: Duration = Duration::from_millis(1);

struct Entry<E> {
    deadline: Duration,
    seq: u64,
    handle: TimerHandle,
    period: Option<Duration>,
    event: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    // Reversed: BinaryHeap is a max-heap and we want the earliest deadline,
    // ties broken by scheduling order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Deadline-ordered timer queue over a virtual clock.
///
/// Cancellation is lazy: cancelled entries stay in the heap and are skipped
/// when they reach the top.
pub struct TimerQueue<E> {
    now: Duration,
    heap: BinaryHeap<Entry<E>>,
    live: HashSet<TimerHandle>,
    next_seq: u64,
    next_handle: u64,
}

impl<E> std::fmt::Debug for TimerQueue<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerQueue")
            .field("now", &self.now)
            .field("live", &self.live.len())
            .finish()
    }
}

impl<E: Clone> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            heap: BinaryHeap::new(),
            live: HashSet::new(),
            next_seq: 0,
            next_handle: 0,
        }
    }

    fn push(&mut self, deadline: Duration, handle: TimerHandle, period: Option<Duration>, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            deadline,
            seq,
            handle,
            period,
            event,
        });
    }

    fn allocate(&mut self) -> TimerHandle {
        let handle = TimerHandle::new(self.next_handle);
        self.next_handle += 1;
        self.live.insert(handle);
        handle
    }
}

impl<E: Clone> Scheduler for TimerQueue<E> {
    type Event = E;

    fn now(&self) -> Duration {
        self.now
    }

    fn schedule_once(&mut self, delay: Duration, event: E) -> TimerHandle {
        let handle = self.allocate();
        self.push(self.now + delay, handle, None, event);
        handle
    }

    fn schedule_repeating(&mut self, period: Duration, event: E) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        let handle = self.allocate();
        self.push(self.now + period, handle, Some(period), event);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.live.remove(&handle)
    }

    fn is_pending(&self, handle: TimerHandle) -> bool {
        self.live.contains(&handle)
    }

    fn pending(&self) -> usize {
        self.live.len()
    }

    fn pop_due(&mut self, until: Duration) -> Option<E> {
        loop {
            let due = matches!(self.heap.peek(), Some(entry) if entry.deadline <= until);
            if !due {
                self.now = self.now.max(until);
                return None;
            }
            let entry = self.heap.pop()?;
            if !self.live.contains(&entry.handle) {
                continue;
            }
            self.now = self.now.max(entry.deadline);
            match entry.period {
                Some(period) => {
                    let event = entry.event.clone();
                    self.push(entry.deadline + period, entry.handle, Some(period), entry.event);
                    return Some(event);
                }
                None => {
                    self.live.remove(&entry.handle);
                    return Some(entry.event);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn drain(queue: &mut TimerQueue<&'static str>, until: Duration) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some(event) = queue.pop_due(until) {
            fired.push(event);
        }
        fired
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_once(ms(300), "late");
        queue.schedule_once(ms(100), "early");
        queue.schedule_once(ms(200), "middle");

        assert_eq!(drain(&mut queue, ms(1_000)), vec!["early", "middle", "late"]);
        assert_eq!(queue.now(), ms(1_000));
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_once(ms(50), "first");
        queue.schedule_once(ms(50), "second");
        assert_eq!(drain(&mut queue, ms(50)), vec!["first", "second"]);
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule_once(ms(400), "turn");
        assert_eq!(queue.pop_due(ms(399)), None);
        assert_eq!(queue.now(), ms(399));
        assert!(queue.is_pending(handle));
        assert_eq!(queue.pop_due(ms(400)), Some("turn"));
        assert!(!queue.is_pending(handle));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule_once(ms(10), "cancelled");
        queue.schedule_once(ms(20), "kept");
        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
        assert_eq!(drain(&mut queue, ms(100)), vec!["kept"]);
    }

    #[test]
    fn repeating_timer_fires_every_period_until_cancelled() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule_repeating(ms(8_000), "tick");

        assert_eq!(drain(&mut queue, ms(24_000)), vec!["tick", "tick", "tick"]);
        assert!(queue.is_pending(handle));

        assert!(queue.cancel(handle));
        assert!(drain(&mut queue, ms(100_000)).is_empty());
    }

    #[test]
    fn follow_up_is_measured_from_fired_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule_once(ms(400), "out");

        assert_eq!(queue.pop_due(ms(800)), Some("out"));
        assert_eq!(queue.now(), ms(400));

        queue.schedule_once(ms(400), "in");
        assert_eq!(queue.pop_due(ms(800)), Some("in"));
        assert_eq!(queue.now(), ms(800));
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut queue: TimerQueue<&'static str> = TimerQueue::new();
        assert_eq!(queue.pop_due(ms(500)), None);
        assert_eq!(queue.pop_due(ms(100)), None);
        assert_eq!(queue.now(), ms(500));
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut queue = TimerQueue::new();
        queue.schedule_repeating(Duration::ZERO, "spin");
        assert_eq!(drain(&mut queue, ms(3)).len(), 3);
    }
}
