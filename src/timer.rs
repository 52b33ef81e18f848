//! One-shot timers read against an externally supplied clock.
//!
//! Nothing here sleeps. The owner asks for the earliest deadline, waits
//! however its event loop waits, and then drains what is due.

use tokio::time::Instant;

/// Pending one-shot timers, each carrying a payload delivered when it fires.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    entries: Vec<(Instant, T)>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Schedule `payload` to fire at `deadline`.
    ///
    /// Timers are independent: scheduling never replaces or delays an
    /// already pending one.
    pub fn schedule(&mut self, deadline: Instant, payload: T) {
        self.entries.push((deadline, payload));
    }

    /// The earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|(at, _)| *at).min()
    }

    /// Remove and return every payload whose deadline is at or before `now`,
    /// earliest first. Ties keep scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|(at, _)| *at <= now);
        self.entries = pending;
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, payload)| payload).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_empty_queue() {
        let mut queue: TimerQueue<u8> = TimerQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.next_deadline(), None);
        assert!(queue.drain_due(Instant::now()).is_empty());
    }

    #[test]
    fn test_nothing_fires_before_deadline() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(start + Duration::from_millis(100), "a");

        assert!(queue.drain_due(start + Duration::from_millis(99)).is_empty());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_fires_at_deadline_exactly_once() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(start + Duration::from_millis(100), "a");

        assert_eq!(queue.drain_due(start + Duration::from_millis(100)), vec!["a"]);
        assert!(queue.drain_due(start + Duration::from_millis(500)).is_empty());
    }

    #[test]
    fn test_drain_orders_by_deadline() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(start + Duration::from_millis(30), 3);
        queue.schedule(start + Duration::from_millis(10), 1);
        queue.schedule(start + Duration::from_millis(20), 2);
        queue.schedule(start + Duration::from_millis(90), 9);

        assert_eq!(queue.next_deadline(), Some(start + Duration::from_millis(10)));
        assert_eq!(queue.drain_due(start + Duration::from_millis(50)), vec![1, 2, 3]);
        assert_eq!(queue.next_deadline(), Some(start + Duration::from_millis(90)));
    }

    #[test]
    fn test_scheduling_does_not_replace_pending() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(start + Duration::from_millis(10), "first");
        queue.schedule(start + Duration::from_millis(10), "second");

        assert_eq!(queue.drain_due(start + Duration::from_millis(10)), vec!["first", "second"]);
    }
}
