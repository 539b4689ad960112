//! Deadline-based debouncer for bursty UI events.
//!
//! Models the "pending timer handle, re-armed on every trigger" idiom as
//! explicit state: the action fires only once the quiet interval elapses
//! with no further triggers, independent of any particular timer primitive.

use std::time::Duration;

use tokio::time::Instant;

/// Quiet interval applied to viewport resize bursts.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Arms (or re-arms) the deadline at `now + quiet`. Each trigger inside
    /// the quiet interval pushes the deadline out again, collapsing the
    /// burst into a single firing.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// Disarms without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The instant the pending action becomes due, if armed. Hosts can
    /// sleep until this rather than polling.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once per armed burst, when `now` has reached
    /// the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debouncer() -> Debouncer {
        Debouncer::new(Duration::from_millis(300))
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_quiet_interval() {
        let mut debounce = debouncer();
        let start = Instant::now();
        debounce.trigger(start);

        assert!(!debounce.poll(start + Duration::from_millis(299)));
        assert!(debounce.poll(start + Duration::from_millis(300)));
        // Consumed: does not fire twice.
        assert!(!debounce.poll(start + Duration::from_millis(301)));
    }

    #[tokio::test(start_paused = true)]
    async fn retrigger_pushes_deadline_out() {
        let mut debounce = debouncer();
        let start = Instant::now();
        debounce.trigger(start);
        debounce.trigger(start + Duration::from_millis(200));

        // 300ms after the first trigger: still quiet-time for the second.
        assert!(!debounce.poll(start + Duration::from_millis(300)));
        assert!(debounce.poll(start + Duration::from_millis(500)));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_disarms() {
        let mut debounce = debouncer();
        let start = Instant::now();
        debounce.trigger(start);
        debounce.cancel();
        assert!(!debounce.is_armed());
        assert!(!debounce.poll(start + Duration::from_secs(10)));
    }
}
