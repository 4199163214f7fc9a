use std::time::{Duration, Instant};

/// A cancellable single-shot deadline.
///
/// Playback is a chain of these, never a fixed-period timer: each delay is
/// armed for one token at the rate in force when it was armed. At most one
/// deadline is pending per timer; arming replaces whatever was pending, and
/// cancelling is idempotent. All methods take `now` explicitly so tests can
/// drive a synthetic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_in(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the deadline has been reached; the timer goes
    /// idle again until rearmed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, or `None` when idle. Zero once due.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
