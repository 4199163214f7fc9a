use std::time::{Duration, Instant};

use crate::player::OneShot;

const HIDE_AFTER: Duration = Duration::from_millis(1500);
const FADE_OUT: Duration = Duration::from_millis(170);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    Visible,
    FadingOut,
}

/// Visibility state machine for the seek-track thumb.
///
/// The thumb appears while the user scrubs and lingers briefly after
/// release: a hide delay, then a short fade before it unmounts. Each step
/// has its own one-shot timer; showing again cancels both, so a new grab
/// mid-fade never races the old timers.
#[derive(Debug)]
pub struct ThumbFade {
    phase: Phase,
    hide: OneShot,
    unmount: OneShot,
}

impl ThumbFade {
    pub fn new() -> Self {
        Self {
            phase: Phase::Hidden,
            hide: OneShot::new(),
            unmount: OneShot::new(),
        }
    }

    /// Shows the thumb immediately and cancels any pending hide.
    pub fn show_now(&mut self) {
        self.hide.cancel();
        self.unmount.cancel();
        self.phase = Phase::Visible;
    }

    /// Schedules the hide sequence.
    pub fn hide_in(&mut self, now: Instant, after: Duration) {
        self.hide.cancel();
        self.unmount.cancel();
        self.hide.schedule_in(now, after);
    }

    /// Default linger after a scrub ends.
    pub fn hide_soon(&mut self, now: Instant) {
        self.hide_in(now, HIDE_AFTER);
    }

    /// Advances the fade timers.
    pub fn tick(&mut self, now: Instant) {
        if self.hide.fire(now) {
            self.phase = Phase::FadingOut;
            self.unmount.schedule_in(now, FADE_OUT);
        }
        if self.unmount.fire(now) {
            self.phase = Phase::Hidden;
        }
    }

    /// True while the thumb should be drawn (fading counts as drawn).
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Next deadline of either timer, for the event loop.
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        match (self.hide.remaining(now), self.unmount.remaining(now)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}

impl Default for ThumbFade {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_starts_hidden() {
        let thumb = ThumbFade::new();
        assert!(!thumb.is_visible());
        assert_eq!(thumb.poll_timeout(Instant::now()), None);
    }

    #[test]
    fn test_show_then_full_hide_sequence() {
        let start = Instant::now();
        let mut thumb = ThumbFade::new();

        thumb.show_now();
        assert!(thumb.is_visible());

        thumb.hide_soon(start);
        thumb.tick(start + ms(1_000));
        assert!(thumb.is_visible());

        // Hide delay elapses: still drawn while fading.
        thumb.tick(start + ms(1_500));
        assert!(thumb.is_visible());

        // Fade-out elapses: unmounted.
        thumb.tick(start + ms(1_700));
        assert!(!thumb.is_visible());
    }

    #[test]
    fn test_show_cancels_pending_hide() {
        let start = Instant::now();
        let mut thumb = ThumbFade::new();

        thumb.show_now();
        thumb.hide_soon(start);
        // Grabbed again before the hide fires.
        thumb.show_now();

        thumb.tick(start + ms(10_000));
        assert!(thumb.is_visible());
    }

    #[test]
    fn test_show_mid_fade_restores_visibility() {
        let start = Instant::now();
        let mut thumb = ThumbFade::new();

        thumb.show_now();
        thumb.hide_in(start, ms(100));
        thumb.tick(start + ms(100));

        thumb.show_now();
        thumb.tick(start + ms(10_000));
        assert!(thumb.is_visible());
    }

    #[test]
    fn test_poll_timeout_tracks_next_deadline() {
        let start = Instant::now();
        let mut thumb = ThumbFade::new();
        thumb.show_now();
        thumb.hide_in(start, ms(300));
        assert_eq!(thumb.poll_timeout(start + ms(100)), Some(ms(200)));

        thumb.tick(start + ms(300));
        // Now waiting on the fade-out timer.
        assert_eq!(thumb.poll_timeout(start + ms(300)), Some(ms(170)));
    }
}
