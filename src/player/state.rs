use std::time::{Duration, Instant};

use super::config::PlayerConfig;
use super::timer::OneShot;
use crate::rsvp::RsvpToken;

/// Base per-token delay for a rate, rounded to whole milliseconds.
pub fn wpm_to_milliseconds(wpm: u32) -> u64 {
    (60_000.0 / wpm.max(1) as f64).round() as u64
}

/// The playback scheduler for one reading session.
///
/// Owns the current token index, the playing flag, the rate, and a single
/// advance deadline. Tokens are immutable once handed over; the player only
/// indexes into them. Every operation that may arm the deadline takes `now`
/// so the whole machine runs against an injected clock in tests.
///
/// A deadline is pending exactly while `playing && !scrubbing` and the token
/// sequence is non-empty. Anything that breaks that condition cancels the
/// deadline before touching state; anything that re-establishes it arms a
/// fresh delay computed from the current token and the current rate. A rate
/// change alone never reschedules an in-flight delay.
#[derive(Debug)]
pub struct Player {
    tokens: Vec<RsvpToken>,
    current_index: usize,
    playing: bool,
    wpm: u32,
    scrubbing: bool,
    was_playing: bool,
    advance: OneShot,
    config: PlayerConfig,
}

impl Player {
    pub fn new(tokens: Vec<RsvpToken>) -> Self {
        Self::with_config(tokens, PlayerConfig::default())
    }

    pub fn with_config(tokens: Vec<RsvpToken>, config: PlayerConfig) -> Self {
        let wpm = config.wpm.clamp(*config.wpm_range.start(), *config.wpm_range.end());
        Self {
            tokens,
            current_index: 0,
            playing: false,
            wpm,
            scrubbing: false,
            was_playing: false,
            advance: OneShot::new(),
            config,
        }
    }

    pub fn tokens(&self) -> &[RsvpToken] {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_token(&self) -> Option<&RsvpToken> {
        self.tokens.get(self.current_index)
    }

    pub fn current_text(&self) -> &str {
        self.current_token().map(|t| t.text.as_str()).unwrap_or("")
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    /// Fraction of the way through the sequence, 0 for empty or one-token
    /// sequences.
    pub fn progress_ratio(&self) -> f64 {
        if self.tokens.len() <= 1 {
            0.0
        } else {
            self.current_index as f64 / (self.tokens.len() - 1) as f64
        }
    }

    /// Hold time for the current token: base delay plus its extra pause.
    pub fn current_hold(&self) -> Duration {
        let extra = self.current_token().map(|t| t.extra_pause_ms).unwrap_or(0);
        Duration::from_millis(wpm_to_milliseconds(self.wpm) + extra)
    }

    /// How long the event loop may sleep before calling [`Player::tick`].
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.advance.remaining(now)
    }

    fn running(&self) -> bool {
        self.playing && !self.scrubbing && !self.tokens.is_empty()
    }

    fn last_index(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    /// Cancels any pending deadline and, if playback should run, arms a
    /// fresh one for the current token at the current rate.
    fn arm(&mut self, now: Instant) {
        self.advance.cancel();
        if self.running() {
            self.advance.schedule_in(now, self.current_hold());
        }
    }

    /// Replaces the token sequence. Always a hard stop: a resized sequence
    /// must never race a live deadline.
    pub fn set_tokens(&mut self, tokens: Vec<RsvpToken>) {
        self.advance.cancel();
        self.playing = false;
        self.was_playing = false;
        self.tokens = tokens;
        self.current_index = self.current_index.min(self.last_index());
    }

    pub fn play(&mut self, now: Instant) {
        if self.tokens.is_empty() {
            return;
        }
        if self.scrubbing {
            // Resumes when the scrub ends.
            self.was_playing = true;
            return;
        }
        self.playing = true;
        self.arm(now);
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.was_playing = false;
        self.advance.cancel();
    }

    /// Play/pause toggle. At the last token it rewinds to the start first,
    /// so the play button restarts a finished session.
    pub fn toggle_play(&mut self, now: Instant) {
        if self.tokens.is_empty() {
            return;
        }
        if self.current_index >= self.last_index() && self.tokens.len() > 1 {
            self.current_index = 0;
            self.play(now);
            return;
        }
        if self.playing {
            self.pause();
        } else {
            self.play(now);
        }
    }

    fn clamp_wpm(&self, wpm: u32) -> u32 {
        wpm.clamp(*self.config.wpm_range.start(), *self.config.wpm_range.end())
    }

    /// Sets the rate exactly (clamped). A pending deadline is left alone;
    /// the new rate applies from the next armed delay.
    pub fn set_wpm(&mut self, wpm: u32) {
        self.wpm = self.clamp_wpm(wpm);
    }

    /// Rate change from a continuous drag gesture: clamped, then snapped to
    /// the nearest multiple of 10.
    pub fn set_wpm_snapped(&mut self, wpm: u32) {
        let clamped = self.clamp_wpm(wpm);
        self.wpm = (clamped + 5) / 10 * 10;
    }

    /// Step-button rate change (plus or minus one `wpm_step`).
    pub fn nudge_wpm(&mut self, delta: i32) {
        let next = self.wpm as i64 + delta as i64 * self.config.wpm_step as i64;
        self.wpm = self.clamp_wpm(next.clamp(0, u32::MAX as i64) as u32);
    }

    /// Fires the advance deadline if it is due. At the last token playback
    /// stops and nothing is rescheduled; otherwise the index moves forward
    /// one and a fresh delay is armed for the new token.
    ///
    /// Returns true when the index advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.advance.fire(now) {
            return false;
        }
        // Re-check at fire time rather than trusting state captured when the
        // delay was armed.
        if !self.running() {
            return false;
        }
        if self.current_index >= self.last_index() {
            self.playing = false;
            return false;
        }
        self.current_index += 1;
        self.arm(now);
        true
    }

    /// Seek by token index, clamped to the valid range. Negative targets
    /// clamp to zero. Playing is untouched; a running delay chain restarts
    /// from the new position.
    pub fn seek_to_token(&mut self, index: isize, now: Instant) {
        if self.tokens.is_empty() {
            self.current_index = 0;
            return;
        }
        self.current_index = (index.max(0) as usize).min(self.last_index());
        if self.running() {
            self.arm(now);
        }
    }

    pub fn rewind(&mut self, now: Instant) {
        let n = self.config.skip_step;
        self.current_index = self.current_index.saturating_sub(n);
        if self.running() {
            self.arm(now);
        }
    }

    pub fn fast_forward(&mut self, now: Instant) {
        let n = self.config.skip_step;
        self.current_index = (self.current_index + n).min(self.last_index());
        if self.running() {
            self.arm(now);
        }
    }

    fn index_for_ratio(&self, ratio: f64) -> usize {
        (ratio.clamp(0.0, 1.0) * self.last_index() as f64).round() as usize
    }

    /// Starts a drag on the seek track. Remembers whether playback was live,
    /// suspends it, and seeks to the grabbed position.
    pub fn begin_scrub(&mut self, ratio: f64) {
        self.was_playing = self.playing;
        self.scrubbing = true;
        self.playing = false;
        self.advance.cancel();
        if !self.tokens.is_empty() {
            self.current_index = self.index_for_ratio(ratio);
        }
    }

    /// Follows the drag. Ignored unless a scrub is in progress.
    pub fn update_scrub(&mut self, ratio: f64) {
        if !self.scrubbing || self.tokens.is_empty() {
            return;
        }
        self.current_index = self.index_for_ratio(ratio);
    }

    /// Ends the drag and resumes playback only if it was live when the
    /// scrub began and nothing paused it in between.
    pub fn end_scrub(&mut self, now: Instant) {
        if !self.scrubbing {
            return;
        }
        self.scrubbing = false;
        if self.was_playing {
            self.was_playing = false;
            self.play(now);
        }
    }
}
