/// One displayable unit of RSVP playback.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RsvpToken {
    /// Original whitespace-delimited chunk, unmodified.
    pub raw: String,
    /// Cleaned display string. Never empty for a retained token.
    pub text: String,
    /// Extra hold time after this token, on top of the base per-word delay.
    pub extra_pause_ms: u64,
}

/// Tokenization mode.
///
/// `Clean` keeps punctuation-driven pauses; `Pure` strips the cadence and
/// shows every token for the same base delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RsvpMode {
    #[default]
    Clean,
    Pure,
}

impl RsvpMode {
    pub fn toggled(self) -> Self {
        match self {
            RsvpMode::Clean => RsvpMode::Pure,
            RsvpMode::Pure => RsvpMode::Clean,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RsvpMode::Clean => "clean",
            RsvpMode::Pure => "pure",
        }
    }
}
