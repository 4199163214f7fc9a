/// Top-level screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Shelf and book browser.
    Library,
    /// RSVP reader (playing or paused; the player owns that flag).
    Reading,
    /// Command deck has focus.
    Command,
    /// Tear down and exit.
    Quit,
}
