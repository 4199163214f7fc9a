//! dusk-reader: a terminal e-reader with an RSVP speed-reading mode.
//!
//! The interesting machinery is in [`rsvp`] (tokenization, pauses, the
//! recognition-point split) and [`player`] (the single-shot delay chain that
//! paces playback). Everything else is shelving: the in-memory [`library`],
//! the document [`input`] loaders, and the [`app`]/[`ui`] pair that hosts it
//! all in a terminal.

pub mod app;
pub mod input;
pub mod library;
pub mod player;
pub mod rsvp;
pub mod ui;

pub use app::App;
pub use player::{wpm_to_milliseconds, Player, PlayerConfig};
pub use rsvp::{tokenize, Chapter, RsvpMode, RsvpToken};
