//! Command deck parsing.
//!
//! Supports:
//! - `:q` or `:quit` → quit
//! - `:h` or `:help` → help
//! - `@filename` → load a file (`.txt`, `.md`, `.epub`, `.pdf`)
//! - `@@` or a bare `@` → load from clipboard

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command deck input into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// The translation layer between command deck input and the app core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
