use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::ExecutableCommand;
use std::io;
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Raw-mode + alternate-screen guard. Restores the terminal on drop and on
/// panic, so a crash never leaves the shell unusable.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        io::stdout().execute(terminal::EnterAlternateScreen)?;
        io::stdout().execute(EnableMouseCapture)?;

        set_panic_hook();

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = io::stdout().execute(DisableMouseCapture);
        let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        std::panic::set_hook(Box::new(|panic_info| {
            let _ = io::stdout().execute(DisableMouseCapture);
            let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
            let _ = disable_raw_mode();
            eprintln!("Panic: {panic_info}");
            std::process::exit(1);
        }));
    });
}
