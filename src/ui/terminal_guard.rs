use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;
use std::sync::Once;
use tracing::error;

static PANIC_HOOK_SET: Once = Once::new();

/// Raw mode for as long as the guard lives.
///
/// Held across one line read; dropping it hands the terminal back in its
/// usual cooked mode before any command runs.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        set_panic_hook();
        enable_raw_mode()?;

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Puts the terminal back without a guard, for exit paths that skip destructors.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        std::panic::set_hook(Box::new(|panic_info| {
            restore_terminal();
            error!(%panic_info, "panic");
            eprintln!("Panic: {}", panic_info);
            std::process::exit(1);
        }));
    });
}
