use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

static COMMAND_RUNNING: AtomicBool = AtomicBool::new(false);

/// Marks a flag as set for as long as it lives.
#[derive(Debug)]
pub struct RunningGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> RunningGuard<'a> {
    pub fn hold(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag }
    }
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Held while a command runs in the foreground. The prompt is repainted
/// by the editor once the command returns, so interrupts skip the redraw.
pub fn foreground_command() -> RunningGuard<'static> {
    RunningGuard::hold(&COMMAND_RUNNING)
}

pub fn command_running() -> bool {
    COMMAND_RUNNING.load(Ordering::SeqCst)
}

/// Starts the thread that answers process signals.
///
/// An interrupt only redraws the prompt on a new line; whatever is being
/// edited stays in the buffer. Termination and hangup restore the terminal
/// before exiting with `128 + signal`.
#[cfg(unix)]
pub fn spawn_watcher() -> io::Result<()> {
    use crate::ui::{terminal_guard::restore_terminal, theme};
    use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::io::Write;
    use std::{process, thread};
    use tracing::{debug, warn};

    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP])?;
    thread::Builder::new()
        .name("signals".to_string())
        .spawn(move || {
            for signal in signals.forever() {
                if signal == SIGINT {
                    if command_running() {
                        debug!("interrupt while a command runs");
                        continue;
                    }
                    let mut out = io::stdout();
                    let _ = write!(out, "\r\n{}", theme::current_prompt());
                    let _ = out.flush();
                    continue;
                }
                warn!(signal, "terminating on signal");
                restore_terminal();
                process::exit(128 + signal);
            }
        })?;
    Ok(())
}

/// Without unix signals, Ctrl-C reaches the editor as a key in raw mode and
/// the terminal is restored by `TerminalGuard`'s drop and the panic hook.
#[cfg(not(unix))]
pub fn spawn_watcher() -> io::Result<()> {
    Ok(())
}
