use super::event::AppEvent;
use crate::completion::Completer;
use crate::config::CompletionLayout;
use crate::editor::{LineEditor, RuneSource};
use crate::history::HistoryStore;
use crate::session::Session;
use crate::shell::{execute, parse_command, Flow};
use crate::ui::{theme, TerminalGuard};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// The read-dispatch loop of one shell session
pub struct App<S> {
    session: Session<S>,
    layout: CompletionLayout,
}

impl<S: HistoryStore> App<S> {
    pub fn new(session: Session<S>, layout: CompletionLayout) -> Self {
        Self { session, layout }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Reads lines from `source` until `exit` or end of input.
    ///
    /// Raw mode is held only while a line is being edited.
    pub fn run<R: RuneSource>(&mut self, source: R) {
        let mut editor = LineEditor::new(source, io::stdout(), self.layout);
        let mut stdout = io::stdout();
        let mut stderr = io::stderr();

        loop {
            let prompt = theme::current_prompt();
            let completer =
                Completer::new(env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

            let result = {
                // piped input has no terminal to switch; edit it as it comes
                let _guard = TerminalGuard::new()
                    .map_err(|e| debug!(error = %e, "raw mode unavailable"))
                    .ok();
                editor.read_line(&prompt, self.session.history_mut(), &completer)
            };

            if self.handle_event(AppEvent::from(result), &mut stdout, &mut stderr) == Flow::Exit {
                return;
            }
        }
    }

    /// Records and dispatches a submitted line. Command errors are printed
    /// to `err` and never end the session.
    pub fn handle_event<W: Write, E: Write>(
        &mut self,
        event: AppEvent,
        out: &mut W,
        err: &mut E,
    ) -> Flow {
        let line = match event {
            AppEvent::Submitted(line) => line,
            AppEvent::ReadFailed { partial, reason } => {
                warn!(%reason, %partial, "error reading input, retrying");
                let _ = writeln!(err, "Error reading input: {reason}");
                return Flow::Continue;
            }
            AppEvent::EndOfInput => {
                info!("end of input");
                let _ = writeln!(out);
                return Flow::Exit;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            return Flow::Continue;
        }
        self.session.record(line);

        match execute(parse_command(line), out) {
            Ok(Flow::Exit) => {
                self.session.clear();
                Flow::Exit
            }
            Ok(flow) => flow,
            Err(e) => {
                debug!(line, error = %e, "command failed");
                let _ = writeln!(err, "Error: {e}");
                Flow::Continue
            }
        }
    }
}
