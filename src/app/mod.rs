pub mod app;
pub mod event;
pub mod greeting;

pub use app::App;
pub use event::AppEvent;

use crate::config::ShellConfig;
use crate::editor::RuneReader;
use crate::error::ShellError;
use crate::history::{FileHistoryStore, HistoryStore, NullHistoryStore};
use crate::session::Session;
use crate::signals;
use std::io;
use tracing::warn;

/// Greets the user and runs the shell until `exit` or end of input.
pub fn run(config: ShellConfig) -> Result<(), ShellError> {
    let mut stdout = io::stdout();
    let user = greeting::user_name(&config, &mut io::stdin().lock(), &mut stdout)?;
    greeting::print_banner(&mut stdout, &user)?;

    if let Err(e) = signals::spawn_watcher() {
        warn!(error = %e, "signal handling unavailable");
    }

    match config.history_path.clone() {
        Some(path) => run_with(FileHistoryStore::new(path), &config),
        None => run_with(NullHistoryStore, &config),
    }
    Ok(())
}

fn run_with<S: HistoryStore>(store: S, config: &ShellConfig) {
    let mut app = App::new(Session::open(store), config.completion);
    app.run(RuneReader::new(io::stdin()));
}
