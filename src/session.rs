use crate::history::{History, HistoryStore};
use tracing::{info, warn};

/// Process-wide shell state: the history log and where it is persisted.
///
/// Persistence is best effort. A store that fails is logged and the session
/// carries on with its in-memory log.
pub struct Session<S> {
    history: History,
    store: S,
}

impl<S: HistoryStore> Session<S> {
    pub fn open(store: S) -> Self {
        let entries = match store.load() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "could not load history, starting empty");
                Vec::new()
            }
        };
        info!(entries = entries.len(), "history loaded");

        Self {
            history: History::load(entries),
            store,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Appends a submitted line and persists the log.
    pub fn record(&mut self, line: &str) -> bool {
        if !self.history.push(line) {
            return false;
        }
        self.persist();
        true
    }

    /// Forgets all history, in memory and on disk.
    pub fn clear(&mut self) {
        self.history.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(self.history.entries()) {
            warn!(error = %e, "could not save history");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;
    use std::cell::RefCell;
    use std::io;

    #[derive(Default)]
    struct MemoryStore {
        saved: RefCell<Vec<Vec<String>>>,
        initial: Vec<String>,
        fail: bool,
    }

    impl HistoryStore for MemoryStore {
        fn load(&self) -> Result<Vec<String>, ShellError> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied").into());
            }
            Ok(self.initial.clone())
        }

        fn save(&self, entries: &[String]) -> Result<(), ShellError> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied").into());
            }
            self.saved.borrow_mut().push(entries.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_open_loads_entries_at_live_position() {
        let store = MemoryStore {
            initial: vec!["ls".into(), "pwd".into()],
            ..Default::default()
        };
        let session = Session::open(store);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history().index(), 2);
    }

    #[test]
    fn test_record_appends_once_and_persists() {
        let mut session = Session::open(MemoryStore::default());
        assert!(session.record("cd /tmp"));
        assert_eq!(session.history().entries(), ["cd /tmp".to_string()]);
        assert_eq!(session.history().index(), 1);
        assert_eq!(session.store.saved.borrow().len(), 1);
    }

    #[test]
    fn test_record_skips_blank_lines() {
        let mut session = Session::open(MemoryStore::default());
        assert!(!session.record("   "));
        assert!(session.store.saved.borrow().is_empty());
    }

    #[test]
    fn test_clear_persists_empty_log() {
        let mut session = Session::open(MemoryStore {
            initial: vec!["ls".into()],
            ..Default::default()
        });
        session.clear();
        assert!(session.history().is_empty());
        assert_eq!(session.store.saved.borrow().last(), Some(&Vec::new()));
    }

    #[test]
    fn test_failing_store_does_not_stop_session() {
        let mut session = Session::open(MemoryStore {
            fail: true,
            ..Default::default()
        });
        assert!(session.history().is_empty());
        assert!(session.record("ls"));
        assert_eq!(session.history().len(), 1);
    }
}
