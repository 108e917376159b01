//! Command history
//!
//! - **History**: the in-memory log plus the browsing cursor used by the arrow keys
//! - **store.rs**: persistence behind the `HistoryStore` trait

pub mod store;

pub use store::{FileHistoryStore, HistoryStore, NullHistoryStore};

/// Submitted lines in submission order, with a browsing position.
///
/// `index == entries.len()` means the user is on the live line rather than
/// looking at a recalled entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(entries: Vec<String>) -> Self {
        let index = entries.len();
        Self { entries, index }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_browsing(&self) -> bool {
        self.index < self.entries.len()
    }

    /// Appends a submitted line. Blank lines are not recorded.
    pub fn push(&mut self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }
        self.entries.push(line.to_string());
        self.index = self.entries.len();
        true
    }

    /// Steps towards older entries; `None` once the oldest entry is showing.
    pub fn older(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Steps towards newer entries. Walking past the newest returns to the
    /// live line, reported as `None`.
    pub fn newer(&mut self) -> Option<&str> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            Some(&self.entries[self.index])
        } else {
            self.index = self.entries.len();
            None
        }
    }

    pub fn reset_cursor(&mut self) {
        self.index = self.entries.len();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }
}
