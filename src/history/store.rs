use crate::error::ShellError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the history log lives between sessions
pub trait HistoryStore {
    fn load(&self) -> Result<Vec<String>, ShellError>;
    fn save(&self, entries: &[String]) -> Result<(), ShellError>;
}

/// Newline-separated history file
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn wrap(&self, source: io::Error) -> ShellError {
        ShellError::History {
            path: self.path.clone(),
            source,
        }
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Result<Vec<String>, ShellError> {
        // one bad byte must not cost the rest of the log
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.wrap(e)),
        };

        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn save(&self, entries: &[String]) -> Result<(), ShellError> {
        fs::write(&self.path, entries.join("\n")).map_err(|e| self.wrap(e))
    }
}

/// Keeps nothing; used when persistence is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHistoryStore;

impl HistoryStore for NullHistoryStore {
    fn load(&self) -> Result<Vec<String>, ShellError> {
        Ok(Vec::new())
    }

    fn save(&self, _entries: &[String]) -> Result<(), ShellError> {
        Ok(())
    }
}
