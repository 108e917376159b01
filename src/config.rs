// Configuration for the shell session and its line editor

use crate::error::ShellError;
use clap::Parser;
use std::path::{Path, PathBuf};

pub const HISTORY_FILE_NAME: &str = ".gosh_history";
pub const USER_FILE_NAME: &str = ".gosh_user";
pub const LOG_FILE_NAME: &str = ".gosh.log";

/// Command-line flags
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gosh", version, about = "A small interactive shell")]
pub struct Args {
    /// History file to load and append to (default: ~/.gosh_history)
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Keep history in memory only
    #[arg(long, conflicts_with = "history_file")]
    pub no_history: bool,

    /// Log file for diagnostics (default: ~/.gosh.log, filtered by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Name to greet instead of the one stored in ~/.gosh_user
    #[arg(long)]
    pub name: Option<String>,
}

/// Layout of the candidate grid printed on an ambiguous Tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionLayout {
    /// Display columns reserved for each candidate (default 20)
    pub column_width: usize,

    /// Candidates per row (default 4)
    pub columns: usize,
}

impl Default for CompletionLayout {
    fn default() -> Self {
        Self {
            column_width: 20,
            columns: 4,
        }
    }
}

/// Master configuration for one shell session
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// `None` keeps history in memory only
    pub history_path: Option<PathBuf>,
    pub user_path: PathBuf,
    pub log_path: PathBuf,
    pub user_name: Option<String>,
    pub completion: CompletionLayout,
}

impl ShellConfig {
    /// Defaults rooted at `home`
    pub fn from_home(home: &Path) -> Self {
        Self {
            history_path: Some(home.join(HISTORY_FILE_NAME)),
            user_path: home.join(USER_FILE_NAME),
            log_path: home.join(LOG_FILE_NAME),
            user_name: None,
            completion: CompletionLayout::default(),
        }
    }

    pub fn from_args(args: Args) -> Result<Self, ShellError> {
        let home = dirs::home_dir().ok_or(ShellError::HomeDirUnavailable)?;
        Ok(Self::from_home(&home).with_args(args))
    }

    pub fn with_args(mut self, args: Args) -> Self {
        if args.no_history {
            self.history_path = None;
        } else if let Some(path) = args.history_file {
            self.history_path = Some(path);
        }
        if let Some(path) = args.log_file {
            self.log_path = path;
        }
        if let Some(name) = args.name {
            let name = name.trim().to_string();
            if !name.is_empty() {
                self.user_name = Some(name);
            }
        }
        self
    }
}
