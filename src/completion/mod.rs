//! Tab completion for command names and filesystem paths
//!
//! - **commands.rs**: the fixed table of known command names
//! - **path.rs**: splitting a fragment and listing matching directory entries
//! - **display.rs**: the candidate grid shown when a Tab is ambiguous

pub mod commands;
pub mod display;
pub mod path;

use std::path::{is_separator, PathBuf};
use tracing::debug;

/// Result of one completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing matched; leave the line alone
    None,
    /// The one unambiguous new line
    Replace(String),
    /// Several candidates to show; the line stays as typed
    Candidates(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct Completer {
    base_dir: PathBuf,
}

impl Completer {
    /// `base_dir` anchors relative paths, normally the working directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn complete(&self, line: &str) -> Completion {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&fragment) = tokens.last() else {
            return Completion::None;
        };

        if tokens.len() == 1 && !fragment.contains(is_separator) {
            let names = commands::matching(fragment);
            match names.as_slice() {
                [] => {}
                [name] => return Completion::Replace((*name).to_string()),
                _ => {
                    return Completion::Candidates(names.iter().map(|n| n.to_string()).collect())
                }
            }
        }

        let mut matches = match path::matching_entries(&self.base_dir, fragment) {
            Ok(matches) => matches,
            Err(e) => {
                debug!(fragment, error = %e, "path completion skipped");
                return Completion::None;
            }
        };

        match matches.len() {
            0 => Completion::None,
            1 => {
                let completed = matches.remove(0);
                let mut parts = tokens[..tokens.len() - 1].to_vec();
                parts.push(&completed);
                Completion::Replace(parts.join(" "))
            }
            _ => Completion::Candidates(matches),
        }
    }
}
