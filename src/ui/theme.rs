use crossterm::style::{Color, Stylize};
use std::path::Path;

/// Prompt colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub directory: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::classic()
    }
}

impl Theme {
    /// Bold blue working directory
    pub fn classic() -> Self {
        Self {
            directory: Color::Blue,
        }
    }

    pub fn current() -> Self {
        Self::classic()
    }
}

/// Prompt showing `cwd`, or `unknown` when the working directory is unavailable.
pub fn prompt(cwd: Option<&Path>) -> String {
    match cwd {
        Some(dir) => format!(
            "{} > ",
            dir.display()
                .to_string()
                .with(Theme::current().directory)
                .bold()
        ),
        None => "unknown > ".to_string(),
    }
}

/// Prompt for the process's working directory right now
pub fn current_prompt() -> String {
    prompt(std::env::current_dir().ok().as_deref())
}
