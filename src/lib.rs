//! An interactive shell front-end with a raw-mode line editor.
//!
//! Keystrokes are decoded into [`editor::InputEvent`]s and applied to an
//! [`editor::EditBuffer`]; arrow keys walk the [`history::History`] and Tab
//! asks the [`completion::Completer`]. Finished lines go to [`shell`] for
//! dispatch.

pub mod app;
pub mod completion;
pub mod config;
pub mod editor;
pub mod error;
pub mod history;
pub mod logging;
pub mod session;
pub mod shell;
pub mod signals;
pub mod ui;
