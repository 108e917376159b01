//! Interactive line editor
//!
//! Reads keystrokes from a raw terminal and keeps an editable line.
//!
//! ## Module Structure
//!
//! - **input.rs**: `RuneSource` and the UTF-8 byte decoder behind it
//! - **event.rs**: one `InputEvent` per keystroke, escape sequences included
//! - **buffer.rs**: `EditBuffer`, the characters plus cursor
//! - **line_editor.rs**: the read loop that applies events, recalls history
//!   and runs completion
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut editor = LineEditor::new(RuneReader::new(io::stdin()), io::stdout(), layout);
//! let line = editor.read_line(&prompt, &mut history, &Completer::new(cwd))?;
//! ```

pub mod buffer;
pub mod event;
pub mod input;
pub mod line_editor;

pub use buffer::EditBuffer;
pub use event::InputEvent;
pub use input::{InputError, RuneReader, RuneSource};
pub use line_editor::{LineEditor, ReadLineError};
