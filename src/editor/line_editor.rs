use super::buffer::EditBuffer;
use super::event::InputEvent;
use super::input::{InputError, RuneSource};
use crate::completion::{display::format_candidates, Completer, Completion};
use crate::config::CompletionLayout;
use crate::history::History;
use crate::ui::render;
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

/// The read ended without a submitted line.
#[derive(Error, Debug)]
#[error("{source}")]
pub struct ReadLineError {
    /// What had been typed so far, trimmed
    pub partial: String,
    #[source]
    pub source: InputError,
}

enum Step {
    Continue,
    Submit,
}

/// Turns keystrokes from `source` into one edited line, echoing to `out`.
pub struct LineEditor<S, W> {
    source: S,
    out: W,
    layout: CompletionLayout,
}

impl<S: RuneSource, W: Write> LineEditor<S, W> {
    pub fn new(source: S, out: W, layout: CompletionLayout) -> Self {
        Self {
            source,
            out,
            layout,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Blocks until the user submits a line or input ends.
    ///
    /// The returned line is exactly what was typed. History browsing starts
    /// from the live line on every call.
    pub fn read_line(
        &mut self,
        prompt: &str,
        history: &mut History,
        completer: &Completer,
    ) -> Result<String, ReadLineError> {
        history.reset_cursor();
        let mut buffer = EditBuffer::new();

        let fail = |buffer: &EditBuffer, source: InputError| ReadLineError {
            partial: buffer.text().trim().to_string(),
            source,
        };

        render::repaint(&mut self.out, prompt, &buffer).map_err(|e| fail(&buffer, e.into()))?;

        loop {
            let event = InputEvent::decode(&mut self.source).map_err(|e| fail(&buffer, e))?;
            match self.handle(event, &mut buffer, prompt, history, completer) {
                Ok(Step::Continue) => {}
                Ok(Step::Submit) => return Ok(buffer.text()),
                Err(e) => return Err(fail(&buffer, e.into())),
            }
        }
    }

    fn handle(
        &mut self,
        event: InputEvent,
        buffer: &mut EditBuffer,
        prompt: &str,
        history: &mut History,
        completer: &Completer,
    ) -> io::Result<Step> {
        match event {
            InputEvent::Printable(ch) => {
                buffer.insert(ch);
                render::repaint(&mut self.out, prompt, buffer)?;
            }
            InputEvent::Backspace => {
                if buffer.delete_before_cursor() {
                    render::repaint(&mut self.out, prompt, buffer)?;
                }
            }
            InputEvent::Tab => self.complete(buffer, prompt, completer)?,
            InputEvent::ArrowUp => {
                if let Some(entry) = history.older() {
                    buffer.replace(entry);
                    render::repaint(&mut self.out, prompt, buffer)?;
                }
            }
            InputEvent::ArrowDown => {
                match history.newer() {
                    Some(entry) => buffer.replace(entry),
                    None => buffer.clear(),
                }
                render::repaint(&mut self.out, prompt, buffer)?;
            }
            InputEvent::ArrowLeft => {
                if buffer.move_left() {
                    render::repaint(&mut self.out, prompt, buffer)?;
                }
            }
            InputEvent::ArrowRight => {
                if buffer.move_right() {
                    render::repaint(&mut self.out, prompt, buffer)?;
                }
            }
            InputEvent::Submit => {
                render::newline(&mut self.out)?;
                return Ok(Step::Submit);
            }
            InputEvent::Interrupt => {
                render::newline(&mut self.out)?;
                render::repaint(&mut self.out, prompt, buffer)?;
            }
            InputEvent::Unknown => {}
        }
        Ok(Step::Continue)
    }

    fn complete(
        &mut self,
        buffer: &mut EditBuffer,
        prompt: &str,
        completer: &Completer,
    ) -> io::Result<()> {
        let text = buffer.text();
        match completer.complete(&text) {
            Completion::Replace(line) if line != text => {
                buffer.replace(&line);
                render::repaint(&mut self.out, prompt, buffer)?;
            }
            Completion::Candidates(candidates) => {
                debug!(count = candidates.len(), "ambiguous completion");
                self.out
                    .write_all(format_candidates(&candidates, self.layout).as_bytes())?;
                render::repaint(&mut self.out, prompt, buffer)?;
            }
            _ => {}
        }
        Ok(())
    }
}
