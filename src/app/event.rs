use crate::editor::{InputError, ReadLineError};

/// What one pass of the line editor produced
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Submitted(String),
    ReadFailed { partial: String, reason: String },
    EndOfInput,
}

impl From<Result<String, ReadLineError>> for AppEvent {
    fn from(result: Result<String, ReadLineError>) -> Self {
        match result {
            Ok(line) => AppEvent::Submitted(line),
            Err(ReadLineError {
                source: InputError::Eof,
                ..
            }) => AppEvent::EndOfInput,
            Err(e) => AppEvent::ReadFailed {
                reason: e.to_string(),
                partial: e.partial,
            },
        }
    }
}
