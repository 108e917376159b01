use std::io::{self, Read};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("end of input")]
    Eof,

    #[error("read failed: {0}")]
    Io(#[from] io::Error),
}

/// A source of decoded characters, one keystroke at a time.
///
/// Implementations must not buffer whole lines: the editor asks for the
/// continuation runes of an escape sequence on demand.
pub trait RuneSource {
    fn next_rune(&mut self) -> Result<char, InputError>;
}

/// Decodes UTF-8 from any byte reader, one code point per call.
///
/// Malformed sequences come back as U+FFFD rather than an error so a stray
/// byte never aborts the line being edited.
pub struct RuneReader<R> {
    inner: R,
}

impl<R: Read> RuneReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    fn next_byte(&mut self) -> Result<u8, InputError> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Err(InputError::Eof),
                Ok(_) => return Ok(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(InputError::Io(e)),
            }
        }
    }
}

impl<R: Read> RuneSource for RuneReader<R> {
    fn next_rune(&mut self) -> Result<char, InputError> {
        let lead = self.next_byte()?;
        let width = utf8_width(lead);
        if width == 1 {
            return Ok(char::from(lead));
        }
        if width == 0 {
            return Ok(char::REPLACEMENT_CHARACTER);
        }

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            *slot = self.next_byte()?;
        }
        Ok(std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

/// Length of the UTF-8 sequence introduced by `lead`, 0 when it cannot start one.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
