use super::input::{InputError, RuneSource};

const ESC: char = '\u{1b}';
const ETX: char = '\u{3}';
const BS: char = '\u{8}';
const DEL: char = '\u{7f}';

/// One decoded keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Printable(char),
    Backspace,
    Tab,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Submit,
    /// Ctrl-C while the terminal delivers it as a plain byte
    Interrupt,
    Unknown,
}

impl InputEvent {
    /// Reads one keystroke from `source`.
    ///
    /// An escape is followed by exactly two more reads; anything other than
    /// `ESC [ A..D` is discarded as `Unknown`.
    pub fn decode<S: RuneSource + ?Sized>(source: &mut S) -> Result<Self, InputError> {
        let rune = source.next_rune()?;
        let event = match rune {
            '\r' | '\n' => InputEvent::Submit,
            DEL | BS => InputEvent::Backspace,
            '\t' => InputEvent::Tab,
            ETX => InputEvent::Interrupt,
            '\0' => InputEvent::Unknown,
            ESC => {
                if source.next_rune()? != '[' {
                    return Ok(InputEvent::Unknown);
                }
                match source.next_rune()? {
                    'A' => InputEvent::ArrowUp,
                    'B' => InputEvent::ArrowDown,
                    'C' => InputEvent::ArrowRight,
                    'D' => InputEvent::ArrowLeft,
                    _ => InputEvent::Unknown,
                }
            }
            other => InputEvent::Printable(other),
        };
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::input::RuneReader;

    fn decode_all(bytes: &[u8]) -> Vec<InputEvent> {
        let mut reader = RuneReader::new(bytes);
        let mut events = Vec::new();
        while let Ok(event) = InputEvent::decode(&mut reader) {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_arrow_sequences() {
        assert_eq!(
            decode_all(b"\x1b[A\x1b[B\x1b[C\x1b[D"),
            vec![
                InputEvent::ArrowUp,
                InputEvent::ArrowDown,
                InputEvent::ArrowRight,
                InputEvent::ArrowLeft,
            ]
        );
    }

    #[test]
    fn test_both_backspace_codes() {
        assert_eq!(
            decode_all(b"\x7f\x08"),
            vec![InputEvent::Backspace, InputEvent::Backspace]
        );
    }

    #[test]
    fn test_esc_without_bracket_discards_second_rune() {
        assert_eq!(
            decode_all(b"\x1bxa"),
            vec![InputEvent::Unknown, InputEvent::Printable('a')]
        );
    }

    #[test]
    fn test_unrecognized_csi_final_is_unknown() {
        assert_eq!(
            decode_all(b"\x1b[Hz"),
            vec![InputEvent::Unknown, InputEvent::Printable('z')]
        );
    }

    #[test]
    fn test_control_codes() {
        assert_eq!(
            decode_all(b"\t\r\n\x00\x03"),
            vec![
                InputEvent::Tab,
                InputEvent::Submit,
                InputEvent::Submit,
                InputEvent::Unknown,
                InputEvent::Interrupt,
            ]
        );
    }

    #[test]
    fn test_other_control_bytes_are_printable() {
        assert_eq!(decode_all(b"\x01"), vec![InputEvent::Printable('\u{1}')]);
    }

    #[test]
    fn test_escape_cut_short_reports_eof() {
        let mut reader = RuneReader::new(&b"\x1b["[..]);
        assert!(matches!(
            InputEvent::decode(&mut reader),
            Err(InputError::Eof)
        ));
    }
}
