use crate::editor::EditBuffer;
use crossterm::{
    cursor::MoveLeft,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Rewrites the whole input line: clear it, print prompt and buffer, then
/// step back to the cursor if it is not at the end.
pub fn repaint<W: Write>(out: &mut W, prompt: &str, buffer: &EditBuffer) -> io::Result<()> {
    queue!(
        out,
        Print('\r'),
        Clear(ClearType::CurrentLine),
        Print(prompt),
        Print(buffer.text())
    )?;

    let back = buffer.width_after_cursor();
    if back > 0 {
        queue!(out, MoveLeft(u16::try_from(back).unwrap_or(u16::MAX)))?;
    }
    out.flush()
}

/// Moves to a fresh line, `\r\n` because raw mode disables output translation.
pub fn newline<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Print("\r\n"))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_after(steps: &[Vec<u8>]) -> vt100::Parser {
        let mut parser = vt100::Parser::new(5, 80, 0);
        for bytes in steps {
            parser.process(bytes);
        }
        parser
    }

    fn rendered(prompt: &str, buffer: &EditBuffer) -> Vec<u8> {
        let mut out = Vec::new();
        repaint(&mut out, prompt, buffer).unwrap();
        out
    }

    #[test]
    fn test_repaint_shows_prompt_and_buffer() {
        let mut buffer = EditBuffer::new();
        buffer.replace("ls -la");
        let parser = screen_after(&[rendered("> ", &buffer)]);
        assert_eq!(parser.screen().contents(), "> ls -la");
        assert_eq!(parser.screen().cursor_position(), (0, 8));
    }

    #[test]
    fn test_repaint_positions_cursor_mid_line() {
        let mut buffer = EditBuffer::new();
        buffer.replace("abcd");
        buffer.move_left();
        buffer.move_left();
        let parser = screen_after(&[rendered("> ", &buffer)]);
        assert_eq!(parser.screen().cursor_position(), (0, 4));
    }

    #[test]
    fn test_repaint_erases_stale_tail() {
        let mut long = EditBuffer::new();
        long.replace("cat notes.txt");
        let mut short = EditBuffer::new();
        short.replace("cat");
        let parser = screen_after(&[rendered("> ", &long), rendered("> ", &short)]);
        assert_eq!(parser.screen().contents(), "> cat");
    }

    #[test]
    fn test_no_cursor_move_at_end_of_line() {
        let mut buffer = EditBuffer::new();
        buffer.replace("pwd");
        let out = String::from_utf8(rendered("> ", &buffer)).unwrap();
        assert!(!out.ends_with('D'));
    }
}
