use unicode_width::UnicodeWidthChar;

/// The line being composed, stored as code points with a cursor index.
///
/// The cursor always sits in `0..=len()`; it is the position the next
/// inserted character will occupy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn insert(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Removes the character before the cursor. Returns false at the start of the line.
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 || self.chars.is_empty() {
            return false;
        }
        self.chars.remove(self.cursor - 1);
        self.cursor -= 1;
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Swaps in `text` wholesale and parks the cursor at the end.
    pub fn replace(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Terminal columns occupied by the text after the cursor.
    pub fn width_after_cursor(&self) -> usize {
        self.chars[self.cursor..]
            .iter()
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn buffer_from(text: &str) -> EditBuffer {
        let mut buffer = EditBuffer::new();
        buffer.replace(text);
        buffer
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut buffer = buffer_from("abc");
        while buffer.move_left() {}
        assert!(!buffer.delete_before_cursor());
        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_backspace_on_empty_buffer() {
        let mut buffer = EditBuffer::new();
        assert!(!buffer.delete_before_cursor());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_insert_in_middle_shifts_tail() {
        let mut buffer = buffer_from("ac");
        buffer.move_left();
        buffer.insert('b');
        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn test_delete_in_middle() {
        let mut buffer = buffer_from("abc");
        buffer.move_left();
        assert!(buffer.delete_before_cursor());
        assert_eq!(buffer.text(), "ac");
        assert_eq!(buffer.cursor(), 1);
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut buffer = buffer_from("ab");
        assert!(!buffer.move_right());
        assert!(buffer.move_left());
        assert!(buffer.move_left());
        assert!(!buffer.move_left());
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_width_after_cursor_counts_wide_chars() {
        let mut buffer = buffer_from("a日本");
        buffer.move_left();
        buffer.move_left();
        assert_eq!(buffer.width_after_cursor(), 4);
    }

    proptest! {
        #[test]
        fn prop_insertions_preserve_order(text in "\\PC{0,40}") {
            let mut buffer = EditBuffer::new();
            for ch in text.chars() {
                buffer.insert(ch);
            }
            prop_assert_eq!(buffer.len(), text.chars().count());
            prop_assert_eq!(buffer.text(), text);
        }

        #[test]
        fn prop_insert_then_delete_restores(text in "[a-z]{0,20}", back in 0usize..25, ch in any::<char>()) {
            let mut buffer = buffer_from(&text);
            for _ in 0..back {
                buffer.move_left();
            }
            let before = buffer.clone();
            buffer.insert(ch);
            prop_assert_eq!(buffer.len(), before.len() + 1);
            prop_assert!(buffer.delete_before_cursor());
            prop_assert_eq!(buffer, before);
        }

        #[test]
        fn prop_cursor_stays_in_bounds(text in "[a-z]{0,10}", moves in proptest::collection::vec(0u8..4, 0..40)) {
            let mut buffer = buffer_from(&text);
            for m in moves {
                match m {
                    0 => { buffer.move_left(); }
                    1 => { buffer.move_right(); }
                    2 => { buffer.delete_before_cursor(); }
                    _ => buffer.insert('x'),
                }
                prop_assert!(buffer.cursor() <= buffer.len());
            }
        }
    }
}
