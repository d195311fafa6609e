/// Single-line text buffer with a character cursor.
///
/// Cursor positions are in characters, not bytes, so multi-byte input edits
/// stay well-formed.
#[derive(Debug, Default, Clone)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.cursor_byte_position();
        self.content.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_char_at_cursor();
            true
        } else {
            false
        }
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.cursor < self.len() {
            self.remove_char_at_cursor();
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, value: &str) {
        self.content = value.to_string();
        self.cursor = self.len();
    }

    fn remove_char_at_cursor(&mut self) {
        let byte_pos = self.cursor_byte_position();
        let next_byte_pos = self.content[byte_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| byte_pos + i)
            .unwrap_or(self.content.len());
        self.content.drain(byte_pos..next_byte_pos);
    }

    fn cursor_byte_position(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_delete() {
        let mut buf = InputBuffer::new();
        for c in "acme".chars() {
            buf.insert(c);
        }
        assert_eq!(buf.content(), "acme");

        buf.delete_back();
        assert_eq!(buf.content(), "acm");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn edits_in_the_middle() {
        let mut buf = InputBuffer::new();
        buf.set("acm");
        buf.move_start();
        buf.move_right();
        buf.insert('x');
        assert_eq!(buf.content(), "axcm");

        buf.delete_forward();
        assert_eq!(buf.content(), "axm");
    }

    #[test]
    fn multibyte_input() {
        let mut buf = InputBuffer::new();
        buf.insert('é');
        buf.insert('t');
        buf.insert('é');
        assert_eq!(buf.len(), 3);

        buf.move_left();
        buf.delete_back();
        assert_eq!(buf.content(), "éé");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut buf = InputBuffer::new();
        buf.move_left();
        assert_eq!(buf.cursor(), 0);
        assert!(!buf.delete_back());

        buf.set("ab");
        buf.move_right();
        assert_eq!(buf.cursor(), 2);
        assert!(!buf.delete_forward());
    }
}
