//! The query edit buffer.
//!
//! Every keystroke becomes an [`EditOp`]; applying it to a [`Query`] tells the
//! caller whether the text changed and the list needs filtering again.

/// Where a cursor motion goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// One byte left
    PrevChar,
    /// One byte right
    NextChar,
    /// To the start of the previous word
    PrevWord,
    /// To the end of the next word
    NextWord,
    /// To the beginning of the query
    Start,
    /// To the end of the query
    End,
}

/// An edit on the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Insert a byte at the cursor
    Insert(u8),
    /// Move the cursor
    Move(Motion),
    /// Delete between the cursor and where the motion would take it
    Delete(Motion),
}

/// Query text plus a cursor, both in bytes
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    value: Vec<u8>,
    cursor: usize,
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Self {
            value: value.as_bytes().to_vec(),
            cursor: value.len(),
        }
    }
}

impl Query {
    /// Creates an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// The query text, as fed to [`crate::Matcher::filter`]
    pub fn as_bytes(&self) -> &[u8] {
        &self.value
    }

    /// Cursor position, `0..=len`
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// True when the query is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Applies `op`; returns true when the text changed
    pub fn apply(&mut self, op: EditOp) -> bool {
        match op {
            EditOp::Insert(ch) => {
                self.insert(ch);
                true
            }
            EditOp::Move(motion) => {
                self.move_cursor(motion);
                false
            }
            EditOp::Delete(motion) => self.delete(motion) > 0,
        }
    }

    /// Inserts `ch` at the cursor and moves past it
    pub fn insert(&mut self, ch: u8) {
        self.value.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Moves the cursor
    pub fn move_cursor(&mut self, motion: Motion) {
        self.cursor = self.target(motion);
    }

    /// Deletes the bytes the motion would move over; returns how many
    pub fn delete(&mut self, motion: Motion) -> usize {
        let target = self.target(motion);
        let (start, end) = (self.cursor.min(target), self.cursor.max(target));
        self.value.drain(start..end);
        self.cursor = start;
        end - start
    }

    /// Word bytes are ASCII alphanumerics and `_`
    fn is_word(ch: u8) -> bool {
        ch.is_ascii_alphanumeric() || ch == b'_'
    }

    fn target(&self, motion: Motion) -> usize {
        match motion {
            Motion::PrevChar => self.cursor.saturating_sub(1),
            Motion::NextChar => (self.cursor + 1).min(self.value.len()),
            Motion::Start => 0,
            Motion::End => self.value.len(),
            Motion::PrevWord => {
                let mut pos = self.cursor;
                while pos > 0 && !Self::is_word(self.value[pos - 1]) {
                    pos -= 1;
                }
                while pos > 0 && Self::is_word(self.value[pos - 1]) {
                    pos -= 1;
                }
                pos
            }
            Motion::NextWord => {
                let mut pos = self.cursor;
                while pos < self.value.len() && !Self::is_word(self.value[pos]) {
                    pos += 1;
                }
                while pos < self.value.len() && Self::is_word(self.value[pos]) {
                    pos += 1;
                }
                pos
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    fn query_at(value: &str, cursor: usize) -> Query {
        let mut query = Query::from(value);
        query.cursor = cursor;
        query
    }

    #[test]
    fn test_insert() {
        let mut query = Query::new();
        for ch in b"ac" {
            assert!(query.apply(EditOp::Insert(*ch)));
        }
        query.apply(EditOp::Move(Motion::PrevChar));
        query.apply(EditOp::Insert(b'b'));
        assert_eq!(query.as_bytes(), b"abc");
        assert_eq!(query.cursor(), 2);
    }

    #[test]
    fn test_char_motions_stop_at_bounds() {
        let mut query = query_at("ab", 0);
        query.move_cursor(Motion::PrevChar);
        assert_eq!(query.cursor(), 0);
        query.move_cursor(Motion::End);
        query.move_cursor(Motion::NextChar);
        assert_eq!(query.cursor(), 2);
        query.move_cursor(Motion::Start);
        assert_eq!(query.cursor(), 0);
    }

    #[test]
    fn test_word_motions() {
        let mut query = query_at("foo_bar  baz-qux", 16);
        query.move_cursor(Motion::PrevWord);
        assert_eq!(query.cursor(), 13);
        query.move_cursor(Motion::PrevWord);
        assert_eq!(query.cursor(), 9);
        query.move_cursor(Motion::PrevWord);
        assert_eq!(query.cursor(), 0);

        query.move_cursor(Motion::NextWord);
        assert_eq!(query.cursor(), 7);
        query.move_cursor(Motion::NextWord);
        assert_eq!(query.cursor(), 12);
    }

    #[test]
    fn test_delete_backward_char() {
        let mut query = query_at("abc", 3);
        assert!(query.apply(EditOp::Delete(Motion::PrevChar)));
        assert_eq!(query.as_bytes(), b"ab");
        assert_eq!(query.cursor(), 2);

        let mut query = query_at("abc", 0);
        assert!(!query.apply(EditOp::Delete(Motion::PrevChar)));
        assert_eq!(query.as_bytes(), b"abc");
    }

    #[test]
    fn test_delete_forward_char() {
        let mut query = query_at("abc", 1);
        assert!(query.apply(EditOp::Delete(Motion::NextChar)));
        assert_eq!(query.as_bytes(), b"ac");
        assert_eq!(query.cursor(), 1);
    }

    #[test]
    fn test_delete_word() {
        let mut query = query_at("src/main.rs", 8);
        assert_eq!(query.delete(Motion::PrevWord), 4);
        assert_eq!(query.as_bytes(), b"src/.rs");
        assert_eq!(query.cursor(), 4);

        assert_eq!(query.delete(Motion::NextWord), 3);
        assert_eq!(query.as_bytes(), b"src/");
    }

    #[test]
    fn test_delete_to_start_and_end() {
        let mut query = query_at("hello world", 5);
        query.delete(Motion::End);
        assert_eq!(query.as_bytes(), b"hello");
        query.delete(Motion::Start);
        assert!(query.is_empty());
        assert_eq!(query.cursor(), 0);
    }

    #[test]
    fn test_move_does_not_change_text() {
        let mut query = Query::from("abc");
        assert!(!query.apply(EditOp::Move(Motion::Start)));
        assert_eq!(query.len(), 3);
    }
}
