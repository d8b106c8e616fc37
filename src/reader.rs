//! Reader is used for reading candidate lines from a data source (e.g. stdin).
//!
//! The whole source is read into one buffer and split in place; every
//! candidate is a range into that buffer, so lines are never copied.

use std::io::Read;
use std::iter;
use std::ops::Range;

use memchr::memchr_iter;

use crate::error::Result;

const BUFFER_INITIAL_CAPACITY: usize = 65536;

/// Splits a byte source into candidate lines
#[derive(Debug, Clone, Copy)]
pub struct ItemReader {
    line_ending: u8,
}

impl Default for ItemReader {
    fn default() -> Self {
        Self { line_ending: b'\n' }
    }
}

impl ItemReader {
    /// Sets the byte lines are split on
    pub fn line_ending(mut self, line_ending: u8) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Reads `source` to the end and splits it into items
    pub fn of_read<R: Read>(&self, mut source: R) -> Result<Items> {
        let mut buffer = Vec::with_capacity(BUFFER_INITIAL_CAPACITY);
        source.read_to_end(&mut buffer)?;
        Ok(self.of_bytes(buffer))
    }

    /// Splits an in-memory buffer into items, dropping empty lines
    pub fn of_bytes(&self, buffer: Vec<u8>) -> Items {
        let mut lines = Vec::new();
        let mut start = 0;
        for end in memchr_iter(self.line_ending, &buffer).chain(iter::once(buffer.len())) {
            if end > start {
                lines.push(start..end);
            }
            start = end + 1;
        }
        debug!("reader: {} items from {} bytes", lines.len(), buffer.len());

        Items { buffer, lines }
    }
}

/// Candidate lines backed by a single owned buffer
#[derive(Debug, Default, Clone)]
pub struct Items {
    buffer: Vec<u8>,
    lines: Vec<Range<usize>>,
}

impl Items {
    /// Number of candidates
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the source had no non-empty line
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The candidate at `index`
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.lines.get(index).map(|range| &self.buffer[range.clone()])
    }

    /// Iterates over the candidates in input order
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(|range| &self.buffer[range.clone()])
    }

    /// Collects the candidates into a slice list, ready for [`crate::Matcher::filter`]
    pub fn lines(&self) -> Vec<&[u8]> {
        self.iter().collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_split_lines() {
        let items = ItemReader::default().of_bytes(b"awk\nbash\ncsh".to_vec());
        assert_eq!(items.lines(), [b"awk".as_slice(), b"bash", b"csh"]);
    }

    #[test]
    fn test_empty_lines_are_dropped() {
        let items = ItemReader::default().of_bytes(b"\n\na\n\nb\n\n".to_vec());
        assert_eq!(items.lines(), [b"a".as_slice(), b"b"]);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(ItemReader::default().of_bytes(Vec::new()).is_empty());
        assert!(ItemReader::default().of_bytes(b"\n\n\n".to_vec()).is_empty());
    }

    #[test]
    fn test_custom_line_ending() {
        let items = ItemReader::default().line_ending(b'\0').of_bytes(b"a b\0c\nd\0".to_vec());
        assert_eq!(items.lines(), [b"a b".as_slice(), b"c\nd"]);
        assert_eq!(items.get(1), Some(b"c\nd".as_slice()));
        assert_eq!(items.get(2), None);
    }

    #[test]
    fn test_of_read() {
        let items = ItemReader::default().of_read(Cursor::new("x\r\ny\n")).unwrap();
        // only the line ending byte is stripped
        assert_eq!(items.lines(), [b"x\r".as_slice(), b"y"]);
    }
}
