//! Which part of the ranked list is visible, and which entry is current.
use std::ops::Range;

/// A window of `height` rows over a ranked list, plus the current entry.
///
/// `anchor` is the rank shown on the first row. Navigation keeps
/// `anchor <= current < anchor + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    anchor: usize,
    current: usize,
    height: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Selection {
    /// Creates a selection showing `height` rows (at least one)
    pub fn new(height: usize) -> Self {
        Self {
            anchor: 0,
            current: 0,
            height: height.max(1),
        }
    }

    /// Rank of the first visible row
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Rank of the current entry
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of visible rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Back to the top; call after every re-filter
    pub fn reset(&mut self) {
        self.anchor = 0;
        self.current = 0;
    }

    /// The current entry, if the list of `count` entries has one
    pub fn selected(&self, count: usize) -> Option<usize> {
        (self.current < count).then_some(self.current)
    }

    /// Selects the next entry, wrapping to the top
    pub fn next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.current = if self.current + 1 >= count { 0 } else { self.current + 1 };
        self.follow();
    }

    /// Selects the previous entry, wrapping to the bottom
    pub fn previous(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.current = if self.current == 0 || self.current >= count {
            count - 1
        } else {
            self.current - 1
        };
        self.follow();
    }

    /// Makes the entry on visible `row` current; returns its rank
    pub fn hover(&mut self, row: usize, count: usize) -> Option<usize> {
        let index = self.anchor + row;
        if row < self.height && index < count {
            self.current = index;
            Some(index)
        } else {
            None
        }
    }

    /// Ranks shown for a list of `count` entries
    pub fn visible(&self, count: usize) -> Range<usize> {
        let start = self.anchor.min(count);
        start..(start + self.height).min(count)
    }

    fn follow(&mut self) {
        if self.current >= self.anchor + self.height {
            self.anchor = self.current + 1 - self.height;
        }
        if self.current < self.anchor {
            self.anchor = self.current;
        }
        debug!("Scrolled to {} (anchor {})", self.current, self.anchor);
    }
}
