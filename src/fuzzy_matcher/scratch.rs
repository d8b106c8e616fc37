//! Working memory for the alignment DP.
//!
//! Buffers are sized once per candidate, before any cell is read, and only
//! ever grow: shrinking the logical size keeps the allocation around for the
//! next, possibly longer, candidate.

use std::ops::{Index, IndexMut};

use crate::fuzzy_matcher::{SCORE_MIN, Score};

/// Row-major `rows x cols` matrix of scores
#[derive(Debug, Default, Clone)]
pub struct ScoreMatrix {
    data: Vec<Score>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    /// Sets the logical shape to `rows x cols`.
    ///
    /// Cell contents are unspecified afterwards; callers write every cell
    /// before reading it.
    pub fn reset(&mut self, rows: usize, cols: usize) {
        let len = rows * cols;
        if len > self.data.capacity() {
            debug!("score matrix: growing from {} to {} cells", self.data.capacity(), len);
        }
        self.data.resize(len, SCORE_MIN);
        self.rows = rows;
        self.cols = cols;
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells the backing allocation can hold without growing
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[Score] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }
}

impl Index<(usize, usize)> for ScoreMatrix {
    type Output = Score;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Score {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for ScoreMatrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Score {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

/// Per-engine scratch state: bonus vector and the two DP matrices.
///
/// `continuation[(i, j)]` is the best score of an alignment that matches
/// pattern byte `i` exactly at candidate byte `j`; `running_best[(i, j)]` is
/// the best score for `pattern[..=i]` within `candidate[..=j]`.
#[derive(Debug, Default, Clone)]
pub struct Scratch {
    pub(crate) bonus: Vec<Score>,
    pub(crate) continuation: ScoreMatrix,
    pub(crate) running_best: ScoreMatrix,
}

impl Scratch {
    /// Creates empty scratch buffers; they grow on first use
    pub fn new() -> Self {
        Self::default()
    }

    /// Resizes all buffers for a `pattern_len x candidate_len` problem
    pub(crate) fn reset(&mut self, pattern_len: usize, candidate_len: usize) {
        self.bonus.resize(candidate_len, 0.0);
        self.continuation.reset(pattern_len, candidate_len);
        self.running_best.reset(pattern_len, candidate_len);
    }

    /// The continuation matrix of the last scored candidate
    pub fn continuation(&self) -> &ScoreMatrix {
        &self.continuation
    }

    /// The running-best matrix of the last scored candidate
    pub fn running_best(&self) -> &ScoreMatrix {
        &self.running_best
    }
}
