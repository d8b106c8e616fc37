//! This module contains the filter coordinator: prefilter, score, rank.
use std::borrow::Cow;
use std::fmt;

use crate::fuzzy_matcher::bonus::BonusTable;
use crate::fuzzy_matcher::scratch::Scratch;
use crate::fuzzy_matcher::util::has_subsequence;
use crate::fuzzy_matcher::{IndexType, SCORE_MIN, Score, fzy};

#[derive(Debug, Clone, Copy)]
struct MatchedItem {
    index: usize,
    score: Score,
    /// Which `pattern_len`-sized chunk of the positions pool belongs to this item
    slot: usize,
}

//==============================================================================
/// Ranks a list of candidate lines against a pattern.
///
/// Meant to be called once per query change. All working memory (the DP
/// scratch, the positions pool and the match list) is owned by the matcher
/// and reused from one call to the next, growing as needed and never
/// shrinking. One matcher serves one caller at a time; concurrent filtering
/// needs one matcher per thread.
#[derive(Default)]
pub struct Matcher {
    table: BonusTable,
    scratch: Scratch,
    positions: Vec<IndexType>,
    matches: Vec<MatchedItem>,
}

impl Matcher {
    /// Creates a matcher with empty buffers
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters and ranks `candidates` against `pattern`.
    ///
    /// Candidates that do not contain the pattern as a case-insensitive
    /// subsequence are dropped. The rest are sorted by descending score; equal
    /// scores keep their input order. An empty pattern returns every
    /// candidate in input order with a score of [`SCORE_MIN`] and no positions.
    ///
    /// The returned list borrows the matcher, so it is gone by the next call.
    pub fn filter<'a, C: AsRef<[u8]>>(&'a mut self, pattern: &[u8], candidates: &'a [C]) -> MatchList<'a, C> {
        let pattern_len = pattern.len();
        trace!("matcher start, pattern len: {}, total: {}", pattern_len, candidates.len());

        self.matches.clear();
        let pool_len = pattern_len * candidates.len();
        if pool_len > self.positions.capacity() {
            debug!("positions pool: growing from {} to {}", self.positions.capacity(), pool_len);
        }
        self.positions.resize(pool_len, 0);

        for (index, candidate) in candidates.iter().enumerate() {
            let candidate = candidate.as_ref();
            if !has_subsequence(pattern, candidate) {
                continue;
            }

            let slot = self.matches.len();
            let score = if pattern.is_empty() {
                SCORE_MIN
            } else {
                let positions = &mut self.positions[slot * pattern_len..(slot + 1) * pattern_len];
                fzy::score(pattern, candidate, &self.table, &mut self.scratch, positions)
            };
            self.matches.push(MatchedItem { index, score, slot });
        }

        if !pattern.is_empty() {
            // stable: ties keep input order
            self.matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        }
        trace!("matcher stop, total matched: {}", self.matches.len());

        MatchList {
            matches: &self.matches,
            positions: &self.positions,
            pattern_len,
            candidates,
        }
    }
}

//==============================================================================
/// One ranked candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    /// The candidate line
    pub item: &'a [u8],
    /// Position of the candidate in the input list
    pub index: usize,
    /// Relevance, higher is better
    pub score: Score,
    /// Candidate byte index matched by each pattern byte, strictly increasing
    pub positions: &'a [IndexType],
}

impl Match<'_> {
    /// The candidate as text, replacing invalid UTF-8
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.item)
    }
}

/// Ranked result of [`Matcher::filter`]
pub struct MatchList<'a, C> {
    matches: &'a [MatchedItem],
    positions: &'a [IndexType],
    pattern_len: usize,
    candidates: &'a [C],
}

impl<C> Clone for MatchList<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for MatchList<'_, C> {}

impl<'a, C: AsRef<[u8]>> MatchList<'a, C> {
    /// Number of matched candidates
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True when nothing matched
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The match at `rank` (0 is the best)
    pub fn get(&self, rank: usize) -> Option<Match<'a>> {
        let matched = self.matches.get(rank)?;
        let start = matched.slot * self.pattern_len;
        Some(Match {
            item: self.candidates[matched.index].as_ref(),
            index: matched.index,
            score: matched.score,
            positions: &self.positions[start..start + self.pattern_len],
        })
    }

    /// Iterates over the matches, best first
    pub fn iter(&self) -> impl Iterator<Item = Match<'a>> + '_ {
        (0..self.len()).filter_map(|rank| self.get(rank))
    }
}

impl<C: AsRef<[u8]>> fmt::Debug for MatchList<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
