//! Fuzzy matching algorithm and the buffers it works in.
//!
//! The algorithm is fzy's: a cheap subsequence test ([`util::has_subsequence`])
//! rejects most candidates, and the survivors are scored by a bonus-weighted
//! alignment ([`fzy::score`]) that also recovers the matched positions.

/// Bonus lookup for matches on word, path and camelCase boundaries
pub mod bonus;
/// Fzy scoring: alignment DP and backtrack
pub mod fzy;
/// Reusable score matrices and bonus vector
pub mod scratch;
/// Subsequence prefilter and small helpers
pub mod util;

/// Score of one candidate against one pattern.
///
/// Higher is better. Two sentinels exist: [`SCORE_MIN`] for candidates that
/// cannot be aligned and [`SCORE_MAX`] for exact full-length matches.
pub type Score = f64;

pub(crate) type IndexType = usize;

/// The "impossible" sentinel
pub const SCORE_MIN: Score = f64::NEG_INFINITY;
/// The "maximal" sentinel, given to exact full-string matches
pub const SCORE_MAX: Score = f64::INFINITY;

pub(crate) const SCORE_GAP_LEADING: Score = -0.005;
pub(crate) const SCORE_GAP_TRAILING: Score = -0.005;
pub(crate) const SCORE_GAP_INNER: Score = -0.01;

pub(crate) const SCORE_MATCH_CONSECUTIVE: Score = 1.0;
pub(crate) const SCORE_MATCH_SLASH: Score = 0.9;
pub(crate) const SCORE_MATCH_WORD: Score = 0.8;
pub(crate) const SCORE_MATCH_CAPITAL: Score = 0.7;
pub(crate) const SCORE_MATCH_DOT: Score = 0.6;

/// Trait for fuzzy matching a single choice against a pattern
pub trait FuzzyMatcher: Send + Sync {
    /// fuzzy match choice with pattern, and return the score & matched byte indices
    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(Score, Vec<IndexType>)>;

    /// fuzzy match choice with pattern, and return the score of matching
    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<Score> {
        self.fuzzy_indices(choice, pattern).map(|(score, _)| score)
    }
}
