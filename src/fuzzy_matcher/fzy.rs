//! Fuzzy matching algorithm based on fzy by John Hawthorn.
//! https://github.com/jhawthorn/fzy
//!
//! Fuzzy matching is treated as an alignment problem solved with dynamic
//! programming over a `pattern x candidate` grid, using two matrices:
//! - `continuation[i][j]`: the best score of an alignment that matches
//!   pattern byte `i` exactly at candidate byte `j`.
//! - `running_best[i][j]`: the best score using the first `i + 1` pattern
//!   bytes and the first `j + 1` candidate bytes.
//!
//! Separating the two lets a run of consecutive matches earn a flat bonus
//! while every skipped candidate byte costs a small gap penalty.
//!
//! # Example:
//! ```
//! use fzsel::fuzzy_matcher::FuzzyMatcher;
//! use fzsel::fuzzy_matcher::fzy::FzyMatcher;
//!
//! let matcher = FzyMatcher::default();
//!
//! assert_eq!(None, matcher.fuzzy_match("abc", "abx"));
//! assert!(matcher.fuzzy_match("axbycz", "abc").is_some());
//!
//! let (_score, indices) = matcher.fuzzy_indices("axbycz", "abc").unwrap();
//! assert_eq!(indices, [0, 2, 4]);
//! ```

use std::cell::RefCell;

use thread_local::ThreadLocal;

use crate::fuzzy_matcher::bonus::BonusTable;
use crate::fuzzy_matcher::scratch::Scratch;
use crate::fuzzy_matcher::util::has_subsequence;
use crate::fuzzy_matcher::{
    FuzzyMatcher, IndexType, SCORE_GAP_INNER, SCORE_GAP_LEADING, SCORE_GAP_TRAILING, SCORE_MATCH_CONSECUTIVE,
    SCORE_MAX, SCORE_MIN, Score,
};

/// The byte assumed to precede the first candidate byte, so a match at the
/// very start is rewarded like one right after a path separator.
const START_OF_LINE: u8 = b'/';

/// Scores `candidate` against `pattern` and fills `positions` with the
/// candidate index matched by each pattern byte.
///
/// The caller must have checked [`has_subsequence`]; `positions` must be
/// exactly `pattern.len()` long. An empty pattern or one longer than the
/// candidate is a caller error and scores [`SCORE_MIN`] without touching
/// `positions`.
pub fn score(
    pattern: &[u8],
    candidate: &[u8],
    table: &BonusTable,
    scratch: &mut Scratch,
    positions: &mut [IndexType],
) -> Score {
    let n = pattern.len();
    let m = candidate.len();
    debug_assert_eq!(positions.len(), n);
    debug_assert!(n > 0 && n <= m, "fzy::score called with pattern len {n} and candidate len {m}");

    if n == 0 || n > m {
        return SCORE_MIN;
    }

    // Same length and a subsequence: must be equal ignoring case.
    if n == m {
        for (i, pos) in positions.iter_mut().enumerate() {
            *pos = i;
        }
        return SCORE_MAX;
    }

    scratch.reset(n, m);
    let Scratch {
        bonus,
        continuation: d,
        running_best: mm,
    } = scratch;

    let mut prev = START_OF_LINE;
    for (b, &ch) in bonus.iter_mut().zip(candidate) {
        *b = table.bonus(prev, ch);
        prev = ch;
    }

    for i in 0..n {
        let gap = if i == n - 1 { SCORE_GAP_TRAILING } else { SCORE_GAP_INNER };
        let mut best = SCORE_MIN;

        for j in 0..m {
            if pattern[i].eq_ignore_ascii_case(&candidate[j]) {
                let score = if i == 0 {
                    (j as Score) * SCORE_GAP_LEADING + bonus[j]
                } else if j > 0 {
                    Score::max(
                        mm[(i - 1, j - 1)] + bonus[j],
                        d[(i - 1, j - 1)] + SCORE_MATCH_CONSECUTIVE,
                    )
                } else {
                    SCORE_MIN
                };
                d[(i, j)] = score;
                best = Score::max(score, best + gap);
            } else {
                d[(i, j)] = SCORE_MIN;
                best += gap;
            }
            mm[(i, j)] = best;
        }
    }

    // Walk back from the last pattern byte. A consecutive match forces the
    // previous pattern byte onto the column right before it.
    let mut match_required = false;
    let mut end = m;
    for i in (0..n).rev() {
        for j in (0..end).rev() {
            let cont = d[(i, j)];
            if cont != SCORE_MIN && (match_required || cont == mm[(i, j)]) {
                match_required = i > 0 && j > 0 && mm[(i, j)] == d[(i - 1, j - 1)] + SCORE_MATCH_CONSECUTIVE;
                positions[i] = j;
                end = j;
                break;
            }
        }
    }

    mm[(n - 1, m - 1)]
}

/// Fuzzy matcher using the fzy algorithm, one choice at a time.
///
/// Scratch buffers are kept per thread, so a shared matcher can be used from
/// several threads; use [`crate::Matcher`] to rank a whole list.
#[derive(Debug, Default)]
pub struct FzyMatcher {
    table: BonusTable,
    scratch: ThreadLocal<RefCell<Scratch>>,
}

impl FuzzyMatcher for FzyMatcher {
    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(Score, Vec<IndexType>)> {
        let (choice, pattern) = (choice.as_bytes(), pattern.as_bytes());

        if !has_subsequence(pattern, choice) {
            return None;
        }
        if pattern.is_empty() {
            return Some((SCORE_MIN, Vec::new()));
        }

        let mut scratch = self.scratch.get_or(|| RefCell::new(Scratch::new())).borrow_mut();
        let mut positions = vec![0; pattern.len()];
        let score = score(pattern, choice, &self.table, &mut scratch, &mut positions);

        Some((score, positions))
    }
}

/// Fuzzy match `choice` against `pattern`, returning the score and matched
/// byte indices.
pub fn fuzzy_indices(choice: &str, pattern: &str) -> Option<(Score, Vec<IndexType>)> {
    FzyMatcher::default().fuzzy_indices(choice, pattern)
}

/// Fuzzy match `choice` against `pattern`, returning only the score.
pub fn fuzzy_match(choice: &str, pattern: &str) -> Option<Score> {
    FzyMatcher::default().fuzzy_match(choice, pattern)
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::fuzzy_matcher::util::wrap_matches;
    use crate::fuzzy_matcher::{SCORE_MATCH_SLASH, SCORE_MATCH_WORD};

    const EPS: Score = 1e-9;

    fn wrap_fuzzy_match(choice: &str, pattern: &str) -> Option<String> {
        let (_score, indices) = fuzzy_indices(choice, pattern)?;
        String::from_utf8(wrap_matches(choice.as_bytes(), &indices)).ok()
    }

    fn assert_order(pattern: &str, choices: &[&str]) {
        let scores: Vec<Score> = choices
            .iter()
            .map(|choice| fuzzy_match(choice, pattern).unwrap())
            .collect();
        for pair in scores.windows(2).zip(choices.windows(2)) {
            let (s, c) = pair;
            assert!(s[0] > s[1], "{:?}({}) should rank above {:?}({})", c[0], s[0], c[1], s[1]);
        }
    }

    #[test]
    fn test_no_match() {
        assert_eq!(None, fuzzy_match("abc", "abx"));
        assert_eq!(None, fuzzy_match("abc", "d"));
        assert_eq!(None, fuzzy_match("", "a"));
        assert_eq!(None, fuzzy_match("ab", "abc"));
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(Some((SCORE_MIN, vec![])), fuzzy_indices("abc", ""));
        assert_eq!(Some((SCORE_MIN, vec![])), fuzzy_indices("", ""));
    }

    #[test]
    fn test_exact_match_is_max() {
        assert_eq!(Some((SCORE_MAX, vec![0, 1, 2])), fuzzy_indices("abc", "abc"));
        assert_eq!(Some((SCORE_MAX, vec![0, 1, 2])), fuzzy_indices("aBc", "AbC"));
    }

    #[test]
    fn test_match_indices() {
        assert_eq!("[a]x[b]y[c]z", &wrap_fuzzy_match("axbycz", "abc").unwrap());
        assert_eq!("a[x]b[y]c[z]", &wrap_fuzzy_match("axbycz", "xyz").unwrap());
        assert_eq!("foo/[b]a[r]", &wrap_fuzzy_match("foo/bar", "br").unwrap());
    }

    #[test]
    fn test_single_char_scores() {
        // Start of line counts as right after a slash.
        let (score, pos) = fuzzy_indices("ab", "a").unwrap();
        assert_eq!(pos, [0]);
        assert!((score - (SCORE_MATCH_SLASH + SCORE_GAP_TRAILING)).abs() < EPS);

        // Leading gap of two, no bonus, nothing trailing.
        let (score, pos) = fuzzy_indices("xxa", "a").unwrap();
        assert_eq!(pos, [2]);
        assert!((score - 2.0 * SCORE_GAP_LEADING).abs() < EPS);
    }

    #[test]
    fn test_word_bonus_value() {
        let (score, pos) = fuzzy_indices("x_b", "b").unwrap();
        assert_eq!(pos, [2]);
        assert!((score - (2.0 * SCORE_GAP_LEADING + SCORE_MATCH_WORD)).abs() < EPS);
    }

    #[test]
    fn test_backtrack_prefers_consecutive_run() {
        // "bar" is consecutive at the end; the lone 'b' in front must not be used.
        assert_eq!("b_foo_[b][a][r]", &wrap_fuzzy_match("b_foo_bar", "bar").unwrap());
        assert_eq!("[f][o][o]bar", &wrap_fuzzy_match("foobar", "foo").unwrap());
    }

    #[test]
    fn test_backtrack_picks_rightmost_on_ties() {
        // Both 'a's are mid-token with nothing gained by the earlier one.
        assert_eq!("xax[a]", &wrap_fuzzy_match("xaxa", "a").unwrap());
    }

    #[test]
    fn test_positions_are_increasing() {
        for (choice, pattern) in [
            ("src/fuzzy_matcher/fzy.rs", "fzy"),
            ("aaaaaaaa", "aaa"),
            ("a/b/c/abc", "abc"),
            ("FooBarBazQux", "fbq"),
        ] {
            let (_, pos) = fuzzy_indices(choice, pattern).unwrap();
            assert_eq!(pos.len(), pattern.len());
            assert!(pos.windows(2).all(|w| w[0] < w[1]), "{choice}/{pattern}: {pos:?}");
            for (p, &i) in pattern.bytes().zip(&pos) {
                assert!(p.eq_ignore_ascii_case(&choice.as_bytes()[i]));
            }
        }
    }

    #[test]
    fn test_consecutive_bonus() {
        let consecutive = fuzzy_match("foobar", "foo").unwrap();
        let scattered = fuzzy_match("fxoxo", "foo").unwrap();
        assert!(consecutive > scattered, "consecutive={consecutive} > scattered={scattered}");
    }

    #[test]
    fn test_word_boundary_bonus() {
        let boundary = fuzzy_match("foo_bar_baz", "fbb").unwrap();
        let inner = fuzzy_match("fooobarbaz", "fbb").unwrap();
        assert!(boundary > inner, "boundary={boundary} > inner={inner}");
    }

    #[test]
    fn test_path_separator_bonus() {
        let path = fuzzy_match("src/lib/foo.rs", "foo").unwrap();
        let no_path = fuzzy_match("srcxlibxfoo.rs", "foo").unwrap();
        assert!(path > no_path, "path={path} > no_path={no_path}");
    }

    #[test]
    fn test_camel_case_bonus() {
        let camel = fuzzy_match("FooBarBaz", "fbb").unwrap();
        let no_camel = fuzzy_match("foobarbaz", "fbb").unwrap();
        assert!(camel > no_camel, "camel={camel} > no_camel={no_camel}");
    }

    #[test]
    fn test_match_quality_ordering() {
        // Initials
        assert_order("ab", &["ab", "aoo_boo", "acb"]);
        // Shorter is better
        assert_order("ma", &["map", "many", "maximum"]);
        // Fewer gaps
        assert_order("fbr", &["fubar", "foobar"]);
    }

    #[test]
    fn test_scratch_reuse_gives_same_result() {
        let table = BonusTable::new();
        let mut scratch = Scratch::new();
        let mut first = [0; 3];
        let mut second = [0; 3];

        let a = score(b"abc", b"xxaxxbxxcxx/long/tail/to/grow/buffers", &table, &mut scratch, &mut first);
        let _ = score(b"abc", b"a_b_c_", &table, &mut scratch, &mut second);
        let b = score(b"abc", b"xxaxxbxxcxx/long/tail/to/grow/buffers", &table, &mut scratch, &mut second);

        assert_eq!(a, b);
        assert_eq!(first, second);
    }
}
