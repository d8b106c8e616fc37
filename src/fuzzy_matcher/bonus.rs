//! Positional bonuses.
//!
//! A match that lands right after a path separator, a word separator, a dot,
//! or on a lower-to-upper camelCase transition is much more likely to be what
//! the user meant than one in the middle of a token. The table maps the class
//! of the matched byte and the raw value of the byte before it to that bonus.

use crate::fuzzy_matcher::{SCORE_MATCH_CAPITAL, SCORE_MATCH_DOT, SCORE_MATCH_SLASH, SCORE_MATCH_WORD, Score};

/// Byte class of the character being matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Punctuation, whitespace and anything non-ASCII; never gets a bonus
    Other = 0,
    /// `a-z` and `0-9`
    LowerOrDigit = 1,
    /// `A-Z`
    Upper = 2,
}

impl CharClass {
    /// Classifies a single byte
    #[inline]
    pub const fn of(ch: u8) -> Self {
        match ch {
            b'A'..=b'Z' => CharClass::Upper,
            b'a'..=b'z' | b'0'..=b'9' => CharClass::LowerOrDigit,
            _ => CharClass::Other,
        }
    }
}

/// Read-only lookup `(class of matched byte, previous byte) -> bonus`.
///
/// Built once by a `const fn`, then shared by reference; nothing mutates it.
#[derive(Debug, Clone)]
pub struct BonusTable {
    states: [[Score; 256]; 3],
}

impl BonusTable {
    /// Builds the table
    pub const fn new() -> Self {
        let mut states = [[0.0; 256]; 3];

        let mut class = CharClass::LowerOrDigit as usize;
        while class <= CharClass::Upper as usize {
            states[class][b'/' as usize] = SCORE_MATCH_SLASH;
            states[class][b'-' as usize] = SCORE_MATCH_WORD;
            states[class][b'_' as usize] = SCORE_MATCH_WORD;
            states[class][b' ' as usize] = SCORE_MATCH_WORD;
            states[class][b'.' as usize] = SCORE_MATCH_DOT;
            class += 1;
        }

        let mut prev = b'a';
        while prev <= b'z' {
            states[CharClass::Upper as usize][prev as usize] = SCORE_MATCH_CAPITAL;
            prev += 1;
        }

        Self { states }
    }

    /// Bonus for matching `ch` when the byte before it is `prev`
    #[inline]
    pub fn bonus(&self, prev: u8, ch: u8) -> Score {
        self.states[CharClass::of(ch) as usize][prev as usize]
    }
}

impl Default for BonusTable {
    fn default() -> Self {
        Self::new()
    }
}
