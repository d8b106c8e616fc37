//! Common imports for using fzsel as a library
pub use crate::error::{Error, Result};
pub use crate::fuzzy_matcher::FuzzyMatcher;
pub use crate::fuzzy_matcher::fzy::FzyMatcher;
pub use crate::fuzzy_matcher::util::wrap_matches;
pub use crate::fuzzy_matcher::{SCORE_MAX, SCORE_MIN, Score};
pub use crate::matcher::{Match, MatchList, Matcher};
pub use crate::options::{FzselOptions, FzselOptionsBuilder};
pub use crate::query::{EditOp, Motion, Query};
pub use crate::reader::{ItemReader, Items};
pub use crate::selection::Selection;
