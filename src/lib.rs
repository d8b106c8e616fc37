//! fzsel is a fuzzy line selector library for Rust.
//!
//! It ranks short lines of text against a typed pattern the way fzy does:
//! a cheap subsequence test drops the lines that cannot match, a
//! bonus-weighted alignment scores the rest and recovers which bytes matched
//! (for highlighting), and the result is sorted best first. All working
//! memory lives in a [`Matcher`] and is reused on every keystroke.
//!
//! # Examples
//!
//! ```
//! use fzsel::prelude::*;
//! use std::io::Cursor;
//!
//! let items = ItemReader::default()
//!     .of_read(Cursor::new("foobar\nbar\nfubar\n"))
//!     .unwrap();
//! let lines = items.lines();
//!
//! let mut matcher = Matcher::new();
//! let matches = matcher.filter(b"fbr", &lines);
//!
//! let ranked: Vec<_> = matches.iter().map(|m| m.text().into_owned()).collect();
//! assert_eq!(ranked, ["fubar", "foobar"]);
//! assert_eq!(matches.get(0).unwrap().positions, &[0, 2, 4]);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod error;
pub mod fuzzy_matcher;
mod matcher;
pub mod options;
pub mod prelude;
pub mod query;
pub mod reader;
pub mod selection;

pub use crate::error::{Error, Result};
pub use crate::fuzzy_matcher::{SCORE_MAX, SCORE_MIN, Score};
pub use crate::matcher::{Match, MatchList, Matcher};
pub use crate::options::FzselOptions;
