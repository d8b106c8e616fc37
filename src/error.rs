//! Error type for the parts of fzsel that touch the outside world.
//!
//! Matching itself cannot fail; only reading candidates can.

use thiserror::Error;

/// Errors surfaced by the reader and the binary
#[derive(Error, Debug)]
pub enum Error {
    /// Reading the candidate source failed
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),
    /// The input had no non-empty line to select from
    #[error("no candidates: input has no non-empty lines")]
    NoCandidates,
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
