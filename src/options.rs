//! Configuration options for fzsel.
//!
//! This module provides the `FzselOptions` struct and builder. With the `cli`
//! feature it doubles as the command line parser.

use derive_builder::Builder;

#[cfg(feature = "cli")]
/// Custom value parser for the number of visible rows
fn parse_height(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err(String::from("height must be at least 1")),
        Ok(height) => Ok(height),
        Err(e) => Err(format!("Invalid height {s:?}: {e}")),
    }
}

/// fzsel - fuzzy line selector
///
/// Reads lines from stdin, ranks them against a query with fzy's algorithm
/// and prints the best ones.
#[derive(Builder, Debug, Clone)]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "fzsel", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct FzselOptions {
    //  --- Search ---
    /// Query to rank the input against
    ///
    /// Without it every line is printed in input order.
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Search"))]
    pub filter: Option<String>,

    //  --- Display ---
    /// Number of result lines to print
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "10", value_parser = parse_height, help_heading = "Display")
    )]
    pub height: usize,

    /// Prefix each line with its score and a tab
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Display"))]
    pub show_scores: bool,

    /// Wrap the matched characters of each line in brackets
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Display"))]
    pub show_matches: bool,

    //  --- Scripting ---
    /// Print the query as the first line
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub print_query: bool,

    /// Read input delimited by ASCII NUL characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub read0: bool,

    /// Print output delimited by ASCII NUL characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub print0: bool,

    /// Exit with status 0 when nothing matches
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub exit_0: bool,
}

impl Default for FzselOptions {
    fn default() -> Self {
        Self {
            filter: None,
            height: 10,
            show_scores: false,
            show_matches: false,
            print_query: false,
            read0: false,
            print0: false,
            exit_0: false,
        }
    }
}

impl FzselOptions {
    /// Byte separating input lines
    pub fn line_ending(&self) -> u8 {
        if self.read0 { b'\0' } else { b'\n' }
    }

    /// Terminator written after each output line
    pub fn output_ending(&self) -> &'static str {
        if self.print0 { "\0" } else { "\n" }
    }

    /// The query, empty when none was given
    pub fn query(&self) -> &str {
        self.filter.as_deref().unwrap_or_default()
    }
}
