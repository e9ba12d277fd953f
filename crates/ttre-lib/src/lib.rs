//! ttre: regular expressions matched by memoized backtracking.
//!
//! # Example
//!
//! ```
//! use ttre_lib::{MatchOptions, Regex};
//!
//! let re = Regex::new("(a|b)\\1").expect("valid pattern");
//! let caps = re.captures("xbb", MatchOptions::SEARCH).expect("within limits");
//! assert_eq!(caps.text("xbb", 0), Some("bb"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod regex;

#[cfg(test)]
mod properties_tests;

pub use regex::{Matches, Regex};

pub use ttre_compiler::{CompileError, ErrorPrinter, SyntaxError, SyntaxErrorKind, compile};
pub use ttre_core::{Colors, CompiledPattern, GraphPrinter};
pub use ttre_vm::{
    Captures, Limits, MatchOptions, NoopTracer, PrintTracer, RuntimeError, Span, Tracer, VM,
    Verbosity,
};

/// Anything that can go wrong between pattern text and a match result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Result type for compile-and-match operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Compile `pattern` and search `text` once.
///
/// Returns the whole-match span, or `None` when nothing matches.
pub fn find(pattern: &str, text: &str) -> Result<Option<Span>> {
    let re = Regex::new(pattern)?;
    Ok(re.captures(text, MatchOptions::SEARCH)?.span())
}
