//! ttre compiler: pattern text to node graph.
//!
//! - `parser` - recursive descent over the pattern, building graph fragments
//! - `error` - syntax error kinds with caret rendering
//! - `diagnostics` - annotated-snippet rendering of compile errors
//! - `verify` - debug-only checks of the compiled graph's shape

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod diagnostics;
mod error;
mod parser;
mod verify;

#[cfg(test)]
mod diagnostics_tests;
#[cfg(test)]
mod error_tests;

use log::debug;

pub use diagnostics::ErrorPrinter;
pub use error::{CompileError, Result, SyntaxError, SyntaxErrorKind};
pub use parser::{MAX_DEPTH, MAX_NODES, MAX_REPETITION};
pub use ttre_core::CompiledPattern;

/// Compile `pattern` into a matchable graph.
///
/// Fails with [`CompileError::EmptyPattern`] for `""` and with
/// [`CompileError::Syntax`] when the pattern does not parse.
pub fn compile(pattern: &str) -> Result<CompiledPattern> {
    match parser::Parser::new(pattern).parse() {
        Ok(compiled) => {
            debug!(
                "compiled {pattern:?}: {} nodes, {} groups",
                compiled.graph().len(),
                compiled.group_count()
            );
            Ok(compiled)
        }
        Err(err) => {
            debug!("rejected {pattern:?}: {err}");
            Err(err)
        }
    }
}
