//! Errors that can occur during matching.

/// A match call that could not run to completion.
///
/// Distinct from "no match", which is an empty `Captures`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("buffer overrun detected: start offset {offset} exceeds text length {len}")]
    BufferOverrun { offset: usize, len: usize },

    #[error("start offset {0} is not on a character boundary")]
    NotCharBoundary(usize),

    /// Step budget exhausted.
    #[error("backtrack limit exceeded ({0} steps)")]
    BacktrackLimit(u64),

    /// Depth budget exhausted.
    #[error("recursion depth limit exceeded ({0})")]
    RecursionDepth(u32),
}
