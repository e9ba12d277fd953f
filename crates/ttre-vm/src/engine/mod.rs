//! Runtime engine for matching compiled patterns.
//!
//! The VM performs a depth-first search over the node graph. All per-call
//! state (captures, loop markers, memo table, budgets) lives in the VM,
//! never in the shared `CompiledPattern`.

mod captures;
mod error;
mod memo;
mod options;
mod trace;
mod vm;

#[cfg(test)]
mod captures_tests;

pub use captures::{Captures, Span};
pub use error::RuntimeError;
pub use memo::MemoTable;
pub use options::MatchOptions;
pub use trace::{MemoClear, NoopTracer, PrintTracer, Tracer, Verbosity};
pub use vm::{Limits, VM, VMBuilder};
