//! Matcher for compiled ttre patterns.
//!
//! This crate walks a `CompiledPattern` graph against text with recursive
//! backtracking, pruning repeated failures through a memo table, and
//! reports capture spans.

pub mod engine;

pub use engine::{
    Captures, Limits, MatchOptions, MemoClear, MemoTable, NoopTracer, PrintTracer, RuntimeError,
    Span, Tracer, VM, VMBuilder, Verbosity,
};
