#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for ttre.
//!
//! Two layers:
//! - **Graph layer** (`Graph`): arena of automaton nodes addressed by `NodeId`,
//!   with the fragment combinators the compiler builds patterns from
//! - **Program layer** (`CompiledPattern`): an immutable, compacted graph
//!   bundled with the pattern text its payloads point into

pub mod colors;
pub mod graph;
mod pattern;

pub use colors::Colors;
pub use graph::{Fragment, Graph, GraphPrinter, Node, NodeId, NodeKind, Payload};
pub use pattern::CompiledPattern;
