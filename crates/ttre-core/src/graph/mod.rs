//! Node graph for compiled patterns.
//!
//! Nodes live in a flat arena and reference each other through `NodeId`
//! handles, so shared exits and loop back-edges need no shared ownership.
//!
//! # Architecture
//!
//! ```text
//! pattern (parser) → Graph + Fragment combinators → compact → CompiledPattern
//! ```
//!
//! Payloads are byte ranges into the pattern text; the graph itself never
//! stores strings.

mod build;
mod compact;
mod copy;
mod dump;
mod node;

#[cfg(test)]
mod build_tests;
#[cfg(test)]
mod compact_tests;

pub use build::{Fragment, Graph};
pub use dump::GraphPrinter;
pub use node::{Node, NodeId, NodeKind, Payload};
