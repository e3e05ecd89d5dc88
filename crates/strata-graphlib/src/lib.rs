#![forbid(unsafe_code)]

//! Graph container APIs used by `strata`.
//!
//! Nodes are addressed by string ids and edges by [`EdgeKey`]. Both live in insertion-ordered
//! arenas, so every traversal in this crate (and in the rankers built on top of it) is
//! deterministic for a given construction order.

mod graph;

pub use graph::alg;
pub use graph::{EdgeKey, Graph, GraphOptions};
