#![forbid(unsafe_code)]

//! Optimal rank (layer) assignment for layered graph drawing.
//!
//! Given a DAG whose edges carry a minimum span (`minlen`) and an importance (`weight`),
//! [`assign_ranks`] gives every node an integer rank such that every edge spans at least its
//! `minlen` and the total weighted span is minimal. The work is done by the network simplex
//! ranker in [`rank::network_simplex`]; the remaining modules are its collaborators.

pub use strata_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
mod model;
pub mod rank;
pub mod util;

pub use error::{Error, Result};
pub use model::{EdgeLabel, GraphLabel, NodeLabel, Ranker};

/// Ranks every node of `g` in place using the ranker selected by `g.graph().ranker`.
///
/// Ranks are relative: the minimum rank is not normalized to 0 (see
/// [`util::normalize_ranks`]).
pub fn assign_ranks(g: &mut graphlib::Graph<NodeLabel, EdgeLabel, GraphLabel>) -> Result<()> {
    rank::rank(g)
}
