//! Label types carried by a graph that is being ranked.
//!
//! Callers usually embed a rank pass in a larger layout pipeline and copy `NodeLabel::rank`
//! out afterwards.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which ranking algorithm [`crate::rank::rank`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ranker {
    /// Longest path, feasible tree, then simplex pivots until optimal.
    #[default]
    NetworkSimplex,
    /// Longest path followed by feasible-tree tightening; feasible but not optimal.
    TightTree,
    /// Longest path only.
    LongestPath,
    /// Leave existing ranks untouched.
    None,
}

impl FromStr for Ranker {
    type Err = std::convert::Infallible;

    /// Unknown names fall back to [`Ranker::NetworkSimplex`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "tight-tree" => Ranker::TightTree,
            "longest-path" => Ranker::LongestPath,
            "none" => Ranker::None,
            _ => Ranker::NetworkSimplex,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GraphLabel {
    pub ranker: Ranker,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeLabel {
    pub rank: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeLabel {
    /// Minimum `rank(w) - rank(v)` for the edge `v -> w`.
    pub minlen: usize,
    /// Cost multiplier for the edge's span.
    pub weight: f64,
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self {
            minlen: 1,
            weight: 1.0,
        }
    }
}
