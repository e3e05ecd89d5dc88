#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A negative cut value was found but no graph edge crosses the same cut. This means the
    /// feasible tree or its cut values are corrupt; it cannot happen for valid input.
    #[error("no entering edge crosses the cut of tree edge {v} -- {w}")]
    NoEnterEdge { v: String, w: String },

    #[error("tree edge {v} -- {w} has no matching graph edge")]
    MissingGraphEdge { v: String, w: String },

    #[error("graph contains a cycle through {}", nodes.join(", "))]
    Cycle { nodes: Vec<String> },

    #[error("edge {v} -> {w} has minlen 0; minlen must be at least 1")]
    InvalidMinlen { v: String, w: String },

    #[error("edge {v} -> {w} has weight {weight}; weight must be finite and non-negative")]
    InvalidWeight { v: String, w: String, weight: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
