//! Graph configuration options.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Allow several edges between the same endpoints, told apart by `EdgeKey::name`.
    pub multigraph: bool,
    pub directed: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            multigraph: false,
            directed: true,
        }
    }
}
