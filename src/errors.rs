use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal id falls outside the graph's dense node range
    #[error("node {node} is outside the graph's node range 0..{nodes}")]
    InvalidNode { node: usize, nodes: usize },
}
