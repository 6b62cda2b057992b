pub mod errors;
pub mod geometry;
pub mod graph;
pub mod search;

mod collections;

pub use errors::SearchError;
pub use graph::Graph;
pub use search::{
    Frontier, NodeStatus, SearchOutcome, SearchSnapshot, find_path, find_path_with,
};
