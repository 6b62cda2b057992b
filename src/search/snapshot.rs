use super::{NodeStatus, ParentMap};

/// Immutable view of the search state, handed to the observer in
/// chronological order: once at seeding, once per finalized node, and
/// once more when the goal is extracted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchSnapshot {
    /// Visitation state for every node in the graph
    pub status: Vec<NodeStatus>,
    /// Parent links recorded so far
    pub parents: ParentMap,
    /// The node the engine just processed (or seeded)
    pub current: usize,
}
