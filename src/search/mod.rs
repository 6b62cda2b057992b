pub mod engine;
pub mod frontier;

mod path;
mod snapshot;

pub use engine::{find_path, find_path_with};
pub use frontier::Frontier;
pub use snapshot::SearchSnapshot;

use crate::collections::FxIndexMap;

/// Per-node visitation state
/// Transitions are monotonic: Unseen -> Discovered -> Finalized
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum NodeStatus {
    /// Never touched by the search
    Unseen,
    /// Sitting in the frontier, awaiting expansion
    Discovered,
    /// Expanded and left behind, never revisited
    Finalized,
}

/// Terminal artifact of a search
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Goal reached, carries the node sequence from start to goal
    GoalFound(Vec<usize>),
    /// Frontier drained without reaching the goal - the goal is unreachable
    Exhausted,
}

/// Map from node to the predecessor recorded at its first discovery
/// The parent is never refreshed by later relaxations
pub type ParentMap = FxIndexMap<usize, usize>;
