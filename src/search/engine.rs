use std::fmt::Debug;

use num_traits::Zero;
use tracing::debug;

use super::frontier::Frontier;
use super::path::reconstruct;
use super::snapshot::SearchSnapshot;
use super::{NodeStatus, ParentMap, SearchOutcome};
use crate::errors::SearchError;
use crate::graph::Graph;

/// Traverse the graph from start towards goal, expanding nodes in the
/// order the frontier's discipline dictates. One loop serves all four
/// algorithms - the frontier is the only thing that changes.
pub fn find_path<C>(
    graph: &Graph<C>,
    start: usize,
    goal: usize,
    frontier: Frontier<'_, C>,
) -> Result<SearchOutcome, SearchError>
where
    C: Zero + Ord + Copy + Debug,
{
    find_path_with(graph, start, goal, frontier, |_| {})
}

/// Same as [`find_path`], additionally handing the observer a snapshot
/// at seeding, after every finalized node, and when the goal is extracted.
/// Snapshots arrive in strict chronological order.
pub fn find_path_with<C, F>(
    graph: &Graph<C>,
    start: usize,
    goal: usize,
    mut frontier: Frontier<'_, C>,
    mut observer: F,
) -> Result<SearchOutcome, SearchError>
where
    C: Zero + Ord + Copy + Debug,
    F: FnMut(&SearchSnapshot),
{
    let nodes = graph.number_of_nodes();
    for node in [start, goal] {
        if node >= nodes {
            return Err(SearchError::InvalidNode { node, nodes });
        }
    }

    // Per-run state, owned by this call - independent searches share nothing
    let mut status = vec![NodeStatus::Unseen; nodes];
    let mut dist: Vec<Option<C>> = vec![None; nodes];
    let mut parents = ParentMap::default();

    // Seed the frontier with the start node
    frontier.insert(start);
    status[start] = NodeStatus::Discovered;
    dist[start] = Some(C::zero());
    debug!(start, goal, "search_seeded");
    observer(&SearchSnapshot {
        status: status.clone(),
        parents: parents.clone(),
        current: start,
    });

    while let Some(current) = frontier.extract(&dist) {
        if current == goal {
            // Early exit - the goal stays Discovered in the terminal snapshot
            observer(&SearchSnapshot {
                status: status.clone(),
                parents: parents.clone(),
                current,
            });
            debug!(goal, cost = ?dist[goal], "goal_reached");
            return Ok(SearchOutcome::GoalFound(reconstruct(&parents, start, goal)));
        }

        let here = dist[current].unwrap(); // frontier members always carry a distance

        for &(neighbor, weight) in graph.neighbors(current) {
            if status[neighbor] == NodeStatus::Unseen {
                status[neighbor] = NodeStatus::Discovered;
                frontier.insert(neighbor);
                parents.insert(neighbor, current);
                dist[neighbor] = Some(here + weight);
            } else {
                // Relaxation: a cheaper route lowers the distance whatever
                // the status, the parent from first discovery stands
                let candidate = here + weight;
                if dist[neighbor].is_none_or(|d| candidate < d) {
                    dist[neighbor] = Some(candidate);
                }
            }
        }

        status[current] = NodeStatus::Finalized;
        observer(&SearchSnapshot {
            status: status.clone(),
            parents: parents.clone(),
            current,
        });
    }

    debug!(start, goal, "frontier_exhausted");
    Ok(SearchOutcome::Exhausted)
}
