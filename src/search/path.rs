use super::ParentMap;

/// Construct the path from start to goal by walking the parent links back
/// from the goal. The engine records a parent exactly once, at first
/// discovery, so every chain terminates at the start node.
pub(crate) fn reconstruct(parents: &ParentMap, start: usize, goal: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut current = goal;

    // Trace back from goal to start
    while current != start {
        let parent = parents[&current];
        path.push(parent);
        current = parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
