use std::collections::VecDeque;

use num_traits::Zero;

/// The frontier: discovered-but-unprocessed nodes plus the extraction
/// discipline that decides which node is expanded next. Swapping the
/// discipline is what turns the one engine loop into DFS, BFS, Dijkstra
/// or A*.
///
/// The priority disciplines rank nodes against the engine's live
/// distance table on every extraction, so a distance lowered after
/// insertion is observed. A heap keyed at insertion time would miss
/// those updates.
pub struct Frontier<'a, C> {
    kind: Kind<'a, C>,
}

enum Kind<'a, C> {
    /// LIFO - depth-first expansion
    Stack(Vec<usize>),
    /// FIFO - breadth-first expansion
    Queue(VecDeque<usize>),
    /// Minimum current distance from start
    Dijkstra(Vec<usize>),
    /// Minimum current distance plus heuristic estimate to the goal
    AStar {
        nodes: Vec<usize>,
        estimate: Box<dyn Fn(usize) -> C + 'a>,
    },
}

impl<'a, C> Frontier<'a, C>
where
    C: Zero + Ord + Copy,
{
    /// Last in, first out - the engine performs depth-first search
    pub fn stack() -> Self {
        Self {
            kind: Kind::Stack(Vec::new()),
        }
    }

    /// First in, first out - the engine performs breadth-first search
    pub fn queue() -> Self {
        Self {
            kind: Kind::Queue(VecDeque::new()),
        }
    }

    /// Minimum live distance first - the engine performs Dijkstra's algorithm
    pub fn dijkstra() -> Self {
        Self {
            kind: Kind::Dijkstra(Vec::new()),
        }
    }

    /// Minimum live distance + estimate first - the engine performs A*
    /// The estimate must already be closed over the goal node and must be
    /// admissible (never overestimate) for an optimality guarantee.
    /// Admissibility is not validated here.
    pub fn a_star<H>(estimate: H) -> Self
    where
        H: Fn(usize) -> C + 'a,
    {
        Self {
            kind: Kind::AStar {
                nodes: Vec::new(),
                estimate: Box::new(estimate),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.kind {
            Kind::Stack(nodes) | Kind::Dijkstra(nodes) | Kind::AStar { nodes, .. } => {
                nodes.is_empty()
            }
            Kind::Queue(nodes) => nodes.is_empty(),
        }
    }

    /// Add a node to the frontier, a no-op if it is already present
    pub(crate) fn insert(&mut self, node: usize) {
        match &mut self.kind {
            Kind::Stack(nodes) | Kind::Dijkstra(nodes) | Kind::AStar { nodes, .. } => {
                if !nodes.contains(&node) {
                    nodes.push(node);
                }
            }
            Kind::Queue(nodes) => {
                if !nodes.contains(&node) {
                    nodes.push_back(node);
                }
            }
        }
    }

    /// Remove and return the next node per the discipline, or None when
    /// the frontier is empty. `dist` is the engine's live distance table
    /// (None marks an unreached node) read at this moment, not at insert.
    pub(crate) fn extract(&mut self, dist: &[Option<C>]) -> Option<usize> {
        match &mut self.kind {
            Kind::Stack(nodes) => nodes.pop(),
            Kind::Queue(nodes) => nodes.pop_front(),
            Kind::Dijkstra(nodes) => take_minimum(nodes, |node| dist[node]),
            Kind::AStar { nodes, estimate } => {
                take_minimum(nodes, |node| dist[node].map(|d| d + estimate(node)))
            }
        }
    }
}

/// Remove the node with the smallest key, re-deriving keys on the spot
/// Ties resolve to the earliest inserted node, keyless nodes sort last
fn take_minimum<C, K>(nodes: &mut Vec<usize>, key: K) -> Option<usize>
where
    C: Ord + Copy,
    K: Fn(usize) -> Option<C>,
{
    if nodes.is_empty() {
        return None;
    }

    let mut best = 0;
    for i in 1..nodes.len() {
        match (key(nodes[i]), key(nodes[best])) {
            (Some(a), Some(b)) if a < b => best = i,
            (Some(_), None) => best = i,
            _ => {}
        }
    }

    Some(nodes.remove(best))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_is_lifo() {
        let mut frontier: Frontier<'_, u32> = Frontier::stack();
        frontier.insert(1);
        frontier.insert(2);
        frontier.insert(3);

        let dist = vec![None; 4];
        assert_eq!(frontier.extract(&dist), Some(3));
        assert_eq!(frontier.extract(&dist), Some(2));
        assert_eq!(frontier.extract(&dist), Some(1));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut frontier: Frontier<'_, u32> = Frontier::queue();
        frontier.insert(1);
        frontier.insert(2);
        frontier.insert(3);

        let dist = vec![None; 4];
        assert_eq!(frontier.extract(&dist), Some(1));
        assert_eq!(frontier.extract(&dist), Some(2));
        assert_eq!(frontier.extract(&dist), Some(3));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_duplicate_insert_is_a_noop() {
        let mut frontier: Frontier<'_, u32> = Frontier::queue();
        frontier.insert(1);
        frontier.insert(1);

        let dist = vec![None; 2];
        assert_eq!(frontier.extract(&dist), Some(1));
        assert_eq!(frontier.extract(&dist), None);
    }

    #[test]
    fn test_dijkstra_extracts_current_minimum() {
        let mut frontier: Frontier<'_, u32> = Frontier::dijkstra();
        frontier.insert(0);
        frontier.insert(1);
        frontier.insert(2);

        let dist = vec![Some(7), Some(3), Some(5)];
        assert_eq!(frontier.extract(&dist), Some(1));
        assert_eq!(frontier.extract(&dist), Some(2));
        assert_eq!(frontier.extract(&dist), Some(0));
    }

    #[test]
    fn test_dijkstra_observes_distances_lowered_after_insertion() {
        let mut frontier: Frontier<'_, u32> = Frontier::dijkstra();
        frontier.insert(1);
        frontier.insert(2);

        // Node 1 was the more expensive node when inserted
        let mut dist = vec![None, Some(9), Some(4)];
        // A relaxation lowers it below node 2 before anything is extracted
        dist[1] = Some(2);

        assert_eq!(frontier.extract(&dist), Some(1));
        assert_eq!(frontier.extract(&dist), Some(2));
    }

    #[test]
    fn test_dijkstra_ties_resolve_to_earliest_inserted() {
        let mut frontier: Frontier<'_, u32> = Frontier::dijkstra();
        frontier.insert(2);
        frontier.insert(0);
        frontier.insert(1);

        let dist = vec![Some(5), Some(5), Some(5)];
        assert_eq!(frontier.extract(&dist), Some(2));
        assert_eq!(frontier.extract(&dist), Some(0));
        assert_eq!(frontier.extract(&dist), Some(1));
    }

    #[test]
    fn test_a_star_ranks_by_distance_plus_estimate() {
        // Node 1 is closer by distance but the estimate says it is far
        // from the goal, node 2 wins on the combined key
        let mut frontier: Frontier<'_, u32> = Frontier::a_star(|node| match node {
            1 => 10,
            2 => 1,
            _ => 0,
        });
        frontier.insert(1);
        frontier.insert(2);

        let dist = vec![None, Some(2), Some(4)];
        assert_eq!(frontier.extract(&dist), Some(2));
        assert_eq!(frontier.extract(&dist), Some(1));
    }
}
