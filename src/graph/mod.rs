/// Weighted undirected graph over a dense node id range [0, N)
/// Nodes are plain indices, edges carry a non-negative cost
/// Neighbor order is the order edges were added - search expansion follows it
#[derive(Clone, Debug)]
pub struct Graph<C> {
    adjacency: Vec<Vec<(usize, C)>>,
}

impl<C: Copy> Graph<C> {
    /// Create a graph with `nodes` isolated nodes
    pub fn with_nodes(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
        }
    }

    /// Add an undirected edge between u and v with the given weight
    /// Negative weights are a caller precondition violation for the
    /// priority disciplines and are not checked here
    pub fn add_edge(&mut self, u: usize, v: usize, weight: C) {
        let nodes = self.adjacency.len();
        assert!(u < nodes && v < nodes, "edge endpoint outside node range");
        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
    }

    pub fn number_of_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Neighbors of a node with the edge weight to each, in insertion order
    pub fn neighbors(&self, node: usize) -> &[(usize, C)] {
        &self.adjacency[node]
    }

    /// Weight of the edge between u and v, if one exists
    pub fn edge_weight(&self, u: usize, v: usize) -> Option<C> {
        self.adjacency
            .get(u)?
            .iter()
            .find(|&&(n, _)| n == v)
            .map(|&(_, w)| w)
    }
}
