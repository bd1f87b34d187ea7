use fxhash::FxHashMap;
use tracing::warn;

use super::*;

/// A graph stored as one adjacency list per vertex.
///
/// - Vertices are `0..n`; `n` is fixed at creation.
/// - Adjacency lists keep insertion order and may contain duplicates (parallel edges) and
///   self-loops.
/// - In undirected graphs, `v` appears in `u`'s list exactly as often as `u` appears in `v`'s list.
///   An undirected self-loop `(u, u)` is stored as two entries `u` in `u`'s list.
///
/// # Examples
/// ```
/// use adjgraph::prelude::*;
///
/// let mut g = AdjListGraph::new(4, false).unwrap();
/// g.add_edges([(0, 1), (1, 2), (2, 3)]).unwrap();
///
/// assert_eq!(g.degree(1).unwrap(), 2);
/// assert_eq!(g.as_neighbors_slice(1), &[0, 2]);
///
/// g.remove_edge(2, 1).unwrap();
/// assert_eq!(g.edges(), vec![Edge(0, 1), Edge(2, 3)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjListGraph {
    nbs: Vec<Vec<Node>>,
    directed: bool,
    num_edges: NumEdges,
}

impl AdjListGraph {
    /// Wraps already allocated adjacency lists after validating them.
    pub(crate) fn with_lists(nbs: Vec<Vec<Node>>, directed: bool) -> Result<Self> {
        let n = nbs.len() as NumNodes;

        let mut entries: u64 = 0;
        for (u, list) in nbs.iter().enumerate() {
            if let Some(&v) = list.iter().find(|&&v| v >= n) {
                return Err(GraphError::Malformed(format!(
                    "neighbor {v} of vertex {u} is out of range for {n} vertices"
                )));
            }
            entries += list.len() as u64;
        }

        if !directed {
            Self::check_symmetry(&nbs)?;
            entries /= 2;
        }

        let num_edges = NumEdges::try_from(entries).map_err(|_| GraphError::Overflow)?;
        Ok(Self {
            nbs,
            directed,
            num_edges,
        })
    }

    /// Every undirected pair must be stored with equal multiplicity on both sides
    fn check_symmetry(nbs: &[Vec<Node>]) -> Result<()> {
        let mut balance: FxHashMap<Edge, i64> = FxHashMap::default();
        for (u, list) in nbs.iter().enumerate() {
            let u = u as Node;
            for &v in list {
                *balance.entry(Edge(u, v).normalized()).or_default() +=
                    if u <= v { 1 } else { -1 };
            }
        }

        match balance
            .into_iter()
            .find(|&(e, b)| if e.is_loop() { b % 2 != 0 } else { b != 0 })
        {
            Some((e, _)) => Err(GraphError::Malformed(format!(
                "undirected edge {e} is not stored symmetrically"
            ))),
            None => Ok(()),
        }
    }

    /// Returns the number of edge-endpoints stored at `v`.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `v >= n`.
    pub fn degree(&self, v: Node) -> Result<NumNodes> {
        self.check_node(v)?;
        Ok(self.degree_of(v))
    }

    /// Returns the adjacency list of `v`.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `v >= n`.
    pub fn neighbors(&self, v: Node) -> Result<&[Node]> {
        self.check_node(v)?;
        Ok(self.as_neighbors_slice(v))
    }

    /// Removes the first occurrence of `v` in `u`'s list and returns *true* if there was one
    fn remove_first(list: &mut Vec<Node>, v: Node) -> bool {
        match list.iter().position(|&w| w == v) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl GraphBuilder {
    /// Creates a graph from pre-built adjacency lists.
    ///
    /// # Errors
    /// - `GraphError::InvalidSize` unless `1 <= lists.len() <= max_vertices`
    /// - `GraphError::Malformed` if a neighbor is out of range or an undirected edge is only
    ///   stored on one side
    pub fn build_from_adjacency_lists(&self, lists: Vec<Vec<Node>>) -> Result<AdjListGraph> {
        self.check_size(lists.len() as u64)?;
        AdjListGraph::with_lists(lists, self.is_directed())
    }
}

impl GraphNodeOrder for AdjListGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjListGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl GraphType for AdjListGraph {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl AdjacencyList for AdjListGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }

    fn adjacency_lists(&self) -> Vec<Vec<Node>> {
        self.nbs.clone()
    }
}

impl AdjacencyTest for AdjListGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].contains(&v)
    }
}

impl NeighborsSlice for AdjListGraph {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.nbs[u as usize]
    }
}

impl GraphNew for AdjListGraph {
    fn new(n: NumNodes, directed: bool) -> Result<Self> {
        GraphBuilder::new().directed(directed).build(n)
    }
}

impl GraphEdgeEditing for AdjListGraph {
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        let num_edges = self.num_edges.checked_add(1).ok_or(GraphError::Overflow)?;

        // Reserve everything up front: once both reservations succeeded, the pushes below
        // cannot fail, and a failed reservation leaves every list untouched.
        if self.directed {
            self.nbs[u as usize].try_reserve(1)?;
            self.nbs[u as usize].push(v);
        } else if u == v {
            self.nbs[u as usize].try_reserve(2)?;
            self.nbs[u as usize].extend([u, u]);
        } else {
            self.nbs[u as usize].try_reserve(1)?;
            self.nbs[v as usize].try_reserve(1)?;
            self.nbs[u as usize].push(v);
            self.nbs[v as usize].push(u);
        }

        self.num_edges = num_edges;
        Ok(())
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;

        if !Self::remove_first(&mut self.nbs[u as usize], v) {
            return Err(GraphError::NotFound(Edge(u, v)));
        }

        if !self.directed && !Self::remove_first(&mut self.nbs[v as usize], u) {
            warn!(
                "removed edge ({u}, {v}) but ({v}, {u}) was missing: undirected graph is asymmetric"
            );
        }

        self.num_edges = self.num_edges.saturating_sub(1);
        Ok(())
    }
}
