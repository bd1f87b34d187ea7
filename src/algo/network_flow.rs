/*!
# Maximum Flow and Minimum Cut

The graph only provides the topology; capacities are supplied as a dense `n x n`
[`Matrix<u64>`](crate::utils::Matrix). Only pairs `(u, v)` where `v` is stored in `u`'s adjacency
list carry capacity: parallel arcs do not add up and matrix entries without an arc are ignored.
In undirected graphs, both directions of an edge are arcs with their own capacity
`capacities[(u, v)]` and `capacities[(v, u)]`.

## Implementations
- [`EdmondsKarp`] is an iterator over shortest augmenting paths in the residual network. Each
  step augments the flow along the returned path by its bottleneck.
- [`NetworkFlow`] runs the iterator to completion and reports the [`MaxFlow`] or the corresponding
  [`MinCut`]; the capacity of the cut always equals the value of the flow.
*/

use super::*;
use std::collections::VecDeque;

/// Capacity of an arc and amount of flow
pub type Capacity = u64;

/// One augmentation step of [`EdmondsKarp`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    /// Vertices from source to sink
    pub path: Vec<Node>,
    /// Amount of flow pushed along the path
    pub bottleneck: Capacity,
}

/// Implementation of the Edmonds–Karp algorithm.
///
/// Internally, it maintains a residual capacity matrix and a predecessor array used for BFS.
/// Residual arcs are the stored arcs of the graph plus their reversals.
pub struct EdmondsKarp<'a, G> {
    graph: &'a G,
    in_neighbors: Vec<Vec<Node>>,
    residual: Matrix<Capacity>,
    source: Node,
    sink: Node,
    predecessor: Vec<Node>,
}

impl<'a, G: AdjacencyList> EdmondsKarp<'a, G> {
    /// Sets up the residual network for a flow from `source` to `sink`.
    ///
    /// # Errors
    /// - `GraphError::OutOfRange` if `source` or `sink` is not a vertex
    /// - `GraphError::Malformed` if `source == sink` or `capacities` is not `n x n`
    /// - `GraphError::AllocationFailure` if the residual matrix cannot be allocated
    pub fn new(
        graph: &'a G,
        capacities: &Matrix<Capacity>,
        source: Node,
        sink: Node,
    ) -> Result<Self> {
        graph.check_node(source)?;
        graph.check_node(sink)?;

        if source == sink {
            return Err(GraphError::Malformed(format!(
                "source and sink are both vertex {source}"
            )));
        }

        let n = graph.number_of_nodes();
        if capacities.dimension() != n {
            return Err(GraphError::Malformed(format!(
                "capacity matrix is {0}x{0} but the graph has {n} vertices",
                capacities.dimension()
            )));
        }

        let mut residual = Matrix::try_new(n, 0)?;
        let mut in_neighbors = try_vec(n as usize, Vec::new())?;
        for u in graph.vertices() {
            for v in graph.neighbors_of(u) {
                residual[(u, v)] = capacities[(u, v)];
                in_neighbors[v as usize].push(u);
            }
        }

        Ok(Self {
            graph,
            in_neighbors,
            residual,
            source,
            sink,
            predecessor: try_vec(n as usize, INVALID_NODE)?,
        })
    }

    /// BFS from the source over arcs with positive residual capacity. Fills the predecessor array
    /// and returns the set of reached vertices.
    fn bfs(&mut self) -> NodeBitSet {
        let graph = self.graph;
        let mut visited = graph.vertex_bitset_unset();
        let mut queue = VecDeque::from([self.source]);
        visited.set_bit(self.source);

        while let Some(u) = queue.pop_front() {
            if u == self.sink {
                break;
            }

            let candidates = graph
                .neighbors_of(u)
                .chain(self.in_neighbors[u as usize].iter().copied());

            for v in candidates {
                if self.residual[(u, v)] > 0 && !visited.set_bit(v) {
                    self.predecessor[v as usize] = u;
                    queue.push_back(v);
                }
            }
        }

        visited
    }

    /// Runs all augmentations and returns the value of the maximum flow.
    ///
    /// # Errors
    /// Returns `GraphError::Overflow` if the flow value exceeds [`Capacity::MAX`].
    pub fn run(&mut self) -> Result<Capacity> {
        let mut value: Capacity = 0;
        for augmentation in self.by_ref() {
            value = value
                .checked_add(augmentation.bottleneck)
                .ok_or(GraphError::Overflow)?;
        }

        debug!(
            "maximum flow from {} to {} has value {value}",
            self.source, self.sink
        );
        Ok(value)
    }

    /// Returns the vertices reachable from the source in the current residual network
    pub fn source_side(&mut self) -> Vec<Node> {
        self.bfs().iter_set_bits().collect()
    }

    /// Returns the remaining capacity of the residual arc `(u, v)`
    pub fn residual_capacity(&self, u: Node, v: Node) -> Capacity {
        self.residual[(u, v)]
    }
}

impl<G: AdjacencyList> Iterator for EdmondsKarp<'_, G> {
    type Item = AugmentingPath;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.bfs().get_bit(self.sink) {
            return None;
        }

        let mut path = vec![self.sink];
        let mut bottleneck = Capacity::MAX;
        let mut v = self.sink;
        while v != self.source {
            let u = self.predecessor[v as usize];
            bottleneck = bottleneck.min(self.residual[(u, v)]);
            path.push(u);
            v = u;
        }
        path.reverse();

        for (&u, &v) in path.iter().zip(path.iter().skip(1)) {
            self.residual[(u, v)] -= bottleneck;
            // saturates only if both directions carry capacities close to `Capacity::MAX`
            self.residual[(v, u)] = self.residual[(v, u)].saturating_add(bottleneck);
        }

        trace!("augmenting path {path:?} with bottleneck {bottleneck}");
        Some(AugmentingPath { path, bottleneck })
    }
}

/// Result of [`NetworkFlow::max_flow`]
#[derive(Debug, Clone)]
pub struct MaxFlow {
    /// Total amount of flow from source to sink
    pub value: Capacity,
    /// Residual capacities after the last augmentation
    pub residual: Matrix<Capacity>,
}

/// Result of [`NetworkFlow::min_cut`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    /// Vertices reachable from the source in the final residual network, sorted ascending
    pub source_side: Vec<Node>,
    /// Distinct arcs `(u, v)` with positive capacity, `u` on the source side and `v` not
    pub edges: Vec<Edge>,
    capacity: Capacity,
}

impl MinCut {
    /// Returns the total capacity of all cut arcs
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}

/// Maximum flow and minimum cut computations
pub trait NetworkFlow: AdjacencyList {
    /// Computes a maximum flow from `source` to `sink` with the Edmonds-Karp algorithm.
    ///
    /// # Errors
    /// - `GraphError::OutOfRange` if `source` or `sink` is not a vertex
    /// - `GraphError::Malformed` if `source == sink` or `capacities` is not `n x n`
    /// - `GraphError::Overflow` if the flow value exceeds [`Capacity::MAX`]
    /// - `GraphError::AllocationFailure` if the working storage cannot be allocated
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*, utils::Matrix};
    ///
    /// let g = AdjListGraph::from_edges(4, true, [(0, 1), (0, 2), (1, 3), (2, 3), (1, 2)]).unwrap();
    /// let capacities = Matrix::from_rows(vec![
    ///     vec![0, 3, 2, 0],
    ///     vec![0, 0, 1, 2],
    ///     vec![0, 0, 0, 3],
    ///     vec![0, 0, 0, 0],
    /// ]).unwrap();
    ///
    /// assert_eq!(g.max_flow(&capacities, 0, 3).unwrap().value, 5);
    /// ```
    fn max_flow(
        &self,
        capacities: &Matrix<Capacity>,
        source: Node,
        sink: Node,
    ) -> Result<MaxFlow> {
        let mut flow = EdmondsKarp::new(self, capacities, source, sink)?;
        let value = flow.run()?;
        Ok(MaxFlow {
            value,
            residual: flow.residual,
        })
    }

    /// Computes a minimum cut separating `source` from `sink`: after a maximum flow has been
    /// found, the source side consists of all vertices still reachable in the residual network.
    ///
    /// # Errors
    /// Same as [`NetworkFlow::max_flow`].
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*, utils::Matrix};
    ///
    /// let g = AdjListGraph::from_edges(3, true, [(0, 1), (1, 2)]).unwrap();
    /// let mut capacities = Matrix::try_new(3, 0).unwrap();
    /// capacities[(0, 1)] = 5;
    /// capacities[(1, 2)] = 2;
    ///
    /// let cut = g.min_cut(&capacities, 0, 2).unwrap();
    /// assert_eq!(cut.source_side, vec![0, 1]);
    /// assert_eq!(cut.edges, vec![Edge(1, 2)]);
    /// assert_eq!(cut.capacity(), 2);
    /// ```
    fn min_cut(
        &self,
        capacities: &Matrix<Capacity>,
        source: Node,
        sink: Node,
    ) -> Result<MinCut> {
        let mut flow = EdmondsKarp::new(self, capacities, source, sink)?;
        flow.run()?;

        let source_side = flow.source_side();
        let mut reachable = self.vertex_bitset_unset();
        reachable.set_bits(source_side.iter().copied());

        let mut edges = Vec::new();
        let mut capacity: Capacity = 0;
        let mut seen = self.vertex_bitset_unset();

        for &u in &source_side {
            for v in self.neighbors_of(u) {
                if reachable.get_bit(v) || capacities[(u, v)] == 0 || seen.set_bit(v) {
                    continue;
                }

                edges.push(Edge(u, v));
                capacity = capacity
                    .checked_add(capacities[(u, v)])
                    .ok_or(GraphError::Overflow)?;
            }
            seen.clear_all();
        }

        Ok(MinCut {
            source_side,
            edges,
            capacity,
        })
    }
}

impl<G: AdjacencyList> NetworkFlow for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{random_capacities, random_gnp};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    /// Network of Cormen et al., Figure 26.1 with maximum flow 23
    fn textbook_network() -> (AdjListGraph, Matrix<Capacity>) {
        let arcs = [
            (0, 1, 16),
            (0, 2, 13),
            (2, 1, 4),
            (1, 3, 12),
            (3, 2, 9),
            (2, 4, 14),
            (4, 3, 7),
            (3, 5, 20),
            (4, 5, 4),
        ];

        let graph = AdjListGraph::from_edges(6, true, arcs.iter().map(|&(u, v, _)| (u, v))).unwrap();
        let mut capacities = Matrix::try_new(6, 0).unwrap();
        for (u, v, c) in arcs {
            capacities[(u, v)] = c;
        }
        (graph, capacities)
    }

    #[test]
    fn textbook() {
        let (graph, capacities) = textbook_network();

        assert_eq!(graph.max_flow(&capacities, 0, 5).unwrap().value, 23);

        let cut = graph.min_cut(&capacities, 0, 5).unwrap();
        assert_eq!(cut.source_side, vec![0, 1, 2, 4]);
        assert_eq!(
            cut.edges.iter().copied().sorted().collect_vec(),
            vec![Edge(1, 3), Edge(4, 3), Edge(4, 5)]
        );
        assert_eq!(cut.capacity(), 23);
    }

    #[test]
    fn residual_after_run() {
        let (graph, capacities) = textbook_network();
        let mut flow = EdmondsKarp::new(&graph, &capacities, 0, 5).unwrap();
        assert_eq!(flow.residual_capacity(0, 1), 16);
        assert_eq!(flow.residual_capacity(1, 0), 0);

        assert_eq!(flow.run().unwrap(), 23);
        assert_eq!(flow.source_side(), vec![0, 1, 2, 4]);

        // cut arcs are saturated and their reversals carry the pushed flow
        for (u, v) in [(1, 3), (4, 3), (4, 5)] {
            assert_eq!(flow.residual_capacity(u, v), 0);
            assert_eq!(flow.residual_capacity(v, u), capacities[(u, v)]);
        }
        assert_eq!(flow.next(), None);
    }

    #[test]
    fn augmenting_paths_are_shortest() {
        let (graph, capacities) = textbook_network();
        let paths = EdmondsKarp::new(&graph, &capacities, 0, 5)
            .unwrap()
            .collect_vec();

        assert!(paths.iter().map(|p| p.path.len()).is_sorted());
        assert_eq!(paths.iter().map(|p| p.bottleneck).sum::<Capacity>(), 23);
        for p in &paths {
            assert_eq!(p.path.first(), Some(&0));
            assert_eq!(p.path.last(), Some(&5));
            assert!(p.bottleneck > 0);
        }
    }

    #[test]
    fn undirected() {
        // 0 - 1 - 3 and 0 - 2 - 3 plus the cross edge 1 - 2
        let graph =
            AdjListGraph::from_edges(4, false, [(0, 1), (0, 2), (1, 3), (2, 3), (1, 2)]).unwrap();
        let capacities = Matrix::from_rows(vec![
            vec![0, 3, 3, 0],
            vec![3, 0, 5, 1],
            vec![3, 5, 0, 3],
            vec![0, 1, 3, 0],
        ])
        .unwrap();

        let flow = graph.max_flow(&capacities, 0, 3).unwrap();
        assert_eq!(flow.value, 4);

        let cut = graph.min_cut(&capacities, 0, 3).unwrap();
        assert_eq!(cut.capacity(), 4);
        assert_eq!(cut.source_side, vec![0, 1, 2]);
        assert_eq!(cut.edges, vec![Edge(1, 3), Edge(2, 3)]);
    }

    #[test]
    fn unreachable_sink() {
        let graph = AdjListGraph::from_edges(3, true, [(0, 1), (2, 1)]).unwrap();
        let capacities = Matrix::try_new(3, 7).unwrap();

        assert_eq!(graph.max_flow(&capacities, 0, 2).unwrap().value, 0);

        let cut = graph.min_cut(&capacities, 0, 2).unwrap();
        assert_eq!(cut.source_side, vec![0, 1]);
        assert!(cut.edges.is_empty());
        assert_eq!(cut.capacity(), 0);
    }

    #[test]
    fn capacities_only_on_arcs() {
        // the matrix entry (0, 2) has no arc and must not carry flow
        let graph = AdjListGraph::from_edges(3, true, [(0, 1), (1, 2), (0, 1)]).unwrap();
        let capacities = Matrix::try_new(3, 4).unwrap();
        assert_eq!(graph.max_flow(&capacities, 0, 2).unwrap().value, 4);
    }

    #[test]
    fn invalid_input() {
        let (graph, capacities) = textbook_network();

        assert!(matches!(
            graph.max_flow(&capacities, 2, 2),
            Err(GraphError::Malformed(_))
        ));
        assert!(matches!(
            graph.max_flow(&capacities, 0, 6),
            Err(GraphError::OutOfRange { node: 6, .. })
        ));
        assert!(matches!(
            graph.min_cut(&Matrix::try_new(5, 1).unwrap(), 0, 5),
            Err(GraphError::Malformed(_))
        ));
    }

    #[test]
    fn overflow() {
        let graph = AdjListGraph::from_edges(4, true, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        let capacities = Matrix::try_new(4, Capacity::MAX).unwrap();

        assert!(matches!(
            graph.max_flow(&capacities, 0, 3),
            Err(GraphError::Overflow)
        ));
    }

    #[test]
    fn max_flow_equals_min_cut() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for directed in [false, true] {
            for n in [2 as NumNodes, 6, 15, 30] {
                for _ in 0..10 {
                    let graph = random_gnp(rng, n, 4.0 / n as f64, directed);
                    let capacities = random_capacities(rng, &graph, 20);

                    let flow = graph.max_flow(&capacities, 0, n - 1).unwrap();
                    let cut = graph.min_cut(&capacities, 0, n - 1).unwrap();

                    assert_eq!(flow.value, cut.capacity());
                    assert!(cut.source_side.contains(&0));
                    assert!(!cut.source_side.contains(&(n - 1)));
                    for &Edge(u, v) in &cut.edges {
                        assert!(cut.source_side.contains(&u));
                        assert!(!cut.source_side.contains(&v));
                        assert_eq!(flow.residual[(u, v)], 0);
                    }
                }
            }
        }
    }
}
