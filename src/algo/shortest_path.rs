/*!
Shortest paths in unweighted graphs (every edge has length 1).

Three independent engines are provided:
- [`Dijkstra`]: single-source single-target; selects the closest unsettled vertex by a linear scan
  and stops as soon as the target is settled,
- [`BellmanFord`]: relaxes every stored arc for at most `n - 1` rounds and stops early once a round
  changes nothing,
- [`FloydWarshall`]: all pairs, stored in dense `n x n` matrices.

Unreachable targets are reported as `Ok(None)`.
*/

use super::*;

/// Length of a path in number of edges
pub type Distance = NumNodes;

/// Marks an unreachable vertex in distance arrays
const INFINITE: Distance = Distance::MAX;

/// A shortest path from a source to a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Number of edges on the path
    pub distance: Distance,
    /// All vertices of the path from source to target (both inclusive)
    pub path: Vec<Node>,
}

/// Follows predecessor links from `target` back to `source` and returns the path in forward order
fn path_from_predecessors(source: Node, target: Node, pred: impl Fn(Node) -> Node) -> Vec<Node> {
    let mut path = vec![target];
    let mut node = target;
    while node != source {
        node = pred(node);
        path.push(node);
    }
    path.reverse();
    path
}

/// Single-source single-target search with linear minimum selection
pub struct Dijkstra<'a, G> {
    graph: &'a G,
    distances: Vec<Distance>,
    predecessors: Vec<Node>,
    settled: NodeBitSet,
}

impl<'a, G: AdjacencyList> Dijkstra<'a, G> {
    /// Allocates the working storage for one search on `graph`.
    ///
    /// # Errors
    /// Returns `GraphError::AllocationFailure` if the working storage cannot be allocated.
    pub fn new(graph: &'a G) -> Result<Self> {
        Ok(Self {
            graph,
            distances: try_vec(graph.len(), INFINITE)?,
            predecessors: try_vec(graph.len(), INVALID_NODE)?,
            settled: graph.vertex_bitset_unset(),
        })
    }

    /// Returns the closest vertex that is reachable but not settled yet
    fn closest_unsettled(&self) -> Option<Node> {
        self.graph
            .vertices()
            .filter(|&u| self.distances[u as usize] != INFINITE && !self.settled.get_bit(u))
            .min_by_key(|&u| self.distances[u as usize])
    }

    /// Runs the search and consumes the working storage.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `source` or `target` is not a vertex.
    pub fn run(mut self, source: Node, target: Node) -> Result<Option<ShortestPath>> {
        self.graph.check_node(source)?;
        self.graph.check_node(target)?;

        self.distances[source as usize] = 0;

        while let Some(u) = self.closest_unsettled() {
            self.settled.set_bit(u);
            if u == target {
                break;
            }

            let next = self.distances[u as usize] + 1;
            for v in self.graph.neighbors_of(u) {
                if next < self.distances[v as usize] {
                    self.distances[v as usize] = next;
                    self.predecessors[v as usize] = u;
                }
            }
        }

        if !self.settled.get_bit(target) {
            return Ok(None);
        }

        Ok(Some(ShortestPath {
            distance: self.distances[target as usize],
            path: path_from_predecessors(source, target, |u| self.predecessors[u as usize]),
        }))
    }
}

/// Single-source single-target search by repeated relaxation of all arcs
pub struct BellmanFord<'a, G> {
    graph: &'a G,
    distances: Vec<Distance>,
    predecessors: Vec<Node>,
}

impl<'a, G: AdjacencyList> BellmanFord<'a, G> {
    /// Allocates the working storage for one search on `graph`.
    ///
    /// # Errors
    /// Returns `GraphError::AllocationFailure` if the working storage cannot be allocated.
    pub fn new(graph: &'a G) -> Result<Self> {
        Ok(Self {
            graph,
            distances: try_vec(graph.len(), INFINITE)?,
            predecessors: try_vec(graph.len(), INVALID_NODE)?,
        })
    }

    /// Relaxes every arc once and returns *true* if any distance improved
    fn relax_all(&mut self) -> bool {
        let mut updated = false;
        for u in self.graph.vertices() {
            let du = self.distances[u as usize];
            if du == INFINITE {
                continue;
            }

            for v in self.graph.neighbors_of(u) {
                if du + 1 < self.distances[v as usize] {
                    self.distances[v as usize] = du + 1;
                    self.predecessors[v as usize] = u;
                    updated = true;
                }
            }
        }
        updated
    }

    /// Runs the search and consumes the working storage.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `source` or `target` is not a vertex.
    pub fn run(mut self, source: Node, target: Node) -> Result<Option<ShortestPath>> {
        self.graph.check_node(source)?;
        self.graph.check_node(target)?;

        self.distances[source as usize] = 0;

        for round in 1..self.graph.number_of_nodes() {
            if !self.relax_all() {
                trace!("bellman-ford converged after {round} rounds");
                break;
            }
        }

        if self.distances[target as usize] == INFINITE {
            return Ok(None);
        }

        Ok(Some(ShortestPath {
            distance: self.distances[target as usize],
            path: path_from_predecessors(source, target, |u| self.predecessors[u as usize]),
        }))
    }
}

/// Distances and predecessors between all pairs of vertices as computed by [`FloydWarshall`]
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths {
    distances: Matrix<Distance>,
    predecessors: Matrix<Node>,
}

impl AllPairsShortestPaths {
    fn check_pair(&self, source: Node, target: Node) -> Result<()> {
        let n = self.distances.dimension();
        for node in [source, target] {
            if node >= n {
                return Err(GraphError::OutOfRange {
                    node: node as u64,
                    n,
                });
            }
        }
        Ok(())
    }

    /// Returns the length of a shortest path from `source` to `target` or `None` if unreachable.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `source` or `target` is not a vertex.
    pub fn distance(&self, source: Node, target: Node) -> Result<Option<Distance>> {
        self.check_pair(source, target)?;
        let d = self.distances[(source, target)];
        Ok((d != INFINITE).then_some(d))
    }

    /// Returns a shortest path from `source` to `target` (both inclusive) or `None` if unreachable.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `source` or `target` is not a vertex.
    pub fn path(&self, source: Node, target: Node) -> Result<Option<Vec<Node>>> {
        Ok(self
            .shortest_path(source, target)?
            .map(|shortest| shortest.path))
    }

    /// Returns distance and path from `source` to `target` or `None` if unreachable.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `source` or `target` is not a vertex.
    pub fn shortest_path(&self, source: Node, target: Node) -> Result<Option<ShortestPath>> {
        let Some(distance) = self.distance(source, target)? else {
            return Ok(None);
        };

        Ok(Some(ShortestPath {
            distance,
            path: path_from_predecessors(source, target, |u| self.predecessors[(source, u)]),
        }))
    }
}

/// All-pairs shortest paths via dynamic programming over intermediate vertices
pub struct FloydWarshall {
    distances: Matrix<Distance>,
    predecessors: Matrix<Node>,
}

impl FloydWarshall {
    /// Allocates both `n x n` matrices and initializes them with the arcs of `graph`.
    ///
    /// # Errors
    /// Returns `GraphError::AllocationFailure` if the matrices cannot be allocated.
    pub fn new<G: AdjacencyList>(graph: &G) -> Result<Self> {
        let n = graph.number_of_nodes();
        let mut distances = Matrix::try_new(n, INFINITE)?;
        let mut predecessors = Matrix::try_new(n, INVALID_NODE)?;

        for u in graph.vertices() {
            distances[(u, u)] = 0;
            predecessors[(u, u)] = u;

            for v in graph.neighbors_of(u).filter(|&v| v != u) {
                distances[(u, v)] = 1;
                predecessors[(u, v)] = u;
            }
        }

        Ok(Self {
            distances,
            predecessors,
        })
    }

    /// Runs the `O(n^3)` relaxation and returns the result
    pub fn run(mut self) -> AllPairsShortestPaths {
        let n = self.distances.dimension();

        for k in 0..n {
            for i in 0..n {
                let dik = self.distances[(i, k)];
                if dik == INFINITE {
                    continue;
                }

                for j in 0..n {
                    let Some(through_k) = dik.checked_add(self.distances[(k, j)]) else {
                        continue;
                    };

                    if through_k < self.distances[(i, j)] {
                        self.distances[(i, j)] = through_k;
                        self.predecessors[(i, j)] = self.predecessors[(k, j)];
                    }
                }
            }
        }

        AllPairsShortestPaths {
            distances: self.distances,
            predecessors: self.predecessors,
        }
    }
}

/// Shortest path queries on unweighted graphs
pub trait ShortestPaths: AdjacencyList {
    /// Computes a shortest path from `source` to `target` with Dijkstra's algorithm.
    ///
    /// Returns `Ok(None)` if `target` is unreachable.
    ///
    /// # Errors
    /// - `GraphError::OutOfRange` if `source` or `target` is not a vertex
    /// - `GraphError::AllocationFailure` if the working storage cannot be allocated
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(5, false, [(0, 1), (1, 2), (2, 3), (0, 3)]).unwrap();
    ///
    /// let shortest = g.dijkstra(0, 2).unwrap().unwrap();
    /// assert_eq!(shortest.distance, 2);
    /// assert_eq!(shortest.path, vec![0, 1, 2]);
    ///
    /// assert_eq!(g.dijkstra(0, 4).unwrap(), None);
    /// ```
    fn dijkstra(&self, source: Node, target: Node) -> Result<Option<ShortestPath>> {
        Dijkstra::new(self)?.run(source, target)
    }

    /// Computes a shortest path from `source` to `target` with the Bellman-Ford algorithm.
    ///
    /// Returns `Ok(None)` if `target` is unreachable.
    ///
    /// # Errors
    /// - `GraphError::OutOfRange` if `source` or `target` is not a vertex
    /// - `GraphError::AllocationFailure` if the working storage cannot be allocated
    fn bellman_ford(&self, source: Node, target: Node) -> Result<Option<ShortestPath>> {
        BellmanFord::new(self)?.run(source, target)
    }

    /// Computes shortest paths between all pairs of vertices with the Floyd-Warshall algorithm.
    ///
    /// # Errors
    /// Returns `GraphError::AllocationFailure` if the `n x n` matrices cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(4, true, [(0, 1), (1, 2), (2, 3), (0, 2)]).unwrap();
    /// let apsp = g.floyd_warshall().unwrap();
    ///
    /// assert_eq!(apsp.distance(0, 3).unwrap(), Some(2));
    /// assert_eq!(apsp.path(0, 3).unwrap(), Some(vec![0, 2, 3]));
    /// assert_eq!(apsp.distance(3, 0).unwrap(), None);
    /// ```
    fn floyd_warshall(&self) -> Result<AllPairsShortestPaths> {
        Ok(FloydWarshall::new(self)?.run())
    }
}

impl<G: AdjacencyList> ShortestPaths for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_gnp;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    /// Asserts that `path` is a walk along existing edges from `source` to `target`
    fn assert_valid_path(graph: &AdjListGraph, source: Node, target: Node, sp: &ShortestPath) {
        assert_eq!(sp.path.first(), Some(&source));
        assert_eq!(sp.path.last(), Some(&target));
        assert_eq!(sp.path.len(), sp.distance as usize + 1);
        for (&u, &v) in sp.path.iter().tuple_windows() {
            assert!(graph.has_edge(u, v));
        }
    }

    #[test]
    fn trivial_path() {
        let graph = AdjListGraph::new(1, false).unwrap();
        let expected = Some(ShortestPath {
            distance: 0,
            path: vec![0],
        });

        assert_eq!(graph.dijkstra(0, 0).unwrap(), expected);
        assert_eq!(graph.bellman_ford(0, 0).unwrap(), expected);
        assert_eq!(graph.floyd_warshall().unwrap().shortest_path(0, 0).unwrap(), expected);
    }

    #[test]
    fn unreachable_and_invalid() {
        let graph = AdjListGraph::from_edges(3, true, [(0, 1), (2, 1)]).unwrap();

        assert_eq!(graph.dijkstra(0, 2).unwrap(), None);
        assert_eq!(graph.bellman_ford(1, 0).unwrap(), None);
        assert_eq!(graph.floyd_warshall().unwrap().path(0, 2).unwrap(), None);

        assert!(matches!(
            graph.dijkstra(0, 3),
            Err(GraphError::OutOfRange { node: 3, .. })
        ));
        assert!(matches!(
            graph.bellman_ford(5, 0),
            Err(GraphError::OutOfRange { node: 5, .. })
        ));
        assert!(matches!(
            graph.floyd_warshall().unwrap().distance(0, 3),
            Err(GraphError::OutOfRange { node: 3, .. })
        ));
    }

    #[test]
    fn path_through_cycle() {
        // 0 - 1 - 2 - 3 - 4 - 5 - 0
        let graph =
            AdjListGraph::from_edges(6, false, (0..6).map(|u| (u, (u + 1) % 6))).unwrap();

        let sp = graph.dijkstra(0, 4).unwrap().unwrap();
        assert_eq!(sp.distance, 2);
        assert_eq!(sp.path, vec![0, 5, 4]);

        let sp = graph.bellman_ford(0, 4).unwrap().unwrap();
        assert_eq!(sp.path, vec![0, 5, 4]);

        let apsp = graph.floyd_warshall().unwrap();
        assert_eq!(apsp.path(0, 4).unwrap(), Some(vec![0, 5, 4]));
        assert_eq!(apsp.distance(1, 4).unwrap(), Some(3));
    }

    #[test]
    fn engines_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);

        for directed in [false, true] {
            for n in [2 as NumNodes, 8, 25] {
                for _ in 0..10 {
                    let graph = random_gnp(rng, n, 2.0 / n as f64, directed);
                    let apsp = graph.floyd_warshall().unwrap();

                    for s in graph.vertices() {
                        let reachable = graph.bfs(s).unwrap().collect_vec();

                        for t in graph.vertices() {
                            let dijkstra = graph.dijkstra(s, t).unwrap();
                            let bellman_ford = graph.bellman_ford(s, t).unwrap();
                            let floyd = apsp.shortest_path(s, t).unwrap();

                            let distances = [&dijkstra, &bellman_ford, &floyd]
                                .map(|sp| sp.as_ref().map(|sp| sp.distance));
                            assert!(distances.iter().all_equal());
                            assert_eq!(distances[0].is_some(), reachable.contains(&t));

                            for sp in [dijkstra, bellman_ford, floyd].iter().flatten() {
                                assert_valid_path(&graph, s, t, sp);
                            }
                        }
                    }
                }
            }
        }
    }
}
