/*!
Bridges and articulation points of undirected graphs via Tarjan's low-link values.

The search is an iterative DFS over every DFS tree of the graph. A tree edge `(u, v)` is a bridge
iff `low[v] > disc[u]`; a non-root vertex `u` is an articulation point iff it has a DFS child `v`
with `low[v] >= disc[u]`; a DFS root is an articulation point iff it has more than one DFS child.

Parallel edges are distinguished: only one copy of the edge to the DFS parent is treated as the
tree edge, so a doubled edge is never a bridge.
*/

use super::*;
use crate::algo::cycles::DfsFrame;

/// Result of [`Bridges::bridges_and_articulation_points`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgesAndArticulationPoints {
    /// All bridges, normalized and sorted ascending
    pub bridges: Vec<Edge>,
    /// All articulation points, sorted ascending
    pub articulation_points: Vec<Node>,
}

/// Computes bridges and articulation points of undirected graphs
pub trait Bridges: AdjacencyList {
    /// Computes all bridges and articulation points.
    ///
    /// # Errors
    /// - `GraphError::WrongDirectedness` if the graph is directed
    /// - `GraphError::AllocationFailure` if the working storage cannot be allocated
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// // triangle 0-1-2 attached to triangle 3-4-5 via the bridge (1, 3)
    /// let g = AdjListGraph::from_edges(
    ///     6,
    ///     false,
    ///     [(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)],
    /// ).unwrap();
    ///
    /// let result = g.bridges_and_articulation_points().unwrap();
    /// assert_eq!(result.bridges, vec![Edge(1, 3)]);
    /// assert_eq!(result.articulation_points, vec![1, 3]);
    /// ```
    fn bridges_and_articulation_points(&self) -> Result<BridgesAndArticulationPoints> {
        self.require_undirected("bridges_and_articulation_points")?;
        BridgeSearch::new(self)?.compute()
    }

    /// Returns all bridges, normalized and sorted ascending
    fn compute_bridges(&self) -> Result<Vec<Edge>> {
        Ok(self.bridges_and_articulation_points()?.bridges)
    }

    /// Returns all articulation points, sorted ascending
    fn articulation_points(&self) -> Result<Vec<Node>> {
        Ok(self.bridges_and_articulation_points()?.articulation_points)
    }
}

impl<G: AdjacencyList> Bridges for G {}

const UNDISCOVERED: Node = 0;

struct BridgeSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    discovery: Vec<Node>,
    low: Vec<Node>,
    time: Node,
    bridges: Vec<Edge>,
    articulation_points: NodeBitSet,
}

impl<'a, G> BridgeSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Result<Self> {
        let n = graph.len();
        Ok(Self {
            graph,
            discovery: try_vec(n, UNDISCOVERED)?,
            low: try_vec(n, UNDISCOVERED)?,
            time: UNDISCOVERED,
            bridges: Vec::new(),
            articulation_points: graph.vertex_bitset_unset(),
        })
    }

    fn discover(&mut self, u: Node) {
        self.time += 1;
        self.discovery[u as usize] = self.time;
        self.low[u as usize] = self.time;
    }

    fn update_low(&mut self, u: Node, value: Node) {
        self.low[u as usize] = self.low[u as usize].min(value);
    }

    fn compute(mut self) -> Result<BridgesAndArticulationPoints> {
        let graph = self.graph;
        let mut stack = Vec::new();

        for root in graph.vertices() {
            if self.discovery[root as usize] != UNDISCOVERED {
                continue;
            }

            self.discover(root);
            let mut root_children = 0;
            stack.push(DfsFrame::new(root, INVALID_NODE, graph.neighbors_of(root)));

            while let Some(frame) = stack.last_mut() {
                let u = frame.vertex;

                if let Some(v) = frame.next_non_tree_neighbor() {
                    if self.discovery[v as usize] == UNDISCOVERED {
                        if u == root {
                            root_children += 1;
                        }
                        self.discover(v);
                        stack.push(DfsFrame::new(v, u, graph.neighbors_of(v)));
                    } else {
                        self.update_low(u, self.discovery[v as usize]);
                    }
                    continue;
                }

                let parent = frame.parent;
                stack.pop();
                if parent == INVALID_NODE {
                    continue;
                }

                self.update_low(parent, self.low[u as usize]);

                if self.low[u as usize] > self.discovery[parent as usize] {
                    self.bridges.push(Edge(parent, u).normalized());
                }

                if parent != root && self.low[u as usize] >= self.discovery[parent as usize] {
                    self.articulation_points.set_bit(parent);
                }
            }

            if root_children > 1 {
                self.articulation_points.set_bit(root);
            }
        }

        self.bridges.sort_unstable();
        Ok(BridgesAndArticulationPoints {
            bridges: self.bridges,
            articulation_points: self.articulation_points.iter_set_bits().collect(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{random_gnp, random_tree};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    /// Counts the connected components with a union-find over the edges of `graph`
    fn number_of_components(graph: &AdjListGraph) -> NumNodes {
        let mut sets = DisjointSet::new(graph.number_of_nodes()).unwrap();
        for Edge(u, v) in graph.edges() {
            sets.union(u, v);
        }
        sets.number_of_sets()
    }

    #[test]
    fn bridges_in_path() {
        for n in [1, 5, 10, 15] {
            let mut graph = AdjListGraph::new(n, false).unwrap();
            for u in 1..n {
                graph.add_edge(u, u - 1).unwrap();
            }

            let result = graph.bridges_and_articulation_points().unwrap();
            assert_eq!(result.bridges, graph.edges());
            assert_eq!(
                result.articulation_points,
                (1..n.saturating_sub(1)).collect_vec()
            );
        }
    }

    #[test]
    fn bridge_in_example() {
        let mut graph = AdjListGraph::new(6, false).unwrap();
        graph
            .add_edges([(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)])
            .unwrap();

        assert_eq!(graph.compute_bridges().unwrap(), vec![Edge(1, 3)]);
        assert_eq!(graph.articulation_points().unwrap(), vec![1, 3]);
    }

    #[test]
    fn star_center() {
        let graph = AdjListGraph::from_edges(5, false, [(0, 1), (0, 2), (0, 3), (4, 0)]).unwrap();
        let result = graph.bridges_and_articulation_points().unwrap();
        assert_eq!(
            result.bridges,
            vec![Edge(0, 1), Edge(0, 2), Edge(0, 3), Edge(0, 4)]
        );
        assert_eq!(result.articulation_points, vec![0]);
    }

    #[test]
    fn parallel_edges_and_loops() {
        let graph = AdjListGraph::from_edges(3, false, [(0, 1), (1, 0), (1, 2), (2, 2)]).unwrap();
        let result = graph.bridges_and_articulation_points().unwrap();
        assert_eq!(result.bridges, vec![Edge(1, 2)]);
        assert_eq!(result.articulation_points, vec![1]);
    }

    #[test]
    fn directed_is_rejected() {
        let graph = AdjListGraph::from_edges(2, true, [(0, 1)]).unwrap();
        assert!(matches!(
            graph.bridges_and_articulation_points(),
            Err(GraphError::WrongDirectedness { .. })
        ));
    }

    #[test]
    fn every_tree_edge_is_a_bridge() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);
        for n in [2 as NumNodes, 10, 100, MAX_VERTICES] {
            let tree = random_tree(rng, n);
            assert_eq!(
                tree.compute_bridges().unwrap(),
                tree.edges().into_iter().sorted().collect_vec()
            );
        }
    }

    #[test]
    fn against_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in [3 as NumNodes, 8, 15] {
            for _ in 0..20 {
                let graph = random_gnp(rng, n, 2.0 / n as f64, false);
                let components = number_of_components(&graph);
                let result = graph.bridges_and_articulation_points().unwrap();

                let edges = graph.edges();
                let brute_bridges = edges
                    .iter()
                    .copied()
                    .filter(|&Edge(u, v)| {
                        let mut h = graph.clone();
                        h.remove_edge(u, v).unwrap();
                        number_of_components(&h) > components
                    })
                    .sorted()
                    .collect_vec();
                assert_eq!(result.bridges, brute_bridges);

                let brute_aps = graph
                    .vertices()
                    .filter(|&x| {
                        // isolate x by removing all its edges; x itself then forms one component
                        let h = AdjListGraph::from_edges(
                            n,
                            false,
                            edges.iter().filter(|e| e.0 != x && e.1 != x),
                        )
                        .unwrap();
                        number_of_components(&h) > components + 1
                    })
                    .collect_vec();
                assert_eq!(result.articulation_points, brute_aps);
            }
        }
    }
}
