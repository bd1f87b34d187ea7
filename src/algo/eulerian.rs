/*!
Eulerian paths and circuits via Hierholzer's algorithm.

The precondition check counts vertices whose adjacency list has odd length. This is the undirected
degree parity; for directed graphs it is applied unchanged (it does not compare in- and
out-degrees), so directed inputs may be rejected although they have an Eulerian path. Directed
graphs whose walk gets stuck are still reported as `Ok(None)`: the returned sequence must use every
edge and every consecutive pair must be an arc.
*/

use fxhash::FxHashMap;

use super::*;

/// Hierholzer's algorithm on a private copy of the adjacency lists
pub struct Hierholzer {
    directed: bool,
    unused: Vec<Vec<Node>>,
    number_of_edges: usize,
}

impl Hierholzer {
    /// Copies the adjacency lists of `graph`; the graph itself is never modified.
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        let unused = graph.adjacency_lists();
        let entries: usize = unused.iter().map(|list| list.len()).sum();

        Self {
            directed: graph.is_directed(),
            number_of_edges: if graph.is_directed() {
                entries
            } else {
                entries / 2
            },
            unused,
        }
    }

    /// Applies the parity rule: with no odd vertex every start works, with two odd vertices the
    /// walk must start at one of them (the first one replaces an even `start`).
    fn choose_start(&self, start: Node) -> Option<Node> {
        let mut odd = (0..self.unused.len() as Node)
            .filter(|&u| self.unused[u as usize].len() % 2 == 1);

        match (odd.next(), odd.next(), odd.next()) {
            (None, _, _) => Some(start),
            (Some(a), Some(b), None) => Some(if start == a || start == b { start } else { a }),
            _ => None,
        }
    }

    /// Removes the first occurrence of `u` in `v`'s list (the reverse direction of `(u, v)`)
    fn remove_reverse(&mut self, u: Node, v: Node) {
        let list = &mut self.unused[v as usize];
        if let Some(pos) = list.iter().position(|&w| w == u) {
            list.remove(pos);
        }
    }

    /// Counts how often every arc occurs in the unused lists
    fn arc_multiset(&self) -> FxHashMap<Edge, NumEdges> {
        let mut arcs = FxHashMap::default();
        for (u, list) in self.unused.iter().enumerate() {
            for &v in list {
                *arcs.entry(Edge(u as Node, v)).or_insert(0) += 1;
            }
        }
        arcs
    }

    /// Returns *true* if every consecutive pair of `walk` consumes one remaining arc of `arcs`
    fn consumes_arcs(walk: &[Node], mut arcs: FxHashMap<Edge, NumEdges>) -> bool {
        walk.windows(2).all(|pair| match arcs.get_mut(&Edge(pair[0], pair[1])) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        })
    }

    /// Runs the algorithm from `start` and returns the vertices of the walk in order.
    pub fn run(mut self, start: Node) -> Option<Vec<Node>> {
        let Some(start) = self.choose_start(start) else {
            debug!("no eulerian path: more than two vertices have odd degree");
            return None;
        };

        // an unbalanced digraph can use every arc while splicing unrelated sub-walks together
        let arcs = self.directed.then(|| self.arc_multiset());

        let mut stack = vec![start];
        let mut circuit = Vec::with_capacity(self.number_of_edges + 1);

        while let Some(&u) = stack.last() {
            match self.unused[u as usize].pop() {
                Some(v) => {
                    if !self.directed {
                        self.remove_reverse(u, v);
                    }
                    stack.push(v);
                }
                None => {
                    circuit.push(u);
                    stack.pop();
                }
            }
        }

        if circuit.len() != self.number_of_edges + 1 {
            debug!(
                "no eulerian path: walk from {start} uses {} of {} edges",
                circuit.len() - 1,
                self.number_of_edges
            );
            return None;
        }

        circuit.reverse();

        if arcs.is_some_and(|arcs| !Self::consumes_arcs(&circuit, arcs)) {
            debug!("no eulerian path: walk from {start} is not connected by arcs");
            return None;
        }

        Some(circuit)
    }
}

/// Eulerian path computations
pub trait EulerianPath: AdjacencyList {
    /// Computes a walk that uses every edge exactly once.
    ///
    /// If all vertices have even degree, the walk is a circuit starting (and ending) at `start`.
    /// If exactly two vertices have odd degree, the walk connects them; `start` is kept if it is
    /// one of them and replaced by the first odd vertex otherwise.
    ///
    /// Returns `Ok(None)` if more than two vertices have odd degree or if not every edge is
    /// reachable from the start. For directed graphs, `Ok(None)` is also returned if the arcs
    /// cannot be chained into a single walk.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `start` is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(5, false, [(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    /// assert_eq!(g.eulerian_path(0).unwrap(), Some(vec![0, 1, 2, 3, 4]));
    ///
    /// // 2 has even degree, so the walk starts at the first odd vertex instead
    /// assert_eq!(g.eulerian_path(2).unwrap(), Some(vec![0, 1, 2, 3, 4]));
    /// ```
    fn eulerian_path(&self, start: Node) -> Result<Option<Vec<Node>>> {
        self.check_node(start)?;
        Ok(Hierholzer::new(self).run(start))
    }
}

impl<G: AdjacencyList> EulerianPath for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_gnp;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// Asserts that `walk` traverses every edge of `graph` exactly once
    fn assert_uses_every_edge(graph: &AdjListGraph, walk: &[Node]) {
        let walked = AdjListGraph::from_edges(
            graph.number_of_nodes(),
            graph.is_directed(),
            walk.iter().tuple_windows().map(|(&u, &v)| Edge(u, v)),
        )
        .unwrap();

        for u in graph.vertices() {
            assert_eq!(
                graph.neighbors_of(u).sorted().collect_vec(),
                walked.neighbors_of(u).sorted().collect_vec()
            );
        }
    }

    #[test]
    fn path_graph() {
        let graph = AdjListGraph::from_edges(5, false, [(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        assert_eq!(graph.eulerian_path(0).unwrap(), Some(vec![0, 1, 2, 3, 4]));
        assert_eq!(graph.eulerian_path(4).unwrap(), Some(vec![4, 3, 2, 1, 0]));
        assert!(matches!(
            graph.eulerian_path(5),
            Err(GraphError::OutOfRange { node: 5, .. })
        ));
    }

    #[test]
    fn circuit() {
        let graph = AdjListGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let walk = graph.eulerian_path(2).unwrap().unwrap();
        assert_eq!(walk.first(), Some(&2));
        assert_eq!(walk.last(), Some(&2));
        assert_uses_every_edge(&graph, &walk);
    }

    #[test]
    fn loops_and_parallel_edges() {
        let graph =
            AdjListGraph::from_edges(3, false, [(0, 1), (1, 0), (1, 1), (1, 2), (2, 2)]).unwrap();
        let walk = graph.eulerian_path(0).unwrap().unwrap();
        assert_eq!(walk.len(), 6);
        assert_eq!(walk.first(), Some(&1));
        assert_eq!(walk.last(), Some(&2));
        assert_uses_every_edge(&graph, &walk);
    }

    #[test]
    fn no_eulerian_path() {
        let star = AdjListGraph::from_edges(4, false, [(0, 1), (0, 2), (0, 3)]).unwrap();
        assert_eq!(star.eulerian_path(0).unwrap(), None);

        // all degrees even, but two components with edges
        let triangles = AdjListGraph::from_edges(
            6,
            false,
            [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)],
        )
        .unwrap();
        assert_eq!(triangles.eulerian_path(0).unwrap(), None);
    }

    #[test]
    fn edgeless() {
        let graph = AdjListGraph::new(3, false).unwrap();
        assert_eq!(graph.eulerian_path(1).unwrap(), Some(vec![1]));

        // the start is isolated but edges exist elsewhere
        let graph = AdjListGraph::from_edges(3, false, [(0, 1), (0, 1)]).unwrap();
        assert_eq!(graph.eulerian_path(2).unwrap(), None);
    }

    #[test]
    fn directed_uses_list_parity() {
        let two_cycle = AdjListGraph::from_edges(2, true, [(0, 1), (1, 0)]).unwrap();
        assert_eq!(two_cycle.eulerian_path(0).unwrap(), Some(vec![0, 1, 0]));

        // every out-list has odd length, so the parity check rejects this directed cycle
        let three_cycle = AdjListGraph::from_edges(3, true, [(0, 1), (1, 2), (2, 0)]).unwrap();
        assert_eq!(three_cycle.eulerian_path(0).unwrap(), None);
    }

    #[test]
    fn directed_walk_follows_arcs() {
        // both lists at 0 are used, but 1 and 2 are dead ends
        let fork = AdjListGraph::from_edges(3, true, [(0, 1), (0, 2)]).unwrap();
        assert_eq!(fork.eulerian_path(0).unwrap(), None);

        let two_loops = AdjListGraph::from_edges(3, true, [(0, 1), (1, 0), (0, 2), (2, 0)]).unwrap();
        let walk = two_loops.eulerian_path(1).unwrap().unwrap();
        assert_eq!(walk, vec![1, 0, 2, 0, 1]);
        assert_uses_every_edge(&two_loops, &walk);
    }

    #[test]
    fn random_directed_walks_are_valid() {
        let rng = &mut Pcg64Mcg::seed_from_u64(37);

        for n in [2 as NumNodes, 4, 6] {
            for _ in 0..50 {
                let graph = random_gnp(rng, n, 0.4, true);
                if let Some(walk) = graph.eulerian_path(0).unwrap() {
                    assert_uses_every_edge(&graph, &walk);
                }
            }
        }
    }

    #[test]
    fn graph_is_not_modified() {
        let graph = AdjListGraph::from_edges(3, false, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let before = graph.clone();
        graph.eulerian_path(0).unwrap().unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn random_closed_walks() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for n in [2 as NumNodes, 5, 20] {
            for _ in 0..20 {
                // the union of closed walks through 0 is connected with all degrees even
                let mut graph = AdjListGraph::new(n, false).unwrap();
                for _ in 0..rng.random_range(1..4) {
                    let mut u = 0;
                    for _ in 0..rng.random_range(1..2 * n) {
                        let v = rng.random_range(0..n);
                        graph.add_edge(u, v).unwrap();
                        u = v;
                    }
                    graph.add_edge(u, 0).unwrap();
                }

                let walk = graph.eulerian_path(0).unwrap().unwrap();
                assert_eq!(walk.first(), Some(&0));
                assert_eq!(walk.last(), Some(&0));
                assert_uses_every_edge(&graph, &walk);
            }
        }
    }
}
