/*!
Vertex coloring heuristics.

- [`GraphColoring::greedy_coloring`]: vertices in index order, each receives the smallest color
  not used by an already colored neighbor.
- [`GraphColoring::dsatur`]: Brélaz' DSATUR heuristic; always colors next the uncolored vertex
  whose colored neighbors use the most distinct colors.

Neighborhoods are taken symmetrically: for directed graphs, in- and out-neighbors both constrain a
vertex, so the result is a proper coloring of the underlying undirected graph. Self-loops are
ignored.
*/

use fxhash::FxHashSet;

use super::*;

/// Color of a vertex; colors are `0..num_colors`
pub type Color = NumNodes;

/// A vertex coloring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    /// `colors[u]` is the color of vertex `u`
    pub colors: Vec<Color>,
    /// Number of distinct colors used, i.e. the largest color plus one
    pub num_colors: NumNodes,
}

impl Coloring {
    fn from_colors(colors: Vec<Color>) -> Self {
        let num_colors = colors.iter().max().map_or(0, |&c| c + 1);
        Self { colors, num_colors }
    }
}

const UNCOLORED: Color = Color::MAX;

/// Returns the smallest color not used by any colored vertex in `neighbors`
fn smallest_free_color(neighbors: &[Node], colors: &[Color], used: &mut NodeBitSet) -> Color {
    for &v in neighbors {
        let c = colors[v as usize];
        if c != UNCOLORED {
            used.set_bit(c);
        }
    }

    let free = used.iter_cleared_bits().next().unwrap_or(used.number_of_bits());

    for &v in neighbors {
        let c = colors[v as usize];
        if c != UNCOLORED {
            used.clear_bit(c);
        }
    }

    free
}

/// Greedy sequential coloring in index order
pub struct GreedyColoring {
    neighbors: Vec<Vec<Node>>,
}

impl GreedyColoring {
    /// Copies the symmetric neighborhoods of `graph`
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        Self {
            neighbors: graph.symmetric_adjacency_lists(),
        }
    }

    /// Colors the vertices in index order.
    ///
    /// # Errors
    /// Returns `GraphError::AllocationFailure` if the color array cannot be allocated.
    pub fn run(self) -> Result<Coloring> {
        let n = self.neighbors.len();
        let mut colors = try_vec(n, UNCOLORED)?;
        let mut used = NodeBitSet::new(n as NumNodes + 1);

        for u in 0..n {
            colors[u] = smallest_free_color(&self.neighbors[u], &colors, &mut used);
        }

        Ok(Coloring::from_colors(colors))
    }
}

/// DSATUR coloring
pub struct Dsatur {
    neighbors: Vec<Vec<Node>>,
}

impl Dsatur {
    /// Copies the symmetric neighborhoods of `graph`
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        Self {
            neighbors: graph.symmetric_adjacency_lists(),
        }
    }

    fn static_degree(&self, u: Node) -> usize {
        self.neighbors[u as usize].len()
    }

    /// Uncolored vertex with maximum saturation, then maximum degree, then minimum index
    fn next_vertex(&self, colors: &[Color], saturation: &[FxHashSet<Color>]) -> Option<Node> {
        let mut best: Option<Node> = None;
        for u in 0..colors.len() as Node {
            if colors[u as usize] != UNCOLORED {
                continue;
            }

            let better = match best {
                None => true,
                Some(b) => {
                    let key_u = (saturation[u as usize].len(), self.static_degree(u));
                    let key_b = (saturation[b as usize].len(), self.static_degree(b));
                    key_u > key_b
                }
            };
            if better {
                best = Some(u);
            }
        }
        best
    }

    /// Colors the vertices in order of decreasing saturation.
    ///
    /// # Errors
    /// Returns `GraphError::AllocationFailure` if the color or saturation arrays cannot be
    /// allocated.
    pub fn run(self) -> Result<Coloring> {
        let n = self.neighbors.len();
        let mut colors = try_vec(n, UNCOLORED)?;
        let mut saturation: Vec<FxHashSet<Color>> = try_vec(n, FxHashSet::default())?;
        let mut used = NodeBitSet::new(n as NumNodes + 1);

        // the first pick has saturation 0 everywhere, so it is the first vertex of maximum degree
        while let Some(u) = self.next_vertex(&colors, &saturation) {
            let color = smallest_free_color(&self.neighbors[u as usize], &colors, &mut used);
            colors[u as usize] = color;

            for &v in &self.neighbors[u as usize] {
                if colors[v as usize] == UNCOLORED {
                    saturation[v as usize].insert(color);
                }
            }
        }

        Ok(Coloring::from_colors(colors))
    }
}

/// Vertex coloring heuristics
pub trait GraphColoring: AdjacencyList {
    /// Colors the vertices greedily in index order.
    ///
    /// # Errors
    /// Returns `GraphError::AllocationFailure` if the working storage cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// let coloring = g.greedy_coloring().unwrap();
    ///
    /// assert_eq!(coloring.colors, vec![0, 1, 0, 1]);
    /// assert_eq!(coloring.num_colors, 2);
    /// ```
    fn greedy_coloring(&self) -> Result<Coloring> {
        GreedyColoring::new(self).run()
    }

    /// Colors the vertices with the DSATUR heuristic.
    ///
    /// # Errors
    /// Returns `GraphError::AllocationFailure` if the working storage cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// // crown graph on 6 vertices: greedy needs 3 colors, DSATUR finds 2
    /// let g = AdjListGraph::from_edges(
    ///     6,
    ///     false,
    ///     [(0, 3), (0, 5), (1, 2), (1, 4), (2, 5), (3, 4)],
    /// ).unwrap();
    ///
    /// assert_eq!(g.greedy_coloring().unwrap().num_colors, 3);
    /// assert_eq!(g.dsatur().unwrap().num_colors, 2);
    /// ```
    fn dsatur(&self) -> Result<Coloring> {
        Dsatur::new(self).run()
    }
}

impl<G: AdjacencyList> GraphColoring for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_gnp;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    /// Asserts that adjacent vertices differ and that at most `max_degree + 1` colors are used
    fn assert_proper(graph: &AdjListGraph, coloring: &Coloring) {
        assert_eq!(coloring.colors.len(), graph.len());
        for Edge(u, v) in graph.edges() {
            if u != v {
                assert_ne!(coloring.colors[u as usize], coloring.colors[v as usize]);
            }
        }

        assert_eq!(
            coloring.num_colors,
            coloring.colors.iter().max().unwrap() + 1
        );

        let max_degree = graph
            .symmetric_adjacency_lists()
            .iter()
            .map(|list| list.len())
            .max()
            .unwrap();
        assert!(coloring.num_colors as usize <= max_degree + 1);
    }

    #[test]
    fn edgeless() {
        let graph = AdjListGraph::new(5, false).unwrap();
        for coloring in [graph.greedy_coloring().unwrap(), graph.dsatur().unwrap()] {
            assert_eq!(coloring.colors, vec![0; 5]);
            assert_eq!(coloring.num_colors, 1);
        }
    }

    #[test]
    fn clique() {
        let n = 6;
        let edges = (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v)));
        let graph = AdjListGraph::from_edges(n, false, edges).unwrap();

        assert_eq!(graph.greedy_coloring().unwrap().colors, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(graph.dsatur().unwrap().num_colors, n);
    }

    #[test]
    fn dsatur_order() {
        // vertex 2 has maximum degree and is colored first
        let graph = AdjListGraph::from_edges(5, false, [(0, 2), (1, 2), (2, 3), (3, 4)]).unwrap();
        let coloring = graph.dsatur().unwrap();
        assert_eq!(coloring.colors, vec![1, 1, 0, 1, 0]);
        assert_eq!(coloring.num_colors, 2);
    }

    #[test]
    fn directed_uses_both_directions() {
        // with out-neighbors only, 1 would not see the color of 0
        let graph = AdjListGraph::from_edges(3, true, [(0, 1), (2, 1), (1, 1)]).unwrap();
        let coloring = graph.greedy_coloring().unwrap();
        assert_eq!(coloring.colors, vec![0, 1, 0]);
    }

    #[test]
    fn random_graphs_are_properly_colored() {
        let rng = &mut Pcg64Mcg::seed_from_u64(29);

        for directed in [false, true] {
            for n in [2 as NumNodes, 10, 40] {
                for _ in 0..10 {
                    let graph = random_gnp(rng, n, 0.3, directed);
                    assert_proper(&graph, &graph.greedy_coloring().unwrap());
                    assert_proper(&graph, &graph.dsatur().unwrap());
                }
            }
        }
    }
}
