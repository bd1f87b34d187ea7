/*!
Minimum spanning trees via Kruskal's algorithm.

Weights are not stored in the graph; the caller supplies them through a closure evaluated once per
edge of [`AdjacencyList::edges`]. Self-loops are skipped. Directed graphs are treated through their
underlying undirected edges.
*/

use super::*;

/// A spanning tree together with its total weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    /// The `n - 1` tree edges in the order they were selected (ascending weight)
    pub edges: Vec<WeightedEdge>,
    /// Sum of all edge weights
    pub total_weight: Weight,
}

/// Kruskal's algorithm: a union-find over the vertices plus all edges sorted by weight
pub struct Kruskal<'a, G> {
    graph: &'a G,
    components: DisjointSet,
}

impl<'a, G: AdjacencyList> Kruskal<'a, G> {
    /// Allocates the union-find for one run on `graph`.
    ///
    /// # Errors
    /// Returns `GraphError::AllocationFailure` if the union-find cannot be allocated.
    pub fn new(graph: &'a G) -> Result<Self> {
        Ok(Self {
            graph,
            components: DisjointSet::new(graph.number_of_nodes())?,
        })
    }

    /// Computes a minimum spanning tree or `None` if the graph is disconnected.
    ///
    /// # Errors
    /// - `GraphError::Overflow` if the total weight exceeds the range of [`Weight`]
    /// - `GraphError::AllocationFailure` if the edge list cannot be allocated
    pub fn run<W>(mut self, mut weight: W) -> Result<Option<SpanningTree>>
    where
        W: FnMut(Edge) -> Weight,
    {
        let edges = self.graph.edges();
        let mut candidates = Vec::new();
        candidates.try_reserve_exact(edges.len())?;
        candidates.extend(
            edges
                .into_iter()
                .filter(|e| !e.is_loop())
                .map(|e| e.with_weight(weight(e))),
        );

        // stable: equal weights keep their enumeration order
        candidates.sort_by_key(|e| e.weight);

        let target = self.graph.number_of_nodes() as usize - 1;
        let mut tree = Vec::with_capacity(target);
        let mut total_weight: Weight = 0;

        for candidate in candidates {
            if tree.len() == target {
                break;
            }

            let Edge(u, v) = candidate.edge;
            if self.components.union(u, v) {
                total_weight = total_weight
                    .checked_add(candidate.weight)
                    .ok_or(GraphError::Overflow)?;
                tree.push(candidate);
            }
        }

        if tree.len() < target {
            debug!(
                "no spanning tree: only {} of {target} edges could be added, {} components remain",
                tree.len(),
                self.components.number_of_sets()
            );
            return Ok(None);
        }

        Ok(Some(SpanningTree {
            edges: tree,
            total_weight,
        }))
    }
}

/// Spanning tree computations
pub trait SpanningTrees: AdjacencyList {
    /// Computes a minimum spanning tree with Kruskal's algorithm where `weight(e)` is the weight
    /// of edge `e`. Ties are broken by the order of [`AdjacencyList::edges`].
    ///
    /// Returns `Ok(None)` if the graph is disconnected.
    ///
    /// # Errors
    /// - `GraphError::Overflow` if the total weight exceeds the range of [`Weight`]
    /// - `GraphError::AllocationFailure` if the working storage cannot be allocated
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(3, false, [(0, 1), (1, 2), (0, 2)]).unwrap();
    /// let tree = g
    ///     .kruskal(|e| if e == Edge(0, 2) { 1 } else { 5 })
    ///     .unwrap()
    ///     .unwrap();
    ///
    /// assert_eq!(tree.total_weight, 6);
    /// assert_eq!(tree.edges, vec![Edge(0, 2).with_weight(1), Edge(0, 1).with_weight(5)]);
    /// ```
    fn kruskal<W>(&self, weight: W) -> Result<Option<SpanningTree>>
    where
        W: FnMut(Edge) -> Weight,
    {
        Kruskal::new(self)?.run(weight)
    }
}

impl<G: AdjacencyList> SpanningTrees for G {}
