/*!
# Graph Operations

Traits describing what a graph representation offers. All algorithms in [`crate::algo`] are
written against these traits rather than against a concrete representation.

Methods prefixed with `check_`/`require_` validate their input and return a [`GraphError`];
the plain getters (`neighbors_of`, `degree_of`, ...) expect valid nodes and panic otherwise.
*/

use std::ops::Range;

use crate::{error::*, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V.
    /// In contrast to most other getters, the range does not borrow `self`.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if `u` is a vertex of the graph
    fn is_valid_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `GraphError::OutOfRange` if `u` is not a vertex of the graph
    fn check_node(&self, u: Node) -> Result<()> {
        if self.is_valid_node(u) {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                node: u as u64,
                n: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// In undirected graphs, every inserted edge is counted once.
    fn number_of_edges(&self) -> NumEdges;
}

/// Directedness of a graph, fixed at creation
pub trait GraphType {
    /// Returns *true* if edges are directed
    fn is_directed(&self) -> bool;

    /// Returns *true* if edges are undirected
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }

    /// Returns `GraphError::WrongDirectedness` if the graph is undirected
    fn require_directed(&self, operation: &'static str) -> Result<()> {
        if self.is_directed() {
            Ok(())
        } else {
            Err(GraphError::WrongDirectedness {
                operation,
                requires_directed: true,
            })
        }
    }

    /// Returns `GraphError::WrongDirectedness` if the graph is directed
    fn require_undirected(&self, operation: &'static str) -> Result<()> {
        if self.is_undirected() {
            Ok(())
        } else {
            Err(GraphError::WrongDirectedness {
                operation,
                requires_directed: false,
            })
        }
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphType + Sized {
    /// Returns an iterator over the neighbors of a given vertex in insertion order.
    /// Parallel edges yield the same neighbor multiple times.
    /// ** Panics if `u >= n` **
    ///
    /// Note that for directed graphs, these are the out-neighbors
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the length of the adjacency list of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the number of adjacency-list entries pointing to each vertex.
    /// For undirected graphs, this equals the degree.
    fn in_degrees(&self) -> Vec<NumNodes> {
        let mut in_degs = vec![0; self.len()];
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                in_degs[v as usize] += 1;
            }
        }
        in_degs
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns all edges of the graph.
    ///
    /// - Directed graphs report every stored arc once, including parallel arcs and self-loops.
    /// - Undirected graphs report each unordered pair exactly once as `(min, max)`, no matter
    ///   in which direction or how often it was inserted.
    ///
    /// Edges are ordered by source vertex, then by position in the source's adjacency list.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::prelude::*;
    ///
    /// let g = AdjListGraph::from_edges(3, false, [(2, 0), (1, 0), (0, 2)]).unwrap();
    /// assert_eq!(g.edges(), vec![Edge(0, 2), Edge(0, 1)]);
    /// ```
    fn edges(&self) -> Vec<Edge> {
        if self.is_directed() {
            return self.vertices().flat_map(|u| self.edges_of(u)).collect();
        }

        // Every pair is discovered first in the row of its smaller endpoint, so a single
        // row-local bitset suffices to suppress parallel edges.
        let mut edges = Vec::new();
        let mut seen = self.vertex_bitset_unset();
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                if u <= v && !seen.set_bit(v) {
                    edges.push(Edge(u, v));
                }
            }

            for v in self.neighbors_of(u) {
                seen.clear_bit(v);
            }
        }

        edges
    }

    /// Returns an owned copy of all adjacency lists
    fn adjacency_lists(&self) -> Vec<Vec<Node>> {
        self.vertices()
            .map(|u| self.neighbors_of(u).collect())
            .collect()
    }

    /// Returns the neighborhoods of the underlying undirected graph: for directed graphs, every
    /// arc `(u, v)` contributes `v` to `u`'s list and `u` to `v`'s list. Self-loops are dropped.
    fn symmetric_adjacency_lists(&self) -> Vec<Vec<Node>> {
        if self.is_undirected() {
            return self
                .vertices()
                .map(|u| self.neighbors_of(u).filter(|&v| v != u).collect())
                .collect();
        }

        let mut lists = vec![Vec::new(); self.len()];
        for Edge(u, v) in self.edges() {
            if u != v {
                lists[u as usize].push(v);
                lists[v as usize].push(u);
            }
        }
        lists
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborsSlice {
    /// Returns a slice-reference of the neighborhood of a given vertex
    /// ** Panics if `u >= n` **
    fn as_neighbors_slice(&self, u: Node) -> &[Node];
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an edgeless graph with `n` nodes.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidSize` if `n == 0` or `n` exceeds [`crate::repr::MAX_VERTICES`].
    fn new(n: NumNodes, directed: bool) -> Result<Self>;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing {
    /// Adds the edge `(u, v)` to the graph. Parallel edges and self-loops are permitted.
    ///
    /// Either the edge is fully inserted or the graph is left unchanged.
    ///
    /// # Errors
    /// - `GraphError::OutOfRange` if `u >= n || v >= n`
    /// - `GraphError::AllocationFailure` if an adjacency list cannot grow
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()>;

    /// Adds all edges in the collection, stopping at the first failure
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the first occurrence of the edge `(u, v)`. I.e., the edge FROM u TO v.
    ///
    /// # Errors
    /// - `GraphError::OutOfRange` if `u >= n || v >= n`
    /// - `GraphError::NotFound` if `v` is not a neighbor of `u`
    fn remove_edge(&mut self, u: Node, v: Node) -> Result<()>;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and a collection of edges
    fn from_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n, directed)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
