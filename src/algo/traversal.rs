/*!
Graph traversal algorithms.

This module provides:
- Generic traversal iterators ([`Bfs`], [`Dfs`]) that lazily yield the vertices reachable from a
  start vertex.
- Topological ordering of directed graphs via Kahn's algorithm ([`TopoSearch`]).
- A high-level [`Traversal`] trait that exposes these algorithms directly as methods on graphs.
*/

use super::*;
use std::collections::VecDeque;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited" nodes during a traversal.
/// Different implementations determine the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**: nodes are marked visited when enqueued
/// - [`Vec`] -> stack semantics -> **DFS**: nodes are marked visited when popped, so a node may be
///   on the stack multiple times
pub trait NodeSequencer {
    /// If *true*, a node is marked as visited when pushed; otherwise when popped
    const MARK_ON_PUSH: bool;

    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    const MARK_ON_PUSH: bool = true;

    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    const MARK_ON_PUSH: bool = false;

    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and a set of visited nodes.
/// Neighbors are considered in adjacency order; only the component reachable from the start is
/// produced.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
}

/// A BFS traversal iterator over the graph, visiting nodes in level order from a given start.
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph, visiting nodes in pre-order from a given start.
/// Neighbors are pushed in adjacency order and therefore explored in reverse adjacency order.
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = loop {
            let u = self.sequencer.pop()?;
            if S::MARK_ON_PUSH || !self.visited.set_bit(u) {
                break u;
            }
        };

        for v in self.graph.neighbors_of(u) {
            if !self.visited.get_bit(v) {
                if S::MARK_ON_PUSH {
                    self.visited.set_bit(v);
                }
                self.sequencer.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // stack entries may already be visited once they are popped
        let lower = if S::MARK_ON_PUSH {
            self.sequencer.cardinality()
        } else {
            0
        };
        (
            lower,
            Some(self.graph.len() - self.visited.cardinality() as usize + lower),
        )
    }
}

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `start >= n`.
    pub fn new(graph: &'a G, start: Node) -> Result<Self> {
        graph.check_node(start)?;

        let mut visited = graph.vertex_bitset_unset();
        if S::MARK_ON_PUSH {
            visited.set_bit(start);
        }

        Ok(Self {
            graph,
            visited,
            sequencer: S::init(start),
        })
    }

    /// Returns *true* if `u` was already visited (or, for BFS, is already enqueued)
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

/// Iterator implementing topological ordering of a directed graph (Kahn's algorithm).
///
/// - Initializes a FIFO queue with all nodes of in-degree 0 in ascending order.
/// - Repeatedly removes a node, decreasing in-degrees of its successors,
///   and enqueues new nodes of in-degree 0.
/// - Stops once all nodes are output or the remaining nodes all lie on or behind a cycle.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<Node>,
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Constructs a new topological search on the given directed graph,
    /// initializing in-degree counts and collecting the initial set of
    /// zero in-degree nodes.
    ///
    /// # Errors
    /// Returns `GraphError::WrongDirectedness` if the graph is undirected.
    pub fn new(graph: &'a G) -> Result<Self> {
        graph.require_directed("topological_sort")?;

        let in_degs = graph.in_degrees();
        let queue = graph
            .vertices()
            .filter(|&u| in_degs[u as usize] == 0)
            .collect();

        Ok(Self {
            graph,
            in_degs,
            queue,
        })
    }
}

/// Provides convenient traversal methods (BFS, DFS, topological order)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(4, false, [(0, 1), (0, 2), (1, 3)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 1, 2, 3]);
    /// assert!(g.bfs(4).is_err());
    /// ```
    fn bfs(&self, start: Node) -> Result<Bfs<'_, Self>> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) pre-order**.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(4, false, [(0, 1), (0, 2), (1, 3)]).unwrap();
    ///
    /// let order: Vec<_> = g.dfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 2, 1, 3]);
    /// ```
    fn dfs(&self, start: Node) -> Result<Dfs<'_, Self>> {
        Dfs::new(self, start)
    }

    /// Returns an iterator yielding nodes in topological order.
    /// If the graph contains a cycle, the iterator terminates early.
    ///
    /// # Errors
    /// Returns `GraphError::WrongDirectedness` if the graph is undirected.
    fn topo_search(&self) -> Result<TopoSearch<'_, Self>> {
        TopoSearch::new(self)
    }

    /// Computes a topological order of a directed graph. Among all vertices that are ready,
    /// the one that became ready first (or has the smallest index initially) comes first.
    ///
    /// Returns `Ok(None)` if the graph contains a directed cycle.
    ///
    /// # Errors
    /// Returns `GraphError::WrongDirectedness` if the graph is undirected.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let mut g = AdjListGraph::from_edges(3, true, [(0, 1), (1, 2), (0, 2)]).unwrap();
    /// assert_eq!(g.topological_sort().unwrap(), Some(vec![0, 1, 2]));
    ///
    /// g.add_edge(2, 0).unwrap();
    /// assert_eq!(g.topological_sort().unwrap(), None);
    /// ```
    fn topological_sort(&self) -> Result<Option<Vec<Node>>> {
        let order: Vec<Node> = self.topo_search()?.collect();

        if order.len() == self.len() {
            Ok(Some(order))
        } else {
            debug!(
                "topological sort stopped after {} of {} vertices: graph is cyclic",
                order.len(),
                self.len()
            );
            Ok(None)
        }
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
