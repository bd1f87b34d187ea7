/*!
Cycle detection for undirected and directed graphs.

Both searches are iterative depth-first searches with an explicit stack of [`DfsFrame`]s, so deep
graphs cannot overflow the call stack.
*/

use super::*;

/// Stack frame of an iterative DFS: the vertex, its DFS parent and the position in its adjacency list
pub(super) struct DfsFrame<I> {
    pub(super) vertex: Node,
    pub(super) parent: Node,
    pub(super) neighbors: I,
    /// In undirected graphs, only one copy of the edge back to the parent is the tree edge
    pub(super) skipped_parent: bool,
}

impl<I: Iterator<Item = Node>> DfsFrame<I> {
    pub(super) fn new(vertex: Node, parent: Node, neighbors: I) -> Self {
        Self {
            vertex,
            parent,
            neighbors,
            skipped_parent: false,
        }
    }

    /// Returns the next neighbor that is not the tree edge to the parent
    pub(super) fn next_non_tree_neighbor(&mut self) -> Option<Node> {
        loop {
            let v = self.neighbors.next()?;
            if v == self.parent && !self.skipped_parent {
                self.skipped_parent = true;
                continue;
            }
            return Some(v);
        }
    }
}

/// Cycle detection on graphs
pub trait Cycles: AdjacencyList {
    /// Returns *true* if the undirected graph contains a cycle.
    ///
    /// Self-loops and parallel edges count as cycles.
    ///
    /// # Errors
    /// Returns `GraphError::WrongDirectedness` for directed graphs; use
    /// [`Cycles::has_directed_cycle`] instead.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let mut g = AdjListGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]).unwrap();
    /// assert!(!g.has_cycle().unwrap());
    ///
    /// g.add_edge(3, 0).unwrap();
    /// assert!(g.has_cycle().unwrap());
    /// ```
    fn has_cycle(&self) -> Result<bool> {
        self.require_undirected("has_cycle")?;

        let mut visited = self.vertex_bitset_unset();
        let mut stack = Vec::new();

        for root in self.vertices() {
            if visited.set_bit(root) {
                continue;
            }

            stack.push(DfsFrame::new(root, INVALID_NODE, self.neighbors_of(root)));
            while let Some(frame) = stack.last_mut() {
                let Some(v) = frame.next_non_tree_neighbor() else {
                    stack.pop();
                    continue;
                };

                if visited.set_bit(v) {
                    trace!("edge ({}, {v}) closes a cycle", frame.vertex);
                    return Ok(true);
                }

                let u = frame.vertex;
                stack.push(DfsFrame::new(v, u, self.neighbors_of(v)));
            }
        }

        Ok(false)
    }

    /// Returns *true* if the directed graph contains a directed cycle (white/gray/black DFS:
    /// an arc into a vertex that is still on the DFS stack closes a cycle).
    ///
    /// Self-loops count as cycles.
    ///
    /// # Errors
    /// Returns `GraphError::WrongDirectedness` for undirected graphs; use [`Cycles::has_cycle`]
    /// instead.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let mut g = AdjListGraph::from_edges(3, true, [(0, 1), (1, 2), (0, 2)]).unwrap();
    /// assert!(!g.has_directed_cycle().unwrap());
    ///
    /// g.add_edge(2, 0).unwrap();
    /// assert!(g.has_directed_cycle().unwrap());
    /// ```
    fn has_directed_cycle(&self) -> Result<bool> {
        self.require_directed("has_directed_cycle")?;

        // gray = visited && on_stack, black = visited && !on_stack
        let mut visited = self.vertex_bitset_unset();
        let mut on_stack = self.vertex_bitset_unset();
        let mut stack = Vec::new();

        for root in self.vertices() {
            if visited.set_bit(root) {
                continue;
            }

            on_stack.set_bit(root);
            stack.push((root, self.neighbors_of(root)));

            while let Some((u, neighbors)) = stack.last_mut() {
                let Some(v) = neighbors.next() else {
                    on_stack.clear_bit(*u);
                    stack.pop();
                    continue;
                };

                if on_stack.get_bit(v) {
                    trace!("arc ({u}, {v}) closes a directed cycle");
                    return Ok(true);
                }

                if !visited.set_bit(v) {
                    on_stack.set_bit(v);
                    stack.push((v, self.neighbors_of(v)));
                }
            }
        }

        Ok(false)
    }
}

impl<G: AdjacencyList> Cycles for G {}
