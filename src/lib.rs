/*!
`adjgraph` is a graph data structure & algorithms library built around a single mutable
adjacency-list graph whose directedness is chosen at run time.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Graphs are bounded by a configurable maximum number of vertices ([`repr::MAX_VERTICES`] by default).
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

Every vertex owns an adjacency list that keeps insertion order and may contain parallel edges and
self-loops. Neither nodes nor edges carry weights; algorithms that need weights or capacities take
them from the caller.

### Directed vs Undirected

- In an **undirected** graph, `Edge(u, v)` is treated as equivalent to `Edge(v, u)` and
  [`edges()`](ops::AdjacencyList::edges) reports each pair once as `(min, max)`.
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are distinct.

Some algorithms are only defined for one kind of graph and report
[`GraphError::WrongDirectedness`](error::GraphError::WrongDirectedness) otherwise.

# Design

Algorithms are provided as traits implemented on every graph (e.g. `graph.bfs(0)`,
`graph.kruskal(|e| ...)`) and backed by small structs that own the working storage of one call.

Every fallible operation returns [`error::Result`]. "No such structure exists" (an unreachable
target, a cyclic graph passed to a topological sort, ...) is not an error but `Ok(None)`.

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and the graph
  representation,
- [`algo`] includes traversal, cycle detection, bridges, shortest paths, spanning trees, Eulerian
  paths, coloring and network flow,
- [`io`] includes a reader and writer for simple edge lists as well as a textual summary,
- [`utils`] includes a union-find structure and a dense matrix.

In most use-cases, `use adjgraph::{prelude::*, algo::*};` suffices for your needs.

```
use adjgraph::{prelude::*, algo::*};

let mut g = AdjListGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
assert!(g.has_cycle().unwrap());

g.remove_edge(3, 0).unwrap();
assert!(!g.has_cycle().unwrap());
assert_eq!(g.bfs(0).unwrap().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `adjgraph::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
