/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the graph traits in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use adjgraph::algo::*;
```
and gain access to traversal, cycle detection, bridges, shortest paths, spanning trees, Eulerian
paths, coloring and network flow.

Algorithms are exposed as traits implemented for every [`AdjacencyList`]. Each call owns its working
storage and returns an independent result; none of them modifies the graph.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

pub mod bridges;
pub mod coloring;
pub mod cycles;
pub mod eulerian;
pub mod network_flow;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;

use crate::{prelude::*, utils::*};
use tracing::{debug, trace};

pub use bridges::*;
pub use coloring::*;
pub use cycles::*;
pub use eulerian::*;
pub use network_flow::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
