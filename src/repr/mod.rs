/*!
# Graph Representations

This crate has a single mutable graph store, [`AdjListGraph`], which keeps one growable adjacency
list per vertex. Whether edges are directed is decided at construction and cannot be changed
afterwards. Graphs are created either via [`GraphNew::new`] (default limits) or via a
[`GraphBuilder`] (configurable limits).
*/

use crate::{error::*, ops::*, *};

mod adj_list;
mod builder;

pub use adj_list::*;
pub use builder::*;

/// Default upper bound on the number of vertices of a graph
pub const MAX_VERTICES: NumNodes = 10_000;
