/*!
# Errors

Every fallible operation of this crate returns [`Result<T>`](Result) with a [`GraphError`].

Note that "there is no such structure" (an unreachable target, a cyclic graph passed to a
topological sort, a disconnected graph passed to Kruskal, ...) is *not* an error: these outcomes are
returned as `Ok(None)`. Callers that prefer to treat them as errors can use
[`SolutionExt::or_no_solution`].
*/

use thiserror::Error;

use crate::{edge::Edge, node::*};

/// Error taxonomy of all graph operations
#[derive(Debug, Error)]
pub enum GraphError {
    /// The number of vertices is zero or exceeds the configured maximum
    #[error("invalid number of vertices {n}: must be between 1 and {max}")]
    InvalidSize { n: u64, max: NumNodes },

    /// A vertex index is not below the number of vertices
    #[error("vertex {node} is out of range for a graph with {n} vertices")]
    OutOfRange { node: u64, n: NumNodes },

    /// The edge to be removed does not exist
    #[error("edge {0} not found")]
    NotFound(Edge),

    /// Working storage could not be allocated
    #[error("allocation failure")]
    AllocationFailure,

    /// The input is structurally inconsistent
    #[error("malformed input: {0}")]
    Malformed(String),

    /// The requested structure does not exist
    #[error("no solution exists")]
    NoSolution,

    /// The operation is only defined for the other kind of graph
    #[error("{operation} requires {} graph", kind_of(.requires_directed))]
    WrongDirectedness {
        operation: &'static str,
        requires_directed: bool,
    },

    /// An accumulated quantity (flow, weight) exceeded its integer range
    #[error("arithmetic overflow")]
    Overflow,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn kind_of(directed: &bool) -> &'static str {
    if *directed { "a directed" } else { "an undirected" }
}

impl From<std::collections::TryReserveError> for GraphError {
    fn from(_: std::collections::TryReserveError) -> Self {
        GraphError::AllocationFailure
    }
}

/// Shorthand for results of graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Converts "no structure exists" outcomes (`Ok(None)`) into [`GraphError::NoSolution`]
pub trait SolutionExt<T> {
    /// Returns the solution or [`GraphError::NoSolution`] if there is none.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(3, false, [(0, 1)]).unwrap();
    /// assert!(matches!(
    ///     g.dijkstra(0, 2).or_no_solution(),
    ///     Err(GraphError::NoSolution)
    /// ));
    /// ```
    fn or_no_solution(self) -> Result<T>;
}

impl<T> SolutionExt<T> for Result<Option<T>> {
    fn or_no_solution(self) -> Result<T> {
        self?.ok_or(GraphError::NoSolution)
    }
}

/// Allocates a vector of `len` copies of `value`, reporting failure instead of aborting
pub(crate) fn try_vec<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len)?;
    vec.resize(len, value);
    Ok(vec)
}
