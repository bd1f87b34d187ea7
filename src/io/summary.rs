use std::fmt::{Display, Formatter};

use itertools::Itertools;

use super::*;

/// Displays the vertices and (canonical) edges of a graph together with their counts.
///
/// # Examples
/// ```
/// use adjgraph::{prelude::*, io::*};
///
/// let g = AdjListGraph::from_edges(3, false, [(1, 0), (1, 2)]).unwrap();
/// assert_eq!(
///     GraphSummary::new(&g).to_string(),
///     "Vertices: 0 1 2\nNumber of Vertices: 3\nEdges: (0, 1) (1, 2)\nNumber of Edges: 2\n"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GraphSummary<'a, G> {
    graph: &'a G,
}

impl<'a, G: AdjacencyList> GraphSummary<'a, G> {
    /// Wraps `graph` for display
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<G: AdjacencyList> Display for GraphSummary<'_, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let edges = self.graph.edges();

        writeln!(f, "Vertices: {}", self.graph.vertices().format(" "))?;
        writeln!(f, "Number of Vertices: {}", self.graph.number_of_nodes())?;
        writeln!(f, "Edges: {}", edges.iter().format(" "))?;
        writeln!(f, "Number of Edges: {}", edges.len())
    }
}
