use super::*;

/// Configures and creates an [`AdjListGraph`].
///
/// # Examples
/// ```
/// use adjgraph::prelude::*;
///
/// let graph = GraphBuilder::new().directed(true).max_vertices(100).build(42).unwrap();
/// assert!(graph.is_directed());
/// assert_eq!(graph.number_of_nodes(), 42);
///
/// assert!(GraphBuilder::new().max_vertices(100).build(101).is_err());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct GraphBuilder {
    directed: bool,
    max_vertices: NumNodes,
}

impl Default for GraphBuilder {
    /// Undirected graphs with at most [`MAX_VERTICES`] vertices
    fn default() -> Self {
        Self {
            directed: false,
            max_vertices: MAX_VERTICES,
        }
    }
}

impl GraphBuilder {
    /// Creates a new (default) builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the created graph is directed
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    /// Sets whether the created graph is directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.set_directed(directed);
        self
    }

    /// Sets the maximum number of vertices a created graph may have.
    /// Values reaching [`INVALID_NODE`] are clamped below it.
    pub fn set_max_vertices(&mut self, max_vertices: NumNodes) {
        self.max_vertices = max_vertices.min(INVALID_NODE - 1);
    }

    /// Sets the maximum number of vertices a created graph may have.
    pub fn max_vertices(mut self, max_vertices: NumNodes) -> Self {
        self.set_max_vertices(max_vertices);
        self
    }

    /// Returns whether created graphs are directed
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the configured maximum number of vertices
    pub fn max_vertices_limit(&self) -> NumNodes {
        self.max_vertices
    }

    /// Returns `GraphError::InvalidSize` unless `1 <= n <= max_vertices`
    pub fn check_size(&self, n: u64) -> Result<NumNodes> {
        if n == 0 || n > self.max_vertices as u64 {
            Err(GraphError::InvalidSize {
                n,
                max: self.max_vertices,
            })
        } else {
            Ok(n as NumNodes)
        }
    }

    /// Creates an edgeless graph with `n` vertices.
    ///
    /// # Errors
    /// - `GraphError::InvalidSize` unless `1 <= n <= max_vertices`
    /// - `GraphError::AllocationFailure` if the adjacency lists cannot be allocated
    pub fn build(&self, n: NumNodes) -> Result<AdjListGraph> {
        let n = self.check_size(n as u64)?;
        AdjListGraph::with_lists(try_vec(n as usize, Vec::new())?, self.directed)
    }
}
