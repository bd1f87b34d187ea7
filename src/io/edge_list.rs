//! # EdgeList
//!
//! The EdgeList-Format consists of a line holding the number of edges `m`, followed by `m`
//! non-empty lines `a, b` representing an edge `Edge(a, b)`. Blank lines are skipped.

use std::io::Lines;

use super::*;

/// A GraphReader for the EdgeList-Format.
///
/// Edges with a negative endpoint are skipped with a warning. The graph has `max + 1` vertices
/// where `max` is the largest non-negative endpoint; directedness and the vertex limit are taken
/// from the reader's settings.
///
/// # Examples
/// ```
/// use adjgraph::{prelude::*, io::*};
///
/// let input = "3\n0, 1\n1, 2\n-1, 2\n";
/// let graph: AdjListGraph = EdgeListReader::new().directed(true).try_read_graph(input.as_bytes()).unwrap();
///
/// assert!(graph.is_directed());
/// assert_eq!(graph.number_of_nodes(), 3);
/// assert_eq!(graph.edges(), vec![Edge(0, 1), Edge(1, 2)]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListReader {
    builder: GraphBuilder,
}

impl EdgeListReader {
    /// Creates a new (default) reader producing undirected graphs
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader that builds its graphs with `builder`
    pub fn with_builder(builder: GraphBuilder) -> Self {
        Self { builder }
    }

    /// Sets whether the read graph is directed
    pub fn set_directed(&mut self, directed: bool) {
        self.builder.set_directed(directed);
    }

    /// Sets whether the read graph is directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.set_directed(directed);
        self
    }

    /// Sets the maximum number of vertices of a read graph
    pub fn set_max_vertices(&mut self, max_vertices: NumNodes) {
        self.builder.set_max_vertices(max_vertices);
    }

    /// Sets the maximum number of vertices of a read graph
    pub fn max_vertices(mut self, max_vertices: NumNodes) -> Self {
        self.set_max_vertices(max_vertices);
        self
    }
}

impl GraphReader<AdjListGraph> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<AdjListGraph> {
        let mut edges_reader = EdgeListEdgesReader::try_new(reader)?;

        let mut edges = Vec::new();
        let mut max_node: Option<u64> = None;
        while let Some((a, b)) = edges_reader.next_edge()? {
            if a < 0 || b < 0 {
                warn!("skipping edge ({a}, {b}) with negative endpoint");
                continue;
            }

            let (a, b) = (a as u64, b as u64);
            max_node = max_node.max(Some(a.max(b)));
            edges.push((a, b));
        }

        let n = self.builder.check_size(max_node.map_or(0, |max| max + 1))?;
        debug!(
            "read edge list with {} edges on {n} vertices ({} skipped)",
            edges.len(),
            edges_reader.number_of_edges() - edges.len()
        );

        let mut graph = self.builder.build(n)?;
        for (a, b) in edges {
            // both endpoints are below n <= max_vertices < INVALID_NODE
            graph.add_edge(a as Node, b as Node)?;
        }

        Ok(graph)
    }
}

/// Trait for creating graphs from the EdgeList-Format with default reader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl EdgeListRead for AdjListGraph {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Parses the header and yields the raw (possibly negative) endpoint pairs
struct EdgeListEdgesReader<R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of the last line returned by `lines`
    line_number: usize,
    /// Number of edges parsed from the header
    number_of_edges: usize,
    /// Number of edge lines parsed so far
    parsed: usize,
}

impl<R: BufRead> EdgeListEdgesReader<R> {
    /// Creates a new EdgeListEdgesReader and tries to parse the first non-empty line as the
    /// number of edges
    fn try_new(reader: R) -> Result<Self> {
        let mut edges_reader = Self {
            lines: reader.lines(),
            line_number: 0,
            number_of_edges: 0,
            parsed: 0,
        };

        let Some(header) = edges_reader.next_non_empty_line()? else {
            return Err(GraphError::Malformed("number of edges not found".into()));
        };

        let line = edges_reader.line_number;
        let mut parts = header.split_whitespace();
        let number_of_edges: i64 = parse_next_value!(parts, "number of edges", line);
        raise_malformed_unless!(
            parts.next().is_none(),
            "line {line}: unexpected token after number of edges"
        );
        raise_malformed_unless!(
            number_of_edges >= 0,
            "line {line}: negative number of edges {number_of_edges}"
        );

        edges_reader.number_of_edges = usize::try_from(number_of_edges)
            .map_err(|_| GraphError::Malformed(format!("line {line}: too many edges")))?;

        Ok(edges_reader)
    }

    /// Returns the number of edges announced by the header
    fn number_of_edges(&self) -> usize {
        self.number_of_edges
    }

    /// Returns the next non-empty line if it exists or propagates an error
    fn next_non_empty_line(&mut self) -> Result<Option<String>> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = line?;
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Parses the next edge line or returns `None` once all announced edges have been read
    fn next_edge(&mut self) -> Result<Option<(i64, i64)>> {
        if self.parsed == self.number_of_edges {
            return Ok(None);
        }

        let Some(line) = self.next_non_empty_line()? else {
            return Err(GraphError::Malformed(format!(
                "expected {} edges, found only {}",
                self.number_of_edges, self.parsed
            )));
        };
        self.parsed += 1;

        let line_number = self.line_number;
        let mut parts = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty());

        let a = parse_next_value!(parts, "source node", line_number);
        let b = parse_next_value!(parts, "target node", line_number);
        raise_malformed_unless!(
            parts.next().is_none(),
            "line {line_number}: unexpected token after edge"
        );

        Ok(Some((a, b)))
    }
}

/// A writer for the EdgeList-Format.
///
/// Writes [`AdjacencyList::edges`], i.e. undirected edges once in canonical `(min, max)` form.
/// Isolated vertices after the largest endpoint are not representable and get lost.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G: AdjacencyList> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let edges = graph.edges();
        writeln!(writer, "{}", edges.len())?;

        for Edge(u, v) in edges {
            writeln!(writer, "{u}, {v}")?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl<G: AdjacencyList> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter.try_write_graph(self, writer)
    }

    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        EdgeListWriter.try_write_graph_file(self, path)
    }
}
