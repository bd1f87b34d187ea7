/*!
# Graph IO

Reading and writing graphs in the edge-list format and rendering a textual summary.

The edge-list format starts with a line holding the number of edges, followed by one line
`a, b` per edge (commas and whitespace both separate the endpoints):

```text
3
0, 1
1, 2
2, 0
```

The number of vertices is not stored: a reader uses the largest endpoint plus one.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tracing::{debug, warn};

use crate::{prelude::*, *};

mod edge_list;
mod summary;

pub use edge_list::*;
pub use summary::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Shorthand for returning `Err(GraphError::Malformed)` early when a condition fails
macro_rules! raise_malformed_unless {
    ($cond : expr, $($info : tt)+) => {
        if !($cond) {
            return Err(GraphError::Malformed(format!($($info)+)));
        }
    };
}

/// Tries to parse the next token of an iterator and returns `GraphError::Malformed` early if it
/// is missing or cannot be parsed
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr, $line : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(GraphError::Malformed(format!(
                "line {}: premature end of line when parsing {}",
                $line, $name
            )));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(GraphError::Malformed(format!(
                    "line {}: cannot parse {} from {token:?}",
                    $line, $name
                )));
            }
        }
    }};
}

use parse_next_value;
use raise_malformed_unless;
