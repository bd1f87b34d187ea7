//! Random instances shared by the unit tests of this crate

use itertools::Itertools;
use rand::Rng;

use crate::{prelude::*, utils::Matrix};

/// Creates `m` random edges (possibly parallel or self-loops) for nodes `0..n`
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumNodes) -> Vec<Edge> {
    (0..m)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
        .collect_vec()
}

/// Creates a random simple graph where each pair (each ordered pair if `directed`) is an edge
/// with probability `p` (clamped to 1)
pub(crate) fn random_gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> AdjListGraph {
    let p = p.min(1.0);
    let mut graph = AdjListGraph::new(n, directed).unwrap();
    for u in 0..n {
        for v in 0..n {
            if u == v || (!directed && v < u) {
                continue;
            }
            if rng.random_bool(p) {
                graph.add_edge(u, v).unwrap();
            }
        }
    }
    graph
}

/// Creates a random recursive tree: each node `v > 0` is attached to a uniformly chosen
/// predecessor
pub(crate) fn random_tree<R: Rng>(rng: &mut R, n: NumNodes) -> AdjListGraph {
    AdjListGraph::from_edges(
        n,
        false,
        (1..n).map(|v| Edge(rng.random_range(0..v), v)),
    )
    .unwrap()
}

/// Assigns a random capacity in `1..=max_cap` to every arc of the graph; all other entries are 0
pub(crate) fn random_capacities<R: Rng>(
    rng: &mut R,
    graph: &AdjListGraph,
    max_cap: u64,
) -> Matrix<u64> {
    let mut capacities = Matrix::try_new(graph.number_of_nodes(), 0).unwrap();
    for Edge(u, v) in graph.edges() {
        capacities[(u, v)] = rng.random_range(1..=max_cap);
    }
    capacities
}
