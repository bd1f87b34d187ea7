/*!
# Utilities

Helper structures used by the algorithms of this crate:
- [`DisjointSet`]: union-find with path compression and union by rank (used by Kruskal),
- [`Matrix`]: a dense `n x n` matrix allocated fallibly (capacities, residuals, all-pairs distances).

Both are created per algorithm call and owned by it.
*/

use crate::{error::*, node::*};

mod disjoint_set;
mod matrix;

pub use disjoint_set::DisjointSet;
pub use matrix::Matrix;
