use std::ops::{Index, IndexMut};

use super::*;

/// A dense `n x n` matrix indexed by pairs of nodes and stored row-major.
///
/// # Examples
/// ```
/// use adjgraph::utils::Matrix;
///
/// let mut capacities = Matrix::try_new(3, 0u64).unwrap();
/// capacities[(0, 2)] = 5;
///
/// assert_eq!(capacities.dimension(), 3);
/// assert_eq!(capacities[(0, 2)], 5);
/// assert_eq!(capacities.get(2, 0), Some(&0));
/// assert_eq!(capacities.get(3, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    n: NumNodes,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Creates an `n x n` matrix with every entry set to `value`.
    ///
    /// # Errors
    /// Returns `GraphError::AllocationFailure` if `n * n` entries cannot be allocated.
    pub fn try_new(n: NumNodes, value: T) -> Result<Self> {
        let len = (n as usize)
            .checked_mul(n as usize)
            .ok_or(GraphError::AllocationFailure)?;

        Ok(Self {
            n,
            data: try_vec(len, value)?,
        })
    }

    /// Creates a matrix from its rows.
    ///
    /// # Errors
    /// Returns `GraphError::Malformed` if the rows do not form a square matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n = rows.len();
        if let Some(row) = rows.iter().position(|r| r.len() != n) {
            return Err(GraphError::Malformed(format!(
                "row {row} of a {n}x{n} matrix has {} entries",
                rows[row].len()
            )));
        }

        Ok(Self {
            n: n as NumNodes,
            data: rows.into_iter().flatten().collect(),
        })
    }
}

impl<T> Matrix<T> {
    /// Returns the number of rows (and columns)
    pub fn dimension(&self) -> NumNodes {
        self.n
    }

    /// Returns the entry at `(u, v)` or `None` if out of bounds
    pub fn get(&self, u: Node, v: Node) -> Option<&T> {
        if u < self.n && v < self.n {
            Some(&self.data[self.offset(u, v)])
        } else {
            None
        }
    }

    /// Returns the row of `u`.
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[T] {
        let start = self.offset(u, 0);
        &self.data[start..start + self.n as usize]
    }

    fn offset(&self, u: Node, v: Node) -> usize {
        u as usize * self.n as usize + v as usize
    }
}

impl<T> Index<(Node, Node)> for Matrix<T> {
    type Output = T;

    fn index(&self, (u, v): (Node, Node)) -> &T {
        assert!(u < self.n && v < self.n);
        &self.data[self.offset(u, v)]
    }
}

impl<T> IndexMut<(Node, Node)> for Matrix<T> {
    fn index_mut(&mut self, (u, v): (Node, Node)) -> &mut T {
        assert!(u < self.n && v < self.n);
        let offset = self.offset(u, v);
        &mut self.data[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows() {
        let matrix = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(matrix.dimension(), 2);
        assert_eq!(matrix[(1, 0)], 3);
        assert_eq!(matrix.row(0), &[1, 2]);

        assert!(matches!(
            Matrix::from_rows(vec![vec![1, 2], vec![3]]),
            Err(GraphError::Malformed(_))
        ));
    }

    #[test]
    #[should_panic]
    fn out_of_bounds() {
        let matrix = Matrix::try_new(2, 0).unwrap();
        let _ = matrix[(0, 2)];
    }

    #[test]
    fn allocation_failure() {
        assert!(matches!(
            Matrix::try_new(Node::MAX, 0u64),
            Err(GraphError::AllocationFailure)
        ));
    }
}
