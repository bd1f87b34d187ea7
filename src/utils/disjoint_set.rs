use super::*;

/// Union-Find over the nodes `0..n` with path compression and union by rank.
///
/// # Examples
/// ```
/// use adjgraph::utils::DisjointSet;
///
/// let mut sets = DisjointSet::new(4).unwrap();
/// assert!(sets.union(0, 1));
/// assert!(sets.union(2, 3));
/// assert!(!sets.union(1, 0));
///
/// assert!(sets.same_set(0, 1));
/// assert!(!sets.same_set(1, 2));
/// assert_eq!(sets.number_of_sets(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<Node>,
    rank: Vec<u8>,
    num_sets: NumNodes,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    ///
    /// # Errors
    /// Returns `GraphError::AllocationFailure` if the parent/rank arrays cannot be allocated.
    pub fn new(n: NumNodes) -> Result<Self> {
        let mut parent = Vec::new();
        parent.try_reserve_exact(n as usize)?;
        parent.extend(0..n);

        Ok(Self {
            parent,
            rank: try_vec(n as usize, 0)?,
            num_sets: n,
        })
    }

    /// Returns the representative of the set containing `u`.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = u;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `u` and `v`. Returns *true* if they were different before.
    /// ** Panics if `u >= n || v >= n` **
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return false;
        }

        match self.rank[ru as usize].cmp(&self.rank[rv as usize]) {
            std::cmp::Ordering::Less => self.parent[ru as usize] = rv,
            std::cmp::Ordering::Greater => self.parent[rv as usize] = ru,
            std::cmp::Ordering::Equal => {
                self.parent[rv as usize] = ru;
                self.rank[ru as usize] += 1;
            }
        }

        self.num_sets -= 1;
        true
    }

    /// Returns *true* if `u` and `v` are in the same set
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    /// Returns the current number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn chain() {
        let mut sets = DisjointSet::new(100).unwrap();
        for u in 1..100 {
            assert!(sets.union(u - 1, u));
        }
        assert_eq!(sets.number_of_sets(), 1);
        let root = sets.find(0);
        assert!((0..100).all(|u| sets.find(u) == root));
    }

    #[test]
    fn against_labels() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let n = 40;

        for _ in 0..20 {
            let mut sets = DisjointSet::new(n).unwrap();
            let mut label: Vec<Node> = (0..n).collect();

            for _ in 0..30 {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);

                let (lu, lv) = (label[u as usize], label[v as usize]);
                assert_eq!(sets.union(u, v), lu != lv);
                label.iter_mut().filter(|l| **l == lv).for_each(|l| *l = lu);
            }

            for u in 0..n {
                for v in 0..n {
                    assert_eq!(sets.same_set(u, v), label[u as usize] == label[v as usize]);
                }
            }
        }
    }
}
