/*!
# Node Representation

We choose `Node = u32` as graphs in this crate are bounded by a configured maximum number of
vertices that is far below `2^32`. This allows us to (1) save space by not using `usize` or `u64`
and (2) directly manipulate node values without abstracting over them.
*/

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid; used as the "no parent" / "no predecessor" sentinel
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Fixed-size BitSet with one entry per node.
///
/// Thin wrapper around [`FixedBitSet`] that speaks in [`Node`]s instead of `usize`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeBitSet {
    bits: FixedBitSet,
}

impl NodeBitSet {
    /// Creates an empty bitset with space for `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(n as usize),
        }
    }

    /// Sets the bit of `u` and returns *true* if it was set before.
    /// ** Panics if `u >= n` **
    pub fn set_bit(&mut self, u: Node) -> bool {
        self.bits.put(u as usize)
    }

    /// Sets the bit of every node in the iterator
    pub fn set_bits(&mut self, nodes: impl IntoIterator<Item = Node>) {
        for u in nodes {
            self.set_bit(u);
        }
    }

    /// Clears the bit of `u` and returns *true* if it was set before.
    /// ** Panics if `u >= n` **
    pub fn clear_bit(&mut self, u: Node) -> bool {
        let was_set = self.get_bit(u);
        self.bits.set(u as usize, false);
        was_set
    }

    /// Returns *true* if the bit of `u` is set
    pub fn get_bit(&self, u: Node) -> bool {
        self.bits.contains(u as usize)
    }

    /// Clears all bits
    pub fn clear_all(&mut self) {
        self.bits.clear();
    }

    /// Returns the number of set bits
    pub fn cardinality(&self) -> NumNodes {
        self.bits.count_ones(..) as NumNodes
    }

    /// Returns the number of nodes this set can hold
    pub fn number_of_bits(&self) -> NumNodes {
        self.bits.len() as NumNodes
    }

    /// Iterates over all set bits in ascending order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.bits.ones().map(|u| u as Node)
    }

    /// Iterates over all unset bits in ascending order
    pub fn iter_cleared_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.bits.zeroes().map(|u| u as Node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn set_and_clear() {
        let mut set = NodeBitSet::new(10);
        assert!(!set.set_bit(3));
        assert!(set.set_bit(3));
        set.set_bits([7, 1]);

        assert_eq!(set.cardinality(), 3);
        assert_eq!(set.iter_set_bits().collect_vec(), vec![1, 3, 7]);

        assert!(set.clear_bit(3));
        assert!(!set.clear_bit(3));
        assert_eq!(set.iter_set_bits().collect_vec(), vec![1, 7]);

        set.clear_all();
        assert_eq!(set.cardinality(), 0);
        assert_eq!(set.number_of_bits(), 10);
    }

    #[test]
    fn cleared_bits() {
        let mut set = NodeBitSet::new(5);
        set.set_bits([0, 2, 3]);
        assert_eq!(set.iter_cleared_bits().collect_vec(), vec![1, 4]);
    }
}
