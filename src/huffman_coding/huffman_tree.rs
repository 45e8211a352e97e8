//! Huffman tree construction.
//!
//! The tree lives in a flat arena. Leaves are pushed first, in ascending symbol order, and every
//! merged node is appended after them, so a node's arena index is also the order in which it
//! entered the priority queue. Keying the queue by (weight, index) makes ties deterministic.

use log::trace;

use super::min_heap::MinHeap;
use crate::error::CodecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeData {
    /// Indices of the left and right children.
    Kids(usize, usize),
    Leaf(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

/// Priority queue key. Field order gives the derived ordering: weight, then arena index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    weight: u64,
    node: usize,
}

#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: usize,
}

impl HuffmanTree {
    /// Build a tree from (symbol, frequency) pairs. Symbols must be distinct with non-zero
    /// frequencies, and are expected in ascending order. An empty slice yields EmptyQueue.
    pub fn from_freqs(freqs: &[(u8, u64)]) -> Result<Self, CodecError> {
        let mut nodes: Vec<Node> = Vec::with_capacity(freqs.len() * 2);
        let leaves = freqs
            .iter()
            .map(|&(sym, weight)| {
                nodes.push(Node {
                    weight,
                    node_data: NodeData::Leaf(sym),
                });
                QueueEntry {
                    weight,
                    node: nodes.len() - 1,
                }
            })
            .collect::<Vec<_>>();
        let mut heap = MinHeap::build(leaves);

        while heap.len() > 1 {
            let left = heap.extract_min()?;
            let right = heap.extract_min()?;
            let weight = left.weight + right.weight;
            nodes.push(Node {
                weight,
                node_data: NodeData::Kids(left.node, right.node),
            });
            trace!(
                "Merged nodes {} and {} into {} (weight {})",
                left.node,
                right.node,
                nodes.len() - 1,
                weight
            );
            heap.insert(QueueEntry {
                weight,
                node: nodes.len() - 1,
            });
        }

        let root = heap.extract_min()?.node;
        Ok(HuffmanTree { nodes, root })
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Total weight of the tree, which is the number of input symbols it was built from.
    pub fn weight(&self) -> u64 {
        self.nodes[self.root].weight
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0_usize)];
        while let Some((idx, depth)) = stack.pop() {
            match self.nodes[idx].node_data {
                NodeData::Kids(left, right) => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                NodeData::Leaf(_) => deepest = deepest.max(depth),
            }
        }
        deepest
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, NodeData};
    use crate::error::CodecError;

    #[test]
    fn merges_lightest_pair_first() {
        // A:3 B:2 C:1. C and B merge first (left = C, extracted first), then A ties with that
        // node at weight 3 and is extracted first because it entered the queue earlier.
        let tree = HuffmanTree::from_freqs(&[(b'A', 3), (b'B', 2), (b'C', 1)]).unwrap();
        assert_eq!(tree.weight(), 6);
        assert_eq!(tree.nodes().len(), 5);
        let root = tree.node(tree.root());
        assert_eq!(root.node_data, NodeData::Kids(0, 3));
        assert_eq!(tree.node(3).node_data, NodeData::Kids(2, 1));
        assert_eq!(tree.node(3).weight, 3);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn internal_weights_are_sums() {
        let freqs: Vec<(u8, u64)> = (0..20).map(|s| (s, s as u64 * 7 % 11 + 1)).collect();
        let tree = HuffmanTree::from_freqs(&freqs).unwrap();
        for node in tree.nodes() {
            if let NodeData::Kids(l, r) = node.node_data {
                assert_eq!(node.weight, tree.node(l).weight + tree.node(r).weight);
            }
        }
        let total: u64 = freqs.iter().map(|f| f.1).sum();
        assert_eq!(tree.weight(), total);
        assert_eq!(tree.nodes().len(), 39);
    }

    #[test]
    fn single_symbol_root_is_a_leaf() {
        let tree = HuffmanTree::from_freqs(&[(0x41, 1000)]).unwrap();
        assert!(tree.node(tree.root()).is_leaf());
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.weight(), 1000);
    }

    #[test]
    fn no_symbols_is_an_empty_queue() {
        assert_eq!(
            HuffmanTree::from_freqs(&[]).unwrap_err(),
            CodecError::EmptyQueue
        );
    }

    #[test]
    fn build_is_deterministic() {
        let freqs: Vec<(u8, u64)> = (0..=255).map(|s| (s, 5)).collect();
        let a = HuffmanTree::from_freqs(&freqs).unwrap();
        let b = HuffmanTree::from_freqs(&freqs).unwrap();
        assert_eq!(a.nodes(), b.nodes());
        assert_eq!(a.depth(), 8);
    }
}
