use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;

use super::code::{CodeEntry, CodeTable};
use super::{FrequencyTable, SymbolFrequency};
use crate::error::Error;
use crate::Result;

// A subtree of the working set. The leaves carry the code bits collected on
// the way from their position up to this node's root.
struct Node {
    weight: usize,
    leaves: Vec<CodeEntry>,
}

impl Node {
    fn leaf(symbol_frequency: SymbolFrequency) -> Node {
        Node {
            weight: symbol_frequency.frequency,
            leaves: vec![CodeEntry::new(symbol_frequency.symbol)],
        }
    }

    fn merge(zero: Node, one: Node) -> Node {
        let mut leaves = Vec::with_capacity(zero.leaves.len() + one.leaves.len());
        for (bit, child) in [(false, zero.leaves), (true, one.leaves)] {
            leaves.extend(child.into_iter().map(|mut leaf| {
                leaf.code.prepend(bit);
                leaf
            }));
        }
        Node {
            weight: zero.weight + one.weight,
            leaves,
        }
    }
}

// Weight first, then the leaf list compared entry by entry as
// (symbol, code so far). Two nodes never share a symbol, so this is a strict
// total order and the pop sequence of the heap is fully determined.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.leaves.cmp(&other.leaves))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

/// Huffman tree built bottom-up from a frequency table.
///
/// The two lightest nodes are merged repeatedly; every leaf of the lighter
/// one gets a `0` prepended to its code, every leaf of the other a `1`.
/// The tree only lives until its codes are read off with
/// [`HuffmanTree::into_code_table`].
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    pub fn new(frequencies: &FrequencyTable) -> Result<HuffmanTree> {
        let mut heap: BinaryHeap<Reverse<Node>> =
            frequencies.iter().map(Node::leaf).map(Reverse).collect();
        loop {
            let Some(Reverse(zero)) = heap.pop() else {
                return Err(Error::EmptyInput);
            };
            let Some(Reverse(one)) = heap.pop() else {
                return Ok(HuffmanTree { root: zero });
            };
            heap.push(Reverse(Node::merge(zero, one)));
        }
    }

    pub fn weight(&self) -> usize {
        self.root.weight
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaves.len()
    }

    pub fn into_code_table(self) -> CodeTable {
        CodeTable::from(self.root.leaves)
    }
}
