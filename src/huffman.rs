use std::collections::BTreeMap;

use crate::Result;

pub mod code;
pub mod tree;

pub use code::{BitString, CodeEntry, CodeTable};
pub use tree::HuffmanTree;

pub type Symbol = char;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: usize,
}

impl SymbolFrequency {
    pub fn new(symbol: Symbol, frequency: usize) -> Self {
        Self { symbol, frequency }
    }
}

impl From<(Symbol, usize)> for SymbolFrequency {
    fn from(value: (Symbol, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Occurrence count of every symbol seen in a record.
///
/// Only symbols with a positive count are stored. Iteration is ordered by
/// symbol so that the tree build sees the same input on every run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_symbol(&mut self, symbol: Symbol) {
        *self.counts.entry(symbol).or_default() += 1;
    }

    pub fn frequency(&self, symbol: Symbol) -> usize {
        self.counts.get(&symbol).copied().unwrap_or_default()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of counted characters.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = SymbolFrequency> + '_ {
        self.counts
            .iter()
            .map(|(&symbol, &frequency)| SymbolFrequency::new(symbol, frequency))
    }
}

impl FromIterator<Symbol> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = Symbol>>(symbols: T) -> Self {
        let mut table = Self::new();
        for symbol in symbols {
            table.increment_symbol(symbol);
        }
        table
    }
}

impl FromIterator<SymbolFrequency> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = SymbolFrequency>>(frequencies: T) -> Self {
        let counts = frequencies
            .into_iter()
            .filter(|sf| sf.frequency > 0)
            .fold(BTreeMap::new(), |mut counts, sf| {
                *counts.entry(sf.symbol).or_default() += sf.frequency;
                counts
            });
        Self { counts }
    }
}

/// Builds the prefix-free code for the given frequencies.
///
/// A table with a single symbol yields the empty code for it, so such records
/// encode to zero bits. Fails with [`crate::Error::EmptyInput`] when the table
/// is empty.
pub fn build_code_table(frequencies: &FrequencyTable) -> Result<CodeTable> {
    let tree = HuffmanTree::new(frequencies)?;
    log::debug!(
        "Built huffman tree of weight {} over {} symbols",
        tree.weight(),
        tree.leaf_count()
    );
    Ok(tree.into_code_table())
}
