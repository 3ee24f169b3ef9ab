use std::collections::VecDeque;
use std::fmt;

use super::{FrequencyTable, Symbol};
use crate::error::Error;
use crate::Result;

/// Sequence of bits, rendered as a string of `0` and `1`.
///
/// Ordering is lexicographic with `0 < 1` and a proper prefix sorting before
/// any of its extensions.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitString {
    bits: VecDeque<bool>,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn prepend(&mut self, bit: bool) {
        self.bits.push_front(bit);
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push_back(bit);
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn starts_with(&self, prefix: &BitString) -> bool {
        prefix.len() <= self.len() && self.iter().zip(prefix.iter()).all(|(a, b)| a == b)
    }
}

impl Extend<bool> for BitString {
    fn extend<T: IntoIterator<Item = bool>>(&mut self, bits: T) {
        self.bits.extend(bits);
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<T: IntoIterator<Item = bool>>(bits: T) -> Self {
        Self {
            bits: bits.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// A symbol together with its (possibly partial) code.
///
/// Entries order by symbol first and code second. The tree build relies on
/// this when breaking ties between equally weighted nodes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CodeEntry {
    pub symbol: Symbol,
    pub code: BitString,
}

impl CodeEntry {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            code: BitString::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    // sorted by symbol
    entries: Vec<CodeEntry>,
}

impl CodeTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeEntry> {
        self.entries.iter()
    }

    pub fn code(&self, symbol: Symbol) -> Option<&BitString> {
        self.entries
            .binary_search_by(|probe| probe.symbol.cmp(&symbol))
            .ok()
            .map(|index| &self.entries[index].code)
    }

    pub fn code_length(&self, symbol: Symbol) -> Result<usize> {
        self.code(symbol)
            .map(BitString::len)
            .ok_or(Error::SymbolNotInCodeTable(symbol))
    }

    /// Substitutes every symbol with its code, in order and without separators.
    pub fn encode<I: IntoIterator<Item = Symbol>>(&self, symbols: I) -> Result<BitString> {
        let mut bits = BitString::new();
        for symbol in symbols {
            let code = self
                .code(symbol)
                .ok_or(Error::SymbolNotInCodeTable(symbol))?;
            bits.extend(code.iter());
        }
        Ok(bits)
    }

    /// Sum of code length times frequency over all symbols of `frequencies`.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> Result<usize> {
        frequencies
            .iter()
            .try_fold(0, |sum, sf| -> Result<usize> {
                Ok(sum + self.code_length(sf.symbol)? * sf.frequency)
            })
    }

    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&BitString> = self.entries.iter().map(|e| &e.code).collect();
        codes.sort();
        // after sorting, any code that has a prefix in the set directly follows one
        codes
            .windows(2)
            .all(|pair| !pair[1].starts_with(pair[0]))
    }
}

impl From<Vec<CodeEntry>> for CodeTable {
    fn from(mut entries: Vec<CodeEntry>) -> Self {
        entries.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Self { entries }
    }
}
