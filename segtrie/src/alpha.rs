//! Alphabet mapping: input code points to compact trie symbols.
//!
//! The map is configured once with an inclusive code-point range and is
//! immutable afterwards. The default configuration accepts the entire 32-bit
//! range, which makes the mapping an identity — the abstraction stays so a
//! narrower alphabet can be substituted without touching the trie.

use crate::error::{Result, TrieError};

/// Internal symbol id assigned to one accepted code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(pub(crate) u32);

impl Symbol {
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Maps the accepted code-point domain onto trie symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaMap {
    lo: u32,
    hi: u32,
}

impl AlphaMap {
    /// Accept every 32-bit code point (identity mapping).
    pub fn full() -> Self {
        Self { lo: 0, hi: u32::MAX }
    }

    /// Accept the inclusive range `lo..=hi`.
    ///
    /// Returns `None` if `lo > hi`.
    pub fn with_range(lo: u32, hi: u32) -> Option<Self> {
        if lo > hi {
            return None;
        }
        Some(Self { lo, hi })
    }

    /// The configured inclusive `(lo, hi)` range.
    pub fn range(&self) -> (u32, u32) {
        (self.lo, self.hi)
    }

    /// Map one code point into the symbol domain.
    pub fn to_symbol(&self, ch: char) -> Result<Symbol> {
        let cp = ch as u32;
        if cp < self.lo || cp > self.hi {
            return Err(TrieError::OutOfDomain { codepoint: cp });
        }
        Ok(Symbol(cp - self.lo))
    }

    /// Map a whole word, one symbol per Unicode scalar.
    pub fn to_symbols(&self, word: &str) -> Result<Vec<Symbol>> {
        word.chars().map(|ch| self.to_symbol(ch)).collect()
    }
}

impl Default for AlphaMap {
    fn default() -> Self {
        Self::full()
    }
}
