//! Dictionary matcher: the load/save/query facade over the trie.
//!
//! Holds one [`Trie`] plus the [`AlphaMap`] it was built against and exposes
//! the full query surface: exact membership, prefix enumeration,
//! longest-prefix lookup, and the three forward scans used for text
//! segmentation. One walk step consumes one Unicode scalar; reported matches
//! are byte-sliced out of the caller's text, never re-encoded.
//!
//! Read queries never mutate the trie and are safe to run concurrently
//! through a shared reference. `store`/`delete` take `&mut self`, so the
//! borrow checker serializes them against readers.

use std::fs;
use std::path::Path;

use crate::alpha::AlphaMap;
use crate::error::{Result, TrieError};
use crate::format;
use crate::trie::{Trie, MAX_KEY_LEN};

/// A dictionary of words with point, prefix, and forward-scan queries.
#[derive(Debug, Clone)]
pub struct DictMatcher {
    alpha: AlphaMap,
    trie: Trie,
}

impl DictMatcher {
    /// Empty matcher over the full code-point alphabet.
    pub fn new() -> Result<Self> {
        Ok(Self::with_alpha_map(AlphaMap::full()))
    }

    /// Empty matcher over a caller-chosen alphabet.
    pub fn with_alpha_map(alpha: AlphaMap) -> Self {
        Self {
            alpha,
            trie: Trie::new(),
        }
    }

    // ------------------------------------------------------------------
    // Load / save
    // ------------------------------------------------------------------

    /// Load a text dictionary: one key per line, each line trimmed of
    /// spaces, tabs, and CR/LF on both ends.
    ///
    /// Lines that trim to empty are skipped, not stored. Any trimmed line
    /// over [`MAX_KEY_LEN`] code points fails the whole load; discard the
    /// result in that case.
    pub fn from_txt_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let mut matcher = Self::new()?;
        for line in text.lines() {
            let word = line.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
            if word.is_empty() {
                continue;
            }
            matcher.store(word)?;
        }
        tracing::debug!(
            keys = matcher.trie.len(),
            path = %path.display(),
            "text dictionary loaded"
        );
        Ok(matcher)
    }

    /// Load a binary dictionary written by [`save_to_file`](Self::save_to_file).
    ///
    /// A missing file surfaces as `Io`; a truncated or corrupt blob as
    /// `Decode`.
    pub fn from_dict_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let (alpha, trie) =
            format::decode_trie(&bytes).map_err(|e| TrieError::Decode(e.to_string()))?;
        tracing::debug!(
            keys = trie.len(),
            bytes = bytes.len(),
            path = %path.display(),
            "binary dictionary loaded"
        );
        Ok(Self { alpha, trie })
    }

    /// Persist the dictionary. The write is atomic (temp sibling + rename):
    /// on failure no partial file is left at `path`.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        format::write_trie_file(&self.trie, &self.alpha, path)?;
        tracing::debug!(keys = self.trie.len(), path = %path.display(), "dictionary saved");
        Ok(())
    }

    /// Drop every stored key, keeping the alphabet.
    pub fn reset(&mut self) {
        self.trie = Trie::new();
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Insert a word. `Ok(false)` if it was already stored (or is empty);
    /// `KeyTooLong` over [`MAX_KEY_LEN`] code points, with no mutation.
    pub fn store(&mut self, word: &str) -> Result<bool> {
        let count = word.chars().count();
        if count > MAX_KEY_LEN {
            return Err(TrieError::KeyTooLong {
                len: count,
                max: MAX_KEY_LEN,
            });
        }
        let syms = self.alpha.to_symbols(word)?;
        self.trie.store(&syms)
    }

    /// Remove a word. `Ok(false)` if it was not stored.
    pub fn delete(&mut self, word: &str) -> Result<bool> {
        let count = word.chars().count();
        if count > MAX_KEY_LEN {
            return Err(TrieError::KeyTooLong {
                len: count,
                max: MAX_KEY_LEN,
            });
        }
        let syms = self.alpha.to_symbols(word)?;
        self.trie.delete(&syms)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    // ------------------------------------------------------------------
    // Point & prefix queries
    // ------------------------------------------------------------------

    /// Exact membership: true iff the whole word walks from the root onto a
    /// terminal node. A word the trie cannot fully consume never matches.
    pub fn contains(&self, word: &str) -> bool {
        let mut cur = self.trie.root();
        for ch in word.chars() {
            let Ok(sym) = self.alpha.to_symbol(ch) else {
                return false;
            };
            if !cur.walk(sym) {
                return false;
            }
        }
        cur.is_terminal()
    }

    /// Every stored key that is a prefix of `word`, in increasing length
    /// order. Substrings of the original text.
    pub fn prefixes(&self, word: &str) -> Vec<String> {
        let mut result = Vec::new();
        let mut cur = self.trie.root();
        for (pos, ch) in word.char_indices() {
            let Ok(sym) = self.alpha.to_symbol(ch) else {
                break;
            };
            if !cur.walk(sym) {
                break;
            }
            if cur.is_terminal() {
                result.push(word[..pos + ch.len_utf8()].to_string());
            }
        }
        result
    }

    /// The longest stored key that is a prefix of `word`, or `""` if none.
    pub fn longest_prefix(&self, word: &str) -> String {
        let mut end = None;
        let mut cur = self.trie.root();
        for (pos, ch) in word.char_indices() {
            let Ok(sym) = self.alpha.to_symbol(ch) else {
                break;
            };
            if !cur.walk(sym) {
                break;
            }
            if cur.is_terminal() {
                end = Some(pos + ch.len_utf8());
            }
        }
        match end {
            Some(end) => word[..end].to_string(),
            None => String::new(),
        }
    }

    /// True iff some stored key has `word` as a prefix (the walk consumes
    /// the entire word, terminal or not). For the empty word this is true
    /// iff any key is stored at all.
    pub fn has_keys_with_prefix(&self, word: &str) -> bool {
        if word.is_empty() {
            return !self.trie.is_empty();
        }
        let mut cur = self.trie.root();
        for ch in word.chars() {
            let Ok(sym) = self.alpha.to_symbol(ch) else {
                return false;
            };
            if !cur.walk(sym) {
                return false;
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Forward scanning (segmentation)
    // ------------------------------------------------------------------

    /// Every occurrence of every stored key anywhere in `text`, overlapping
    /// included: a fresh walk starts at each code-point offset and reports
    /// each terminal position it passes.
    pub fn search(&self, text: &str) -> Vec<String> {
        let mut result = Vec::new();
        for (begin, _) in text.char_indices() {
            let mut cur = self.trie.root();
            for (pos, ch) in text[begin..].char_indices() {
                let Ok(sym) = self.alpha.to_symbol(ch) else {
                    break;
                };
                if !cur.walk(sym) {
                    break;
                }
                if cur.is_terminal() {
                    result.push(text[begin..begin + pos + ch.len_utf8()].to_string());
                }
            }
        }
        result
    }

    /// Left-to-right shortest-match segmentation: at each start offset the
    /// walk stops at the first terminal state, reports that match, and the
    /// scan resumes just past it, so no two matches overlap. An offset with
    /// no match advances by one code point.
    pub fn search_forward_shortest(&self, text: &str) -> Vec<String> {
        let mut result = Vec::new();
        let mut begin = 0;
        while begin < text.len() {
            let mut matched_end = None;
            let mut cur = self.trie.root();
            for (pos, ch) in text[begin..].char_indices() {
                let Ok(sym) = self.alpha.to_symbol(ch) else {
                    break;
                };
                if !cur.walk(sym) {
                    break;
                }
                if cur.is_terminal() {
                    matched_end = Some(begin + pos + ch.len_utf8());
                    break;
                }
            }
            begin = self.advance(text, begin, &mut result, matched_end);
        }
        result
    }

    /// Left-to-right longest-match segmentation: at each start offset the
    /// walk runs as far as it can and the last terminal position wins, then
    /// the scan resumes just past the match.
    pub fn search_forward_longest(&self, text: &str) -> Vec<String> {
        let mut result = Vec::new();
        let mut begin = 0;
        while begin < text.len() {
            let mut matched_end = None;
            let mut cur = self.trie.root();
            for (pos, ch) in text[begin..].char_indices() {
                let Ok(sym) = self.alpha.to_symbol(ch) else {
                    break;
                };
                if !cur.walk(sym) {
                    break;
                }
                if cur.is_terminal() {
                    matched_end = Some(begin + pos + ch.len_utf8());
                }
            }
            begin = self.advance(text, begin, &mut result, matched_end);
        }
        result
    }

    /// Skip-ahead step shared by both forward scans: record the match and
    /// resume after it, or move one code point when nothing matched.
    fn advance(
        &self,
        text: &str,
        begin: usize,
        result: &mut Vec<String>,
        matched_end: Option<usize>,
    ) -> usize {
        match matched_end {
            Some(end) => {
                // Terminal states are only reachable after consuming a
                // symbol, so every match has nonzero length and the scan
                // always makes progress.
                debug_assert!(end > begin);
                result.push(text[begin..end].to_string());
                end
            }
            None => match text[begin..].chars().next() {
                Some(ch) => begin + ch.len_utf8(),
                None => text.len(),
            },
        }
    }
}
