//! Arena-backed trie over symbol sequences.
//!
//! Nodes live in a flat arena and are addressed by [`NodeId`] index, never by
//! pointer. Deletion prunes branch chains that no longer lead to a terminal
//! and returns their nodes to a free list for reuse by later inserts. Each
//! node keeps its children in a `Vec` sorted by symbol, binary-searched on
//! every walk step, so traversal stays O(key length × log fanout).

use crate::alpha::Symbol;
use crate::cursor::TrieCursor;
use crate::error::{Result, TrieError};

/// Longest key the trie accepts, in symbols (= Unicode code points).
pub const MAX_KEY_LEN: usize = 256;

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(pub(crate) u32);

/// The root always occupies slot 0 and is never freed.
pub(crate) const ROOT: NodeId = NodeId(0);

#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    /// Sorted ascending by symbol.
    pub(crate) children: Vec<(Symbol, NodeId)>,
    pub(crate) terminal: bool,
}

/// A set of symbol sequences with terminal markers.
///
/// A key is stored iff walking from the root along its symbols lands on a
/// node flagged terminal. Keys sharing a prefix share the prefix path.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    key_count: usize,
}

impl Trie {
    /// Empty trie: a single root node, no terminals.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            free: Vec::new(),
            key_count: 0,
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.key_count
    }

    pub fn is_empty(&self) -> bool {
        self.key_count == 0
    }

    /// Fresh cursor positioned at the root.
    pub fn root(&self) -> TrieCursor<'_> {
        TrieCursor::new(self, ROOT)
    }

    /// Insert `key`. Returns `Ok(false)` without mutating if the key is
    /// already stored or empty; `KeyTooLong` beyond [`MAX_KEY_LEN`].
    ///
    /// Empty keys are rejected so that a terminal state is only ever reached
    /// after consuming at least one symbol — the forward-scan skip-ahead
    /// arithmetic depends on every match having nonzero length.
    pub fn store(&mut self, key: &[Symbol]) -> Result<bool> {
        if key.len() > MAX_KEY_LEN {
            return Err(TrieError::KeyTooLong {
                len: key.len(),
                max: MAX_KEY_LEN,
            });
        }
        if key.is_empty() {
            return Ok(false);
        }

        let mut cur = ROOT;
        for &sym in key {
            cur = match self.child(cur, sym) {
                Some(next) => next,
                None => {
                    let next = self.alloc();
                    let node = &mut self.nodes[cur.0 as usize];
                    let pos = node
                        .children
                        .binary_search_by_key(&sym, |&(s, _)| s)
                        .unwrap_err();
                    node.children.insert(pos, (sym, next));
                    next
                }
            };
        }

        let node = &mut self.nodes[cur.0 as usize];
        if node.terminal {
            return Ok(false);
        }
        node.terminal = true;
        self.key_count += 1;
        Ok(true)
    }

    /// Remove `key`. Returns `Ok(false)` if it is not stored; `KeyTooLong`
    /// beyond [`MAX_KEY_LEN`]. Unreachable suffix nodes go to the free list.
    pub fn delete(&mut self, key: &[Symbol]) -> Result<bool> {
        if key.len() > MAX_KEY_LEN {
            return Err(TrieError::KeyTooLong {
                len: key.len(),
                max: MAX_KEY_LEN,
            });
        }
        if key.is_empty() {
            return Ok(false);
        }

        // (parent, symbol, child) per step, for pruning on the way back.
        let mut path: Vec<(NodeId, Symbol, NodeId)> = Vec::with_capacity(key.len());
        let mut cur = ROOT;
        for &sym in key {
            match self.child(cur, sym) {
                Some(next) => {
                    path.push((cur, sym, next));
                    cur = next;
                }
                None => return Ok(false),
            }
        }

        let node = &mut self.nodes[cur.0 as usize];
        if !node.terminal {
            return Ok(false);
        }
        node.terminal = false;
        self.key_count -= 1;

        // Prune the now-dead tail: nodes with no children and no terminal
        // flag, innermost first. Stops at the first node still in use, so
        // sibling keys sharing a prefix are untouched.
        for &(parent, sym, child) in path.iter().rev() {
            let dead = {
                let n = &self.nodes[child.0 as usize];
                n.children.is_empty() && !n.terminal
            };
            if !dead {
                break;
            }
            let p = &mut self.nodes[parent.0 as usize];
            if let Ok(pos) = p.children.binary_search_by_key(&sym, |&(s, _)| s) {
                p.children.remove(pos);
            }
            self.free.push(child);
        }

        Ok(true)
    }

    /// Follow the edge labeled `sym` out of `id`, if present.
    pub(crate) fn child(&self, id: NodeId, sym: Symbol) -> Option<NodeId> {
        let node = &self.nodes[id.0 as usize];
        node.children
            .binary_search_by_key(&sym, |&(s, _)| s)
            .ok()
            .map(|pos| node.children[pos].1)
    }

    pub(crate) fn is_terminal(&self, id: NodeId) -> bool {
        self.nodes[id.0 as usize].terminal
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    /// Total arena slots, live or freed. Serialization compacts, so this is
    /// internal only.
    pub(crate) fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Rebuild from decoded parts. `nodes[0]` is the root; `key_count` must
    /// equal the number of terminal nodes. Used by the binary codec.
    pub(crate) fn from_parts(nodes: Vec<Node>, key_count: usize) -> Self {
        debug_assert!(!nodes.is_empty());
        Self {
            nodes,
            free: Vec::new(),
            key_count,
        }
    }

    fn alloc(&mut self) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0 as usize] = Node::default();
                id
            }
            None => {
                let id = NodeId(self.nodes.len() as u32);
                self.nodes.push(Node::default());
                id
            }
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alpha::AlphaMap;

    fn syms(word: &str) -> Vec<Symbol> {
        AlphaMap::full().to_symbols(word).unwrap()
    }

    #[test]
    fn test_store_and_walk() {
        let mut trie = Trie::new();
        assert!(trie.store(&syms("foo")).unwrap());
        assert_eq!(trie.len(), 1);

        let mut cur = trie.root();
        for s in syms("foo") {
            assert!(cur.walk(s));
        }
        assert!(cur.is_terminal());
    }

    #[test]
    fn test_store_duplicate_is_false() {
        let mut trie = Trie::new();
        assert!(trie.store(&syms("foo")).unwrap());
        assert!(!trie.store(&syms("foo")).unwrap());
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_store_empty_key_rejected() {
        let mut trie = Trie::new();
        assert!(!trie.store(&[]).unwrap());
        assert!(trie.is_empty());
        assert!(!trie.root().is_terminal());
    }

    #[test]
    fn test_shared_prefix_single_path() {
        let mut trie = Trie::new();
        trie.store(&syms("foo")).unwrap();
        let before = trie.arena_len();
        trie.store(&syms("foobar")).unwrap();
        // "foobar" adds only the three suffix nodes.
        assert_eq!(trie.arena_len(), before + 3);
    }

    #[test]
    fn test_key_too_long() {
        let mut trie = Trie::new();
        let long: Vec<Symbol> = vec![Symbol(65); MAX_KEY_LEN + 1];
        assert!(matches!(
            trie.store(&long),
            Err(TrieError::KeyTooLong { len: 257, .. })
        ));
        assert!(matches!(
            trie.delete(&long),
            Err(TrieError::KeyTooLong { len: 257, .. })
        ));
        assert!(trie.is_empty());
        assert_eq!(trie.arena_len(), 1);

        let max: Vec<Symbol> = vec![Symbol(65); MAX_KEY_LEN];
        assert!(trie.store(&max).unwrap());
    }

    #[test]
    fn test_delete_missing() {
        let mut trie = Trie::new();
        trie.store(&syms("foo")).unwrap();
        assert!(!trie.delete(&syms("bar")).unwrap());
        assert!(!trie.delete(&syms("fo")).unwrap());
        assert!(!trie.delete(&syms("fooo")).unwrap());
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_delete_keeps_siblings() {
        let mut trie = Trie::new();
        trie.store(&syms("foo")).unwrap();
        trie.store(&syms("foobar")).unwrap();
        trie.store(&syms("fox")).unwrap();

        assert!(trie.delete(&syms("foobar")).unwrap());

        let mut cur = trie.root();
        for s in syms("foo") {
            assert!(cur.walk(s));
        }
        assert!(cur.is_terminal());

        let mut cur = trie.root();
        for s in syms("fox") {
            assert!(cur.walk(s));
        }
        assert!(cur.is_terminal());
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_delete_prunes_dead_tail() {
        let mut trie = Trie::new();
        trie.store(&syms("foo")).unwrap();
        trie.store(&syms("foobar")).unwrap();
        trie.delete(&syms("foobar")).unwrap();

        // "bar" tail is gone from the walkable structure.
        let mut cur = trie.root();
        for s in syms("foo") {
            assert!(cur.walk(s));
        }
        assert!(!cur.clone().walk(Symbol('b' as u32)));
        assert_eq!(trie.free.len(), 3);
    }

    #[test]
    fn test_freed_nodes_are_reused() {
        let mut trie = Trie::new();
        trie.store(&syms("abc")).unwrap();
        trie.delete(&syms("abc")).unwrap();
        let arena = trie.arena_len();

        trie.store(&syms("xyz")).unwrap();
        assert_eq!(trie.arena_len(), arena);
        assert!(trie.free.is_empty());
    }

    #[test]
    fn test_delete_prefix_key_keeps_extension() {
        let mut trie = Trie::new();
        trie.store(&syms("foo")).unwrap();
        trie.store(&syms("foobar")).unwrap();
        trie.delete(&syms("foo")).unwrap();

        let mut cur = trie.root();
        for s in syms("foobar") {
            assert!(cur.walk(s));
        }
        assert!(cur.is_terminal());

        let mut cur = trie.root();
        for s in syms("foo") {
            assert!(cur.walk(s));
        }
        assert!(!cur.is_terminal());
    }
}
