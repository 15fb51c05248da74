//! Resumable traversal cursor over a trie.

use crate::alpha::Symbol;
use crate::trie::{NodeId, Trie};

/// A walk position inside a [`Trie`].
///
/// Created at the root via [`Trie::root`] and advanced one symbol at a time
/// with [`walk`](Self::walk). On a failed step the cursor stays at its last
/// valid position; callers stop walking further along that path, which is how
/// every scan algorithm detects "no further match".
///
/// The borrow ties the cursor's validity to the trie: it cannot outlive the
/// trie or span a mutation, so there is no explicit release step. `Clone` a
/// cursor to branch a walk.
#[derive(Debug, Clone)]
pub struct TrieCursor<'a> {
    trie: &'a Trie,
    node: NodeId,
}

impl<'a> TrieCursor<'a> {
    pub(crate) fn new(trie: &'a Trie, node: NodeId) -> Self {
        Self { trie, node }
    }

    /// Follow the edge labeled `sym`. Advances and returns `true` on
    /// success; returns `false` leaving the cursor where it was.
    pub fn walk(&mut self, sym: Symbol) -> bool {
        match self.trie.child(self.node, sym) {
            Some(next) => {
                self.node = next;
                true
            }
            None => false,
        }
    }

    /// Whether some stored key ends exactly at the current position.
    pub fn is_terminal(&self) -> bool {
        self.trie.is_terminal(self.node)
    }
}
