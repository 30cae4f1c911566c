//! Ascending iteration and cursors.
//!
//! Both walk the tree through repeated successor computation starting from
//! the smallest node. Neither exposes topology links or auxiliary payloads.

use std::fmt;
use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::node::TreeNode;
use crate::types::KvNode;
use crate::util::{next, prev};

/// Ascending `(key, value)` iterator.
pub struct Iter<'a, K, V, A = ()> {
    arena: &'a Arena<TreeNode<K, V, A>>,
    curr: Option<u32>,
    remaining: usize,
}

impl<'a, K, V, A> Iter<'a, K, V, A> {
    pub(crate) fn new(arena: &'a Arena<TreeNode<K, V, A>>, first: Option<u32>) -> Self {
        Self {
            arena,
            curr: first,
            remaining: arena.len(),
        }
    }
}

impl<K, V, A> Clone for Iter<'_, K, V, A> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            curr: self.curr,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V, A> Iterator for Iter<'a, K, V, A> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = next(self.arena, i);
        self.remaining = self.remaining.saturating_sub(1);
        let node = &self.arena[i];
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, A> ExactSizeIterator for Iter<'_, K, V, A> {}

impl<K, V, A> FusedIterator for Iter<'_, K, V, A> {}

/// Read-only position inside a tree.
///
/// Backed by an arena handle; the borrow on the tree keeps it valid. Moving
/// a cursor never changes the tree.
pub struct Cursor<'a, K, V, A = ()> {
    arena: &'a Arena<TreeNode<K, V, A>>,
    idx: u32,
}

impl<'a, K, V, A> Cursor<'a, K, V, A> {
    pub(crate) fn new(arena: &'a Arena<TreeNode<K, V, A>>, idx: u32) -> Self {
        Self { arena, idx }
    }

    pub fn key(&self) -> &'a K {
        self.arena[self.idx].key()
    }

    pub fn value(&self) -> &'a V {
        self.arena[self.idx].value()
    }

    pub fn entry(&self) -> (&'a K, &'a V) {
        (self.key(), self.value())
    }

    /// Cursor at the next key in ascending order.
    pub fn successor(&self) -> Option<Self> {
        next(self.arena, self.idx).map(|idx| Self::new(self.arena, idx))
    }

    /// Cursor at the previous key in ascending order.
    pub fn predecessor(&self) -> Option<Self> {
        prev(self.arena, self.idx).map(|idx| Self::new(self.arena, idx))
    }

    /// Advances in place; returns `false` (and stays put) at the last key.
    pub fn move_next(&mut self) -> bool {
        match next(self.arena, self.idx) {
            Some(idx) => {
                self.idx = idx;
                true
            }
            None => false,
        }
    }

    /// Steps back in place; returns `false` (and stays put) at the first key.
    pub fn move_prev(&mut self) -> bool {
        match prev(self.arena, self.idx) {
            Some(idx) => {
                self.idx = idx;
                true
            }
            None => false,
        }
    }
}

impl<K, V, A> Clone for Cursor<'_, K, V, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, A> Copy for Cursor<'_, K, V, A> {}

impl<K, V, A> PartialEq for Cursor<'_, K, V, A> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.idx == other.idx
    }
}

impl<K, V, A> Eq for Cursor<'_, K, V, A> {}

impl<K: fmt::Debug, V: fmt::Debug, A> fmt::Debug for Cursor<'_, K, V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("key", self.key())
            .field("value", self.value())
            .finish()
    }
}
