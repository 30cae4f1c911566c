use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use crate::error::Result;
use crate::iter::{Cursor, Iter};
use crate::node::AvlNodeLike;
use crate::ordered::{default_comparator, Insertion, OrderedTree};

use super::fixup::{growth, insert_fixup, remove_fixup};
use super::validate::{assert_avl_tree, is_avl_balanced};

/// Ordered map kept height-balanced by the AVL invariant.
///
/// Structural work is delegated to [`OrderedTree`]; this type adds the
/// balance-factor bookkeeping and runs the fixup walks after every insert
/// that attached a node and every remove that detached one.
pub struct AvlMap<K, V, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    tree: OrderedTree<K, V, i8, C>,
}

impl<K, V> AvlMap<K, V, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: OrderedTree::with_capacity(capacity),
        }
    }
}

impl<K, V> Default for AvlMap<K, V, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: OrderedTree::with_comparator(comparator),
        }
    }

    /// Inserts `key`, or overwrites its value in place. Returns the previous
    /// value. An overwrite changes no links and no balance factors.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (node, parent, side) = match self.tree.structural_insert(key, value) {
            Insertion::Replaced { old, .. } => return Some(old),
            Insertion::Attached { parent: None, .. } => return None,
            Insertion::Attached {
                node,
                parent: Some((parent, side)),
            } => (node, parent, side),
        };

        let (arena, root) = self.tree.topology_mut();
        let pbf = arena[parent].bf() + growth(side);
        arena[parent].set_bf(pbf);
        if pbf != 0 {
            insert_fixup(arena, root, parent, node);
        }
        None
    }

    /// Removes `key` and returns its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let detached = self.tree.structural_remove(key)?;
        let (arena, root) = self.tree.topology_mut();
        remove_fixup(arena, root, detached.parent);
        Some(detached.value)
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }

    /// Value for `key`, or [`Error::KeyNotFound`](crate::Error::KeyNotFound).
    pub fn at(&self, key: &K) -> Result<&V> {
        self.tree.at(key)
    }

    pub fn at_mut(&mut self, key: &K) -> Result<&mut V> {
        self.tree.at_mut(key)
    }

    pub fn iter(&self) -> Iter<'_, K, V, i8> {
        self.tree.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn first(&self) -> Option<Cursor<'_, K, V, i8>> {
        self.tree.first()
    }

    pub fn last(&self) -> Option<Cursor<'_, K, V, i8>> {
        self.tree.last()
    }

    pub fn cursor(&self, key: &K) -> Option<Cursor<'_, K, V, i8>> {
        self.tree.cursor(key)
    }

    /// Key stored at the root, if any.
    pub fn root_key(&self) -> Option<&K> {
        self.tree.root_index().map(|i| self.tree.key(i))
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Diagnostic: recomputes heights and checks the AVL invariant,
    /// including every stored balance factor.
    pub fn is_balanced(&self) -> bool {
        is_avl_balanced(&self.tree)
    }

    /// Diagnostic: describes the first invariant violation found.
    pub fn assert_valid(&self) -> std::result::Result<(), String> {
        assert_avl_tree(&self.tree)
    }
}

impl<K, V, C> Index<&K> for AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        &self.tree[key]
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, C> IntoIterator for &'a AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, i8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> Extend<(K, V)> for AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
