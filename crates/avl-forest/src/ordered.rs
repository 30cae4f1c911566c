//! Binary-search-tree mechanics without balancing.
//!
//! [`OrderedTree`] owns the node arena, the root handle and the comparator.
//! It provides key descent, smallest/predecessor/successor lookup, structural
//! insert and remove, and the node-position swap. The AVL map is built on top
//! of it; with the default `A = ()` payload it is also a usable unbalanced
//! map, [`BstMap`].

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use crate::arena::Arena;
use crate::error::{Error, Result};
use crate::iter::{Cursor, Iter};
use crate::node::TreeNode;
use crate::types::{KvNode, Side};
use crate::util::{
    self, get_child, get_l, get_p, get_r, heights, set_child, set_p, side_of,
};

/// Unbalanced binary-search-tree map.
pub type BstMap<K, V, C = fn(&K, &K) -> Ordering> = OrderedTree<K, V, (), C>;

pub(crate) fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Outcome of [`OrderedTree::structural_insert`].
#[derive(Debug, PartialEq, Eq)]
pub enum Insertion<V> {
    /// Key was present: the value was replaced in place, nothing moved.
    Replaced { node: u32, old: V },
    /// A new leaf was attached. `parent` is `None` when it became the root.
    Attached {
        node: u32,
        parent: Option<(u32, Side)>,
    },
}

/// Outcome of [`OrderedTree::structural_remove`].
///
/// `parent` is the node the removed one was physically detached from,
/// together with the side of that parent which lost a node. It is captured
/// before any link is cleared.
#[derive(Debug, PartialEq, Eq)]
pub struct Detachment<K, V> {
    pub parent: Option<(u32, Side)>,
    pub key: K,
    pub value: V,
}

/// Binary search tree over an arena of [`TreeNode`]s.
///
/// Callers reach entries through keys, [`Iter`] and [`Cursor`]; the node
/// arena itself is not exposed.
///
/// ```compile_fail
/// use avl_forest::BstMap;
///
/// let tree = BstMap::<i32, i32>::new();
/// let _ = tree.arena();
/// ```
pub struct OrderedTree<K, V, A = (), C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    arena: Arena<TreeNode<K, V, A>>,
    root: Option<u32>,
    comparator: C,
}

impl<K, V, A> OrderedTree<K, V, A, fn(&K, &K) -> Ordering>
where
    K: Ord,
    A: Default,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
            comparator: default_comparator::<K>,
        }
    }
}

impl<K, V, A> Default for OrderedTree<K, V, A, fn(&K, &K) -> Ordering>
where
    K: Ord,
    A: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, A, C> OrderedTree<K, V, A, C>
where
    A: Default,
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            comparator,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub(crate) fn arena(&self) -> &Arena<TreeNode<K, V, A>> {
        &self.arena
    }

    /// Arena and root handle, for callers that restructure the tree.
    pub(crate) fn topology_mut(&mut self) -> (&mut Arena<TreeNode<K, V, A>>, &mut Option<u32>) {
        (&mut self.arena, &mut self.root)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Descends from the root comparing keys.
    pub fn find(&self, key: &K) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            curr = match (self.comparator)(key, self.arena[i].key()) {
                Ordering::Equal => return Some(i),
                Ordering::Less => get_l(&self.arena, i),
                Ordering::Greater => get_r(&self.arena, i),
            };
        }
        None
    }

    /// Leftmost node, `None` on an empty tree.
    pub fn smallest(&self) -> Option<u32> {
        util::first(&self.arena, self.root)
    }

    /// Rightmost node, `None` on an empty tree.
    pub fn largest(&self) -> Option<u32> {
        util::last(&self.arena, self.root)
    }

    pub fn predecessor(&self, node: u32) -> Option<u32> {
        util::prev(&self.arena, node)
    }

    pub fn successor(&self, node: u32) -> Option<u32> {
        util::next(&self.arena, node)
    }

    pub fn key(&self, idx: u32) -> &K {
        self.arena[idx].key()
    }

    pub fn value(&self, idx: u32) -> &V {
        self.arena[idx].value()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| self.arena[i].value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(self.arena[idx].value_mut())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Value for `key`, or [`Error::KeyNotFound`].
    pub fn at(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    pub fn at_mut(&mut self, key: &K) -> Result<&mut V> {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Overwrites the value of an existing key, or attaches a new leaf at the
    /// position the descent ends on.
    pub fn structural_insert(&mut self, key: K, value: V) -> Insertion<V> {
        let Some(mut curr) = self.root else {
            let node = self.arena.alloc(TreeNode::new(key, value));
            self.root = Some(node);
            return Insertion::Attached { node, parent: None };
        };

        loop {
            let side = match (self.comparator)(&key, self.arena[curr].key()) {
                Ordering::Equal => {
                    let old = self.arena[curr].set_value(value);
                    return Insertion::Replaced { node: curr, old };
                }
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match get_child(&self.arena, curr, side) {
                Some(child) => curr = child,
                None => {
                    let node = self.arena.alloc(TreeNode::new(key, value));
                    set_child(&mut self.arena, curr, side, Some(node));
                    set_p(&mut self.arena, node, Some(curr));
                    return Insertion::Attached {
                        node,
                        parent: Some((curr, side)),
                    };
                }
            }
        }
    }

    /// Removes `key` if present.
    ///
    /// A node with two children first trades places with its in-order
    /// predecessor through [`node_swap`](Self::node_swap); the node is then
    /// detached from the predecessor's former slot, which has at most one
    /// child. Auxiliary payloads follow the slot, not the node.
    pub fn structural_remove(&mut self, key: &K) -> Option<Detachment<K, V>> {
        let node = self.find(key)?;
        if get_l(&self.arena, node).is_some() && get_r(&self.arena, node).is_some() {
            if let Some(pred) = self.predecessor(node) {
                self.node_swap(node, pred);
                self.exchange_aux(node, pred);
            }
        }
        Some(self.detach(node))
    }

    /// Exchanges the positions of `n1` and `n2`, updating the root if either
    /// was root. No balancing is performed.
    pub fn node_swap(&mut self, n1: u32, n2: u32) {
        self.root = util::swap(&mut self.arena, self.root, n1, n2);
    }

    fn exchange_aux(&mut self, n1: u32, n2: u32) {
        if let Some((a, b)) = self.arena.pair_mut(n1, n2) {
            std::mem::swap(&mut a.aux, &mut b.aux);
        }
    }

    /// Unlinks a node with at most one child and destroys it.
    fn detach(&mut self, node: u32) -> Detachment<K, V> {
        let p = get_p(&self.arena, node);
        let side = side_of(&self.arena, node);
        let child = get_l(&self.arena, node).or(get_r(&self.arena, node));

        if let Some(c) = child {
            set_p(&mut self.arena, c, p);
        }
        let parent = match (p, side) {
            (Some(p), Some(side)) => {
                set_child(&mut self.arena, p, side, child);
                Some((p, side))
            }
            _ => {
                self.root = child;
                None
            }
        };
        tracing::debug!(node, ?parent, "detached node");

        let (key, value) = match self.arena.release(node) {
            Some(n) => n.into_entry(),
            None => unreachable!("detached node {node} was live"),
        };
        Detachment { parent, key, value }
    }

    /// Inserts or overwrites without rebalancing. Returns the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.structural_insert(key, value) {
            Insertion::Replaced { old, .. } => Some(old),
            Insertion::Attached { .. } => None,
        }
    }

    /// Removes without rebalancing. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.structural_remove(key).map(|d| d.value)
    }

    /// Destroys every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Recomputes subtree heights and checks `|h(l) - h(r)| <= 1` everywhere.
    pub fn is_balanced(&self) -> bool {
        let mut ok = true;
        heights(&self.arena, self.root, |_, lh, rh| {
            ok &= lh.abs_diff(rh) <= 1;
        });
        ok
    }

    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    pub fn iter(&self) -> Iter<'_, K, V, A> {
        Iter::new(&self.arena, self.smallest())
    }

    pub fn first(&self) -> Option<Cursor<'_, K, V, A>> {
        self.smallest().map(|i| Cursor::new(&self.arena, i))
    }

    pub fn last(&self) -> Option<Cursor<'_, K, V, A>> {
        self.largest().map(|i| Cursor::new(&self.arena, i))
    }

    /// Cursor positioned on `key`.
    pub fn cursor(&self, key: &K) -> Option<Cursor<'_, K, V, A>> {
        self.find(key).map(|i| Cursor::new(&self.arena, i))
    }

    /// Checks parent links and key order. Balance is not considered.
    pub fn assert_valid(&self) -> std::result::Result<(), String> {
        let Some(root) = self.root else {
            return if self.arena.is_empty() {
                Ok(())
            } else {
                Err("Empty tree holds live nodes".to_string())
            };
        };
        if get_p(&self.arena, root).is_some() {
            return Err("Root has parent".to_string());
        }

        let mut stack = vec![root];
        let mut reachable = 0usize;
        while let Some(i) = stack.pop() {
            reachable += 1;
            for c in [get_l(&self.arena, i), get_r(&self.arena, i)].into_iter().flatten() {
                if get_p(&self.arena, c) != Some(i) {
                    return Err(format!("Broken parent link on child {c}"));
                }
                stack.push(c);
            }
        }
        if reachable != self.arena.len() {
            return Err(format!(
                "Reachable nodes {reachable} != live nodes {}",
                self.arena.len()
            ));
        }

        let mut curr = self.smallest();
        let mut prev: Option<u32> = None;
        while let Some(i) = curr {
            if let Some(p) = prev {
                if (self.comparator)(self.key(p), self.key(i)) != Ordering::Less {
                    return Err("Node order violated".to_string());
                }
            }
            prev = Some(i);
            curr = self.successor(i);
        }
        Ok(())
    }
}

impl<K, V, A, C> Index<&K> for OrderedTree<K, V, A, C>
where
    A: Default,
    C: Fn(&K, &K) -> Ordering,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        match self.get(key) {
            Some(v) => v,
            None => panic!("key not found"),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, A, C> fmt::Debug for OrderedTree<K, V, A, C>
where
    A: Default,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, A, C> IntoIterator for &'a OrderedTree<K, V, A, C>
where
    A: Default,
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
