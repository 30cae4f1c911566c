use std::cmp::Ordering;
use std::fmt;

use crate::ordered::default_comparator;

use super::map::AvlMap;

/// AVL tree set backed by [`AvlMap<V, ()>`].
pub struct AvlSet<V, C = fn(&V, &V) -> Ordering>
where
    C: Fn(&V, &V) -> Ordering,
{
    inner: AvlMap<V, (), C>,
}

impl<V> AvlSet<V, fn(&V, &V) -> Ordering>
where
    V: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<V>)
    }
}

impl<V> Default for AvlSet<V, fn(&V, &V) -> Ordering>
where
    V: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C> AvlSet<V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: AvlMap::with_comparator(comparator),
        }
    }

    /// Returns `true` if the value was not present.
    pub fn insert(&mut self, value: V) -> bool {
        self.inner.insert(value, ()).is_none()
    }

    /// Returns `true` if the value was present.
    pub fn remove(&mut self, value: &V) -> bool {
        self.inner.remove(value).is_some()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn contains(&self, value: &V) -> bool {
        self.inner.contains_key(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn first(&self) -> Option<&V> {
        self.inner.first().map(|c| c.key())
    }

    pub fn last(&self) -> Option<&V> {
        self.inner.last().map(|c| c.key())
    }

    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.inner.keys()
    }

    pub fn is_balanced(&self) -> bool {
        self.inner.is_balanced()
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        self.inner.assert_valid()
    }
}

impl<V: fmt::Debug, C> fmt::Debug for AvlSet<V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<V: Ord> FromIterator<V> for AvlSet<V> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut set = Self::new();
        for v in iter {
            set.insert(v);
        }
        set
    }
}
