//! Slot arena for tree nodes.
//!
//! Nodes live in a `Vec` of slots addressed by `u32` handles. Released slots
//! go onto a free list and are reused by later allocations, so handles stay
//! stable for as long as the node they name is alive.

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug)]
enum Slot<N> {
    Occupied(N),
    Vacant,
}

#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: Vec<u32>,
    len: usize,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `node` and returns its handle.
    ///
    /// Panics once every `u32` handle is in use.
    pub fn alloc(&mut self, node: N) -> u32 {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = Slot::Occupied(node);
                idx
            }
            None => {
                let idx = handle(self.slots.len());
                self.slots.push(Slot::Occupied(node));
                idx
            }
        };
        self.len += 1;
        idx
    }

    /// Releases the slot and hands the node back to the caller, who drops it.
    pub fn release(&mut self, idx: u32) -> Option<N> {
        let slot = self.slots.get_mut(idx as usize)?;
        match std::mem::replace(slot, Slot::Vacant) {
            Slot::Occupied(node) => {
                self.free.push(idx);
                self.len -= 1;
                Some(node)
            }
            Slot::Vacant => None,
        }
    }

    pub fn get(&self, idx: u32) -> Option<&N> {
        match self.slots.get(idx as usize)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant => None,
        }
    }

    pub fn get_mut(&mut self, idx: u32) -> Option<&mut N> {
        match self.slots.get_mut(idx as usize)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant => None,
        }
    }

    /// Mutable access to two distinct live nodes at once.
    pub fn pair_mut(&mut self, a: u32, b: u32) -> Option<(&mut N, &mut N)> {
        if a == b {
            return None;
        }
        let (lo, hi, flipped) = if a < b { (a, b, false) } else { (b, a, true) };
        let (head, tail) = self.slots.split_at_mut(hi as usize);
        let first = match head.get_mut(lo as usize)? {
            Slot::Occupied(node) => node,
            Slot::Vacant => return None,
        };
        let second = match tail.first_mut()? {
            Slot::Occupied(node) => node,
            Slot::Vacant => return None,
        };
        Some(if flipped { (second, first) } else { (first, second) })
    }

    /// Drops every node. Slots are released in bulk, so no traversal is
    /// needed regardless of tree shape.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

fn handle(slot: usize) -> u32 {
    match u32::try_from(slot) {
        Ok(idx) => idx,
        Err(_) => panic!("arena full: slot {slot} does not fit a u32 handle"),
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    fn index(&self, idx: u32) -> &N {
        match self.get(idx) {
            Some(node) => node,
            None => panic!("dangling node handle {idx}"),
        }
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    fn index_mut(&mut self, idx: u32) -> &mut N {
        match self.get_mut(idx) {
            Some(node) => node,
            None => panic!("dangling node handle {idx}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_slots_are_reused() {
        let mut arena = Arena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        assert_eq!(arena.len(), 2);

        assert_eq!(arena.release(a), Some("a"));
        assert_eq!(arena.release(a), None);
        assert_eq!(arena.len(), 1);
        assert!(arena.get(a).is_none());

        let c = arena.alloc("c");
        assert_eq!(c, a);
        assert_eq!(arena[c], "c");
        assert_eq!(arena[b], "b");
    }

    #[test]
    fn pair_mut_returns_in_argument_order() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        {
            let (x, y) = arena.pair_mut(b, a).unwrap();
            assert_eq!((*x, *y), (2, 1));
            std::mem::swap(x, y);
        }
        assert_eq!(arena[a], 2);
        assert_eq!(arena[b], 1);
        assert!(arena.pair_mut(a, a).is_none());
    }

    #[test]
    fn handles_cover_the_u32_range() {
        assert_eq!(handle(0), 0);
        assert_eq!(handle(u32::MAX as usize), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "arena full")]
    fn slot_past_u32_range_panics() {
        handle(u32::MAX as usize + 1);
    }

    #[test]
    fn clear_drops_everything() {
        let mut arena = Arena::new();
        for i in 0..10 {
            arena.alloc(i);
        }
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.alloc(42), 0);
    }
}
