//! Topology utilities shared by the unbalanced and the AVL tree.
//!
//! All functions take the node [`Arena`] and work with `u32` handles. None of
//! them recurse, so stack usage stays constant even on a degenerate
//! (list-shaped) unbalanced tree.

pub mod swap;

use crate::arena::Arena;
use crate::types::{Node, Side};

pub use swap::swap;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_r(v);
}

#[inline]
pub(crate) fn get_child<N: Node>(arena: &Arena<N>, idx: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => get_l(arena, idx),
        Side::Right => get_r(arena, idx),
    }
}

#[inline]
pub(crate) fn set_child<N: Node>(arena: &mut Arena<N>, idx: u32, side: Side, v: Option<u32>) {
    match side {
        Side::Left => set_l(arena, idx, v),
        Side::Right => set_r(arena, idx, v),
    }
}

/// Side of its parent that `idx` hangs off, or `None` for the root.
pub fn side_of<N: Node>(arena: &Arena<N>, idx: u32) -> Option<Side> {
    let p = get_p(arena, idx)?;
    if get_l(arena, p) == Some(idx) {
        Some(Side::Left)
    } else {
        Some(Side::Right)
    }
}

/// Points `parent`'s link that referred to `old` at `new` instead.
///
/// Returns `true` when `old` had no parent, i.e. the caller must treat `new`
/// as the new root.
pub(crate) fn replace_child<N: Node>(
    arena: &mut Arena<N>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> bool {
    let Some(p) = parent else {
        return true;
    };
    if get_l(arena, p) == Some(old) {
        set_l(arena, p, new);
    } else {
        set_r(arena, p, new);
    }
    false
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &Arena<N>, mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &Arena<N>, mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

/// Height of every node under `root`, computed bottom-up, reported through
/// `visit(node, left_height, right_height)`. Returns the height of `root`
/// (0 for an empty tree).
///
/// Post-order walk with an explicit stack.
pub fn heights<N, F>(arena: &Arena<N>, root: Option<u32>, mut visit: F) -> usize
where
    N: Node,
    F: FnMut(u32, usize, usize),
{
    let Some(root) = root else {
        return 0;
    };

    let mut out: Vec<usize> = Vec::new();
    let mut stack: Vec<(u32, bool)> = vec![(root, false)];
    while let Some((i, expanded)) = stack.pop() {
        let l = get_l(arena, i);
        let r = get_r(arena, i);
        if !expanded {
            stack.push((i, true));
            stack.extend(r.map(|r| (r, false)));
            stack.extend(l.map(|l| (l, false)));
            continue;
        }
        // Children were finished left first, so the right height is on top.
        let rh = if r.is_some() { out.pop().unwrap_or(0) } else { 0 };
        let lh = if l.is_some() { out.pop().unwrap_or(0) } else { 0 };
        visit(i, lh, rh);
        out.push(1 + lh.max(rh));
    }
    out.pop().unwrap_or(0)
}

/// Height of the tree under `root`.
pub fn height<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    heights(arena, root, |_, _, _| {})
}
