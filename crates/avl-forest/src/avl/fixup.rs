//! Balance-factor propagation after a structural change.
//!
//! Balance factors are `height(left) - height(right)`. Both walks follow the
//! parent chain in a loop, so their stack usage is constant; the number of
//! steps is bounded by the tree height.

use crate::arena::Arena;
use crate::node::AvlNodeLike;
use crate::types::Side;
use crate::util::{get_l, get_p, get_r, side_of};

use super::rotate::{rotate_left, rotate_right};

#[inline]
fn bf<N: AvlNodeLike>(arena: &Arena<N>, i: u32) -> i8 {
    arena[i].bf()
}

#[inline]
fn set_bf<N: AvlNodeLike>(arena: &mut Arena<N>, i: u32, v: i8) {
    arena[i].set_bf(v);
}

/// How a node's balance moves when the subtree on `side` grows by one.
#[inline]
pub(crate) fn growth(side: Side) -> i8 {
    match side {
        Side::Left => 1,
        Side::Right => -1,
    }
}

/// Assigns balances after a double rotation that made `mid` the subtree
/// root with `left` and `right` as its children. `mid_bf` is the balance
/// `mid` held before the rotation.
fn settle_double<N: AvlNodeLike>(arena: &mut Arena<N>, left: u32, mid: u32, right: u32, mid_bf: i8) {
    let (lbf, rbf) = match mid_bf {
        1 => (0, -1),
        -1 => (1, 0),
        _ => (0, 0),
    };
    set_bf(arena, left, lbf);
    set_bf(arena, right, rbf);
    set_bf(arena, mid, 0);
}

/// Walks up from `parent`, whose balance has just become ±1 because `child`
/// (one of its children) grew. Stops on absorption or after one rotation.
pub fn insert_fixup<N: AvlNodeLike>(
    arena: &mut Arena<N>,
    root: &mut Option<u32>,
    mut parent: u32,
    mut child: u32,
) {
    loop {
        let Some(grand) = get_p(arena, parent) else {
            return;
        };
        let parent_side = if get_l(arena, grand) == Some(parent) {
            Side::Left
        } else {
            Side::Right
        };
        let gbf = bf(arena, grand) + growth(parent_side);
        set_bf(arena, grand, gbf);

        match gbf {
            0 => return,
            1 | -1 => {
                child = parent;
                parent = grand;
            }
            _ => {
                rotate_after_insert(arena, root, grand, parent, parent_side, child);
                return;
            }
        }
    }
}

fn rotate_after_insert<N: AvlNodeLike>(
    arena: &mut Arena<N>,
    root: &mut Option<u32>,
    grand: u32,
    parent: u32,
    parent_side: Side,
    child: u32,
) {
    let child_side = if get_l(arena, parent) == Some(child) {
        Side::Left
    } else {
        Side::Right
    };
    tracing::trace!(grand, parent, child, ?parent_side, ?child_side, "insert rotation");

    match (parent_side, child_side) {
        (Side::Left, Side::Left) => {
            rotate_right(arena, root, grand);
            set_bf(arena, grand, 0);
            set_bf(arena, parent, 0);
        }
        (Side::Right, Side::Right) => {
            rotate_left(arena, root, grand);
            set_bf(arena, grand, 0);
            set_bf(arena, parent, 0);
        }
        (Side::Left, Side::Right) => {
            let cbf = bf(arena, child);
            rotate_left(arena, root, parent);
            rotate_right(arena, root, grand);
            settle_double(arena, parent, child, grand, cbf);
        }
        (Side::Right, Side::Left) => {
            let cbf = bf(arena, child);
            rotate_right(arena, root, parent);
            rotate_left(arena, root, grand);
            settle_double(arena, grand, child, parent, cbf);
        }
    }
}

/// Walks up from the node a child was detached from. `side` is the side of
/// `node` that lost height. Continues for as long as the subtree below the
/// current node got shorter, rotations included.
pub fn remove_fixup<N: AvlNodeLike>(
    arena: &mut Arena<N>,
    root: &mut Option<u32>,
    start: Option<(u32, Side)>,
) {
    let Some((mut node, mut side)) = start else {
        return;
    };
    loop {
        // Captured before any rotation relocates `node`.
        let up = get_p(arena, node).zip(side_of(arena, node));
        let total = bf(arena, node) - growth(side);

        let shrunk = match total {
            1 | -1 => {
                set_bf(arena, node, total);
                false
            }
            0 => {
                set_bf(arena, node, 0);
                true
            }
            _ => rotate_after_remove(arena, root, node, total),
        };
        if !shrunk {
            tracing::trace!(node, "remove fixup absorbed");
            return;
        }
        match up {
            Some((p, s)) => {
                node = p;
                side = s;
            }
            None => return,
        }
    }
}

/// Rebalances `n` whose balance reached ±2. Returns whether the rotated
/// subtree ended up shorter than before the removal.
fn rotate_after_remove<N: AvlNodeLike>(
    arena: &mut Arena<N>,
    root: &mut Option<u32>,
    n: u32,
    total: i8,
) -> bool {
    if total > 0 {
        let Some(c) = get_l(arena, n) else {
            unreachable!("left-heavy node {n} without left child");
        };
        match bf(arena, c) {
            0 => {
                rotate_right(arena, root, n);
                set_bf(arena, n, 1);
                set_bf(arena, c, -1);
                false
            }
            1 => {
                rotate_right(arena, root, n);
                set_bf(arena, n, 0);
                set_bf(arena, c, 0);
                true
            }
            _ => {
                let Some(g) = get_r(arena, c) else {
                    unreachable!("right-leaning node {c} without right child");
                };
                let gbf = bf(arena, g);
                rotate_left(arena, root, c);
                rotate_right(arena, root, n);
                settle_double(arena, c, g, n, gbf);
                true
            }
        }
    } else {
        let Some(c) = get_r(arena, n) else {
            unreachable!("right-heavy node {n} without right child");
        };
        match bf(arena, c) {
            0 => {
                rotate_left(arena, root, n);
                set_bf(arena, n, -1);
                set_bf(arena, c, 1);
                false
            }
            -1 => {
                rotate_left(arena, root, n);
                set_bf(arena, n, 0);
                set_bf(arena, c, 0);
                true
            }
            _ => {
                let Some(g) = get_l(arena, c) else {
                    unreachable!("left-leaning node {c} without left child");
                };
                let gbf = bf(arena, g);
                rotate_right(arena, root, c);
                rotate_left(arena, root, n);
                settle_double(arena, n, g, c, gbf);
                true
            }
        }
    }
}
