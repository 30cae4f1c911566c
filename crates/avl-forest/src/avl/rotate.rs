//! Rotation primitives.
//!
//! Both are O(1) topology rewrites. They do not touch balance factors; the
//! fixup walks assign those explicitly because the right values depend on
//! the case that triggered the rotation.

use crate::arena::Arena;
use crate::types::Node;
use crate::util::{get_l, get_p, get_r, replace_child, set_l, set_p, set_r};

/// Promotes `n`'s right child into `n`'s slot; `n` becomes its left child and
/// inherits its former left subtree. Returns the promoted node.
///
/// Updates `root` when `n` was the root.
pub fn rotate_left<N: Node>(arena: &mut Arena<N>, root: &mut Option<u32>, n: u32) -> u32 {
    let Some(nr) = get_r(arena, n) else {
        unreachable!("rotate_left on node {n} without right child");
    };
    let p = get_p(arena, n);
    let nrl = get_l(arena, nr);
    tracing::trace!(n, nr, "rotate left");

    if replace_child(arena, p, n, Some(nr)) {
        *root = Some(nr);
    }
    set_p(arena, nr, p);
    set_l(arena, nr, Some(n));
    set_p(arena, n, Some(nr));
    set_r(arena, n, nrl);
    if let Some(nrl) = nrl {
        set_p(arena, nrl, Some(n));
    }
    nr
}

/// Mirror of [`rotate_left`].
pub fn rotate_right<N: Node>(arena: &mut Arena<N>, root: &mut Option<u32>, n: u32) -> u32 {
    let Some(nl) = get_l(arena, n) else {
        unreachable!("rotate_right on node {n} without left child");
    };
    let p = get_p(arena, n);
    let nlr = get_r(arena, nl);
    tracing::trace!(n, nl, "rotate right");

    if replace_child(arena, p, n, Some(nl)) {
        *root = Some(nl);
    }
    set_p(arena, nl, p);
    set_r(arena, nl, Some(n));
    set_p(arena, n, Some(nl));
    set_l(arena, n, nlr);
    if let Some(nlr) = nlr {
        set_p(arena, nlr, Some(n));
    }
    nl
}
