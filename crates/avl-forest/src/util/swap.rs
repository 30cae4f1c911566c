use crate::arena::Arena;
use crate::types::Node;

use super::{get_l, get_p, get_r, set_child, set_l, set_p, set_r, side_of};

/// Swaps the topological positions of `x` and `y`: parent, left and right
/// links are exchanged, including the case where one node is the direct
/// parent of the other. Returns the (possibly changed) root.
///
/// Pure topology: keys, values and auxiliary payloads stay with their node.
pub fn swap<N: Node>(arena: &mut Arena<N>, mut root: Option<u32>, x: u32, y: u32) -> Option<u32> {
    if x == y {
        return root;
    }
    tracing::trace!(x, y, "swap node positions");

    let xp = get_p(arena, x);
    let xl = get_l(arena, x);
    let xr = get_r(arena, x);
    let x_side = side_of(arena, x);

    let yp = get_p(arena, y);
    let yl = get_l(arena, y);
    let yr = get_r(arena, y);
    let y_side = side_of(arena, y);

    // Children: whatever pointed at the other node now points back at self.
    let own = |c: Option<u32>, other: u32, me: u32| if c == Some(other) { Some(me) } else { c };
    let x_new_l = own(yl, x, y);
    let x_new_r = own(yr, x, y);
    let y_new_l = own(xl, y, x);
    let y_new_r = own(xr, y, x);

    set_l(arena, x, x_new_l);
    set_r(arena, x, x_new_r);
    set_l(arena, y, y_new_l);
    set_r(arena, y, y_new_r);
    for c in [x_new_l, x_new_r].into_iter().flatten() {
        set_p(arena, c, Some(x));
    }
    for c in [y_new_l, y_new_r].into_iter().flatten() {
        set_p(arena, c, Some(y));
    }

    // Parents: adjacent nodes were already re-linked through the children.
    if xp != Some(y) {
        set_p(arena, y, xp);
        match (xp, x_side) {
            (Some(p), Some(side)) => set_child(arena, p, side, Some(y)),
            _ => root = Some(y),
        }
    }
    if yp != Some(x) {
        set_p(arena, x, yp);
        match (yp, y_side) {
            (Some(p), Some(side)) => set_child(arena, p, side, Some(x)),
            _ => root = Some(x),
        }
    }

    root
}
