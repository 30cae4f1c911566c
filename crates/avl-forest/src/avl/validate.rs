use std::cmp::Ordering;

use crate::node::AvlNodeLike;
use crate::ordered::OrderedTree;
use crate::util::heights;

/// Full structural check of an AVL tree: parent links, key order, stored
/// balance factors against recomputed heights, and the AVL bound.
pub fn assert_avl_tree<K, V, C>(tree: &OrderedTree<K, V, i8, C>) -> Result<(), String>
where
    C: Fn(&K, &K) -> Ordering,
{
    tree.assert_valid()?;

    let arena = tree.arena();
    let mut err: Option<String> = None;
    heights(arena, tree.root_index(), |i, lh, rh| {
        if err.is_some() {
            return;
        }
        let expected_bf = lh as i64 - rh as i64;
        let actual_bf = i64::from(arena[i].bf());
        if actual_bf != expected_bf {
            err = Some(format!(
                "Balance factor mismatch at node {i}: expected {expected_bf}, got {actual_bf}"
            ));
        } else if !(-1..=1).contains(&actual_bf) {
            err = Some(format!("AVL balance violated at node {i}"));
        }
    });
    err.map_or(Ok(()), Err)
}

/// Recomputes heights bottom-up and confirms the AVL bound everywhere, with
/// every stored balance factor matching the true one.
pub fn is_avl_balanced<K, V, C>(tree: &OrderedTree<K, V, i8, C>) -> bool
where
    C: Fn(&K, &K) -> Ordering,
{
    let arena = tree.arena();
    let mut ok = true;
    heights(arena, tree.root_index(), |i, lh, rh| {
        ok &= lh.abs_diff(rh) <= 1 && i64::from(arena[i].bf()) == lh as i64 - rh as i64;
    });
    ok
}
