use avl_forest::{AvlMap, AvlSet, BstMap, Error};
use avl_forest_util::{Fuzzer, Op};
use std::collections::BTreeMap;

fn keys<V>(map: &AvlMap<i64, V>) -> Vec<i64> {
    map.keys().copied().collect()
}

#[test]
fn ascending_insert_single_rotation_matrix() {
    let mut map = AvlMap::new();
    for k in [1, 2, 3] {
        assert_eq!(map.insert(k, k), None);
    }
    assert_eq!(map.root_key(), Some(&2));
    assert_eq!(keys(&map), vec![1, 2, 3]);
    assert!(map.is_balanced());
    map.assert_valid().unwrap();
}

#[test]
fn zig_zag_insert_double_rotation_matrix() {
    let mut map = AvlMap::new();
    for k in [3, 1, 2] {
        map.insert(k, ());
    }
    assert_eq!(map.root_key(), Some(&2));
    assert!(map.is_balanced());
    assert_eq!(keys(&map), vec![1, 2, 3]);
}

#[test]
fn remove_root_until_empty_matrix() {
    let mut map = AvlMap::new();
    for k in 1..=7 {
        map.insert(k, k * 10);
    }
    assert_eq!(map.root_key(), Some(&4));
    assert_eq!(map.height(), 3);

    let mut remaining: Vec<i64> = (1..=7).collect();
    while let Some(&root) = map.root_key() {
        assert_eq!(map.remove(&root), Some(root * 10));
        remaining.retain(|&k| k != root);
        assert!(map.is_balanced());
        map.assert_valid().unwrap();
        assert_eq!(keys(&map), remaining);
    }
    assert!(map.is_empty());
    assert!(remaining.is_empty());
}

#[test]
fn insert_overwrite_and_remove_absent_matrix() {
    let mut map = AvlMap::new();
    map.insert(5, "five");
    map.insert(2, "two");
    assert_eq!(map.insert(5, "FIVE"), Some("five"));
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&5), Some(&"FIVE"));

    let snapshot = format!("{map:?}");
    let root = map.root_key().copied();
    let height = map.height();
    assert_eq!(map.remove(&9), None);
    assert_eq!(map.len(), 2);
    assert_eq!(format!("{map:?}"), snapshot);
    assert_eq!(map.root_key().copied(), root);
    assert_eq!(map.height(), height);
    assert_eq!(map.remove(&2), Some("two"));
    assert_eq!(map.remove(&2), None);
    map.assert_valid().unwrap();
}

#[test]
fn insert_then_remove_restores_key_set_matrix() {
    let mut map = AvlMap::new();
    for k in [10, 20, 30, 40] {
        map.insert(k, ());
    }
    let before = keys(&map);
    map.insert(25, ());
    map.remove(&25);
    assert_eq!(keys(&map), before);
    assert!(map.is_balanced());
}

#[test]
fn direct_access_matrix() {
    let mut map: AvlMap<i64, String> = (0..5).map(|k| (k, k.to_string())).collect();
    assert_eq!(map.at(&3).map(String::as_str), Ok("3"));
    assert_eq!(map.at(&7), Err(Error::KeyNotFound));
    assert_eq!(Error::KeyNotFound.to_string(), "key not found");

    map.at_mut(&3).unwrap().push('!');
    assert_eq!(map[&3], "3!");
    assert!(map.at_mut(&42).is_err());

    if let Some(v) = map.get_mut(&0) {
        v.clear();
    }
    assert_eq!(map.get(&0).map(String::as_str), Some(""));
    assert!(map.contains_key(&4));
    assert!(!map.contains_key(&5));
}

#[test]
#[should_panic(expected = "key not found")]
fn index_missing_key_panics_matrix() {
    let map: AvlMap<i64, i64> = AvlMap::new();
    let _ = map[&1];
}

#[test]
fn cursor_walk_matrix() {
    let map: AvlMap<i64, i64> = [(3, 30), (1, 10), (2, 20), (5, 50)].into_iter().collect();

    let first = map.first().unwrap();
    assert_eq!(first.entry(), (&1, &10));
    assert_eq!(first.predecessor(), None);

    let mut cursor = first;
    let mut seen = vec![*cursor.key()];
    while cursor.move_next() {
        seen.push(*cursor.key());
    }
    assert_eq!(seen, vec![1, 2, 3, 5]);
    assert_eq!(cursor, map.last().unwrap());
    assert!(!cursor.move_next());

    assert!(cursor.move_prev());
    assert_eq!(cursor.value(), &30);

    let at_two = map.cursor(&2).unwrap();
    assert_eq!(at_two.successor().map(|c| *c.key()), Some(3));
    assert_eq!(at_two.predecessor().map(|c| *c.key()), Some(1));
    assert!(map.cursor(&4).is_none());

    let empty: AvlMap<i64, i64> = AvlMap::new();
    assert!(empty.first().is_none());
    assert!(empty.last().is_none());
}

#[test]
fn iteration_matrix() {
    let mut map = AvlMap::with_capacity(16);
    for k in [8, 4, 12, 2, 6, 10, 14] {
        map.insert(k, k * 2);
    }
    let it = map.iter();
    assert_eq!(it.len(), 7);
    let pairs: Vec<(i64, i64)> = it.map(|(k, v)| (*k, *v)).collect();
    assert_eq!(
        pairs,
        vec![(2, 4), (4, 8), (6, 12), (8, 16), (10, 20), (12, 24), (14, 28)]
    );
    assert_eq!(map.values().copied().sum::<i64>(), 112);

    let mut via_ref = Vec::new();
    for (k, _) in &map {
        via_ref.push(*k);
    }
    assert_eq!(via_ref, keys(&map));
    assert_eq!(
        format!("{:?}", map.iter().take(2).collect::<Vec<_>>()),
        "[(2, 4), (4, 8)]"
    );
}

#[test]
fn clear_and_reuse_matrix() {
    let mut map = AvlMap::new();
    for k in 0..100 {
        map.insert(k, k);
    }
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.root_key(), None);
    assert_eq!(format!("{map:?}"), "{}");

    for k in (0..10).rev() {
        map.insert(k, -k);
    }
    assert_eq!(map.len(), 10);
    map.assert_valid().unwrap();
}

#[test]
fn custom_comparator_matrix() {
    let mut map = AvlMap::with_comparator(|a: &String, b: &String| {
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    });
    for s in ["ccc", "a", "bb", "aa", "b"] {
        map.insert(s.to_string(), s.len());
    }
    let order: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(order, vec!["a", "b", "aa", "bb", "ccc"]);
    map.assert_valid().unwrap();
}

#[test]
fn unbalanced_map_matrix() {
    let mut bst = BstMap::new();
    for k in 1..=6 {
        bst.insert(k, k);
    }
    assert_eq!(bst.height(), 6);
    assert!(!bst.is_balanced());
    assert_eq!(bst.remove(&3), Some(3));
    assert_eq!(bst.iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![1, 2, 4, 5, 6]);
    bst.assert_valid().unwrap();
}

#[test]
fn set_matrix() {
    let mut set: AvlSet<i64> = [5, 1, 9, 3].into_iter().collect();
    assert!(set.contains(&9));
    assert!(!set.insert(9));
    assert!(set.remove(&1));
    assert_eq!(set.first(), Some(&3));
    assert_eq!(set.last(), Some(&9));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 5, 9]);
    assert!(set.is_balanced());
}

#[test]
fn shuffled_insert_remove_ladder_matrix() {
    for seed in 0..8u64 {
        let fuzzer = Fuzzer::from_u64(seed);
        let mut map = AvlMap::new();
        let inserted = fuzzer.shuffled(0, 200);
        for &k in &inserted {
            map.insert(k, k);
            map.assert_valid().unwrap();
        }
        assert_eq!(map.len(), 200);
        assert!(map.height() <= 11);

        let mut removed = inserted.clone();
        fuzzer.shuffle(&mut removed);
        for (n, k) in removed.iter().enumerate() {
            assert_eq!(map.remove(k), Some(*k));
            assert_eq!(map.len(), 199 - n);
            map.assert_valid().unwrap();
        }
        assert!(map.is_empty());
    }
}

#[test]
fn random_ops_against_btree_matrix() {
    for seed in 100..104u64 {
        let fuzzer = Fuzzer::from_u64(seed);
        let mut map = AvlMap::new();
        let mut model = BTreeMap::new();
        for op in fuzzer.ops(2_000, 64, 0.55) {
            match op {
                Op::Insert(k, v) => assert_eq!(map.insert(k, v), model.insert(k, v)),
                Op::Remove(k) => assert_eq!(map.remove(&k), model.remove(&k)),
            }
        }
        map.assert_valid().unwrap();
        assert!(map
            .iter()
            .map(|(k, v)| (*k, *v))
            .eq(model.iter().map(|(k, v)| (*k, *v))));
    }
}

#[test]
fn sparse_keys_matrix() {
    let fuzzer = Fuzzer::from_u64(77);
    let ks = fuzzer.distinct_keys(300, -1_000_000, 1_000_000);
    let map: AvlMap<i64, usize> = ks.iter().enumerate().map(|(i, k)| (*k, i)).collect();
    let mut sorted = ks.clone();
    sorted.sort_unstable();
    assert_eq!(keys(&map), sorted);
    assert_eq!(map.get(&ks[17]), Some(&17));
    assert!(map.is_balanced());
}
