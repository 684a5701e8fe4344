use proptest::prelude::*;
use rb_tree::{Key, RbTree, TreeError};

fn build(keys: &[Key]) -> RbTree {
    let mut tree = RbTree::new();
    for &k in keys {
        tree.insert(k).unwrap();
    }
    tree
}

fn infix_keys(tree: &RbTree) -> Vec<Key> {
    tree.to_infix_string()
        .split_whitespace()
        .map(|t| t[1..].parse().unwrap())
        .collect()
}

/// Distinct keys in arbitrary insertion order.
fn distinct_keys(max_len: usize) -> impl Strategy<Value = Vec<Key>> {
    proptest::collection::hash_set(-10_000i64..10_000, 0..max_len)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn invariants_hold_after_every_insert(keys in distinct_keys(300)) {
        let mut tree = RbTree::new();
        for &k in &keys {
            tree.insert(k).unwrap();
            prop_assert!(tree.assert_valid().is_ok(), "{:?}", tree.assert_valid());
        }

        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(infix_keys(&tree), sorted);
        prop_assert_eq!(tree.size(), keys.len());
    }

    #[test]
    fn height_is_logarithmic(keys in distinct_keys(500)) {
        let tree = build(&keys);
        let n = tree.size() as f64;
        let bound = 2.0 * (n + 1.0).log2();
        prop_assert!(tree.height() as f64 <= bound.max(1.0));
        prop_assert!(tree.black_height() * 2 >= tree.height());
    }

    #[test]
    fn duplicates_leave_shape_unchanged(keys in distinct_keys(100), pick in any::<prop::sample::Index>()) {
        prop_assume!(!keys.is_empty());
        let mut tree = build(&keys);
        let before = tree.to_prefix_string();
        let dup = keys[pick.index(keys.len())];

        prop_assert_eq!(tree.insert(dup), Err(TreeError::DuplicateKey(dup)));
        prop_assert_eq!(tree.size(), keys.len());
        prop_assert_eq!(tree.to_prefix_string(), before);
    }

    #[test]
    fn min_max_match_extremes(keys in distinct_keys(200)) {
        let tree = build(&keys);
        prop_assert_eq!(tree.min().ok(), keys.iter().copied().min());
        prop_assert_eq!(tree.max().ok(), keys.iter().copied().max());
    }

    #[test]
    fn clone_is_independent(keys in distinct_keys(150), extra in distinct_keys(50)) {
        let original = build(&keys);
        let snapshot = original.to_prefix_string();

        let mut copy = original.clone();
        prop_assert_eq!(copy.to_prefix_string(), snapshot.clone());
        for &k in &extra {
            let _ = copy.insert(k);
        }
        prop_assert!(copy.assert_valid().is_ok());
        prop_assert_eq!(original.to_prefix_string(), snapshot);
        prop_assert_eq!(original.size(), keys.len());
    }
}
