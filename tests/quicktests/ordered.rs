use bintree::{Kind, Order, Removal, Tree};

use std::collections::BTreeMap;

use crate::{Op, ORDERED};

/// Applies a set of operations to a tree and a map of counts.
/// This way we can ensure that after a random smattering of inserts
/// and removals we hold the same occurrences as the map.
fn do_ops(ops: &[Op], tree: &mut Tree<i8>, map: &mut BTreeMap<i8, usize>) {
    for op in ops {
        match op {
            Op::Insert(value) => {
                tree.insert(*value);
                *map.entry(*value).or_insert(0) += 1;
            }
            Op::Remove(value) => {
                let removal = tree.remove(value);
                match map.get(value).copied() {
                    Some(1) => {
                        assert!(matches!(removal, Removal::Detached { .. }));
                        map.remove(value);
                    }
                    Some(count) => {
                        assert!(matches!(removal, Removal::Decremented(_)));
                        map.insert(*value, count - 1);
                    }
                    None => assert_eq!(removal, Removal::NotFound),
                }
            }
        }
    }
}

#[quickcheck]
fn in_order_is_sorted_and_unique(ops: Vec<Op>) -> bool {
    ORDERED.into_iter().all(|kind| {
        let mut tree = Tree::new(kind);
        let mut map = BTreeMap::new();
        do_ops(&ops, &mut tree, &mut map);
        tree.values(Order::In) == map.keys().copied().collect::<Vec<_>>()
    })
}

#[quickcheck]
fn duplicates_are_counted(ops: Vec<Op>) -> bool {
    ORDERED.into_iter().all(|kind| {
        let mut tree = Tree::new(kind);
        let mut map = BTreeMap::new();
        do_ops(&ops, &mut tree, &mut map);
        tree.size() == map.values().sum::<usize>()
            && tree.num_nodes() == map.len()
            && map.iter().all(|(value, count)| tree.count_of(value) == *count)
    })
}

#[quickcheck]
fn avl_balance_factors(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new(Kind::Avl);
    let mut map = BTreeMap::new();
    ops.chunks(4).all(|chunk| {
        do_ops(chunk, &mut tree, &mut map);
        tree.is_avl()
            && tree
                .traverse(Order::Pre)
                .into_iter()
                .all(|id| tree.balance_factor(id).abs() <= 1)
    })
}

#[quickcheck]
fn red_black_is_valid(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new(Kind::RedBlack);
    let mut map = BTreeMap::new();
    ops.chunks(4).all(|chunk| {
        do_ops(chunk, &mut tree, &mut map);
        tree.is_valid()
    })
}

#[quickcheck]
fn balance_converges(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new(Kind::Search);
    tree.extend(xs);
    tree.balance().unwrap();
    let once = tree.clone();
    tree.balance().unwrap();
    tree == once && tree.is_balanced() && tree.is_complete() && tree.is_avl()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    ORDERED.into_iter().all(|kind| {
        let mut tree = Tree::new(kind);
        tree.extend(xs.iter().copied());
        nots.iter()
            .filter(|x| !xs.contains(x))
            .all(|x| tree.search(x).is_none() && tree.find_parent(x).is_none())
    })
}

#[test]
fn search_tree_scenario() {
    let mut tree = Tree::new(Kind::Search);
    tree.extend([5, 3, 3, 8, 1, 5]);
    assert_eq!(tree.num_nodes(), 4);
    assert_eq!(tree.size(), 6);
}
