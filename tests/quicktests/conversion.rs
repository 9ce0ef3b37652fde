use bintree::{Kind, Order, Tree};

use crate::ORDERED;

fn sorted_unique(xs: &[i8]) -> Vec<i8> {
    let mut xs = xs.to_vec();
    xs.sort_unstable();
    xs.dedup();
    xs
}

#[quickcheck]
fn round_trip_between_ordered_kinds(xs: Vec<i8>) -> bool {
    let expected = sorted_unique(&xs);
    ORDERED.into_iter().all(|from| {
        let mut source = Tree::new(from);
        source.extend(xs.iter().copied());
        Kind::ALL.into_iter().filter(|kind| kind.is_ordered()).all(|to| {
            let mut target = Tree::new(to);
            target.assign_from(&source).unwrap();
            target.values(Order::In) == expected && target.size() == xs.len()
        })
    })
}

#[quickcheck]
fn sorted_sequence_reads_back(xs: Vec<i8>) -> bool {
    let sorted = sorted_unique(&xs);
    Kind::ALL.into_iter().all(|kind| {
        let tree = Tree::from_values(kind, sorted.iter().copied()).unwrap();
        match kind {
            Kind::Generic => tree.values(Order::Level) == sorted,
            Kind::MinHeap | Kind::MaxHeap => {
                let mut values = tree.values(Order::In);
                values.sort_unstable();
                values == sorted
            }
            _ => tree.values(Order::In) == sorted,
        }
    })
}

#[quickcheck]
fn generic_copy_keeps_shape(xs: Vec<i8>) -> bool {
    let mut source = Tree::new(Kind::Search);
    source.extend(xs);
    let mut copy = Tree::new(Kind::Generic);
    copy.assign_from(&source).unwrap();
    copy == source && copy.values(Order::Pre) == source.values(Order::Pre)
}

#[quickcheck]
fn clone_is_equal_and_independent(xs: Vec<i8>, extra: i8) -> bool {
    Kind::ALL.into_iter().all(|kind| {
        let mut source = Tree::new(kind);
        source.extend(xs.iter().copied());
        let before = source.values(Order::Pre);

        let mut copy = source.clone();
        let equal = copy == source;
        copy.insert(extra);
        copy.remove(&extra);
        copy.insert(extra);
        equal && source.values(Order::Pre) == before && copy.size() == source.size() + 1
    })
}

#[test]
fn red_black_scenario() {
    let mut tree = Tree::new(Kind::RedBlack);
    for value in [10, 20, 30, 40, 50, 60, 70] {
        tree.insert(value);
        assert!(tree.is_valid());
    }
}

#[test]
fn avl_scenario() {
    let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
    let mut tree = Tree::new(Kind::Avl);
    for (i, prime) in primes.into_iter().enumerate() {
        tree.insert(prime);
        assert!(tree.is_avl());
        assert_eq!(tree.values(Order::In), primes[..=i].to_vec());
    }
}
