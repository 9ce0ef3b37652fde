use bintree::{Kind, Tree};

use crate::Op;

#[quickcheck]
fn heaps_stay_ordered_and_complete(ops: Vec<Op>) -> bool {
    [Kind::MinHeap, Kind::MaxHeap].into_iter().all(|kind| {
        let mut tree = Tree::new(kind);
        let mut held: Vec<i8> = Vec::new();
        ops.iter().all(|op| {
            match op {
                Op::Insert(value) => {
                    tree.insert(*value);
                    held.push(*value);
                }
                Op::Remove(value) => {
                    let found = tree.remove(value).is_found();
                    match held.iter().position(|x| x == value) {
                        Some(at) if found => {
                            held.swap_remove(at);
                        }
                        None if !found => {}
                        _ => return false,
                    }
                }
            }
            let top = match kind {
                Kind::MinHeap => held.iter().min(),
                _ => held.iter().max(),
            };
            let ordered = match kind {
                Kind::MinHeap => tree.is_min_heap(),
                _ => tree.is_max_heap(),
            };
            ordered && tree.is_complete() && tree.peek() == top && tree.size() == held.len()
        })
    })
}
