//! Height-balanced (AVL) trees: the search engine plus cached heights and rotations.
//!
//! Insertion and removal recurse down the ordered path and, on the way back up, refresh each
//! node's height and perform at most one single or double rotation per level. Every recursive
//! call returns the (possibly new) root of the subtree it was given so the caller can reattach
//! it, which is what lets child-only trees rotate without parent links.

use std::cmp::Ordering;

use crate::log::trace_log;
use crate::node::{Linkage, NodeId};
use crate::traverse::{Halt, Order};
use crate::tree::{Removal, Tree};

impl<T> Tree<T> {
    /// Left height minus right height, read from the cached heights.
    fn cached_balance(&self, id: NodeId) -> isize {
        let node = &self.nodes[id];
        self.cached_height(node.left) as isize - self.cached_height(node.right) as isize
    }

    /// Points whatever held `old` (root or parent slot) at `new` after a rotation. Child-only
    /// trees cannot find the parent of an inner node; their callers reattach the returned root.
    fn rehang(&mut self, old: NodeId, parent: Option<NodeId>, new: NodeId) {
        if self.root == Some(old) {
            self.set_root(Some(new));
        } else if self.linkage == Linkage::Parent {
            self.replace_child(parent, old, Some(new));
        }
    }

    /// Rotates `id` to the right. This moves the left child up vertically and `id` down
    /// vertically. Used to rebalance the tree when the left child is too tall. Returns the new
    /// local root.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      Option<parent>           Option<parent>
    ///        /                        /
    ///      id                       pivot
    ///     /  \                      /   \
    ///  pivot  z     rotate ->      x     id
    ///   / \                             /  \
    ///  x   y                           y    z
    /// ```
    pub(crate) fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let pivot = self.nodes[id].left.expect("Rotate right => left child");
        let parent = self.nodes[id].parent;
        let inner = self.nodes[pivot].right;
        trace_log!(node = %id, pivot = %pivot, "rotate right");

        self.set_left(id, inner);
        self.set_right(pivot, Some(id));
        self.rehang(id, parent, pivot);
        if self.kind.caches_height() {
            self.fix_height(id);
            self.fix_height(pivot);
        }
        pivot
    }

    /// Mirror image of [`rotate_right`](Self::rotate_right): the right child moves up.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    pub(crate) fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let pivot = self.nodes[id].right.expect("Rotate left => right child");
        let parent = self.nodes[id].parent;
        let inner = self.nodes[pivot].left;
        trace_log!(node = %id, pivot = %pivot, "rotate left");

        self.set_right(id, inner);
        self.set_left(pivot, Some(id));
        self.rehang(id, parent, pivot);
        if self.kind.caches_height() {
            self.fix_height(id);
            self.fix_height(pivot);
        }
        pivot
    }

    /// Refreshes the height of `id` and rotates once (single or double) if its children's
    /// heights differ by two. Returns the new local root.
    ///
    /// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    fn rebalance(&mut self, id: NodeId) -> NodeId {
        self.fix_height(id);
        let top = match self.cached_balance(id) {
            2 => {
                let left = self.nodes[id].left.expect("left-heavy => left child");
                if self.cached_balance(left) < 0 {
                    let pivot = self.rotate_left(left);
                    self.set_left(id, Some(pivot));
                }
                self.rotate_right(id)
            }
            -2 => {
                let right = self.nodes[id].right.expect("right-heavy => right child");
                if self.cached_balance(right) > 0 {
                    let pivot = self.rotate_right(right);
                    self.set_right(id, Some(pivot));
                }
                self.rotate_left(id)
            }
            _ => id,
        };

        if cfg!(debug_assertions) {
            let node = &self.nodes[top];
            let left_height = self.cached_height(node.left);
            let right_height = self.cached_height(node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        top
    }

    /// Removes one occurrence of `value` from the subtree under `at`, whose parent is `parent`.
    /// Returns the new subtree root and what happened.
    fn avl_remove_at(&mut self, at: Option<NodeId>, value: &T, parent: Option<NodeId>) -> (Option<NodeId>, Removal)
    where
        T: Ord,
    {
        let Some(id) = at else {
            return (None, Removal::NotFound);
        };
        let node = &self.nodes[id];
        let (left, right, count) = (node.left, node.right, node.count);
        let removal = match value.cmp(&node.value) {
            Ordering::Less => {
                let (child, removal) = self.avl_remove_at(left, value, Some(id));
                self.set_left(id, child);
                removal
            }
            Ordering::Greater => {
                let (child, removal) = self.avl_remove_at(right, value, Some(id));
                self.set_right(id, child);
                removal
            }
            Ordering::Equal if count > 1 => {
                self.nodes[id].count -= 1;
                self.size -= 1;
                return (Some(id), Removal::Decremented(id));
            }
            Ordering::Equal => match (left, right) {
                (Some(_), Some(right)) => {
                    // The successor's value moves here and the target value moves to the bottom
                    // of the right subtree, where it is still the smallest value.
                    let successor = self.leftmost(right);
                    self.nodes.swap_payload(id, successor);
                    let (child, removal) = self.avl_remove_at(Some(right), value, Some(id));
                    self.set_right(id, child);
                    removal
                }
                (left, right) => {
                    let child = left.or(right);
                    self.nodes.release(id);
                    self.size -= 1;
                    return (child, Removal::Detached { anchor: parent.or(child) });
                }
            },
        };
        match removal {
            Removal::Detached { .. } => (Some(self.rebalance(id)), removal),
            _ => (Some(id), removal),
        }
    }
}

impl<T: Ord> Tree<T> {
    /// Ordered insert that rebalances every ancestor of the new node.
    pub(crate) fn avl_insert(&mut self, value: T) -> NodeId {
        let root = self.root;
        let (root, placed) = self.avl_insert_at(root, value);
        self.set_root(Some(root));
        placed
    }

    /// Inserts `value` below `at`. Returns the new subtree root and the node holding `value`.
    fn avl_insert_at(&mut self, at: Option<NodeId>, value: T) -> (NodeId, NodeId) {
        let Some(id) = at else {
            let id = self.spawn(value);
            self.size += 1;
            return (id, id);
        };
        let node = &self.nodes[id];
        let (left, right) = (node.left, node.right);
        match value.cmp(&node.value) {
            Ordering::Less => {
                let (child, placed) = self.avl_insert_at(left, value);
                self.set_left(id, Some(child));
                (self.rebalance(id), placed)
            }
            Ordering::Greater => {
                let (child, placed) = self.avl_insert_at(right, value);
                self.set_right(id, Some(child));
                (self.rebalance(id), placed)
            }
            Ordering::Equal => {
                self.nodes[id].count += 1;
                self.size += 1;
                (id, id)
            }
        }
    }

    /// Removes one occurrence of `value`, rebalancing from the physically unlinked position up to
    /// the root.
    pub(crate) fn avl_remove(&mut self, value: &T) -> Removal {
        let root = self.root;
        let (root, removal) = self.avl_remove_at(root, value, None);
        if removal.is_found() {
            self.set_root(root);
        }
        removal
    }

    /// Search order holds, subtree heights differ by at most one everywhere and, for kinds that
    /// cache heights, every cached height is exact.
    pub fn is_avl(&self) -> bool {
        let check_cache = self.kind.caches_height();
        self.is_search_ordered()
            && self
                .walk(Order::Post, 0, |id, left, right| {
                    let Some(id) = id else {
                        return Err(Halt);
                    };
                    let height = left.max(right) + 1;
                    let cached_ok = !check_cache || self.nodes[id].height as isize == height;
                    if (left - right).abs() <= 1 && cached_ok {
                        Ok(height)
                    } else {
                        Err(Halt)
                    }
                })
                .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreeError;
    use crate::kind::{Kind, UnlinkedKind};

    /// Assert the heights of the root, left child, and right child of a tree.
    macro_rules! assert_heights {
        ($tree:ident, $height:expr, $left_height:expr, $right_height:expr) => {{
            match $tree.root().and_then(|root| $tree.node(root)) {
                Some(n) => {
                    assert_eq!(n.height(), $height);

                    let left_height = n.left().map_or(0, |id| $tree.node(id).unwrap().height());
                    let right_height = n.right().map_or(0, |id| $tree.node(id).unwrap().height());
                    assert_eq!(right_height, $right_height);
                    assert_eq!(left_height, $left_height);
                }
                None => assert_eq!(0, $height),
            }
        }};
    }

    fn avl_of(values: &[i32]) -> Tree<i32> {
        let mut tree = Tree::new(Kind::Avl);
        tree.extend(values.iter().copied());
        tree
    }

    fn root_value(tree: &Tree<i32>) -> i32 {
        *tree.value(tree.root().unwrap()).unwrap()
    }

    #[test]
    fn primes_stay_balanced_after_every_insert() {
        let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        let mut tree = Tree::new(Kind::Avl);
        for (i, prime) in primes.into_iter().enumerate() {
            tree.insert(prime);
            assert!(tree.is_avl());
            for id in tree.traverse(Order::Pre) {
                assert!(tree.balance_factor(id).abs() <= 1);
            }
            assert_eq!(tree.values(Order::In), primes[..=i].to_vec());
        }
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn always_adding_left() {
        let keys = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        let mut inserted = Vec::new();

        let mut tree = Tree::new(Kind::Avl);
        assert!(tree.search(&10).is_none());

        for key in keys {
            tree.insert(key);
            inserted.push(key);
            for inserted in &inserted {
                assert!(tree.contains(inserted));
            }
            assert!(tree.is_avl());
        }
    }

    #[test]
    fn always_adding_right() {
        let mut tree = Tree::new(Kind::Avl);
        for key in 1..=10 {
            tree.insert(key);
            assert!(tree.is_avl());
        }
        assert_eq!(tree.values(Order::In), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn single_rotations() {
        let tree = avl_of(&[1, 2, 3]);
        assert_eq!(root_value(&tree), 2);
        assert_heights!(tree, 2, 1, 1);

        let tree = avl_of(&[3, 2, 1]);
        assert_eq!(root_value(&tree), 2);
        assert_heights!(tree, 2, 1, 1);
    }

    #[test]
    fn double_rotations() {
        let tree = avl_of(&[3, 1, 2]);
        assert_eq!(root_value(&tree), 2);
        assert_heights!(tree, 2, 1, 1);

        let tree = avl_of(&[1, 3, 2]);
        assert_eq!(root_value(&tree), 2);
        assert_heights!(tree, 2, 1, 1);
    }

    #[test]
    fn rotation_keeps_parent_links() {
        let tree = avl_of(&[5, 3, 8, 1, 4, 0]);
        let three = tree.search(&3).unwrap();
        assert_eq!(tree.root(), Some(three));
        for id in tree.traverse(Order::Level) {
            let node = tree.node(id).unwrap();
            for child in [node.left(), node.right()].into_iter().flatten() {
                assert_eq!(tree.node(child).unwrap().parent(), Some(id));
            }
        }
        assert_eq!(tree.node(three).unwrap().parent(), None);
    }

    #[test]
    fn delete_with_no_children() {
        let mut tree = avl_of(&[2, 1, 3]);
        let two = tree.search(&2).unwrap();
        assert_eq!(tree.remove(&3), Removal::Detached { anchor: Some(two) });
        assert_heights!(tree, 2, 1, 0);
        assert!(tree.is_avl());
    }

    #[test]
    fn delete_with_null_left() {
        let mut tree = avl_of(&[2, 1, 3, 4]);
        tree.remove(&3);
        assert_eq!(tree.values(Order::Pre), vec![2, 1, 4]);
        assert_heights!(tree, 2, 1, 1);
    }

    #[test]
    fn delete_root() {
        let mut tree = avl_of(&[2, 1, 3]);
        tree.remove(&2);
        assert_eq!(root_value(&tree), 3);
        assert_eq!(tree.values(Order::In), vec![1, 3]);
        assert!(tree.is_avl());

        tree.remove(&3);
        let one = tree.search(&1).unwrap();
        assert_eq!(tree.root(), Some(one));
        assert_eq!(tree.remove(&1), Removal::Detached { anchor: None });
        assert!(tree.is_empty());
        assert_heights!(tree, 0, 0, 0);
    }

    #[test]
    fn delete_rebalances() {
        //     2              4
        //   1   4    ->    2   5
        //      3 5          3
        let mut tree = avl_of(&[2, 1, 4, 3, 5]);
        tree.remove(&1);
        assert_eq!(root_value(&tree), 4);
        assert_heights!(tree, 3, 2, 1);
        assert_eq!(tree.values(Order::Pre), vec![4, 2, 3, 5]);
    }

    #[test]
    fn duplicates_use_the_counter() {
        let mut tree = avl_of(&[5, 5, 5, 1]);
        let five = tree.search(&5).unwrap();
        assert_eq!(tree.num_nodes(), 2);
        assert_eq!(tree.size(), 4);
        assert_eq!(tree.count_of(&5), 3);

        assert_eq!(tree.remove(&5), Removal::Decremented(five));
        assert_eq!(tree.remove(&5), Removal::Decremented(five));
        assert!(matches!(tree.remove(&5), Removal::Detached { .. }));
        assert!(!tree.contains(&5));
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.remove(&5), Removal::NotFound);
    }

    #[test]
    fn unspecified_removal_is_refused() {
        let mut tree = avl_of(&[1, 2, 3]);
        assert_eq!(tree.remove_last(), Err(TreeError::UnspecifiedRemoval(Kind::Avl)));
        assert_eq!(tree.size(), 3);
    }

    #[test]
    fn remove_node_by_id() {
        let mut tree = avl_of(&[4, 2, 6, 1, 3, 5, 7]);
        let two = tree.search(&2).unwrap();
        assert!(tree.remove_node(two).is_found());
        assert!(!tree.contains(&2));
        assert!(tree.is_avl());
    }

    #[test]
    fn child_only_trees_rotate_too() {
        let mut tree = Tree::new_unlinked(UnlinkedKind::Avl);
        tree.extend(1..=31);
        assert!(tree.is_avl());
        assert!(tree.is_perfect());

        for value in (1..=31).step_by(3) {
            tree.remove(&value);
            assert!(tree.is_avl());
        }
        assert_eq!(tree.size(), 20);
    }

    #[test]
    fn balance_keeps_heights_cached() {
        let mut tree = Tree::new(Kind::Avl);
        tree.extend([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        tree.balance().unwrap();
        assert!(tree.is_avl());
        assert!(tree.is_complete());
    }

    mod quicktests {
        use std::collections::BTreeMap;

        use super::*;
        use crate::test::quick::Op;

        quickcheck::quickcheck! {
            fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
                let mut tree = Tree::new(Kind::Avl);
                let mut map = BTreeMap::new();

                for op in &ops {
                    match op {
                        Op::Insert(value) => {
                            tree.insert(*value);
                            *map.entry(*value).or_insert(0usize) += 1;
                        }
                        Op::Remove(value) => {
                            let removal = tree.remove(value);
                            let remaining = map.get(value).map(|count| count - 1);
                            match remaining {
                                Some(0) => {
                                    assert!(removal.is_found());
                                    map.remove(value);
                                }
                                Some(count) => {
                                    assert!(removal.is_found());
                                    map.insert(*value, count);
                                }
                                None => assert_eq!(removal, Removal::NotFound),
                            }
                        }
                        Op::RemoveLast | Op::Balance => {}
                    }
                    if !tree.is_avl() {
                        return false;
                    }
                }
                map.iter().all(|(value, count)| tree.count_of(value) == *count)
                    && tree.size() == map.values().sum::<usize>()
            }
        }
    }
}
