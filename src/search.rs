//! The ordered backbone shared by search, AVL and red-black trees.
//!
//! A Binary Search Tree keeps two invariants for every node:
//!
//! 1. all values in its left subtree are less than its own value;
//! 2. all values in its right subtree are greater than its own value.
//!
//! Equal values never create a node: they bump the node's duplicate counter, so [`Tree::size`]
//! and [`Tree::num_nodes`] differ once duplicates are inserted.
//!
//! # Examples
//!
//! ```
//! use bintree::{Kind, Order, Removal, Tree};
//!
//! let mut tree = Tree::new(Kind::Search);
//! tree.extend([5, 3, 3, 8, 1, 5]);
//! assert_eq!(tree.num_nodes(), 4);
//! assert_eq!(tree.size(), 6);
//!
//! // The first removal only drops a duplicate.
//! let three = tree.search(&3).unwrap();
//! assert_eq!(tree.remove(&3), Removal::Decremented(three));
//! assert!(tree.contains(&3));
//!
//! tree.balance().unwrap();
//! assert!(tree.is_complete());
//! assert_eq!(tree.values(Order::In), vec![1, 3, 5, 8]);
//! ```

use std::cmp::Ordering;

use crate::error::{Result, TreeError};
use crate::kind::Kind;
use crate::log::debug_log;
use crate::node::{Color, NodeId};
use crate::tree::{Removal, Side, Tree};
use crate::util::complete_left_size;

/// Where an ordered descent stopped.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Descent {
    /// The matching node.
    pub(crate) found: Option<NodeId>,
    /// The last node left behind: the match's parent, or where a new node would hang.
    pub(crate) parent: Option<NodeId>,
    /// Which slot of `parent` the match occupies or a new node would take.
    pub(crate) side: Side,
}

/// Result of placing a value in an ordered tree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Placement {
    pub(crate) id: NodeId,
    /// `false` when the value landed on an existing node's counter.
    pub(crate) fresh: bool,
}

/// What unlinking one node from an ordered tree left behind.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Detached {
    /// Parent of the unlinked node.
    pub(crate) parent: Option<NodeId>,
    /// The child that moved into the unlinked node's slot.
    pub(crate) child: Option<NodeId>,
    /// Which slot of `parent` the unlinked node occupied.
    pub(crate) side: Side,
    /// Color of the unlinked node.
    pub(crate) color: Color,
}

impl<T> Tree<T> {
    /// Walks down from the root. `probe` compares the target against a node's value: `Less` goes
    /// left, `Greater` goes right, `Equal` stops.
    pub(crate) fn descend<P>(&self, mut probe: P) -> Descent
    where
        P: FnMut(&T) -> Ordering,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            match probe(&node.value) {
                Ordering::Less => {
                    parent = Some(id);
                    side = Side::Left;
                    current = node.left;
                }
                Ordering::Equal => {
                    return Descent {
                        found: Some(id),
                        parent,
                        side,
                    }
                }
                Ordering::Greater => {
                    parent = Some(id);
                    side = Side::Right;
                    current = node.right;
                }
            }
        }
        Descent {
            found: None,
            parent,
            side,
        }
    }

    /// Unlinks `id`, whose parent is `parent`. A node with two children trades value and count
    /// with its in-order successor, and the successor's position is unlinked instead.
    pub(crate) fn search_detach(&mut self, id: NodeId, parent: Option<NodeId>) -> Detached {
        let node = &self.nodes[id];
        if let (Some(_), Some(right)) = (node.left, node.right) {
            let mut successor_parent = id;
            let mut successor = right;
            while let Some(left) = self.nodes[successor].left {
                successor_parent = successor;
                successor = left;
            }
            self.nodes.swap_payload(id, successor);
            return self.unlink(successor, Some(successor_parent));
        }
        self.unlink(id, parent)
    }

    /// Unlinks a node with at most one child, promoting that child.
    fn unlink(&mut self, id: NodeId, parent: Option<NodeId>) -> Detached {
        let node = &self.nodes[id];
        debug_assert!(node.left.is_none() || node.right.is_none());
        let child = node.left.or(node.right);
        let side = parent.map_or(Side::Left, |parent| self.side_of(parent, id));
        self.replace_child(parent, id, child);
        let removed = self.nodes.release(id);
        Detached {
            parent,
            child,
            side,
            color: removed.color,
        }
    }

    /// Drops one occurrence held by `id`, unlinking it once its counter runs out.
    pub(crate) fn search_remove_found(&mut self, id: NodeId, parent: Option<NodeId>) -> Removal {
        if self.nodes[id].count > 1 {
            self.nodes[id].count -= 1;
            self.size -= 1;
            return Removal::Decremented(id);
        }
        let detached = self.search_detach(id, parent);
        self.size -= 1;
        Removal::Detached {
            anchor: detached.parent.or(detached.child),
        }
    }

    /// Replaces every node with a complete, balanced tree holding `pairs`, which must be sorted
    /// and free of duplicates.
    pub(crate) fn rebuild_sorted(&mut self, pairs: Vec<(T, usize)>) {
        debug_log!(kind = %self.kind, nodes = pairs.len(), "rebuilding balanced");
        self.clear();
        self.size = pairs.iter().map(|(_, count)| count).sum();
        let len = pairs.len();
        let mut items = pairs.into_iter();
        let root = self.build_complete(&mut items, len);
        self.set_root(root);
    }

    /// Builds a complete subtree from the next `n` items, consuming them in order.
    fn build_complete<I>(&mut self, items: &mut I, n: usize) -> Option<NodeId>
    where
        I: Iterator<Item = (T, usize)>,
    {
        if n == 0 {
            return None;
        }
        let left_len = complete_left_size(n);
        let left = self.build_complete(items, left_len);
        let (value, count) = items.next()?;
        let id = self.spawn(value);
        self.nodes[id].count = count;
        let right = self.build_complete(items, n - 1 - left_len);
        self.set_left(id, left);
        self.set_right(id, right);
        self.fix_height(id);
        Some(id)
    }

    /// The smallest value.
    pub fn min(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.leftmost(root)].value)
    }

    /// The largest value.
    pub fn max(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.rightmost(root)].value)
    }
}

impl<T: Ord> Tree<T> {
    /// Places `value` by ordered descent. Equal values bump the existing node's counter.
    pub(crate) fn search_insert(&mut self, value: T) -> Placement {
        let descent = self.descend(|probe| value.cmp(probe));
        self.size += 1;
        if let Some(id) = descent.found {
            self.nodes[id].count += 1;
            return Placement { id, fresh: false };
        }
        let id = self.spawn(value);
        self.attach(descent.parent, descent.side, id);
        Placement { id, fresh: true }
    }

    pub(crate) fn search_remove(&mut self, value: &T) -> Removal {
        let descent = self.descend(|probe| value.cmp(probe));
        match descent.found {
            Some(id) => self.search_remove_found(id, descent.parent),
            None => Removal::NotFound,
        }
    }
}

impl<T: Ord + Clone> Tree<T> {
    /// Rebuilds an ordered tree into a shape that is balanced, complete and AVL-valid at once.
    /// Red-black trees are colorized again afterwards. Other kinds have no order to rebuild from.
    pub fn balance(&mut self) -> Result<()> {
        if !self.kind.is_ordered() {
            return Err(TreeError::NotOrdered(self.kind));
        }
        let pairs = self.pairs();
        self.rebuild_sorted(pairs);
        if self.kind == Kind::RedBlack {
            self.colorize()?;
        }
        Ok(())
    }
}
