//! Structural predicates. Each is a single walk over the tree; a violation halts the walk early.

use std::cmp::Ordering;

use crate::node::NodeId;
use crate::traverse::{Halt, Order};
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Number of levels, 0 for an empty tree. Kinds that cache heights read the root's; the
    /// others measure.
    pub fn height(&self) -> usize {
        match self.root {
            Some(root) if self.kind.caches_height() => self.nodes[root].height,
            root => self.measured_height(root),
        }
    }

    /// Height of the subtree under `id`, measured by walking it.
    pub(crate) fn measured_height(&self, id: Option<NodeId>) -> usize {
        let Some(id) = id else {
            return 0;
        };
        self.walk_from(id, Order::Post, 0, |_, left, right| Ok(left.max(right) + 1))
            .map_or(0, |height| height as usize)
    }

    /// Left subtree height minus right subtree height at `id`.
    pub fn balance_factor(&self, id: NodeId) -> isize {
        let node = &self.nodes[id];
        self.measured_height(node.left) as isize - self.measured_height(node.right) as isize
    }

    /// Every node has zero or two children.
    pub fn is_full(&self) -> bool {
        self.walk(Order::Pre, 0, |id, _, acc| match id {
            Some(id) if self.nodes[id].degree() == 1 => Err(Halt),
            Some(_) => Ok(acc),
            None => Err(Halt),
        })
        .is_ok()
    }

    /// Subtree heights differ by at most one at every node.
    pub fn is_balanced(&self) -> bool {
        self.walk(Order::Post, 0, |id, left, right| match id {
            Some(_) if (left - right).abs() <= 1 => Ok(left.max(right) + 1),
            _ => Err(Halt),
        })
        .is_ok()
    }

    /// Every level is full except possibly the last, which fills from the left with no gaps.
    pub fn is_complete(&self) -> bool {
        let mut gap = false;
        self.walk(Order::Level, 0, |id, _, acc| {
            let Some(id) = id else {
                return Err(Halt);
            };
            let node = &self.nodes[id];
            for child in [node.left, node.right] {
                match child {
                    Some(_) if gap => return Err(Halt),
                    Some(_) => {}
                    None => gap = true,
                }
            }
            Ok(acc)
        })
        .is_ok()
    }

    /// Every level is full.
    pub fn is_perfect(&self) -> bool {
        self.walk(Order::Post, 0, |id, left, right| match id {
            Some(_) if left == right => Ok(left + 1),
            _ => Err(Halt),
        })
        .is_ok()
    }

    /// In-order values strictly increase.
    pub fn is_search_ordered(&self) -> bool
    where
        T: Ord,
    {
        let mut previous: Option<&T> = None;
        self.walk(Order::In, 0, |id, _, acc| {
            let Some(id) = id else {
                return Err(Halt);
            };
            let value = &self.nodes[id].value;
            if previous.map_or(false, |previous| previous >= value) {
                return Err(Halt);
            }
            previous = Some(value);
            Ok(acc)
        })
        .is_ok()
    }

    /// No child is smaller than its parent.
    pub fn is_min_heap(&self) -> bool
    where
        T: Ord,
    {
        self.is_heap_ordered(Ordering::Less)
    }

    /// No child is larger than its parent.
    pub fn is_max_heap(&self) -> bool
    where
        T: Ord,
    {
        self.is_heap_ordered(Ordering::Greater)
    }

    /// `forbidden` is the ordering of child against parent that breaks the heap.
    fn is_heap_ordered(&self, forbidden: Ordering) -> bool
    where
        T: Ord,
    {
        self.walk(Order::Pre, 0, |id, _, acc| {
            let Some(id) = id else {
                return Err(Halt);
            };
            let node = &self.nodes[id];
            let broken = [node.left, node.right]
                .into_iter()
                .flatten()
                .any(|child| self.nodes[child].value.cmp(&node.value) == forbidden);
            if broken {
                Err(Halt)
            } else {
                Ok(acc)
            }
        })
        .is_ok()
    }
}
