//! One traversal engine for every kind.
//!
//! A visitor is called once per node with two context integers whose meaning depends on the
//! order:
//!
//! | Order | first integer | second integer |
//! |-------|---------------|----------------|
//! | [`Order::Pre`] | depth (root = 0) | running result |
//! | [`Order::In`] | result of the left subtree | running result on entry |
//! | [`Order::Post`] | result of the left subtree | result of the right subtree |
//! | [`Order::Level`] | level index (root = 0) | running result |
//!
//! Empty children yield the walk's seed. Whatever the visitor returns becomes the running result.
//!
//! A visitor returning [`Halt`] is called once more with `None` in place of the node and the same
//! context. Returning a value from that second call resumes the walk with it; halting again ends
//! the walk with [`TreeError::Aborted`].
//!
//! # Examples
//!
//! ```
//! use bintree::{Kind, Order, Tree};
//!
//! let tree = Tree::from_values(Kind::Search, 1..=7).unwrap();
//!
//! // Post-order with a seed of 0 computes heights.
//! let height = tree.walk(Order::Post, 0, |_, left, right| Ok(left.max(right) + 1));
//! assert_eq!(height, Ok(3));
//!
//! assert_eq!(tree.values(Order::Pre), vec![4, 2, 1, 3, 6, 5, 7]);
//! assert_eq!(tree.values(Order::Level), vec![4, 2, 6, 1, 3, 5, 7]);
//! ```

use std::collections::VecDeque;

use crate::error::{Result, TreeError};
use crate::log::trace_log;
use crate::node::NodeId;
use crate::tree::Tree;

/// Visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, node, right subtree.
    In,
    /// Left subtree, right subtree, node.
    Post,
    /// Level by level, left to right.
    Level,
}

/// The reserved error signal a visitor returns to ask for the walk to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt;

/// What a visitor returns.
pub type Visit = std::result::Result<isize, Halt>;

/// Calls the visitor, giving it its second chance on [`Halt`].
fn consult<F>(visit: &mut F, id: NodeId, a: isize, b: isize) -> Result<isize>
where
    F: FnMut(Option<NodeId>, isize, isize) -> Visit,
{
    match visit(Some(id), a, b) {
        Ok(value) => Ok(value),
        Err(Halt) => visit(None, a, b).map_err(|Halt| {
            trace_log!(node = %id, "traversal aborted");
            TreeError::Aborted
        }),
    }
}

impl<T> Tree<T> {
    /// Walks the whole tree in `order`. An empty tree returns `seed` without calling the visitor.
    pub fn walk<F>(&self, order: Order, seed: isize, visit: F) -> Result<isize>
    where
        F: FnMut(Option<NodeId>, isize, isize) -> Visit,
    {
        match self.root {
            Some(root) => self.walk_from(root, order, seed, visit),
            None => Ok(seed),
        }
    }

    /// Walks the subtree under `start` in `order`.
    pub fn walk_from<F>(&self, start: NodeId, order: Order, seed: isize, mut visit: F) -> Result<isize>
    where
        F: FnMut(Option<NodeId>, isize, isize) -> Visit,
    {
        match order {
            Order::Pre => self.pre_order(start, 0, seed, &mut visit),
            Order::In => self.in_order(start, seed, &mut visit),
            Order::Post => self.post_order(start, seed, &mut visit),
            Order::Level => self.level_order(start, seed, &mut visit),
        }
    }

    fn pre_order<F>(&self, id: NodeId, depth: isize, acc: isize, visit: &mut F) -> Result<isize>
    where
        F: FnMut(Option<NodeId>, isize, isize) -> Visit,
    {
        let mut acc = consult(visit, id, depth, acc)?;
        let node = &self.nodes[id];
        if let Some(left) = node.left {
            acc = self.pre_order(left, depth + 1, acc, visit)?;
        }
        if let Some(right) = node.right {
            acc = self.pre_order(right, depth + 1, acc, visit)?;
        }
        Ok(acc)
    }

    fn in_order<F>(&self, id: NodeId, acc: isize, visit: &mut F) -> Result<isize>
    where
        F: FnMut(Option<NodeId>, isize, isize) -> Visit,
    {
        let node = &self.nodes[id];
        let left = match node.left {
            Some(left) => self.in_order(left, acc, visit)?,
            None => acc,
        };
        let here = consult(visit, id, left, acc)?;
        match node.right {
            Some(right) => self.in_order(right, here, visit),
            None => Ok(here),
        }
    }

    fn post_order<F>(&self, id: NodeId, seed: isize, visit: &mut F) -> Result<isize>
    where
        F: FnMut(Option<NodeId>, isize, isize) -> Visit,
    {
        let node = &self.nodes[id];
        let left = match node.left {
            Some(left) => self.post_order(left, seed, visit)?,
            None => seed,
        };
        let right = match node.right {
            Some(right) => self.post_order(right, seed, visit)?,
            None => seed,
        };
        consult(visit, id, left, right)
    }

    fn level_order<F>(&self, start: NodeId, seed: isize, visit: &mut F) -> Result<isize>
    where
        F: FnMut(Option<NodeId>, isize, isize) -> Visit,
    {
        let mut levels = VecDeque::from([vec![start]]);
        let mut level = 0;
        let mut acc = seed;
        while let Some(group) = levels.pop_front() {
            let mut next = Vec::with_capacity(group.len() * 2);
            for id in group {
                acc = consult(visit, id, level, acc)?;
                let node = &self.nodes[id];
                next.extend(node.left);
                next.extend(node.right);
            }
            if !next.is_empty() {
                levels.push_back(next);
            }
            level += 1;
        }
        Ok(acc)
    }

    /// Every node in `order`.
    pub fn traverse(&self, order: Order) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.num_nodes());
        let visited = self.walk(order, 0, |id, _, acc| {
            out.extend(id);
            Ok(acc)
        });
        debug_assert!(visited.is_ok());
        debug_assert_eq!(out.len(), self.num_nodes());
        out
    }

    /// Every node's value in `order`. Duplicates folded into a counter appear once.
    pub fn values(&self, order: Order) -> Vec<T>
    where
        T: Clone,
    {
        self.traverse(order)
            .into_iter()
            .map(|id| self.nodes[id].value.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;

    //        1
    //      2   3
    //     4 5 6
    fn sample() -> Tree<i32> {
        let mut tree = Tree::new(Kind::Generic);
        tree.assign_values(&[1, 2, 3, 4, 5, 6]).unwrap();
        tree
    }

    #[test]
    fn orders() {
        let tree = sample();
        assert_eq!(tree.values(Order::Pre), vec![1, 2, 4, 5, 3, 6]);
        assert_eq!(tree.values(Order::In), vec![4, 2, 5, 1, 6, 3]);
        assert_eq!(tree.values(Order::Post), vec![4, 5, 2, 6, 3, 1]);
        assert_eq!(tree.values(Order::Level), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn every_order_visits_every_node_of_a_left_heavy_tree() {
        //          8
        //        4   10
        //      2   6
        //     1 3
        let mut tree = Tree::new(Kind::Search);
        tree.extend([8, 4, 10, 2, 6, 1, 3]);

        for order in [Order::Pre, Order::In, Order::Post, Order::Level] {
            assert_eq!(tree.traverse(order).len(), tree.num_nodes());
        }
        assert_eq!(tree.values(Order::Pre), vec![8, 4, 2, 1, 3, 6, 10]);
        assert_eq!(tree.values(Order::In), vec![1, 2, 3, 4, 6, 8, 10]);
        assert_eq!(tree.values(Order::Post), vec![1, 3, 2, 6, 4, 10, 8]);
        assert_eq!(tree.values(Order::Level), vec![8, 4, 10, 2, 6, 1, 3]);
    }

    #[test]
    fn duplicates_fold_into_one_visit() {
        let tree = Tree::from_values(Kind::Search, [5, 3, 3, 8, 1, 5]).unwrap();
        assert_eq!(tree.values(Order::In), vec![1, 3, 5, 8]);
        assert_eq!(tree.pairs(), vec![(1, 1), (3, 2), (5, 2), (8, 1)]);
    }

    #[test]
    fn empty_tree_returns_seed() {
        let tree: Tree<i32> = Tree::new(Kind::Search);
        let mut calls = 0;
        let result = tree.walk(Order::Pre, 42, |_, _, acc| {
            calls += 1;
            Ok(acc)
        });
        assert_eq!(result, Ok(42));
        assert_eq!(calls, 0);
        assert!(tree.traverse(Order::Level).is_empty());
    }

    #[test]
    fn pre_order_reports_depth() {
        let tree = sample();
        let mut depths = Vec::new();
        tree.walk(Order::Pre, 0, |id, depth, acc| {
            depths.push((*tree.value(id.unwrap()).unwrap(), depth));
            Ok(acc)
        })
        .unwrap();
        assert_eq!(depths, vec![(1, 0), (2, 1), (4, 2), (5, 2), (3, 1), (6, 2)]);
    }

    #[test]
    fn level_order_reports_levels_and_positions() {
        let tree = sample();
        let mut seen = Vec::new();
        let total = tree
            .walk(Order::Level, 0, |id, level, position| {
                seen.push((*tree.value(id.unwrap()).unwrap(), level, position));
                Ok(position + 1)
            })
            .unwrap();
        assert_eq!(total, 6);
        assert_eq!(seen[0], (1, 0, 0));
        assert_eq!(seen[2], (3, 1, 2));
        assert_eq!(seen[5], (6, 2, 5));
    }

    #[test]
    fn in_order_chains_left_results() {
        // Counting with in-order: the left result plus one is the running position.
        let tree = sample();
        let count = tree.walk(Order::In, 0, |_, left, _| Ok(left + 1)).unwrap();
        assert_eq!(count, 6);
    }

    #[test]
    fn post_order_computes_sizes() {
        let tree = sample();
        let size = tree
            .walk(Order::Post, 0, |_, left, right| Ok(left + right + 1))
            .unwrap();
        assert_eq!(size, 6);
    }

    #[test]
    fn halt_twice_aborts() {
        let tree = sample();
        let mut visited = 0;
        let result = tree.walk(Order::Pre, 0, |id, _, acc| match id {
            Some(id) if tree.value(id) == Some(&5) => Err(Halt),
            Some(_) => {
                visited += 1;
                Ok(acc)
            }
            None => Err(Halt),
        });
        assert_eq!(result, Err(TreeError::Aborted));
        // 1, 2 and 4 come before 5 in pre-order.
        assert_eq!(visited, 3);
    }

    #[test]
    fn second_chance_can_resume() {
        let tree = sample();
        let mut retries = 0;
        let result = tree.walk(Order::Level, 0, |id, _, acc| match id {
            Some(id) if tree.value(id) == Some(&3) => Err(Halt),
            Some(_) => Ok(acc + 1),
            None => {
                retries += 1;
                Ok(acc + 100)
            }
        });
        assert_eq!(result, Ok(105));
        assert_eq!(retries, 1);
    }

    #[test]
    fn walk_from_covers_a_subtree() {
        let tree = sample();
        let two = tree.search(&2).unwrap();
        let mut values = Vec::new();
        tree.walk_from(two, Order::Post, 0, |id, _, acc| {
            values.push(*tree.value(id.unwrap()).unwrap());
            Ok(acc)
        })
        .unwrap();
        assert_eq!(values, vec![4, 5, 2]);
    }
}
