//! Min- and max-heaps on the shared node arena.
//!
//! A heap keeps its shape complete through the level-order insert and keeps every parent on
//! the "top" side of its children. Values move between nodes by swapping payloads; the links
//! never change during a sift.

use crate::kind::Kind;
use crate::log::trace_log;
use crate::node::NodeId;
use crate::traverse::Order;
use crate::tree::{Removal, Tree};

impl<T> Tree<T> {
    /// The root's value: the smallest of a min-heap, the largest of a max-heap.
    pub fn peek(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].value)
    }
}

impl<T: Ord> Tree<T> {
    /// Whether `a` belongs above `b` in this heap.
    fn outranks(&self, a: NodeId, b: NodeId) -> bool {
        let (a, b) = (&self.nodes[a].value, &self.nodes[b].value);
        match self.kind {
            Kind::MaxHeap => a > b,
            _ => a < b,
        }
    }

    /// Moves the value at `id` up while it outranks its parent. Returns where it stopped.
    fn sift_up(&mut self, mut id: NodeId) -> NodeId {
        while let Some(parent) = self.parent(id) {
            if !self.outranks(id, parent) {
                break;
            }
            self.nodes.swap_payload(id, parent);
            id = parent;
        }
        id
    }

    /// Moves the value at `id` down while a child outranks it. Returns where it stopped.
    fn sift_down(&mut self, mut id: NodeId) -> NodeId {
        loop {
            let node = &self.nodes[id];
            let top = match (node.left, node.right) {
                (Some(left), Some(right)) if self.outranks(right, left) => right,
                (Some(left), _) => left,
                (None, Some(right)) => right,
                (None, None) => return id,
            };
            if !self.outranks(top, id) {
                return id;
            }
            self.nodes.swap_payload(id, top);
            id = top;
        }
    }

    /// Restores heap order over the whole tree, bottom-up.
    fn heapify(&mut self) {
        for id in self.traverse(Order::Level).into_iter().rev() {
            self.sift_down(id);
        }
    }

    /// Replaces every node with a complete tree holding `values`, then heapifies it.
    pub(crate) fn rebuild_heap(&mut self, values: Vec<T>) {
        self.build_level_order(values);
        self.heapify();
    }

    /// Level-order insert followed by a sift-up. Returns the node the value settled in.
    pub(crate) fn heap_insert(&mut self, value: T) -> NodeId {
        let id = self.insert_level_order(value);
        self.sift_up(id)
    }

    pub(crate) fn heap_remove(&mut self, value: &T) -> Removal {
        match self.search(value) {
            Some(id) => self.heap_remove_node(id),
            None => Removal::NotFound,
        }
    }

    /// Moves the last value in level order into `id`, drops the last node and sifts the moved
    /// value whichever way it needs to go.
    pub(crate) fn heap_remove_node(&mut self, id: NodeId) -> Removal {
        if self.nodes[id].count > 1 {
            self.nodes[id].count -= 1;
            self.size -= 1;
            return Removal::Decremented(id);
        }
        let Some((last, last_parent)) = self.last_in_level_order() else {
            return Removal::NotFound;
        };
        if last == id {
            return self.remove_leaf(id, last_parent);
        }
        trace_log!(node = %id, last = %last, "heap remove");
        self.nodes.swap_payload(id, last);
        let removal = self.remove_leaf(last, last_parent);
        if self.sift_up(id) == id {
            self.sift_down(id);
        }
        removal
    }
}
