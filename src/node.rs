//! The node substrate every tree kind is built on: a value, two child links, an optional parent
//! link and the per-kind bookkeeping (height, duplicate count, color). Nodes live in an [`Arena`]
//! and refer to each other by [`NodeId`].

use std::fmt;
use std::ops::{Index, IndexMut};

/// Stable handle to a node inside one tree.
///
/// Ids are only meaningful for the tree that produced them. Removing a node frees its slot for
/// reuse, so an id kept across a structural edit may dangle or name a different node. Two-child
/// removals also move values between nodes, so an id does not follow a value either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The arena slot this id points at.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node color, only meaningful in red-black trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red node.
    Red,
    /// Black node. Empty links count as black.
    Black,
}

/// Whether a tree keeps parent back-references next to its child links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Linkage {
    /// Left and right links only.
    Children,
    /// Left, right and parent links.
    Parent,
}

/// A single tree node.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1. Only kept current by kinds that cache heights.
    pub(crate) height: usize,
    /// Occurrences of `value`. Always 1 for kinds that store duplicates as separate nodes.
    pub(crate) count: usize,
    pub(crate) color: Color,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent: None,
            height: 1,
            count: 1,
            color: Color::Black,
        }
    }

    /// The stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Left child.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Parent, always `None` in child-only trees.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Cached subtree height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of occurrences of the value held by this node.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Node color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// `true` for red nodes.
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// Number of children, 0 to 2.
    pub fn degree(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// `true` when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Slot storage for the nodes of one tree. Freed slots are recycled by later allocations.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Frees the slot and hands the node back. The caller must already have unlinked it.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<T> {
        let node = self.slots[id.0].take().expect("releasing a live node");
        self.free.push(id.0);
        self.len -= 1;
        node
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }

    /// Swaps the values and duplicate counts of two nodes, leaving links and colors in place.
    pub(crate) fn swap_payload(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.slots.split_at_mut(hi);
        let first = head[lo].as_mut().expect("swapping a live node");
        let second = tail[0].as_mut().expect("swapping a live node");
        std::mem::swap(&mut first.value, &mut second.value);
        std::mem::swap(&mut first.count, &mut second.count);
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        self.get(id).expect("NodeId refers to a live node")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .expect("NodeId refers to a live node")
    }
}
