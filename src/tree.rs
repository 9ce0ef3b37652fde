//! The tree value shared by every kind: factory, link bookkeeping, per-kind dispatch of the
//! mutating operations, cloning, assignment between kinds and structural equality.
//!
//! # Examples
//!
//! ```
//! use bintree::{Kind, Order, Tree};
//!
//! let mut tree = Tree::create(5, Kind::Search);
//! for value in [3, 3, 8, 1, 5] {
//!     tree.insert(value);
//! }
//!
//! // Duplicates fold into counters.
//! assert_eq!(tree.num_nodes(), 4);
//! assert_eq!(tree.size(), 6);
//! assert_eq!(tree.values(Order::In), vec![1, 3, 5, 8]);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::{Result, TreeError};
use crate::kind::{Kind, UnlinkedKind};
use crate::log::debug_log;
use crate::node::{Arena, Linkage, Node, NodeId};
use crate::traverse::{Halt, Order};
use crate::util::{dedup_with_counts, sort_and_merge};

/// Which child slot of a parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// What a removal did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Nothing matched, the tree is unchanged.
    NotFound,
    /// The value had several occurrences; one was dropped from the node's counter.
    Decremented(NodeId),
    /// A node left the tree. `anchor` is the parent of the node that was physically unlinked, or
    /// the new root when the unlinked node was the root. It is `None` once the tree is empty.
    Detached {
        /// See [`Removal::Detached`].
        anchor: Option<NodeId>,
    },
}

impl Removal {
    /// `true` unless nothing matched.
    pub fn is_found(&self) -> bool {
        !matches!(self, Removal::NotFound)
    }

    /// The node a caller can continue from, if any.
    pub fn anchor(&self) -> Option<NodeId> {
        match self {
            Removal::NotFound => None,
            Removal::Decremented(id) => Some(*id),
            Removal::Detached { anchor } => *anchor,
        }
    }
}

/// A binary tree of one [`Kind`]. All kinds share this representation; the kind decides which
/// invariant the mutating operations maintain.
#[derive(Debug)]
pub struct Tree<T> {
    pub(crate) nodes: Arena<T>,
    pub(crate) root: Option<NodeId>,
    pub(crate) kind: Kind,
    pub(crate) linkage: Linkage,
    /// Occurrences stored, duplicates included.
    pub(crate) size: usize,
}

impl<T> Tree<T> {
    fn empty(kind: Kind, linkage: Linkage) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            kind,
            linkage,
            size: 0,
        }
    }

    /// An empty, parent-linked tree of the given kind.
    pub fn new(kind: Kind) -> Self {
        Self::empty(kind, Linkage::Parent)
    }

    /// An empty tree that keeps child links only.
    pub fn new_unlinked(kind: UnlinkedKind) -> Self {
        Self::empty(kind.into(), Linkage::Children)
    }

    /// A parent-linked tree of the given kind holding exactly `value`.
    pub fn create(value: T, kind: Kind) -> Self {
        let mut tree = Self::new(kind);
        tree.plant(value);
        tree
    }

    /// A child-only tree of the given kind holding exactly `value`.
    pub fn create_unlinked(value: T, kind: UnlinkedKind) -> Self {
        let mut tree = Self::new_unlinked(kind);
        tree.plant(value);
        tree
    }

    /// Shorthand for `Tree::create(value, Kind::Generic)`.
    pub fn generic_tree(value: T) -> Self {
        Self::create(value, Kind::Generic)
    }

    /// Shorthand for `Tree::create(value, Kind::Search)`.
    pub fn search_tree(value: T) -> Self {
        Self::create(value, Kind::Search)
    }

    /// Shorthand for `Tree::create(value, Kind::MinHeap)`.
    pub fn min_heap_tree(value: T) -> Self {
        Self::create(value, Kind::MinHeap)
    }

    /// Shorthand for `Tree::create(value, Kind::MaxHeap)`.
    pub fn max_heap_tree(value: T) -> Self {
        Self::create(value, Kind::MaxHeap)
    }

    /// Shorthand for `Tree::create(value, Kind::Avl)`.
    pub fn avl_tree(value: T) -> Self {
        Self::create(value, Kind::Avl)
    }

    /// Shorthand for `Tree::create(value, Kind::RedBlack)`.
    pub fn red_black_tree(value: T) -> Self {
        Self::create(value, Kind::RedBlack)
    }

    fn plant(&mut self, value: T) {
        let root = self.spawn(value);
        self.set_root(Some(root));
        self.size = 1;
    }

    /// The one place nodes are allocated.
    pub(crate) fn spawn(&mut self, value: T) -> NodeId {
        self.nodes.alloc(Node::new(value))
    }

    /// The tree's kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether the tree keeps parent links.
    pub fn linkage(&self) -> Linkage {
        self.linkage
    }

    /// The root node, `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The node behind `id`, `None` if the id is stale.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id)
    }

    /// The value behind `id`, `None` if the id is stale.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(Node::value)
    }

    /// `true` when the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Occurrences stored, duplicates included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Nodes stored. Smaller than [`size`](Self::size) when duplicates were folded.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.size = 0;
    }

    /// The parent of `id`. Parent-linked trees read the link; child-only trees search for the
    /// node holding `id` in a child slot.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        match self.linkage {
            Linkage::Parent => self.nodes.get(id).and_then(Node::parent),
            Linkage::Children => self.find_first(|_, node| {
                node.left == Some(id) || node.right == Some(id)
            }),
        }
    }

    /// First node in pre-order accepted by `pred`.
    pub(crate) fn find_first<P>(&self, mut pred: P) -> Option<NodeId>
    where
        P: FnMut(NodeId, &Node<T>) -> bool,
    {
        let mut found = None;
        let _ = self.walk(Order::Pre, 0, |id, _, acc| match id {
            Some(id) if pred(id, &self.nodes[id]) => {
                found = Some(id);
                Err(Halt)
            }
            Some(_) => Ok(acc),
            None => Err(Halt),
        });
        found
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
        if let Some(root) = root {
            self.nodes[root].parent = None;
        }
    }

    pub(crate) fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.nodes[parent].left = child;
        self.adopt(parent, child);
    }

    pub(crate) fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.nodes[parent].right = child;
        self.adopt(parent, child);
    }

    fn adopt(&mut self, parent: NodeId, child: Option<NodeId>) {
        if let (Linkage::Parent, Some(child)) = (self.linkage, child) {
            self.nodes[child].parent = Some(parent);
        }
    }

    /// Hangs `child` under `parent` on `side`, or makes it the root when there is no parent.
    pub(crate) fn attach(&mut self, parent: Option<NodeId>, side: Side, child: NodeId) {
        match (parent, side) {
            (None, _) => self.set_root(Some(child)),
            (Some(parent), Side::Left) => self.set_left(parent, Some(child)),
            (Some(parent), Side::Right) => self.set_right(parent, Some(child)),
        }
    }

    /// Puts `new` in the slot that currently holds `old`.
    pub(crate) fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.set_root(new),
            Some(parent) if self.nodes[parent].left == Some(old) => self.set_left(parent, new),
            Some(parent) => self.set_right(parent, new),
        }
    }

    pub(crate) fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        if self.nodes[parent].left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        id
    }

    /// Height cached on `id`, 0 for an empty link.
    pub(crate) fn cached_height(&self, id: Option<NodeId>) -> usize {
        id.map_or(0, |id| self.nodes[id].height)
    }

    /// Adjusts the height of `id` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self, id: NodeId) {
        let left_height = self.cached_height(self.nodes[id].left);
        let right_height = self.cached_height(self.nodes[id].right);
        self.nodes[id].height = left_height.max(right_height) + 1;
    }

    /// Recomputes every cached height bottom-up.
    pub(crate) fn refresh_heights(&mut self) {
        for id in self.traverse(Order::Post) {
            self.fix_height(id);
        }
    }

    /// Recomputes the cached heights of `id` and its ancestors, deepest first.
    pub(crate) fn refresh_heights_above(&mut self, id: Option<NodeId>) {
        let Some(id) = id else {
            return;
        };
        for id in self.path_to(id).into_iter().rev() {
            self.fix_height(id);
        }
    }

    /// The ids from the root down to `target`, both ends included.
    pub(crate) fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        let mut path = vec![target];
        match self.linkage {
            Linkage::Parent => {
                let mut id = target;
                while let Some(parent) = self.nodes[id].parent {
                    path.push(parent);
                    id = parent;
                }
            }
            Linkage::Children => {
                let mut parents = HashMap::new();
                let mut queue: VecDeque<NodeId> = self.root.into_iter().collect();
                while let Some(id) = queue.pop_front() {
                    if id == target {
                        break;
                    }
                    let node = &self.nodes[id];
                    for child in [node.left, node.right].into_iter().flatten() {
                        parents.insert(child, id);
                        queue.push_back(child);
                    }
                }
                let mut id = target;
                while let Some(&parent) = parents.get(&id) {
                    path.push(parent);
                    id = parent;
                }
            }
        }
        path.reverse();
        path
    }

    /// The first open child slot in level order, left before right.
    fn first_open_slot(&self) -> Option<(NodeId, Side)> {
        let mut queue = VecDeque::from([self.root?]);
        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id];
            match (node.left, node.right) {
                (None, _) => return Some((id, Side::Left)),
                (Some(_), None) => return Some((id, Side::Right)),
                (Some(left), Some(right)) => {
                    queue.push_back(left);
                    queue.push_back(right);
                }
            }
        }
        None
    }

    /// The deepest, right-most node and its parent.
    pub(crate) fn last_in_level_order(&self) -> Option<(NodeId, Option<NodeId>)> {
        let mut queue = VecDeque::from([(self.root?, None)]);
        let mut last = None;
        while let Some((id, parent)) = queue.pop_front() {
            let node = &self.nodes[id];
            queue.extend(node.left.map(|left| (left, Some(id))));
            queue.extend(node.right.map(|right| (right, Some(id))));
            last = Some((id, parent));
        }
        last
    }

    /// Places `value` in the first open slot in level order, ignoring any ordering. This is the
    /// generic and heap insert; it keeps a complete tree complete. Calling it on an ordered kind
    /// bypasses that kind's invariant.
    pub fn insert_level_order(&mut self, value: T) -> NodeId {
        let id = self.spawn(value);
        let slot = self.first_open_slot();
        match slot {
            None => self.set_root(Some(id)),
            Some((parent, side)) => self.attach(Some(parent), side, id),
        }
        self.size += 1;
        if self.kind.caches_height() {
            self.refresh_heights_above(slot.map(|(parent, _)| parent));
        }
        id
    }

    /// Generic removal of one node: the left child takes its slot and the removed node's right
    /// subtree moves to the right end of that left child's right spine, so the in-order sequence
    /// of the remaining nodes is unchanged. Without a left child the right child moves up.
    pub(crate) fn generic_remove_node(&mut self, id: NodeId) -> Removal {
        let Some((count, left, right)) = self.nodes.get(id).map(|n| (n.count, n.left, n.right)) else {
            return Removal::NotFound;
        };
        if count > 1 {
            self.nodes[id].count -= 1;
            self.size -= 1;
            return Removal::Decremented(id);
        }
        let parent = self.parent(id);
        let (replacement, lowest_changed) = match (left, right) {
            (Some(left), Some(right)) => {
                let tail = self.rightmost(left);
                self.set_right(tail, Some(right));
                (Some(left), Some(tail))
            }
            (Some(left), None) => (Some(left), parent),
            (None, right) => (right, parent),
        };
        self.replace_child(parent, id, replacement);
        self.nodes.release(id);
        self.size -= 1;
        if self.kind.caches_height() {
            self.refresh_heights_above(lowest_changed);
        }
        Removal::Detached {
            anchor: parent.or(replacement),
        }
    }

    /// Drops one occurrence held by a leaf found in level order.
    pub(crate) fn remove_leaf(&mut self, id: NodeId, parent: Option<NodeId>) -> Removal {
        if self.nodes[id].count > 1 {
            self.nodes[id].count -= 1;
            self.size -= 1;
            return Removal::Decremented(id);
        }
        self.replace_child(parent, id, None);
        self.nodes.release(id);
        self.size -= 1;
        if self.kind.caches_height() {
            self.refresh_heights_above(parent);
        }
        Removal::Detached {
            anchor: parent,
        }
    }

    /// Copies the subtree under `src` into `dst`, hanging it below `parent`.
    fn copy_into(&self, src: NodeId, dst: &mut Arena<T>, linkage: Linkage, parent: Option<NodeId>) -> NodeId
    where
        T: Clone,
    {
        let node = &self.nodes[src];
        let id = dst.alloc(Node {
            value: node.value.clone(),
            left: None,
            right: None,
            parent: match linkage {
                Linkage::Parent => parent,
                Linkage::Children => None,
            },
            height: node.height,
            count: node.count,
            color: node.color,
        });
        let left = node.left.map(|left| self.copy_into(left, dst, linkage, Some(id)));
        let right = node
            .right
            .map(|right| self.copy_into(right, dst, linkage, Some(id)));
        dst[id].left = left;
        dst[id].right = right;
        id
    }

    /// Replaces this tree's nodes with a copy of `other`'s shape, keeping this tree's kind.
    fn copy_shape_from(&mut self, other: &Tree<T>)
    where
        T: Clone,
    {
        let mut nodes = Arena::with_capacity(other.num_nodes());
        self.root = other
            .root
            .map(|root| other.copy_into(root, &mut nodes, self.linkage, None));
        self.nodes = nodes;
        self.size = other.size;
        if self.kind.caches_height() {
            self.refresh_heights();
        }
    }

    /// Replaces this tree's nodes with a complete tree holding `values` in level order.
    pub(crate) fn build_level_order(&mut self, values: Vec<T>) {
        self.clear();
        self.nodes = Arena::with_capacity(values.len());
        let ids: Vec<NodeId> = values.into_iter().map(|value| self.spawn(value)).collect();
        for (i, &id) in ids.iter().enumerate() {
            let left = ids.get(2 * i + 1).copied();
            let right = ids.get(2 * i + 2).copied();
            self.set_left(id, left);
            self.set_right(id, right);
        }
        self.set_root(ids.first().copied());
        self.size = ids.len();
        self.refresh_heights();
    }

    /// `(value, count)` for every node, in order.
    pub fn pairs(&self) -> Vec<(T, usize)>
    where
        T: Clone,
    {
        self.traverse(Order::In)
            .into_iter()
            .map(|id| (self.nodes[id].value.clone(), self.nodes[id].count))
            .collect()
    }

    /// Every stored occurrence in level order, duplicates repeated.
    pub fn occurrences(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.size);
        for id in self.traverse(Order::Level) {
            let node = &self.nodes[id];
            out.extend(std::iter::repeat(node.value.clone()).take(node.count));
        }
        out
    }

    /// Whether the subtrees under `a` (in `lhs`) and `b` (in `rhs`) have the same shape and the
    /// same values at corresponding positions.
    pub(crate) fn subtree_eq(lhs: &Tree<T>, a: Option<NodeId>, rhs: &Tree<T>, b: Option<NodeId>) -> bool
    where
        T: PartialEq,
    {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                let (x, y) = (&lhs.nodes[a], &rhs.nodes[b]);
                x.value == y.value
                    && Self::subtree_eq(lhs, x.left, rhs, y.left)
                    && Self::subtree_eq(lhs, x.right, rhs, y.right)
            }
            _ => false,
        }
    }
}

impl<T: Ord> Tree<T> {
    /// Finds a node holding `value`. Ordered kinds descend by comparison; the others return the
    /// first match in pre-order.
    pub fn search(&self, value: &T) -> Option<NodeId> {
        if self.kind.is_ordered() {
            self.descend(|probe| value.cmp(probe)).found
        } else {
            self.find_first(|_, node| node.value == *value)
        }
    }

    /// The parent of the node [`search`](Self::search) finds. `None` when there is no match or
    /// the match is the root.
    pub fn find_parent(&self, value: &T) -> Option<NodeId> {
        if self.kind.is_ordered() {
            let descent = self.descend(|probe| value.cmp(probe));
            descent.found.and(descent.parent)
        } else {
            self.search(value).and_then(|id| self.parent(id))
        }
    }

    /// Whether any node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Occurrences of `value` held by the node [`search`](Self::search) finds.
    pub fn count_of(&self, value: &T) -> usize {
        self.search(value).map_or(0, |id| self.nodes[id].count)
    }

    /// Inserts `value` according to the tree's kind and returns the node that holds it.
    ///
    /// * generic: first open slot in level order;
    /// * heaps: first open slot, then sifted up;
    /// * search: ordered descent, equal values bump the node's counter;
    /// * AVL: as search, then rebalanced on the way back up;
    /// * red-black: as search, then recolored and rotated.
    pub fn insert(&mut self, value: T) -> NodeId {
        match self.kind {
            Kind::Generic => self.insert_level_order(value),
            Kind::MinHeap | Kind::MaxHeap => self.heap_insert(value),
            Kind::Search => self.search_insert(value).id,
            Kind::Avl => self.avl_insert(value),
            Kind::RedBlack => self.rb_insert(value),
        }
    }

    /// Removes one occurrence of `value`.
    ///
    /// Ordered kinds drop a duplicate from the node's counter first and only unlink the node when
    /// the last occurrence goes. When a node with two children is unlinked, its value is swapped
    /// with its in-order successor and the successor's position is removed instead.
    pub fn remove(&mut self, value: &T) -> Removal {
        match self.kind {
            Kind::Generic => match self.search(value) {
                Some(id) => self.generic_remove_node(id),
                None => Removal::NotFound,
            },
            Kind::MinHeap | Kind::MaxHeap => self.heap_remove(value),
            Kind::Search => self.search_remove(value),
            Kind::Avl => self.avl_remove(value),
            Kind::RedBlack => self.rb_remove(value),
        }
    }

    /// Removes one occurrence held by the node `id`. Stale ids report [`Removal::NotFound`].
    pub fn remove_node(&mut self, id: NodeId) -> Removal
    where
        T: Clone,
    {
        if self.nodes.get(id).is_none() {
            return Removal::NotFound;
        }
        match self.kind {
            Kind::Generic => self.generic_remove_node(id),
            Kind::MinHeap | Kind::MaxHeap => self.heap_remove_node(id),
            Kind::Search => {
                let descent = self.descend(|probe| self.nodes[id].value.cmp(probe));
                self.search_remove_found(id, descent.parent)
            }
            Kind::Avl => {
                let value = self.nodes[id].value.clone();
                self.avl_remove(&value)
            }
            Kind::RedBlack => {
                let parent = self.nodes[id].parent;
                self.rb_remove_found(id, parent)
            }
        }
    }

    /// Removes one occurrence from the deepest, right-most node.
    ///
    /// AVL trees refuse: dropping an arbitrary leaf can break the height invariant, so callers
    /// must name what to remove.
    pub fn remove_last(&mut self) -> Result<Removal> {
        let Some((id, parent)) = self.last_in_level_order() else {
            return Ok(Removal::NotFound);
        };
        match self.kind {
            Kind::Avl => Err(TreeError::UnspecifiedRemoval(Kind::Avl)),
            Kind::RedBlack => Ok(self.rb_remove_found(id, parent)),
            _ => Ok(self.remove_leaf(id, parent)),
        }
    }

    /// Whether `sub` appears, shape and values unchanged, as the full subtree of some node of this
    /// tree. An empty `sub` is part of every tree.
    pub fn has_subtree(&self, sub: &Tree<T>) -> bool {
        let Some(sub_root) = sub.root else {
            return true;
        };
        let target = &sub.nodes[sub_root].value;
        if self.kind.is_ordered() {
            return self
                .search(target)
                .map_or(false, |id| Self::subtree_eq(self, Some(id), sub, Some(sub_root)));
        }
        self.find_first(|id, node| {
            node.value == *target && Self::subtree_eq(self, Some(id), sub, Some(sub_root))
        })
        .is_some()
    }

    /// Whether this tree appears unchanged as the full subtree of some node of `host`.
    pub fn is_subtree(&self, host: &Tree<T>) -> bool {
        host.has_subtree(self)
    }
}

impl<T: Ord + Clone> Tree<T> {
    /// A tree of `kind` rebuilt from `values`, as [`assign_iter`](Self::assign_iter) would.
    pub fn from_values<I>(kind: Kind, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new(kind);
        tree.assign_iter(values)?;
        Ok(tree)
    }

    /// Makes this tree hold `other`'s contents while keeping its own kind and linkage.
    ///
    /// Trees of the same kind, and generic targets, copy `other`'s shape node for node. Ordered
    /// targets reduce `other` to its sorted values with counts and rebuild balanced (red-black
    /// trees are colorized afterwards). Heap targets rebuild from every occurrence and heapify.
    pub fn assign_from(&mut self, other: &Tree<T>) -> Result<()> {
        debug_log!(from = %other.kind, to = %self.kind, nodes = other.num_nodes(), "assign");
        if self.kind == other.kind || self.kind == Kind::Generic {
            self.copy_shape_from(other);
            return Ok(());
        }
        if self.kind.is_heap() {
            self.rebuild_heap(other.occurrences());
            return Ok(());
        }
        self.rebuild_ordered(sort_and_merge(other.pairs()))
    }

    /// Makes this tree hold `values`. Generic trees become complete in the given level order;
    /// ordered trees are rebuilt balanced from the sorted, de-duplicated values; heaps are filled
    /// in level order and heapified.
    pub fn assign_values(&mut self, values: &[T]) -> Result<()> {
        self.assign_iter(values.iter().cloned())
    }

    /// [`assign_values`](Self::assign_values) for any list of values.
    pub fn assign_iter<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        match self.kind {
            Kind::Generic => {
                self.build_level_order(values);
                Ok(())
            }
            Kind::MinHeap | Kind::MaxHeap => {
                self.rebuild_heap(values);
                Ok(())
            }
            Kind::Search | Kind::Avl | Kind::RedBlack => {
                values.sort();
                self.rebuild_ordered(dedup_with_counts(values))
            }
        }
    }

    fn rebuild_ordered(&mut self, pairs: Vec<(T, usize)>) -> Result<()> {
        self.rebuild_sorted(pairs);
        if self.kind == Kind::RedBlack {
            self.colorize()?;
        }
        Ok(())
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        let mut nodes = Arena::with_capacity(self.num_nodes());
        let root = self
            .root
            .map(|root| self.copy_into(root, &mut nodes, self.linkage, None));
        Self {
            nodes,
            root,
            kind: self.kind,
            linkage: self.linkage,
            size: self.size,
        }
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::subtree_eq(self, self.root, other, other.root)
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
