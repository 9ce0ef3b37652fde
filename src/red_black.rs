//! Color-balanced (red-black) trees.
//!
//! Structural work is delegated to the search engine and the rotations; this module adds the
//! two fix-up state machines that restore the color invariants afterwards:
//!
//! 1. no red node has a red child;
//! 2. every path from a node down to an empty link passes the same number of black nodes.
//!
//! Red-black trees always keep parent links: the fix-ups walk upwards from where a change
//! happened.

use std::collections::HashMap;

use crate::error::{Result, TreeError};
use crate::log::{debug_log, trace_log};
use crate::node::{Color, NodeId};
use crate::traverse::{Halt, Order};
use crate::tree::{Removal, Side, Tree};

/// Insertion fix-up, started at a freshly inserted red node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertFixup {
    /// The node may be red under a red parent.
    NeedsFixup(NodeId),
    Done,
}

/// Deletion fix-up, started where a black node was unlinked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeleteFixup {
    /// Paths through `node` (possibly an empty link) are one black short. `side` is the slot of
    /// `parent` that `node` occupies.
    DoubleBlack {
        node: Option<NodeId>,
        parent: Option<NodeId>,
        side: Side,
    },
    Done,
}

impl Side {
    fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl<T> Tree<T> {
    /// Empty links are black.
    fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.nodes[id].color)
    }

    fn is_red_link(&self, id: Option<NodeId>) -> bool {
        self.color_of(id) == Color::Red
    }

    fn paint(&mut self, id: NodeId, color: Color) {
        self.nodes[id].color = color;
    }

    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.nodes[id].left,
            Side::Right => self.nodes[id].right,
        }
    }

    /// Rotates `id` down towards `side`, lifting its child on the other side.
    fn rotate_toward(&mut self, id: NodeId, side: Side) -> NodeId {
        match side {
            Side::Left => self.rotate_left(id),
            Side::Right => self.rotate_right(id),
        }
    }

    fn insert_step(&mut self, id: NodeId) -> InsertFixup {
        let Some(parent) = self.nodes[id].parent else {
            self.paint(id, Color::Black);
            return InsertFixup::Done;
        };
        if !self.nodes[parent].is_red() {
            return InsertFixup::Done;
        }
        let Some(grand) = self.nodes[parent].parent else {
            self.paint(parent, Color::Black);
            return InsertFixup::Done;
        };

        let parent_side = self.side_of(grand, parent);
        let uncle = self.child(grand, parent_side.flip());
        if let Some(uncle) = uncle.filter(|&uncle| self.nodes[uncle].is_red()) {
            trace_log!(node = %id, uncle = %uncle, "red uncle, recolor");
            self.paint(parent, Color::Black);
            self.paint(uncle, Color::Black);
            self.paint(grand, Color::Red);
            return InsertFixup::NeedsFixup(grand);
        }

        // A triangle (node and parent on opposite sides) is turned into a line first.
        if self.side_of(parent, id) != parent_side {
            self.rotate_toward(parent, parent_side);
        }
        let top = self.rotate_toward(grand, parent_side.flip());
        trace_log!(node = %id, top = %top, "black uncle, rotate");
        self.paint(top, Color::Black);
        self.paint(grand, Color::Red);
        InsertFixup::Done
    }

    fn delete_step(&mut self, node: Option<NodeId>, parent: Option<NodeId>, side: Side) -> DeleteFixup {
        if let Some(node) = node.filter(|&node| self.nodes[node].is_red()) {
            self.paint(node, Color::Black);
            return DeleteFixup::Done;
        }
        let Some(parent) = parent else {
            return DeleteFixup::Done;
        };
        let sibling = self
            .child(parent, side.flip())
            .expect("double-black node has a sibling");

        if self.nodes[sibling].is_red() {
            trace_log!(parent = %parent, sibling = %sibling, "red sibling");
            self.paint(sibling, Color::Black);
            self.paint(parent, Color::Red);
            self.rotate_toward(parent, side);
            return DeleteFixup::DoubleBlack {
                node,
                parent: Some(parent),
                side,
            };
        }

        let near = self.child(sibling, side);
        let far = self.child(sibling, side.flip());
        if !self.is_red_link(near) && !self.is_red_link(far) {
            self.paint(sibling, Color::Red);
            if self.nodes[parent].is_red() {
                self.paint(parent, Color::Black);
                return DeleteFixup::Done;
            }
            let grand = self.nodes[parent].parent;
            return DeleteFixup::DoubleBlack {
                node: Some(parent),
                parent: grand,
                side: grand.map_or(Side::Left, |grand| self.side_of(grand, parent)),
            };
        }

        let sibling = match near {
            Some(near) if !self.is_red_link(far) => {
                self.paint(near, Color::Black);
                self.paint(sibling, Color::Red);
                self.rotate_toward(sibling, side.flip())
            }
            _ => sibling,
        };
        let far = self
            .child(sibling, side.flip())
            .expect("red far nephew after the near case");
        let parent_color = self.nodes[parent].color;
        self.paint(sibling, parent_color);
        self.paint(parent, Color::Black);
        self.paint(far, Color::Black);
        self.rotate_toward(parent, side);
        DeleteFixup::Done
    }

    /// Drops one occurrence held by `id`, whose parent is `parent`, and repairs the colors when
    /// a black node was unlinked.
    pub(crate) fn rb_remove_found(&mut self, id: NodeId, parent: Option<NodeId>) -> Removal {
        if self.nodes[id].count > 1 {
            self.nodes[id].count -= 1;
            self.size -= 1;
            return Removal::Decremented(id);
        }
        let detached = self.search_detach(id, parent);
        self.size -= 1;
        if detached.color == Color::Black {
            let mut state = DeleteFixup::DoubleBlack {
                node: detached.child,
                parent: detached.parent,
                side: detached.side,
            };
            while let DeleteFixup::DoubleBlack { node, parent, side } = state {
                state = self.delete_step(node, parent, side);
            }
        }
        Removal::Detached {
            anchor: detached.parent.or(detached.child),
        }
    }

    /// Recolors the whole tree from scratch so both color invariants hold, keeping the shape.
    ///
    /// For every node, bottom-up, this computes which black heights the subtree could have with
    /// the node painted black and with it painted red, then walks down choosing a color per node
    /// that fits. The root ends up black. Fails with [`TreeError::Uncolorable`] when the shape
    /// admits no valid coloring, which balanced shapes always do.
    pub fn colorize(&mut self) -> Result<()> {
        // Bit `k` set: the subtree can have black height `k`. A subtree of black height `k` holds
        // at least 2^k - 1 nodes, so the bits never run out.
        const EMPTY: (u128, u128) = (1, 0);
        let mut masks: HashMap<NodeId, (u128, u128)> = HashMap::with_capacity(self.num_nodes());
        let either = |(black, red): (u128, u128)| black | red;

        for id in self.traverse(Order::Post) {
            let node = &self.nodes[id];
            let left = node.left.map_or(EMPTY, |left| masks[&left]);
            let right = node.right.map_or(EMPTY, |right| masks[&right]);
            let as_black = (either(left) & either(right)) << 1;
            let as_red = left.0 & right.0;
            masks.insert(id, (as_black, as_red));
        }

        let Some(root) = self.root else {
            return Ok(());
        };
        let (black, red) = masks[&root];
        let options = if black != 0 { black } else { red };
        if options == 0 {
            return Err(TreeError::Uncolorable);
        }
        let black_height = (u128::BITS - 1 - options.leading_zeros()) as usize;
        debug_log!(nodes = self.num_nodes(), black_height, "colorize");

        let mut pending = vec![(root, black_height)];
        while let Some((id, k)) = pending.pop() {
            let (black, _) = masks[&id];
            let (color, below) = if black & (1u128 << k) != 0 {
                (Color::Black, k - 1)
            } else {
                (Color::Red, k)
            };
            self.paint(id, color);
            let node = &self.nodes[id];
            pending.extend(node.left.map(|left| (left, below)));
            pending.extend(node.right.map(|right| (right, below)));
        }
        // A root that could only be red has black children and may simply turn black.
        self.paint(root, Color::Black);
        Ok(())
    }

    /// Whether some red node has a red child.
    pub fn red_violation(&self) -> bool {
        self.walk(Order::Pre, 0, |id, _, acc| {
            let Some(id) = id else {
                return Err(Halt);
            };
            let node = &self.nodes[id];
            if node.is_red() && (self.is_red_link(node.left) || self.is_red_link(node.right)) {
                Err(Halt)
            } else {
                Ok(acc)
            }
        })
        .is_err()
    }

    /// Whether two paths from some node down to empty links pass different numbers of black
    /// nodes.
    pub fn black_violation(&self) -> bool {
        self.black_height().is_none()
    }

    /// Black nodes on every path from the root down to an empty link, `None` when paths
    /// disagree.
    pub fn black_height(&self) -> Option<usize> {
        self.walk(Order::Post, 0, |id, left, right| match id {
            Some(id) if left == right => Ok(left + isize::from(!self.nodes[id].is_red())),
            _ => Err(Halt),
        })
        .ok()
        .map(|height| height as usize)
    }
}

impl<T: Ord> Tree<T> {
    /// Ordered insert followed by the insertion fix-up.
    pub(crate) fn rb_insert(&mut self, value: T) -> NodeId {
        let placement = self.search_insert(value);
        if placement.fresh {
            self.paint(placement.id, Color::Red);
            let mut state = InsertFixup::NeedsFixup(placement.id);
            while let InsertFixup::NeedsFixup(id) = state {
                state = self.insert_step(id);
            }
        }
        placement.id
    }

    pub(crate) fn rb_remove(&mut self, value: &T) -> Removal {
        let descent = self.descend(|probe| value.cmp(probe));
        match descent.found {
            Some(id) => self.rb_remove_found(id, descent.parent),
            None => Removal::NotFound,
        }
    }

    /// Search order holds and neither color invariant is broken.
    pub fn is_valid(&self) -> bool {
        self.is_search_ordered() && !self.red_violation() && !self.black_violation()
    }
}
