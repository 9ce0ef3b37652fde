//! Human-readable renderings. These only observe the tree.

use std::fmt::{self, Display, Write};

use crate::kind::Kind;
use crate::node::{Node, NodeId};
use crate::traverse::{Halt, Order};
use crate::tree::Tree;

impl<T: Display> Tree<T> {
    fn write_node<W: Write>(&self, out: &mut W, node: &Node<T>) -> fmt::Result {
        write!(out, "{}", node.value)?;
        if node.count > 1 {
            write!(out, " x{}", node.count)?;
        }
        if self.kind == Kind::RedBlack && node.is_red() {
            out.write_str(" (R)")?;
        }
        Ok(())
    }

    /// Runs `line` for every node in `order`, turning a failed write into [`fmt::Error`].
    fn write_each<F>(&self, order: Order, mut line: F) -> fmt::Result
    where
        F: FnMut(NodeId, isize) -> fmt::Result,
    {
        self.walk(order, 0, |id, context, acc| match id {
            Some(id) => line(id, context).map(|()| acc + 1).map_err(|_| Halt),
            None => Err(Halt),
        })
        .map(|_| ())
        .map_err(|_| fmt::Error)
    }

    /// Writes the nodes in `order` on one line, separated by spaces.
    ///
    /// ```
    /// use bintree::{Kind, Order, Tree};
    ///
    /// let tree = Tree::from_values(Kind::Search, [2, 1, 3, 3]).unwrap();
    /// let mut out = String::new();
    /// tree.trace(Order::Pre, &mut out).unwrap();
    /// assert_eq!(out, "2 1 3 x2");
    /// ```
    pub fn trace<W: Write>(&self, order: Order, out: &mut W) -> fmt::Result {
        let mut first = true;
        self.write_each(order, |id, _| {
            if !std::mem::take(&mut first) {
                out.write_char(' ')?;
            }
            self.write_node(&mut *out, &self.nodes[id])
        })
    }

    /// Writes one line per node in pre-order, indented two spaces per level.
    pub fn render<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_each(Order::Pre, |id, depth| {
            write!(out, "{:indent$}", "", indent = 2 * depth as usize)?;
            self.write_node(&mut *out, &self.nodes[id])?;
            out.write_char('\n')
        })
    }
}

/// In-order values in brackets, e.g. `[1 2 3]`.
impl<T: Display> Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        self.trace(Order::In, f)?;
        f.write_char(']')
    }
}
