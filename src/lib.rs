//! This crate exposes one binary tree type that can take six shapes
//! ("kinds"), mostly for educational purposes.
//!
//! ## Binary Tree Kinds
//!
//! Every kind is stored the same way: `Node`s live in an arena owned by the
//! `Tree` and point at each other through `NodeId`s. A `Node` stores a value,
//! its left and right children and, when the tree is parent-linked, its
//! parent. What differs between kinds is the invariant the mutating
//! operations maintain:
//!
//! * **generic**: none. Inserts fill the first open slot in level order, so a
//!   tree built only by inserting stays complete.
//! * **min-heap / max-heap**: complete, and no child is smaller (larger) than
//!   its parent.
//! * **search**: for every `Node`, all the `Node`s in its left subtree have a
//!   value less than its own value, and all the `Node`s in its right subtree
//!   have a value greater than its own value. Equal values are counted on the
//!   existing `Node` instead of creating a new one.
//! * **AVL**: a search tree whose subtree heights differ by at most one at
//!   every `Node`.
//! * **red-black**: a search tree whose `Node`s are colored so that no red
//!   `Node` has a red child and every path down to an empty link passes the
//!   same number of black `Node`s. Red-black trees need parent links, so they
//!   cannot be requested through [`UnlinkedKind`].
//!
//! Searching a balanced tree takes `O(lg N)` where `N` is the number of nodes.
//! All kinds share one traversal engine ([`Tree::walk`]), one set of shape
//! predicates, cloning, structural equality and assignment between kinds.
//!
//! ```
//! use bintree::{Kind, Order, Tree};
//!
//! let mut tree = Tree::new(Kind::Avl);
//! tree.extend([2, 3, 5, 7, 11, 13, 17]);
//! assert!(tree.is_avl());
//! assert!(tree.is_perfect());
//!
//! let mut heap = Tree::new(Kind::MaxHeap);
//! heap.assign_from(&tree).unwrap();
//! assert_eq!(heap.peek(), Some(&17));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod avl;
mod error;
mod heap;
mod kind;
mod log;
mod node;
mod print;
mod red_black;
mod search;
mod shape;
mod traverse;
mod tree;
mod util;


pub use error::{Result, TreeError};
pub use kind::{Kind, UnlinkedKind};
pub use node::{Color, Linkage, Node, NodeId};
pub use traverse::{Halt, Order, Visit};
pub use tree::{Removal, Tree};
