//! The closed set of tree kinds and the link configuration they may be built with.

use std::fmt;
use std::str::FromStr;

use crate::error::TreeError;

/// Which invariant a tree maintains. Every node of a tree shares the tree's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Plain binary tree, no ordering.
    Generic,
    /// Binary search tree with duplicate counters.
    Search,
    /// Complete tree where every parent is `<=` its children.
    MinHeap,
    /// Complete tree where every parent is `>=` its children.
    MaxHeap,
    /// Height-balanced search tree.
    Avl,
    /// Color-balanced search tree. Only offered for parent-linked trees.
    RedBlack,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 6] = [
        Kind::Generic,
        Kind::Search,
        Kind::MinHeap,
        Kind::MaxHeap,
        Kind::Avl,
        Kind::RedBlack,
    ];

    /// Kinds that keep the search-order invariant.
    pub fn is_ordered(self) -> bool {
        matches!(self, Kind::Search | Kind::Avl | Kind::RedBlack)
    }

    /// Min- or max-heap.
    pub fn is_heap(self) -> bool {
        matches!(self, Kind::MinHeap | Kind::MaxHeap)
    }

    /// Kinds whose nodes keep an up to date subtree height.
    pub fn caches_height(self) -> bool {
        matches!(
            self,
            Kind::Generic | Kind::MinHeap | Kind::MaxHeap | Kind::Avl
        )
    }

    /// Kinds that fold equal values into one node's counter instead of adding nodes.
    pub fn counts_duplicates(self) -> bool {
        self.is_ordered()
    }

    /// Whether the kind can only be built with parent links.
    pub fn requires_parent_links(self) -> bool {
        self == Kind::RedBlack
    }

    fn name(self) -> &'static str {
        match self {
            Kind::Generic => "generic",
            Kind::Search => "search",
            Kind::MinHeap => "min-heap",
            Kind::MaxHeap => "max-heap",
            Kind::Avl => "avl",
            Kind::RedBlack => "red-black",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" | "binary" => Ok(Kind::Generic),
            "search" | "bst" => Ok(Kind::Search),
            "min-heap" | "minheap" => Ok(Kind::MinHeap),
            "max-heap" | "maxheap" => Ok(Kind::MaxHeap),
            "avl" => Ok(Kind::Avl),
            "red-black" | "redblack" | "rb" => Ok(Kind::RedBlack),
            _ => Err(TreeError::UnknownKind(s.to_owned())),
        }
    }
}

/// The kinds a child-only tree can be built as. Red-black trees need parent links and are absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnlinkedKind {
    /// See [`Kind::Generic`].
    Generic,
    /// See [`Kind::Search`].
    Search,
    /// See [`Kind::MinHeap`].
    MinHeap,
    /// See [`Kind::MaxHeap`].
    MaxHeap,
    /// See [`Kind::Avl`].
    Avl,
}

impl From<UnlinkedKind> for Kind {
    fn from(kind: UnlinkedKind) -> Self {
        match kind {
            UnlinkedKind::Generic => Kind::Generic,
            UnlinkedKind::Search => Kind::Search,
            UnlinkedKind::MinHeap => Kind::MinHeap,
            UnlinkedKind::MaxHeap => Kind::MaxHeap,
            UnlinkedKind::Avl => Kind::Avl,
        }
    }
}

impl TryFrom<Kind> for UnlinkedKind {
    type Error = TreeError;

    fn try_from(kind: Kind) -> Result<Self, Self::Error> {
        match kind {
            Kind::Generic => Ok(UnlinkedKind::Generic),
            Kind::Search => Ok(UnlinkedKind::Search),
            Kind::MinHeap => Ok(UnlinkedKind::MinHeap),
            Kind::MaxHeap => Ok(UnlinkedKind::MaxHeap),
            Kind::Avl => Ok(UnlinkedKind::Avl),
            Kind::RedBlack => Err(TreeError::RequiresParentLinks(kind)),
        }
    }
}
