use crate::kind::Kind;

/// Errors raised by tree operations. Lookups that simply miss are not errors: they return `None`
/// or [`Removal::NotFound`](crate::Removal::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A traversal visitor signalled [`Halt`](crate::Halt) twice in a row.
    #[error("traversal aborted by its visitor")]
    Aborted,
    /// The kind cannot remove an arbitrary element without breaking its invariant.
    #[error("{0} trees cannot remove an unspecified element")]
    UnspecifiedRemoval(Kind),
    /// The kind needs parent links and was requested for a child-only tree.
    #[error("{0} trees need parent links")]
    RequiresParentLinks(Kind),
    /// The operation needs an ordered kind.
    #[error("{0} trees keep no order to rebalance by")]
    NotOrdered(Kind),
    /// A kind name that does not match any kind.
    #[error("unknown tree kind `{0}`")]
    UnknownKind(String),
    /// No red-black coloring exists for the current shape.
    #[error("no red-black coloring exists for this shape")]
    Uncolorable,
}

/// Shorthand for results carrying a [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;
