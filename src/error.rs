//! Errors for operations whose preconditions the type system can't rule out.
//!
//! Looking at or taking from an empty structure is not an error anywhere in this crate: those
//! operations return `None`.

use std::collections::TryReserveError;

use thiserror::Error;

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong when constructing or reshaping a structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Backing storage for the requested capacity could not be allocated.
    #[error("failed to allocate heap storage: {0}")]
    Alloc(#[from] TryReserveError),
    /// A root was set on a tree that already has one.
    #[error("the tree already has a root")]
    RootOccupied,
    /// A child was attached to a slot that is already taken.
    #[error("the requested child slot is already occupied")]
    ChildOccupied,
    /// The `NodeId` doesn't refer to a live node of this tree.
    #[error("node handle does not refer to a live node")]
    InvalidNode,
}
