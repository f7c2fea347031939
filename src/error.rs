//! Error types for strict index construction.

use crate::record::Id;
use thiserror::Error;

/// Rejections raised by [`TreeIndex::try_new`](crate::TreeIndex::try_new).
///
/// The lenient constructor never returns these; it resolves the same
/// conditions with last-write-wins semantics instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexError {
    #[error("duplicate record id: {0}")]
    DuplicateId(Id),

    #[error("multiple roots: {first} and {second} both have unmatched parents")]
    MultipleRoots { first: Id, second: Id },

    #[error("no root: every record's parent matches an existing id")]
    NoRoot,
}
