//! Treestore: Read-Only Tree Index over Flat Records
//!
//! Builds an in-memory index once from an ordered sequence of
//! parent-referencing records and answers O(1) lookups and structural
//! queries (children, descendants, ancestors) without re-scanning the
//! source collection. The index is immutable after construction.

pub mod error;
pub mod index;
pub mod record;

pub use error::IndexError;
pub use index::TreeIndex;
pub use record::{Id, Record};
