//! Errors reported by tree queries.

use crate::Key;

/// Errors returned by the fallible queries on a [`Tree`][crate::Tree].
///
/// Inserting a duplicate key and deleting an absent key are not errors. Both hand back the
/// unchanged tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BstError {
    /// A query that needs at least one node (e.g. `minimum`) was made on an empty tree.
    #[error("{operation} called on an empty tree")]
    EmptyTree {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },
    /// A strict lookup did not find the requested key.
    #[error("key {0} not found in tree")]
    KeyNotFound(Key),
}
