use thiserror::Error;

/// Failures reported by a [`Cursor`][crate::avl::Cursor].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IterError {
    /// The tree changed shape after the cursor was created. The tree itself is still valid but
    /// the cursor can no longer be used.
    ///
    /// Detection compares the tree's size against the size captured when the cursor was created,
    /// so a removal followed by an insertion goes unnoticed.
    #[error("tree was modified during iteration (expected {expected} values, found {found})")]
    ConcurrentModification {
        /// The size of the tree when the cursor was created.
        expected: usize,
        /// The size of the tree when the change was noticed.
        found: usize,
    },
    /// `next` was called after every value had already been produced.
    #[error("iteration is exhausted")]
    Exhausted,
}
