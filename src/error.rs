//! Failures reported by list operations.

/// An operation could not be carried out on the list.
///
/// Every operation checks for these conditions before it mutates anything, so
/// a list is never left half-updated by a failed call.

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
  /// The cursor was asked to step while it does not point at a node, or a
  /// forward walk would step past the last node.

  #[error("cursor does not point at a node")]
  CursorDereference,

  /// The requested position lies beyond the end of the chain.

  #[error("index {index} is out of range for a chain of length {len}")]
  IndexOutOfRange {
    /// The 1-based index that was requested.
    index: usize,
    /// The length of the chain at the time of the request.
    len: usize,
  },

  /// The index can never be valid for the requested operation, e.g. `0`
  /// anywhere or `1` for [`List::remove`](crate::List::remove).

  #[error("index {0} is not valid here")]
  InvalidIndex(usize),
}
