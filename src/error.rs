//! Error type shared by every fallible queue operation.

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = core::result::Result<T, QueueError>;

/// Everything that can make a queue operation refuse to run.
///
/// A failed operation never leaves the queue half-modified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The queue or the string handed to it was absent.
    #[error("invalid argument: queue or string is absent")]
    InvalidArgument,

    /// `remove_head` on a queue with no elements.
    #[error("queue is empty")]
    Empty,

    /// The allocator refused storage for a string copy or a node slot.
    #[error("allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },

    /// The node index type cannot address another node.
    #[error("node index space exhausted: at most {max} nodes")]
    IndexSpaceExhausted { max: usize },
}
