#![cfg(feature = "handle")]
//! Nullable call surface for harnesses that drive the queue through possibly
//! absent handles.
//!
//! Every function accepts `None` where the caller may have no queue (or no
//! string) and reports failure as `false`/`None` instead of an error value.
//! Absent strings are rejected as invalid arguments rather than stored as empty.
//!
//! ```rust
//! use strqueue::handle;
//!
//! let mut q = handle::create();
//! assert!(handle::insert_tail(q.as_mut(), Some("banana")));
//! assert!(handle::insert_tail(q.as_mut(), Some("apple")));
//! handle::sort(q.as_mut());
//!
//! let mut buf = [0u8; 8];
//! assert!(handle::remove_head(q.as_mut(), Some(&mut buf)));
//! assert_eq!(&buf[..6], b"apple\0");
//! assert_eq!(handle::size(q.as_ref()), 1);
//! handle::destroy(q);
//! ```

use crate::config::QueueConfig;
use crate::error::{QueueError, Result};
use crate::index_type::IndexType;
use crate::queue::StringQueue;

/// Creates an empty queue, or `None` if storage could not be obtained.
pub fn create() -> Option<StringQueue> {
    StringQueue::try_with_config(QueueConfig::default()).ok()
}

/// Releases the queue together with every node and string it still holds.
pub fn destroy<I: IndexType>(queue: Option<StringQueue<I>>) {
    drop(queue);
}

pub fn insert_head<I: IndexType>(queue: Option<&mut StringQueue<I>>, s: Option<&str>) -> bool {
    insert_with(queue, s, StringQueue::insert_head)
}

pub fn insert_tail<I: IndexType>(queue: Option<&mut StringQueue<I>>, s: Option<&str>) -> bool {
    insert_with(queue, s, StringQueue::insert_tail)
}

/// Removes the head. When `buf` is given and non-empty the removed string is
/// copied into it, truncated to `buf.len() - 1` bytes and NUL-terminated.
pub fn remove_head<I: IndexType>(queue: Option<&mut StringQueue<I>>, buf: Option<&mut [u8]>) -> bool {
    let Some(queue) = queue else {
        return false;
    };
    let result = match buf {
        Some(buf) => queue.remove_head_into(buf).map(drop),
        None => queue.discard_head(),
    };
    result.is_ok()
}

/// Number of strings held, `0` for an absent queue.
pub fn size<I: IndexType>(queue: Option<&StringQueue<I>>) -> usize {
    queue.map_or(0, StringQueue::size)
}

pub fn reverse<I: IndexType>(queue: Option<&mut StringQueue<I>>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

pub fn sort<I: IndexType>(queue: Option<&mut StringQueue<I>>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}

fn insert_with<I, F>(queue: Option<&mut StringQueue<I>>, s: Option<&str>, insert: F) -> bool
where
    I: IndexType,
    F: FnOnce(&mut StringQueue<I>, &str) -> Result<()>,
{
    let result = match (queue, s) {
        (Some(queue), Some(s)) => insert(queue, s),
        _ => Err(QueueError::InvalidArgument),
    };
    result.is_ok()
}
