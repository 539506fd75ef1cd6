//! Singly-linked queue of owned strings backed by an index arena.
//!
//! # Layout
//! Nodes live in a `Vec<Node<I>>` owned by the queue and link to each other by
//! position, with [`IndexType::NONE`] as the null link. Three cursors describe
//! the chain:
//!
//! - `head`: the first node, or `NONE` when empty.
//! - `tail`: the last node (its `next` is `NONE`), or `NONE` when empty.
//! - `free_head`: the first vacated slot. Vacated slots reuse `next` to form a
//!   singly-linked free list and hold an empty, unallocated `String`.
//!
//! ```text
//!  head            tail
//!   │               │
//!   ▼               ▼
//!  [2] ──► [0] ──► [3] ──► NONE        free_head ──► [1] ──► NONE
//! ```
//!
//! A node is addressed only by its slot in one arena, so it cannot be reachable
//! from two queues or freed twice. Dropping the queue drops the arena, which
//! releases every node and its string.

use core::fmt;
use core::mem;

use crate::config::{QueueConfig, SortStrategy};
use crate::error::{QueueError, Result};
use crate::index_type::IndexType;

/// A single link in the chain: one owned string and the index of its successor.
pub(crate) struct Node<I: IndexType> {
    pub(crate) value: String,
    pub(crate) next: I,
}

/// A double-ended queue of owned strings implemented as a singly-linked list.
///
/// - `O(1)` insert at head or tail
/// - `O(1)` remove from head
/// - `O(1)` size
/// - `O(n)` in-place [`reverse`](StringQueue::reverse)
/// - `O(n log n)` in-place, stable, case-insensitive [`sort`](StringQueue::sort)
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|--------|
/// | `I` | Node index type. `usize` (default) is bounded only by memory; `u8`/`u16`/`u32` shrink each node and cap the number of live slots |
///
/// # Example
/// ```rust
/// use strqueue::StringQueue;
///
/// let mut q: StringQueue = StringQueue::new();
/// q.insert_tail("banana").unwrap();
/// q.insert_tail("apple").unwrap();
/// q.insert_head("Cherry").unwrap();
/// q.sort();
///
/// assert_eq!(q.remove_head().unwrap(), "apple");
/// assert_eq!(q.remove_head().unwrap(), "banana");
/// assert_eq!(q.remove_head().unwrap(), "Cherry");
/// assert!(q.remove_head().is_err());
/// ```
pub struct StringQueue<I: IndexType = usize> {
    pub(crate) nodes: Vec<Node<I>>,
    pub(crate) head: I,
    pub(crate) tail: I,
    free_head: I,
    len: usize,
    sort_strategy: SortStrategy,
}

impl<I: IndexType> StringQueue<I> {
    /// Creates an empty queue. Does not allocate.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: I::NONE,
            tail: I::NONE,
            free_head: I::NONE,
            len: 0,
            sort_strategy: SortStrategy::default(),
        }
    }

    /// Creates an empty queue, reserving `config.initial_capacity` node slots.
    ///
    /// # Errors
    /// [`QueueError::AllocationFailed`] if the reservation is refused, or
    /// [`QueueError::IndexSpaceExhausted`] if `I` cannot address that many slots.
    pub fn try_with_config(config: QueueConfig) -> Result<Self> {
        let mut queue = Self::new();
        queue.sort_strategy = config.sort_strategy;
        if config.initial_capacity > I::MAX_NODES {
            return Err(index_space_exhausted::<I>());
        }
        if config.initial_capacity > 0 {
            queue
                .nodes
                .try_reserve_exact(config.initial_capacity)
                .map_err(|_| {
                    allocation_failed(
                        config
                            .initial_capacity
                            .saturating_mul(mem::size_of::<Node<I>>()),
                    )
                })?;
        }
        Ok(queue)
    }

    /// Number of strings in the queue, read from a maintained counter.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Alias of [`size`](StringQueue::size).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Strategy [`sort`](StringQueue::sort) runs with.
    pub fn sort_strategy(&self) -> SortStrategy {
        self.sort_strategy
    }

    pub fn set_sort_strategy(&mut self, strategy: SortStrategy) {
        self.sort_strategy = strategy;
    }

    /// Copies `s` into a new node linked in front of the current head.
    ///
    /// # Errors
    /// On [`QueueError::AllocationFailed`] or [`QueueError::IndexSpaceExhausted`]
    /// the queue is left exactly as it was.
    pub fn insert_head(&mut self, s: &str) -> Result<()> {
        let value = copy_value(s)?;
        let idx = self.acquire_node(value, self.head)?;
        if self.tail.is_none() {
            self.tail = idx;
        }
        self.head = idx;
        self.len += 1;
        Ok(())
    }

    /// Copies `s` into a new node linked after the current tail.
    ///
    /// # Errors
    /// Same as [`insert_head`](StringQueue::insert_head).
    pub fn insert_tail(&mut self, s: &str) -> Result<()> {
        let value = copy_value(s)?;
        let idx = self.acquire_node(value, I::NONE)?;
        if self.tail.is_none() {
            self.head = idx;
        } else {
            self.nodes[self.tail.as_usize()].next = idx;
        }
        self.tail = idx;
        self.len += 1;
        Ok(())
    }

    /// Unlinks the head node and hands its string to the caller.
    ///
    /// # Errors
    /// [`QueueError::Empty`] if there is nothing to remove.
    pub fn remove_head(&mut self) -> Result<String> {
        self.unlink_head()
    }

    /// Unlinks the head node and copies its string into `buf`.
    ///
    /// At most `buf.len() - 1` bytes are copied and the rest of `buf` is zeroed, so
    /// the result is always NUL-terminated. An empty `buf` discards the string.
    /// Truncation is byte-wise and may split a multi-byte character.
    ///
    /// Returns the number of payload bytes written.
    ///
    /// # Errors
    /// [`QueueError::Empty`] if there is nothing to remove; `buf` is untouched.
    pub fn remove_head_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        let value = self.unlink_head()?;
        Ok(copy_truncated(&value, buf))
    }

    /// Unlinks and frees the head node without surfacing its string.
    pub fn discard_head(&mut self) -> Result<()> {
        self.unlink_head().map(drop)
    }

    /// Reverses the chain in place. Head and tail swap; no node is allocated,
    /// freed or moved.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        log::trace!("reversing queue of {} nodes", self.len);

        let mut prev = I::NONE;
        let mut curr = self.head;
        while !curr.is_none() {
            let node = &mut self.nodes[curr.as_usize()];
            let next = node.next;
            node.next = prev;
            prev = curr;
            curr = next;
        }
        self.tail = self.head;
        self.head = prev;
    }

    /// Frees every node and string, keeping the queue usable.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = I::NONE;
        self.tail = I::NONE;
        self.free_head = I::NONE;
        self.len = 0;
    }

    /// Releases arena slots that are no longer needed.
    ///
    /// Live nodes are moved into a right-sized arena in chain order, so free-list
    /// slots left behind by `remove_head` are returned to the allocator. If the new
    /// arena cannot be allocated the queue is left as it was.
    pub fn shrink_to_fit(&mut self) {
        if self.is_empty() {
            self.nodes = Vec::new();
            self.free_head = I::NONE;
            return;
        }

        let mut compacted: Vec<Node<I>> = Vec::new();
        if compacted.try_reserve_exact(self.len).is_err() {
            log::debug!("queue compaction to {} slots refused", self.len);
            return;
        }
        let mut curr = self.head;
        while !curr.is_none() {
            let node = &mut self.nodes[curr.as_usize()];
            let value = mem::take(&mut node.value);
            curr = node.next;
            let pos = compacted.len();
            if pos > 0 {
                compacted[pos - 1].next = slot_index(pos);
            }
            compacted.push(Node {
                value,
                next: I::NONE,
            });
        }

        self.nodes = compacted;
        self.head = slot_index(0);
        self.tail = slot_index(self.len - 1);
        self.free_head = I::NONE;
    }

    /// Walks the chain head to tail.
    pub(crate) fn values(&self) -> Values<'_, I> {
        Values {
            nodes: &self.nodes,
            curr: self.head,
            remaining: self.len,
        }
    }

    /// Places `value` in a free slot (or a new one) linked to `next`.
    ///
    /// Takes ownership of `value`: on failure it is dropped here, so nothing leaks.
    fn acquire_node(&mut self, value: String, next: I) -> Result<I> {
        if !self.free_head.is_none() {
            let idx = self.free_head;
            let node = &mut self.nodes[idx.as_usize()];
            self.free_head = node.next;
            node.value = value;
            node.next = next;
            return Ok(idx);
        }

        let idx = I::try_from_usize(self.nodes.len()).ok_or_else(index_space_exhausted::<I>)?;
        self.nodes
            .try_reserve(1)
            .map_err(|_| allocation_failed(mem::size_of::<Node<I>>()))?;
        self.nodes.push(Node { value, next });
        Ok(idx)
    }

    fn unlink_head(&mut self) -> Result<String> {
        if self.head.is_none() {
            return Err(QueueError::Empty);
        }
        let idx = self.head;
        let node = &mut self.nodes[idx.as_usize()];
        let value = mem::take(&mut node.value);
        self.head = node.next;
        node.next = self.free_head;
        self.free_head = idx;
        self.len -= 1;

        if self.head.is_none() {
            // Last node gone: every slot is free, so reset the arena.
            self.tail = I::NONE;
            self.nodes.clear();
            self.free_head = I::NONE;
        }
        Ok(value)
    }
}

/// Index of a slot already known to be addressable by `I`.
fn slot_index<I: IndexType>(pos: usize) -> I {
    match I::try_from_usize(pos) {
        Some(idx) => idx,
        None => unreachable!("Logic Error: live slot {} outside the index space", pos),
    }
}

/// Copies `s` into storage owned by the new node.
fn copy_value(s: &str) -> Result<String> {
    let mut value = String::new();
    value
        .try_reserve_exact(s.len())
        .map_err(|_| allocation_failed(s.len()))?;
    value.push_str(s);
    Ok(value)
}

fn copy_truncated(value: &str, buf: &mut [u8]) -> usize {
    let Some(limit) = buf.len().checked_sub(1) else {
        return 0;
    };
    let n = value.len().min(limit);
    buf[..n].copy_from_slice(&value.as_bytes()[..n]);
    buf[n..].fill(0);
    n
}

fn allocation_failed(bytes: usize) -> QueueError {
    log::debug!("queue allocation of {} bytes refused", bytes);
    QueueError::AllocationFailed { bytes }
}

fn index_space_exhausted<I: IndexType>() -> QueueError {
    log::debug!("queue index type {} is out of slots", core::any::type_name::<I>());
    QueueError::IndexSpaceExhausted { max: I::MAX_NODES }
}

/// Head-to-tail walk over the stored strings.
pub(crate) struct Values<'a, I: IndexType> {
    nodes: &'a [Node<I>],
    curr: I,
    remaining: usize,
}

impl<'a, I: IndexType> Iterator for Values<'a, I> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr.is_none() {
            return None;
        }
        let node = &self.nodes[self.curr.as_usize()];
        self.curr = node.next;
        self.remaining -= 1;
        Some(node.value.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I: IndexType> Default for StringQueue<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IndexType> fmt::Debug for StringQueue<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}
