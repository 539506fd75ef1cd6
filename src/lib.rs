//! # strqueue
//!
//! A singly-linked double-ended queue of owned strings with in-place reversal and
//! a stable, case-insensitive merge sort.
//!
//! ## Key Features
//!
//! * **Owned payloads:** every insert copies the caller's string into storage owned
//!   by its node; callers may reuse or drop their buffer immediately.
//! * **Index arena:** nodes live in one `Vec` and link by position, so a node can
//!   never be shared between queues or freed twice. Dropping the queue frees all of it.
//! * **Fallible allocation:** inserts reserve memory with `try_reserve` and report
//!   [`QueueError::AllocationFailed`] instead of aborting; a failed insert leaves the
//!   queue untouched.
//! * **Relinking algorithms:** [`StringQueue::reverse`] and [`StringQueue::sort`] only
//!   rewrite links. Sort runs top-down recursively or bottom-up ([`SortStrategy`]).
//!
//! ## Index width (`I`)
//!
//! `StringQueue<I>` is generic over its link type. The default `usize` is bounded
//! only by memory. `u8`, `u16` and `u32` make nodes smaller and cap the live
//! node count at `I::MAX`; exceeding it reports [`QueueError::IndexSpaceExhausted`].
//!
//! ## Examples
//!
//! ### Queue operations
//!
//! ```rust
//! use strqueue::StringQueue;
//!
//! let mut q: StringQueue = StringQueue::new();
//! q.insert_head("a").unwrap();
//! q.insert_head("b").unwrap();
//! q.insert_head("c").unwrap();
//! q.reverse();
//!
//! assert_eq!(format!("{:?}", q), r#"["a", "b", "c"]"#);
//! assert_eq!(q.size(), 3);
//! ```
//!
//! ### Bounded copy on removal
//!
//! ```rust
//! use strqueue::StringQueue;
//!
//! let mut q: StringQueue<u16> = StringQueue::new();
//! q.insert_tail("overlong").unwrap();
//!
//! let mut buf = [0u8; 5];
//! assert_eq!(q.remove_head_into(&mut buf).unwrap(), 4);
//! assert_eq!(&buf, b"over\0");
//! assert!(q.is_empty());
//! ```
//!
//! ### Configured sort
//!
//! ```rust
//! use strqueue::{QueueConfig, SortStrategy, StringQueue};
//!
//! let config = QueueConfig::new().with_sort_strategy(SortStrategy::BottomUp);
//! let mut q: StringQueue = StringQueue::try_with_config(config).unwrap();
//! for s in ["banana", "apple", "Cherry"] {
//!     q.insert_tail(s).unwrap();
//! }
//! q.sort();
//! assert_eq!(format!("{:?}", q), r#"["apple", "banana", "Cherry"]"#);
//! ```

// --- Module Declarations ---

pub mod config;
pub mod error;
pub mod handle;
pub mod index_type;
pub mod queue;
pub mod sort;

// --- Re-exports ---

pub use config::{QueueConfig, SortStrategy};
pub use error::{QueueError, Result};
pub use index_type::IndexType;
pub use queue::StringQueue;
pub use sort::cmp_ignore_ascii_case;
