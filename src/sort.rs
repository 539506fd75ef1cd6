//! Merge sort over the queue's linked nodes.
//!
//! Both strategies work purely by rewriting `next` links: no node is allocated,
//! freed or moved, and no string is copied. Merging takes from the left run on
//! ties, so equal-ignoring-case strings keep their relative order.
//!
//! ## Bottom-up scheduling
//! ```text
//! pending[k] holds a sorted run of exactly 2^k nodes, or NONE.
//! for each node, detached as a run of 1:
//!     k = 0
//!     while pending[k] is occupied:
//!         run = merge(pending[k], run)     // older run on the left
//!         pending[k] = NONE
//!         k += 1
//!     pending[k] = run
//! result = fold pending from k = 0 upward with merge(pending[k], result)
//! ```

use core::cmp::Ordering;

use crate::config::SortStrategy;
use crate::index_type::IndexType;
use crate::queue::{Node, StringQueue};

/// One pending run per bit of the element count.
const MAX_RUNS: usize = usize::BITS as usize;

/// ASCII case-insensitive byte comparison, ordering a proper prefix first.
pub fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

impl<I: IndexType> StringQueue<I> {
    /// Sorts the queue ascending by [`cmp_ignore_ascii_case`] using the configured
    /// [`SortStrategy`]. Stable; no-op with fewer than two elements.
    pub fn sort(&mut self) {
        self.sort_with(self.sort_strategy());
    }

    /// Sorts with an explicit strategy, ignoring the configured one.
    pub fn sort_with(&mut self, strategy: SortStrategy) {
        if self.len() < 2 {
            return;
        }
        log::trace!("sorting queue of {} nodes ({:?})", self.len(), strategy);

        let head = match strategy {
            SortStrategy::Recursive => sort_recursive(&mut self.nodes, self.head),
            SortStrategy::BottomUp => sort_bottom_up(&mut self.nodes, self.head),
        };

        let mut tail = head;
        loop {
            let next = self.nodes[tail.as_usize()].next;
            if next.is_none() {
                break;
            }
            tail = next;
        }
        self.head = head;
        self.tail = tail;
    }
}

fn sort_recursive<I: IndexType>(nodes: &mut [Node<I>], head: I) -> I {
    if head.is_none() || nodes[head.as_usize()].next.is_none() {
        return head;
    }
    let right = split(nodes, head);
    let left = sort_recursive(nodes, head);
    let right = sort_recursive(nodes, right);
    merge(nodes, left, right)
}

/// Cuts a chain of at least two nodes after its midpoint and returns the second half.
fn split<I: IndexType>(nodes: &mut [Node<I>], head: I) -> I {
    let mut slow = head;
    let mut fast = nodes[head.as_usize()].next;
    while !fast.is_none() {
        fast = nodes[fast.as_usize()].next;
        if !fast.is_none() {
            slow = nodes[slow.as_usize()].next;
            fast = nodes[fast.as_usize()].next;
        }
    }
    let second = nodes[slow.as_usize()].next;
    nodes[slow.as_usize()].next = I::NONE;
    second
}

fn sort_bottom_up<I: IndexType>(nodes: &mut [Node<I>], head: I) -> I {
    let mut pending: heapless::Vec<I, MAX_RUNS> = heapless::Vec::new();

    let mut curr = head;
    while !curr.is_none() {
        let next = nodes[curr.as_usize()].next;
        nodes[curr.as_usize()].next = I::NONE;

        let mut run = curr;
        let mut level = 0;
        loop {
            if level == pending.len() {
                if pending.push(run).is_err() {
                    unreachable!("Logic Error: more pending runs than bits in usize");
                }
                break;
            }
            if pending[level].is_none() {
                pending[level] = run;
                break;
            }
            run = merge(nodes, pending[level], run);
            pending[level] = I::NONE;
            level += 1;
        }
        curr = next;
    }

    pending
        .iter()
        .filter(|run| !run.is_none())
        .fold(I::NONE, |result, &run| merge(nodes, run, result))
}

/// Merges two sorted, `NONE`-terminated chains; `left` wins ties.
fn merge<I: IndexType>(nodes: &mut [Node<I>], mut left: I, mut right: I) -> I {
    let mut head = I::NONE;
    let mut tail = I::NONE;

    while !left.is_none() && !right.is_none() {
        let order = cmp_ignore_ascii_case(
            &nodes[left.as_usize()].value,
            &nodes[right.as_usize()].value,
        );
        let picked = if order == Ordering::Greater {
            let picked = right;
            right = nodes[picked.as_usize()].next;
            picked
        } else {
            let picked = left;
            left = nodes[picked.as_usize()].next;
            picked
        };
        if tail.is_none() {
            head = picked;
        } else {
            nodes[tail.as_usize()].next = picked;
        }
        tail = picked;
    }

    let rest = if left.is_none() { right } else { left };
    if tail.is_none() {
        rest
    } else {
        nodes[tail.as_usize()].next = rest;
        head
    }
}
