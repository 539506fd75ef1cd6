//! Construction-time options for [`StringQueue`](crate::StringQueue).

/// Which merge sort [`StringQueue::sort`](crate::StringQueue::sort) runs.
///
/// Both are stable and produce identical orderings; they differ only in how
/// the sub-lists are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    /// Top-down: split in half, sort each half recursively, merge.
    /// Recursion depth is `O(log n)`.
    #[default]
    Recursive,
    /// Bottom-up: merge runs of length `2^k` kept on a fixed-size stack.
    /// No recursion.
    BottomUp,
}

/// Options consumed by [`StringQueue::try_with_config`](crate::StringQueue::try_with_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueConfig {
    /// Strategy used by `sort()`.
    pub sort_strategy: SortStrategy,
    /// Node slots reserved up front. `0` defers all allocation to the first insert.
    pub initial_capacity: usize,
}

impl QueueConfig {
    /// Same as `QueueConfig::default()`.
    pub const fn new() -> Self {
        Self {
            sort_strategy: SortStrategy::Recursive,
            initial_capacity: 0,
        }
    }

    pub const fn with_sort_strategy(mut self, strategy: SortStrategy) -> Self {
        self.sort_strategy = strategy;
        self
    }

    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
