//! Integer types used as node links inside the queue's arena.

use core::fmt::Debug;
use core::hash::Hash;

/// A sealed-style trait for integer types used as **singly-linked node indices**.
///
/// Nodes are stored in a `Vec` and linked by position instead of by pointer, so a
/// queue can never alias or double-free a node. A narrower index type shrinks every
/// node at the cost of a hard cap on the number of live slots.
pub trait IndexType: Copy + Eq + Hash + Debug + 'static {
    /// Sentinel value meaning "no node" (the null link).
    ///
    /// Always the type's maximum value, so it is never a valid slot.
    const NONE: Self;

    /// Number of distinct slots this type can address.
    const MAX_NODES: usize;

    /// Converts this index to a `usize` for arena access.
    fn as_usize(self) -> usize;

    /// Converts a slot position to this type, or `None` if it does not fit
    /// (or would collide with [`NONE`](IndexType::NONE)).
    fn try_from_usize(i: usize) -> Option<Self>;

    /// Returns `true` for the null link.
    #[inline(always)]
    fn is_none(self) -> bool {
        self == Self::NONE
    }
}

macro_rules! impl_index_type {
    ($($t:ty),*) => {
        $(
            impl IndexType for $t {
                const NONE: Self = <$t>::MAX;
                const MAX_NODES: usize = <$t>::MAX as usize;

                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline(always)]
                fn try_from_usize(i: usize) -> Option<Self> {
                    if i < Self::MAX_NODES {
                        Some(i as $t)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_index_type!(u8, u16, u32, usize);
