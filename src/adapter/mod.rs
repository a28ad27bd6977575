//! Containers that implement the capability traits.
//!
//! | Adapter     | Capabilities                                   | Storage                     |
//! |-------------|------------------------------------------------|-----------------------------|
//! | `SliceSeq`  | Sequence, Queue, MemorySequence                | owned `Vec` or `&mut [T]`   |
//! | `VecSeq`    | Sequence, GrowableSequence, Queue, MemorySequence | caller's `&mut Vec<T>`   |
//! | `SharedSeq` | Sequence, GrowableSequence, Queue, MemorySequence | `Rc<RefCell<..>>`        |
//! | `FileSeq`   | Sequence, GrowableSequence, Queue              | any [`RandomAccess`] store  |
//!
//! The memory adapters override `move_item`/`move_range` with slice
//! rotations. The file adapter keeps the generic walk.

/// Index stepping shared by every adapter whose indices are the positions
/// `0..len()`. Expects `type Idx = usize` and a `len` method in the impl.
macro_rules! contiguous_indexes {
    () => {
        const PREFER_LINEAR_OPS: bool = false;
        const CONSECUTIVE_INDEXES_IN_ORDER: bool = true;
        const ALL_INDEXES_LESS_THAN_LEN_VALID: bool = true;

        #[inline]
        fn idx_valid(&self, idx: usize) -> bool {
            idx < self.len()
        }

        #[inline]
        fn range_valid(&self, first: usize, last: usize) -> bool {
            first <= last && last < self.len()
        }

        #[inline]
        fn split_range(&self, first: usize, last: usize) -> usize {
            first + ((last - first + 1) >> 1)
        }

        #[inline]
        fn first_idx(&self) -> usize {
            0
        }

        #[inline]
        fn last_idx(&self) -> usize {
            self.len().wrapping_sub(1)
        }

        #[inline]
        fn next_idx(&self, idx: usize) -> usize {
            idx.wrapping_add(1)
        }

        #[inline]
        fn nth_next_idx(&self, idx: usize, n: usize) -> usize {
            idx.wrapping_add(n)
        }

        #[inline]
        fn prev_idx(&self, idx: usize) -> usize {
            idx.wrapping_sub(1)
        }

        #[inline]
        fn nth_prev_idx(&self, idx: usize, n: usize) -> usize {
            idx.wrapping_sub(n)
        }

        #[inline]
        fn len_between(&self, first: usize, last: usize) -> usize {
            last.wrapping_sub(first).wrapping_add(1)
        }
    };
}

mod buffer;
mod file;
mod shared;
mod slice;
mod vec;

pub use file::{FileOptions, FileSeq, FileView, RandomAccess, ReadPolicy};
pub use shared::{SharedSeq, SharedView};
pub use slice::SliceSeq;
pub use vec::VecSeq;
