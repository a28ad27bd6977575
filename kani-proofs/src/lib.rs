// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for seqlike's contiguous index arithmetic.
//!
//! This standalone crate extracts the wrapping index helpers and the slice
//! relocation primitives shared by the in-memory adapters, and proves them
//! over every input up to a small bound.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Split bounds**: the binary-search probe lies inside `[first, last]`
//! 2. **Empty span**: `len_between(first_idx, last_idx) == len`, including 0
//! 3. **Block relocation**: `move_range` places the block at `new_first`
//!    and keeps every other element in order
//! 4. **Head offset**: discarding never moves `head` past the buffer

/// Discarded front positions tolerated before compaction is considered.
pub const COMPACT_MIN: usize = 64;

// ============================================================================
// INDEX ARITHMETIC (mirrors src/adapter/mod.rs)
// ============================================================================

pub fn split_range(first: usize, last: usize) -> usize {
    first + ((last - first + 1) >> 1)
}

pub fn last_idx(len: usize) -> usize {
    len.wrapping_sub(1)
}

pub fn len_between(first: usize, last: usize) -> usize {
    last.wrapping_sub(first).wrapping_add(1)
}

// ============================================================================
// SLICE RELOCATION (mirrors src/adapter/buffer.rs)
// ============================================================================

pub fn move_range<T>(data: &mut [T], first: usize, last: usize, new_first: usize) {
    let block_len = last - first + 1;
    if new_first < first {
        data[new_first..=last].rotate_right(block_len);
    } else if new_first > first {
        data[first..new_first + block_len].rotate_left(block_len);
    }
}

/// Returns the new `(head, len)` after discarding `n` front elements.
pub fn discard_front(len: usize, head: usize, n: usize) -> (usize, usize) {
    let n = n.min(len - head);
    let head = head + n;
    if head == len {
        (0, 0)
    } else if head >= COMPACT_MIN && head * 2 >= len {
        (0, len - head)
    } else {
        (head, len)
    }
}

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify the probe never leaves the range it splits.
    #[kani::proof]
    fn verify_split_in_range() {
        let first: usize = kani::any();
        let last: usize = kani::any();
        kani::assume(first <= last && last < isize::MAX as usize);

        let mid = split_range(first, last);
        kani::assert(first <= mid && mid <= last, "split must lie within [first, last]");
        if first < last {
            kani::assert(mid > first, "a range of two or more must split past first");
        }
    }

    /// Verify the span from first to last index is the length, even when
    /// the container is empty and `last_idx` wraps.
    #[kani::proof]
    fn verify_len_between_is_len() {
        let len: usize = kani::any();
        kani::assume(len < isize::MAX as usize);
        kani::assert(len_between(0, last_idx(len)) == len, "span must equal len");
    }

    /// Verify block relocation on every small layout.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_move_range_places_block() {
        const MAX: usize = 8;
        let len: usize = kani::any_where(|&n| n >= 1 && n <= MAX);
        let first: usize = kani::any_where(|&i| i < len);
        let last: usize = kani::any_where(|&i| i >= first && i < len);
        let block_len = last - first + 1;
        let new_first: usize = kani::any_where(|&i| i + block_len <= len);

        let mut data = [0usize; MAX];
        for (i, slot) in data.iter_mut().enumerate() {
            *slot = i;
        }
        move_range(&mut data[..len], first, last, new_first);

        for k in 0..block_len {
            kani::assert(data[new_first + k] == first + k, "block must begin at new_first");
        }
        let mut prev_outside = None;
        for i in 0..len {
            if i >= new_first && i < new_first + block_len {
                continue;
            }
            kani::assert(data[i] < first || data[i] > last, "outside elements stay outside");
            if let Some(p) = prev_outside {
                kani::assert(p < data[i], "outside elements keep their order");
            }
            prev_outside = Some(data[i]);
        }
    }

    /// Verify discarding keeps `head <= len` and never grows the buffer.
    #[kani::proof]
    fn verify_discard_keeps_head_in_bounds() {
        let len: usize = kani::any_where(|&n| n < 1 << 20);
        let head: usize = kani::any_where(|&h| h <= len);
        let n: usize = kani::any();

        let (new_head, new_len) = discard_front(len, head, n);
        kani::assert(new_head <= new_len, "head must stay within the buffer");
        kani::assert(new_len <= len, "discarding never grows the buffer");
        kani::assert(
            new_len - new_head == (len - head).saturating_sub(n),
            "live elements drop by exactly the discarded count",
        );
    }
}
