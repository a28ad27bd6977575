//! Element and block relocation built only on `get`/`set`.
//!
//! These are the default bodies of [`Sequence::move_item`] and
//! [`Sequence::move_range`]. Memory adapters override both with slice
//! primitives; the file adapter keeps these.

use std::cmp::Ordering;

use crate::algo::seq::reverse_range;
use crate::sequence::Sequence;

/// Logical order of two valid indices.
///
/// O(1) when indices are consecutive and in order, otherwise a forward walk
/// from `a` looking for `b`.
pub fn logical_order<S: Sequence + ?Sized>(seq: &S, a: S::Idx, b: S::Idx) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if S::CONSECUTIVE_INDEXES_IN_ORDER {
        return a.cmp(&b);
    }
    let mut idx = seq.next_idx(a);
    while seq.idx_valid(idx) {
        if idx == b {
            return Ordering::Less;
        }
        idx = seq.next_idx(idx);
    }
    Ordering::Greater
}

/// Carry the element at `old` to `new`, overwriting one step at a time.
pub fn shift_one<S: Sequence + ?Sized>(seq: &mut S, old: S::Idx, new: S::Idx) {
    let order = logical_order(seq, old, new);
    if order == Ordering::Equal {
        return;
    }
    let carried = seq.get(old);
    let mut idx = old;
    while idx != new {
        let from = match order {
            Ordering::Less => seq.next_idx(idx),
            _ => seq.prev_idx(idx),
        };
        let val = seq.get(from);
        seq.set(idx, val);
        idx = from;
    }
    seq.set(new, carried);
}

/// Rotate `[first, last]` to begin at `new_first` by triple reversal.
///
/// Moving backward, the displaced block is `[new_first, first)`. Moving
/// forward, it is `(last, new_first + len - 1]`. Reverse the moved block,
/// reverse the displaced block, then reverse their union.
pub fn rotate_block<S: Sequence + ?Sized>(
    seq: &mut S,
    first: S::Idx,
    last: S::Idx,
    new_first: S::Idx,
) {
    if new_first == first {
        return;
    }
    if logical_order(seq, new_first, first) == Ordering::Less {
        let displaced_last = seq.prev_idx(first);
        reverse_range(seq, first, last);
        reverse_range(seq, new_first, displaced_last);
        reverse_range(seq, new_first, last);
    } else {
        let block_len = seq.len_between(first, last);
        let new_last = seq.nth_next_idx(new_first, block_len - 1);
        let displaced_first = seq.next_idx(last);
        reverse_range(seq, first, last);
        reverse_range(seq, displaced_first, new_last);
        reverse_range(seq, first, new_last);
    }
}
