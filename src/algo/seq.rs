// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked access and small in-place edits over any [`Sequence`].
//!
//! The `try_*` forms validate their indices first and report failure with
//! `bool`/`Option`. The plain forms assume valid input; in debug builds the
//! contract checks catch misuse.

use crate::contracts::{check_idx_valid, check_range_valid};
use crate::sequence::Sequence;

// ============================================================================
// CHECKED ACCESS
// ============================================================================

pub fn try_get<S: Sequence + ?Sized>(seq: &S, idx: S::Idx) -> Option<S::Item> {
    seq.idx_valid(idx).then(|| seq.get(idx))
}

pub fn try_set<S: Sequence + ?Sized>(seq: &mut S, idx: S::Idx, val: S::Item) -> bool {
    if !seq.idx_valid(idx) {
        return false;
    }
    seq.set(idx, val);
    true
}

pub fn get_first<S: Sequence + ?Sized>(seq: &S) -> S::Item {
    let idx = seq.first_idx();
    check_idx_valid(seq, idx, "get_first");
    seq.get(idx)
}

pub fn get_last<S: Sequence + ?Sized>(seq: &S) -> S::Item {
    let idx = seq.last_idx();
    check_idx_valid(seq, idx, "get_last");
    seq.get(idx)
}

pub fn try_get_first<S: Sequence + ?Sized>(seq: &S) -> Option<S::Item> {
    try_get(seq, seq.first_idx())
}

pub fn try_get_last<S: Sequence + ?Sized>(seq: &S) -> Option<S::Item> {
    try_get(seq, seq.last_idx())
}

pub fn set_first<S: Sequence + ?Sized>(seq: &mut S, val: S::Item) {
    let idx = seq.first_idx();
    check_idx_valid(seq, idx, "set_first");
    seq.set(idx, val);
}

pub fn set_last<S: Sequence + ?Sized>(seq: &mut S, val: S::Item) {
    let idx = seq.last_idx();
    check_idx_valid(seq, idx, "set_last");
    seq.set(idx, val);
}

// ============================================================================
// INDEX STEPPING
// ============================================================================

/// Index of the `n`th element counting from the first.
pub fn nth_idx<S: Sequence + ?Sized>(seq: &S, n: usize) -> S::Idx {
    seq.nth_next_idx(seq.first_idx(), n)
}

pub fn try_nth_idx<S: Sequence + ?Sized>(seq: &S, n: usize) -> Option<S::Idx> {
    let idx = nth_idx(seq, n);
    seq.idx_valid(idx).then_some(idx)
}

pub fn try_next_idx<S: Sequence + ?Sized>(seq: &S, idx: S::Idx) -> Option<S::Idx> {
    let next = seq.next_idx(idx);
    seq.idx_valid(next).then_some(next)
}

pub fn try_prev_idx<S: Sequence + ?Sized>(seq: &S, idx: S::Idx) -> Option<S::Idx> {
    let prev = seq.prev_idx(idx);
    seq.idx_valid(prev).then_some(prev)
}

pub fn try_nth_next_idx<S: Sequence + ?Sized>(seq: &S, idx: S::Idx, n: usize) -> Option<S::Idx> {
    let next = seq.nth_next_idx(idx, n);
    seq.idx_valid(next).then_some(next)
}

pub fn try_nth_prev_idx<S: Sequence + ?Sized>(seq: &S, idx: S::Idx, n: usize) -> Option<S::Idx> {
    let prev = seq.nth_prev_idx(idx, n);
    seq.idx_valid(prev).then_some(prev)
}

pub fn all_idx_valid<S: Sequence + ?Sized>(seq: &S, indexes: &[S::Idx]) -> bool {
    indexes.iter().all(|&idx| seq.idx_valid(idx))
}

// ============================================================================
// CHECKED STRUCTURAL OPERATIONS
// ============================================================================

pub fn try_slice<S: Sequence + ?Sized>(
    seq: &mut S,
    first: S::Idx,
    last: S::Idx,
) -> Option<S::View<'_>> {
    if !seq.range_valid(first, last) {
        return None;
    }
    Some(seq.slice(first, last))
}

pub fn try_move<S: Sequence + ?Sized>(seq: &mut S, old: S::Idx, new: S::Idx) -> bool {
    if !seq.idx_valid(old) || !seq.idx_valid(new) {
        return false;
    }
    seq.move_item(old, new);
    true
}

/// Move `[first, last]` to begin at `new_first` if the block fits there.
pub fn try_move_range<S: Sequence + ?Sized>(
    seq: &mut S,
    first: S::Idx,
    last: S::Idx,
    new_first: S::Idx,
) -> bool {
    if !seq.range_valid(first, last) || !seq.idx_valid(new_first) {
        return false;
    }
    let block_len = seq.len_between(first, last);
    let new_last = seq.nth_next_idx(new_first, block_len - 1);
    if !seq.idx_valid(new_last) {
        return false;
    }
    seq.move_range(first, last, new_first);
    true
}

// ============================================================================
// SWAP / EXCHANGE / OVERWRITE
// ============================================================================

pub fn swap<S: Sequence + ?Sized>(seq: &mut S, a: S::Idx, b: S::Idx) {
    if a == b {
        return;
    }
    let va = seq.get(a);
    let vb = seq.get(b);
    seq.set(a, vb);
    seq.set(b, va);
}

pub fn try_swap<S: Sequence + ?Sized>(seq: &mut S, a: S::Idx, b: S::Idx) -> bool {
    if !seq.idx_valid(a) || !seq.idx_valid(b) {
        return false;
    }
    swap(seq, a, b);
    true
}

/// Swap one element between two containers.
pub fn exchange<A, B>(a: &mut A, a_idx: A::Idx, b: &mut B, b_idx: B::Idx)
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
{
    let va = a.get(a_idx);
    let vb = b.get(b_idx);
    a.set(a_idx, vb);
    b.set(b_idx, va);
}

pub fn try_exchange<A, B>(a: &mut A, a_idx: A::Idx, b: &mut B, b_idx: B::Idx) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
{
    if !a.idx_valid(a_idx) || !b.idx_valid(b_idx) {
        return false;
    }
    exchange(a, a_idx, b, b_idx);
    true
}

/// `seq[dest] = seq[src]`
pub fn overwrite<S: Sequence + ?Sized>(seq: &mut S, src: S::Idx, dest: S::Idx) {
    let val = seq.get(src);
    seq.set(dest, val);
}

pub fn try_overwrite<S: Sequence + ?Sized>(seq: &mut S, src: S::Idx, dest: S::Idx) -> bool {
    if !seq.idx_valid(src) || !seq.idx_valid(dest) {
        return false;
    }
    overwrite(seq, src, dest);
    true
}

/// `dest[dest_idx] = source[src_idx]` across two containers.
pub fn set_from<S, D>(dest: &mut D, dest_idx: D::Idx, source: &S, src_idx: S::Idx)
where
    S: Sequence + ?Sized,
    D: Sequence<Item = S::Item> + ?Sized,
{
    dest.set(dest_idx, source.get(src_idx));
}

// ============================================================================
// REVERSE / FILL
// ============================================================================

pub fn reverse<S: Sequence + ?Sized>(seq: &mut S) {
    if seq.is_empty() {
        return;
    }
    let (first, last) = (seq.first_idx(), seq.last_idx());
    reverse_range(seq, first, last);
}

/// Reverse `[first, last]` by swapping inward from both ends.
pub fn reverse_range<S: Sequence + ?Sized>(seq: &mut S, first: S::Idx, last: S::Idx) {
    check_range_valid(seq, first, last, "reverse_range");
    let (mut left, mut right) = (first, last);
    while left != right {
        swap(seq, left, right);
        left = seq.next_idx(left);
        if left == right {
            break;
        }
        right = seq.prev_idx(right);
    }
}

pub fn fill<S: Sequence + ?Sized>(seq: &mut S, val: S::Item) {
    let mut idx = seq.first_idx();
    while seq.idx_valid(idx) {
        seq.set(idx, val.clone());
        idx = seq.next_idx(idx);
    }
}

/// Fill up to `count` elements starting at `first`. Returns how many were
/// written, which is less than `count` when the container ends first.
pub fn fill_count<S: Sequence + ?Sized>(seq: &mut S, first: S::Idx, count: usize, val: S::Item) -> usize {
    let mut idx = first;
    let mut filled = 0;
    while filled < count && seq.idx_valid(idx) {
        seq.set(idx, val.clone());
        filled += 1;
        idx = seq.next_idx(idx);
    }
    filled
}

pub fn fill_range<S: Sequence + ?Sized>(seq: &mut S, first: S::Idx, last: S::Idx, val: S::Item) {
    check_range_valid(seq, first, last, "fill_range");
    let mut idx = first;
    loop {
        seq.set(idx, val.clone());
        if idx == last {
            break;
        }
        idx = seq.next_idx(idx);
    }
}
