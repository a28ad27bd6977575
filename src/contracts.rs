//! Runtime contracts for the capability traits.
//!
//! Debug-mode assertions that verify the properties every conforming
//! container and every algorithm caller must uphold. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the **trait documentation** exactly
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Calling a positional operation with an invalid index, or committing slots
//! that were never reserved, is a caller bug rather than a runtime error. The
//! checks here are the only place such bugs surface.
//!
//! # Contract Table
//!
//! | Contract Function        | Property                                        |
//! |--------------------------|-------------------------------------------------|
//! | `check_idx_valid`        | positional access only at valid indices         |
//! | `check_range_valid`      | range operations only on valid ranges           |
//! | `check_len_between`      | `len_between(first, last) == len()`             |
//! | `check_free_slots`       | `cap() - len() >= n` before `*_assume_capacity` |
//! | `check_reserved`         | unchecked growth only after a granted reserve   |
//! | `check_split_in_range`   | `split_range` stays inside `[first, last]`      |
//! | `check_sorted`           | sorted algorithms only on sorted input          |
//! | `check_hints`            | capability hints are truthful                   |
//!
//! # Usage
//!
//! ```
//! use seqlike::contracts::*;
//! use seqlike::SliceSeq;
//!
//! let seq = SliceSeq::new(vec![1, 2, 3]);
//!
//! // In debug builds, this panics if the container lies about its length
//! check_len_between(&seq);
//!
//! // In release builds, this is a no-op
//! check_range_valid(&seq, 0, 2, "example");
//! ```

use crate::index::SeqIndex;
use crate::sequence::{GrowableSequence, Sequence};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertion that integral invalid sentinels sit where wrapping puts
/// them. If it fails, the crate won't build.
const _: () = {
    // 0 - 1 wraps to MAX for unsigned indices
    assert!(<usize as SeqIndex>::INVALID == usize::MAX);
    assert!(<u32 as SeqIndex>::INVALID == u32::MAX);
    assert!(<u8 as SeqIndex>::INVALID == u8::MAX);

    // 0 - 1 is -1 for signed indices
    assert!(<i64 as SeqIndex>::INVALID == -1);
    assert!(<isize as SeqIndex>::INVALID == -1);
};

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that `idx` is valid before it is dereferenced.
///
/// # Panics (debug builds only)
/// Panics if `!seq.idx_valid(idx)`.
#[inline]
pub fn check_idx_valid<S: Sequence + ?Sized>(seq: &S, idx: S::Idx, op: &str) {
    debug_assert!(
        seq.idx_valid(idx),
        "Contract violation: {} - index {:?} is not valid (len {})",
        op,
        idx,
        seq.len()
    );
}

/// Check that `[first, last]` is a valid range.
///
/// # Panics (debug builds only)
/// Panics if `!seq.range_valid(first, last)`.
#[inline]
pub fn check_range_valid<S: Sequence + ?Sized>(seq: &S, first: S::Idx, last: S::Idx, op: &str) {
    debug_assert!(
        seq.range_valid(first, last),
        "Contract violation: {} - range {:?}..={:?} is not valid (len {})",
        op,
        first,
        last,
        seq.len()
    );
}

/// Check that the container's first-to-last span agrees with its length.
///
/// # Panics (debug builds only)
/// Panics if `len_between(first_idx(), last_idx()) != len()`.
#[inline]
pub fn check_len_between<S: Sequence + ?Sized>(seq: &S) {
    let span = seq.len_between(seq.first_idx(), seq.last_idx());
    debug_assert_eq!(
        span,
        seq.len(),
        "Contract violation: len_between(first, last) = {} but len() = {}",
        span,
        seq.len()
    );
}

/// Check that a split point lies within the range it splits.
///
/// # Panics (debug builds only)
/// Panics if `[first, mid]` or `[mid, last]` is not a valid range.
#[inline]
pub fn check_split_in_range<S: Sequence + ?Sized>(seq: &S, first: S::Idx, mid: S::Idx, last: S::Idx) {
    debug_assert!(
        seq.range_valid(first, mid) && seq.range_valid(mid, last),
        "Contract violation: split_range({:?}, {:?}) returned {:?}, outside the range",
        first,
        last,
        mid
    );
}

// ============================================================================
// GROWTH CONTRACTS
// ============================================================================

/// Check that `n` slots are free before they are committed.
///
/// Only meaningful for containers whose `cap()` reports real headroom; the
/// file adapter reports `cap() == len()` and does not call this.
///
/// # Panics (debug builds only)
/// Panics if `cap() - len() < n`.
#[inline]
pub fn check_free_slots<S: GrowableSequence + ?Sized>(seq: &S, n: usize) {
    debug_assert!(
        seq.cap().saturating_sub(seq.len()) >= n,
        "Contract violation: {} slots committed with only {} free (len {}, cap {})",
        n,
        seq.cap().saturating_sub(seq.len()),
        seq.len(),
        seq.cap()
    );
}

/// Check that a reservation made by an unchecked growth helper succeeded.
///
/// # Panics (debug builds only)
/// Panics if `reserved` is false.
#[inline]
pub fn check_reserved(reserved: bool, n: usize, op: &str) {
    debug_assert!(
        reserved,
        "Contract violation: {} - could not reserve {} free slots; use the try_ variant",
        op, n
    );
}

// ============================================================================
// ORDER CONTRACTS
// ============================================================================

/// Check that no element is greater than its successor.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair out of order.
#[inline]
pub fn check_sorted<S, G>(seq: &S, greater: G)
where
    S: Sequence + ?Sized,
    G: Fn(&S::Item, &S::Item) -> bool,
{
    if !cfg!(debug_assertions) {
        return;
    }
    let mut prev = seq.first_idx();
    if !seq.idx_valid(prev) {
        return;
    }
    let mut curr = seq.next_idx(prev);
    while seq.idx_valid(curr) {
        debug_assert!(
            !greater(&seq.get(prev), &seq.get(curr)),
            "Contract violation: Sorted - element at {:?} is greater than its successor at {:?}",
            prev,
            curr
        );
        prev = curr;
        curr = seq.next_idx(curr);
    }
}

// ============================================================================
// HINT CONTRACTS
// ============================================================================

/// Check that the capability hints describe the container truthfully.
///
/// - `ALL_INDEXES_LESS_THAN_LEN_VALID`: every integer index below `len()` is
///   valid.
/// - `CONSECUTIVE_INDEXES_IN_ORDER`: walking with `next_idx` from the first
///   index visits `0, 1, 2, ...` in that order.
///
/// # Panics (debug builds only)
/// Panics at the first index that contradicts a hint the container reports.
pub fn check_hints<S: Sequence + ?Sized>(seq: &S) {
    if !cfg!(debug_assertions) {
        return;
    }
    check_len_between(seq);

    if S::ALL_INDEXES_LESS_THAN_LEN_VALID {
        for n in 0..seq.len() {
            let idx = S::Idx::from_usize(n);
            debug_assert!(
                seq.idx_valid(idx),
                "Contract violation: ALL_INDEXES_LESS_THAN_LEN_VALID - index {:?} < len {} is not valid",
                idx,
                seq.len()
            );
        }
    }

    if S::CONSECUTIVE_INDEXES_IN_ORDER {
        let mut idx = seq.first_idx();
        let mut n = 0usize;
        while seq.idx_valid(idx) {
            debug_assert_eq!(
                idx,
                S::Idx::from_usize(n),
                "Contract violation: CONSECUTIVE_INDEXES_IN_ORDER - position {} has index {:?}",
                n,
                idx
            );
            idx = seq.next_idx(idx);
            n += 1;
        }
    }
}
