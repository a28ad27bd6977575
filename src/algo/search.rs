// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Adaptive sorted search and insert.
//!
//! One locate routine answers three questions about a sorted sequence: is the
//! value present, where would it be inserted, and (by inserting there) what
//! does the sequence look like with it. The routine is parameterized by two
//! predicates, `equal(elem, val)` and `greater(elem, val)`, and picks its
//! strategy from the container's `PREFER_LINEAR_OPS` hint.
//!
//! # Strategies
//!
//! ```text
//! Binary:  lo ─────────── split ─────────── hi      narrow by halves
//!          exits: found | exit_lo (insert before lo) | exit_hi (after hi)
//!
//! Linear:  lo → → → → first elem >= val … hi        one step at a time
//!          exits: found | stop before greater | exit_hi (ran off hi)
//! ```
//!
//! # Duplicates
//!
//! When several elements equal the value, binary search may land on any of
//! them. Linear search lands on the first. Callers that need a specific
//! match among duplicates must make keys unique first.

use serde::Serialize;

use crate::contracts::{check_reserved, check_sorted, check_split_in_range};
use crate::sequence::{GrowableSequence, Sequence};

/// Raw result of a locate pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Locate<I> {
    /// Matching index when `found`, otherwise the index the value would be
    /// inserted before (or the last index, when `exit_hi`).
    pub idx: I,
    pub found: bool,
    /// The value sorts after the original upper bound.
    pub exit_hi: bool,
    /// The value sorts before the original lower bound.
    pub exit_lo: bool,
}

impl<I> Locate<I> {
    /// Whether inserting the value means appending past the upper bound.
    #[inline]
    pub fn appends(&self) -> bool {
        !self.found && self.exit_hi
    }
}

/// Where a value belongs in a sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsertPoint<I> {
    /// Insert before this index.
    At(I),
    /// The value sorts after every element.
    Append,
}

/// Search strategy. Chosen from `PREFER_LINEAR_OPS` unless called explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    Binary,
    Linear,
}

impl SearchStrategy {
    /// The strategy suited to `S`'s traversal cost.
    pub const fn for_sequence<S: Sequence + ?Sized>() -> Self {
        if S::PREFER_LINEAR_OPS {
            SearchStrategy::Linear
        } else {
            SearchStrategy::Binary
        }
    }
}

// ============================================================================
// LOCATE
// ============================================================================

/// Locate over the whole sequence with the given strategy.
pub fn locate_with<S, V, E, G>(
    seq: &S,
    val: &V,
    strategy: SearchStrategy,
    equal: E,
    greater: G,
) -> Locate<S::Idx>
where
    S: Sequence + ?Sized,
    V: ?Sized,
    E: Fn(&S::Item, &V) -> bool,
    G: Fn(&S::Item, &V) -> bool,
{
    let (lo, hi) = (seq.first_idx(), seq.last_idx());
    if !seq.idx_valid(lo) {
        return Locate {
            idx: lo,
            found: false,
            exit_hi: true,
            exit_lo: false,
        };
    }
    match strategy {
        SearchStrategy::Binary => binary_locate(seq, lo, hi, val, equal, greater),
        SearchStrategy::Linear => linear_locate(seq, lo, hi, val, equal, greater),
    }
}

/// Locate using the strategy `S` prefers.
pub fn locate<S, V, E, G>(seq: &S, val: &V, equal: E, greater: G) -> Locate<S::Idx>
where
    S: Sequence + ?Sized,
    V: ?Sized,
    E: Fn(&S::Item, &V) -> bool,
    G: Fn(&S::Item, &V) -> bool,
{
    locate_with(seq, val, SearchStrategy::for_sequence::<S>(), equal, greater)
}

/// Binary locate over the whole sequence regardless of the hint.
pub fn binary_search<S, V, E, G>(seq: &S, val: &V, equal: E, greater: G) -> Locate<S::Idx>
where
    S: Sequence + ?Sized,
    V: ?Sized,
    E: Fn(&S::Item, &V) -> bool,
    G: Fn(&S::Item, &V) -> bool,
{
    locate_with(seq, val, SearchStrategy::Binary, equal, greater)
}

/// Linear locate over the whole sequence regardless of the hint.
pub fn linear_search<S, V, E, G>(seq: &S, val: &V, equal: E, greater: G) -> Locate<S::Idx>
where
    S: Sequence + ?Sized,
    V: ?Sized,
    E: Fn(&S::Item, &V) -> bool,
    G: Fn(&S::Item, &V) -> bool,
{
    locate_with(seq, val, SearchStrategy::Linear, equal, greater)
}

fn binary_locate<S, V, E, G>(
    seq: &S,
    lo: S::Idx,
    hi: S::Idx,
    val: &V,
    equal: E,
    greater: G,
) -> Locate<S::Idx>
where
    S: Sequence + ?Sized,
    V: ?Sized,
    E: Fn(&S::Item, &V) -> bool,
    G: Fn(&S::Item, &V) -> bool,
{
    let (original_lo, original_hi) = (lo, hi);
    let (mut lo, mut hi) = (lo, hi);
    loop {
        let idx = seq.split_range(lo, hi);
        check_split_in_range(seq, lo, idx, hi);
        let probe = seq.get(idx);
        if equal(&probe, val) {
            return Locate {
                idx,
                found: true,
                exit_hi: false,
                exit_lo: false,
            };
        }
        if greater(&probe, val) {
            if idx == lo {
                return Locate {
                    idx,
                    found: false,
                    exit_hi: false,
                    exit_lo: idx == original_lo,
                };
            }
            hi = seq.prev_idx(idx);
        } else {
            if idx == hi {
                let exit_hi = idx == original_hi;
                return Locate {
                    idx: if exit_hi { idx } else { seq.next_idx(hi) },
                    found: false,
                    exit_hi,
                    exit_lo: false,
                };
            }
            lo = seq.next_idx(idx);
        }
    }
}

fn linear_locate<S, V, E, G>(
    seq: &S,
    lo: S::Idx,
    hi: S::Idx,
    val: &V,
    equal: E,
    greater: G,
) -> Locate<S::Idx>
where
    S: Sequence + ?Sized,
    V: ?Sized,
    E: Fn(&S::Item, &V) -> bool,
    G: Fn(&S::Item, &V) -> bool,
{
    let mut idx = lo;
    loop {
        let probe = seq.get(idx);
        if equal(&probe, val) {
            return Locate {
                idx,
                found: true,
                exit_hi: false,
                exit_lo: false,
            };
        }
        if greater(&probe, val) {
            return Locate {
                idx,
                found: false,
                exit_hi: false,
                exit_lo: idx == lo,
            };
        }
        if idx == hi {
            return Locate {
                idx,
                found: false,
                exit_hi: true,
                exit_lo: false,
            };
        }
        idx = seq.next_idx(idx);
    }
}

// ============================================================================
// PUBLIC OPERATIONS
// ============================================================================

/// Index of an element equal to `val`, if any.
pub fn sorted_search<S, V, E, G>(seq: &S, val: &V, equal: E, greater: G) -> Option<S::Idx>
where
    S: Sequence + ?Sized,
    V: ?Sized,
    E: Fn(&S::Item, &V) -> bool,
    G: Fn(&S::Item, &V) -> bool,
{
    let found = locate(seq, val, equal, greater);
    found.found.then_some(found.idx)
}

/// Where `val` would be inserted to keep the sequence sorted.
pub fn sorted_insert_index<S, V, E, G>(seq: &S, val: &V, equal: E, greater: G) -> InsertPoint<S::Idx>
where
    S: Sequence + ?Sized,
    V: ?Sized,
    E: Fn(&S::Item, &V) -> bool,
    G: Fn(&S::Item, &V) -> bool,
{
    let found = locate(seq, val, equal, greater);
    if found.appends() {
        InsertPoint::Append
    } else {
        InsertPoint::At(found.idx)
    }
}

/// Insert `val` at its sorted position. Returns the index it landed at.
pub fn sorted_insert<L, E, G>(list: &mut L, val: L::Item, equal: E, greater: G) -> L::Idx
where
    L: GrowableSequence + ?Sized,
    E: Fn(&L::Item, &L::Item) -> bool,
    G: Fn(&L::Item, &L::Item) -> bool,
{
    check_sorted(list, &greater);
    let point = sorted_insert_index(list, &val, equal, greater);
    let reserved = list.try_ensure_free_slots(1);
    check_reserved(reserved, 1, "sorted_insert");
    commit_insert(list, point, val)
}

/// Like [`sorted_insert`], but returns `None` without touching the list if
/// it cannot grow.
pub fn try_sorted_insert<L, E, G>(list: &mut L, val: L::Item, equal: E, greater: G) -> Option<L::Idx>
where
    L: GrowableSequence + ?Sized,
    E: Fn(&L::Item, &L::Item) -> bool,
    G: Fn(&L::Item, &L::Item) -> bool,
{
    check_sorted(list, &greater);
    let point = sorted_insert_index(list, &val, equal, greater);
    if !list.try_ensure_free_slots(1) {
        return None;
    }
    Some(commit_insert(list, point, val))
}

fn commit_insert<L: GrowableSequence + ?Sized>(
    list: &mut L,
    point: InsertPoint<L::Idx>,
    val: L::Item,
) -> L::Idx {
    let (idx, _) = match point {
        InsertPoint::Append => list.append_slots_assume_capacity(1),
        InsertPoint::At(idx) => list.insert_slots_assume_capacity(idx, 1),
    };
    list.set(idx, val);
    idx
}

// ============================================================================
// IMPLICIT (Ord) VARIANTS
// ============================================================================

pub fn sorted_search_implicit<S>(seq: &S, val: &S::Item) -> Option<S::Idx>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    sorted_search(seq, val, |a, b| a == b, |a, b| a > b)
}

pub fn sorted_insert_index_implicit<S>(seq: &S, val: &S::Item) -> InsertPoint<S::Idx>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    sorted_insert_index(seq, val, |a, b| a == b, |a, b| a > b)
}

pub fn sorted_insert_implicit<L>(list: &mut L, val: L::Item) -> L::Idx
where
    L: GrowableSequence + ?Sized,
    L::Item: Ord,
{
    sorted_insert(list, val, |a, b| a == b, |a, b| a > b)
}

pub fn try_sorted_insert_implicit<L>(list: &mut L, val: L::Item) -> Option<L::Idx>
where
    L: GrowableSequence + ?Sized,
    L::Item: Ord,
{
    try_sorted_insert(list, val, |a, b| a == b, |a, b| a > b)
}
