// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Capability contracts.
//!
//! Four nested capability levels, each a trait:
//!
//! | Trait              | Adds                                              |
//! |--------------------|---------------------------------------------------|
//! | `Sequence`         | positional read/write, index stepping, views      |
//! | `GrowableSequence` | reserve-then-commit growth, range deletion        |
//! | `Queue`            | discard from the front without relocation         |
//! | `MemorySequence`   | borrowed access to elements that live in memory   |
//!
//! # Index validity
//!
//! Every stepping method returns an index even when no such position exists.
//! The returned value then fails `idx_valid`. Algorithms test and branch on
//! that instead of catching errors, which keeps one code path for in-memory
//! buffers, shared buffers, and files alike.
//!
//! # Capability hints
//!
//! The associated consts describe cost and layout. They select strategies
//! (binary vs linear search), never correctness: a container that reports a
//! hint wrongly still produces correct results, only at the wrong asymptotic
//! cost.

use std::ops::{Deref, DerefMut};

use crate::algo::rotate;
use crate::index::SeqIndex;

/// Minimum capability: a finite, ordered, positionally addressable container.
///
/// `len_between(first_idx(), last_idx())` must equal `len()`, including for
/// the empty container where both indices are invalid.
pub trait Sequence {
    /// Element type. Reads return clones.
    type Item: Clone;

    /// Index type. Opaque to algorithms.
    type Idx: SeqIndex;

    /// Restricted view over a sub-range, with the same contract.
    type View<'a>: Sequence<Item = Self::Item, Idx = Self::Idx>
    where
        Self: 'a;

    /// `len_between`, `nth_next_idx`, and `nth_prev_idx` are O(n).
    const PREFER_LINEAR_OPS: bool;

    /// Stepping through integers `0..len()` visits elements in logical order.
    const CONSECUTIVE_INDEXES_IN_ORDER: bool;

    /// Every index below `len()` is valid.
    const ALL_INDEXES_LESS_THAN_LEN_VALID: bool;

    /// Whether `idx` addresses an element.
    fn idx_valid(&self, idx: Self::Idx) -> bool;

    /// Whether `first` logically precedes or equals `last` and every index
    /// between and including them is valid.
    fn range_valid(&self, first: Self::Idx, last: Self::Idx) -> bool;

    /// An index at or near the logical middle of a valid range.
    ///
    /// The result must lie within `[first, last]`. Distance from the true
    /// middle only costs performance.
    fn split_range(&self, first: Self::Idx, last: Self::Idx) -> Self::Idx;

    fn get(&self, idx: Self::Idx) -> Self::Item;

    fn set(&mut self, idx: Self::Idx, val: Self::Item);

    fn first_idx(&self) -> Self::Idx;

    fn last_idx(&self) -> Self::Idx;

    fn next_idx(&self, idx: Self::Idx) -> Self::Idx;

    fn nth_next_idx(&self, idx: Self::Idx, n: usize) -> Self::Idx;

    fn prev_idx(&self, idx: Self::Idx) -> Self::Idx;

    fn nth_prev_idx(&self, idx: Self::Idx, n: usize) -> Self::Idx;

    fn len(&self) -> usize;

    /// Number of elements between and including `first` and `last`.
    fn len_between(&self, first: Self::Idx, last: Self::Idx) -> usize;

    /// A view over `[first, last]`. Assumes `range_valid(first, last)`.
    fn slice(&mut self, first: Self::Idx, last: Self::Idx) -> Self::View<'_>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Relocate the element at `old` to `new`, sliding everything in between
    /// one slot toward `old`.
    ///
    /// The default walks one step at a time from `old` toward `new`,
    /// overwriting as it goes.
    fn move_item(&mut self, old: Self::Idx, new: Self::Idx) {
        rotate::shift_one(self, old, new);
    }

    /// Relocate `[first, last]` so that it begins at `new_first`, keeping the
    /// order within both the moved block and the block it displaces.
    ///
    /// The default is a triple-reversal rotation built on `get`/`set`.
    fn move_range(&mut self, first: Self::Idx, last: Self::Idx, new_first: Self::Idx) {
        rotate::rotate_block(self, first, last, new_first);
    }
}

/// A sequence that can grow and shrink.
///
/// Growth is split into reservation and commit. Callers must see
/// `try_ensure_free_slots(n)` return `true` before any `*_assume_capacity`
/// call adding up to `n` slots, with no other mutation in between. Breaking
/// that ordering is a contract violation, not a checked error.
pub trait GrowableSequence: Sequence {
    /// Make room for `n` more elements without further reallocation.
    fn try_ensure_free_slots(&mut self, n: usize) -> bool;

    /// Open `count` new slots directly before `idx`, shifting `idx` and
    /// everything after it forward. Returns the first and last new slot.
    fn insert_slots_assume_capacity(&mut self, idx: Self::Idx, count: usize) -> (Self::Idx, Self::Idx);

    /// Open `count` new slots at the end. Returns the first and last new slot.
    fn append_slots_assume_capacity(&mut self, count: usize) -> (Self::Idx, Self::Idx);

    /// Remove `[first, last]`, shifting everything after `last` backward.
    fn delete_range(&mut self, first: Self::Idx, last: Self::Idx);

    /// Reset to empty. Capacity may or may not be retained.
    fn clear(&mut self);

    fn cap(&self) -> usize;
}

/// A sequence that can discard from the front.
pub trait Queue: Sequence {
    /// Logically drop the first `n` elements. The element previously `n`
    /// places from the front becomes the first. Discarding more than `len()`
    /// empties the queue.
    fn increment_start(&mut self, n: usize);
}

/// A sequence whose elements live in addressable memory.
///
/// File-backed containers do not implement this.
pub trait MemorySequence: Sequence {
    type Ref<'a>: Deref<Target = Self::Item>
    where
        Self: 'a;

    type RefMut<'a>: DerefMut<Target = Self::Item>
    where
        Self: 'a;

    /// Borrow the element at a valid index.
    fn get_ref(&self, idx: Self::Idx) -> Self::Ref<'_>;

    /// Mutably borrow the element at a valid index.
    fn get_mut(&mut self, idx: Self::Idx) -> Self::RefMut<'_>;
}

/// A growable sequence that also discards from the front.
pub trait GrowableQueue: GrowableSequence + Queue {}

impl<S: GrowableSequence + Queue> GrowableQueue for S {}
