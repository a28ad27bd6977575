// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Growth and shrinkage for [`GrowableSequence`] containers.
//!
//! Each growing operation reserves before it commits. The plain forms assume
//! the reservation succeeds (debug builds check it); the `try_*` forms check
//! first and leave the container untouched on failure.
//!
//! Positions for insertion are either a valid index (insert before it) or
//! the end position `next_idx(last_idx())`, which appends.

use std::collections::HashMap;

use crate::algo::copy::{copy_from_range_to_range, copy_to_range};
use crate::contracts::{check_idx_valid, check_range_valid, check_reserved};
use crate::sequence::{GrowableSequence, Sequence};

/// The position one past the last element.
#[inline]
pub fn end_idx<L: Sequence + ?Sized>(list: &L) -> L::Idx {
    list.next_idx(list.last_idx())
}

// ============================================================================
// APPEND
// ============================================================================

pub fn append_slots<L: GrowableSequence + ?Sized>(list: &mut L, count: usize) -> (L::Idx, L::Idx) {
    let reserved = list.try_ensure_free_slots(count);
    check_reserved(reserved, count, "append_slots");
    list.append_slots_assume_capacity(count)
}

pub fn try_append_slots<L: GrowableSequence + ?Sized>(
    list: &mut L,
    count: usize,
) -> Option<(L::Idx, L::Idx)> {
    if !list.try_ensure_free_slots(count) {
        return None;
    }
    Some(list.append_slots_assume_capacity(count))
}

/// Append every element of `source`.
pub fn append<L, S>(list: &mut L, source: &S)
where
    L: GrowableSequence + ?Sized,
    S: Sequence<Item = L::Item> + ?Sized,
{
    let n = source.len();
    if n == 0 {
        return;
    }
    let (first, last) = append_slots(list, n);
    copy_to_range(source, list, first, last);
}

pub fn try_append<L, S>(list: &mut L, source: &S) -> bool
where
    L: GrowableSequence + ?Sized,
    S: Sequence<Item = L::Item> + ?Sized,
{
    let n = source.len();
    if n == 0 {
        return true;
    }
    match try_append_slots(list, n) {
        Some((first, last)) => {
            copy_to_range(source, list, first, last);
            true
        }
        None => false,
    }
}

pub fn append_values<L: GrowableSequence + ?Sized>(list: &mut L, vals: &[L::Item]) {
    if vals.is_empty() {
        return;
    }
    let (first, _) = append_slots(list, vals.len());
    write_values(list, first, vals);
}

pub fn try_append_values<L: GrowableSequence + ?Sized>(list: &mut L, vals: &[L::Item]) -> bool {
    if vals.is_empty() {
        return true;
    }
    match try_append_slots(list, vals.len()) {
        Some((first, _)) => {
            write_values(list, first, vals);
            true
        }
        None => false,
    }
}

fn write_values<L: Sequence + ?Sized>(list: &mut L, first: L::Idx, vals: &[L::Item]) {
    let mut idx = first;
    for val in vals {
        list.set(idx, val.clone());
        idx = list.next_idx(idx);
    }
}

// ============================================================================
// INSERT
// ============================================================================

/// Open `count` slots before `idx`, or at the end if `idx` is the end
/// position.
pub fn insert_slots<L: GrowableSequence + ?Sized>(
    list: &mut L,
    idx: L::Idx,
    count: usize,
) -> (L::Idx, L::Idx) {
    let reserved = list.try_ensure_free_slots(count);
    check_reserved(reserved, count, "insert_slots");
    commit_insert_slots(list, idx, count)
}

pub fn try_insert_slots<L: GrowableSequence + ?Sized>(
    list: &mut L,
    idx: L::Idx,
    count: usize,
) -> Option<(L::Idx, L::Idx)> {
    if !list.idx_valid(idx) && idx != end_idx(list) {
        return None;
    }
    if !list.try_ensure_free_slots(count) {
        return None;
    }
    Some(commit_insert_slots(list, idx, count))
}

fn commit_insert_slots<L: GrowableSequence + ?Sized>(
    list: &mut L,
    idx: L::Idx,
    count: usize,
) -> (L::Idx, L::Idx) {
    if idx == end_idx(list) {
        list.append_slots_assume_capacity(count)
    } else {
        check_idx_valid(list, idx, "insert_slots");
        list.insert_slots_assume_capacity(idx, count)
    }
}

/// Insert every element of `source` before `idx`.
pub fn insert<L, S>(list: &mut L, idx: L::Idx, source: &S)
where
    L: GrowableSequence + ?Sized,
    S: Sequence<Item = L::Item> + ?Sized,
{
    let n = source.len();
    if n == 0 {
        return;
    }
    let (first, last) = insert_slots(list, idx, n);
    copy_to_range(source, list, first, last);
}

pub fn try_insert<L, S>(list: &mut L, idx: L::Idx, source: &S) -> bool
where
    L: GrowableSequence + ?Sized,
    S: Sequence<Item = L::Item> + ?Sized,
{
    let n = source.len();
    if n == 0 {
        return list.idx_valid(idx) || idx == end_idx(list);
    }
    match try_insert_slots(list, idx, n) {
        Some((first, last)) => {
            copy_to_range(source, list, first, last);
            true
        }
        None => false,
    }
}

pub fn insert_values<L: GrowableSequence + ?Sized>(list: &mut L, idx: L::Idx, vals: &[L::Item]) {
    if vals.is_empty() {
        return;
    }
    let (first, _) = insert_slots(list, idx, vals.len());
    write_values(list, first, vals);
}

pub fn try_insert_values<L: GrowableSequence + ?Sized>(
    list: &mut L,
    idx: L::Idx,
    vals: &[L::Item],
) -> bool {
    if vals.is_empty() {
        return list.idx_valid(idx) || idx == end_idx(list);
    }
    match try_insert_slots(list, idx, vals.len()) {
        Some((first, _)) => {
            write_values(list, first, vals);
            true
        }
        None => false,
    }
}

// ============================================================================
// DELETE / REMOVE
// ============================================================================

/// Delete `count` elements starting at `idx`.
pub fn delete<L: GrowableSequence + ?Sized>(list: &mut L, idx: L::Idx, count: usize) {
    if count == 0 {
        return;
    }
    let last = list.nth_next_idx(idx, count - 1);
    delete_range(list, idx, last);
}

pub fn try_delete<L: GrowableSequence + ?Sized>(list: &mut L, idx: L::Idx, count: usize) -> bool {
    if count == 0 {
        return true;
    }
    let last = list.nth_next_idx(idx, count - 1);
    try_delete_range(list, idx, last)
}

pub fn delete_range<L: GrowableSequence + ?Sized>(list: &mut L, first: L::Idx, last: L::Idx) {
    check_range_valid(list, first, last, "delete_range");
    list.delete_range(first, last);
}

pub fn try_delete_range<L: GrowableSequence + ?Sized>(list: &mut L, first: L::Idx, last: L::Idx) -> bool {
    if !list.range_valid(first, last) {
        return false;
    }
    list.delete_range(first, last);
    true
}

/// Delete and return the element at `idx`.
pub fn remove<L: GrowableSequence + ?Sized>(list: &mut L, idx: L::Idx) -> L::Item {
    check_idx_valid(list, idx, "remove");
    let val = list.get(idx);
    list.delete_range(idx, idx);
    val
}

pub fn try_remove<L: GrowableSequence + ?Sized>(list: &mut L, idx: L::Idx) -> Option<L::Item> {
    if !list.idx_valid(idx) {
        return None;
    }
    Some(remove(list, idx))
}

/// Move `[first, last]` out of `list` onto the end of `dest`. Returns the
/// number of elements moved.
pub fn remove_range<L, D>(list: &mut L, first: L::Idx, last: L::Idx, dest: &mut D) -> usize
where
    L: GrowableSequence + ?Sized,
    D: GrowableSequence<Item = L::Item> + ?Sized,
{
    check_range_valid(list, first, last, "remove_range");
    let n = list.len_between(first, last);
    let (d_first, d_last) = append_slots(dest, n);
    copy_from_range_to_range(list, first, last, dest, d_first, d_last);
    list.delete_range(first, last);
    n
}

pub fn try_remove_range<L, D>(list: &mut L, first: L::Idx, last: L::Idx, dest: &mut D) -> bool
where
    L: GrowableSequence + ?Sized,
    D: GrowableSequence<Item = L::Item> + ?Sized,
{
    if !list.range_valid(first, last) {
        return false;
    }
    let n = list.len_between(first, last);
    let Some((d_first, d_last)) = try_append_slots(dest, n) else {
        return false;
    };
    copy_from_range_to_range(list, first, last, dest, d_first, d_last);
    list.delete_range(first, last);
    true
}

// ============================================================================
// REPLACE
// ============================================================================

/// Replace `[d_first, d_last]` with the whole of `source`, growing or
/// shrinking `list` by the difference in length.
pub fn replace_range<L, S>(list: &mut L, d_first: L::Idx, d_last: L::Idx, source: &S)
where
    L: GrowableSequence + ?Sized,
    S: Sequence<Item = L::Item> + ?Sized,
{
    check_range_valid(list, d_first, d_last, "replace_range");
    let report = copy_to_range(source, list, d_first, d_last);

    if report.source_exhausted && !report.dest_filled {
        list.delete_range(report.next_dest, d_last);
    } else if report.dest_filled && !report.source_exhausted {
        let s_last = source.last_idx();
        let remaining = source.len_between(report.next_source, s_last);
        let reserved = list.try_ensure_free_slots(remaining);
        check_reserved(reserved, remaining, "replace_range");
        let (first_new, last_new) = if list.last_idx() == d_last {
            list.append_slots_assume_capacity(remaining)
        } else {
            let after = list.next_idx(d_last);
            list.insert_slots_assume_capacity(after, remaining)
        };
        copy_from_range_to_range(source, report.next_source, s_last, list, first_new, last_new);
    }
}

pub fn try_replace_range<L, S>(list: &mut L, d_first: L::Idx, d_last: L::Idx, source: &S) -> bool
where
    L: GrowableSequence + ?Sized,
    S: Sequence<Item = L::Item> + ?Sized,
{
    if !list.range_valid(d_first, d_last) {
        return false;
    }
    let replaced = list.len_between(d_first, d_last);
    let growth = source.len().saturating_sub(replaced);
    if growth > 0 && !list.try_ensure_free_slots(growth) {
        return false;
    }
    replace_range(list, d_first, d_last, source);
    true
}

// ============================================================================
// PUSH / POP
// ============================================================================

pub fn push<L: GrowableSequence + ?Sized>(list: &mut L, val: L::Item) {
    push_get_idx(list, val);
}

pub fn try_push<L: GrowableSequence + ?Sized>(list: &mut L, val: L::Item) -> bool {
    match try_append_slots(list, 1) {
        Some((idx, _)) => {
            list.set(idx, val);
            true
        }
        None => false,
    }
}

/// Push and return the index the value landed at.
pub fn push_get_idx<L: GrowableSequence + ?Sized>(list: &mut L, val: L::Item) -> L::Idx {
    let (idx, _) = append_slots(list, 1);
    list.set(idx, val);
    idx
}

pub fn pop<L: GrowableSequence + ?Sized>(list: &mut L) -> L::Item {
    let last = list.last_idx();
    remove(list, last)
}

pub fn try_pop<L: GrowableSequence + ?Sized>(list: &mut L) -> Option<L::Item> {
    let last = list.last_idx();
    try_remove(list, last)
}

// ============================================================================
// SPARSE DELETE / REMOVE
// ============================================================================

/// Delete every element whose index appears in `indexes`, in one pass.
///
/// `indexes_sorted` promises that `indexes` is already in the list's logical
/// order; otherwise a sorted scratch copy is made. Invalid and duplicate
/// indices are ignored. Returns the number of elements deleted.
pub fn delete_sparse<L, I>(list: &mut L, indexes: &I, indexes_sorted: bool) -> usize
where
    L: GrowableSequence + ?Sized,
    I: Sequence<Item = L::Idx> + ?Sized,
{
    let targets = sparse_targets(list, indexes, indexes_sorted);
    compact_sparse(list, &targets, |_| {})
}

/// Like [`delete_sparse`], but the deleted elements are appended to `dest`
/// in the list's logical order.
pub fn remove_sparse<L, I, D>(list: &mut L, indexes: &I, indexes_sorted: bool, dest: &mut D) -> usize
where
    L: GrowableSequence + ?Sized,
    I: Sequence<Item = L::Idx> + ?Sized,
    D: GrowableSequence<Item = L::Item> + ?Sized,
{
    let targets = sparse_targets(list, indexes, indexes_sorted);
    let reserved = dest.try_ensure_free_slots(targets.len());
    check_reserved(reserved, targets.len(), "remove_sparse");
    compact_sparse(list, &targets, |val| push(&mut *dest, val))
}

/// Like [`remove_sparse`], but fails without touching either container if
/// `dest` cannot take every removed element.
pub fn try_remove_sparse<L, I, D>(
    list: &mut L,
    indexes: &I,
    indexes_sorted: bool,
    dest: &mut D,
) -> Option<usize>
where
    L: GrowableSequence + ?Sized,
    I: Sequence<Item = L::Idx> + ?Sized,
    D: GrowableSequence<Item = L::Item> + ?Sized,
{
    let targets = sparse_targets(list, indexes, indexes_sorted);
    if !dest.try_ensure_free_slots(targets.len()) {
        return None;
    }
    Some(compact_sparse(list, &targets, |val| push(&mut *dest, val)))
}

fn sparse_targets<L, I>(list: &L, indexes: &I, indexes_sorted: bool) -> Vec<L::Idx>
where
    L: Sequence + ?Sized,
    I: Sequence<Item = L::Idx> + ?Sized,
{
    let mut targets = Vec::with_capacity(indexes.len());
    let mut i = indexes.first_idx();
    while indexes.idx_valid(i) {
        let target = indexes.get(i);
        if list.idx_valid(target) {
            targets.push(target);
        }
        i = indexes.next_idx(i);
    }

    if !indexes_sorted {
        if L::CONSECUTIVE_INDEXES_IN_ORDER {
            targets.sort_unstable();
        } else {
            let mut rank = HashMap::with_capacity(list.len());
            let mut idx = list.first_idx();
            let mut pos = 0usize;
            while list.idx_valid(idx) {
                rank.insert(idx, pos);
                pos += 1;
                idx = list.next_idx(idx);
            }
            targets.sort_unstable_by_key(|t| rank.get(t).copied().unwrap_or(usize::MAX));
        }
    }
    targets.dedup();
    targets
}

/// Two-cursor compaction: `read` scans every element, `write` trails it and
/// receives each survivor. The vacated tail is deleted at the end.
fn compact_sparse<L, F>(list: &mut L, targets: &[L::Idx], mut on_removed: F) -> usize
where
    L: GrowableSequence + ?Sized,
    F: FnMut(L::Item),
{
    if targets.is_empty() {
        return 0;
    }
    let mut next_target = 0;
    let mut read = list.first_idx();
    let mut write = read;
    while list.idx_valid(read) {
        if next_target < targets.len() && read == targets[next_target] {
            on_removed(list.get(read));
            next_target += 1;
        } else {
            if write != read {
                let val = list.get(read);
                list.set(write, val);
            }
            write = list.next_idx(write);
        }
        read = list.next_idx(read);
    }
    if next_target > 0 {
        let last = list.last_idx();
        list.delete_range(write, last);
    }
    next_target
}
