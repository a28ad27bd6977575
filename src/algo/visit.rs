//! Walk a sequence in logical order, applying an action per element.

use serde::Serialize;

use crate::algo::list::push;
use crate::sequence::{GrowableSequence, Sequence};

/// Outcome of [`for_each_until`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisitReport<I> {
    /// Where the walk stopped: the index the action asked to stop at, or the
    /// first invalid index past the range.
    pub stopped_at: I,
    /// Actions performed, including the one that asked to stop.
    pub visited: usize,
    /// The walk ran off the end of the range rather than being stopped.
    pub reached_end: bool,
}

pub fn for_each<S, F>(seq: &S, mut action: F)
where
    S: Sequence + ?Sized,
    F: FnMut(S::Idx, S::Item),
{
    let mut idx = seq.first_idx();
    while seq.idx_valid(idx) {
        action(idx, seq.get(idx));
        idx = seq.next_idx(idx);
    }
}

/// Visit `[first, last]`. Does nothing if the range is invalid.
pub fn for_each_in_range<S, F>(seq: &S, first: S::Idx, last: S::Idx, mut action: F)
where
    S: Sequence + ?Sized,
    F: FnMut(S::Idx, S::Item),
{
    if !seq.range_valid(first, last) {
        return;
    }
    let mut idx = first;
    loop {
        action(idx, seq.get(idx));
        if idx == last {
            break;
        }
        idx = seq.next_idx(idx);
    }
}

/// Visit from `first` until `action` returns `true` or the sequence ends.
pub fn for_each_until<S, F>(seq: &S, first: S::Idx, mut action: F) -> VisitReport<S::Idx>
where
    S: Sequence + ?Sized,
    F: FnMut(S::Idx, S::Item) -> bool,
{
    let mut idx = first;
    let mut visited = 0;
    while seq.idx_valid(idx) {
        visited += 1;
        if action(idx, seq.get(idx)) {
            return VisitReport {
                stopped_at: idx,
                visited,
                reached_end: false,
            };
        }
        idx = seq.next_idx(idx);
    }
    VisitReport {
        stopped_at: idx,
        visited,
        reached_end: true,
    }
}

/// Append to `dest` the index of every element matching `pred`. Returns the
/// number appended.
pub fn filter_indexes<S, D, P>(seq: &S, dest: &mut D, mut pred: P) -> usize
where
    S: Sequence + ?Sized,
    D: GrowableSequence<Item = S::Idx> + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut matched = 0;
    for_each(seq, |idx, val| {
        if pred(&val) {
            push(&mut *dest, idx);
            matched += 1;
        }
    });
    matched
}

/// Replace every element with `f(element)`.
pub fn map_values<S, F>(seq: &mut S, mut f: F)
where
    S: Sequence + ?Sized,
    F: FnMut(S::Item) -> S::Item,
{
    let mut idx = seq.first_idx();
    while seq.idx_valid(idx) {
        let val = f(seq.get(idx));
        seq.set(idx, val);
        idx = seq.next_idx(idx);
    }
}

/// Left fold in logical order.
pub fn accumulate<S, A, F>(seq: &S, init: A, mut f: F) -> A
where
    S: Sequence + ?Sized,
    F: FnMut(A, S::Item) -> A,
{
    let mut acc = init;
    let mut idx = seq.first_idx();
    while seq.idx_valid(idx) {
        acc = f(acc, seq.get(idx));
        idx = seq.next_idx(idx);
    }
    acc
}
