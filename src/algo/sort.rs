//! Insertion sort and sortedness checks.
//!
//! Insertion sort only ever steps to a neighbour, so it costs the same on a
//! linked container as on a buffer. It is stable: equal elements keep their
//! relative order because only strictly greater predecessors are shifted.

use crate::sequence::Sequence;

/// Sort in place with `greater(a, b)` meaning `a` belongs after `b`.
pub fn insertion_sort<S, G>(seq: &mut S, greater: G)
where
    S: Sequence + ?Sized,
    G: Fn(&S::Item, &S::Item) -> bool,
{
    let first = seq.first_idx();
    if !seq.idx_valid(first) {
        return;
    }
    let mut i = seq.next_idx(first);
    while seq.idx_valid(i) {
        let carried = seq.get(i);
        let mut hole = i;
        while hole != first {
            let prev = seq.prev_idx(hole);
            let prev_val = seq.get(prev);
            if !greater(&prev_val, &carried) {
                break;
            }
            seq.set(hole, prev_val);
            hole = prev;
        }
        if hole != i {
            seq.set(hole, carried);
        }
        i = seq.next_idx(i);
    }
}

pub fn insertion_sort_implicit<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    insertion_sort(seq, |a, b| a > b);
}

/// Single adjacent-pair scan.
pub fn is_sorted<S, G>(seq: &S, greater: G) -> bool
where
    S: Sequence + ?Sized,
    G: Fn(&S::Item, &S::Item) -> bool,
{
    first_unsorted(seq, greater).is_none()
}

/// The index ending the first adjacent pair that is out of order.
pub fn first_unsorted<S, G>(seq: &S, greater: G) -> Option<S::Idx>
where
    S: Sequence + ?Sized,
    G: Fn(&S::Item, &S::Item) -> bool,
{
    let first = seq.first_idx();
    if !seq.idx_valid(first) {
        return None;
    }
    let mut prev_val = seq.get(first);
    let mut curr = seq.next_idx(first);
    while seq.idx_valid(curr) {
        let curr_val = seq.get(curr);
        if greater(&prev_val, &curr_val) {
            return Some(curr);
        }
        prev_val = curr_val;
        curr = seq.next_idx(curr);
    }
    None
}

pub fn is_sorted_implicit<S>(seq: &S) -> bool
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    is_sorted(seq, |a, b| a > b)
}

/// Write `val` at `idx` in an otherwise sorted sequence, then slide it to
/// its sorted position with a single `move_item`. Returns where it ended up.
pub fn sorted_set_and_resort<S, G>(seq: &mut S, idx: S::Idx, val: S::Item, greater: G) -> S::Idx
where
    S: Sequence + ?Sized,
    G: Fn(&S::Item, &S::Item) -> bool,
{
    seq.set(idx, val.clone());

    let mut target = idx;
    let mut next = seq.next_idx(target);
    while seq.idx_valid(next) && greater(&val, &seq.get(next)) {
        target = next;
        next = seq.next_idx(target);
    }
    if target != idx {
        seq.move_item(idx, target);
        return target;
    }

    let mut prev = seq.prev_idx(target);
    while seq.idx_valid(prev) && greater(&seq.get(prev), &val) {
        target = prev;
        prev = seq.prev_idx(target);
    }
    if target != idx {
        seq.move_item(idx, target);
    }
    target
}

pub fn sorted_set_and_resort_implicit<S>(seq: &mut S, idx: S::Idx, val: S::Item) -> S::Idx
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    sorted_set_and_resort(seq, idx, val, |a, b| a > b)
}
