//! Reference oracles for differential testing.
//!
//! Each operation is expressed once against a `Vec` and once against any
//! growable queue. Positions in an [`Op`] are raw and get folded into range
//! against the current length, so every generated script is valid.

use proptest::prelude::*;
use seqlike::algo::{list, queue, seq, sort};
use seqlike::{GrowableSequence, Queue, Sequence};

#[derive(Debug, Clone)]
pub enum Op {
    Insert { at: usize, vals: Vec<u8> },
    Delete { first: usize, count: usize },
    MoveRange { first: usize, count: usize, to: usize },
    Move { from: usize, to: usize },
    Pop,
    Discard(usize),
    Reverse,
    Sort,
}

pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (any::<usize>(), prop::collection::vec(any::<u8>(), 1..6))
            .prop_map(|(at, vals)| Op::Insert { at, vals }),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(first, count)| Op::Delete { first, count }),
        2 => (any::<usize>(), any::<usize>(), any::<usize>())
            .prop_map(|(first, count, to)| Op::MoveRange { first, count, to }),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(from, to)| Op::Move { from, to }),
        1 => Just(Op::Pop),
        1 => any::<usize>().prop_map(Op::Discard),
        1 => Just(Op::Reverse),
        1 => Just(Op::Sort),
    ]
}

pub fn script_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..24)
}

/// `(first, last)` positions of a non-empty block, or `None` when empty.
fn block(len: usize, first: usize, count: usize) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let first = first % len;
    let count = 1 + count % (len - first);
    Some((first, first + count - 1))
}

// =============================================================================
// ORACLE
// =============================================================================

pub fn apply_oracle(v: &mut Vec<u8>, op: &Op) {
    let len = v.len();
    match op {
        Op::Insert { at, vals } => {
            let at = at % (len + 1);
            v.splice(at..at, vals.iter().copied());
        }
        Op::Delete { first, count } => {
            if let Some((first, last)) = block(len, *first, *count) {
                v.drain(first..=last);
            }
        }
        Op::MoveRange { first, count, to } => {
            if let Some((first, last)) = block(len, *first, *count) {
                let moved: Vec<u8> = v.drain(first..=last).collect();
                let to = to % (len - moved.len() + 1);
                v.splice(to..to, moved);
            }
        }
        Op::Move { from, to } => {
            if len > 0 {
                let v0 = v.remove(from % len);
                v.insert(to % len, v0);
            }
        }
        Op::Pop => {
            v.pop();
        }
        Op::Discard(n) => {
            v.drain(..n % (len + 1));
        }
        Op::Reverse => v.reverse(),
        Op::Sort => v.sort(),
    }
}

// =============================================================================
// GENERIC
// =============================================================================

pub fn apply<L>(s: &mut L, op: &Op)
where
    L: GrowableSequence<Item = u8> + Queue + ?Sized,
{
    let len = s.len();
    match op {
        Op::Insert { at, vals } => {
            let at = at % (len + 1);
            if at == len {
                list::append_values(s, vals);
            } else {
                let idx = seq::nth_idx(s, at);
                list::insert_values(s, idx, vals);
            }
        }
        Op::Delete { first, count } => {
            if let Some((first, last)) = block(len, *first, *count) {
                let (first, last) = (seq::nth_idx(s, first), seq::nth_idx(s, last));
                list::delete_range(s, first, last);
            }
        }
        Op::MoveRange { first, count, to } => {
            if let Some((first, last)) = block(len, *first, *count) {
                let to = to % (len - (last - first + 1) + 1);
                let (first, last, to) = (
                    seq::nth_idx(s, first),
                    seq::nth_idx(s, last),
                    seq::nth_idx(s, to),
                );
                s.move_range(first, last, to);
            }
        }
        Op::Move { from, to } => {
            if len > 0 {
                let (from, to) = (seq::nth_idx(s, from % len), seq::nth_idx(s, to % len));
                s.move_item(from, to);
            }
        }
        Op::Pop => {
            list::try_pop(s);
        }
        Op::Discard(n) => queue::discard(s, n % (len + 1)),
        Op::Reverse => seq::reverse(s),
        Op::Sort => sort::insertion_sort_implicit(s),
    }
}

// =============================================================================
// SEARCH ORACLE
// =============================================================================

/// First position whose element is not less than `target`.
pub fn oracle_lower_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    arr.iter().position(|x| x >= target).unwrap_or(arr.len())
}
