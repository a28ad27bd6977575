// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random edit scripts against three adapters and a `Vec`.
//!
//! Positions are folded into range before use, so every script is valid and
//! any divergence from the `Vec` is a real bug, not a contract violation.

#![no_main]

use std::io::Cursor;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqlike::algo::{list, queue, seq};
use seqlike::testing::LinkedSeq;
use seqlike::{FileSeq, GrowableSequence, Queue, Sequence, VecSeq};

#[derive(Arbitrary, Debug)]
enum Op {
    Insert { at: u16, vals: Vec<u8> },
    Delete { first: u16, count: u16 },
    MoveRange { first: u16, count: u16, to: u16 },
    Swap { a: u16, b: u16 },
    Move { from: u16, to: u16 },
    Discard(u16),
}

#[derive(Arbitrary, Debug)]
struct Input {
    init: Vec<u8>,
    ops: Vec<Op>,
}

fn block(len: usize, first: u16, count: u16) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let first = first as usize % len;
    Some((first, first + count as usize % (len - first)))
}

fn apply_vec(v: &mut Vec<u8>, op: &Op) {
    let len = v.len();
    match *op {
        Op::Insert { at, ref vals } => {
            let at = at as usize % (len + 1);
            v.splice(at..at, vals.iter().copied());
        }
        Op::Delete { first, count } => {
            if let Some((first, last)) = block(len, first, count) {
                v.drain(first..=last);
            }
        }
        Op::MoveRange { first, count, to } => {
            if let Some((first, last)) = block(len, first, count) {
                let moved: Vec<u8> = v.drain(first..=last).collect();
                let to = to as usize % (len - moved.len() + 1);
                v.splice(to..to, moved);
            }
        }
        Op::Swap { a, b } => {
            if len > 0 {
                v.swap(a as usize % len, b as usize % len);
            }
        }
        Op::Move { from, to } => {
            if len > 0 {
                let moved = v.remove(from as usize % len);
                v.insert(to as usize % len, moved);
            }
        }
        Op::Discard(n) => {
            v.drain(..n as usize % (len + 1));
        }
    }
}

fn apply<L: GrowableSequence<Item = u8> + Queue>(s: &mut L, op: &Op) {
    let len = s.len();
    match *op {
        Op::Insert { at: pos, ref vals } => {
            let pos = pos as usize % (len + 1);
            if pos == len {
                list::append_values(s, vals);
            } else {
                let idx = seq::nth_idx(&*s, pos);
                list::insert_values(s, idx, vals);
            }
        }
        Op::Delete { first, count } => {
            if let Some((first, last)) = block(len, first, count) {
                let (first, last) = (seq::nth_idx(&*s, first), seq::nth_idx(&*s, last));
                list::delete_range(s, first, last);
            }
        }
        Op::MoveRange { first, count, to } => {
            if let Some((first, last)) = block(len, first, count) {
                let to = to as usize % (len - (last - first + 1) + 1);
                let (first, last, to) = (seq::nth_idx(&*s, first), seq::nth_idx(&*s, last), seq::nth_idx(&*s, to));
                s.move_range(first, last, to);
            }
        }
        Op::Swap { a, b } => {
            if len > 0 {
                let (a, b) = (seq::nth_idx(&*s, a as usize % len), seq::nth_idx(&*s, b as usize % len));
                seq::swap(s, a, b);
            }
        }
        Op::Move { from, to } => {
            if len > 0 {
                let (from, to) = (seq::nth_idx(&*s, from as usize % len), seq::nth_idx(&*s, to as usize % len));
                s.move_item(from, to);
            }
        }
        Op::Discard(n) => queue::discard(s, n as usize % (len + 1)),
    }
}

fn contents<S: Sequence<Item = u8>>(s: &S) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    let mut idx = s.first_idx();
    while s.idx_valid(idx) {
        out.push(s.get(idx));
        idx = s.next_idx(idx);
    }
    out
}

fuzz_target!(|input: Input| {
    let mut oracle = input.init.clone();
    let mut backing = input.init.clone();
    let mut linked = LinkedSeq::from_vec(input.init.clone());
    let mut store = Cursor::new(input.init);
    let mut file = FileSeq::new(&mut store).expect("cursor length is known");

    for op in input.ops.iter().take(64) {
        apply_vec(&mut oracle, op);
        apply(&mut VecSeq::new(&mut backing), op);
        apply(&mut linked, op);
        apply(&mut file, op);

        assert_eq!(backing, oracle, "vec diverged after {:?}", op);
        assert_eq!(linked.to_vec(), oracle, "linked diverged after {:?}", op);
        assert_eq!(contents(&file), oracle, "file diverged after {:?}", op);
    }
});
