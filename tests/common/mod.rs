//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};

use seqlike::testing::LinkedSeq;
use seqlike::Sequence;

// ============================================================================
// FIXTURES
// ============================================================================

pub fn letters() -> Vec<char> {
    vec!['a', 'b', 'c', 'd', 'e', 'f']
}

/// Sorted fixture with one gap at 5.
pub fn gapped() -> Vec<i32> {
    vec![0, 1, 2, 3, 4, 6, 7, 8, 9, 10]
}

// ============================================================================
// FILE STORES
// ============================================================================

/// An anonymous temporary file holding `bytes`.
pub fn file_with(bytes: &[u8]) -> File {
    let mut file = tempfile::tempfile().expect("create temp file");
    file.write_all(bytes).expect("seed temp file");
    file
}

/// Every byte currently in `file`, from offset 0.
pub fn read_back(file: &mut File) -> Vec<u8> {
    let mut out = Vec::new();
    file.seek(SeekFrom::Start(0)).expect("rewind");
    file.read_to_end(&mut out).expect("read temp file");
    out
}

// ============================================================================
// INDEX HELPERS
// ============================================================================

/// The index of the `n`th element of a linked fixture.
pub fn nth(list: &LinkedSeq<char>, n: usize) -> u32 {
    list.nth_next_idx(list.first_idx(), n)
}

/// Collect any sequence into a `Vec` by walking its indices.
pub fn collect<S: Sequence + ?Sized>(seq: &S) -> Vec<S::Item> {
    let mut out = Vec::with_capacity(seq.len());
    let mut idx = seq.first_idx();
    for _ in 0..seq.len() {
        out.push(seq.get(idx));
        idx = seq.next_idx(idx);
    }
    out
}
