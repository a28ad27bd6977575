//! UTF-8 encode/decode over byte sequences.
//!
//! Works on any `Sequence<Item = u8>`, so a file adapter can be scanned rune
//! by rune without loading it. Validation is delegated to
//! [`std::str::from_utf8`] once the lead byte has fixed the width, which
//! rejects overlong forms and surrogates.

use serde::Serialize;

use crate::algo::list::try_append_values;
use crate::sequence::{GrowableSequence, Sequence};

/// Result of decoding one rune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuneRead {
    /// The decoded character, or U+FFFD.
    pub ch: char,
    /// Bytes consumed: 1 for an invalid sequence, 0 at an invalid index.
    pub width: usize,
    pub valid: bool,
}

const INVALID: RuneRead = RuneRead {
    ch: char::REPLACEMENT_CHARACTER,
    width: 1,
    valid: false,
};

/// Width implied by a lead byte, 0 if it cannot start a sequence.
fn lead_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

pub fn read_rune<S>(seq: &S, idx: S::Idx) -> RuneRead
where
    S: Sequence<Item = u8> + ?Sized,
{
    if !seq.idx_valid(idx) {
        return RuneRead { width: 0, ..INVALID };
    }
    let lead = seq.get(idx);
    let width = lead_width(lead);
    if width == 0 {
        return INVALID;
    }

    let mut buf = [lead, 0, 0, 0];
    let mut at = idx;
    for slot in buf.iter_mut().take(width).skip(1) {
        at = seq.next_idx(at);
        if !seq.idx_valid(at) {
            return INVALID;
        }
        *slot = seq.get(at);
    }

    match std::str::from_utf8(&buf[..width]).ok().and_then(|s| s.chars().next()) {
        Some(ch) => RuneRead { ch, width, valid: true },
        None => INVALID,
    }
}

/// Encode `ch` at `idx`, overwriting. Returns the width written, or `None`
/// (writing nothing) if the sequence has no room from `idx`.
pub fn write_rune<S>(seq: &mut S, idx: S::Idx, ch: char) -> Option<usize>
where
    S: Sequence<Item = u8> + ?Sized,
{
    let mut buf = [0u8; 4];
    let bytes = ch.encode_utf8(&mut buf).as_bytes();
    if !seq.idx_valid(idx) || !seq.idx_valid(seq.nth_next_idx(idx, bytes.len() - 1)) {
        return None;
    }
    let mut at = idx;
    for &b in bytes {
        seq.set(at, b);
        at = seq.next_idx(at);
    }
    Some(bytes.len())
}

/// Encode `ch` onto the end of `list`. `None` if the list cannot grow.
pub fn append_rune<L>(list: &mut L, ch: char) -> Option<usize>
where
    L: GrowableSequence<Item = u8> + ?Sized,
{
    let mut buf = [0u8; 4];
    let bytes = ch.encode_utf8(&mut buf).as_bytes();
    try_append_values(list, bytes).then_some(bytes.len())
}

#[inline]
pub fn rune_len(ch: char) -> usize {
    ch.len_utf8()
}

/// Runes from the first index to the end, invalid bytes counting one each.
pub fn count_runes<S>(seq: &S) -> usize
where
    S: Sequence<Item = u8> + ?Sized,
{
    let mut idx = seq.first_idx();
    let mut count = 0;
    while seq.idx_valid(idx) {
        let width = read_rune(seq, idx).width;
        idx = seq.nth_next_idx(idx, width);
        count += 1;
    }
    count
}
