//! Rune decoding over arbitrary bytes.
//!
//! Valid input must decode exactly as `str::chars` does; any input must be
//! walked to the end without panicking, one byte per invalid sequence.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seqlike::utf8::{count_runes, read_rune};
use seqlike::SliceSeq;

fuzz_target!(|data: &[u8]| {
    let s = SliceSeq::new(data.to_vec());
    let mut idx = 0;
    let mut decoded = String::new();
    let mut all_valid = true;
    while idx < data.len() {
        let rune = read_rune(&s, idx);
        assert!(rune.width >= 1 && rune.width <= 4);
        all_valid &= rune.valid;
        decoded.push(rune.ch);
        idx += rune.width;
    }
    assert_eq!(idx, data.len());

    if let Ok(text) = std::str::from_utf8(data) {
        assert!(all_valid);
        assert_eq!(decoded, text);
        assert_eq!(count_runes(&s), text.chars().count());
    }
});
