//! UTF-8 over non-memory byte containers.

use super::common::{file_with, read_back};
use seqlike::utf8::{append_rune, count_runes, read_rune, write_rune};
use seqlike::{FileSeq, SharedSeq};

#[test]
fn file_runes_decode_in_place() {
    let mut file = file_with("naïve ☕".as_bytes());
    let s = FileSeq::new(&mut file).unwrap();
    assert_eq!(count_runes(&s), 7);
    let r = read_rune(&s, 2);
    assert_eq!((r.ch, r.width, r.valid), ('ï', 2, true));
    // Continuation byte read on its own.
    assert!(!read_rune(&s, 3).valid);
}

#[test]
fn append_and_overwrite_in_file() {
    let mut file = file_with(b"ab");
    {
        let mut s = FileSeq::new(&mut file).unwrap();
        assert_eq!(append_rune(&mut s, 'é'), Some(2));
        assert_eq!(write_rune(&mut s, 0, 'ß'), Some(2));
        // Three bytes do not fit in the last two.
        assert_eq!(write_rune(&mut s, 2, '€'), None);
    }
    assert_eq!(read_back(&mut file), "ßé".as_bytes());
}

#[test]
fn truncated_tail_counts_as_single_bytes() {
    let mut bytes = "€".as_bytes().to_vec();
    bytes.truncate(2);
    let s = SharedSeq::new(bytes);
    let r = read_rune(&s, 0);
    assert_eq!((r.ch, r.width, r.valid), (char::REPLACEMENT_CHARACTER, 1, false));
    assert_eq!(count_runes(&s), 2);
}
