//! File adapter over real temporary files.

use super::common::{file_with, read_back};
use seqlike::algo::{copy, list, queue, seq, sort, visit};
use seqlike::{FileOptions, FileSeq, GrowableSequence, Queue, Sequence, SliceSeq, VecSeq};

#[test]
fn front_insert_shifts_every_byte() {
    let mut file = file_with(b"world");
    {
        let mut s = FileSeq::new(&mut file).unwrap();
        list::insert_values(&mut s, 0, b"hello ");
        assert_eq!(s.len(), 11);
        assert_eq!(s.io_failures(), 0);
    }
    assert_eq!(read_back(&mut file), b"hello world");
}

#[test]
fn sort_and_reverse_in_place() {
    let mut file = file_with(b"dbeac");
    {
        let mut s = FileSeq::new(&mut file).unwrap();
        sort::insertion_sort_implicit(&mut s);
        assert!(sort::is_sorted_implicit(&s));
        seq::reverse_range(&mut s, 1, 3);
    }
    assert_eq!(read_back(&mut file), b"adcbe");
}

#[test]
fn dequeue_leaves_discarded_bytes_in_file() {
    let mut file = file_with(b"header:body");
    {
        let mut s = FileSeq::new(&mut file).unwrap();
        let mut head = Vec::new();
        let taken = queue::dequeue_append_to(&mut s, 7, &mut VecSeq::new(&mut head));
        assert_eq!(taken, 7);
        assert_eq!(head, b"header:");
        assert_eq!(s.start_offset(), 7);
        assert_eq!(s.get(0), b'b');
        list::push(&mut s, b'!');
    }
    assert_eq!(read_back(&mut file), b"header:body!");
}

#[test]
fn copy_between_file_and_memory() {
    let mut file = file_with(b"abcdef");
    let s = FileSeq::new(&mut file).unwrap();
    let mut dest = SliceSeq::new(vec![0u8; 4]);
    let report = copy::copy_from_pos(&s, 2, &mut dest);
    assert_eq!(report.copied, 4);
    assert_eq!(dest.as_slice(), b"cdef");
}

#[test]
fn view_window_sees_offset_bytes() {
    let mut file = file_with(b"0123456789");
    {
        let mut s = FileSeq::new(&mut file).unwrap();
        let mut view = s.slice(3, 6);
        assert_eq!(view.len(), 4);
        seq::fill(&mut view, b'-');
        view.increment_start(2);
        assert_eq!(view.len(), 2);
        assert_eq!(visit::accumulate(&view, 0usize, |n, b| n + usize::from(b == b'-')), 2);
    }
    assert_eq!(read_back(&mut file), b"012----789");
}

#[test]
fn growth_refused_past_max_len() {
    let mut file = file_with(b"abc");
    let opts = FileOptions {
        max_len: 4,
        ..FileOptions::default()
    };
    {
        let mut s = FileSeq::with_options(&mut file, opts).unwrap();
        assert!(!list::try_append_values(&mut s, b"de"));
        assert_eq!(s.len(), 3);
        assert!(list::try_append_values(&mut s, b"d"));
    }
    assert_eq!(read_back(&mut file), b"abcd");
}

#[test]
fn clear_truncates_to_discarded_front() {
    let mut file = file_with(b"keep|drop");
    {
        let mut s = FileSeq::new(&mut file).unwrap();
        s.increment_start(5);
        s.clear();
        assert!(s.is_empty());
    }
    assert_eq!(read_back(&mut file), b"keep|");
}
