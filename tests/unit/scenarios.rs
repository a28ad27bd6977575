//! Worked examples run against every adapter that can hold them.

use super::common::{collect, file_with, gapped, letters, nth, read_back};
use seqlike::algo::{list, search, seq, InsertPoint};
use seqlike::testing::LinkedSeq;
use seqlike::{FileSeq, GrowableSequence, Sequence, SharedSeq, SliceSeq, VecSeq};

// ============================================================================
// SORTED INSERT AND SEARCH
// ============================================================================

#[test]
fn sorted_insert_fills_the_gap() {
    let mut v = gapped();
    let idx = search::sorted_insert_implicit(&mut VecSeq::new(&mut v), 5);
    assert_eq!(idx, 5);
    assert_eq!(v, (0..=10).collect::<Vec<_>>());

    let shared = SharedSeq::new(gapped());
    let mut handle = shared.clone();
    assert_eq!(search::sorted_insert_implicit(&mut handle, 5), 5);
    assert_eq!(shared.to_vec(), (0..=10).collect::<Vec<_>>());
}

#[test]
fn search_in_empty_finds_nothing() {
    let empty: SliceSeq<'static, i32> = SliceSeq::new(vec![]);
    assert_eq!(search::sorted_search_implicit(&empty, &5), None);
    assert_eq!(search::sorted_insert_index_implicit(&empty, &5), InsertPoint::Append);

    let mut v = Vec::new();
    assert_eq!(search::sorted_insert_implicit(&mut VecSeq::new(&mut v), 5), 0);
    assert_eq!(v, vec![5]);
}

#[test]
fn smaller_value_goes_in_front_of_equal_run() {
    let mut v = vec![6, 6, 6, 6];
    {
        let s = VecSeq::new(&mut v);
        assert_eq!(search::sorted_search_implicit(&s, &5), None);
        assert_eq!(search::sorted_insert_index_implicit(&s, &5), InsertPoint::At(0));
    }
    assert_eq!(search::sorted_insert_implicit(&mut VecSeq::new(&mut v), 5), 0);
    assert_eq!(v, vec![5, 6, 6, 6, 6]);
}

#[test]
fn sorted_insert_into_file_bytes() {
    let mut file = file_with(b"aceg");
    {
        let mut s = FileSeq::new(&mut file).unwrap();
        assert_eq!(search::sorted_insert_implicit(&mut s, b'd'), 2);
        assert_eq!(search::sorted_insert_implicit(&mut s, b'z'), 5);
        assert!(s.take_last_error().is_none());
    }
    assert_eq!(read_back(&mut file), b"acdegz");
}

// ============================================================================
// DELETE RANGE
// ============================================================================

#[test]
fn delete_range_closes_the_gap() {
    let mut v = letters();
    list::delete_range(&mut VecSeq::new(&mut v), 2, 4);
    assert_eq!(v, vec!['a', 'b', 'f']);

    let mut linked = LinkedSeq::from_vec(letters());
    let (first, last) = (nth(&linked, 2), nth(&linked, 4));
    list::delete_range(&mut linked, first, last);
    assert_eq!(linked.to_vec(), vec!['a', 'b', 'f']);

    let mut file = file_with(b"abcdef");
    {
        let mut s = FileSeq::new(&mut file).unwrap();
        list::delete_range(&mut s, 2, 4);
        assert_eq!(s.len(), 3);
    }
    assert_eq!(read_back(&mut file), b"abf");
}

// ============================================================================
// MOVE RANGE
// ============================================================================

#[test]
fn move_range_block_begins_at_new_first() {
    let mut s = SliceSeq::new(letters());
    s.move_range(1, 2, 3);
    assert_eq!(s.as_slice(), ['a', 'd', 'e', 'b', 'c', 'f']);

    let mut s = SliceSeq::new(letters());
    s.move_range(1, 2, 4);
    assert_eq!(s.as_slice(), ['a', 'd', 'e', 'f', 'b', 'c']);
}

#[test]
fn move_range_agrees_across_adapters() {
    let mut linked = LinkedSeq::from_vec(letters());
    let (first, last, to) = (nth(&linked, 1), nth(&linked, 2), nth(&linked, 3));
    linked.move_range(first, last, to);
    assert_eq!(linked.to_vec(), vec!['a', 'd', 'e', 'b', 'c', 'f']);

    let mut file = file_with(b"abcdef");
    {
        let mut s = FileSeq::new(&mut file).unwrap();
        s.move_range(1, 2, 3);
    }
    assert_eq!(read_back(&mut file), b"adebcf");

    let shared = SharedSeq::new(letters());
    let mut handle = shared.clone();
    handle.move_range(3, 4, 1);
    assert_eq!(shared.to_vec(), vec!['a', 'd', 'e', 'b', 'c', 'f']);
}

#[test]
fn try_move_range_refuses_overhang() {
    let mut s = SliceSeq::new(letters());
    assert!(!seq::try_move_range(&mut s, 1, 2, 5));
    assert!(!seq::try_move_range(&mut s, 2, 1, 0));
    assert_eq!(collect(&s), letters());
    assert!(seq::try_move_range(&mut s, 0, 1, 4));
    assert_eq!(s.as_slice(), ['c', 'd', 'e', 'f', 'a', 'b']);
}

// ============================================================================
// GROWTH
// ============================================================================

#[test]
fn reserve_then_commit_never_reallocates() {
    let mut v: Vec<u32> = Vec::new();
    let mut s = VecSeq::new(&mut v);
    assert!(s.try_ensure_free_slots(8));
    let cap = s.cap();
    assert!(cap >= 8);
    for i in 0..8 {
        let (idx, _) = s.append_slots_assume_capacity(1);
        s.set(idx, i);
    }
    assert_eq!(s.cap(), cap);
    assert_eq!(s.as_slice(), [0, 1, 2, 3, 4, 5, 6, 7]);
}
