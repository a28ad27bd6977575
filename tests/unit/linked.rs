//! Generic paths: a container whose indices are arena slots in reverse
//! logical order, so neither consecutive-index shortcut applies.

use super::common::{letters, nth};
use seqlike::algo::{list, search, seq, sort, InsertPoint, SearchStrategy};
use seqlike::testing::LinkedSeq;
use seqlike::{Sequence, SliceSeq, VecSeq};

#[test]
fn prefers_linear_search() {
    assert_eq!(SearchStrategy::for_sequence::<LinkedSeq<i32>>(), SearchStrategy::Linear);
    assert_eq!(SearchStrategy::for_sequence::<VecSeq<'static, i32>>(), SearchStrategy::Binary);
}

#[test]
fn sorted_insert_walks_to_position() {
    let mut list = LinkedSeq::from_vec(vec![1, 3, 5, 7]);
    let idx = search::sorted_insert_implicit(&mut list, 4);
    assert_eq!(list.get(idx), 4);
    assert_eq!(list.to_vec(), vec![1, 3, 4, 5, 7]);

    assert_eq!(search::sorted_insert_index_implicit(&list, &9), InsertPoint::Append);
    search::sorted_insert_implicit(&mut list, 9);
    search::sorted_insert_implicit(&mut list, 0);
    assert_eq!(list.to_vec(), vec![0, 1, 3, 4, 5, 7, 9]);
    assert!(search::sorted_search_implicit(&list, &6).is_none());
}

#[test]
fn unsorted_sparse_delete_uses_logical_order() {
    let mut list = LinkedSeq::from_vec(letters());
    // Targets given last-first, with a duplicate and a freed slot.
    let targets = vec![nth(&list, 4), nth(&list, 1), nth(&list, 4), 99];
    let mut removed = Vec::new();
    let n = list::remove_sparse(
        &mut list,
        &SliceSeq::new(targets),
        false,
        &mut VecSeq::new(&mut removed),
    );
    assert_eq!(n, 2);
    assert_eq!(removed, vec!['b', 'e']);
    assert_eq!(list.to_vec(), vec!['a', 'c', 'd', 'f']);
}

#[test]
fn insertion_sort_over_slots() {
    let mut list = LinkedSeq::from_vec(vec![4, 2, 5, 1, 3]);
    sort::insertion_sort_implicit(&mut list);
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    assert!(sort::is_sorted_implicit(&list));

    let first = list.first_idx();
    let landed = sort::sorted_set_and_resort_implicit(&mut list, first, 6);
    assert_eq!(landed, list.last_idx());
    assert_eq!(list.to_vec(), vec![2, 3, 4, 5, 6]);
}

#[test]
fn single_moves_and_reverse() {
    let mut list = LinkedSeq::from_vec(letters());
    let (b, e) = (nth(&list, 1), nth(&list, 4));
    assert!(seq::try_move(&mut list, b, e));
    assert_eq!(list.to_vec(), vec!['a', 'c', 'd', 'e', 'b', 'f']);

    let (first, last) = (nth(&list, 1), nth(&list, 3));
    seq::reverse_range(&mut list, first, last);
    assert_eq!(list.to_vec(), vec!['a', 'e', 'd', 'c', 'b', 'f']);
}

#[test]
fn replace_range_relinks_nodes() {
    let mut list = LinkedSeq::from_vec(letters());
    let (first, last) = (nth(&list, 1), nth(&list, 4));
    list::replace_range(&mut list, first, last, &SliceSeq::new(vec!['X', 'Y']));
    assert_eq!(list.to_vec(), vec!['a', 'X', 'Y', 'f']);
}
