//! Structural identities that hold on every growable adapter.

use std::io::Cursor;

use super::common::collect;
use proptest::prelude::*;
use seqlike::algo::{copy, list, seq};
use seqlike::testing::LinkedSeq;
use seqlike::{FileSeq, GrowableSequence, SharedSeq, SliceSeq, VecSeq};

/// Append `vals` into fresh slots, then delete exactly those slots.
fn append_then_delete<L>(s: &mut L, vals: &[u8])
where
    L: GrowableSequence<Item = u8> + ?Sized,
{
    let (first, last) = list::append_slots(s, vals.len());
    let report = copy::copy_to_range(&SliceSeq::new(vals.to_vec()), s, first, last);
    assert_eq!(report.copied, vals.len());
    list::delete_range(s, first, last);
}

/// Move every element onto itself.
fn move_each_onto_itself<L>(s: &mut L)
where
    L: GrowableSequence<Item = u8> + ?Sized,
{
    for n in 0..s.len() {
        let idx = seq::nth_idx(s, n);
        s.move_item(idx, idx);
    }
}

fn bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn append_delete_restores_contents(init in bytes(24), vals in prop::collection::vec(any::<u8>(), 1..12)) {
        let mut backing = init.clone();
        append_then_delete(&mut VecSeq::new(&mut backing), &vals);
        prop_assert_eq!(&backing, &init);

        let shared = SharedSeq::new(init.clone());
        append_then_delete(&mut shared.clone(), &vals);
        prop_assert_eq!(shared.to_vec(), init.clone());

        let mut linked = LinkedSeq::from_vec(init.clone());
        append_then_delete(&mut linked, &vals);
        prop_assert_eq!(linked.to_vec(), init.clone());

        let mut store = Cursor::new(init.clone());
        let mut file = FileSeq::new(&mut store).unwrap();
        append_then_delete(&mut file, &vals);
        prop_assert_eq!(collect(&file), init.clone());
        drop(file);
        prop_assert_eq!(store.into_inner(), init);
    }

    #[test]
    fn move_onto_itself_is_identity(init in bytes(24)) {
        let mut backing = init.clone();
        move_each_onto_itself(&mut VecSeq::new(&mut backing));
        prop_assert_eq!(&backing, &init);

        let mut linked = LinkedSeq::from_vec(init.clone());
        move_each_onto_itself(&mut linked);
        prop_assert_eq!(linked.to_vec(), init.clone());

        let mut store = Cursor::new(init.clone());
        let mut file = FileSeq::new(&mut store).unwrap();
        move_each_onto_itself(&mut file);
        prop_assert_eq!(collect(&file), init);
    }
}
