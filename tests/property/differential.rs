//! Differential testing: every adapter against the `Vec` oracle.
//!
//! A script of random edits runs against the oracle and an adapter in
//! lockstep. After every step the adapter's logical contents must equal the
//! oracle's, whatever the adapter's index type or storage.

use std::io::Cursor;

use super::common::collect;
use super::oracles::{apply, apply_oracle, script_strategy};
use proptest::prelude::*;
use seqlike::contracts::check_len_between;
use seqlike::testing::LinkedSeq;
use seqlike::{FileSeq, SharedSeq, VecSeq};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn vec_adapter_matches_oracle(
        init in prop::collection::vec(any::<u8>(), 0..32),
        script in script_strategy(),
    ) {
        let mut oracle = init.clone();
        let mut backing = init;
        let mut s = VecSeq::new(&mut backing);
        for op in &script {
            apply_oracle(&mut oracle, op);
            apply(&mut s, op);
            prop_assert_eq!(s.as_slice(), oracle.as_slice(), "after {:?}", op);
        }
        drop(s);
        prop_assert_eq!(backing, oracle);
    }

    #[test]
    fn shared_adapter_matches_oracle(
        init in prop::collection::vec(any::<u8>(), 0..32),
        script in script_strategy(),
    ) {
        let mut oracle = init.clone();
        let observer = SharedSeq::new(init);
        let mut s = observer.clone();
        for op in &script {
            apply_oracle(&mut oracle, op);
            apply(&mut s, op);
            prop_assert_eq!(observer.to_vec(), oracle.clone(), "after {:?}", op);
        }
    }

    #[test]
    fn linked_adapter_matches_oracle(
        init in prop::collection::vec(any::<u8>(), 0..32),
        script in script_strategy(),
    ) {
        let mut oracle = init.clone();
        let mut s = LinkedSeq::from_vec(init);
        for op in &script {
            apply_oracle(&mut oracle, op);
            apply(&mut s, op);
            prop_assert_eq!(s.to_vec(), oracle.clone(), "after {:?}", op);
            check_len_between(&s);
        }
    }

    #[test]
    fn file_adapter_matches_oracle(
        init in prop::collection::vec(any::<u8>(), 0..32),
        script in script_strategy(),
    ) {
        let mut oracle = init.clone();
        let mut store = Cursor::new(init);
        let mut s = FileSeq::new(&mut store).unwrap();
        for op in &script {
            apply_oracle(&mut oracle, op);
            apply(&mut s, op);
            prop_assert_eq!(collect(&s), oracle.clone(), "after {:?}", op);
        }
        prop_assert_eq!(s.io_failures(), 0);
        let start = s.start_offset() as usize;
        drop(s);
        let bytes = store.into_inner();
        prop_assert_eq!(&bytes[start..], oracle.as_slice());
    }
}
