//! Sorted insert and search over arbitrary values.
//!
//! Builds the same sorted set in a contiguous and a linked container, one
//! preferring binary search and the other linear, and checks both against
//! `Vec::partition_point`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seqlike::algo::{search, sort, InsertPoint};
use seqlike::testing::LinkedSeq;
use seqlike::{SliceSeq, VecSeq};

fuzz_target!(|data: (Vec<i16>, Vec<i16>)| {
    let (inserts, probes) = data;
    let mut oracle: Vec<i16> = Vec::new();
    let mut backing: Vec<i16> = Vec::new();
    let mut linked = LinkedSeq::default();

    for &val in inserts.iter().take(256) {
        oracle.insert(oracle.partition_point(|x| *x < val), val);
        search::sorted_insert_implicit(&mut VecSeq::new(&mut backing), val);
        search::sorted_insert_implicit(&mut linked, val);
    }
    assert_eq!(backing, oracle);
    assert_eq!(linked.to_vec(), oracle);

    let contiguous = SliceSeq::new(backing);
    assert!(sort::is_sorted_implicit(&contiguous));
    for probe in probes.iter().take(64) {
        let present = oracle.binary_search(probe).is_ok();
        let hit = search::sorted_search_implicit(&contiguous, probe);
        assert_eq!(hit.is_some(), present);
        if let Some(idx) = hit {
            assert_eq!(oracle[idx], *probe);
        }
        assert_eq!(search::sorted_search_implicit(&linked, probe).is_some(), present);

        if !present {
            let expected = match oracle.partition_point(|x| x < probe) {
                i if i == oracle.len() => InsertPoint::Append,
                i => InsertPoint::At(i),
            };
            assert_eq!(search::sorted_insert_index_implicit(&contiguous, probe), expected);
        }
    }
});
