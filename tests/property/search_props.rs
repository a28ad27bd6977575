//! Sorted search and insert: both strategies against the lower-bound oracle.

use super::oracles::oracle_lower_bound;
use proptest::prelude::*;
use seqlike::algo::{search, sort, InsertPoint};
use seqlike::testing::LinkedSeq;
use seqlike::{SliceSeq, VecSeq};

fn sorted_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40).prop_map(|mut v| {
        v.sort();
        v
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Binary and linear locate agree on presence, and a hit is a real match.
    #[test]
    fn strategies_agree(v in sorted_vec(), target in -60i32..60) {
        let s = SliceSeq::new(v.clone());
        let eq = |a: &i32, b: &i32| a == b;
        let gt = |a: &i32, b: &i32| a > b;
        let bin = search::binary_search(&s, &target, eq, gt);
        let lin = search::linear_search(&s, &target, eq, gt);

        prop_assert_eq!(bin.found, lin.found);
        prop_assert_eq!(bin.found, v.contains(&target));
        if bin.found {
            prop_assert_eq!(v[bin.idx], target);
            prop_assert_eq!(v[lin.idx], target);
        } else {
            prop_assert_eq!(bin.appends(), lin.appends());
            if !bin.appends() {
                prop_assert_eq!(bin.idx, lin.idx);
            }
        }
    }

    /// A miss reports the lower bound as its insertion point.
    #[test]
    fn insert_point_is_lower_bound(v in sorted_vec(), target in -60i32..60) {
        prop_assume!(!v.contains(&target));
        let s = SliceSeq::new(v.clone());
        let expected = match oracle_lower_bound(&v, &target) {
            i if i == v.len() => InsertPoint::Append,
            i => InsertPoint::At(i),
        };
        prop_assert_eq!(search::sorted_insert_index_implicit(&s, &target), expected);
    }

    /// Sorted insert keeps order on both a contiguous and a linked container.
    #[test]
    fn sorted_insert_keeps_order(v in sorted_vec(), vals in prop::collection::vec(-60i32..60, 1..10)) {
        let mut oracle = v.clone();
        let mut backing = v.clone();
        let mut linked = LinkedSeq::from_vec(v);
        for &val in &vals {
            let at = oracle_lower_bound(&oracle, &val);
            oracle.insert(at, val);

            let idx = search::sorted_insert_implicit(&mut VecSeq::new(&mut backing), val);
            prop_assert_eq!(backing[idx], val);
            search::sorted_insert_implicit(&mut linked, val);
        }
        prop_assert_eq!(&backing, &oracle);
        prop_assert_eq!(linked.to_vec(), oracle);
    }

    /// Insertion sort yields the same order as the standard sort.
    #[test]
    fn insertion_sort_matches_std(mut v in prop::collection::vec(any::<i16>(), 0..40)) {
        let mut s = SliceSeq::new(v.clone());
        sort::insertion_sort_implicit(&mut s);
        v.sort();
        prop_assert_eq!(s.as_slice(), v.as_slice());
        prop_assert!(sort::is_sorted_implicit(&s));
    }
}
