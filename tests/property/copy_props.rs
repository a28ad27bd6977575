//! Copy, replace and queue transfers against slice arithmetic.

use proptest::prelude::*;
use seqlike::algo::{copy, list, queue};
use seqlike::testing::LinkedSeq;
use seqlike::{SliceSeq, VecSeq};

fn bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A bounded copy writes exactly `min(count, |src|, |dest|)` elements
    /// and leaves the rest of the destination alone.
    #[test]
    fn copy_count_writes_the_minimum(src in bytes(20), dest in bytes(20), count in 0usize..24) {
        let n = count.min(src.len()).min(dest.len());
        let mut expected = dest.clone();
        expected[..n].copy_from_slice(&src[..n]);

        let source = LinkedSeq::from_vec(src.clone());
        let mut d = SliceSeq::new(dest.clone());
        let report = copy::copy_count(&source, &mut d, count);

        prop_assert_eq!(report.copied, n);
        prop_assert_eq!(d.as_slice(), expected.as_slice());
        prop_assert_eq!(report.source_exhausted, n == src.len());
        prop_assert_eq!(report.dest_filled, n == dest.len());
    }

    /// Replacing a range equals a `Vec::splice` of the same range.
    #[test]
    fn replace_range_is_splice(
        init in prop::collection::vec(any::<u8>(), 1..20),
        first in any::<usize>(),
        count in any::<usize>(),
        with in prop::collection::vec(any::<u8>(), 1..12),
    ) {
        let first = first % init.len();
        let last = first + count % (init.len() - first);
        let mut expected = init.clone();
        expected.splice(first..=last, with.iter().copied());

        let mut v = init;
        prop_assert!(list::try_replace_range(
            &mut VecSeq::new(&mut v),
            first,
            last,
            &SliceSeq::new(with),
        ));
        prop_assert_eq!(v, expected);
    }

    /// Dequeue moves the front of the queue into the destination in order.
    #[test]
    fn dequeue_append_is_fifo(q in bytes(24), n in 0usize..30) {
        let taken = n.min(q.len());
        let mut queue_items = q.clone();
        let mut out = Vec::new();
        {
            let mut source = VecSeq::new(&mut queue_items);
            let got = queue::dequeue_append_to(&mut source, n, &mut VecSeq::new(&mut out));
            prop_assert_eq!(got, taken);
        }
        prop_assert_eq!(&out[..], &q[..taken]);
        prop_assert_eq!(&queue_items[..], &q[taken..]);
    }
}
