//! Front-of-queue operations over [`Queue`] containers.
//!
//! `peek_*` copies from the front without consuming; `dequeue_*` does the same
//! and then discards what was copied. Each comes in three destination modes:
//!
//! - `*_to`: overwrite the destination from its first slot
//! - `*_append_to`: append to a growable destination
//! - `*_overwrite`: clear a growable destination, then append

use crate::algo::copy::{copy_count, copy_count_from_range_to_range};
use crate::algo::list::{append_slots, try_append_slots};
use crate::sequence::{GrowableSequence, Queue, Sequence};

// ============================================================================
// DISCARD
// ============================================================================

pub fn discard<Q: Queue + ?Sized>(queue: &mut Q, count: usize) {
    queue.increment_start(count);
}

/// Discard exactly `count` elements, or nothing if fewer are queued.
pub fn try_discard<Q: Queue + ?Sized>(queue: &mut Q, count: usize) -> bool {
    if queue.len() < count {
        return false;
    }
    queue.increment_start(count);
    true
}

pub fn discard_all<Q: Queue + ?Sized>(queue: &mut Q) {
    let n = queue.len();
    queue.increment_start(n);
}

// ============================================================================
// PEEK
// ============================================================================

/// Copy up to `count` front elements over the start of `dest`. Returns the
/// number copied.
pub fn peek_to<Q, D>(queue: &Q, count: usize, dest: &mut D) -> usize
where
    Q: Queue + ?Sized,
    D: Sequence<Item = Q::Item> + ?Sized,
{
    copy_count(queue, dest, count).copied
}

/// Copy exactly `count` front elements over the start of `dest`, or nothing
/// if either side is too short.
pub fn try_peek_to<Q, D>(queue: &Q, count: usize, dest: &mut D) -> bool
where
    Q: Queue + ?Sized,
    D: Sequence<Item = Q::Item> + ?Sized,
{
    if queue.len() < count || dest.len() < count {
        return false;
    }
    peek_to(queue, count, dest);
    true
}

/// Append up to `count` front elements to `dest`. Returns the number copied.
pub fn peek_append_to<Q, D>(queue: &Q, count: usize, dest: &mut D) -> usize
where
    Q: Queue + ?Sized,
    D: GrowableSequence<Item = Q::Item> + ?Sized,
{
    let n = count.min(queue.len());
    if n == 0 {
        return 0;
    }
    let (d_first, d_last) = append_slots(dest, n);
    append_front(queue, n, dest, d_first, d_last)
}

pub fn try_peek_append_to<Q, D>(queue: &Q, count: usize, dest: &mut D) -> bool
where
    Q: Queue + ?Sized,
    D: GrowableSequence<Item = Q::Item> + ?Sized,
{
    if queue.len() < count {
        return false;
    }
    if count == 0 {
        return true;
    }
    match try_append_slots(dest, count) {
        Some((d_first, d_last)) => {
            append_front(queue, count, dest, d_first, d_last);
            true
        }
        None => false,
    }
}

/// Replace the contents of `dest` with up to `count` front elements.
pub fn peek_overwrite<Q, D>(queue: &Q, count: usize, dest: &mut D) -> usize
where
    Q: Queue + ?Sized,
    D: GrowableSequence<Item = Q::Item> + ?Sized,
{
    dest.clear();
    peek_append_to(queue, count, dest)
}

pub fn try_peek_overwrite<Q, D>(queue: &Q, count: usize, dest: &mut D) -> bool
where
    Q: Queue + ?Sized,
    D: GrowableSequence<Item = Q::Item> + ?Sized,
{
    if queue.len() < count {
        return false;
    }
    // Clearing frees `dest.len()` slots, so only the excess needs room.
    if !dest.try_ensure_free_slots(count.saturating_sub(dest.len())) {
        return false;
    }
    dest.clear();
    try_peek_append_to(queue, count, dest)
}

fn append_front<Q, D>(queue: &Q, n: usize, dest: &mut D, d_first: D::Idx, d_last: D::Idx) -> usize
where
    Q: Queue + ?Sized,
    D: Sequence<Item = Q::Item> + ?Sized,
{
    let s_first = queue.first_idx();
    let s_last = queue.nth_next_idx(s_first, n - 1);
    copy_count_from_range_to_range(queue, s_first, s_last, dest, d_first, d_last, n).copied
}

// ============================================================================
// DEQUEUE
// ============================================================================

pub fn dequeue_to<Q, D>(queue: &mut Q, count: usize, dest: &mut D) -> usize
where
    Q: Queue + ?Sized,
    D: Sequence<Item = Q::Item> + ?Sized,
{
    let n = peek_to(queue, count, dest);
    queue.increment_start(n);
    n
}

pub fn try_dequeue_to<Q, D>(queue: &mut Q, count: usize, dest: &mut D) -> bool
where
    Q: Queue + ?Sized,
    D: Sequence<Item = Q::Item> + ?Sized,
{
    if !try_peek_to(queue, count, dest) {
        return false;
    }
    queue.increment_start(count);
    true
}

pub fn dequeue_append_to<Q, D>(queue: &mut Q, count: usize, dest: &mut D) -> usize
where
    Q: Queue + ?Sized,
    D: GrowableSequence<Item = Q::Item> + ?Sized,
{
    let n = peek_append_to(queue, count, dest);
    queue.increment_start(n);
    n
}

pub fn try_dequeue_append_to<Q, D>(queue: &mut Q, count: usize, dest: &mut D) -> bool
where
    Q: Queue + ?Sized,
    D: GrowableSequence<Item = Q::Item> + ?Sized,
{
    if !try_peek_append_to(queue, count, dest) {
        return false;
    }
    queue.increment_start(count);
    true
}

pub fn dequeue_overwrite<Q, D>(queue: &mut Q, count: usize, dest: &mut D) -> usize
where
    Q: Queue + ?Sized,
    D: GrowableSequence<Item = Q::Item> + ?Sized,
{
    let n = peek_overwrite(queue, count, dest);
    queue.increment_start(n);
    n
}

pub fn try_dequeue_overwrite<Q, D>(queue: &mut Q, count: usize, dest: &mut D) -> bool
where
    Q: Queue + ?Sized,
    D: GrowableSequence<Item = Q::Item> + ?Sized,
{
    if !try_peek_overwrite(queue, count, dest) {
        return false;
    }
    queue.increment_start(count);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{FileOptions, FileSeq, VecSeq};
    use std::io::Cursor;

    #[test]
    fn dequeue_append_moves_front_elements() {
        let mut q = vec![1, 2, 3, 4, 5];
        let mut out = vec![0];
        {
            let mut queue = VecSeq::new(&mut q);
            let mut dest = VecSeq::new(&mut out);
            assert_eq!(dequeue_append_to(&mut queue, 2, &mut dest), 2);
            assert!(!try_dequeue_append_to(&mut queue, 4, &mut dest));
            assert_eq!(queue.len(), 3);
        }
        assert_eq!(q, vec![3, 4, 5]);
        assert_eq!(out, vec![0, 1, 2]);
    }

    #[test]
    fn peek_overwrite_replaces_dest() {
        let mut q = vec![7, 8, 9];
        let mut out = vec![1, 1, 1, 1];
        let queue = VecSeq::new(&mut q);
        assert_eq!(peek_overwrite(&queue, 2, &mut VecSeq::new(&mut out)), 2);
        assert_eq!(queue.len(), 3);
        assert_eq!(out, vec![7, 8]);
    }

    #[test]
    fn failed_overwrite_leaves_dest_intact() {
        let mut q = vec![1u8, 2, 3];
        let mut store = Cursor::new(vec![9u8, 9]);
        let opts = FileOptions {
            max_len: 2,
            ..FileOptions::default()
        };
        let mut queue = VecSeq::new(&mut q);
        let mut dest = FileSeq::with_options(&mut store, opts).unwrap();

        assert!(!try_peek_overwrite(&queue, 3, &mut dest));
        assert!(!try_dequeue_overwrite(&mut queue, 3, &mut dest));
        assert_eq!(queue.len(), 3);
        assert_eq!((dest.len(), dest.get(0), dest.get(1)), (2, 9, 9));

        assert!(try_dequeue_overwrite(&mut queue, 2, &mut dest));
        assert_eq!((dest.len(), dest.get(0), dest.get(1)), (2, 1, 2));
        assert_eq!(queue.len(), 1);
        drop(dest);
        assert_eq!(store.into_inner(), vec![1, 2]);
    }

    #[test]
    fn try_discard_requires_enough_elements() {
        let mut q = vec![1, 2];
        let mut queue = VecSeq::new(&mut q);
        assert!(!try_discard(&mut queue, 3));
        assert!(try_discard(&mut queue, 1));
        discard_all(&mut queue);
        assert!(queue.is_empty());
    }

    #[test]
    fn dequeue_to_overwrites_fixed_dest() {
        let mut q = vec![4, 5, 6];
        let mut out = vec![0, 0];
        let mut queue = VecSeq::new(&mut q);
        assert_eq!(dequeue_to(&mut queue, 5, &mut VecSeq::new(&mut out)), 2);
        assert_eq!(queue.len(), 1);
        drop(queue);
        assert_eq!(out, vec![4, 5]);
        assert_eq!(q, vec![6]);
    }
}
