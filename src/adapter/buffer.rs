//! Slice and `Vec` primitives shared by the in-memory adapters.
//!
//! Growable buffers keep a `head` offset: positions before it have been
//! discarded by `increment_start` but not yet compacted away.

/// Discarded front positions tolerated before compaction is considered.
const COMPACT_MIN: usize = 64;

/// Move `data[old]` to `new`, sliding the elements in between toward `old`.
pub(super) fn move_item<T>(data: &mut [T], old: usize, new: usize) {
    if old < new {
        data[old..=new].rotate_left(1);
    } else if new < old {
        data[new..=old].rotate_right(1);
    }
}

/// Relocate `data[first..=last]` so that it begins at `new_first`.
pub(super) fn move_range<T>(data: &mut [T], first: usize, last: usize, new_first: usize) {
    let block_len = last - first + 1;
    if new_first < first {
        data[new_first..=last].rotate_right(block_len);
    } else if new_first > first {
        data[first..new_first + block_len].rotate_left(block_len);
    }
}

pub(super) fn has_free_slots<T>(items: &mut Vec<T>, n: usize) -> bool {
    items.capacity() - items.len() >= n || items.try_reserve(n).is_ok()
}

pub(super) fn append_slots<T: Default>(items: &mut Vec<T>, head: usize, count: usize) -> (usize, usize) {
    let first = items.len() - head;
    items.resize_with(items.len() + count, T::default);
    (first, (first + count).wrapping_sub(1))
}

pub(super) fn insert_slots<T: Default>(
    items: &mut Vec<T>,
    head: usize,
    idx: usize,
    count: usize,
) -> (usize, usize) {
    let at = head + idx;
    items.splice(at..at, std::iter::repeat_with(T::default).take(count));
    (idx, (idx + count).wrapping_sub(1))
}

pub(super) fn delete_range<T>(items: &mut Vec<T>, head: usize, first: usize, last: usize) {
    items.drain(head + first..=head + last);
}

/// Advance `head` past `n` more elements, compacting once the discarded
/// prefix is both long and at least half the buffer.
pub(super) fn discard_front<T>(items: &mut Vec<T>, head: &mut usize, n: usize) {
    let n = n.min(items.len() - *head);
    *head += n;
    if *head == items.len() {
        items.clear();
        *head = 0;
    } else if *head >= COMPACT_MIN && *head * 2 >= items.len() {
        compact(items, head);
    }
}

pub(super) fn compact<T>(items: &mut Vec<T>, head: &mut usize) {
    if *head > 0 {
        items.drain(..*head);
        *head = 0;
    }
}
