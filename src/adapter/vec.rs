//! Growable container over a caller's `Vec`.

use std::io;

use super::buffer;
use super::slice::SliceSeq;
use crate::contracts::{check_free_slots, check_range_valid};
use crate::sequence::{GrowableSequence, MemorySequence, Queue, Sequence};

/// A growable queue over a borrowed `Vec<T>`.
///
/// Discarding from the front moves a head offset instead of shifting. The
/// discarded prefix is compacted away once it dominates the buffer, and
/// always when the adapter is dropped, so the `Vec` holds exactly the
/// logical contents once the borrow ends.
///
/// ```
/// use seqlike::algo::{queue, sort};
/// use seqlike::VecSeq;
///
/// let mut v = vec![3, 1, 2, 0];
/// {
///     let mut s = VecSeq::new(&mut v);
///     queue::discard(&mut s, 1);
///     sort::insertion_sort_implicit(&mut s);
/// }
/// assert_eq!(v, [0, 1, 2]);
/// ```
pub struct VecSeq<'v, T> {
    items: &'v mut Vec<T>,
    head: usize,
}

impl<'v, T> VecSeq<'v, T> {
    pub fn new(items: &'v mut Vec<T>) -> Self {
        Self { items, head: 0 }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items[self.head..]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items[self.head..]
    }
}

impl<T> Drop for VecSeq<'_, T> {
    fn drop(&mut self) {
        buffer::compact(self.items, &mut self.head);
    }
}

impl<T: Clone> Sequence for VecSeq<'_, T> {
    type Item = T;
    type Idx = usize;
    type View<'b> = SliceSeq<'b, T> where Self: 'b;

    contiguous_indexes!();

    #[inline]
    fn get(&self, idx: usize) -> T {
        self.items[self.head + idx].clone()
    }

    #[inline]
    fn set(&mut self, idx: usize, val: T) {
        self.items[self.head + idx] = val;
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len() - self.head
    }

    fn slice(&mut self, first: usize, last: usize) -> SliceSeq<'_, T> {
        check_range_valid(self, first, last, "VecSeq::slice");
        SliceSeq::borrowed(&mut self.as_mut_slice()[first..=last])
    }

    fn move_item(&mut self, old: usize, new: usize) {
        buffer::move_item(self.as_mut_slice(), old, new);
    }

    fn move_range(&mut self, first: usize, last: usize, new_first: usize) {
        buffer::move_range(self.as_mut_slice(), first, last, new_first);
    }
}

impl<T: Clone + Default> GrowableSequence for VecSeq<'_, T> {
    fn try_ensure_free_slots(&mut self, n: usize) -> bool {
        buffer::has_free_slots(self.items, n)
    }

    fn insert_slots_assume_capacity(&mut self, idx: usize, count: usize) -> (usize, usize) {
        check_free_slots(self, count);
        buffer::insert_slots(self.items, self.head, idx, count)
    }

    fn append_slots_assume_capacity(&mut self, count: usize) -> (usize, usize) {
        check_free_slots(self, count);
        buffer::append_slots(self.items, self.head, count)
    }

    fn delete_range(&mut self, first: usize, last: usize) {
        check_range_valid(self, first, last, "VecSeq::delete_range");
        buffer::delete_range(self.items, self.head, first, last);
    }

    fn clear(&mut self) {
        self.items.clear();
        self.head = 0;
    }

    #[inline]
    fn cap(&self) -> usize {
        self.items.capacity() - self.head
    }
}

impl<T: Clone> Queue for VecSeq<'_, T> {
    fn increment_start(&mut self, n: usize) {
        buffer::discard_front(self.items, &mut self.head, n);
    }
}

impl<T: Clone> MemorySequence for VecSeq<'_, T> {
    type Ref<'b> = &'b T where Self: 'b;
    type RefMut<'b> = &'b mut T where Self: 'b;

    #[inline]
    fn get_ref(&self, idx: usize) -> &T {
        &self.items[self.head + idx]
    }

    #[inline]
    fn get_mut(&mut self, idx: usize) -> &mut T {
        &mut self.items[self.head + idx]
    }
}

/// Appends to the back.
impl io::Write for VecSeq<'_, u8> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.try_ensure_free_slots(buf.len()) {
            return Err(io::Error::new(io::ErrorKind::OutOfMemory, "cannot reserve buffer space"));
        }
        self.items.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Dequeues from the front.
impl io::Read for VecSeq<'_, u8> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.len());
        buf[..n].copy_from_slice(&self.as_slice()[..n]);
        self.increment_start(n);
        Ok(n)
    }
}
