//! Aliasing growable container.
//!
//! Every clone of a [`SharedSeq`] refers to the same buffer, so growth and
//! discards made through one handle are seen through all of them. Borrow
//! discipline is checked at runtime by `RefCell`: holding a [`SharedView`]
//! or an element guard while touching another handle panics.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use super::buffer;
use super::slice::SliceSeq;
use crate::contracts::{check_free_slots, check_range_valid};
use crate::sequence::{GrowableSequence, MemorySequence, Queue, Sequence};

struct Shared<T> {
    items: Vec<T>,
    head: usize,
}

pub struct SharedSeq<T> {
    buf: Rc<RefCell<Shared<T>>>,
}

impl<T> SharedSeq<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            buf: Rc::new(RefCell::new(Shared { items, head: 0 })),
        }
    }

    /// Whether `self` and `other` share one buffer.
    pub fn aliases(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.buf, &other.buf)
    }
}

impl<T: Clone> SharedSeq<T> {
    /// The logical contents, cloned out of the buffer.
    pub fn to_vec(&self) -> Vec<T> {
        let b = self.buf.borrow();
        b.items[b.head..].to_vec()
    }
}

impl<T> Clone for SharedSeq<T> {
    fn clone(&self) -> Self {
        Self {
            buf: Rc::clone(&self.buf),
        }
    }
}

impl<T> Default for SharedSeq<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedSeq<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let b = self.buf.borrow();
        f.debug_list().entries(&b.items[b.head..]).finish()
    }
}

impl<T: Clone> Sequence for SharedSeq<T> {
    type Item = T;
    type Idx = usize;
    type View<'a> = SharedView<'a, T> where Self: 'a;

    contiguous_indexes!();

    fn get(&self, idx: usize) -> T {
        let b = self.buf.borrow();
        b.items[b.head + idx].clone()
    }

    fn set(&mut self, idx: usize, val: T) {
        let mut b = self.buf.borrow_mut();
        let head = b.head;
        b.items[head + idx] = val;
    }

    fn len(&self) -> usize {
        let b = self.buf.borrow();
        b.items.len() - b.head
    }

    fn slice(&mut self, first: usize, last: usize) -> SharedView<'_, T> {
        check_range_valid(self, first, last, "SharedSeq::slice");
        let items = RefMut::map(self.buf.borrow_mut(), |b| {
            let head = b.head;
            &mut b.items[head + first..=head + last]
        });
        SharedView { items }
    }

    fn move_item(&mut self, old: usize, new: usize) {
        let mut b = self.buf.borrow_mut();
        let head = b.head;
        buffer::move_item(&mut b.items[head..], old, new);
    }

    fn move_range(&mut self, first: usize, last: usize, new_first: usize) {
        let mut b = self.buf.borrow_mut();
        let head = b.head;
        buffer::move_range(&mut b.items[head..], first, last, new_first);
    }
}

impl<T: Clone + Default> GrowableSequence for SharedSeq<T> {
    fn try_ensure_free_slots(&mut self, n: usize) -> bool {
        buffer::has_free_slots(&mut self.buf.borrow_mut().items, n)
    }

    fn insert_slots_assume_capacity(&mut self, idx: usize, count: usize) -> (usize, usize) {
        check_free_slots(self, count);
        let mut b = self.buf.borrow_mut();
        let head = b.head;
        buffer::insert_slots(&mut b.items, head, idx, count)
    }

    fn append_slots_assume_capacity(&mut self, count: usize) -> (usize, usize) {
        check_free_slots(self, count);
        let mut b = self.buf.borrow_mut();
        let head = b.head;
        buffer::append_slots(&mut b.items, head, count)
    }

    fn delete_range(&mut self, first: usize, last: usize) {
        check_range_valid(self, first, last, "SharedSeq::delete_range");
        let mut b = self.buf.borrow_mut();
        let head = b.head;
        buffer::delete_range(&mut b.items, head, first, last);
    }

    fn clear(&mut self) {
        let mut b = self.buf.borrow_mut();
        b.items.clear();
        b.head = 0;
    }

    fn cap(&self) -> usize {
        let b = self.buf.borrow();
        b.items.capacity() - b.head
    }
}

impl<T: Clone> Queue for SharedSeq<T> {
    fn increment_start(&mut self, n: usize) {
        let mut guard = self.buf.borrow_mut();
        let b = &mut *guard;
        buffer::discard_front(&mut b.items, &mut b.head, n);
    }
}

impl<T: Clone> MemorySequence for SharedSeq<T> {
    type Ref<'a> = Ref<'a, T> where Self: 'a;
    type RefMut<'a> = RefMut<'a, T> where Self: 'a;

    fn get_ref(&self, idx: usize) -> Ref<'_, T> {
        Ref::map(self.buf.borrow(), |b| &b.items[b.head + idx])
    }

    fn get_mut(&mut self, idx: usize) -> RefMut<'_, T> {
        RefMut::map(self.buf.borrow_mut(), |b| {
            let head = b.head;
            &mut b.items[head + idx]
        })
    }
}

/// A fixed-length window into a [`SharedSeq`]. Holds the buffer's mutable
/// borrow until dropped.
pub struct SharedView<'a, T> {
    items: RefMut<'a, [T]>,
}

impl<T: Clone> Sequence for SharedView<'_, T> {
    type Item = T;
    type Idx = usize;
    type View<'b> = SliceSeq<'b, T> where Self: 'b;

    contiguous_indexes!();

    #[inline]
    fn get(&self, idx: usize) -> T {
        self.items[idx].clone()
    }

    #[inline]
    fn set(&mut self, idx: usize, val: T) {
        self.items[idx] = val;
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn slice(&mut self, first: usize, last: usize) -> SliceSeq<'_, T> {
        check_range_valid(self, first, last, "SharedView::slice");
        SliceSeq::borrowed(&mut self.items[first..=last])
    }

    fn move_item(&mut self, old: usize, new: usize) {
        buffer::move_item(&mut self.items, old, new);
    }

    fn move_range(&mut self, first: usize, last: usize, new_first: usize) {
        buffer::move_range(&mut self.items, first, last, new_first);
    }
}

impl<T: Clone> MemorySequence for SharedView<'_, T> {
    type Ref<'b> = &'b T where Self: 'b;
    type RefMut<'b> = &'b mut T where Self: 'b;

    fn get_ref(&self, idx: usize) -> &T {
        &self.items[idx]
    }

    fn get_mut(&mut self, idx: usize) -> &mut T {
        &mut self.items[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_observe_growth_and_discard() {
        let mut a = SharedSeq::new(vec![1, 2, 3]);
        let b = a.clone();
        assert!(a.aliases(&b));

        assert!(a.try_ensure_free_slots(1));
        let (first, _) = a.append_slots_assume_capacity(1);
        a.set(first, 4);
        a.increment_start(1);

        assert_eq!(b.len(), 3);
        assert_eq!(b.to_vec(), vec![2, 3, 4]);
        assert!(!a.aliases(&SharedSeq::new(vec![2, 3, 4])));
    }

    #[test]
    fn view_writes_reach_every_handle() {
        let mut a = SharedSeq::new(vec!['a', 'b', 'c', 'd']);
        let b = a.clone();
        {
            let mut v = a.slice(1, 3);
            v.move_range(0, 0, 2);
            assert_eq!(v.get(2), 'b');
        }
        assert_eq!(b.to_vec(), vec!['a', 'c', 'd', 'b']);
    }

    #[test]
    fn guards_borrow_in_place() {
        let mut a = SharedSeq::new(vec![10, 20]);
        *a.get_mut(1) += 1;
        assert_eq!(*a.get_ref(1), 21);
    }

    #[test]
    #[should_panic]
    fn touching_buffer_while_view_alive_panics() {
        let mut a = SharedSeq::new(vec![1, 2]);
        let b = a.clone();
        let _v = a.slice(0, 1);
        let _ = b.get(0);
    }
}
