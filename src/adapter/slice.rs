// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-length in-memory container.

use super::buffer;
use crate::contracts::check_range_valid;
use crate::sequence::{MemorySequence, Queue, Sequence};

enum Data<'a, T> {
    Owned(Vec<T>),
    Borrowed(&'a mut [T]),
}

/// A fixed-length sequence over a contiguous run of `T`.
///
/// Either owns its elements (`SliceSeq::new`) or borrows them
/// (`SliceSeq::borrowed`). It is also the `View` of every in-memory adapter.
/// `increment_start` hides elements from the front; nothing is freed.
pub struct SliceSeq<'a, T> {
    data: Data<'a, T>,
    head: usize,
}

impl<'a, T> SliceSeq<'a, T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            data: Data::Owned(items),
            head: 0,
        }
    }

    pub fn borrowed(items: &'a mut [T]) -> Self {
        Self {
            data: Data::Borrowed(items),
            head: 0,
        }
    }

    /// The logical contents, from the current first element.
    pub fn as_slice(&self) -> &[T] {
        &self.all()[self.head..]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let head = self.head;
        &mut self.all_mut()[head..]
    }

    fn all(&self) -> &[T] {
        match &self.data {
            Data::Owned(v) => v,
            Data::Borrowed(s) => s,
        }
    }

    fn all_mut(&mut self) -> &mut [T] {
        match &mut self.data {
            Data::Owned(v) => v,
            Data::Borrowed(s) => s,
        }
    }
}

impl<T: Clone> SliceSeq<'_, T> {
    /// The logical contents as a `Vec`. Borrowed contents are cloned.
    pub fn into_vec(self) -> Vec<T> {
        let head = self.head;
        match self.data {
            Data::Owned(mut v) => {
                v.drain(..head);
                v
            }
            Data::Borrowed(s) => s[head..].to_vec(),
        }
    }
}

impl<T> From<Vec<T>> for SliceSeq<'_, T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<'a, T> From<&'a mut [T]> for SliceSeq<'a, T> {
    fn from(items: &'a mut [T]) -> Self {
        Self::borrowed(items)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SliceSeq<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Clone> Sequence for SliceSeq<'_, T> {
    type Item = T;
    type Idx = usize;
    type View<'b> = SliceSeq<'b, T> where Self: 'b;

    contiguous_indexes!();

    #[inline]
    fn get(&self, idx: usize) -> T {
        self.as_slice()[idx].clone()
    }

    #[inline]
    fn set(&mut self, idx: usize, val: T) {
        self.as_mut_slice()[idx] = val;
    }

    #[inline]
    fn len(&self) -> usize {
        self.all().len() - self.head
    }

    fn slice(&mut self, first: usize, last: usize) -> SliceSeq<'_, T> {
        check_range_valid(self, first, last, "SliceSeq::slice");
        SliceSeq::borrowed(&mut self.as_mut_slice()[first..=last])
    }

    fn move_item(&mut self, old: usize, new: usize) {
        buffer::move_item(self.as_mut_slice(), old, new);
    }

    fn move_range(&mut self, first: usize, last: usize, new_first: usize) {
        buffer::move_range(self.as_mut_slice(), first, last, new_first);
    }
}

impl<T: Clone> Queue for SliceSeq<'_, T> {
    fn increment_start(&mut self, n: usize) {
        self.head += n.min(self.len());
    }
}

impl<T: Clone> MemorySequence for SliceSeq<'_, T> {
    type Ref<'b> = &'b T where Self: 'b;
    type RefMut<'b> = &'b mut T where Self: 'b;

    #[inline]
    fn get_ref(&self, idx: usize) -> &T {
        &self.as_slice()[idx]
    }

    #[inline]
    fn get_mut(&mut self, idx: usize) -> &mut T {
        &mut self.as_mut_slice()[idx]
    }
}
