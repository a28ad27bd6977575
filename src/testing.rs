//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It provides
//! a container whose indices are neither consecutive nor in logical order,
//! so that the generic (non-integral) paths of every algorithm get exercised.

#![doc(hidden)]

use crate::sequence::{GrowableSequence, Queue, Sequence};

const NIL: u32 = u32::MAX;

struct Node<T> {
    val: T,
    prev: u32,
    next: u32,
}

/// A doubly linked list in an arena. Indices are arena slots, so they say
/// nothing about position, and freed slots are reused.
///
/// Reports `PREFER_LINEAR_OPS`, so sorted search picks the linear strategy.
pub struct LinkedSeq<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<u32>,
    head: u32,
    tail: u32,
    len: usize,
}

impl<T> Default for LinkedSeq<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }
}

impl<T> LinkedSeq<T> {
    /// Build from `items`, allocating back to front so that arena slots run
    /// opposite to logical order.
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut list = Self::default();
        for val in items.into_iter().rev() {
            let idx = list.alloc(val);
            list.link_before(list.head, idx);
        }
        list
    }

    fn node(&self, idx: u32) -> Option<&Node<T>> {
        self.nodes.get(idx as usize)?.as_ref()
    }

    fn node_mut(&mut self, idx: u32) -> Option<&mut Node<T>> {
        self.nodes.get_mut(idx as usize)?.as_mut()
    }

    fn alloc(&mut self, val: T) -> u32 {
        let node = Some(Node {
            val,
            prev: NIL,
            next: NIL,
        });
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx as usize] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                (self.nodes.len() - 1) as u32
            }
        }
    }

    /// Link the detached node `idx` before `at`, or at the end if `at` is NIL.
    fn link_before(&mut self, at: u32, idx: u32) {
        let prev = if at == NIL {
            self.tail
        } else {
            self.node(at).map_or(NIL, |n| n.prev)
        };
        if let Some(n) = self.node_mut(idx) {
            n.prev = prev;
            n.next = at;
        }
        match self.node_mut(prev) {
            Some(n) => n.next = idx,
            None => self.head = idx,
        }
        match self.node_mut(at) {
            Some(n) => n.prev = idx,
            None => self.tail = idx,
        }
        self.len += 1;
    }

    fn unlink(&mut self, idx: u32) {
        let Some(node) = self.nodes.get_mut(idx as usize).and_then(Option::take) else {
            return;
        };
        match self.node_mut(node.prev) {
            Some(n) => n.next = node.next,
            None => self.head = node.next,
        }
        match self.node_mut(node.next) {
            Some(n) => n.prev = node.prev,
            None => self.tail = node.prev,
        }
        self.free.push(idx);
        self.len -= 1;
    }

    fn step(&self, idx: u32, forward: bool) -> u32 {
        self.node(idx)
            .map_or(NIL, |n| if forward { n.next } else { n.prev })
    }

    /// Steps from `first` to `last` plus one, or 0 if `last` is not reached.
    fn count_to(&self, first: u32, last: u32, stop: u32) -> usize {
        let mut idx = first;
        let mut n = 0;
        while self.node(idx).is_some() {
            n += 1;
            if idx == last {
                return n;
            }
            if idx == stop {
                break;
            }
            idx = self.step(idx, true);
        }
        0
    }
}

impl<T: Clone> LinkedSeq<T> {
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut idx = self.head;
        while let Some(n) = self.node(idx) {
            out.push(n.val.clone());
            idx = n.next;
        }
        out
    }
}

impl<T: Clone> Sequence for LinkedSeq<T> {
    type Item = T;
    type Idx = u32;
    type View<'a> = LinkedView<'a, T> where Self: 'a;

    const PREFER_LINEAR_OPS: bool = true;
    const CONSECUTIVE_INDEXES_IN_ORDER: bool = false;
    const ALL_INDEXES_LESS_THAN_LEN_VALID: bool = false;

    fn idx_valid(&self, idx: u32) -> bool {
        self.node(idx).is_some()
    }

    fn range_valid(&self, first: u32, last: u32) -> bool {
        self.count_to(first, last, NIL) > 0
    }

    fn split_range(&self, first: u32, last: u32) -> u32 {
        let n = self.len_between(first, last);
        self.nth_next_idx(first, n / 2)
    }

    fn get(&self, idx: u32) -> T {
        match self.node(idx) {
            Some(n) => n.val.clone(),
            None => panic!("LinkedSeq::get: index {} is not valid", idx),
        }
    }

    fn set(&mut self, idx: u32, val: T) {
        match self.node_mut(idx) {
            Some(n) => n.val = val,
            None => panic!("LinkedSeq::set: index {} is not valid", idx),
        }
    }

    fn first_idx(&self) -> u32 {
        self.head
    }

    fn last_idx(&self) -> u32 {
        self.tail
    }

    fn next_idx(&self, idx: u32) -> u32 {
        self.step(idx, true)
    }

    fn nth_next_idx(&self, mut idx: u32, n: usize) -> u32 {
        for _ in 0..n {
            idx = self.step(idx, true);
        }
        idx
    }

    fn prev_idx(&self, idx: u32) -> u32 {
        self.step(idx, false)
    }

    fn nth_prev_idx(&self, mut idx: u32, n: usize) -> u32 {
        for _ in 0..n {
            idx = self.step(idx, false);
        }
        idx
    }

    fn len(&self) -> usize {
        self.len
    }

    fn len_between(&self, first: u32, last: u32) -> usize {
        self.count_to(first, last, NIL)
    }

    fn slice(&mut self, first: u32, last: u32) -> LinkedView<'_, T> {
        LinkedView {
            list: self,
            first,
            last,
        }
    }
}

impl<T: Clone + Default> GrowableSequence for LinkedSeq<T> {
    fn try_ensure_free_slots(&mut self, n: usize) -> bool {
        let spare = self.free.len() + (self.nodes.capacity() - self.nodes.len());
        spare >= n || self.nodes.try_reserve(n - spare).is_ok()
    }

    fn insert_slots_assume_capacity(&mut self, idx: u32, count: usize) -> (u32, u32) {
        let (mut first, mut last) = (NIL, NIL);
        for _ in 0..count {
            let new = self.alloc(T::default());
            self.link_before(idx, new);
            if first == NIL {
                first = new;
            }
            last = new;
        }
        (first, last)
    }

    fn append_slots_assume_capacity(&mut self, count: usize) -> (u32, u32) {
        self.insert_slots_assume_capacity(NIL, count)
    }

    fn delete_range(&mut self, first: u32, last: u32) {
        let mut idx = first;
        loop {
            let next = self.step(idx, true);
            self.unlink(idx);
            if idx == last || next == NIL {
                break;
            }
            idx = next;
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    fn cap(&self) -> usize {
        self.nodes.capacity()
    }
}

impl<T: Clone> Queue for LinkedSeq<T> {
    fn increment_start(&mut self, n: usize) {
        for _ in 0..n.min(self.len) {
            self.unlink(self.head);
        }
    }
}

/// A window `[first, last]` of a [`LinkedSeq`].
pub struct LinkedView<'a, T> {
    list: &'a mut LinkedSeq<T>,
    first: u32,
    last: u32,
}

impl<T: Clone> Sequence for LinkedView<'_, T> {
    type Item = T;
    type Idx = u32;
    type View<'b> = LinkedView<'b, T> where Self: 'b;

    const PREFER_LINEAR_OPS: bool = true;
    const CONSECUTIVE_INDEXES_IN_ORDER: bool = false;
    const ALL_INDEXES_LESS_THAN_LEN_VALID: bool = false;

    fn idx_valid(&self, idx: u32) -> bool {
        self.list.count_to(self.first, idx, self.last) > 0
    }

    fn range_valid(&self, first: u32, last: u32) -> bool {
        self.idx_valid(first) && self.list.count_to(first, last, self.last) > 0
    }

    fn split_range(&self, first: u32, last: u32) -> u32 {
        self.list.split_range(first, last)
    }

    fn get(&self, idx: u32) -> T {
        self.list.get(idx)
    }

    fn set(&mut self, idx: u32, val: T) {
        self.list.set(idx, val);
    }

    fn first_idx(&self) -> u32 {
        self.first
    }

    fn last_idx(&self) -> u32 {
        self.last
    }

    fn next_idx(&self, idx: u32) -> u32 {
        if idx == self.last {
            NIL
        } else {
            self.list.next_idx(idx)
        }
    }

    fn nth_next_idx(&self, mut idx: u32, n: usize) -> u32 {
        for _ in 0..n {
            idx = self.next_idx(idx);
        }
        idx
    }

    fn prev_idx(&self, idx: u32) -> u32 {
        if idx == self.first {
            NIL
        } else {
            self.list.prev_idx(idx)
        }
    }

    fn nth_prev_idx(&self, mut idx: u32, n: usize) -> u32 {
        for _ in 0..n {
            idx = self.prev_idx(idx);
        }
        idx
    }

    fn len(&self) -> usize {
        self.list.len_between(self.first, self.last)
    }

    fn len_between(&self, first: u32, last: u32) -> usize {
        self.list.count_to(first, last, self.last)
    }

    fn slice(&mut self, first: u32, last: u32) -> LinkedView<'_, T> {
        LinkedView {
            list: &mut *self.list,
            first,
            last,
        }
    }
}
