// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Byte container over a positional byte store.
//!
//! Every element access is one single-byte I/O against the store. Insert and
//! delete shift bytes one at a time; `move_item`/`move_range` use the generic
//! walk and rotation. Nothing here is fast. It exists so that the same
//! algorithms run unchanged over storage that is not memory.
//!
//! # Failure handling
//!
//! The capability traits have no error channel, so I/O failures are
//! absorbed according to [`FileOptions`]:
//!
//! | Failure          | Outcome                                          |
//! |------------------|--------------------------------------------------|
//! | read error       | the byte reads as `0`                            |
//! | read past EOF    | `0` (`ZeroFill`) or the store's last byte (`Clamp`) |
//! | write error      | the write is dropped                             |
//! | resize error     | the store keeps its old length; the logical length still changes |
//!
//! Each failure is logged at `warn`, counted in
//! [`FileSeq::io_failures`], and kept as [`FileSeq::take_last_error`].

use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use crate::error::{IoOp, SeqError};
use crate::sequence::{GrowableSequence, Queue, Sequence};

/// A byte store addressable by absolute offset.
pub trait RandomAccess {
    /// Read into `buf` starting at `offset`. Returns the number of bytes
    /// read, `0` at or past the end.
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize>;

    /// Write all of `buf` at `offset`, extending the store if needed.
    fn write_at(&mut self, offset: u64, buf: &[u8]) -> io::Result<()>;

    fn byte_len(&mut self) -> io::Result<u64>;

    /// Truncate or zero-extend to exactly `len` bytes.
    fn set_byte_len(&mut self, len: u64) -> io::Result<()>;
}

impl RandomAccess for File {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        self.seek(SeekFrom::Start(offset))?;
        self.read(buf)
    }

    fn write_at(&mut self, offset: u64, buf: &[u8]) -> io::Result<()> {
        self.seek(SeekFrom::Start(offset))?;
        self.write_all(buf)
    }

    fn byte_len(&mut self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn set_byte_len(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

fn to_usize(offset: u64) -> io::Result<usize> {
    usize::try_from(offset).map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "offset exceeds address space"))
}

impl RandomAccess for Cursor<Vec<u8>> {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        let data = self.get_ref();
        let start = to_usize(offset)?.min(data.len());
        let n = buf.len().min(data.len() - start);
        buf[..n].copy_from_slice(&data[start..start + n]);
        Ok(n)
    }

    fn write_at(&mut self, offset: u64, buf: &[u8]) -> io::Result<()> {
        let start = to_usize(offset)?;
        let data = self.get_mut();
        let end = start + buf.len();
        if data.len() < end {
            data.resize(end, 0);
        }
        data[start..end].copy_from_slice(buf);
        Ok(())
    }

    fn byte_len(&mut self) -> io::Result<u64> {
        Ok(self.get_ref().len() as u64)
    }

    fn set_byte_len(&mut self, len: u64) -> io::Result<()> {
        let len = to_usize(len)?;
        self.get_mut().resize(len, 0);
        Ok(())
    }
}

/// What a read that cannot be satisfied returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadPolicy {
    #[default]
    ZeroFill,
    /// Past the end of the store, read the store's last byte instead.
    Clamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileOptions {
    pub read_policy: ReadPolicy,
    /// Bound on the store's byte length, discarded prefix included.
    /// `try_ensure_free_slots` refuses growth past it.
    pub max_len: usize,
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            read_policy: ReadPolicy::ZeroFill,
            max_len: usize::MAX,
        }
    }
}

/// A growable byte queue over a caller-owned store.
///
/// The store's first `start` bytes are discarded by `increment_start` and
/// never touched again. `cap() == len()`: growth is bounded only by
/// [`FileOptions::max_len`].
pub struct FileSeq<'f, F> {
    store: RefCell<&'f mut F>,
    start: u64,
    len: usize,
    opts: FileOptions,
    failures: Cell<u64>,
    last_error: RefCell<Option<SeqError>>,
}

impl<'f, F: RandomAccess> FileSeq<'f, F> {
    pub fn new(store: &'f mut F) -> Result<Self, SeqError> {
        Self::with_options(store, FileOptions::default())
    }

    pub fn with_options(store: &'f mut F, opts: FileOptions) -> Result<Self, SeqError> {
        let bytes = store.byte_len().map_err(|e| SeqError::io(IoOp::Stat, 0, &e))?;
        let len = usize::try_from(bytes)
            .ok()
            .filter(|&len| len <= opts.max_len)
            .ok_or_else(|| SeqError::CapacityExceeded {
                requested: usize::try_from(bytes).unwrap_or(usize::MAX),
                max: opts.max_len,
            })?;
        tracing::debug!(len, "opened file sequence");
        Ok(Self {
            store: RefCell::new(store),
            start: 0,
            len,
            opts,
            failures: Cell::new(0),
            last_error: RefCell::new(None),
        })
    }

    pub fn options(&self) -> FileOptions {
        self.opts
    }

    /// Bytes of the store discarded from the front.
    pub fn start_offset(&self) -> u64 {
        self.start
    }

    /// I/O failures absorbed since construction.
    pub fn io_failures(&self) -> u64 {
        self.failures.get()
    }

    pub fn take_last_error(&self) -> Option<SeqError> {
        self.last_error.borrow_mut().take()
    }

    fn pos(&self, idx: usize) -> u64 {
        self.start + idx as u64
    }

    fn record(&self, err: SeqError) {
        tracing::warn!(error = %err, "file sequence I/O failure");
        self.failures.set(self.failures.get() + 1);
        *self.last_error.borrow_mut() = Some(err);
    }

    fn read_byte(&self, pos: u64) -> u8 {
        let mut byte = [0u8];
        let result = self.store.borrow_mut().read_at(pos, &mut byte);
        match result {
            Ok(1) => byte[0],
            Ok(_) => {
                let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "read past end of store");
                self.record(SeqError::io(IoOp::Read, pos, &eof));
                match self.opts.read_policy {
                    ReadPolicy::ZeroFill => 0,
                    ReadPolicy::Clamp => self.read_last_byte(),
                }
            }
            Err(e) => {
                self.record(SeqError::io(IoOp::Read, pos, &e));
                0
            }
        }
    }

    fn read_last_byte(&self) -> u8 {
        let end = self.store.borrow_mut().byte_len();
        let end = match end {
            Ok(0) => return 0,
            Ok(end) => end,
            Err(e) => {
                self.record(SeqError::io(IoOp::Stat, 0, &e));
                return 0;
            }
        };
        let mut byte = [0u8];
        let result = self.store.borrow_mut().read_at(end - 1, &mut byte);
        match result {
            Ok(1) => byte[0],
            Ok(_) => 0,
            Err(e) => {
                self.record(SeqError::io(IoOp::Read, end - 1, &e));
                0
            }
        }
    }

    fn write_byte(&self, pos: u64, val: u8) {
        let result = self.store.borrow_mut().write_at(pos, &[val]);
        if let Err(e) = result {
            self.record(SeqError::io(IoOp::Write, pos, &e));
        }
    }

    fn resize_store(&self, len: usize) {
        let bytes = self.pos(len);
        let result = self.store.borrow_mut().set_byte_len(bytes);
        if let Err(e) = result {
            self.record(SeqError::io(IoOp::Resize, bytes, &e));
        }
    }

    /// Copy the byte at logical `from` to logical `to`.
    fn copy_byte(&self, from: usize, to: usize) {
        let val = self.read_byte(self.pos(from));
        self.write_byte(self.pos(to), val);
    }
}

impl<'f, F: RandomAccess> Sequence for FileSeq<'f, F> {
    type Item = u8;
    type Idx = usize;
    type View<'a> = FileView<'a, 'f, F> where Self: 'a;

    contiguous_indexes!();

    fn get(&self, idx: usize) -> u8 {
        self.read_byte(self.pos(idx))
    }

    fn set(&mut self, idx: usize, val: u8) {
        self.write_byte(self.pos(idx), val);
    }

    fn len(&self) -> usize {
        self.len
    }

    fn slice(&mut self, first: usize, last: usize) -> FileView<'_, 'f, F> {
        crate::contracts::check_range_valid(self, first, last, "FileSeq::slice");
        FileView {
            seq: self,
            offset: first,
            len: last - first + 1,
        }
    }
}

impl<F: RandomAccess> GrowableSequence for FileSeq<'_, F> {
    fn try_ensure_free_slots(&mut self, n: usize) -> bool {
        // The discarded prefix still occupies the store.
        let stored = usize::try_from(self.start).ok().and_then(|start| start.checked_add(self.len));
        match stored.and_then(|stored| stored.checked_add(n)) {
            Some(total) if total <= self.opts.max_len => true,
            _ => {
                tracing::debug!(start = self.start, len = self.len, n, max = self.opts.max_len, "file sequence growth refused");
                false
            }
        }
    }

    fn insert_slots_assume_capacity(&mut self, idx: usize, count: usize) -> (usize, usize) {
        let old_len = self.len;
        self.len += count;
        self.resize_store(self.len);
        for from in (idx..old_len).rev() {
            self.copy_byte(from, from + count);
        }
        (idx, (idx + count).wrapping_sub(1))
    }

    fn append_slots_assume_capacity(&mut self, count: usize) -> (usize, usize) {
        let first = self.len;
        self.len += count;
        self.resize_store(self.len);
        (first, (first + count).wrapping_sub(1))
    }

    fn delete_range(&mut self, first: usize, last: usize) {
        crate::contracts::check_range_valid(self, first, last, "FileSeq::delete_range");
        let n = last - first + 1;
        for from in last + 1..self.len {
            self.copy_byte(from, from - n);
        }
        self.len -= n;
        self.resize_store(self.len);
    }

    fn clear(&mut self) {
        self.len = 0;
        self.resize_store(0);
    }

    fn cap(&self) -> usize {
        self.len
    }
}

impl<F: RandomAccess> Queue for FileSeq<'_, F> {
    fn increment_start(&mut self, n: usize) {
        let n = n.min(self.len);
        self.start += n as u64;
        self.len -= n;
    }
}

/// A fixed-length window into a [`FileSeq`].
pub struct FileView<'a, 'f, F> {
    seq: &'a mut FileSeq<'f, F>,
    offset: usize,
    len: usize,
}

impl<'f, F: RandomAccess> Sequence for FileView<'_, 'f, F> {
    type Item = u8;
    type Idx = usize;
    type View<'b> = FileView<'b, 'f, F> where Self: 'b;

    contiguous_indexes!();

    fn get(&self, idx: usize) -> u8 {
        self.seq.get(self.offset + idx)
    }

    fn set(&mut self, idx: usize, val: u8) {
        self.seq.set(self.offset + idx, val);
    }

    fn len(&self) -> usize {
        self.len
    }

    fn slice(&mut self, first: usize, last: usize) -> FileView<'_, 'f, F> {
        crate::contracts::check_range_valid(self, first, last, "FileView::slice");
        FileView {
            seq: &mut *self.seq,
            offset: self.offset + first,
            len: last - first + 1,
        }
    }
}

impl<F: RandomAccess> Queue for FileView<'_, '_, F> {
    fn increment_start(&mut self, n: usize) {
        let n = n.min(self.len);
        self.offset += n;
        self.len -= n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::list;

    fn bytes(seq: &FileSeq<'_, Cursor<Vec<u8>>>) -> Vec<u8> {
        (0..seq.len()).map(|i| seq.get(i)).collect()
    }

    /// Fails every write once armed.
    struct Flaky {
        inner: Cursor<Vec<u8>>,
        fail_writes: bool,
    }

    impl RandomAccess for Flaky {
        fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read_at(offset, buf)
        }

        fn write_at(&mut self, offset: u64, buf: &[u8]) -> io::Result<()> {
            if self.fail_writes {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            self.inner.write_at(offset, buf)
        }

        fn byte_len(&mut self) -> io::Result<u64> {
            self.inner.byte_len()
        }

        fn set_byte_len(&mut self, len: u64) -> io::Result<()> {
            self.inner.set_byte_len(len)
        }
    }

    #[test]
    fn insert_and_delete_shift_bytes() {
        let mut store = Cursor::new(b"abef".to_vec());
        let mut seq = FileSeq::new(&mut store).unwrap();
        assert!(list::try_insert_values(&mut seq, 2, b"cd"));
        assert_eq!(bytes(&seq), b"abcdef");
        list::delete_range(&mut seq, 0, 1);
        assert_eq!(bytes(&seq), b"cdef");
        drop(seq);
        assert_eq!(store.into_inner(), b"cdef");
    }

    #[test]
    fn discarded_front_stays_in_store() {
        let mut store = Cursor::new(b"xyz".to_vec());
        let mut seq = FileSeq::new(&mut store).unwrap();
        seq.increment_start(1);
        assert_eq!(seq.start_offset(), 1);
        assert_eq!(bytes(&seq), b"yz");
        seq.clear();
        assert!(seq.is_empty());
        drop(seq);
        assert_eq!(store.into_inner(), b"x");
    }

    #[test]
    fn view_is_offset_window() {
        let mut store = Cursor::new(b"012345".to_vec());
        let mut seq = FileSeq::new(&mut store).unwrap();
        let mut view = seq.slice(2, 4);
        assert_eq!(view.get(0), b'2');
        view.increment_start(1);
        view.set(0, b'X');
        let inner = view.slice(1, 1);
        assert_eq!(inner.get(0), b'4');
        assert_eq!(bytes(&seq), b"012X45");
    }

    #[test]
    fn read_policies_past_end() {
        let mut store = Cursor::new(b"ab".to_vec());
        let seq = FileSeq::new(&mut store).unwrap();
        assert_eq!(seq.read_byte(5), 0);
        assert_eq!(seq.io_failures(), 1);
        assert!(matches!(
            seq.take_last_error(),
            Some(SeqError::Io { op: IoOp::Read, offset: 5, .. })
        ));
        assert_eq!(seq.take_last_error(), None);

        let opts = FileOptions {
            read_policy: ReadPolicy::Clamp,
            ..FileOptions::default()
        };
        let mut store = Cursor::new(b"ab".to_vec());
        let seq = FileSeq::with_options(&mut store, opts).unwrap();
        assert_eq!(seq.read_byte(9), b'b');
    }

    #[test]
    fn failed_writes_are_dropped_and_counted() {
        let mut store = Flaky {
            inner: Cursor::new(vec![1, 2, 3]),
            fail_writes: false,
        };
        let mut seq = FileSeq::new(&mut store).unwrap();
        seq.set(0, 9);
        seq.store.borrow_mut().fail_writes = true;
        seq.set(1, 9);
        assert_eq!((seq.get(0), seq.get(1)), (9, 2));
        assert_eq!(seq.io_failures(), 1);
    }

    #[test]
    fn max_len_counts_discarded_prefix() {
        let opts = FileOptions {
            max_len: 4,
            ..FileOptions::default()
        };
        let mut store = Cursor::new(vec![1u8, 2, 3, 4]);
        let mut seq = FileSeq::with_options(&mut store, opts).unwrap();
        seq.increment_start(2);
        assert_eq!(seq.len(), 2);
        assert!(seq.try_ensure_free_slots(0));
        assert!(!list::try_push(&mut seq, 5));
        assert_eq!(bytes(&seq), vec![3, 4]);
        drop(seq);
        assert_eq!(store.into_inner().len(), 4);
    }

    #[test]
    fn max_len_bounds_growth() {
        let opts = FileOptions {
            max_len: 4,
            ..FileOptions::default()
        };
        let mut store = Cursor::new(vec![0u8; 3]);
        let mut seq = FileSeq::with_options(&mut store, opts).unwrap();
        assert!(seq.try_ensure_free_slots(1));
        assert!(!seq.try_ensure_free_slots(2));
        assert!(list::try_push(&mut seq, 7));
        assert!(!list::try_push(&mut seq, 8));
        assert_eq!(bytes(&seq), vec![0, 0, 0, 7]);

        let mut big = Cursor::new(vec![0u8; 5]);
        assert!(matches!(
            FileSeq::with_options(&mut big, opts),
            Err(SeqError::CapacityExceeded { requested: 5, max: 4 })
        ));
    }
}
