//! Backend-agnostic algorithms over ordered, indexed containers.
//!
//! Algorithms are written once against a small set of capability traits and
//! run unchanged over in-memory buffers, aliasing shared buffers, and files.
//! A container only has to say how to step between its indices and how to
//! read and write one element. Everything else (copying, inserting, sorting,
//! sorted search, gathering) is built on that.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │  index.rs   │────▶│   sequence.rs    │◀────│    adapter/      │
//! │ (SeqIndex,  │     │ (Sequence,       │     │ (SliceSeq,       │
//! │  wrapping)  │     │  GrowableSeq,    │     │  VecSeq,         │
//! └─────────────┘     │  Queue, MemSeq)  │     │  SharedSeq,      │
//!                     └──────────────────┘     │  FileSeq)        │
//!                              │               └──────────────────┘
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            algo/                                │
//! │  seq · copy · list · queue · rotate · sort · search · swizzle   │
//! │  scalar · cast · visit                   (+ utf8 over bytes)    │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         contracts.rs                            │
//! │     debug-only checks of index validity, reservation, order     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Conventions
//!
//! | Form        | On a bad index or failed reservation                  |
//! |-------------|-------------------------------------------------------|
//! | `op`        | contract violation: debug panic, unspecified release  |
//! | `try_op`    | returns `false`/`None` and leaves the container alone |
//!
//! # Usage
//!
//! ```
//! use seqlike::adapter::VecSeq;
//! use seqlike::algo::{list, search};
//!
//! let mut v = vec![1, 4, 9];
//! {
//!     let mut s = VecSeq::new(&mut v);
//!     search::sorted_insert_implicit(&mut s, 5);
//!     list::append_values(&mut s, &[16, 25]);
//! }
//! assert_eq!(v, [1, 4, 5, 9, 16, 25]);
//! ```

pub mod adapter;
pub mod algo;
pub mod contracts;
mod error;
mod index;
mod sequence;
#[doc(hidden)]
pub mod testing;
pub mod utf8;

pub use adapter::{FileOptions, FileSeq, ReadPolicy, SharedSeq, SliceSeq, VecSeq};
pub use error::{IoOp, SeqError};
pub use index::SeqIndex;
pub use sequence::{GrowableQueue, GrowableSequence, MemorySequence, Queue, Sequence};
