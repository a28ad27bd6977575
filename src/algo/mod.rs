// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generic algorithms over the capability contracts.
//!
//! Every function here is a plain function of one or more containers passed
//! by reference. Nothing is cached between calls, and nothing knows which
//! adapter it runs against.
//!
//! | Module    | Needs                       | Provides                              |
//! |-----------|-----------------------------|---------------------------------------|
//! | `seq`     | `Sequence`                  | checked access, swap, reverse, fill   |
//! | `visit`   | `Sequence`                  | for-each, filter, map, accumulate     |
//! | `copy`    | `Sequence` x2               | bounded copy with continuation report |
//! | `rotate`  | `Sequence`                  | single-step shift, block rotation     |
//! | `list`    | `GrowableSequence`          | insert, delete, replace, push/pop     |
//! | `queue`   | `Queue`                     | discard, peek, dequeue                |
//! | `sort`    | `Sequence`                  | insertion sort, sortedness            |
//! | `search`  | `Sequence`                  | adaptive sorted search and insert     |
//! | `swizzle` | `Sequence` of `Sequence`s   | multi-source gather                   |
//! | `scalar`  | `Sequence` of numbers       | read-modify-write at an index         |
//! | `cast`    | `MemorySequence`            | checked same-size reinterpretation    |

pub mod cast;
pub mod copy;
pub mod list;
pub mod queue;
pub mod rotate;
pub mod scalar;
pub mod search;
pub mod seq;
pub mod sort;
pub mod swizzle;
pub mod visit;

pub use copy::CopyReport;
pub use search::{InsertPoint, Locate, SearchStrategy};
pub use swizzle::{SwizzleReport, SwizzleStop};
pub use visit::VisitReport;
