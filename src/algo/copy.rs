//! Bounded element copy between two containers.
//!
//! Every variant reduces to [`copy_count_from_range_to_range`]: copy from a
//! source range into a destination range, stopping at whichever comes first
//! of the count, the end of either range, or an invalid index. The report
//! says which boundary was hit and where each side would continue, so callers
//! can compose "copy, then grow or shrink the remainder" without rescanning.

use serde::Serialize;

use crate::sequence::Sequence;

/// Outcome of a bounded copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CopyReport<SI, DI> {
    /// Elements written to the destination.
    pub copied: usize,
    /// No source element is left in the requested range.
    pub source_exhausted: bool,
    /// No destination slot is left in the requested range.
    pub dest_filled: bool,
    /// Next source index to read (invalid once the container is exhausted).
    pub next_source: SI,
    /// Next destination index to write.
    pub next_dest: DI,
}

/// Copy from the start of `source` to the start of `dest`.
pub fn copy<S, D>(source: &S, dest: &mut D) -> CopyReport<S::Idx, D::Idx>
where
    S: Sequence + ?Sized,
    D: Sequence<Item = S::Item> + ?Sized,
{
    let (s_first, s_last) = (source.first_idx(), source.last_idx());
    let (d_first, d_last) = (dest.first_idx(), dest.last_idx());
    copy_bounded(source, s_first, s_last, dest, d_first, d_last, None)
}

/// Copy at most `count` elements from the start of `source` to the start of
/// `dest`.
pub fn copy_count<S, D>(source: &S, dest: &mut D, count: usize) -> CopyReport<S::Idx, D::Idx>
where
    S: Sequence + ?Sized,
    D: Sequence<Item = S::Item> + ?Sized,
{
    let (s_first, s_last) = (source.first_idx(), source.last_idx());
    let (d_first, d_last) = (dest.first_idx(), dest.last_idx());
    copy_bounded(source, s_first, s_last, dest, d_first, d_last, Some(count))
}

/// Copy from `s_first` to the end of `source` into the start of `dest`.
pub fn copy_from_pos<S, D>(source: &S, s_first: S::Idx, dest: &mut D) -> CopyReport<S::Idx, D::Idx>
where
    S: Sequence + ?Sized,
    D: Sequence<Item = S::Item> + ?Sized,
{
    let s_last = source.last_idx();
    let (d_first, d_last) = (dest.first_idx(), dest.last_idx());
    copy_bounded(source, s_first, s_last, dest, d_first, d_last, None)
}

/// Copy all of `source` into `dest` starting at `d_first`.
pub fn copy_to_pos<S, D>(source: &S, dest: &mut D, d_first: D::Idx) -> CopyReport<S::Idx, D::Idx>
where
    S: Sequence + ?Sized,
    D: Sequence<Item = S::Item> + ?Sized,
{
    let (s_first, s_last) = (source.first_idx(), source.last_idx());
    let d_last = dest.last_idx();
    copy_bounded(source, s_first, s_last, dest, d_first, d_last, None)
}

/// Copy all of `source` into `[d_first, d_last]` of `dest`.
pub fn copy_to_range<S, D>(
    source: &S,
    dest: &mut D,
    d_first: D::Idx,
    d_last: D::Idx,
) -> CopyReport<S::Idx, D::Idx>
where
    S: Sequence + ?Sized,
    D: Sequence<Item = S::Item> + ?Sized,
{
    let (s_first, s_last) = (source.first_idx(), source.last_idx());
    copy_bounded(source, s_first, s_last, dest, d_first, d_last, None)
}

/// Copy `[s_first, s_last]` of `source` into the start of `dest`.
pub fn copy_from_range<S, D>(
    source: &S,
    s_first: S::Idx,
    s_last: S::Idx,
    dest: &mut D,
) -> CopyReport<S::Idx, D::Idx>
where
    S: Sequence + ?Sized,
    D: Sequence<Item = S::Item> + ?Sized,
{
    let (d_first, d_last) = (dest.first_idx(), dest.last_idx());
    copy_bounded(source, s_first, s_last, dest, d_first, d_last, None)
}

pub fn copy_from_range_to_range<S, D>(
    source: &S,
    s_first: S::Idx,
    s_last: S::Idx,
    dest: &mut D,
    d_first: D::Idx,
    d_last: D::Idx,
) -> CopyReport<S::Idx, D::Idx>
where
    S: Sequence + ?Sized,
    D: Sequence<Item = S::Item> + ?Sized,
{
    copy_bounded(source, s_first, s_last, dest, d_first, d_last, None)
}

/// The general form: at most `count` elements from `[s_first, s_last]` into
/// `[d_first, d_last]`.
pub fn copy_count_from_range_to_range<S, D>(
    source: &S,
    s_first: S::Idx,
    s_last: S::Idx,
    dest: &mut D,
    d_first: D::Idx,
    d_last: D::Idx,
    count: usize,
) -> CopyReport<S::Idx, D::Idx>
where
    S: Sequence + ?Sized,
    D: Sequence<Item = S::Item> + ?Sized,
{
    copy_bounded(source, s_first, s_last, dest, d_first, d_last, Some(count))
}

fn copy_bounded<S, D>(
    source: &S,
    s_first: S::Idx,
    s_last: S::Idx,
    dest: &mut D,
    d_first: D::Idx,
    d_last: D::Idx,
    limit: Option<usize>,
) -> CopyReport<S::Idx, D::Idx>
where
    S: Sequence + ?Sized,
    D: Sequence<Item = S::Item> + ?Sized,
{
    let mut report = CopyReport {
        copied: 0,
        source_exhausted: !source.idx_valid(s_first),
        dest_filled: !dest.idx_valid(d_first),
        next_source: s_first,
        next_dest: d_first,
    };

    while !report.source_exhausted && !report.dest_filled {
        if limit.is_some_and(|n| report.copied >= n) {
            break;
        }
        let (s, d) = (report.next_source, report.next_dest);
        dest.set(d, source.get(s));
        report.copied += 1;
        report.next_source = source.next_idx(s);
        report.next_dest = dest.next_idx(d);
        report.source_exhausted = s == s_last || !source.idx_valid(report.next_source);
        report.dest_filled = d == d_last || !dest.idx_valid(report.next_dest);
    }
    report
}
