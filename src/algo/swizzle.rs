//! Multi-source gather.
//!
//! A *source set* is a sequence whose items are themselves sequences.
//! Selectors name which source (and, in pair mode, which element of it)
//! feeds each destination slot, in selector order.
//!
//! Items of the source set are read with `get`, which clones. Use cheaply
//! cloned sources such as [`SharedSeq`](crate::adapter::SharedSeq).

use serde::Serialize;

use crate::sequence::Sequence;

/// Why a gather stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SwizzleStop {
    SelectorsExhausted,
    DestFilled,
    CountReached,
    /// A selector named a source that does not exist.
    InvalidSelector,
    /// A selector named an element its source does not have.
    InvalidIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwizzleReport {
    pub gathered: usize,
    pub selectors_exhausted: bool,
    pub dest_filled: bool,
    pub stop: SwizzleStop,
}

/// Gather `sources[sel][idx]` for every `(sel, idx)` pair into `dest`.
pub fn swizzle<SS, Sel, D>(sources: &SS, selectors: &Sel, dest: &mut D) -> SwizzleReport
where
    SS: Sequence + ?Sized,
    SS::Item: Sequence<Item = D::Item>,
    Sel: Sequence<Item = (SS::Idx, <SS::Item as Sequence>::Idx)> + ?Sized,
    D: Sequence + ?Sized,
{
    gather(sources, selectors, dest, None, |_, (sel, idx)| (sel, Within::At(idx)))
}

/// Like [`swizzle`], gathering at most `count` elements.
pub fn swizzle_count<SS, Sel, D>(sources: &SS, selectors: &Sel, dest: &mut D, count: usize) -> SwizzleReport
where
    SS: Sequence + ?Sized,
    SS::Item: Sequence<Item = D::Item>,
    Sel: Sequence<Item = (SS::Idx, <SS::Item as Sequence>::Idx)> + ?Sized,
    D: Sequence + ?Sized,
{
    gather(sources, selectors, dest, Some(count), |_, (sel, idx)| (sel, Within::At(idx)))
}

/// Positional gather: output position `n` takes element `n` of the source
/// named by selector `n`. Interleaves lanes, e.g. picking channels out of
/// several equally long buffers.
pub fn swizzle_lanes<SS, Sel, D>(sources: &SS, selectors: &Sel, dest: &mut D) -> SwizzleReport
where
    SS: Sequence + ?Sized,
    SS::Item: Sequence<Item = D::Item>,
    Sel: Sequence<Item = SS::Idx> + ?Sized,
    D: Sequence + ?Sized,
{
    gather(sources, selectors, dest, None, |n, sel| (sel, Within::Nth(n)))
}

/// Position within the selected source.
enum Within<I> {
    At(I),
    /// The `n`th element, resolved once the source is fetched.
    Nth(usize),
}

fn gather<SS, Sel, D, F>(
    sources: &SS,
    selectors: &Sel,
    dest: &mut D,
    limit: Option<usize>,
    split: F,
) -> SwizzleReport
where
    SS: Sequence + ?Sized,
    SS::Item: Sequence<Item = D::Item>,
    Sel: Sequence + ?Sized,
    D: Sequence + ?Sized,
    F: Fn(usize, Sel::Item) -> (SS::Idx, Within<<SS::Item as Sequence>::Idx>),
{
    let mut sel_idx = selectors.first_idx();
    let mut dest_idx = dest.first_idx();
    let mut gathered = 0usize;

    let stop = loop {
        if !selectors.idx_valid(sel_idx) {
            break SwizzleStop::SelectorsExhausted;
        }
        if !dest.idx_valid(dest_idx) {
            break SwizzleStop::DestFilled;
        }
        if limit.is_some_and(|n| gathered >= n) {
            break SwizzleStop::CountReached;
        }
        let (which, within) = split(gathered, selectors.get(sel_idx));
        if !sources.idx_valid(which) {
            break SwizzleStop::InvalidSelector;
        }
        let source = sources.get(which);
        let elem = match within {
            Within::At(idx) => idx,
            Within::Nth(n) => source.nth_next_idx(source.first_idx(), n),
        };
        if !source.idx_valid(elem) {
            break SwizzleStop::InvalidIndex;
        }
        dest.set(dest_idx, source.get(elem));
        gathered += 1;
        sel_idx = selectors.next_idx(sel_idx);
        dest_idx = dest.next_idx(dest_idx);
    };

    SwizzleReport {
        gathered,
        selectors_exhausted: !selectors.idx_valid(sel_idx),
        dest_filled: !dest.idx_valid(dest_idx),
        stop,
    }
}
