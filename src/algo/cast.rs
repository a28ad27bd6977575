//! Same-size reinterpretation of in-memory elements.
//!
//! Only for [`MemorySequence`] containers whose items are [`Pod`]. Every
//! cast is checked by `bytemuck`: a size mismatch (or, for the borrowing
//! forms, an alignment mismatch) returns `None`/`false` instead of
//! reinterpreting.

use bytemuck::{Pod, bytes_of, bytes_of_mut, try_cast, try_from_bytes, try_from_bytes_mut};

use crate::sequence::MemorySequence;

/// The element at `idx` read as a `U`.
pub fn get_cast<S, U>(seq: &S, idx: S::Idx) -> Option<U>
where
    S: MemorySequence + ?Sized,
    S::Item: Pod,
    U: Pod,
{
    try_cast(*seq.get_ref(idx)).ok()
}

/// Store the bits of `val` at `idx`.
pub fn set_cast<S, U>(seq: &mut S, idx: S::Idx, val: U) -> bool
where
    S: MemorySequence + ?Sized,
    S::Item: Pod,
    U: Pod,
{
    match try_cast::<U, S::Item>(val) {
        Ok(item) => {
            *seq.get_mut(idx) = item;
            true
        }
        Err(_) => false,
    }
}

/// Store the bits of `val` at `idx` and report whether they differ from
/// the bits that were there. `None` if the sizes differ.
pub fn set_cast_changed<S, U>(seq: &mut S, idx: S::Idx, val: U) -> Option<bool>
where
    S: MemorySequence + ?Sized,
    S::Item: Pod,
    U: Pod,
{
    let new_item = try_cast::<U, S::Item>(val).ok()?;
    let mut slot = seq.get_mut(idx);
    let changed = bytes_of(&*slot) != bytes_of(&new_item);
    *slot = new_item;
    Some(changed)
}

/// Borrow the element at `idx` as a `&U` for the duration of `f`.
pub fn with_cast_ref<S, U, R, F>(seq: &S, idx: S::Idx, f: F) -> Option<R>
where
    S: MemorySequence + ?Sized,
    S::Item: Pod,
    U: Pod,
    F: FnOnce(&U) -> R,
{
    let guard = seq.get_ref(idx);
    try_from_bytes::<U>(bytes_of(&*guard)).ok().map(f)
}

/// Borrow the element at `idx` as a `&mut U` for the duration of `f`.
pub fn with_cast_mut<S, U, R, F>(seq: &mut S, idx: S::Idx, f: F) -> Option<R>
where
    S: MemorySequence + ?Sized,
    S::Item: Pod,
    U: Pod,
    F: FnOnce(&mut U) -> R,
{
    let mut guard = seq.get_mut(idx);
    try_from_bytes_mut::<U>(bytes_of_mut(&mut *guard)).ok().map(f)
}
