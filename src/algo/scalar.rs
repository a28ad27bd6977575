//! Read-modify-write of numeric elements at an index.
//!
//! Each operator comes as a pair: `get_*` returns `seq[idx] op rhs`, and
//! `set_*` writes it back. Comparisons have a single-index form against a
//! value and a two-index `*2` form.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Sub};

use num_traits::{Float, PrimInt, Zero};

use crate::sequence::Sequence;

macro_rules! binary_op_at {
    ($(#[$doc:meta])* $get:ident, $set:ident, $bound:path, $op:tt) => {
        $(#[$doc])*
        #[inline]
        pub fn $get<S>(seq: &S, idx: S::Idx, rhs: S::Item) -> S::Item
        where
            S: Sequence + ?Sized,
            S::Item: $bound,
        {
            seq.get(idx) $op rhs
        }

        $(#[$doc])*
        #[inline]
        pub fn $set<S>(seq: &mut S, idx: S::Idx, rhs: S::Item)
        where
            S: Sequence + ?Sized,
            S::Item: $bound,
        {
            let val = seq.get(idx) $op rhs;
            seq.set(idx, val);
        }
    };
}

binary_op_at!(get_add, set_add, Add<Output = S::Item>, +);
binary_op_at!(get_subtract, set_subtract, Sub<Output = S::Item>, -);
binary_op_at!(get_multiply, set_multiply, Mul<Output = S::Item>, *);
binary_op_at!(
    /// Integer division truncates; division by zero panics as `/` does.
    get_divide, set_divide, Div<Output = S::Item>, /
);
binary_op_at!(get_bit_and, set_bit_and, BitAnd<Output = S::Item>, &);
binary_op_at!(get_bit_or, set_bit_or, BitOr<Output = S::Item>, |);
binary_op_at!(get_bit_xor, set_bit_xor, BitXor<Output = S::Item>, ^);
binary_op_at!(
    /// Integer remainder, sign of the dividend.
    get_modulo, set_modulo, PrimInt, %
);
binary_op_at!(
    /// Floating remainder, sign of the dividend (C `fmod`).
    get_fmodulo, set_fmodulo, Float, %
);

/// `(v % m, v - v % m)`: the remainder and the largest multiple of `m` not
/// past `v` toward zero.
pub fn get_mod_rem<S>(seq: &S, idx: S::Idx, m: S::Item) -> (S::Item, S::Item)
where
    S: Sequence + ?Sized,
    S::Item: PrimInt,
{
    let v = seq.get(idx);
    let rem = v % m;
    (rem, v - rem)
}

pub fn get_fmod_rem<S>(seq: &S, idx: S::Idx, m: S::Item) -> (S::Item, S::Item)
where
    S: Sequence + ?Sized,
    S::Item: Float,
{
    let v = seq.get(idx);
    let rem = v % m;
    (rem, v - rem)
}

pub fn get_bit_invert<S>(seq: &S, idx: S::Idx) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Not<Output = S::Item>,
{
    !seq.get(idx)
}

pub fn set_bit_invert<S>(seq: &mut S, idx: S::Idx)
where
    S: Sequence + ?Sized,
    S::Item: Not<Output = S::Item>,
{
    let val = !seq.get(idx);
    seq.set(idx, val);
}

/// Bit width of `T`.
#[inline]
fn width<T: PrimInt>() -> u32 {
    T::zero().count_zeros()
}

/// Shifting every bit out yields zero.
pub fn get_shl<S>(seq: &S, idx: S::Idx, bits: u32) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: PrimInt,
{
    if bits >= width::<S::Item>() {
        return S::Item::zero();
    }
    seq.get(idx) << bits as usize
}

pub fn set_shl<S>(seq: &mut S, idx: S::Idx, bits: u32)
where
    S: Sequence + ?Sized,
    S::Item: PrimInt,
{
    let val = get_shl(seq, idx, bits);
    seq.set(idx, val);
}

/// Arithmetic for signed items: shifting every bit out yields `-1` for a
/// negative value and zero otherwise.
pub fn get_shr<S>(seq: &S, idx: S::Idx, bits: u32) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: PrimInt,
{
    let v = seq.get(idx);
    if bits >= width::<S::Item>() {
        return if v < S::Item::zero() { !S::Item::zero() } else { S::Item::zero() };
    }
    v >> bits as usize
}

pub fn set_shr<S>(seq: &mut S, idx: S::Idx, bits: u32)
where
    S: Sequence + ?Sized,
    S::Item: PrimInt,
{
    let val = get_shr(seq, idx, bits);
    seq.set(idx, val);
}

// ============================================================================
// COMPARISONS
// ============================================================================

macro_rules! compare_at {
    ($one:ident, $two:ident, $bound:ident, $op:tt) => {
        #[inline]
        pub fn $one<S>(seq: &S, idx: S::Idx, val: &S::Item) -> bool
        where
            S: Sequence + ?Sized,
            S::Item: $bound,
        {
            seq.get(idx) $op *val
        }

        #[inline]
        pub fn $two<S>(seq: &S, a: S::Idx, b: S::Idx) -> bool
        where
            S: Sequence + ?Sized,
            S::Item: $bound,
        {
            seq.get(a) $op seq.get(b)
        }
    };
}

compare_at!(lt, lt2, PartialOrd, <);
compare_at!(le, le2, PartialOrd, <=);
compare_at!(gt, gt2, PartialOrd, >);
compare_at!(ge, ge2, PartialOrd, >=);
compare_at!(eq, eq2, PartialEq, ==);
compare_at!(ne, ne2, PartialEq, !=);

// ============================================================================
// MIN / MAX / CLAMP
// ============================================================================

/// Smallest element among the indices listed in `indexes`. `None` if the
/// index set is empty.
pub fn min_of<S, I>(seq: &S, indexes: &I) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
    I: Sequence<Item = S::Idx> + ?Sized,
{
    fold_indexes(seq, indexes, std::cmp::min)
}

pub fn max_of<S, I>(seq: &S, indexes: &I) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
    I: Sequence<Item = S::Idx> + ?Sized,
{
    fold_indexes(seq, indexes, std::cmp::max)
}

/// `seq[target] = min_of(indexes)`. Returns false, writing nothing, when the
/// index set is empty.
pub fn set_min_of<S, I>(seq: &mut S, target: S::Idx, indexes: &I) -> bool
where
    S: Sequence + ?Sized,
    S::Item: Ord,
    I: Sequence<Item = S::Idx> + ?Sized,
{
    match min_of(seq, indexes) {
        Some(val) => {
            seq.set(target, val);
            true
        }
        None => false,
    }
}

pub fn set_max_of<S, I>(seq: &mut S, target: S::Idx, indexes: &I) -> bool
where
    S: Sequence + ?Sized,
    S::Item: Ord,
    I: Sequence<Item = S::Idx> + ?Sized,
{
    match max_of(seq, indexes) {
        Some(val) => {
            seq.set(target, val);
            true
        }
        None => false,
    }
}

fn fold_indexes<S, I, F>(seq: &S, indexes: &I, pick: F) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    I: Sequence<Item = S::Idx> + ?Sized,
    F: Fn(S::Item, S::Item) -> S::Item,
{
    let mut i = indexes.first_idx();
    if !indexes.idx_valid(i) {
        return None;
    }
    let mut acc = seq.get(indexes.get(i));
    i = indexes.next_idx(i);
    while indexes.idx_valid(i) {
        acc = pick(acc, seq.get(indexes.get(i)));
        i = indexes.next_idx(i);
    }
    Some(acc)
}

/// `min(hi, max(seq[idx], lo))`
pub fn get_clamped<S>(seq: &S, idx: S::Idx, lo: S::Item, hi: S::Item) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    let v = seq.get(idx);
    let v = if v < lo { lo } else { v };
    if v > hi {
        hi
    } else {
        v
    }
}

pub fn set_clamped<S>(seq: &mut S, idx: S::Idx, lo: S::Item, hi: S::Item)
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    let val = get_clamped(seq, idx, lo, hi);
    seq.set(idx, val);
}

/// Write `val` and report whether it differs from what was there.
pub fn set_changed<S>(seq: &mut S, idx: S::Idx, val: S::Item) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    let old = seq.get(idx);
    let changed = old != val;
    seq.set(idx, val);
    changed
}
